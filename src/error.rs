// Copyright 2015 Axel Rasmussen
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use argot_values::error::ValueError;
use thiserror::Error;

/// Error represents the various errors which can come up while building a
/// parser schema or parsing command-line arguments with it.
#[derive(Debug, Error)]
pub enum Error {
    /// A raw argument could not be converted to its declared type.
    #[error("{0}")]
    Conversion(#[from] ValueError),
    /// A value was not one of the declared choices.
    #[error("Invalid choice for {name}: {value}")]
    InvalidChoice {
        /// The flag or positional the value was given for.
        name: String,
        /// The offending value.
        value: String,
    },
    /// An I/O error, generally encountered when writing help or error output.
    #[error("{0}")]
    Io(#[from] std::io::Error),
    /// A flag which takes a value was given without one.
    #[error("Argument {0} requires a value")]
    MissingValue(String),
    /// A required flag had no value after parsing.
    #[error("Required argument: --{0}")]
    RequiredArgument(String),
    /// The parser schema is invalid, e.g. because two flags share a name.
    #[error("Invalid schema: {0}")]
    Schema(String),
    /// A flag was given which the schema doesn't define.
    #[error("Unknown argument: {0}")]
    UnknownArgument(String),
}

/// A Result type which uses argot's internal Error type.
pub type Result<T> = std::result::Result<T, Error>;
