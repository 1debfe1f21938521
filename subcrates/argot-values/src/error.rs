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

use crate::value::Type;
use thiserror::Error;

/// ValueError represents the errors which can come up while converting raw
/// command-line strings into typed values, or extracting typed values back out
/// of parsed results.
#[derive(Debug, Error)]
pub enum ValueError {
    /// A raw string could not be converted to the requested type.
    #[error("Invalid {value_type} value '{value}'")]
    Conversion {
        /// The raw string which failed to convert.
        value: String,
        /// The type we tried to convert it to.
        value_type: Type,
    },
    /// A parsed value was extracted as some type it doesn't hold.
    #[error("Expected {expected} value, found '{found}'")]
    WrongType {
        /// The name of the type the caller asked for.
        expected: &'static str,
        /// The value which was actually stored.
        found: String,
    },
}

/// A Result type which uses ValueError as its error type.
pub type ValueResult<T> = Result<T, ValueError>;
