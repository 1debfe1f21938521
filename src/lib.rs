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

#![deny(
    anonymous_parameters,
    missing_docs,
    trivial_casts,
    trivial_numeric_casts,
    unused_extern_crates,
    unused_import_braces
)]
#![warn(bare_trait_objects, unreachable_pub, unused_qualifications)]

//! argot parses command-line arguments according to a declarative schema of
//! flags and positional arguments, producing typed and validated values.
//!
//! A `Parser` is built up front, and then `Parser::parse` can be called with
//! any list of arguments. The process' own arguments are only read by
//! `main_impl`, which is also the only thing which exits the process.

/// error defines the errors which can occur while building a schema or
/// parsing arguments.
pub mod error;
/// help renders human-readable usage information for a Parser.
pub mod help;
/// main_impl provides a ready-made entry point for command-line programs,
/// which handles printing errors and help and choosing an exit code.
#[cfg(feature = "cli")]
pub mod main_impl;
/// parse implements matching command-line arguments against a Parser.
pub mod parse;
/// parsed defines the read-only view over parsed argument values.
pub mod parsed;
/// spec defines the schema types: flags, positional arguments, and the
/// Parser which holds them.
pub mod spec;

#[cfg(test)]
mod tests;

// Re-export most commonly used symbols, to allow using this library with just
// one "use".

pub use crate::error::{Error, Result};
pub use crate::parse::ParseOutcome;
pub use crate::parsed::{Field, ParsedArgs};
pub use crate::spec::{Action, Flag, Nargs, Parser, Positional};
pub use argot_values::value::{convert, FromValue, Type, Value};
