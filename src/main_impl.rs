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

use crate::error::*;
use crate::help;
use crate::parse::ParseOutcome;
use crate::parsed::ParsedArgs;
use crate::spec::Parser;
use log::debug;
use std::env;
use std::fmt::{Debug, Display};
use std::io::{self, Write};
use std::process;

/// The integer which is returned from main() if the program exits successfully.
pub const EXIT_SUCCESS: i32 = 0;
/// The integer which is returned from main() if the program exits with any
/// error.
pub const EXIT_FAILURE: i32 = 1;

/// An alias for Result, which has an arbitrary Error type. This is used to
/// denote the actual Result returned by a caller-provided callback.
pub type CommandResult<E> = std::result::Result<(), E>;

/// Execution describes what happened when parsing arguments and (maybe)
/// calling into the program's implementation.
#[derive(Debug)]
pub enum Execution<E> {
    /// The arguments were valid, and the callback was called with them.
    Executed(CommandResult<E>),
    /// Help was requested, and has been written out. The callback was not
    /// called.
    HelpShown,
    /// The arguments were invalid. The error and help text have been written
    /// out, and the callback was not called.
    InvalidArguments,
}

/// This function parses the given arguments with the given parser, and then
/// calls the callback with the parsed values.
///
/// If help is requested, it is written to `help_writer` instead of calling the
/// callback. If the arguments are invalid, the error and then the help text
/// are written to `error_writer`. The returned Error is only for things like
/// failing to write that output.
pub fn parse_and_execute<E, H, W, F>(
    parser: &Parser,
    args: &[String],
    mut help_writer: Option<H>,
    mut error_writer: Option<W>,
    callback: F,
) -> Result<Execution<E>>
where
    H: Write,
    W: Write,
    F: FnOnce(ParsedArgs) -> CommandResult<E>,
{
    let parsed = match parser.parse(args) {
        Ok(ParseOutcome::Parsed(parsed)) => parsed,
        Ok(ParseOutcome::Help) => {
            if let Some(f) = help_writer.as_mut() {
                help::write_help(f, parser)?;
            }
            return Ok(Execution::HelpShown);
        }
        Err(e) => {
            debug!("Parsing arguments failed: {:?}", e);
            if let Some(f) = error_writer.as_mut() {
                f.write_fmt(format_args!("Error: {}\n", e))?;
                help::write_help(f, parser)?;
            }
            return Ok(Execution::InvalidArguments);
        }
    };

    Ok(Execution::Executed(callback(parsed)))
}

/// This is a utility function, which handles the result of
/// `parse_and_execute`. The *outer* Result being an Err means that something
/// went wrong internally (e.g. help text couldn't be written). The `Execution`
/// wraps the Result returned by the caller-provided callback itself.
///
/// Any error is printed to standard error, and the appropriate exit code
/// (EXIT_SUCCESS or EXIT_FAILURE) is returned.
pub fn handle_result<E: Display + Debug>(r: Result<Execution<E>>) -> i32 {
    match r {
        Ok(Execution::Executed(Ok(_))) => EXIT_SUCCESS,
        Ok(Execution::HelpShown) => EXIT_SUCCESS,
        // The error was already reported, along with help text.
        Ok(Execution::InvalidArguments) => EXIT_FAILURE,
        Ok(Execution::Executed(Err(e))) => {
            eprintln!(
                "{}",
                match cfg!(debug_assertions) {
                    false => e.to_string(),
                    true => format!("{:?}", e),
                }
            );
            EXIT_FAILURE
        }
        Err(e) => {
            eprintln!(
                "Error parsing command-line arguments: {}",
                match cfg!(debug_assertions) {
                    false => e.to_string(),
                    true => format!("{:?}", e),
                },
            );
            EXIT_FAILURE
        }
    }
}

/// Parses this process' command-line arguments with the given parser, and
/// calls the given callback with the parsed values.
///
/// If the parser has no program name, the name this process was invoked with
/// is used in help text.
///
/// This function exits this process with an appropriate exit code. Like
/// `std::process::exit`, because this function never returns and it terminates
/// the process, no destructors on the current stack or any other thread's
/// stack will be run. The caller should ensure that this function is called
/// from the only thread, and that any destructors which need to be run are in
/// the stack of the callback.
pub fn main_impl<E, F>(mut parser: Parser, callback: F) -> !
where
    E: Display + Debug,
    F: FnOnce(ParsedArgs) -> CommandResult<E>,
{
    let mut args = env::args();
    let program = args.next();
    if parser.get_prog().is_empty() {
        if let Some(program) = program {
            parser.set_prog(program.as_str());
        }
    }
    let args: Vec<String> = args.collect();

    process::exit(handle_result(parse_and_execute(
        &parser,
        &args,
        Some(io::stdout()),
        Some(io::stderr()),
        callback,
    )));
}
