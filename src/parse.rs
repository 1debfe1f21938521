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
use crate::parsed::ParsedArgs;
use crate::spec::{Action, Flag, Nargs, Parser, HELP_FLAG_NAME};
use argot_values::value::{convert, Value};
use log::{debug, trace};
use std::collections::HashMap;

/// The token which ends flag parsing. Everything after it is left unparsed.
const SEPARATOR: &str = "--";

/// ParseOutcome is the successful result of parsing command-line arguments.
#[derive(Clone, Debug, PartialEq)]
pub enum ParseOutcome {
    /// The arguments were parsed and validated successfully.
    Parsed(ParsedArgs),
    /// The help flag was given. The caller should print help text and exit
    /// successfully; no validation of the other arguments was performed.
    Help,
}

impl ParseOutcome {
    /// Returns true if help was requested instead of a normal parse.
    pub fn is_help(&self) -> bool {
        match self {
            ParseOutcome::Help => true,
            ParseOutcome::Parsed(_) => false,
        }
    }

    /// Returns the parsed arguments, or None if help was requested.
    pub fn into_parsed(self) -> Option<ParsedArgs> {
        match self {
            ParseOutcome::Parsed(parsed) => Some(parsed),
            ParseOutcome::Help => None,
        }
    }
}

/// Returns a map containing the value every flag's destination has before
/// any arguments are parsed. Every flag gets an entry, even if it has no
/// default value.
fn get_initial_values(parser: &Parser) -> HashMap<String, Option<Value>> {
    parser
        .flags()
        .map(|f| (f.get_dest().to_owned(), f.initial_value()))
        .collect()
}

/// Split a long flag argument ("--name" or "--name=value") into its name and
/// its inline value, if it has one. Only the first "=" is significant.
fn split_long_flag(arg: &str) -> (&str, Option<&str>) {
    let trimmed = &arg[2..];
    match trimmed.find('=') {
        None => (trimmed, None),
        Some(ei) => (&trimmed[..ei], Some(&trimmed[ei + 1..])),
    }
}

fn display_value(value: Option<&Value>) -> String {
    value.map_or_else(|| "(none)".to_owned(), |v| v.to_string())
}

/// Return an error if the given value isn't one of the given choices. An
/// empty list of choices accepts anything, but otherwise an absent value is
/// never a valid choice.
fn check_choices(name: &str, choices: &[Value], value: Option<&Value>) -> Result<()> {
    if choices.is_empty() {
        return Ok(());
    }
    match value {
        Some(v) if choices.contains(v) => Ok(()),
        _ => Err(Error::InvalidChoice {
            name: name.to_owned(),
            value: display_value(value),
        }),
    }
}

/// ParseState holds everything which is mutated during a single call to
/// `Parser::parse`.
struct ParseState<'p, 'a> {
    parser: &'p Parser,
    args: &'a [&'a str],
    /// The index of the argument currently being parsed.
    idx: usize,
    /// The index of the next positional argument to fill.
    positional_idx: usize,
    values: HashMap<String, Option<Value>>,
    /// Values for destinations which collect lists, kept separate from
    /// `values` until parsing is finished so defaults aren't clobbered.
    collected: HashMap<String, Vec<Value>>,
    remaining: Vec<String>,
}

impl<'p, 'a> ParseState<'p, 'a> {
    fn new(parser: &'p Parser, args: &'a [&'a str]) -> Self {
        ParseState {
            parser: parser,
            args: args,
            idx: 0,
            positional_idx: 0,
            values: get_initial_values(parser),
            collected: HashMap::new(),
            remaining: vec![],
        }
    }

    /// Determine the value for the given flag, which was just found at the
    /// current index. This may consume the following argument, in which case
    /// the current index is advanced to point at it.
    ///
    /// None is returned for flags which don't take a value, or for flags
    /// which fell back to a nonexistent default.
    fn resolve_value(&mut self, flag: &Flag, inline: Option<&str>) -> Result<Option<Value>> {
        if !flag.get_action().takes_value() {
            return Ok(None);
        }

        let raw: &str = match inline {
            Some(raw) => raw,
            None => {
                let next_is_missing = self
                    .args
                    .get(self.idx + 1)
                    .map_or(true, |next| next.starts_with('-'));
                if flag.get_nargs() == Nargs::ZeroOrOne && next_is_missing {
                    trace!(
                        "No value given for --{}, using its default",
                        flag.get_name()
                    );
                    return Ok(flag.get_default().cloned());
                }

                self.idx += 1;
                match self.args.get(self.idx) {
                    Some(&raw) => raw,
                    None => return Err(Error::MissingValue(format!("--{}", flag.get_name()))),
                }
            }
        };

        trace!("Converting '{}' for --{}", raw, flag.get_name());
        Ok(Some(convert(raw, flag.get_type())?))
    }

    /// Apply the given flag's action to its destination, using the given
    /// (already resolved) value.
    fn store_value(&mut self, flag: &Flag, value: Option<Value>) -> Result<()> {
        let dest = flag.get_dest();
        match flag.get_action() {
            Action::StoreTrue => {
                self.values
                    .insert(dest.to_owned(), Some(Value::Boolean(true)));
            }
            Action::StoreFalse => {
                self.values
                    .insert(dest.to_owned(), Some(Value::Boolean(false)));
            }
            Action::Count => {
                let prior = match self.values.get(dest) {
                    Some(Some(Value::Integer(count))) => *count,
                    _ => 0,
                };
                self.values
                    .insert(dest.to_owned(), Some(Value::Integer(prior + 1)));
            }
            Action::Store | Action::Append if flag.accumulates() => {
                let slot = self
                    .collected
                    .entry(dest.to_owned())
                    .or_insert_with(Vec::new);
                if let Some(value) = value {
                    slot.push(value);
                }
            }
            Action::Store | Action::Append => {
                check_choices(
                    format!("--{}", flag.get_name()).as_str(),
                    flag.get_choices(),
                    value.as_ref(),
                )?;
                self.values.insert(dest.to_owned(), value);
            }
        }
        Ok(())
    }

    fn parse_long_flag(&mut self, arg: &str) -> Result<()> {
        let parser = self.parser;
        let (name, inline) = split_long_flag(arg);
        let flag = match parser.find_flag(name) {
            Some(f) => f,
            None => return Err(Error::UnknownArgument(format!("--{}", name))),
        };
        debug!("Matched long flag '{}' to --{}", arg, flag.get_name());

        let value = self.resolve_value(flag, inline)?;
        self.store_value(flag, value)
    }

    /// Parse a cluster of short flags, e.g. "-abc". Flags which don't take a
    /// value can be combined freely, but a flag which takes a value must be
    /// the last one in the cluster (and takes the following argument as its
    /// value).
    fn parse_short_flags(&mut self, arg: &str) -> Result<()> {
        let parser = self.parser;
        let cluster: Vec<char> = arg[1..].chars().collect();
        for (position, &short_name) in cluster.iter().enumerate() {
            let flag = match parser.find_flag_by_short_name(short_name) {
                Some(f) => f,
                None => return Err(Error::UnknownArgument(format!("-{}", short_name))),
            };
            debug!("Matched short flag -{} to --{}", short_name, flag.get_name());

            if !flag.get_action().takes_value() {
                self.store_value(flag, None)?;
            } else if position == cluster.len() - 1 {
                let value = self.resolve_value(flag, None)?;
                self.store_value(flag, value)?;
            } else {
                return Err(Error::MissingValue(format!("-{}", short_name)));
            }
        }
        Ok(())
    }

    fn parse_positional(&mut self, arg: &str) -> Result<()> {
        let parser = self.parser;
        let positional = match parser.get_positional(self.positional_idx) {
            Some(p) => p,
            None => {
                debug!("No positional slot left for '{}'", arg);
                self.remaining.push(arg.to_owned());
                return Ok(());
            }
        };

        let value = convert(arg, positional.get_type())?;
        check_choices(positional.get_name(), positional.get_choices(), Some(&value))?;
        debug!("Matched '{}' to positional {}", arg, positional.get_name());

        if positional.get_nargs().is_multiple() {
            // Multi-valued positionals consume every bare argument from here
            // on, so the positional index doesn't advance.
            self.collected
                .entry(positional.get_name().to_owned())
                .or_insert_with(Vec::new)
                .push(value);
        } else {
            self.values
                .insert(positional.get_name().to_owned(), Some(value));
            self.positional_idx += 1;
        }
        Ok(())
    }

    fn scan(&mut self) -> Result<()> {
        while self.idx < self.args.len() {
            let arg = self.args[self.idx];

            if arg == SEPARATOR {
                self.remaining = self.args[self.idx + 1..]
                    .iter()
                    .map(|&a| a.to_owned())
                    .collect();
                debug!("Found separator, leaving {} arguments", self.remaining.len());
                break;
            } else if arg.starts_with(SEPARATOR) {
                self.parse_long_flag(arg)?;
            } else if arg.starts_with('-') && arg.len() > 1 {
                self.parse_short_flags(arg)?;
            } else {
                self.parse_positional(arg)?;
            }

            self.idx += 1;
        }
        Ok(())
    }

    /// Move collected lists into the final values, and fill in defaults for
    /// any positional arguments which weren't given.
    fn flush(&mut self) {
        for (dest, values) in self.collected.drain() {
            self.values.insert(dest, Some(Value::List(values)));
        }

        for positional in self.parser.positionals() {
            if let Some(default_value) = positional.get_default() {
                self.values
                    .entry(positional.get_name().to_owned())
                    .or_insert_with(|| Some(default_value.clone()));
            }
        }
    }

    fn help_requested(&self) -> bool {
        match self.values.get(HELP_FLAG_NAME) {
            Some(Some(Value::Boolean(true))) => true,
            _ => false,
        }
    }

    /// Check that every required flag has a value. Positional arguments are
    /// never checked.
    fn validate(&self) -> Result<()> {
        for flag in self.parser.flags().filter(|f| f.is_required()) {
            match self.values.get(flag.get_dest()) {
                Some(Some(_)) => {}
                _ => return Err(Error::RequiredArgument(flag.get_name().to_owned())),
            }
        }
        Ok(())
    }

    fn finish(self) -> ParsedArgs {
        let parser = self.parser;
        let positionals: Vec<Value> = parser
            .positionals()
            .filter_map(|p| self.values.get(p.get_name()).cloned().and_then(|v| v))
            .collect();
        ParsedArgs::new(self.values, positionals, self.remaining)
    }
}

impl Parser {
    /// Parse the given command-line arguments (not including the program's
    /// own name) according to this schema.
    ///
    /// If the help flag is given, `ParseOutcome::Help` is returned as soon as
    /// all of the arguments have been scanned, without checking for required
    /// flags. Otherwise, the parsed and validated values are returned.
    pub fn parse<S: AsRef<str>>(&self, args: &[S]) -> Result<ParseOutcome> {
        let args: Vec<&str> = args.iter().map(|a| a.as_ref()).collect();
        debug!("Parsing {} arguments for '{}'", args.len(), self.get_prog());

        let mut state = ParseState::new(self, args.as_slice());
        state.scan()?;
        state.flush();

        if state.help_requested() {
            debug!("Help requested, skipping validation");
            return Ok(ParseOutcome::Help);
        }

        state.validate()?;
        Ok(ParseOutcome::Parsed(state.finish()))
    }
}
