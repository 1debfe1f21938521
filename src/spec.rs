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
use argot_values::value::{Type, Value};

/// The name (and destination) of the help flag every Parser registers.
pub const HELP_FLAG_NAME: &str = "help";
/// The short name of the help flag every Parser registers.
pub const HELP_FLAG_SHORT_NAME: char = 'h';

/// Action denotes what happens to a flag's destination when the flag is
/// encountered on the command line.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Action {
    /// Store the flag's (converted) value, overwriting any previous value.
    Store,
    /// Store `true`. The flag takes no value, and defaults to `false`.
    StoreTrue,
    /// Store `false`. The flag takes no value, and defaults to `true`.
    StoreFalse,
    /// Increment a counter. The flag takes no value, and defaults to 0.
    Count,
    /// Append the flag's (converted) value to a list of values.
    Append,
}

impl Action {
    /// Returns true if flags with this action consume a value from the
    /// command line.
    pub fn takes_value(self) -> bool {
        match self {
            Action::StoreTrue | Action::StoreFalse | Action::Count => false,
            Action::Store | Action::Append => true,
        }
    }
}

impl Default for Action {
    fn default() -> Self {
        Action::Store
    }
}

/// Nargs describes how many values a flag or positional argument accepts.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Nargs {
    /// Exactly one value.
    One,
    /// Zero or one values. A flag with this cardinality falls back to its
    /// default if no value follows it.
    ZeroOrOne,
    /// Zero or more values, collected into a list.
    ZeroOrMore,
    /// One or more values, collected into a list.
    OneOrMore,
}

impl Nargs {
    /// Returns true if values are collected into a list, rather than
    /// overwriting each other.
    pub fn is_multiple(self) -> bool {
        match self {
            Nargs::ZeroOrMore | Nargs::OneOrMore => true,
            Nargs::One | Nargs::ZeroOrOne => false,
        }
    }
}

impl Default for Nargs {
    fn default() -> Self {
        Nargs::One
    }
}

/// Flag describes a named command-line option, e.g. "--flag=value" or "-f".
#[derive(Clone, Debug)]
pub struct Flag {
    name: String,
    short_name: Option<char>,
    value_type: Type,
    default_value: Option<Value>,
    required: bool,
    help: String,
    choices: Vec<Value>,
    nargs: Nargs,
    action: Action,
    dest: Option<String>,
    metavar: Option<String>,
}

impl Flag {
    /// Constructs a new string-valued flag with the given name, which stores
    /// a single value and has no default. Use the `set_*` functions to
    /// configure it further.
    pub fn new(name: &str) -> Flag {
        Flag {
            name: name.to_owned(),
            short_name: None,
            value_type: Type::default(),
            default_value: None,
            required: false,
            help: String::new(),
            choices: vec![],
            nargs: Nargs::default(),
            action: Action::default(),
            dest: None,
            metavar: None,
        }
    }

    /// Set the single-character alias for this flag, e.g. 'f' for "-f".
    pub fn set_short_name(mut self, short_name: char) -> Self {
        self.short_name = Some(short_name);
        self
    }

    /// Set the type this flag's values are converted to.
    pub fn set_type(mut self, value_type: Type) -> Self {
        self.value_type = value_type;
        self
    }

    /// Set the value this flag has if it isn't given on the command line.
    /// This is ignored for store-true, store-false and count flags, which have
    /// fixed defaults.
    pub fn set_default<V: Into<Value>>(mut self, default_value: V) -> Self {
        self.default_value = Some(default_value.into());
        self
    }

    /// Set whether or not it is an error for this flag to have no value after
    /// parsing.
    pub fn set_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Set the human-readable help text for this flag.
    pub fn set_help(mut self, help: &str) -> Self {
        self.help = help.to_owned();
        self
    }

    /// Set the values this flag is allowed to take. An empty list means any
    /// value is allowed.
    pub fn set_choices<I, V>(mut self, choices: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.choices = choices.into_iter().map(|c| c.into()).collect();
        self
    }

    /// Set how many values this flag accepts.
    pub fn set_nargs(mut self, nargs: Nargs) -> Self {
        self.nargs = nargs;
        self
    }

    /// Set what happens when this flag is encountered.
    pub fn set_action(mut self, action: Action) -> Self {
        self.action = action;
        self
    }

    /// Set the key this flag's value is stored under, instead of its name.
    pub fn set_dest(mut self, dest: &str) -> Self {
        self.dest = Some(dest.to_owned());
        self
    }

    /// Set the placeholder shown for this flag's value in help text.
    pub fn set_metavar(mut self, metavar: &str) -> Self {
        self.metavar = Some(metavar.to_owned());
        self
    }

    /// Returns this flag's full name (i.e., not the short name).
    pub fn get_name(&self) -> &str {
        self.name.as_str()
    }

    /// Returns this flag's short name, if it has one.
    pub fn get_short_name(&self) -> Option<char> {
        self.short_name
    }

    /// Returns the type this flag's values are converted to.
    pub fn get_type(&self) -> Type {
        self.value_type
    }

    /// Returns the configured default value, if any.
    pub fn get_default(&self) -> Option<&Value> {
        self.default_value.as_ref()
    }

    /// Returns whether this flag must have a value after parsing.
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Returns the human-readable help text for this flag.
    pub fn get_help(&self) -> &str {
        self.help.as_str()
    }

    /// Returns the values this flag is allowed to take (empty means any).
    pub fn get_choices(&self) -> &[Value] {
        self.choices.as_slice()
    }

    /// Returns how many values this flag accepts.
    pub fn get_nargs(&self) -> Nargs {
        self.nargs
    }

    /// Returns what happens when this flag is encountered.
    pub fn get_action(&self) -> Action {
        self.action
    }

    /// Returns the explicitly configured destination, if any. Most callers
    /// want `get_dest` instead.
    pub fn get_explicit_dest(&self) -> Option<&str> {
        self.dest.as_ref().map(|d| d.as_str())
    }

    /// Returns the key this flag's value is stored under.
    pub fn get_dest(&self) -> &str {
        self.get_explicit_dest().unwrap_or_else(|| self.get_name())
    }

    /// Returns the placeholder shown for this flag's value in help text.
    pub fn get_metavar(&self) -> Option<&str> {
        self.metavar.as_ref().map(|m| m.as_str())
    }

    /// Returns true if values for this flag are collected into a list.
    pub(crate) fn accumulates(&self) -> bool {
        self.action == Action::Append || self.nargs.is_multiple()
    }

    /// The value this flag's destination has before any arguments are
    /// parsed.
    pub(crate) fn initial_value(&self) -> Option<Value> {
        match self.action {
            Action::StoreTrue => Some(Value::Boolean(false)),
            Action::StoreFalse => Some(Value::Boolean(true)),
            Action::Count => Some(Value::Integer(0)),
            Action::Store | Action::Append => self.default_value.clone(),
        }
    }
}

/// Positional describes an argument which is identified purely by its
/// position among the non-flag command-line arguments.
///
/// Only the last Positional in a Parser may collect multiple values (with
/// `Nargs::ZeroOrMore` or `Nargs::OneOrMore`), since it greedily consumes
/// every remaining bare argument. This is not checked.
#[derive(Clone, Debug)]
pub struct Positional {
    name: String,
    value_type: Type,
    help: String,
    nargs: Nargs,
    default_value: Option<Value>,
    choices: Vec<Value>,
}

impl Positional {
    /// Constructs a new string-valued positional argument with the given
    /// name, which accepts exactly one value.
    pub fn new(name: &str) -> Positional {
        Positional {
            name: name.to_owned(),
            value_type: Type::default(),
            help: String::new(),
            nargs: Nargs::default(),
            default_value: None,
            choices: vec![],
        }
    }

    /// Set the type this argument's values are converted to.
    pub fn set_type(mut self, value_type: Type) -> Self {
        self.value_type = value_type;
        self
    }

    /// Set the human-readable help text for this argument.
    pub fn set_help(mut self, help: &str) -> Self {
        self.help = help.to_owned();
        self
    }

    /// Set how many values this argument accepts.
    pub fn set_nargs(mut self, nargs: Nargs) -> Self {
        self.nargs = nargs;
        self
    }

    /// Set the value this argument has if no command-line argument fills its
    /// slot.
    pub fn set_default<V: Into<Value>>(mut self, default_value: V) -> Self {
        self.default_value = Some(default_value.into());
        self
    }

    /// Set the values this argument is allowed to take.
    pub fn set_choices<I, V>(mut self, choices: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.choices = choices.into_iter().map(|c| c.into()).collect();
        self
    }

    /// Returns this argument's name, which is also its destination.
    pub fn get_name(&self) -> &str {
        self.name.as_str()
    }

    /// Returns the type this argument's values are converted to.
    pub fn get_type(&self) -> Type {
        self.value_type
    }

    /// Returns the human-readable help text for this argument.
    pub fn get_help(&self) -> &str {
        self.help.as_str()
    }

    /// Returns how many values this argument accepts.
    pub fn get_nargs(&self) -> Nargs {
        self.nargs
    }

    /// Returns the configured default value, if any.
    pub fn get_default(&self) -> Option<&Value> {
        self.default_value.as_ref()
    }

    /// Returns the values this argument is allowed to take (empty means any).
    pub fn get_choices(&self) -> &[Value] {
        self.choices.as_slice()
    }
}

/// Parser is the full schema of flags and positional arguments a program
/// accepts, along with the metadata used to render its help text.
///
/// Every Parser has a "--help" / "-h" flag registered when it is constructed.
#[derive(Clone, Debug)]
pub struct Parser {
    prog: String,
    description: String,
    epilog: String,
    flags: Vec<Flag>,
    positionals: Vec<Positional>,
}

impl Parser {
    /// Construct a new Parser, with the given program name, description and
    /// epilog (any of which may be empty).
    pub fn new(prog: &str, description: &str, epilog: &str) -> Parser {
        Parser {
            prog: prog.to_owned(),
            description: description.to_owned(),
            epilog: epilog.to_owned(),
            flags: vec![Flag::new(HELP_FLAG_NAME)
                .set_short_name(HELP_FLAG_SHORT_NAME)
                .set_action(Action::StoreTrue)
                .set_help("Show this help message")],
            positionals: vec![],
        }
    }

    /// Add a flag to this schema. This fails if a flag with the same name or
    /// short name already exists.
    pub fn add_flag(&mut self, flag: Flag) -> Result<&mut Self> {
        if self.flags.iter().any(|f| f.name == flag.name) {
            return Err(Error::Schema(format!(
                "Duplicate flag name '{}'",
                flag.name
            )));
        }
        if let Some(sn) = flag.short_name {
            if self.flags.iter().any(|f| f.short_name == Some(sn)) {
                return Err(Error::Schema(format!(
                    "Duplicate short name '{}' for flag '{}'",
                    sn, flag.name
                )));
            }
        }

        self.flags.push(flag);
        Ok(self)
    }

    /// Add a positional argument to this schema. Positional arguments are
    /// filled in the order they are added. This fails if a positional
    /// argument with the same name already exists.
    pub fn add_positional(&mut self, positional: Positional) -> Result<&mut Self> {
        if self.positionals.iter().any(|p| p.name == positional.name) {
            return Err(Error::Schema(format!(
                "Duplicate positional argument name '{}'",
                positional.name
            )));
        }

        self.positionals.push(positional);
        Ok(self)
    }

    /// Set the program name used in help text.
    pub fn set_prog(&mut self, prog: &str) {
        self.prog = prog.to_owned();
    }

    /// Returns the program name used in help text.
    pub fn get_prog(&self) -> &str {
        self.prog.as_str()
    }

    /// Returns the program description shown in help text.
    pub fn get_description(&self) -> &str {
        self.description.as_str()
    }

    /// Returns the text shown at the end of help text.
    pub fn get_epilog(&self) -> &str {
        self.epilog.as_str()
    }

    /// Returns an Iterator over this schema's flags, in the order they were
    /// added (starting with the built-in help flag).
    pub fn flags(&self) -> impl DoubleEndedIterator<Item = &Flag> {
        self.flags.iter()
    }

    /// Returns an Iterator over this schema's positional arguments, in order.
    pub fn positionals(&self) -> impl DoubleEndedIterator<Item = &Positional> {
        self.positionals.iter()
    }

    /// Returns the positional argument at the given position, if any.
    pub(crate) fn get_positional(&self, idx: usize) -> Option<&Positional> {
        self.positionals.get(idx)
    }

    /// Locate the first flag whose name *or* destination matches the given
    /// long name.
    ///
    /// Because destinations are matched too, a flag can shadow another flag
    /// whose name is the same as its destination, if it was added first.
    pub(crate) fn find_flag(&self, name: &str) -> Option<&Flag> {
        self.flags
            .iter()
            .find(|f| f.name == name || f.get_explicit_dest() == Some(name))
    }

    /// Locate the flag with the given short name.
    pub(crate) fn find_flag_by_short_name(&self, short_name: char) -> Option<&Flag> {
        self.flags
            .iter()
            .find(|f| f.short_name == Some(short_name))
    }
}
