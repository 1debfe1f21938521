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
use argot_values::value::{FromValue, Value};
use lazy_static::lazy_static;
use std::collections::HashMap;

/// The names which always refer to the structure of a ParsedArgs, rather
/// than to some parsed destination which happens to have the same name.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
enum StructuralField {
    Args,
    Positionals,
    Remaining,
}

lazy_static! {
    static ref STRUCTURAL_FIELDS: HashMap<&'static str, StructuralField> = {
        let mut m = HashMap::new();
        m.insert("args", StructuralField::Args);
        m.insert("positionals", StructuralField::Positionals);
        m.insert("remaining", StructuralField::Remaining);
        m
    };
}

/// Field is the result of looking up a name on a ParsedArgs with
/// `ParsedArgs::field`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Field<'a> {
    /// The full map of destinations to values.
    Args(&'a HashMap<String, Option<Value>>),
    /// The values of the declared positional arguments, in order.
    Positionals(&'a [Value]),
    /// The arguments which weren't consumed by any flag or positional.
    Remaining(&'a [String]),
    /// The value stored under some destination. None if the destination is
    /// unknown or has no value.
    Value(Option<&'a Value>),
}

/// ParsedArgs holds the values parsed from a list of command-line arguments.
/// Every flag's destination has an entry (possibly without a value), as does
/// every positional argument which was given or has a default.
#[derive(Clone, Debug, PartialEq)]
pub struct ParsedArgs {
    args: HashMap<String, Option<Value>>,
    positionals: Vec<Value>,
    remaining: Vec<String>,
}

impl ParsedArgs {
    pub(crate) fn new(
        args: HashMap<String, Option<Value>>,
        positionals: Vec<Value>,
        remaining: Vec<String>,
    ) -> Self {
        ParsedArgs {
            args: args,
            positionals: positionals,
            remaining: remaining,
        }
    }

    /// Returns whether or not there is an entry for the given destination,
    /// even if that entry has no value.
    pub fn contains_key(&self, name: &str) -> bool {
        self.args.contains_key(name)
    }

    /// Returns the value stored under the given destination, if any.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.args.get(name).and_then(|v| v.as_ref())
    }

    /// Returns the value stored under the given destination. If there is no
    /// entry for the destination at all, `fallback` is returned instead. Note
    /// that a destination which has an entry but no value (e.g. a flag with no
    /// default which wasn't given) returns None, not `fallback`.
    pub fn get_or<'a>(&'a self, name: &str, fallback: Option<&'a Value>) -> Option<&'a Value> {
        match self.args.get(name) {
            Some(v) => v.as_ref(),
            None => fallback,
        }
    }

    /// Returns the value stored under the given destination, converted to the
    /// given type. An error is returned if the value holds a different type.
    pub fn get_as<T: FromValue>(&self, name: &str) -> Result<Option<T>> {
        Ok(self.get(name).map(T::from_value).transpose()?)
    }

    /// Returns the full map of destinations to values.
    pub fn args(&self) -> &HashMap<String, Option<Value>> {
        &self.args
    }

    /// Returns the values of the declared positional arguments which have a
    /// value, in the order they were declared.
    pub fn positionals(&self) -> &[Value] {
        self.positionals.as_slice()
    }

    /// Returns the arguments which weren't consumed: everything after a "--"
    /// separator, and any bare arguments beyond the declared positionals.
    pub fn remaining(&self) -> &[String] {
        self.remaining.as_slice()
    }

    /// Look up the given name. The names "args", "positionals" and
    /// "remaining" always refer to the corresponding part of this structure;
    /// any other name is looked up as a destination.
    pub fn field(&self, name: &str) -> Field<'_> {
        match STRUCTURAL_FIELDS.get(name) {
            Some(StructuralField::Args) => Field::Args(&self.args),
            Some(StructuralField::Positionals) => Field::Positionals(self.positionals()),
            Some(StructuralField::Remaining) => Field::Remaining(self.remaining()),
            None => Field::Value(self.get(name)),
        }
    }
}
