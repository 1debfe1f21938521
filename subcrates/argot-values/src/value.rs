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
use lazy_static::lazy_static;
use std::collections::HashMap;
use std::fmt;

/// Type is the closed set of types a flag or positional argument's value can
/// be converted to.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Type {
    /// A freeform string, which is stored exactly as it was given.
    String,
    /// A signed 64-bit integer.
    Integer,
    /// A 64-bit floating point number.
    Float,
    /// A boolean. Any string which isn't one of the recognized "truthy"
    /// strings is interpreted as false.
    Boolean,
}

impl Default for Type {
    fn default() -> Self {
        Type::String
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Type::String => "string",
            Type::Integer => "integer",
            Type::Float => "float",
            Type::Boolean => "boolean",
        })
    }
}

/// The strings (compared case-insensitively) which convert to a `true`
/// boolean value.
pub const TRUTHY_VALUES: [&str; 4] = ["true", "1", "yes", "on"];

/// A Value is a single typed value parsed from the command line, or a list of
/// them for flags and positional arguments which collect multiple values.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// A string value.
    String(String),
    /// An integer value.
    Integer(i64),
    /// A floating point value.
    Float(f64),
    /// A boolean value.
    Boolean(bool),
    /// An ordered list of values, in the order they were encountered.
    List(Vec<Value>),
}

impl Value {
    /// Returns a human-readable name for the kind of value this is, for use in
    /// error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::String(_) => "string",
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::Boolean(_) => "boolean",
            Value::List(_) => "list",
        }
    }

    /// Returns this value's string, if it is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Returns this value's integer, if it is an integer.
    pub fn as_integer(&self) -> Option<i64> {
        match *self {
            Value::Integer(i) => Some(i),
            _ => None,
        }
    }

    /// Returns this value as a float. Integers are widened.
    pub fn as_float(&self) -> Option<f64> {
        match *self {
            Value::Float(f) => Some(f),
            Value::Integer(i) => Some(i as f64),
            _ => None,
        }
    }

    /// Returns this value's boolean, if it is a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match *self {
            Value::Boolean(b) => Some(b),
            _ => None,
        }
    }

    /// Returns this value's list of values, if it is a list.
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(vs) => Some(vs.as_slice()),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::String(s) => f.write_str(s),
            Value::Integer(i) => write!(f, "{}", i),
            Value::Float(v) => write!(f, "{}", v),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::List(vs) => {
                f.write_str("[")?;
                for (idx, v) in vs.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", v)?;
                }
                f.write_str("]")
            }
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Integer(i64::from(i))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<Vec<Value>> for Value {
    fn from(vs: Vec<Value>) -> Self {
        Value::List(vs)
    }
}

type Coercion = fn(&str) -> ValueResult<Value>;

fn coerce_string(raw: &str) -> ValueResult<Value> {
    Ok(Value::String(raw.to_owned()))
}

fn coerce_integer(raw: &str) -> ValueResult<Value> {
    raw.trim()
        .parse::<i64>()
        .map(Value::Integer)
        .map_err(|_| ValueError::Conversion {
            value: raw.to_owned(),
            value_type: Type::Integer,
        })
}

fn coerce_float(raw: &str) -> ValueResult<Value> {
    raw.trim()
        .parse::<f64>()
        .map(Value::Float)
        .map_err(|_| ValueError::Conversion {
            value: raw.to_owned(),
            value_type: Type::Float,
        })
}

fn coerce_boolean(raw: &str) -> ValueResult<Value> {
    let normalized = raw.to_lowercase();
    Ok(Value::Boolean(
        TRUTHY_VALUES.iter().any(|&t| t == normalized),
    ))
}

lazy_static! {
    static ref COERCIONS: HashMap<Type, Coercion> = {
        let mut m: HashMap<Type, Coercion> = HashMap::new();
        m.insert(Type::String, coerce_string);
        m.insert(Type::Integer, coerce_integer);
        m.insert(Type::Float, coerce_float);
        m.insert(Type::Boolean, coerce_boolean);
        m
    };
}

/// Convert the given raw command-line string into a Value of the given Type.
///
/// Boolean conversion never fails: the string is compared case-insensitively
/// against `TRUTHY_VALUES`, and anything else is false. Integer and float
/// conversion fail if the string isn't a well-formed number.
pub fn convert(raw: &str, value_type: Type) -> ValueResult<Value> {
    let coercion: Coercion = COERCIONS[&value_type];
    coercion(raw)
}

/// FromValue is implemented by types which can be extracted from a parsed
/// Value.
pub trait FromValue: Sized {
    /// Extract an instance of this type from the given value, or return an
    /// error if the value holds some other type.
    fn from_value(value: &Value) -> ValueResult<Self>;
}

fn wrong_type(expected: &'static str, found: &Value) -> ValueError {
    ValueError::WrongType {
        expected: expected,
        found: found.to_string(),
    }
}

impl FromValue for Value {
    fn from_value(value: &Value) -> ValueResult<Self> {
        Ok(value.clone())
    }
}

impl FromValue for String {
    fn from_value(value: &Value) -> ValueResult<Self> {
        value
            .as_str()
            .map(|s| s.to_owned())
            .ok_or_else(|| wrong_type("string", value))
    }
}

impl FromValue for i64 {
    fn from_value(value: &Value) -> ValueResult<Self> {
        value.as_integer().ok_or_else(|| wrong_type("integer", value))
    }
}

impl FromValue for f64 {
    fn from_value(value: &Value) -> ValueResult<Self> {
        value.as_float().ok_or_else(|| wrong_type("float", value))
    }
}

impl FromValue for bool {
    fn from_value(value: &Value) -> ValueResult<Self> {
        value.as_bool().ok_or_else(|| wrong_type("boolean", value))
    }
}

impl<T: FromValue> FromValue for Vec<T> {
    /// Lists are converted element-wise. A single scalar value is treated as
    /// a list of length one.
    fn from_value(value: &Value) -> ValueResult<Self> {
        match value {
            Value::List(vs) => vs.iter().map(T::from_value).collect(),
            v => Ok(vec![T::from_value(v)?]),
        }
    }
}
