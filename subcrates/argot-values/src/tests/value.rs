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
use crate::value::*;

fn assert_converts_to(raw: &str, value_type: Type, expected: Value) {
    assert_eq!(expected, convert(raw, value_type).unwrap());
}

fn assert_conversion_fails(raw: &str, value_type: Type) {
    match convert(raw, value_type) {
        Err(ValueError::Conversion { value, value_type: t }) => {
            assert_eq!(raw, value);
            assert_eq!(value_type, t);
        }
        r => panic!("Expected conversion error, got {:?}", r),
    }
}

#[test]
fn test_convert_string() {
    assert_converts_to("foo", Type::String, Value::from("foo"));
    assert_converts_to("", Type::String, Value::from(""));
    assert_converts_to(" -12 ", Type::String, Value::from(" -12 "));
}

#[test]
fn test_convert_integer() {
    assert_converts_to("42", Type::Integer, Value::Integer(42));
    assert_converts_to("-7", Type::Integer, Value::Integer(-7));
    assert_converts_to(" 12 ", Type::Integer, Value::Integer(12));

    assert_conversion_fails("abc", Type::Integer);
    assert_conversion_fails("1.5", Type::Integer);
    assert_conversion_fails("", Type::Integer);
}

#[test]
fn test_convert_float() {
    assert_converts_to("1.5", Type::Float, Value::Float(1.5));
    assert_converts_to("3", Type::Float, Value::Float(3.0));
    assert_converts_to("-0.25", Type::Float, Value::Float(-0.25));

    assert_conversion_fails("one", Type::Float);
    assert_conversion_fails("1.2.3", Type::Float);
}

#[test]
fn test_convert_boolean() {
    for truthy in &["true", "TRUE", "True", "1", "yes", "YeS", "on", "ON"] {
        assert_converts_to(truthy, Type::Boolean, Value::Boolean(true));
    }
    // Anything which isn't truthy is simply false, never an error.
    for falsy in &["false", "0", "no", "off", "", "nonsense", " true"] {
        assert_converts_to(falsy, Type::Boolean, Value::Boolean(false));
    }
}

#[test]
fn test_value_display() {
    assert_eq!("foo", Value::from("foo").to_string());
    assert_eq!("-3", Value::from(-3).to_string());
    assert_eq!("2.5", Value::from(2.5).to_string());
    assert_eq!("true", Value::from(true).to_string());
    assert_eq!(
        "[a, 1]",
        Value::List(vec![Value::from("a"), Value::from(1)]).to_string()
    );
    assert_eq!("[]", Value::List(vec![]).to_string());
}

#[test]
fn test_from_value() {
    assert_eq!("foo", String::from_value(&Value::from("foo")).unwrap());
    assert_eq!(3, i64::from_value(&Value::from(3)).unwrap());
    assert_eq!(3.0, f64::from_value(&Value::from(3)).unwrap());
    assert_eq!(0.5, f64::from_value(&Value::from(0.5)).unwrap());
    assert!(bool::from_value(&Value::from(true)).unwrap());
    assert_eq!(
        vec!["a".to_owned(), "b".to_owned()],
        Vec::<String>::from_value(&Value::List(vec![Value::from("a"), Value::from("b")]))
            .unwrap()
    );
    assert_eq!(vec![7], Vec::<i64>::from_value(&Value::from(7)).unwrap());

    assert!(i64::from_value(&Value::from("3")).is_err());
    assert!(bool::from_value(&Value::from(1)).is_err());
    assert!(Vec::<i64>::from_value(&Value::List(vec![Value::from("x")])).is_err());
}

#[test]
fn test_type_display() {
    assert_eq!("string", Type::String.to_string());
    assert_eq!("integer", Type::Integer.to_string());
    assert_eq!("float", Type::Float.to_string());
    assert_eq!("boolean", Type::Boolean.to_string());
    assert_eq!(Type::String, Type::default());
}
