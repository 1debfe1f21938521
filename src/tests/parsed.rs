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
use crate::parse::ParseOutcome;
use crate::parsed::*;
use crate::spec::*;
use argot_values::value::Value;

fn build_test_parsed() -> ParsedArgs {
    let mut parser = Parser::new("program", "", "");
    parser
        .add_flag(Flag::new("verbose").set_short_name('v').set_action(Action::Count))
        .unwrap()
        .add_flag(Flag::new("name"))
        .unwrap()
        .add_flag(Flag::new("remaining").set_default("flag value"))
        .unwrap()
        .add_flag(Flag::new("tag").set_action(Action::Append))
        .unwrap()
        .add_positional(Positional::new("input"))
        .unwrap();

    match parser
        .parse(&["-vv", "--tag", "a", "--tag", "b", "in.txt", "--", "rest"])
        .unwrap()
    {
        ParseOutcome::Parsed(parsed) => parsed,
        ParseOutcome::Help => panic!("Unexpected help request"),
    }
}

#[test]
fn test_get() {
    let parsed = build_test_parsed();
    assert_eq!(Some(&Value::Integer(2)), parsed.get("verbose"));
    assert_eq!(Some(&Value::from("in.txt")), parsed.get("input"));
    assert_eq!(None, parsed.get("name"));
    assert_eq!(None, parsed.get("nonexistent"));
    assert!(parsed.contains_key("name"));
    assert!(!parsed.contains_key("nonexistent"));
}

#[test]
fn test_get_or() {
    let parsed = build_test_parsed();
    let fallback = Value::from("fallback");
    assert_eq!(
        Some(&Value::Integer(2)),
        parsed.get_or("verbose", Some(&fallback))
    );
    assert_eq!(Some(&fallback), parsed.get_or("nonexistent", Some(&fallback)));
    // An entry without a value is not the same as a missing entry.
    assert_eq!(None, parsed.get_or("name", Some(&fallback)));
    assert_eq!(None, parsed.get_or("nonexistent", None));
}

#[test]
fn test_get_as() {
    let parsed = build_test_parsed();
    assert_eq!(Some(2), parsed.get_as::<i64>("verbose").unwrap());
    assert_eq!(
        Some("in.txt".to_owned()),
        parsed.get_as::<String>("input").unwrap()
    );
    assert_eq!(
        Some(vec!["a".to_owned(), "b".to_owned()]),
        parsed.get_as::<Vec<String>>("tag").unwrap()
    );
    assert_eq!(None, parsed.get_as::<String>("name").unwrap());

    match parsed.get_as::<bool>("verbose") {
        Err(Error::Conversion(_)) => {}
        r => panic!("Expected conversion error, got {:?}", r),
    }
}

#[test]
fn test_structural_accessors() {
    let parsed = build_test_parsed();
    assert_eq!(vec!["rest".to_owned()], parsed.remaining());
    assert_eq!(&[Value::from("in.txt")], parsed.positionals());
    assert_eq!(Some(&Some(Value::Integer(2))), parsed.args().get("verbose"));
}

#[test]
fn test_field() {
    let parsed = build_test_parsed();

    assert_eq!(Field::Value(Some(&Value::Integer(2))), parsed.field("verbose"));
    assert_eq!(Field::Value(None), parsed.field("name"));
    assert_eq!(Field::Value(None), parsed.field("nonexistent"));
    assert_eq!(Field::Args(parsed.args()), parsed.field("args"));
    assert_eq!(
        Field::Positionals(parsed.positionals()),
        parsed.field("positionals")
    );

    // Reserved names always refer to the structure, even if some flag stores
    // its value under the same name.
    assert_eq!(Field::Remaining(parsed.remaining()), parsed.field("remaining"));
    assert_eq!(Some(&Value::from("flag value")), parsed.get("remaining"));
}
