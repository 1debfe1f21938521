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
use crate::help::help_string;
use crate::main_impl::*;
use crate::spec::*;
use argot_values::value::Value;

fn build_test_parser() -> Parser {
    let mut parser = Parser::new("program", "", "");
    parser
        .add_flag(Flag::new("name").set_required(true))
        .unwrap();
    parser
}

fn args(values: &[&str]) -> Vec<String> {
    values.iter().map(|&v| v.to_owned()).collect()
}

#[test]
fn test_handle_result() {
    assert_eq!(
        EXIT_SUCCESS,
        handle_result::<Error>(Ok(Execution::Executed(Ok(()))))
    );
    assert_eq!(EXIT_SUCCESS, handle_result::<Error>(Ok(Execution::HelpShown)));
    assert_eq!(
        EXIT_FAILURE,
        handle_result::<Error>(Ok(Execution::InvalidArguments))
    );
    assert_eq!(
        EXIT_FAILURE,
        handle_result::<Error>(Err(Error::UnknownArgument("--nope".to_owned())))
    );
    assert_eq!(
        EXIT_FAILURE,
        handle_result(Ok(Execution::Executed(Err(Error::Schema(
            "arbitrary command error".to_owned()
        )))))
    );
}

#[test]
fn test_parse_and_execute() {
    let parser = build_test_parser();
    let mut help_output: Vec<u8> = vec![];
    let mut error_output: Vec<u8> = vec![];
    let mut call_count = 0;

    let r = parse_and_execute::<(), _, _, _>(
        &parser,
        &args(&["--name", "foo"]),
        Some(&mut help_output),
        Some(&mut error_output),
        |parsed| {
            call_count += 1;
            assert_eq!(Some(&Value::from("foo")), parsed.get("name"));
            Ok(())
        },
    );

    match r {
        Ok(Execution::Executed(Ok(()))) => {}
        r => panic!("Unexpected result {:?}", r),
    }
    assert_eq!(1, call_count);
    assert!(help_output.is_empty());
    assert!(error_output.is_empty());
}

#[test]
fn test_parse_and_execute_command_error() {
    let parser = build_test_parser();
    let r = parse_and_execute::<String, Vec<u8>, Vec<u8>, _>(
        &parser,
        &args(&["--name", "foo"]),
        None,
        None,
        |_| Err("command failed".to_owned()),
    );

    match r {
        Ok(Execution::Executed(Err(e))) => assert_eq!("command failed", e),
        r => panic!("Unexpected result {:?}", r),
    }
}

#[test]
fn test_parse_and_execute_help() {
    let parser = build_test_parser();
    let mut help_output: Vec<u8> = vec![];
    let mut error_output: Vec<u8> = vec![];
    let mut call_count = 0;

    // Help is shown even though a required flag is missing.
    let r = parse_and_execute::<(), _, _, _>(
        &parser,
        &args(&["--help"]),
        Some(&mut help_output),
        Some(&mut error_output),
        |_| {
            call_count += 1;
            Ok(())
        },
    );

    match r {
        Ok(Execution::HelpShown) => {}
        r => panic!("Unexpected result {:?}", r),
    }
    assert_eq!(0, call_count);
    assert_eq!(
        help_string(&parser).unwrap(),
        String::from_utf8(help_output).unwrap()
    );
    assert!(error_output.is_empty());
}

#[test]
fn test_parse_and_execute_invalid_arguments() {
    let parser = build_test_parser();
    let mut help_output: Vec<u8> = vec![];
    let mut error_output: Vec<u8> = vec![];
    let mut call_count = 0;

    let r = parse_and_execute::<(), _, _, _>(
        &parser,
        &args(&["--nope"]),
        Some(&mut help_output),
        Some(&mut error_output),
        |_| {
            call_count += 1;
            Ok(())
        },
    );

    match r {
        Ok(Execution::InvalidArguments) => {}
        r => panic!("Unexpected result {:?}", r),
    }
    assert_eq!(0, call_count);
    assert!(help_output.is_empty());
    assert_eq!(
        format!(
            "Error: Unknown argument: --nope\n{}",
            help_string(&parser).unwrap()
        ),
        String::from_utf8(error_output).unwrap()
    );
}

#[test]
fn test_parse_and_execute_missing_required() {
    let parser = build_test_parser();
    let mut error_output: Vec<u8> = vec![];

    let r = parse_and_execute::<(), Vec<u8>, _, _>(
        &parser,
        &args(&[]),
        None,
        Some(&mut error_output),
        |_| Ok(()),
    );

    match r {
        Ok(Execution::InvalidArguments) => {}
        r => panic!("Unexpected result {:?}", r),
    }
    assert!(String::from_utf8(error_output)
        .unwrap()
        .starts_with("Error: Required argument: --name\n"));
}
