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
use crate::spec::{Flag, Nargs, Parser, Positional};
use std::io::Write;

fn positional_usage(positional: &Positional) -> String {
    let name = positional.get_name().to_uppercase();
    match positional.get_nargs() {
        Nargs::ZeroOrMore | Nargs::ZeroOrOne => format!("[{}]", name),
        Nargs::OneOrMore => format!("{}...", name),
        Nargs::One => name,
    }
}

fn flag_usage(flag: &Flag) -> String {
    let mut usage = format!("--{}", flag.get_name());
    if let Some(short_name) = flag.get_short_name() {
        usage = format!("-{}, {}", short_name, usage);
    }
    if let Some(metavar) = flag.get_metavar() {
        usage.push(' ');
        usage.push_str(metavar);
    }
    usage
}

/// Write the given parser's help text to the given writer.
pub fn write_help<W: Write>(f: &mut W, parser: &Parser) -> Result<()> {
    f.write_fmt(format_args!("Usage: {} [OPTIONS]", parser.get_prog()))?;
    for positional in parser.positionals() {
        f.write_fmt(format_args!(" {}", positional_usage(positional)))?;
    }
    f.write_fmt(format_args!("\n"))?;

    if !parser.get_description().is_empty() {
        f.write_fmt(format_args!("\n{}\n", parser.get_description()))?;
    }

    if parser.positionals().next().is_some() {
        f.write_fmt(format_args!("\nPositional arguments:\n"))?;
        for positional in parser.positionals() {
            f.write_fmt(format_args!(
                "  {:20} {}\n",
                positional.get_name(),
                positional.get_help()
            ))?;
        }
    }

    f.write_fmt(format_args!("\nOptions:\n"))?;
    for flag in parser.flags() {
        f.write_fmt(format_args!("  {:25} {}", flag_usage(flag), flag.get_help()))?;
        if let Some(default_value) = flag.get_default() {
            f.write_fmt(format_args!(" [Default: {}]", default_value))?;
        }
        f.write_fmt(format_args!("\n"))?;
    }

    if !parser.get_epilog().is_empty() {
        f.write_fmt(format_args!("\n{}\n", parser.get_epilog()))?;
    }

    Ok(())
}

/// Render the given parser's help text into a String.
pub fn help_string(parser: &Parser) -> Result<String> {
    let mut buf: Vec<u8> = vec![];
    write_help(&mut buf, parser)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
