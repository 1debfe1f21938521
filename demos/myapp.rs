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

use argot::main_impl::{main_impl, CommandResult};
use argot::{Action, Flag, Nargs, ParsedArgs, Parser, Positional};

fn build_parser() -> argot::Result<Parser> {
    let mut parser = Parser::new(
        "myapp",
        "My awesome application",
        "Example: myapp --verbose input.txt",
    );
    parser
        .add_flag(
            Flag::new("verbose")
                .set_short_name('v')
                .set_action(Action::Count)
                .set_help("Increase verbosity"),
        )?
        .add_flag(
            Flag::new("output")
                .set_short_name('o')
                .set_default("output.txt")
                .set_metavar("FILE")
                .set_help("Output file"),
        )?
        .add_flag(
            Flag::new("format")
                .set_short_name('f')
                .set_choices(vec!["json", "xml", "csv"])
                .set_default("json")
                .set_help("Output format"),
        )?
        .add_flag(
            Flag::new("dry-run")
                .set_action(Action::StoreTrue)
                .set_help("Don't make any changes"),
        )?
        .add_positional(Positional::new("input").set_help("Input file"))?
        .add_positional(
            Positional::new("extra")
                .set_nargs(Nargs::ZeroOrMore)
                .set_help("Extra files"),
        )?;
    Ok(parser)
}

fn run(parsed: ParsedArgs) -> CommandResult<argot::Error> {
    println!("Verbose level: {}", parsed.get_as::<i64>("verbose")?.unwrap_or(0));
    println!("Output: {}", parsed.get_as::<String>("output")?.unwrap_or_default());
    println!("Format: {}", parsed.get_as::<String>("format")?.unwrap_or_default());
    println!("Dry run: {}", parsed.get_as::<bool>("dry-run")?.unwrap_or(false));
    match parsed.get("input") {
        Some(input) => println!("Input: {}", input),
        None => println!("Input: (none)"),
    }
    println!(
        "Extra: {:?}",
        parsed.get_as::<Vec<String>>("extra")?.unwrap_or_default()
    );
    println!("Remaining: {:?}", parsed.remaining());
    Ok(())
}

fn main() {
    // Set RUST_LOG=debug to see how each argument is matched.
    env_logger::init();

    let parser = match build_parser() {
        Ok(p) => p,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };
    main_impl(parser, run);
}
