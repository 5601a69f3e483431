//! `myrpal` — run an RPAL program from a source file.
//!
//! Usage: `myrpal [-ast] [-st] <sourcefile>`
//!
//! `-ast` dumps the parse tree and `-st` the standardized tree before the
//! program runs. Program output (everything `Print` produced) goes to
//! stdout; diagnostics go to stderr.

use std::env;
use std::fs;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();
    let Some((file, rest)) = args.split_last() else {
        eprintln!("Usage: myrpal [-ast] [-st] <sourcefile>");
        return ExitCode::FAILURE;
    };

    let mut show_ast = false;
    let mut show_st = false;
    for flag in rest {
        match flag.as_str() {
            "-ast" => show_ast = true,
            "-st" => show_st = true,
            other => {
                eprintln!("Unknown option: {other}");
                eprintln!("Usage: myrpal [-ast] [-st] <sourcefile>");
                return ExitCode::FAILURE;
            }
        }
    }

    let source = match fs::read_to_string(file) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("Cannot read {file}: {err}");
            return ExitCode::FAILURE;
        }
    };

    if show_ast {
        match rpal_interpreter::parse(&source) {
            Ok(tree) => print!("{}", tree.pretty()),
            Err(err) => {
                eprintln!("{err}");
                return ExitCode::FAILURE;
            }
        }
    }

    if show_st {
        match rpal_interpreter::standardize(&source) {
            Ok(tree) => print!("{}", tree.pretty()),
            Err(err) => {
                eprintln!("{err}");
                return ExitCode::FAILURE;
            }
        }
    }

    match rpal_interpreter::interpret(&source) {
        Ok(evaluation) => {
            print!("{}", evaluation.output);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
