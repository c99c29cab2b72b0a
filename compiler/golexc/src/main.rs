//! golex CLI
//!
//! Hand-built FSM lexer and whitespace formatter for Go-like source.

use std::path::Path;

use golexc::commands::{lex_file, run_format};
use golexc::{init_tracing, CliError};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    let outcome = match command.as_str() {
        "lex" => {
            if args.len() < 3 {
                eprintln!("Usage: golex lex <file.go>");
                std::process::exit(1);
            }
            lex_file(Path::new(&args[2])).map(|()| true)
        }
        "fmt" => run_format(&args[2..], false),
        "check" => run_format(&args[2..], true),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(true)
        }
        "version" | "--version" | "-V" => {
            println!("golex {}", env!("CARGO_PKG_VERSION"));
            Ok(true)
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    };

    match outcome {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(CliError::Usage(message)) => {
            eprintln!("{message}");
            eprintln!("Run `golex help` for usage.");
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("golex: FSM lexer and formatter for Go-like source");
    println!();
    println!("Usage: golex <command> [options]");
    println!();
    println!("Commands:");
    println!("  lex <file.go>        Tokenize and display tokens");
    println!("  fmt <file.go>...     Format files in place");
    println!("  check <file.go>...   Check formatting (exit 1 if any file would change)");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Format options:");
    println!("  --check             Check if files are formatted (exit 1 if not)");
    println!("  --stdin             Read from stdin, write to stdout");
    println!("  -o <path>           Write to <path> instead of the input file");
    println!("  --verbose, -v       Also list files that were already formatted");
    println!();
    println!("Environment:");
    println!("  RUST_LOG=debug      Trace lexing and formatting to stderr");
    println!();
    println!("Examples:");
    println!("  golex lex main.go");
    println!("  golex fmt main.go");
    println!("  golex fmt main.go -o main.formatted.go");
    println!("  golex check src/*.go                # For CI");
    println!("  cat main.go | golex fmt --stdin");
}
