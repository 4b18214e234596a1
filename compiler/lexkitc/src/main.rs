//! lexkit CLI

use std::process::ExitCode;

use lexkitc::commands::lex_file;
use lexkitc::{init_tracing, parse_lex_options};

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(command) = args.first() else {
        print_usage();
        return ExitCode::FAILURE;
    };

    match command.as_str() {
        "lex" => {
            let options = match parse_lex_options(&args[1..]) {
                Ok(options) => options,
                Err(err) => {
                    eprintln!("error: {err}");
                    eprintln!("Usage: lexkit lex <file> [--offsets] [--no-comments] [--no-quotes] [--keep-going]");
                    return ExitCode::FAILURE;
                }
            };
            match lex_file(&options) {
                Ok(_) => ExitCode::SUCCESS,
                Err(err) => {
                    eprintln!("error: {err}");
                    ExitCode::FAILURE
                }
            }
        }
        "help" | "--help" | "-h" => {
            print_usage();
            ExitCode::SUCCESS
        }
        "version" | "--version" | "-V" => {
            println!("lexkit {}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            ExitCode::FAILURE
        }
    }
}

fn print_usage() {
    println!("lexkit: tokenizer toolkit");
    println!();
    println!("Usage: lexkit <command> [options]");
    println!();
    println!("Commands:");
    println!("  lex <file>       Tokenize a brace-grammar file and display tokens");
    println!("                   (use '-' to read standard input)");
    println!("  help             Show this help message");
    println!("  version          Show version information");
    println!();
    println!("Lex options:");
    println!("  --offsets        Show byte ranges");
    println!("  --no-comments    Treat '//' as ordinary text");
    println!("  --no-quotes      Treat '\"' as ordinary text");
    println!("  -k, --keep-going Report every lexical error");
    println!();
    println!("Logging:");
    println!("  LEXKIT_LOG=<filter>  Log filter (falls back to RUST_LOG, default: warn)");
    println!("  LEXKIT_LOG_TREE=1    Hierarchical log output");
}
