//! Command handlers for the lexkit CLI.
//!
//! Shared utilities like `read_source` live here in the module root.

use std::io;

mod lex;

pub use lex::{lex_file, lex_source, LexSummary};

/// Failure of a command. The binary prints it and exits non-zero.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// The input could not be read; the message is ready for the user.
    #[error("{0}")]
    Read(String),
    #[error("{path}:{error}")]
    Lex {
        path: String,
        error: lexkit_core::LexError,
    },
    #[error("{path}: {count} lexical error(s)")]
    Errors { path: String, count: usize },
    #[error("cannot write output: {0}")]
    Output(#[from] io::Error),
}

/// Read a whole input file, or standard input for `-`.
pub fn read_source(path: &str) -> Result<String, CommandError> {
    let result = if path == "-" {
        io::read_to_string(io::stdin())
    } else {
        std::fs::read_to_string(path)
    };
    result.map_err(|e| CommandError::Read(read_error_message(path, &e)))
}

fn read_error_message(path: &str, e: &io::Error) -> String {
    match e.kind() {
        io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
        io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
        io::ErrorKind::InvalidData => format!("'{path}' contains invalid UTF-8 data"),
        _ => format!("error reading '{path}': {e}"),
    }
}
