//! lexkit command-line front end.
//!
//! The binary is a thin dispatcher; argument parsing, logging setup and the
//! commands themselves live here so they can be tested without spawning a
//! process.

pub mod commands;
mod logging;
mod options;

pub use logging::init_tracing;
pub use options::{parse_lex_options, LexOptions, UsageError};
