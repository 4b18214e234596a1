//! `lex`: dump the brace token stream of a file.

use std::io::{self, Write};

use lexkit_brace::{BraceGrammar, BraceTok, BraceTokenizer};
use tracing::{debug, info_span};

use super::{read_source, CommandError};
use crate::LexOptions;

/// Counts reported by [`lex_source`]. `tokens` includes the end-of-input
/// sentinel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LexSummary {
    pub tokens: usize,
    pub errors: usize,
}

/// Lex the file named by `options` and print its tokens to stdout.
pub fn lex_file(options: &LexOptions) -> Result<LexSummary, CommandError> {
    let source = read_source(&options.path)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let summary = lex_source(&source, options, &mut out)?;
    out.flush()?;

    if summary.errors > 0 {
        return Err(CommandError::Errors {
            path: options.path.clone(),
            count: summary.errors,
        });
    }
    Ok(summary)
}

/// Lex `source` and write one line per token to `out`.
///
/// Without `keep_going` the first lexical error aborts before anything is
/// written. With it, errors are listed in stream order and lexing resumes
/// after the offending input.
pub fn lex_source(
    source: &str,
    options: &LexOptions,
    out: &mut impl Write,
) -> Result<LexSummary, CommandError> {
    let _span = info_span!("lex", path = %options.path, len = source.len()).entered();

    let grammar = BraceGrammar::new(options.grammar_options());
    let mut tokenizer = BraceTokenizer::new(source, grammar);
    let mut items = Vec::new();
    let mut summary = LexSummary::default();
    loop {
        match tokenizer.next_token() {
            Ok(token) => {
                summary.tokens += 1;
                items.push(Ok(token));
                if token.is_eof() {
                    break;
                }
            }
            Err(error) if options.keep_going => {
                summary.errors += 1;
                items.push(Err(error));
            }
            Err(error) => {
                return Err(CommandError::Lex {
                    path: options.path.clone(),
                    error,
                });
            }
        }
    }
    debug!(tokens = summary.tokens, errors = summary.errors, "lexed");

    writeln!(
        out,
        "Tokens for '{}' ({} tokens):",
        options.path, summary.tokens
    )?;
    for item in &items {
        match item {
            Ok(token) => write_token(out, token, options.offsets)?,
            Err(error) => writeln!(out, "  error: {error}")?,
        }
    }
    Ok(summary)
}

fn write_token(out: &mut impl Write, token: &BraceTok<'_>, offsets: bool) -> io::Result<()> {
    write!(out, "  {:<9}", token.tag().name())?;
    if !token.is_eof() {
        write!(out, " {:?}", token.data())?;
    }
    write!(out, " @ {}", token.position())?;
    if offsets {
        write!(out, " [{}..{}]", token.offset(), token.end())?;
    }
    writeln!(out)
}
