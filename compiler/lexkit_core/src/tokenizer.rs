//! Tokenizer: a grammar plus one-token lookahead and pushback.
//!
//! # State
//!
//! A tokenizer is either *scanning* or holds exactly one *pushed-back*
//! token. [`next_token`](Tokenizer::next_token) from the pushed-back state
//! returns the held token without touching the cursor; from the scanning
//! state it runs the grammar. [`peek_token`](Tokenizer::peek_token) is a
//! `next_token` followed by a push. End of input is a token value, not a
//! state: once reached, every call returns the sentinel again.

use tracing::{debug, trace};

use crate::{Cursor, Grammar, LexError, Position, Token};

/// Drives a [`Grammar`] over a borrowed source.
pub struct Tokenizer<'src, G: Grammar> {
    cursor: Cursor<'src>,
    grammar: G,
    pushed: Option<Token<'src, G::Tag>>,
}

impl<'src, G: Grammar> Tokenizer<'src, G> {
    pub fn new(source: &'src str, grammar: G) -> Self {
        Tokenizer {
            cursor: Cursor::new(source),
            grammar,
            pushed: None,
        }
    }

    /// Return the next token, replaying a pushed-back token first.
    pub fn next_token(&mut self) -> Result<Token<'src, G::Tag>, LexError> {
        if let Some(token) = self.pushed.take() {
            trace!(
                tag = ?token.tag(),
                offset = token.offset(),
                line = token.line(),
                column = token.column(),
                replayed = true,
                "next_token"
            );
            return Ok(token);
        }

        match self.grammar.emit_token(&mut self.cursor) {
            Ok(token) => {
                debug_assert!(
                    self.cursor.offset() <= self.cursor.length(),
                    "grammar moved the cursor past the end of the source"
                );
                trace!(
                    tag = ?token.tag(),
                    offset = token.offset(),
                    line = token.line(),
                    column = token.column(),
                    replayed = false,
                    "next_token"
                );
                Ok(token)
            }
            Err(err) => {
                debug!(%err, "lexical error");
                Err(err)
            }
        }
    }

    /// Return the next token without consuming it.
    pub fn peek_token(&mut self) -> Result<Token<'src, G::Tag>, LexError> {
        let token = self.next_token()?;
        trace!(tag = ?token.tag(), offset = token.offset(), "peek_token");
        self.push_token(token);
        Ok(token)
    }

    /// Hand a token back so the next [`next_token`](Self::next_token) or
    /// [`peek_token`](Self::peek_token) returns it again.
    ///
    /// # Panics
    ///
    /// Panics if a token is already pushed back. The slot holds one token,
    /// it is not a stack.
    pub fn push_token(&mut self, token: Token<'src, G::Tag>) {
        assert!(
            self.pushed.is_none(),
            "push_token: a token is already pushed back (pending {:?}, pushing {:?})",
            self.pushed,
            token
        );
        trace!(tag = ?token.tag(), offset = token.offset(), "push_token");
        self.pushed = Some(token);
    }

    /// Returns `true` once the cursor has consumed the whole source.
    ///
    /// This looks at the scan position only; a pushed-back token and
    /// trailing whitespace are not taken into account.
    pub fn eof(&self) -> bool {
        self.cursor.eof()
    }

    /// Position of the scan cursor.
    pub fn position(&self) -> Position {
        self.cursor.position()
    }

    /// Total source length in bytes.
    pub fn length(&self) -> usize {
        self.cursor.length()
    }

    /// The part of the source the cursor has not consumed yet.
    pub fn remainder(&self) -> &'src str {
        self.cursor.remainder()
    }

    /// Rewind to the start of the source and drop any pushed-back token.
    pub fn reset(&mut self) {
        debug!(
            offset = self.cursor.offset(),
            pending = self.pushed.is_some(),
            "reset tokenizer"
        );
        self.cursor.reset();
        self.pushed = None;
    }

    pub fn grammar(&self) -> &G {
        &self.grammar
    }

    pub fn grammar_mut(&mut self) -> &mut G {
        &mut self.grammar
    }

    /// Tokenize the rest of the source, including the final sentinel.
    pub fn tokenize_all(&mut self) -> Result<Vec<Token<'src, G::Tag>>, LexError> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            tokens.push(token);
            if token.is_eof() {
                return Ok(tokens);
            }
        }
    }
}

/// Yields tokens up to, not including, the end-of-input sentinel.
///
/// Errors are yielded in place. Iteration may continue after one as long as
/// the grammar consumed the offending input before failing.
impl<'src, G: Grammar> Iterator for Tokenizer<'src, G> {
    type Item = Result<Token<'src, G::Tag>, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_token() {
            Ok(token) if token.is_eof() => None,
            result => Some(result),
        }
    }
}

#[cfg(test)]
#[expect(clippy::expect_used, reason = "Tests use expect for clear failure messages")]
mod tests;
