//! The brace grammar's `emit_token`.

use lexkit_core::{Cursor, Grammar, LexError, Reader, StopSet, Token};
use tracing::trace;

use crate::BraceToken;

/// Bytes that end a bare lexeme.
const DELIMITERS: StopSet = StopSet::new(b"{};=").union(StopSet::WHITESPACE);

const NEWLINE: StopSet = StopSet::new(b"\n");

const QUOTE: u8 = b'"';

/// Optional lexical features of the brace grammar.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BraceOptions {
    /// Skip `//` comments up to the end of the line. A comment must start
    /// where a token could start: in `a//b` the slashes belong to the string.
    pub line_comments: bool,
    /// Lex `"..."` as a single [`BraceToken::QUOTED`] token. When disabled,
    /// `"` is an ordinary string byte.
    pub quoted_strings: bool,
}

impl Default for BraceOptions {
    fn default() -> Self {
        BraceOptions {
            line_comments: true,
            quoted_strings: true,
        }
    }
}

impl BraceOptions {
    /// The bare grammar: whitespace, punctuation, numbers and strings only.
    pub const PLAIN: Self = BraceOptions {
        line_comments: false,
        quoted_strings: false,
    };
}

/// Grammar for brace-delimited `key = value;` blocks.
#[derive(Clone, Debug)]
pub struct BraceGrammar {
    options: BraceOptions,
    stops: StopSet,
}

impl Default for BraceGrammar {
    fn default() -> Self {
        BraceGrammar::new(BraceOptions::default())
    }
}

impl BraceGrammar {
    pub fn new(options: BraceOptions) -> Self {
        let stops = if options.quoted_strings {
            DELIMITERS.with(QUOTE)
        } else {
            DELIMITERS
        };
        BraceGrammar { options, stops }
    }

    pub fn options(&self) -> BraceOptions {
        self.options
    }

    /// Skip whitespace and, if enabled, line comments.
    fn skip_trivia(&self, cursor: &mut Cursor<'_>) {
        loop {
            cursor.skip_whitespace();
            if !(self.options.line_comments && cursor.remainder().starts_with("//")) {
                return;
            }
            trace!(line = cursor.line(), column = cursor.column(), "line comment");
            cursor.discard_until(&NEWLINE);
        }
    }
}

impl Grammar for BraceGrammar {
    type Tag = BraceToken;

    fn emit_token<'src>(
        &mut self,
        cursor: &mut Cursor<'src>,
    ) -> Result<Token<'src, BraceToken>, LexError> {
        self.skip_trivia(cursor);
        if cursor.eof() {
            return Ok(cursor.eof_token(BraceToken::EOF));
        }

        let start = cursor.position();
        let punct = match cursor.next_char() {
            b'{' => BraceToken::O_BRACE,
            b'}' => BraceToken::C_BRACE,
            b'=' => BraceToken::EQUALS,
            b';' => BraceToken::SEMICOLON,
            QUOTE if self.options.quoted_strings => {
                return match cursor.read_quoted_string(start.offset, QUOTE) {
                    Some(end) => Ok(cursor.token(BraceToken::QUOTED, start, end)),
                    None => Err(LexError::unterminated_string(QUOTE, start)),
                };
            }
            _ => {
                let chain: [(BraceToken, Reader<'src>); 3] = [
                    (BraceToken::INTEGER, Cursor::read_integer),
                    (BraceToken::DECIMAL, Cursor::read_decimal),
                    (BraceToken::STRING, Cursor::read_string),
                ];
                return match cursor.classify(start.offset, &self.stops, &chain) {
                    Some((tag, end)) => Ok(cursor.token(tag, start, end)),
                    None => Err(cursor.unrecognized(start)),
                };
            }
        };
        Ok(cursor.token(punct, start, start.offset + 1))
    }
}
