//! Consumer-side helpers for parsers built on the brace grammar.

use lexkit_core::{LexError, Position};

use crate::{BraceTok, BraceToken, BraceTokenizer};

/// Error returned by [`expect`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ExpectError {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error(
        "{position}: expected {}, found {}",
        .expected.describe(),
        .found.describe()
    )]
    Unexpected {
        expected: BraceToken,
        found: BraceToken,
        position: Position,
    },
}

/// Read the next token and check that its tag is one of `mask`.
///
/// On a mismatch the token is pushed back, so the caller can report the
/// error and still resynchronize on it.
pub fn expect<'src>(
    tokenizer: &mut BraceTokenizer<'src>,
    mask: BraceToken,
) -> Result<BraceTok<'src>, ExpectError> {
    let token = tokenizer.next_token()?;
    if mask.intersects(token.tag()) {
        return Ok(token);
    }
    tokenizer.push_token(token);
    Err(ExpectError::Unexpected {
        expected: mask,
        found: token.tag(),
        position: token.position(),
    })
}

/// The text between the quotes of a [`BraceToken::QUOTED`] token.
///
/// Returns `None` for any other kind of token.
pub fn quoted_content<'src>(token: &BraceTok<'src>) -> Option<&'src str> {
    if token.tag() != BraceToken::QUOTED {
        return None;
    }
    token.data().strip_prefix('"')?.strip_suffix('"')
}
