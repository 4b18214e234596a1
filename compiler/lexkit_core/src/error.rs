//! Error types.
//!
//! Reader mismatches are not errors (readers return `None`), and misuse of
//! the cursor or the pushback slot panics. What remains is input the grammar
//! cannot classify and numeric conversions of the wrong text.

use std::fmt;

use crate::Position;

/// A lexical error at a known position.
#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[error("{position}: {kind}")]
pub struct LexError {
    pub kind: LexErrorKind,
    pub position: Position,
}

impl LexError {
    pub fn new(kind: LexErrorKind, position: Position) -> Self {
        LexError { kind, position }
    }

    /// No reader of the grammar's classifier chain accepted the byte at
    /// `position`.
    pub fn unrecognized(byte: u8, position: Position) -> Self {
        LexError::new(LexErrorKind::UnrecognizedCharacter { byte }, position)
    }

    /// A string opened with `quote` at `position` is never closed.
    pub fn unterminated_string(quote: u8, position: Position) -> Self {
        LexError::new(LexErrorKind::UnterminatedString { quote }, position)
    }
}

/// What went wrong.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LexErrorKind {
    /// The byte is neither a structural token of the grammar nor the start
    /// of any lexeme its readers accept.
    UnrecognizedCharacter { byte: u8 },
    /// Missing closing quote.
    UnterminatedString { quote: u8 },
}

impl fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexErrorKind::UnrecognizedCharacter { byte } => write!(
                f,
                "unrecognized character '{}' (0x{:02X})",
                char::from(*byte).escape_default(),
                byte
            ),
            LexErrorKind::UnterminatedString { quote } => write!(
                f,
                "unterminated string: missing closing {}",
                char::from(*quote)
            ),
        }
    }
}

/// The numeric shape a conversion expected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NumericKind {
    Integer,
    Decimal,
}

impl fmt::Display for NumericKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericKind::Integer => f.write_str("an integer"),
            NumericKind::Decimal => f.write_str("a decimal"),
        }
    }
}

/// Failure converting a token's text to a number.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    /// The text is not a literal of the expected kind.
    #[error("{position}: `{text}` is not {expected} literal")]
    Malformed {
        text: String,
        expected: NumericKind,
        position: Position,
    },
    /// The text is a valid integer literal but does not fit the target type.
    #[error("{position}: integer literal `{text}` is out of range for the requested type")]
    OutOfRange { text: String, position: Position },
}

#[cfg(test)]
mod tests;
