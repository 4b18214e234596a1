//! Tokens: borrowed views of classified lexemes.

use std::fmt;
use std::num::{ParseFloatError, ParseIntError};
use std::ops::Range;
use std::str::FromStr;

use crate::cursor::{scan_decimal, scan_integer};
use crate::{ConversionError, NumericKind, Position, StopSet};

/// One lexeme: its tag, its text and where it starts.
///
/// The text borrows from the source, so a token is cheap to copy and cannot
/// outlive the source. The end-of-input sentinel carries no text at all.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token<'src, T> {
    tag: T,
    text: Option<&'src str>,
    position: Position,
}

impl<'src, T: Copy> Token<'src, T> {
    /// Create a token for the lexeme `text` starting at `position`.
    pub fn new(tag: T, text: &'src str, position: Position) -> Self {
        debug_assert!(!text.is_empty(), "only the end-of-input sentinel is empty");
        Token {
            tag,
            text: Some(text),
            position,
        }
    }

    /// Create the end-of-input sentinel at `position`.
    pub fn eof(tag: T, position: Position) -> Self {
        Token {
            tag,
            text: None,
            position,
        }
    }

    #[inline]
    pub fn tag(&self) -> T {
        self.tag
    }

    /// The lexeme text. Empty for the end-of-input sentinel.
    #[inline]
    pub fn data(&self) -> &'src str {
        self.text.unwrap_or_default()
    }

    /// Returns `true` for the end-of-input sentinel.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.text.is_none()
    }

    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Byte offset of the first byte of the lexeme.
    #[inline]
    pub fn offset(&self) -> usize {
        self.position.offset
    }

    #[inline]
    pub fn line(&self) -> u32 {
        self.position.line
    }

    #[inline]
    pub fn column(&self) -> u32 {
        self.position.column
    }

    /// Byte offset just past the lexeme.
    pub fn end(&self) -> usize {
        self.position.offset + self.data().len()
    }

    /// The half-open byte range of the lexeme in the source.
    pub fn range(&self) -> Range<usize> {
        self.offset()..self.end()
    }

    /// Parse the text as an integer of type `N`.
    ///
    /// Accepts an optional leading `-` followed by decimal digits; a leading
    /// `+`, separators and surrounding whitespace are rejected. Callers check
    /// the tag first, so a failure here is a grammar or caller bug reported
    /// as a [`ConversionError`] rather than a panic.
    pub fn to_integer<N>(&self) -> Result<N, ConversionError>
    where
        N: FromStr<Err = ParseIntError>,
    {
        let text = self.data();
        if scan_integer(text.as_bytes(), 0, &StopSet::EMPTY) != Some(text.len()) {
            return Err(self.malformed(NumericKind::Integer));
        }
        // The shape is valid, so the only possible failure is range (which
        // includes a `-` for an unsigned target).
        text.parse().map_err(|_| ConversionError::OutOfRange {
            text: text.to_owned(),
            position: self.position,
        })
    }

    /// Parse the text as a floating-point number of type `N`.
    ///
    /// Accepts `-?D+`, `-?D+.D+` and `-?.D+`. Exponents, `inf` and `NaN` are
    /// rejected even though Rust's own float parser would take them.
    pub fn to_float<N>(&self) -> Result<N, ConversionError>
    where
        N: FromStr<Err = ParseFloatError>,
    {
        let text = self.data();
        if scan_decimal(text.as_bytes(), 0, &StopSet::EMPTY) != Some(text.len()) {
            return Err(self.malformed(NumericKind::Decimal));
        }
        text.parse().map_err(|_| self.malformed(NumericKind::Decimal))
    }

    fn malformed(&self, expected: NumericKind) -> ConversionError {
        ConversionError::Malformed {
            text: self.data().to_owned(),
            expected,
            position: self.position,
        }
    }
}

/// Formats as `Tag "text" @ line:column`, or `Tag @ line:column` for the
/// sentinel.
impl<T: fmt::Debug> fmt::Display for Token<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.text {
            Some(text) => write!(f, "{:?} {:?} @ {}", self.tag, text, self.position),
            None => write!(f, "{:?} @ {}", self.tag, self.position),
        }
    }
}
