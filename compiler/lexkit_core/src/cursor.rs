//! Position-tracking cursor over a borrowed source.
//!
//! The cursor walks the source byte by byte and keeps the running line and
//! column of the next byte to be consumed. All readers follow one protocol:
//! they are handed the offset where the lexeme starts (which may already be
//! behind the cursor, typically by the one byte a grammar consumed to
//! dispatch on), scan forward from there, and either
//!
//! - return `Some(end)` and leave the cursor at `end`, or
//! - return `None` and leave the cursor untouched.
//!
//! A reader never consumes a byte from its [`StopSet`]. The numeric readers
//! additionally insist that the lexeme is *terminated*: it must be followed by
//! end of input or a stop byte, so `12.5` is not an integer followed by `.5`
//! and `42abc` is not a number at all.

use crate::{LexError, Position, StopSet, Token};

/// A reader as used by [`Cursor::classify`].
///
/// Every `read_*` method taking `(start, stops)` coerces to this type.
pub type Reader<'src> = fn(&mut Cursor<'src>, usize, &StopSet) -> Option<usize>;

/// Cursor over a fully resident source string.
///
/// The cursor is [`Copy`], so a grammar can snapshot it before speculative
/// scanning and restore it by assignment.
///
/// # Invariants
///
/// - `offset <= source.len()`.
/// - `line` starts at 1 and increments once per `\n` consumed.
/// - `column` resets to 1 after each `\n` and increments once per other
///   byte consumed.
#[derive(Copy, Clone, Debug)]
pub struct Cursor<'src> {
    source: &'src str,
    pos: usize,
    line: u32,
    column: u32,
}

impl<'src> Cursor<'src> {
    /// Create a cursor positioned at the first byte of `source`.
    pub fn new(source: &'src str) -> Self {
        Cursor {
            source,
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    #[inline]
    fn bytes(&self) -> &'src [u8] {
        self.source.as_bytes()
    }

    // ─── Position ──────────────────────────────────────────────

    /// Returns `true` once every byte has been consumed.
    #[inline]
    pub fn eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Current byte offset.
    #[inline]
    pub fn offset(&self) -> usize {
        self.pos
    }

    /// Line of the next byte to be consumed (1-based).
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Column of the next byte to be consumed (1-based).
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Offset, line and column of the next byte to be consumed.
    #[inline]
    pub fn position(&self) -> Position {
        Position::new(self.pos, self.line, self.column)
    }

    /// Total source length in bytes.
    #[inline]
    pub fn length(&self) -> usize {
        self.source.len()
    }

    /// The whole source.
    pub fn source(&self) -> &'src str {
        self.source
    }

    /// The not yet consumed part of the source.
    pub fn remainder(&self) -> &'src str {
        self.slice(self.pos, self.source.len())
    }

    /// Rewind to the start of the source.
    pub fn reset(&mut self) {
        *self = Cursor::new(self.source);
    }

    /// Extract `start..end` from the source.
    ///
    /// # Panics
    ///
    /// Panics if the range is out of bounds or does not fall on UTF-8
    /// character boundaries. Ranges produced by the readers always do: they
    /// start and end next to ASCII bytes or at the ends of the source.
    pub fn slice(&self, start: usize, end: usize) -> &'src str {
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        &self.source[start..end]
    }

    // ─── Characters ────────────────────────────────────────────

    /// Returns `true` for space, tab, line feed and carriage return.
    #[inline]
    pub fn is_whitespace(byte: u8) -> bool {
        StopSet::WHITESPACE.contains(byte)
    }

    /// The next byte, without consuming it. `None` at end of input.
    #[inline]
    pub fn peek_char(&self) -> Option<u8> {
        self.bytes().get(self.pos).copied()
    }

    /// Consume and return the next byte.
    ///
    /// # Panics
    ///
    /// Panics when called at end of input. Grammars check [`eof`](Self::eof)
    /// before dispatching on the next byte.
    pub fn next_char(&mut self) -> u8 {
        assert!(
            !self.eof(),
            "next_char called at end of input (offset {})",
            self.pos
        );
        let byte = self.bytes()[self.pos];
        self.pos += 1;
        if byte == b'\n' {
            self.line = self.line.saturating_add(1);
            self.column = 1;
        } else {
            self.column = self.column.saturating_add(1);
        }
        byte
    }

    /// Consume bytes while `pred` holds.
    pub fn discard_while(&mut self, pred: impl Fn(u8) -> bool) {
        let rest = &self.bytes()[self.pos..];
        let len = rest.iter().take_while(|&&b| pred(b)).count();
        self.advance_to(self.pos + len);
    }

    /// Consume bytes up to, not including, the first byte in `stops`.
    pub fn discard_until(&mut self, stops: &StopSet) {
        self.discard_while(|b| !stops.contains(b));
    }

    /// Consume leading whitespace.
    ///
    /// Whitespace never becomes part of a token; grammars call this before
    /// recording the start position of a lexeme.
    pub fn skip_whitespace(&mut self) {
        self.discard_while(Self::is_whitespace);
    }

    /// Move the cursor forward to `end`, updating line and column for every
    /// byte passed over.
    fn advance_to(&mut self, end: usize) {
        debug_assert!(end <= self.source.len(), "advance past end of source");
        if end <= self.pos {
            return;
        }
        let skipped = &self.bytes()[self.pos..end];
        match memchr::memrchr(b'\n', skipped) {
            Some(last) => {
                let newlines = memchr::memchr_iter(b'\n', skipped).count();
                self.line = self.line.saturating_add(saturate(newlines));
                self.column = saturate(skipped.len() - last);
            }
            None => {
                self.column = self.column.saturating_add(saturate(skipped.len()));
            }
        }
        self.pos = end;
    }

    // ─── Readers ───────────────────────────────────────────────

    /// Read an integer lexeme starting at `start`: an optional `-` followed by
    /// one or more decimal digits, terminated by end of input or a stop byte.
    pub fn read_integer(&mut self, start: usize, stops: &StopSet) -> Option<usize> {
        let end = scan_integer(self.bytes(), start, stops)?;
        self.advance_to(end);
        Some(end)
    }

    /// Read a decimal lexeme starting at `start`: `-?D+`, `-?D+.D+` or
    /// `-?.D+`, terminated by end of input or a stop byte.
    ///
    /// Plain integers are accepted as well, so grammars try
    /// [`read_integer`](Self::read_integer) first.
    pub fn read_decimal(&mut self, start: usize, stops: &StopSet) -> Option<usize> {
        let end = scan_decimal(self.bytes(), start, stops)?;
        self.advance_to(end);
        Some(end)
    }

    /// Read everything from `start` up to end of input or the first stop
    /// byte. Fails only when there is nothing to read.
    pub fn read_string(&mut self, start: usize, stops: &StopSet) -> Option<usize> {
        let end = scan_string(self.bytes(), start, stops)?;
        self.advance_to(end);
        Some(end)
    }

    /// Read a quoted string whose opening `quote` is at `start`.
    ///
    /// Returns the offset just past the closing quote. There are no escape
    /// sequences; the first matching quote closes the string, and the string
    /// may span lines. Returns `None` when the string is unterminated.
    pub fn read_quoted_string(&mut self, start: usize, quote: u8) -> Option<usize> {
        debug_assert!(quote.is_ascii(), "quote character must be ASCII");
        let bytes = self.bytes();
        if bytes.get(start) != Some(&quote) {
            return None;
        }
        let body = start + 1;
        let close = memchr::memchr(quote, &bytes[body..])?;
        let end = body + close + 1;
        self.advance_to(end);
        Some(end)
    }

    /// Try each reader of `chain` in order and return the tag and end of the
    /// first one that matches.
    ///
    /// The order matters: an integer is also a valid decimal and any
    /// non-empty lexeme is a valid string, so chains go from the most to the
    /// least specific reader.
    pub fn classify<T: Copy>(
        &mut self,
        start: usize,
        stops: &StopSet,
        chain: &[(T, Reader<'src>)],
    ) -> Option<(T, usize)> {
        chain
            .iter()
            .find_map(|&(tag, read)| read(&mut *self, start, stops).map(|end| (tag, end)))
    }

    // ─── Token construction ────────────────────────────────────

    /// Build a token spanning `start.offset..end`.
    pub fn token<T: Copy>(&self, tag: T, start: Position, end: usize) -> Token<'src, T> {
        Token::new(tag, self.slice(start.offset, end), start)
    }

    /// Build the end-of-input sentinel at the current position.
    pub fn eof_token<T: Copy>(&self, tag: T) -> Token<'src, T> {
        Token::eof(tag, self.position())
    }

    /// Build an [`UnrecognizedCharacter`](crate::LexErrorKind::UnrecognizedCharacter)
    /// error for the byte at `at`.
    pub fn unrecognized(&self, at: Position) -> LexError {
        let byte = self.bytes().get(at.offset).copied().unwrap_or(0);
        LexError::unrecognized(byte, at)
    }
}

fn saturate(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

/// `true` if the lexeme ending at `end` is followed by end of input or a
/// stop byte.
fn is_terminated(bytes: &[u8], end: usize, stops: &StopSet) -> bool {
    match bytes.get(end) {
        Some(&b) => stops.contains(b),
        None => true,
    }
}

fn eat_digits(bytes: &[u8], from: usize) -> usize {
    bytes[from.min(bytes.len())..]
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .count()
}

fn eat_sign(bytes: &[u8], from: usize) -> usize {
    usize::from(bytes.get(from) == Some(&b'-'))
}

/// End of the integer lexeme at `start`, if there is one.
pub(crate) fn scan_integer(bytes: &[u8], start: usize, stops: &StopSet) -> Option<usize> {
    let digits_start = start + eat_sign(bytes, start);
    let digits = eat_digits(bytes, digits_start);
    if digits == 0 {
        return None;
    }
    let end = digits_start + digits;
    is_terminated(bytes, end, stops).then_some(end)
}

/// End of the decimal lexeme at `start`, if there is one.
pub(crate) fn scan_decimal(bytes: &[u8], start: usize, stops: &StopSet) -> Option<usize> {
    let int_start = start + eat_sign(bytes, start);
    let int_digits = eat_digits(bytes, int_start);
    let mut end = int_start + int_digits;
    if bytes.get(end) == Some(&b'.') {
        let frac_digits = eat_digits(bytes, end + 1);
        if frac_digits == 0 {
            return None;
        }
        end += 1 + frac_digits;
    } else if int_digits == 0 {
        return None;
    }
    is_terminated(bytes, end, stops).then_some(end)
}

fn scan_string(bytes: &[u8], start: usize, stops: &StopSet) -> Option<usize> {
    let len = bytes[start.min(bytes.len())..]
        .iter()
        .take_while(|&&b| !stops.contains(b))
        .count();
    (len > 0).then_some(start + len)
}
