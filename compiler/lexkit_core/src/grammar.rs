//! The override point for concrete lexers.

use std::fmt;

use crate::{Cursor, LexError, Token};

/// A concrete token grammar.
///
/// A grammar owns its tag domain and one scanning step. The
/// [`Tokenizer`](crate::Tokenizer) calls [`emit_token`](Grammar::emit_token)
/// whenever no pushed-back token is pending.
pub trait Grammar {
    /// Token tag. Opaque to the engine, which only copies and compares it,
    /// so bitflag types work as well as plain enums.
    type Tag: Copy + Eq + fmt::Debug;

    /// Scan exactly one token starting at the cursor.
    ///
    /// Implementations skip leading whitespace, record the start position,
    /// then either recognize a structural token directly or classify the
    /// lexeme with [`Cursor::classify`]. Once the input is exhausted they
    /// return [`Cursor::eof_token`] on every call.
    fn emit_token<'src>(
        &mut self,
        cursor: &mut Cursor<'src>,
    ) -> Result<Token<'src, Self::Tag>, LexError>;
}

/// Lets a tokenizer borrow a grammar instead of owning it.
impl<G: Grammar + ?Sized> Grammar for &mut G {
    type Tag = G::Tag;

    fn emit_token<'src>(
        &mut self,
        cursor: &mut Cursor<'src>,
    ) -> Result<Token<'src, Self::Tag>, LexError> {
        (**self).emit_token(cursor)
    }
}
