//! Generic tokenizer engine.
//!
//! `lexkit_core` provides the pieces every hand-written lexer needs and
//! nothing grammar-specific:
//!
//! - [`Cursor`]: a byte cursor over a borrowed source that tracks offset,
//!   line and column, with primitive readers for integers, decimals, bare
//!   and quoted strings.
//! - [`Token`]: an immutable, borrowed view of one lexeme plus its position.
//! - [`Grammar`]: the single override point a concrete lexer implements.
//! - [`Tokenizer`]: drives a [`Grammar`] and adds one-token lookahead and
//!   pushback on top of it.
//!
//! # Example
//!
//! ```
//! use lexkit_core::{Cursor, Grammar, LexError, StopSet, Token, Tokenizer};
//!
//! #[derive(Clone, Copy, Debug, PartialEq, Eq)]
//! enum Tag { Word, Eof }
//!
//! struct Words;
//!
//! const STOPS: StopSet = StopSet::new(b" \t\r\n");
//!
//! impl Grammar for Words {
//!     type Tag = Tag;
//!
//!     fn emit_token<'src>(
//!         &mut self,
//!         cursor: &mut Cursor<'src>,
//!     ) -> Result<Token<'src, Tag>, LexError> {
//!         cursor.skip_whitespace();
//!         if cursor.eof() {
//!             return Ok(cursor.eof_token(Tag::Eof));
//!         }
//!         let start = cursor.position();
//!         match cursor.read_string(start.offset, &STOPS) {
//!             Some(end) => Ok(cursor.token(Tag::Word, start, end)),
//!             None => Err(cursor.unrecognized(start)),
//!         }
//!     }
//! }
//!
//! let mut tokenizer = Tokenizer::new("hello world", Words);
//! assert_eq!(tokenizer.next_token()?.data(), "hello");
//! assert_eq!(tokenizer.next_token()?.data(), "world");
//! assert!(tokenizer.next_token()?.is_eof());
//! # Ok::<(), LexError>(())
//! ```

mod cursor;
mod error;
mod grammar;
mod position;
mod stop_set;
mod token;
mod tokenizer;

pub use cursor::{Cursor, Reader};
pub use error::{ConversionError, LexError, LexErrorKind, NumericKind};
pub use grammar::Grammar;
pub use position::Position;
pub use stop_set::StopSet;
pub use token::Token;
pub use tokenizer::Tokenizer;
