//! Brace-delimited key/value grammar.
//!
//! The grammar recognizes blocks of `key = value;` pairs:
//!
//! ```text
//! {
//!     // comment
//!     classname = "info_player_start";
//!     angle =90;
//!     scale = -0.5;
//! }
//! ```
//!
//! Punctuation (`{`, `}`, `=`, `;`) is one token per byte. Everything else
//! is classified by the first matching reader in the order integer, decimal,
//! string, terminated by whitespace or punctuation.
//!
//! ```
//! use lexkit_brace::{BraceGrammar, BraceToken, BraceTokenizer};
//!
//! let tags: Vec<BraceToken> = BraceTokenizer::new("{ angle =90; }", BraceGrammar::default())
//!     .map(|token| token.map(|t| t.tag()))
//!     .collect::<Result<_, _>>()?;
//! assert_eq!(
//!     tags,
//!     [
//!         BraceToken::O_BRACE,
//!         BraceToken::STRING,
//!         BraceToken::EQUALS,
//!         BraceToken::INTEGER,
//!         BraceToken::SEMICOLON,
//!         BraceToken::C_BRACE,
//!     ]
//! );
//! # Ok::<(), lexkit_core::LexError>(())
//! ```

mod expect;
mod grammar;
mod tag;

pub use expect::{expect, quoted_content, ExpectError};
pub use grammar::{BraceGrammar, BraceOptions};
pub use tag::BraceToken;

use lexkit_core::{Token, Tokenizer};

/// A token of the brace grammar.
pub type BraceTok<'src> = Token<'src, BraceToken>;

/// Tokenizer over the brace grammar.
pub type BraceTokenizer<'src> = Tokenizer<'src, BraceGrammar>;
