//! Token tags of the brace grammar.
//!
//! Tags are single bits so a consumer can ask for "any of" several kinds at
//! once, see [`expect`](crate::expect).

use bitflags::bitflags;

bitflags! {
    /// Lexical category of a brace-grammar token.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct BraceToken: u32 {
        /// `-?[0-9]+`
        const INTEGER = 1 << 0;
        /// `-?[0-9]*.[0-9]+`
        const DECIMAL = 1 << 1;
        /// Any other run of non-delimiter bytes.
        const STRING = 1 << 2;
        /// `{`
        const O_BRACE = 1 << 3;
        /// `}`
        const C_BRACE = 1 << 4;
        /// `=`
        const EQUALS = 1 << 5;
        /// `;`
        const SEMICOLON = 1 << 6;
        /// End of input.
        const EOF = 1 << 7;
        /// `"..."`, quotes included in the token text.
        const QUOTED = 1 << 8;

        /// Anything that can stand on the right of `=`.
        const VALUE = Self::INTEGER.bits()
            | Self::DECIMAL.bits()
            | Self::STRING.bits()
            | Self::QUOTED.bits();
    }
}

const NAMES: [(BraceToken, &str); 9] = [
    (BraceToken::INTEGER, "integer"),
    (BraceToken::DECIMAL, "decimal"),
    (BraceToken::STRING, "string"),
    (BraceToken::QUOTED, "quoted string"),
    (BraceToken::O_BRACE, "'{'"),
    (BraceToken::C_BRACE, "'}'"),
    (BraceToken::EQUALS, "'='"),
    (BraceToken::SEMICOLON, "';'"),
    (BraceToken::EOF, "end of input"),
];

impl BraceToken {
    /// Constant name of the first flag in this mask, e.g. `O_BRACE`.
    pub fn name(self) -> &'static str {
        self.iter_names().next().map_or("EMPTY", |(name, _)| name)
    }

    /// Human-readable list of the kinds in this mask, for diagnostics.
    pub fn describe(self) -> String {
        let names: Vec<&str> = NAMES
            .iter()
            .filter(|&&(flag, _)| self.contains(flag))
            .map(|&(_, name)| name)
            .collect();
        match names.as_slice() {
            [] => "nothing".to_owned(),
            [only] => (*only).to_owned(),
            [init @ .., last] => format!("{} or {last}", init.join(", ")),
        }
    }
}

#[cfg(test)]
mod tests;
