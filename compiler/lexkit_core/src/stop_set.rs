//! Byte sets that terminate a reader's scan.

use std::fmt;

/// A set of ASCII bytes stored as a 256-bit table.
///
/// Readers stop in front of the first byte contained in the set without
/// consuming it. Sets are built at compile time:
///
/// ```
/// use lexkit_core::StopSet;
///
/// const STOPS: StopSet = StopSet::new(b"{};= \n\r\t");
/// assert!(STOPS.contains(b';'));
/// assert!(!STOPS.contains(b'.'));
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct StopSet {
    bits: [u64; 4],
}

impl StopSet {
    /// The set containing nothing: readers run to end of input.
    pub const EMPTY: StopSet = StopSet { bits: [0; 4] };

    /// Space, tab, line feed and carriage return.
    pub const WHITESPACE: StopSet = StopSet::new(b" \t\n\r");

    /// Build a set from a list of ASCII bytes.
    ///
    /// # Panics
    ///
    /// Panics (at compile time when used in a `const`) if any byte is not
    /// ASCII. Readers slice the source at stop bytes, so a non-ASCII stop
    /// byte could split a UTF-8 sequence.
    pub const fn new(bytes: &[u8]) -> Self {
        let mut set = StopSet::EMPTY;
        let mut i = 0;
        while i < bytes.len() {
            set = set.with(bytes[i]);
            i += 1;
        }
        set
    }

    /// Returns a copy of this set that also contains `byte`.
    ///
    /// # Panics
    ///
    /// Panics if `byte` is not ASCII.
    pub const fn with(self, byte: u8) -> Self {
        assert!(byte.is_ascii(), "stop characters must be ASCII");
        let mut bits = self.bits;
        bits[(byte >> 6) as usize] |= 1 << (byte & 63);
        StopSet { bits }
    }

    /// Returns the union of two sets.
    pub const fn union(self, other: StopSet) -> Self {
        StopSet {
            bits: [
                self.bits[0] | other.bits[0],
                self.bits[1] | other.bits[1],
                self.bits[2] | other.bits[2],
                self.bits[3] | other.bits[3],
            ],
        }
    }

    #[inline]
    pub const fn contains(&self, byte: u8) -> bool {
        self.bits[(byte >> 6) as usize] & (1 << (byte & 63)) != 0
    }

    pub const fn is_empty(&self) -> bool {
        self.bits[0] == 0 && self.bits[1] == 0 && self.bits[2] == 0 && self.bits[3] == 0
    }

    /// Iterate over the members in ascending byte order.
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        (0..=u8::MAX).filter(|&b| self.contains(b))
    }
}

impl Default for StopSet {
    fn default() -> Self {
        StopSet::EMPTY
    }
}

impl fmt::Debug for StopSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set()
            .entries(self.iter().map(|b| char::from(b).escape_default().to_string()))
            .finish()
    }
}
