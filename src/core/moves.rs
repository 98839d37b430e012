//! Move symbols and the game alphabet.
//!
//! A `Move` is an opaque symbol identifier. The engine never interprets
//! moves - the presentation layer assigns meaning (button ids, colors,
//! tones) via its own mapping.
//!
//! The reference game uses four symbols; `MoveAlphabet` supports any small
//! fixed set, chosen once at configuration time and immutable afterward.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// A single symbolic game input.
///
/// Opaque identifier in the engine; games map symbols to their inputs
/// (e.g. symbol 0 = "button1").
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move(pub u8);

impl Move {
    /// Create a new move symbol.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw symbol value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Move({})", self.0)
    }
}

/// The fixed set of valid move symbols for a game.
///
/// Built once at game creation and never modified. Symbols are the
/// contiguous range `0..len`, which keeps uniform selection a single
/// index draw.
///
/// SmallVec keeps the common 4-symbol alphabet inline without allocation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveAlphabet {
    symbols: SmallVec<[Move; 4]>,
}

impl MoveAlphabet {
    /// Number of symbols in the reference game.
    pub const DEFAULT_SIZE: u8 = 4;

    /// Create an alphabet of `size` symbols, `Move(0)..Move(size - 1)`.
    ///
    /// ## Panics
    ///
    /// Panics if `size` is zero; a game needs at least one symbol.
    #[must_use]
    pub fn new(size: u8) -> Self {
        assert!(size > 0, "Alphabet must have at least 1 symbol");

        Self {
            symbols: (0..size).map(Move).collect(),
        }
    }

    /// Number of symbols.
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always false; the constructor rejects empty alphabets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// All symbols in order.
    #[must_use]
    pub fn symbols(&self) -> &[Move] {
        &self.symbols
    }

    /// Check whether a move belongs to this alphabet.
    #[must_use]
    pub fn contains(&self, mv: Move) -> bool {
        (mv.raw() as usize) < self.symbols.len()
    }

    /// Get the symbol at an index, if in range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Move> {
        self.symbols.get(index).copied()
    }
}

impl Default for MoveAlphabet {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SIZE)
    }
}
