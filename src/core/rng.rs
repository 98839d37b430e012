//! Deterministic random move generation.
//!
//! The engine's only nondeterminism is drawing the next move when a round
//! begins. That draw goes through the `MoveSource` trait so tests can
//! supply scripted sequences; the production source is a seeded ChaCha8
//! generator whose state can be captured and restored in O(1).

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use super::moves::{Move, MoveAlphabet};

/// Source of the next computer-generated move.
///
/// Implementations must return a member of `alphabet`. The production
/// implementation (`GameRng`) draws uniformly; `ScriptedMoves` replays a
/// fixed list for tests.
pub trait MoveSource {
    /// Produce one move from the alphabet.
    fn next_move(&mut self, alphabet: &MoveAlphabet) -> Move;
}

/// Deterministic RNG: same seed produces the identical game.
///
/// Uses ChaCha8 for speed while maintaining high quality randomness.
/// State capture uses the ChaCha word position, so serialization cost does
/// not grow with the number of draws.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

impl MoveSource for GameRng {
    /// Draw uniformly: each symbol with probability `1 / alphabet.len()`,
    /// independent across calls.
    fn next_move(&mut self, alphabet: &MoveAlphabet) -> Move {
        let index = self.inner.gen_range(0..alphabet.len());
        alphabet.symbols()[index]
    }
}

/// Serializable RNG state for snapshotting a game mid-run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed.
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter).
    pub word_pos: u128,
}

/// Scripted move source for tests.
///
/// Replays the given moves in order, cycling back to the start when
/// exhausted so long games never run dry.
#[derive(Clone, Debug)]
pub struct ScriptedMoves {
    moves: VecDeque<Move>,
}

impl ScriptedMoves {
    /// Create a source that cycles through `moves`.
    ///
    /// ## Panics
    ///
    /// Panics if `moves` is empty.
    #[must_use]
    pub fn new(moves: impl Into<VecDeque<Move>>) -> Self {
        let moves = moves.into();
        assert!(!moves.is_empty(), "Scripted source needs at least 1 move");
        Self { moves }
    }
}

impl MoveSource for ScriptedMoves {
    fn next_move(&mut self, _alphabet: &MoveAlphabet) -> Move {
        // Non-empty by construction.
        let mv = self.moves.pop_front().unwrap();
        self.moves.push_back(mv);
        mv
    }
}
