//! Game configuration.
//!
//! Configuration over convention: the engine hardcodes neither the
//! alphabet size nor the input-race policy. Defaults reproduce the
//! reference game (4 symbols, permissive input, 800ms replay steps);
//! the hardening options are opt-in/opt-out here.

use serde::{Deserialize, Serialize};

use super::moves::MoveAlphabet;

/// Inter-move delay the reference presentation uses during replay, in
/// milliseconds. A hint for the port; the engine never waits on it.
pub const DEFAULT_REPLAY_STEP_MS: u32 = 800;

/// Engine configuration, fixed for the life of a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of move symbols.
    pub alphabet_size: u8,

    /// Reject `record_move` while a replay is in flight.
    ///
    /// Off by default: the reference accepts input during playback and
    /// relies on presentation timing.
    pub strict_input_guard: bool,

    /// Reject moves outside the alphabet instead of treating them as a
    /// mismatch. On by default; the reference trusts the capture layer.
    pub validate_moves: bool,

    /// Replay step delay hint passed through to the presentation layer.
    pub replay_step_ms: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfigBuilder::new().build()
    }
}

impl GameConfig {
    /// Start building a configuration with reference defaults.
    #[must_use]
    pub fn builder() -> GameConfigBuilder {
        GameConfigBuilder::new()
    }

    /// Build the alphabet this configuration describes.
    #[must_use]
    pub fn alphabet(&self) -> MoveAlphabet {
        MoveAlphabet::new(self.alphabet_size)
    }
}

/// Builder for `GameConfig`.
#[derive(Clone, Debug)]
pub struct GameConfigBuilder {
    alphabet_size: u8,
    strict_input_guard: bool,
    validate_moves: bool,
    replay_step_ms: u32,
}

impl Default for GameConfigBuilder {
    fn default() -> Self {
        Self {
            alphabet_size: MoveAlphabet::DEFAULT_SIZE,
            strict_input_guard: false,
            validate_moves: true,
            replay_step_ms: DEFAULT_REPLAY_STEP_MS,
        }
    }
}

impl GameConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alphabet_size(mut self, size: u8) -> Self {
        assert!(size > 0, "Alphabet must have at least 1 symbol");
        self.alphabet_size = size;
        self
    }

    pub fn strict_input_guard(mut self, enabled: bool) -> Self {
        self.strict_input_guard = enabled;
        self
    }

    pub fn validate_moves(mut self, enabled: bool) -> Self {
        self.validate_moves = enabled;
        self
    }

    pub fn replay_step_ms(mut self, ms: u32) -> Self {
        self.replay_step_ms = ms;
        self
    }

    #[must_use]
    pub fn build(self) -> GameConfig {
        GameConfig {
            alphabet_size: self.alphabet_size,
            strict_input_guard: self.strict_input_guard,
            validate_moves: self.validate_moves,
            replay_step_ms: self.replay_step_ms,
        }
    }
}
