//! Round logic: sequence growth, incremental matching, scoring.
//!
//! `RoundController` owns one `GameState` and drives the whole game loop:
//!
//! - `new_game` resets the state and starts round 1
//! - `append_move` extends the sequence by one random move
//! - `record_move` evaluates one player input incrementally
//!
//! Each player input yields exactly one of three outcomes: the round
//! continues, the round completes (score +1, sequence +1), or the move
//! mismatched and the whole game hard-resets to round 1. A mismatch is
//! never an error; it is the game working as designed.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::core::{GameConfig, GamePhase, GameRng, GameRngState, GameState, Move, MoveSource};
use crate::error::GameError;
use crate::port::Presenter;

/// Result of evaluating one player move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Partial match; the round continues with the next input.
    Continue,
    /// The full sequence was reproduced: score incremented, sequence
    /// extended for the next round.
    RoundComplete {
        /// Score after the increment.
        score: u32,
    },
    /// The move diverged from the sequence. The game has already been
    /// reset to round 1 with score 0 when this is returned.
    Mismatch,
}

/// Drives the game loop against a single owned `GameState`.
///
/// Generic over the move source (deterministic RNG in production,
/// scripted moves in tests) and the presentation port.
pub struct RoundController<S, P> {
    config: GameConfig,
    state: GameState,
    source: S,
    presenter: P,
}

impl<P: Presenter> RoundController<GameRng, P> {
    /// Create a controller with the production RNG seeded from `seed`.
    #[must_use]
    pub fn with_seed(config: GameConfig, seed: u64, presenter: P) -> Self {
        Self::new(config, GameRng::new(seed), presenter)
    }

    /// Capture the full game for later restore. Draws after a restore
    /// continue exactly where the snapshot left off.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            config: self.config.clone(),
            state: self.state.clone(),
            rng: self.source.state(),
        }
    }

    /// Rebuild a controller from a snapshot.
    #[must_use]
    pub fn restore(snapshot: GameSnapshot, presenter: P) -> Self {
        Self {
            config: snapshot.config,
            state: snapshot.state,
            source: GameRng::from_state(&snapshot.rng),
            presenter,
        }
    }
}

impl<S: MoveSource, P: Presenter> RoundController<S, P> {
    /// Create a controller in the pre-start `Idle` phase.
    ///
    /// Nothing happens until `new_game`.
    #[must_use]
    pub fn new(config: GameConfig, source: S, presenter: P) -> Self {
        let state = GameState::new(config.alphabet());
        Self {
            config,
            state,
            source,
            presenter,
        }
    }

    /// Reset everything and start round 1.
    ///
    /// Clears score and both sequences, re-renders the score display,
    /// then extends the sequence by the first move (triggering a replay
    /// request). Callable from any phase; calling it twice in a row is
    /// observably identical to calling it once, aside from the drawn
    /// move.
    pub fn new_game(&mut self) {
        self.state.reset();
        self.presenter.render_score(0);
        info!("new game");
        self.extend_sequence();
    }

    /// Extend the sequence by one random move and begin the next round.
    ///
    /// Clears the player input, draws uniformly from the alphabet, and
    /// requests a replay of the full sequence from its first element.
    ///
    /// ## Errors
    ///
    /// `GameError::NotStarted` before the first `new_game`.
    pub fn append_move(&mut self) -> Result<Move, GameError> {
        if self.state.phase() == GamePhase::Idle {
            return Err(GameError::NotStarted);
        }
        Ok(self.extend_sequence())
    }

    /// Record one player move and evaluate it against the sequence.
    ///
    /// ## Errors
    ///
    /// - `GameError::NotStarted` before the first `new_game`
    /// - `GameError::InputLocked` during playback with the strict guard
    /// - `GameError::InvalidMove` for out-of-alphabet moves when
    ///   validation is enabled
    ///
    /// Errors leave the state untouched; in particular an invalid symbol
    /// is never misattributed to a wrong-move event.
    pub fn record_move(&mut self, mv: Move) -> Result<MoveOutcome, GameError> {
        match self.state.phase() {
            GamePhase::Idle => return Err(GameError::NotStarted),
            GamePhase::Playback => return Err(GameError::InputLocked),
            GamePhase::AwaitingInput => {}
        }
        if self.config.validate_moves && !self.state.alphabet().contains(mv) {
            return Err(GameError::InvalidMove(mv));
        }

        let expected = self.state.expected_move();
        self.state.push_input(mv);

        if expected != Some(mv) {
            // Hard reset to round 1, not a retry of the current round.
            warn!(entered = %mv, "wrong move, resetting");
            self.presenter.notify_wrong_move();
            self.new_game();
            return Ok(MoveOutcome::Mismatch);
        }

        if self.state.player_input().len() == self.state.sequence().len() {
            self.state.increment_score();
            let score = self.state.score();
            info!(score, "round complete");
            self.presenter.render_score(score);
            self.extend_sequence();
            return Ok(MoveOutcome::RoundComplete { score });
        }

        Ok(MoveOutcome::Continue)
    }

    /// Signal that the presentation finished replaying the sequence.
    ///
    /// Unlocks input in strict mode; a no-op otherwise. This is the
    /// completion signal that replaces wall-clock coupling between the
    /// replay animation and enabled input.
    pub fn playback_finished(&mut self) {
        if self.state.phase() == GamePhase::Playback {
            self.state.set_phase(GamePhase::AwaitingInput);
        }
    }

    /// Rewind the replay cursor to the start of the sequence.
    ///
    /// For presentation drivers that step through the sequence one
    /// highlight at a time.
    pub fn begin_replay(&mut self) {
        self.state.rewind_playback();
    }

    /// The move under the replay cursor, advancing it; `None` once the
    /// replay has shown the whole sequence.
    pub fn next_playback_move(&mut self) -> Option<Move> {
        self.state.advance_playback()
    }

    /// Read access to the full state, for display and debugging.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Consume the controller and return its presenter, for asserting on
    /// recorded side effects in tests.
    pub fn into_presenter(self) -> P {
        self.presenter
    }

    /// One round start: clear input, draw, extend, request replay.
    fn extend_sequence(&mut self) -> Move {
        self.state.clear_input();
        let mv = self.source.next_move(self.state.alphabet());
        debug_assert!(self.state.alphabet().contains(mv), "source left alphabet");
        self.state.push_sequence(mv);
        self.state.rewind_playback();
        debug!(drawn = %mv, length = self.state.sequence().len(), "sequence extended");

        self.presenter.replay_sequence(self.state.sequence().clone());
        let next = if self.config.strict_input_guard {
            GamePhase::Playback
        } else {
            GamePhase::AwaitingInput
        };
        self.state.set_phase(next);
        mv
    }
}

/// Serializable capture of a running game: configuration, round state,
/// and RNG position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub config: GameConfig,
    pub state: GameState,
    pub rng: GameRngState,
}
