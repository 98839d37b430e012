//! # sequence-recall
//!
//! Core engine for a Simon-style memory game: the computer grows a random
//! sequence of moves one element per round, the player reproduces it, and
//! the engine scores, detects mismatches, and advances or resets.
//!
//! ## Design Principles
//!
//! 1. **Explicit State**: One owned `GameState` per game, never a global.
//!    Multiple games can run side by side (sessions, tests).
//!
//! 2. **Injected Nondeterminism**: The single random draw goes through
//!    `MoveSource`; production uses a seeded deterministic RNG, tests use
//!    scripted moves.
//!
//! 3. **Presentation Stays Outside**: Score rendering, replay animation,
//!    and wrong-move warnings are reached through the `Presenter` port.
//!    The engine never waits on them.
//!
//! ## Modules
//!
//! - `core`: moves, alphabet, state, RNG, configuration
//! - `round`: the round controller and move outcomes
//! - `port`: the presentation port and stock implementations
//! - `error`: caller contract violations
//!
//! ## Example
//!
//! ```
//! use sequence_recall::{
//!     GameConfig, MoveOutcome, NullPresenter, RoundController,
//! };
//!
//! let mut game =
//!     RoundController::with_seed(GameConfig::default(), 42, NullPresenter);
//! game.new_game();
//! assert_eq!(game.state().sequence().len(), 1);
//!
//! // Echo the expected move back; round 1 completes.
//! let expected = game.state().expected_move().unwrap();
//! let outcome = game.record_move(expected).unwrap();
//! assert_eq!(outcome, MoveOutcome::RoundComplete { score: 1 });
//! assert_eq!(game.state().sequence().len(), 2);
//! ```

pub mod core;
pub mod error;
pub mod port;
pub mod round;

pub use crate::core::{
    GameConfig, GameConfigBuilder, GamePhase, GameRng, GameRngState, GameState, Move,
    MoveAlphabet, MoveSource, ScriptedMoves, DEFAULT_REPLAY_STEP_MS,
};
pub use crate::error::GameError;
pub use crate::port::{NullPresenter, Presenter, RecordingPresenter};
pub use crate::round::{GameSnapshot, MoveOutcome, RoundController};
