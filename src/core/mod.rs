//! Core engine types: moves, state, RNG, configuration.
//!
//! These are the building blocks the round logic operates on. Symbol
//! meaning (which button, which color) is a presentation concern; the
//! core never interprets it.

pub mod config;
pub mod moves;
pub mod rng;
pub mod state;

pub use config::{GameConfig, GameConfigBuilder, DEFAULT_REPLAY_STEP_MS};
pub use moves::{Move, MoveAlphabet};
pub use rng::{GameRng, GameRngState, MoveSource, ScriptedMoves};
pub use state::{GamePhase, GameState};
