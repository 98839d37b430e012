//! Engine errors.
//!
//! The taxonomy is narrow: a wrong move is a game event (the `Mismatch`
//! outcome), not an error. Errors cover caller contract violations only.

use thiserror::Error;

use crate::core::Move;

/// Caller contract violations surfaced by `RoundController`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// The move is not in the game alphabet.
    ///
    /// Only raised with `validate_moves` enabled; without validation the
    /// reference behavior applies and the move lands as a mismatch.
    #[error("{0} is not in the game alphabet")]
    InvalidMove(Move),

    /// Input arrived during sequence playback with the strict guard on.
    #[error("input is locked until the sequence replay finishes")]
    InputLocked,

    /// An operation that needs a running game was called before
    /// `new_game`.
    #[error("no game in progress; call new_game first")]
    NotStarted,
}
