//! Authoritative round state.
//!
//! ## GameState
//!
//! Holds everything the round logic reads and writes:
//! - `score`: rounds completed since the last reset
//! - `sequence`: the computer-generated target
//! - `player_input`: moves entered in the current round
//! - `alphabet`: the fixed set of valid symbols
//! - `playback_index`: presentation replay cursor, not game logic
//! - `phase`: where the state machine currently sits
//!
//! Uses `im` persistent vectors so snapshot clones handed to the
//! presentation layer are O(1).
//!
//! Mutation goes through `RoundController`; this module only enforces the
//! structural pieces (prefix checks, cursor bounds) the controller relies
//! on.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::moves::{Move, MoveAlphabet};

/// State machine phase.
///
/// `Playback` is only entered when the strict input guard is configured;
/// the reference behavior jumps straight to `AwaitingInput` and relies on
/// the presentation layer's timing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Post-construction, before the first `new_game`.
    #[default]
    Idle,
    /// Sequence replay in flight; input rejected in strict mode.
    Playback,
    /// Ready to accept `record_move`.
    AwaitingInput,
}

/// Complete round state, exclusively owned by a `RoundController`.
///
/// Never a global: multiple independent games can run side by side
/// (sessions, tests).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    score: u32,
    sequence: Vector<Move>,
    player_input: Vector<Move>,
    alphabet: MoveAlphabet,
    playback_index: usize,
    phase: GamePhase,
}

impl GameState {
    /// Create a fresh state in `Idle`, with everything empty.
    #[must_use]
    pub fn new(alphabet: MoveAlphabet) -> Self {
        Self {
            score: 0,
            sequence: Vector::new(),
            player_input: Vector::new(),
            alphabet,
            playback_index: 0,
            phase: GamePhase::Idle,
        }
    }

    /// Rounds completed since the last reset.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// The computer-generated target sequence.
    #[must_use]
    pub fn sequence(&self) -> &Vector<Move> {
        &self.sequence
    }

    /// Moves the player has entered in the current round.
    #[must_use]
    pub fn player_input(&self) -> &Vector<Move> {
        &self.player_input
    }

    /// The fixed symbol set.
    #[must_use]
    pub fn alphabet(&self) -> &MoveAlphabet {
        &self.alphabet
    }

    /// Current replay cursor position.
    #[must_use]
    pub fn playback_index(&self) -> usize {
        self.playback_index
    }

    /// Current state machine phase.
    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// The move the player is expected to enter next, if the sequence has
    /// one at the current input position.
    #[must_use]
    pub fn expected_move(&self) -> Option<Move> {
        self.sequence.get(self.player_input.len()).copied()
    }

    /// Whether `player_input` is a prefix of `sequence`.
    ///
    /// Holds throughout a round; the controller resets on the single step
    /// that would break it.
    #[must_use]
    pub fn input_is_prefix(&self) -> bool {
        self.player_input.len() <= self.sequence.len()
            && self
                .player_input
                .iter()
                .zip(self.sequence.iter())
                .all(|(a, b)| a == b)
    }

    // === Controller-facing mutation ===

    pub(crate) fn set_phase(&mut self, phase: GamePhase) {
        self.phase = phase;
    }

    /// Wipe round data back to the pre-round-1 shape, keeping the
    /// alphabet. Atomic from the caller's view: no partial resets.
    pub(crate) fn reset(&mut self) {
        self.score = 0;
        self.sequence.clear();
        self.player_input.clear();
        self.playback_index = 0;
    }

    pub(crate) fn push_sequence(&mut self, mv: Move) {
        self.sequence.push_back(mv);
    }

    pub(crate) fn push_input(&mut self, mv: Move) {
        self.player_input.push_back(mv);
    }

    pub(crate) fn clear_input(&mut self) {
        self.player_input.clear();
    }

    pub(crate) fn increment_score(&mut self) {
        self.score += 1;
    }

    /// Reset the replay cursor to the start of the sequence.
    pub(crate) fn rewind_playback(&mut self) {
        self.playback_index = 0;
    }

    /// Return the move under the replay cursor and advance it.
    ///
    /// `None` once the cursor has passed the end of the sequence.
    pub(crate) fn advance_playback(&mut self) -> Option<Move> {
        let mv = self.sequence.get(self.playback_index).copied()?;
        self.playback_index += 1;
        Some(mv)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_idle_and_empty() {
        let state = GameState::new(MoveAlphabet::default());

        assert_eq!(state.phase(), GamePhase::Idle);
        assert_eq!(state.score(), 0);
        assert!(state.sequence().is_empty());
        assert!(state.player_input().is_empty());
        assert_eq!(state.playback_index(), 0);
    }

    #[test]
    fn test_expected_move_tracks_input_position() {
        let mut state = GameState::new(MoveAlphabet::default());
        state.push_sequence(Move::new(1));
        state.push_sequence(Move::new(3));

        assert_eq!(state.expected_move(), Some(Move::new(1)));

        state.push_input(Move::new(1));
        assert_eq!(state.expected_move(), Some(Move::new(3)));

        state.push_input(Move::new(3));
        assert_eq!(state.expected_move(), None);
    }

    #[test]
    fn test_input_is_prefix() {
        let mut state = GameState::new(MoveAlphabet::default());
        state.push_sequence(Move::new(0));
        state.push_sequence(Move::new(2));

        assert!(state.input_is_prefix());

        state.push_input(Move::new(0));
        assert!(state.input_is_prefix());

        state.push_input(Move::new(1)); // diverges
        assert!(!state.input_is_prefix());
    }

    #[test]
    fn test_reset_keeps_alphabet() {
        let mut state = GameState::new(MoveAlphabet::new(4));
        state.push_sequence(Move::new(1));
        state.push_input(Move::new(1));
        state.increment_score();

        state.reset();

        assert_eq!(state.score(), 0);
        assert!(state.sequence().is_empty());
        assert!(state.player_input().is_empty());
        assert_eq!(state.alphabet().len(), 4);
    }

    #[test]
    fn test_playback_cursor() {
        let mut state = GameState::new(MoveAlphabet::default());
        state.push_sequence(Move::new(2));
        state.push_sequence(Move::new(0));

        assert_eq!(state.advance_playback(), Some(Move::new(2)));
        assert_eq!(state.advance_playback(), Some(Move::new(0)));
        assert_eq!(state.advance_playback(), None);
        assert_eq!(state.playback_index(), 2);

        state.rewind_playback();
        assert_eq!(state.playback_index(), 0);
        assert_eq!(state.advance_playback(), Some(Move::new(2)));
    }

    #[test]
    fn test_state_serialization() {
        let mut state = GameState::new(MoveAlphabet::default());
        state.push_sequence(Move::new(1));
        state.push_input(Move::new(1));
        state.increment_score();
        state.set_phase(GamePhase::AwaitingInput);

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GameState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, deserialized);
    }
}
