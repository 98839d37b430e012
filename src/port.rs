//! Presentation port.
//!
//! The engine calls out through `Presenter` to update the score display,
//! trigger a sequence replay, and surface a wrong-move warning. All three
//! are fire-and-forget: none may fail back into the engine, and the
//! engine never awaits replay completion (strict mode instead gets an
//! explicit `playback_finished` signal on the controller).

use im::Vector;

use crate::core::Move;

/// Capabilities the engine consumes from the surrounding application.
///
/// Implementations live with the UI layer (DOM, TUI, audio). The replay
/// pacing - the reference steps highlights every 800ms - belongs to the
/// implementation; `GameConfig::replay_step_ms` carries the hint.
pub trait Presenter {
    /// Update the visible score.
    fn render_score(&mut self, score: u32);

    /// Highlight each move in order, from the first element.
    ///
    /// The vector is a persistent snapshot; keeping it is O(1).
    fn replay_sequence(&mut self, sequence: Vector<Move>);

    /// Warn the user that the round failed. Fired before the engine's
    /// reset takes effect.
    fn notify_wrong_move(&mut self);
}

/// Presenter that does nothing. For headless use and benchmarks.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullPresenter;

impl Presenter for NullPresenter {
    fn render_score(&mut self, _score: u32) {}
    fn replay_sequence(&mut self, _sequence: Vector<Move>) {}
    fn notify_wrong_move(&mut self) {}
}

/// Presenter that records every call, for asserting on side effects in
/// tests.
#[derive(Clone, Debug, Default)]
pub struct RecordingPresenter {
    /// Scores rendered, in call order.
    pub scores: Vec<u32>,
    /// Sequences requested for replay, in call order.
    pub replays: Vec<Vector<Move>>,
    /// Number of wrong-move notifications.
    pub wrong_moves: usize,
}

impl RecordingPresenter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently rendered score, if any.
    #[must_use]
    pub fn last_score(&self) -> Option<u32> {
        self.scores.last().copied()
    }

    /// The most recently requested replay, if any.
    #[must_use]
    pub fn last_replay(&self) -> Option<&Vector<Move>> {
        self.replays.last()
    }
}

impl Presenter for RecordingPresenter {
    fn render_score(&mut self, score: u32) {
        self.scores.push(score);
    }

    fn replay_sequence(&mut self, sequence: Vector<Move>) {
        self.replays.push(sequence);
    }

    fn notify_wrong_move(&mut self) {
        self.wrong_moves += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_presenter() {
        let mut presenter = RecordingPresenter::new();

        presenter.render_score(0);
        presenter.render_score(1);
        presenter.replay_sequence(Vector::from(vec![Move::new(2)]));
        presenter.notify_wrong_move();

        assert_eq!(presenter.scores, vec![0, 1]);
        assert_eq!(presenter.last_score(), Some(1));
        assert_eq!(presenter.replays.len(), 1);
        assert_eq!(
            presenter.last_replay().unwrap().iter().copied().collect::<Vec<_>>(),
            vec![Move::new(2)]
        );
        assert_eq!(presenter.wrong_moves, 1);
    }

    #[test]
    fn test_null_presenter_is_inert() {
        let mut presenter = NullPresenter;

        presenter.render_score(7);
        presenter.replay_sequence(Vector::new());
        presenter.notify_wrong_move();
    }
}
