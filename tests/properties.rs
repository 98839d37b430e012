//! Property tests for the round state machine.
//!
//! Whatever the seed and whatever the player does, the structural
//! invariants hold after every single operation.

use proptest::prelude::*;

use sequence_recall::{
    GameConfig, Move, MoveOutcome, NullPresenter, RoundController,
};

proptest! {
    /// n appends after new_game leave the sequence at n + 1 moves, with
    /// an empty input buffer.
    #[test]
    fn append_grows_by_exactly_one(seed: u64, n in 0usize..60) {
        let mut game =
            RoundController::with_seed(GameConfig::default(), seed, NullPresenter);
        game.new_game();

        for _ in 0..n {
            game.append_move().unwrap();
        }

        prop_assert_eq!(game.state().sequence().len(), n + 1);
        prop_assert!(game.state().player_input().is_empty());
    }

    /// new_game is idempotent up to the drawn move: score, input, and
    /// sequence length match whether called once or twice.
    #[test]
    fn new_game_idempotent(seed: u64) {
        let mut game =
            RoundController::with_seed(GameConfig::default(), seed, NullPresenter);

        game.new_game();
        let (score1, len1, input1) = (
            game.state().score(),
            game.state().sequence().len(),
            game.state().player_input().len(),
        );

        game.new_game();
        prop_assert_eq!(game.state().score(), score1);
        prop_assert_eq!(game.state().sequence().len(), len1);
        prop_assert_eq!(game.state().player_input().len(), input1);
    }

    /// Feed an arbitrary input stream: after every accepted move the
    /// input is a prefix of the sequence, the sequence is non-empty, and
    /// the score equals the rounds completed since the last reset.
    #[test]
    fn invariants_hold_under_arbitrary_input(
        seed: u64,
        inputs in prop::collection::vec(0u8..4, 1..200),
    ) {
        let mut game =
            RoundController::with_seed(GameConfig::default(), seed, NullPresenter);
        game.new_game();

        let mut rounds_since_reset = 0u32;

        for raw in inputs {
            match game.record_move(Move::new(raw)).unwrap() {
                MoveOutcome::Continue => {}
                MoveOutcome::RoundComplete { score } => {
                    rounds_since_reset += 1;
                    prop_assert_eq!(score, rounds_since_reset);
                    prop_assert!(game.state().player_input().is_empty());
                }
                MoveOutcome::Mismatch => {
                    rounds_since_reset = 0;
                    prop_assert_eq!(game.state().sequence().len(), 1);
                    prop_assert!(game.state().player_input().is_empty());
                }
            }

            prop_assert!(game.state().input_is_prefix());
            prop_assert!(!game.state().sequence().is_empty());
            prop_assert_eq!(game.state().score(), rounds_since_reset);
        }
    }

    /// Playing the sequence back correctly always yields exactly one
    /// score increment and one sequence extension per round, for any
    /// number of rounds.
    #[test]
    fn correct_replay_scores_once_per_round(seed: u64, rounds in 1u32..30) {
        let mut game =
            RoundController::with_seed(GameConfig::default(), seed, NullPresenter);
        game.new_game();

        for round in 1..=rounds {
            let target: Vec<Move> =
                game.state().sequence().iter().copied().collect();
            prop_assert_eq!(target.len() as u32, round);

            for (i, mv) in target.iter().enumerate() {
                let outcome = game.record_move(*mv).unwrap();
                if i + 1 == target.len() {
                    prop_assert_eq!(
                        outcome,
                        MoveOutcome::RoundComplete { score: round }
                    );
                } else {
                    prop_assert_eq!(outcome, MoveOutcome::Continue);
                }
            }
        }

        prop_assert_eq!(game.state().score(), rounds);
        prop_assert_eq!(game.state().sequence().len() as u32, rounds + 1);
    }

    /// Every generated move is a member of the alphabet, whatever the
    /// alphabet size.
    #[test]
    fn draws_respect_alphabet(seed: u64, size in 1u8..12) {
        let config = GameConfig::builder().alphabet_size(size).build();
        let mut game = RoundController::with_seed(config, seed, NullPresenter);
        game.new_game();

        for _ in 0..50 {
            game.append_move().unwrap();
        }

        for mv in game.state().sequence() {
            prop_assert!(game.state().alphabet().contains(*mv));
        }
    }
}
