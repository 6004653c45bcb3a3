//! Property tests - invariants that hold after every command

use blockfall::core::{gravity_cadence_ms, GameState, Randomizer};
use blockfall::types::{GameAction, GameStatus, BOARD_HEIGHT, BOARD_WIDTH};
use proptest::prelude::*;

const PLAY: [GameAction; 8] = [
    GameAction::MoveLeft,
    GameAction::MoveRight,
    GameAction::Rotate,
    GameAction::SoftDrop,
    GameAction::HardDrop,
    GameAction::TogglePause,
    GameAction::Start,
    GameAction::Restart,
];

fn assert_consistent(game: &GameState) {
    assert_eq!(game.board().full_row_count(), 0);
    assert_eq!(game.gravity_cadence_ms(), gravity_cadence_ms(game.lines_cleared()));
    assert!(game.score() >= game.lines_cleared() * 150);

    match game.status() {
        GameStatus::Running | GameStatus::Paused => {
            let active = game.active().expect("live game has a piece");
            assert!(active.fits(game.board()));
            for (x, y) in active.cells() {
                assert!((0..BOARD_WIDTH as i8).contains(&x));
                assert!(y < BOARD_HEIGHT as i8);
            }
        }
        GameStatus::Idle | GameStatus::GameOver => assert!(game.active().is_none()),
    }
}

proptest! {
    #[test]
    fn random_play_respects_invariants(
        seed in any::<u32>(),
        bag in any::<bool>(),
        actions in prop::collection::vec(prop::sample::select(PLAY.to_vec()), 1..300),
    ) {
        let randomizer = if bag { Randomizer::Bag } else { Randomizer::Uniform };
        let mut game = GameState::with_randomizer(seed, randomizer);
        game.start();

        for action in actions {
            let before = game.clone();
            let accepted = game.apply_action(action);
            assert_consistent(&game);

            let new_game = accepted && matches!(action, GameAction::Start | GameAction::Restart);
            if !new_game {
                prop_assert!(game.score() >= before.score());
                prop_assert!(game.lines_cleared() >= before.lines_cleared());
            }
            if !accepted {
                prop_assert_eq!(game.board(), before.board());
                prop_assert_eq!(game.active(), before.active());
                prop_assert_eq!(game.score(), before.score());
            }
            if before.status() == GameStatus::GameOver && !new_game {
                prop_assert_eq!(game.board(), before.board());
            }
        }
    }

    #[test]
    fn hard_drop_pays_five_per_row_plus_clears(seed in any::<u32>(), shifts in -5i32..5, turns in 0u8..4) {
        let mut game = GameState::new(seed);
        game.start();
        for _ in 0..turns {
            game.rotate();
        }
        for _ in 0..shifts.unsigned_abs() {
            game.apply_action(if shifts < 0 { GameAction::MoveLeft } else { GameAction::MoveRight });
        }

        let start_y = game.active().unwrap().y;
        let score = game.score();
        let mut trial = game.clone();
        let mut rows = 0;
        while trial.active().map(|a| a.y) == Some(start_y + rows) && trial.soft_drop() {
            if trial.active().map(|a| a.y) == Some(start_y + rows + 1) {
                rows += 1;
            } else {
                break;
            }
        }

        prop_assert!(game.hard_drop());
        let event = game.take_last_event().unwrap();
        prop_assert_eq!(event.drop_score, rows as u32 * 5);
        prop_assert_eq!(game.score(), score + event.drop_score + event.line_clear_score);
        prop_assert_eq!(event.line_clear_score, event.rows_cleared * 150);
    }

    #[test]
    fn cadence_is_clamped(lines in 0u32..10_000) {
        let cadence = gravity_cadence_ms(lines);
        prop_assert!((300..=900).contains(&cadence));
        prop_assert_eq!(cadence, 900u32.saturating_sub(20 * lines.min(1000)).max(300));
    }
}

#[test]
fn cadence_endpoints() {
    assert_eq!(gravity_cadence_ms(0), 900);
    assert_eq!(gravity_cadence_ms(1), 880);
    assert_eq!(gravity_cadence_ms(30), 300);
    assert_eq!(gravity_cadence_ms(500), 300);
}
