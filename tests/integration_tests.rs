//! Integration tests - whole games driven through the command surface

use blockfall::core::{Board, GameState, Randomizer};
use blockfall::types::{Direction, GameAction, GameStatus, PieceKind};

fn running(seed: u32) -> GameState {
    let mut game = GameState::new(seed);
    assert!(game.start());
    game
}

#[test]
fn fresh_game_is_idle_and_rejects_play() {
    let mut game = GameState::new(3);
    assert_eq!(game.status(), GameStatus::Idle);
    assert!(game.active().is_none());
    assert!(!game.move_piece(Direction::Left));
    assert!(!game.rotate());
    assert!(!game.soft_drop());
    assert!(!game.hard_drop());
    assert!(!game.gravity_tick());
    assert!(!game.pause());
}

#[test]
fn start_spawns_at_the_pivot() {
    let game = running(3);
    let active = game.active().unwrap();
    assert_eq!((active.x, active.y, active.rotation), (4, 0, 0));
    assert_eq!(game.score(), 0);
    assert_eq!(game.lines_cleared(), 0);
    assert_eq!(game.gravity_cadence_ms(), 900);
}

#[test]
fn start_is_ignored_while_playing_but_restart_is_not() {
    let mut game = running(3);
    game.hard_drop();
    let score = game.score();
    assert!(score > 0);
    assert!(!game.start());
    assert_eq!(game.score(), score);

    assert!(game.restart());
    assert_eq!(game.score(), 0);
    assert_eq!(game.board().filled_count(), 0);
}

#[test]
fn walls_stop_horizontal_moves() {
    let mut game = running(11);
    let mut moves = 0;
    while game.move_piece(Direction::Left) {
        moves += 1;
        assert!(moves < 10);
    }
    let leftmost = game.active().unwrap().cells().iter().map(|c| c.0).min();
    assert_eq!(leftmost, Some(0));
}

#[test]
fn single_line_clear_scores_drop_and_line() {
    let board = Board::from_rows(&["IIII..IIII"]);
    let mut game = GameState::from_position(5, board, PieceKind::O, PieceKind::T);

    assert!(game.hard_drop());
    // 18 rows descended, then one row cleared.
    assert_eq!(game.score(), 18 * 5 + 150);
    assert_eq!(game.lines_cleared(), 1);
    assert_eq!(game.board().get(4, 19), Some(Some(PieceKind::O)));
    assert_eq!(game.board().get(0, 19), Some(None));
    assert_eq!(game.board().full_row_count(), 0);
    assert_eq!(game.active().unwrap().kind, PieceKind::T);
}

#[test]
fn vertical_i_clears_four_rows() {
    let board = Board::from_rows(&["IIII.IIIII"; 4]);
    let mut game = GameState::from_position(5, board, PieceKind::I, PieceKind::L);

    assert!(game.rotate());
    assert!(game.hard_drop());
    assert_eq!(game.lines_cleared(), 4);
    assert_eq!(game.score(), 17 * 5 + 4 * 150);
    assert_eq!(game.board().filled_count(), 0);
    assert_eq!(game.gravity_cadence_ms(), 820);

    let event = game.take_last_event().unwrap();
    assert_eq!(event.rows_cleared, 4);
    assert_eq!(event.line_clear_score, 600);
    assert_eq!(event.drop_score, 85);
    assert!(!event.game_over);
}

#[test]
fn rotation_into_the_wall_is_rejected_in_place() {
    // Vertical I against the right wall cannot return to horizontal.
    let mut game = GameState::from_position(1, Board::new(), PieceKind::I, PieceKind::O);
    assert!(game.rotate());
    while game.move_piece(Direction::Right) {}
    let before = game.active().unwrap();
    assert_eq!(before.x, 9);
    assert!(!game.rotate());
    assert_eq!(game.active().unwrap(), before);
}

#[test]
fn stacking_in_one_column_never_clears_and_ends_the_game() {
    for randomizer in [Randomizer::Uniform, Randomizer::Bag] {
        let mut game = GameState::with_randomizer(99, randomizer);
        game.start();
        let mut drops = 0;
        while game.status() == GameStatus::Running {
            assert!(game.hard_drop());
            drops += 1;
            assert!(drops <= 40, "stack never topped out");
        }
        assert_eq!(game.status(), GameStatus::GameOver);
        assert_eq!(game.lines_cleared(), 0);
    }
}

#[test]
fn game_over_freezes_the_board() {
    let mut game = running(21);
    while game.status() == GameStatus::Running {
        game.hard_drop();
    }
    assert!(game.active().is_none());

    let board = game.board().clone();
    let score = game.score();
    for action in [
        GameAction::MoveLeft,
        GameAction::Rotate,
        GameAction::SoftDrop,
        GameAction::HardDrop,
        GameAction::Pause,
        GameAction::Resume,
        GameAction::TogglePause,
    ] {
        assert!(!game.apply_action(action), "{action:?}");
    }
    assert!(!game.gravity_tick());
    assert_eq!(game.board(), &board);
    assert_eq!(game.score(), score);

    assert!(game.start());
    assert_eq!(game.status(), GameStatus::Running);
    assert_eq!(game.board().filled_count(), 0);
}

#[test]
fn blocked_position_is_over_on_arrival() {
    let board = Board::from_rows(&["ZZZZZZZZZ."; 20]);
    let game = GameState::from_position(1, board, PieceKind::T, PieceKind::T);
    assert_eq!(game.status(), GameStatus::GameOver);
    assert!(game.active().is_none());
}

#[test]
fn pause_and_resume_are_idempotent() {
    let mut game = running(8);
    assert!(!game.resume());
    assert!(game.pause());
    assert!(!game.pause());
    assert_eq!(game.status(), GameStatus::Paused);

    let before = game.active();
    assert!(!game.move_piece(Direction::Right));
    assert!(!game.gravity_tick());
    assert_eq!(game.active(), before);

    assert!(game.toggle_pause());
    assert_eq!(game.status(), GameStatus::Running);
}

#[test]
fn soft_drop_locks_on_the_floor() {
    let mut game = GameState::from_position(4, Board::new(), PieceKind::O, PieceKind::S);
    for _ in 0..18 {
        assert!(game.soft_drop());
    }
    assert_eq!(game.board().filled_count(), 0);
    assert!(game.soft_drop());
    assert_eq!(game.board().filled_count(), 4);
    assert_eq!(game.score(), 0);
    assert_eq!(game.active().unwrap().kind, PieceKind::S);
}

#[test]
fn same_seed_same_game() {
    let play = |seed| {
        let mut game = running(seed);
        let mut kinds = Vec::new();
        for _ in 0..12 {
            kinds.push(game.active().unwrap().kind);
            game.move_piece(Direction::Left);
            game.hard_drop();
            if game.status() != GameStatus::Running {
                break;
            }
        }
        (kinds, game.score(), game.board().clone())
    };
    assert_eq!(play(2024), play(2024));
}

#[test]
fn snapshot_mirrors_the_game() {
    let mut game = running(6);
    game.move_piece(Direction::Right);
    let snap = game.snapshot();
    let active = snap.active.unwrap();
    assert_eq!(active.x, 5);
    assert_eq!(snap.next, game.next_piece());
    assert_eq!(snap.status, GameStatus::Running);
    assert_eq!(snap.cadence_ms, 900);
    let composed = snap.composed_board();
    for (x, y) in active.visible_cells() {
        assert_eq!(composed[y as usize][x as usize], Some(active.kind));
    }
}

fn dealt(game: &mut GameState, count: usize) -> Vec<PieceKind> {
    let mut kinds = vec![game.active().unwrap().kind, game.next_piece()];
    while kinds.len() < count {
        assert!(game.hard_drop());
        kinds.push(game.next_piece());
    }
    kinds
}

#[test]
fn restart_deals_pieces_unrelated_to_the_last_game() {
    for randomizer in [Randomizer::Uniform, Randomizer::Bag] {
        for seed in [3u32, 12345, 65_536, 4_000_000_000] {
            let mut game = GameState::with_randomizer(seed, randomizer);
            game.start();
            let first = dealt(&mut game, 8);
            game.restart();
            let second = dealt(&mut game, 8);
            for shift in 0..3 {
                assert_ne!(
                    &first[shift..],
                    &second[..8 - shift],
                    "{randomizer:?} seed {seed} shift {shift}"
                );
            }
        }
    }
}
