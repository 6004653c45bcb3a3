//! GameView tests - rendering snapshots into a framebuffer

use blockfall::core::{Board, GameState};
use blockfall::term::{FrameBuffer, GameView, Hud, Viewport};
use blockfall::types::{GameAction, PieceKind};

fn find(fb: &FrameBuffer, needle: &str) -> Option<u16> {
    (0..fb.height()).find(|&y| fb.row_text(y).contains(needle))
}

fn count_blocks(fb: &FrameBuffer) -> usize {
    fb.glyphs().iter().filter(|g| g.ch == '█').count()
}

#[test]
fn status_banners() {
    let view = GameView::default();
    let vp = Viewport::new(64, 24);
    let mut game = GameState::new(1);

    let fb = view.render(&game.snapshot(), &Hud::default(), vp);
    assert!(find(&fb, "PRESS ENTER").is_some());

    game.apply_action(GameAction::Start);
    game.apply_action(GameAction::Pause);
    let fb = view.render(&game.snapshot(), &Hud::default(), vp);
    assert!(find(&fb, "PAUSED").is_some());

    let over = GameState::from_position(1, Board::from_rows(&["ZZZZZZZZZ."; 20]), PieceKind::T, PieceKind::T);
    let fb = view.render(&over.snapshot(), &Hud::default(), vp);
    assert!(find(&fb, "GAME OVER").is_some());
}

#[test]
fn locked_cells_are_two_columns_wide() {
    let view = GameView::default();
    let vp = Viewport::new(22, 22);
    let board = Board::from_rows(&["Z........."]);
    let game = GameState::from_position(1, board, PieceKind::O, PieceKind::O);

    let fb = view.render(&game.snapshot(), &Hud::default(), vp);
    // One locked cell and the active O, two columns per cell, no side panel.
    assert_eq!(count_blocks(&fb), (1 + 4) * 2);
    assert_eq!(&fb.row_text(20)[..], "│██··················│");
}

#[test]
fn render_into_reuses_and_resizes() {
    let view = GameView::default();
    let snap = GameState::new(1).snapshot();
    let mut fb = FrameBuffer::new(1, 1);
    view.render_into(&snap, Viewport::new(50, 24), &mut fb);
    assert_eq!((fb.width(), fb.height()), (50, 24));
    assert!(find(&fb, "SCORE").is_some());
    assert!(find(&fb, "NEXT").is_some());
}

#[test]
fn score_and_lines_follow_the_game() {
    let board = Board::from_rows(&["IIII..IIII"]);
    let mut game = GameState::from_position(1, board, PieceKind::O, PieceKind::T);
    game.hard_drop();

    let fb = GameView::default().render(&game.snapshot(), &Hud { best: Some(100) }, Viewport::new(64, 24));
    let score_y = find(&fb, "SCORE").unwrap();
    assert!(fb.row_text(score_y + 1).contains("240"));
    let lines_y = find(&fb, "LINES").unwrap();
    assert!(fb.row_text(lines_y + 1).contains('1'));
    // Current score beats the stored best.
    let best_y = find(&fb, "BEST").unwrap();
    assert!(fb.row_text(best_y + 1).contains("240"));
}
