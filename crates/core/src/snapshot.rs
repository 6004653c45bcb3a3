//! Read-only view of a game session for renderers and observers.

use crate::pieces::{cells_at, get_shape};
use crate::types::{Cell, GameStatus, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
use crate::ActivePiece;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub rotation: u8,
    pub x: i8,
    pub y: i8,
    /// Absolute board cells; rows may be negative above the top edge.
    pub cells: [(i8, i8); 4],
}

impl ActiveSnapshot {
    pub fn color_hex(&self) -> &'static str {
        self.kind.color_hex()
    }

    /// Cells that fall inside the visible board
    pub fn visible_cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.cells
            .iter()
            .copied()
            .filter(|&(x, y)| x >= 0 && x < BOARD_WIDTH as i8 && y >= 0 && y < BOARD_HEIGHT as i8)
    }
}

impl From<ActivePiece> for ActiveSnapshot {
    fn from(value: ActivePiece) -> Self {
        Self {
            kind: value.kind,
            rotation: value.rotation,
            x: value.x,
            y: value.y,
            cells: cells_at(&get_shape(value.kind, value.rotation), value.x, value.y),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: Option<ActiveSnapshot>,
    pub next: PieceKind,
    pub score: u32,
    pub lines_cleared: u32,
    pub status: GameStatus,
    pub seed: u32,
    pub cadence_ms: u32,
}

impl GameSnapshot {
    /// Board with the active piece painted on top, as a view would show it.
    pub fn composed_board(&self) -> [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize] {
        let mut grid = self.board;
        if let Some(active) = self.active {
            for (x, y) in active.visible_cells() {
                grid[y as usize][x as usize] = Some(active.kind);
            }
        }
        grid
    }

    pub fn playable(&self) -> bool {
        self.status.is_running()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[None; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            next: PieceKind::I,
            score: 0,
            lines_cleared: 0,
            status: GameStatus::Idle,
            seed: 0,
            cadence_ms: 0,
        }
    }
}
