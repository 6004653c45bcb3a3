//! Game state module - the puzzle engine
//!
//! Ties together the board, the rotation tables, the piece source and the
//! scoring rules. Every command is synchronous and returns whether it was
//! accepted; nothing here fails. Timing lives outside: a host calls
//! [`GameState::gravity_tick`] at [`GameState::gravity_cadence_ms`].

use tracing::{debug, info};

use crate::pieces::{cells_at, get_shape, next_rotation, PieceShape};
use crate::rng::{mix_seed, PieceSource, Randomizer, SimpleRng};
use crate::scoring::{gravity_cadence_ms, hard_drop_score, line_clear_score};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::*;
use crate::Board;

/// The falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub rotation: u8,
    pub x: i8,
    pub y: i8,
}

impl ActivePiece {
    /// A piece at the spawn pivot in its first rotation state
    pub fn spawn(kind: PieceKind) -> Self {
        Self {
            kind,
            rotation: 0,
            x: SPAWN_X,
            y: SPAWN_Y,
        }
    }

    pub fn shape(&self) -> PieceShape {
        get_shape(self.kind, self.rotation)
    }

    /// Absolute board cells
    pub fn cells(&self) -> [(i8, i8); 4] {
        cells_at(&self.shape(), self.x, self.y)
    }

    /// True if no cell collides with the board
    pub fn fits(&self, board: &Board) -> bool {
        !board.collides(&self.cells())
    }

    fn shifted(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    fn rotated(&self) -> Self {
        Self {
            rotation: next_rotation(self.kind, self.rotation),
            ..*self
        }
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    active: Option<ActivePiece>,
    next: PieceKind,
    source: PieceSource,
    /// Produces a fresh seed for every new game.
    seeder: SimpleRng,
    /// Seed of the current game's piece source.
    seed: u32,
    score: u32,
    lines_cleared: u32,
    status: GameStatus,
    last_event: Option<LockEvent>,
}

impl GameState {
    /// Create an idle game using uniform piece selection
    pub fn new(seed: u32) -> Self {
        Self::with_randomizer(seed, Randomizer::Uniform)
    }

    /// Create an idle game with an explicit piece selection policy
    pub fn with_randomizer(seed: u32, randomizer: Randomizer) -> Self {
        let mut source = PieceSource::new(seed, randomizer);
        let next = source.draw();
        Self {
            board: Board::new(),
            active: None,
            next,
            source,
            seeder: SimpleRng::new(seed),
            seed,
            score: 0,
            lines_cleared: 0,
            status: GameStatus::Idle,
            last_event: None,
        }
    }

    /// Start a running game from a prepared position.
    ///
    /// Used for puzzle setups and scripted scenarios. Pieces after `next` come
    /// from the seeded source. If `active` does not fit at the spawn pivot the
    /// game is over immediately.
    pub fn from_position(seed: u32, board: Board, active: PieceKind, next: PieceKind) -> Self {
        let mut state = Self::new(seed);
        state.board = board;
        state.next = next;
        state.status = GameStatus::Running;
        let piece = ActivePiece::spawn(active);
        if piece.fits(&state.board) {
            state.active = Some(piece);
        } else {
            state.status = GameStatus::GameOver;
        }
        state
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines_cleared(&self) -> u32 {
        self.lines_cleared
    }

    pub fn next_piece(&self) -> PieceKind {
        self.next
    }

    pub fn active(&self) -> Option<ActivePiece> {
        self.active
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn randomizer(&self) -> Randomizer {
        self.source.policy()
    }

    /// Milliseconds between gravity ticks at the current line count
    pub fn gravity_cadence_ms(&self) -> u32 {
        gravity_cadence_ms(self.lines_cleared)
    }

    /// Start a new game from `idle` or `game-over`.
    pub fn start(&mut self) -> bool {
        if !self.status.accepts_start() {
            return false;
        }
        self.reset();
        true
    }

    /// Start a new game regardless of the current state
    pub fn restart(&mut self) -> bool {
        self.reset();
        true
    }

    fn reset(&mut self) {
        self.seed = mix_seed(self.seeder.next_u32());
        self.source = PieceSource::new(self.seed, self.source.policy());
        self.board.clear();
        self.score = 0;
        self.lines_cleared = 0;
        self.last_event = None;

        let first = self.source.draw();
        self.next = self.source.draw();
        // An empty board always has room at the spawn pivot.
        self.active = Some(ActivePiece::spawn(first));
        self.status = GameStatus::Running;

        info!(
            seed = self.seed,
            randomizer = self.source.policy().as_str(),
            "game started"
        );
    }

    pub fn pause(&mut self) -> bool {
        if self.status != GameStatus::Running {
            return false;
        }
        self.status = GameStatus::Paused;
        true
    }

    pub fn resume(&mut self) -> bool {
        if self.status != GameStatus::Paused {
            return false;
        }
        self.status = GameStatus::Running;
        true
    }

    /// Pause when running, resume when paused
    pub fn toggle_pause(&mut self) -> bool {
        match self.status {
            GameStatus::Running => self.pause(),
            GameStatus::Paused => self.resume(),
            _ => false,
        }
    }

    /// Move one column; rejected on collision
    pub fn move_piece(&mut self, direction: Direction) -> bool {
        if !self.status.is_running() {
            return false;
        }
        self.try_shift(direction.dx(), 0)
    }

    /// Advance to the next rotation state in place; rejected on collision
    pub fn rotate(&mut self) -> bool {
        if !self.status.is_running() {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };
        let rotated = active.rotated();
        if !rotated.fits(&self.board) {
            return false;
        }
        self.active = Some(rotated);
        true
    }

    /// Descend one row, or lock in if the row below is obstructed
    pub fn soft_drop(&mut self) -> bool {
        if !self.status.is_running() {
            return false;
        }
        self.step_down()
    }

    /// Timer-driven descent; same rules as a soft drop
    pub fn gravity_tick(&mut self) -> bool {
        if !self.status.is_running() {
            return false;
        }
        self.step_down()
    }

    /// Drop to the lowest free position and lock immediately
    pub fn hard_drop(&mut self) -> bool {
        if !self.status.is_running() {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        let rows = self.drop_distance(&active);
        self.active = Some(active.shifted(0, rows as i8));

        let drop_score = hard_drop_score(rows);
        self.score = self.score.saturating_add(drop_score);
        self.lock_in(drop_score);
        true
    }

    /// Apply a command from an input source
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        let accepted = match action {
            GameAction::MoveLeft => self.move_piece(Direction::Left),
            GameAction::MoveRight => self.move_piece(Direction::Right),
            GameAction::Rotate => self.rotate(),
            GameAction::SoftDrop => self.soft_drop(),
            GameAction::HardDrop => self.hard_drop(),
            GameAction::Pause => self.pause(),
            GameAction::Resume => self.resume(),
            GameAction::TogglePause => self.toggle_pause(),
            GameAction::Start => self.start(),
            GameAction::Restart => self.restart(),
        };
        debug!(
            action = action.as_str(),
            accepted,
            status = self.status.as_str(),
            "action"
        );
        accepted
    }

    /// Take the lock-in event produced by the last stimulus, if any
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Rows the piece could descend before colliding
    fn drop_distance(&self, piece: &ActivePiece) -> u32 {
        let mut rows: u32 = 0;
        while piece.shifted(0, rows as i8 + 1).fits(&self.board) {
            rows += 1;
        }
        rows
    }

    fn try_shift(&mut self, dx: i8, dy: i8) -> bool {
        let Some(active) = self.active else {
            return false;
        };
        let moved = active.shifted(dx, dy);
        if !moved.fits(&self.board) {
            return false;
        }
        self.active = Some(moved);
        true
    }

    fn step_down(&mut self) -> bool {
        if self.active.is_none() {
            return false;
        }
        if !self.try_shift(0, 1) {
            self.lock_in(0);
        }
        true
    }

    /// Merge, clear, score, and spawn the next piece.
    fn lock_in(&mut self, drop_score: u32) {
        let Some(piece) = self.active.take() else {
            return;
        };

        self.board.merge(&piece.cells(), piece.kind);

        let rows_cleared = self.board.clear_full_rows().len() as u32;
        let line_score = line_clear_score(rows_cleared);
        self.score = self.score.saturating_add(line_score);
        self.lines_cleared = self.lines_cleared.saturating_add(rows_cleared);

        let spawned = ActivePiece::spawn(self.next);
        let game_over = !spawned.fits(&self.board);
        if game_over {
            self.status = GameStatus::GameOver;
            info!(
                score = self.score,
                lines = self.lines_cleared,
                "game over"
            );
        } else {
            self.active = Some(spawned);
            self.next = self.source.draw();
        }

        debug!(
            kind = %piece.kind.as_char(),
            rows_cleared,
            score = self.score,
            "piece locked"
        );

        self.last_event = Some(LockEvent {
            kind: Some(piece.kind),
            rows_cleared,
            line_clear_score: line_score,
            drop_score,
            game_over,
        });
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_grid(&mut out.board);
        out.active = self.active.map(ActiveSnapshot::from);
        out.next = self.next;
        out.score = self.score;
        out.lines_cleared = self.lines_cleared;
        out.status = self.status;
        out.seed = self.seed;
        out.cadence_ms = self.gravity_cadence_ms();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
