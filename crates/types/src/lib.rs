//! Shared types and constants for the blockfall workspace.
//!
//! Everything in here is plain data with no dependencies, so the engine, the
//! terminal front-end and the store can all agree on the same vocabulary.
//!
//! # Board
//!
//! - **Width**: 10 columns (x = 0..9, left to right)
//! - **Height**: 20 rows (y = 0..19, top to bottom)
//! - **Spawn pivot**: (4, 0), i.e. `BOARD_WIDTH / 2 - 1` on the top row
//!
//! # Timing
//!
//! Gravity cadence is measured in milliseconds and shrinks as lines are
//! cleared:
//!
//! | Lines cleared | Cadence |
//! |---------------|---------|
//! | 0 | 900ms |
//! | 10 | 700ms |
//! | 20 | 500ms |
//! | 30+ | 300ms (floor) |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{Direction, GameStatus, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! assert_eq!(PieceKind::from_char('t'), Some(PieceKind::T));
//! assert_eq!(PieceKind::T.color_hex(), "#A855F7");
//! assert_eq!(Direction::Left.dx(), -1);
//! assert!(GameStatus::Idle.accepts_start());
//! assert_eq!((BOARD_WIDTH, BOARD_HEIGHT), (10, 20));
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Spawn pivot column (centered horizontally)
pub const SPAWN_X: i8 = (BOARD_WIDTH / 2) as i8 - 1;

/// Spawn pivot row (top row)
pub const SPAWN_Y: i8 = 0;

/// Gravity cadence with no lines cleared
pub const BASE_CADENCE_MS: u32 = 900;

/// Cadence reduction per cleared line
pub const CADENCE_STEP_MS: u32 = 20;

/// Fastest cadence the game ever reaches
pub const CADENCE_FLOOR_MS: u32 = 300;

/// Points per row removed in a single lock-in (flat, no multiplier)
pub const LINE_CLEAR_POINTS: u32 = 150;

/// Points per row descended by a hard drop
pub const HARD_DROP_POINTS_PER_ROW: u32 = 5;

/// The seven falling-block kinds.
///
/// Each kind carries a fixed color; the board stores the kind itself as the
/// color tag of a locked cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// All kinds, in table order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Parse from a single letter (case-insensitive).
    ///
    /// ```
    /// use blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_char('I'), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_char('z'), Some(PieceKind::Z));
    /// assert_eq!(PieceKind::from_char('.'), None);
    /// ```
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'I' => Some(PieceKind::I),
            'J' => Some(PieceKind::J),
            'L' => Some(PieceKind::L),
            'O' => Some(PieceKind::O),
            'S' => Some(PieceKind::S),
            'T' => Some(PieceKind::T),
            'Z' => Some(PieceKind::Z),
            _ => None,
        }
    }

    /// Uppercase letter for this kind.
    pub fn as_char(&self) -> char {
        match self {
            PieceKind::I => 'I',
            PieceKind::J => 'J',
            PieceKind::L => 'L',
            PieceKind::O => 'O',
            PieceKind::S => 'S',
            PieceKind::T => 'T',
            PieceKind::Z => 'Z',
        }
    }

    /// Color as a CSS-style hex string.
    pub fn color_hex(&self) -> &'static str {
        match self {
            PieceKind::I => "#60A5FA",
            PieceKind::J => "#1D4ED8",
            PieceKind::L => "#F97316",
            PieceKind::O => "#FACC15",
            PieceKind::S => "#34D399",
            PieceKind::T => "#A855F7",
            PieceKind::Z => "#F43F5E",
        }
    }

    /// Color as an `(r, g, b)` triple, same values as [`PieceKind::color_hex`].
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            PieceKind::I => (0x60, 0xA5, 0xFA),
            PieceKind::J => (0x1D, 0x4E, 0xD8),
            PieceKind::L => (0xF9, 0x73, 0x16),
            PieceKind::O => (0xFA, 0xCC, 0x15),
            PieceKind::S => (0x34, 0xD3, 0x99),
            PieceKind::T => (0xA8, 0x55, 0xF7),
            PieceKind::Z => (0xF4, 0x3F, 0x5E),
        }
    }
}

/// Horizontal move direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// Column delta for a one-cell move.
    pub fn dx(&self) -> i8 {
        match self {
            Direction::Left => -1,
            Direction::Right => 1,
        }
    }
}

/// Lifecycle of a game session.
///
/// ```text
/// idle --start--> running <--pause/resume--> paused
///                    |
///               spawn blocked
///                    v
///                game-over --start--> running
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStatus {
    #[default]
    Idle,
    Running,
    Paused,
    GameOver,
}

impl GameStatus {
    /// Whether `start` is accepted in this state.
    pub fn accepts_start(&self) -> bool {
        matches!(self, GameStatus::Idle | GameStatus::GameOver)
    }

    pub fn is_running(&self) -> bool {
        matches!(self, GameStatus::Running)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::Idle => "idle",
            GameStatus::Running => "running",
            GameStatus::Paused => "paused",
            GameStatus::GameOver => "game-over",
        }
    }
}

/// Commands an external collaborator can send to the engine.
///
/// Gravity is not in here: it is delivered by the session timer, not by a
/// command source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    /// Move the piece one column left
    MoveLeft,
    /// Move the piece one column right
    MoveRight,
    /// Advance to the next rotation state
    Rotate,
    /// Descend one row, locking if obstructed
    SoftDrop,
    /// Drop to the floor and lock immediately
    HardDrop,
    Pause,
    Resume,
    /// Pause when running, resume when paused
    TogglePause,
    /// Begin a new game from idle or game-over
    Start,
    /// Begin a new game from any state
    Restart,
}

impl GameAction {
    /// camelCase name, used in log fields
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::Rotate => "rotate",
            GameAction::SoftDrop => "softDrop",
            GameAction::HardDrop => "hardDrop",
            GameAction::Pause => "pause",
            GameAction::Resume => "resume",
            GameAction::TogglePause => "togglePause",
            GameAction::Start => "start",
            GameAction::Restart => "restart",
        }
    }
}

/// Emitted by the engine every time a piece locks in.
///
/// Observers (audio cues, score persistence) take it after each stimulus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LockEvent {
    /// Piece that locked
    pub kind: Option<PieceKind>,
    /// Rows removed by this lock-in
    pub rows_cleared: u32,
    /// Points awarded for those rows
    pub line_clear_score: u32,
    /// Points awarded for hard-drop descent in the same action
    pub drop_score: u32,
    /// The follow-up spawn collided and the game ended
    pub game_over: bool,
}

/// A cell on the board: `None` is empty, `Some(kind)` is filled with that
/// kind's color.
pub type Cell = Option<PieceKind>;
