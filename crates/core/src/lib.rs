//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the falling-block puzzle engine: the board, the seven
//! piece kinds and their rotation tables, seeded piece selection, scoring,
//! and the session state machine. It does no I/O and owns no timers; a host
//! feeds it commands and gravity ticks one at a time.
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 grid with collision checks and exhaustive line clearing
//! - [`game_state`]: the state machine (`idle`, `running`, `paused`, `game-over`)
//! - [`pieces`]: rotation tables, cycled by index, no wall kicks
//! - [`rng`]: seeded uniform or 7-bag piece selection
//! - [`scoring`]: flat line-clear points, hard-drop points, gravity cadence
//! - [`snapshot`]: read-only copies for renderers and observers
//!
//! # Rules
//!
//! - Clearing `n` rows in one lock-in pays `150 * n`
//! - A hard drop pays `5` per row descended, then locks
//! - Gravity cadence is `max(300, 900 - 20 * lines)` milliseconds
//! - A spawn that collides ends the game; only `start` or `restart` leaves `game-over`
//!
//! # Example
//!
//! ```
//! use blockfall_core::GameState;
//! use blockfall_types::{Direction, GameStatus};
//!
//! let mut game = GameState::new(12345);
//! assert!(game.start());
//!
//! game.move_piece(Direction::Right);
//! game.rotate();
//! assert!(game.hard_drop());
//!
//! assert!(game.score() > 0); // the drop descended at least one row
//! assert_eq!(game.status(), GameStatus::Running);
//! ```

pub mod board;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use blockfall_types as types;

pub use board::Board;
pub use game_state::{ActivePiece, GameState};
pub use pieces::{get_shape, rotation_count};
pub use rng::{mix_seed, PieceSource, Randomizer, SimpleRng};
pub use scoring::{gravity_cadence_ms, hard_drop_score, line_clear_score};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
