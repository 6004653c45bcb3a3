//! Session driver for the puzzle engine.
//!
//! The core engine has no notion of time. This crate adds the gravity timer
//! and the single-owner stimulus loop around it: commands and elapsed time go
//! in one at a time, the timer is re-armed whenever the cadence changes, and
//! it is cancelled whenever the game leaves `running`.
//!
//! ```
//! use blockfall_core::GameState;
//! use blockfall_engine::Session;
//! use blockfall_types::GameAction;
//!
//! let mut session = Session::new(GameState::new(7));
//! session.dispatch(GameAction::Start);
//! assert_eq!(session.advance(900), 1);
//!
//! session.dispatch(GameAction::Pause);
//! assert_eq!(session.advance(5_000), 0);
//! ```

pub mod session;
pub mod timer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use session::Session;
pub use timer::GravityTimer;
