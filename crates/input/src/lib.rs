//! Terminal input decoding.
//!
//! Maps `crossterm` key events onto [`crate::types::GameAction`]. The engine
//! never sees raw keys; this is the command source the binary polls.

pub mod map;

pub use blockfall_types as types;

pub use map::{handle_key_event, should_quit};
