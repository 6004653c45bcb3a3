//! Terminal view for the puzzle.
//!
//! Rendering is split in two. [`GameView`] paints a [`GameSnapshot`] into a
//! [`FrameBuffer`] and never touches the terminal, so it can be tested as
//! plain data. [`TerminalRenderer`] owns the terminal and writes only the
//! cells that changed since the previous frame.
//!
//! [`GameSnapshot`]: blockfall_core::GameSnapshot

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{FrameBuffer, Glyph, Rgb, Style};
pub use game_view::{GameView, Hud, Viewport};
pub use renderer::{encode_changes, encode_frame, run_on_screen, Screen, TerminalRenderer};
