//! Terminal presentation for the Tetris engine.
//!
//! The board is drawn into a plain framebuffer and flushed to the terminal
//! with row diffs. A board block maps to `cell_w` x `cell_h` terminal cells,
//! which plays the role of a canvas block size.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tetris_core as core;
pub use tetris_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer};
pub use game_view::{AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
