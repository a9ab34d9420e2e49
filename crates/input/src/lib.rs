//! Terminal input module.
//!
//! Maps `crossterm` key events onto abstract [`crate::types::Command`]s. The
//! engine never sees key codes, so any other input device only needs its own
//! mapping onto the same commands.

pub mod map;

pub use tetris_types as types;

pub use map::{map_key, should_quit};
