//! Frame loop module.
//!
//! Drives a [`tetris_core::GameState`] from a per-frame callback and routes
//! player commands onto the same instance. The loop is single-threaded: the
//! caller drains input between frames, so ticks and commands never overlap.
//!
//! - [`FrameLoop`]: owns the game, processes frames and commands
//! - [`LoopHandle`]: cancellation token returned when a run starts
//! - [`FrameClock`]: measures elapsed time between frames

pub mod clock;
pub mod frame_loop;
pub mod handle;

pub use tetris_core as core;
pub use tetris_types as types;

pub use clock::FrameClock;
pub use frame_loop::{FrameLoop, FrameOutcome};
pub use handle::LoopHandle;
