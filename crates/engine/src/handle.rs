//! Cancellation token for a running frame loop.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Cloneable stop switch shared between a [`crate::FrameLoop`] and whoever
/// started it.
///
/// Cancelling is one-way and idempotent. Once any clone is cancelled the loop
/// that issued it will not mutate game state again through `frame` or
/// steering commands.
#[derive(Debug, Clone, Default)]
pub struct LoopHandle {
    cancelled: Arc<AtomicBool>,
}

impl LoopHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stop the loop. Returns true only for the call that actually flipped
    /// the switch.
    pub fn cancel(&self) -> bool {
        !self.cancelled.swap(true, Ordering::AcqRel)
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}
