//! Frame clock: turns wall-clock instants into per-frame elapsed time.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
}

impl FrameClock {
    pub fn new(now: Instant) -> Self {
        Self { last: now }
    }

    pub fn start_now() -> Self {
        Self::new(Instant::now())
    }

    /// Milliseconds since the previous call (or construction), saturating at
    /// `u32::MAX`. Instants earlier than the last one count as zero.
    pub fn elapsed_ms(&mut self, now: Instant) -> u32 {
        let elapsed = now.saturating_duration_since(self.last);
        self.last = now.max(self.last);
        u32::try_from(elapsed.as_millis()).unwrap_or(u32::MAX)
    }

    /// Time remaining until `interval` has passed since the last frame
    pub fn until_next(&self, now: Instant, interval: Duration) -> Duration {
        interval.saturating_sub(now.saturating_duration_since(self.last))
    }

    /// Restart timing from `now` without reporting the gap (e.g. after a
    /// restart, so the first frame does not carry time from the old game)
    pub fn reset(&mut self, now: Instant) {
        self.last = now;
    }
}
