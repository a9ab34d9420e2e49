//! Scoring module - flat points per cleared row
//!
//! A lock that completes `n` rows is worth `POINTS_PER_LINE * n`. There are no
//! combo, back-to-back or level multipliers.

use crate::types::POINTS_PER_LINE;

/// Points for clearing `lines` rows in one lock
pub fn line_clear_score(lines: u32) -> u32 {
    POINTS_PER_LINE.saturating_mul(lines)
}
