//! Scoring module - points and gravity cadence
//!
//! The rules are deliberately flat: line clears pay a fixed amount per row
//! with no level, combo or back-to-back multipliers, and hard drops pay per
//! row descended. Cadence speeds up linearly with total lines until it
//! reaches the floor.

use crate::types::{
    BASE_CADENCE_MS, CADENCE_FLOOR_MS, CADENCE_STEP_MS, HARD_DROP_POINTS_PER_ROW,
    LINE_CLEAR_POINTS,
};

/// Points for clearing `rows` rows in one lock-in
pub fn line_clear_score(rows: u32) -> u32 {
    rows.saturating_mul(LINE_CLEAR_POINTS)
}

/// Points for a hard drop that descended `rows` rows
pub fn hard_drop_score(rows: u32) -> u32 {
    rows.saturating_mul(HARD_DROP_POINTS_PER_ROW)
}

/// Gravity cadence for the given total of cleared lines.
///
/// `max(300, 900 - 20 * lines)`, without underflow for large line counts.
pub fn gravity_cadence_ms(lines_cleared: u32) -> u32 {
    BASE_CADENCE_MS
        .saturating_sub(lines_cleared.saturating_mul(CADENCE_STEP_MS))
        .max(CADENCE_FLOOR_MS)
}
