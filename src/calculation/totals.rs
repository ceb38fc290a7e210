//! Week-window and month-total helpers.
//!
//! The weekly cap is checked over a 5-day window anchored at the start of
//! the slot's 7-day row: `[floor(day/7)*7, floor(day/7)*7 + 4]`. This is
//! deliberately not a calendar week; the original editor's cap worked this
//! way and the behavior is preserved exactly.

use std::ops::RangeInclusive;

use rust_decimal::Decimal;

use crate::models::{SLOT_COUNT, ShiftSlot};

/// Number of day slots covered by the weekly-cap window.
pub const WEEK_WINDOW_LEN: usize = 5;

/// Returns the slot index range the weekly cap sums over for `day`.
///
/// The range is clamped to the last slot, so the final partial row of the
/// month yields a shorter window.
///
/// # Example
///
/// ```
/// use schedule_engine::calculation::week_window;
///
/// assert_eq!(week_window(0), 0..=4);
/// assert_eq!(week_window(9), 7..=11);
/// assert_eq!(week_window(30), 28..=30);
/// ```
pub fn week_window(day: usize) -> RangeInclusive<usize> {
    let start = (day / 7) * 7;
    let end = (start + WEEK_WINDOW_LEN - 1).min(SLOT_COUNT - 1);
    start..=end
}

/// Sums the hours of the slots inside `day`'s week window.
pub fn week_total(shifts: &[ShiftSlot], day: usize) -> Decimal {
    week_window(day)
        .filter_map(|i| shifts.get(i))
        .map(|slot| slot.hours)
        .sum()
}

/// Sums the hours of all slots.
pub fn month_total(shifts: &[ShiftSlot]) -> Decimal {
    shifts.iter().map(|slot| slot.hours).sum()
}
