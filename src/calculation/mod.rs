//! Calculation logic for the work-schedule engine.
//!
//! Pure functions only: turning start/end time pairs into validated worked
//! hours, the weekly and monthly cap checks, day resets, and the window
//! and total helpers they share. No I/O and no ambient state; the editor
//! applies the results and persists them.

mod reset;
mod shift_hours;
mod totals;

pub use reset::reset_day_slot;
pub use shift_hours::{ShiftUpdate, compute_shift_hours};
pub use totals::{WEEK_WINDOW_LEN, month_total, week_total, week_window};
