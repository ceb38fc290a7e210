//! Shift-hours computation and validation.
//!
//! [`compute_shift_hours`] is the heart of the engine: it turns a day's
//! start/end pair into validated worked hours, checking the working-hours
//! window, the time ordering, the weekly cap and the monthly cap — in that
//! order, with the first failure aborting the whole update.

use chrono::{NaiveTime, Timelike};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::config::ShiftLimits;
use crate::error::{ScheduleError, ScheduleResult};
use crate::models::{SLOT_COUNT, ShiftSlot};

use super::totals::{month_total, week_total};

/// The outcome of a successful slot update.
///
/// Callers replace the slot at the updated day and store the new month
/// total; nothing is mutated on a validation failure.
#[derive(Debug, Clone, PartialEq)]
pub struct ShiftUpdate {
    /// The validated slot to store at the updated day.
    pub slot: ShiftSlot,
    /// The month total including the updated slot, two-decimal.
    pub month_total: Decimal,
}

/// Computes and validates the worked hours for one day slot.
///
/// Validation order is work-window, then ordering, then the weekly cap (a
/// 5-day window, see [`super::week_window`]), then the monthly cap. The
/// first failing rule rejects the whole update; `shifts` is never modified,
/// the caller applies the returned [`ShiftUpdate`] only on success.
///
/// When either time is unset the slot's hours become zero and no validation
/// runs.
///
/// # Arguments
///
/// * `day` - slot index, 0..=30 for calendar days 1..=31
/// * `start_time` / `end_time` - wall-clock times, `None` when unset
/// * `shifts` - the full current slot sequence, needed for the cap checks
/// * `limits` - the configured window and caps
///
/// # Example
///
/// ```
/// use chrono::NaiveTime;
/// use schedule_engine::calculation::compute_shift_hours;
/// use schedule_engine::config::ShiftLimits;
/// use schedule_engine::models::{SLOT_COUNT, ShiftSlot};
///
/// let shifts = vec![ShiftSlot::default(); SLOT_COUNT];
/// let start = NaiveTime::from_hms_opt(9, 0, 0);
/// let end = NaiveTime::from_hms_opt(13, 0, 0);
/// let update = compute_shift_hours(0, start, end, &shifts, &ShiftLimits::default()).unwrap();
/// assert_eq!(update.slot.hours.to_string(), "4.00");
/// assert_eq!(update.month_total.to_string(), "4.00");
/// ```
pub fn compute_shift_hours(
    day: usize,
    start_time: Option<NaiveTime>,
    end_time: Option<NaiveTime>,
    shifts: &[ShiftSlot],
    limits: &ShiftLimits,
) -> ScheduleResult<ShiftUpdate> {
    if day >= SLOT_COUNT {
        return Err(ScheduleError::DayOutOfRange { day });
    }

    let (start, end) = match (start_time, end_time) {
        (Some(start), Some(end)) => (start, end),
        _ => {
            // Either time unset: the day counts for zero hours.
            let slot = ShiftSlot {
                start_time,
                end_time,
                hours: Decimal::ZERO,
            };
            return Ok(finish(day, slot, shifts));
        }
    };

    check_work_window("start", start, limits)?;
    check_work_window("end", end, limits)?;

    let start_minutes = i64::from(start.hour() * 60 + start.minute());
    let end_minutes = i64::from(end.hour() * 60 + end.minute());
    if end_minutes <= start_minutes {
        return Err(ScheduleError::EndNotAfterStart { start, end });
    }

    let diff_minutes = end_minutes - start_minutes;
    let mut hours = (Decimal::from(diff_minutes) / Decimal::from(60))
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    hours.rescale(2);

    let slot = ShiftSlot {
        start_time: Some(start),
        end_time: Some(end),
        hours,
    };

    let mut candidate = shifts.to_vec();
    candidate.resize(SLOT_COUNT, ShiftSlot::default());
    candidate[day] = slot.clone();

    let weekly = week_total(&candidate, day);
    if weekly > limits.weekly_hours_cap {
        return Err(ScheduleError::WeeklyCapExceeded {
            total: weekly,
            cap: limits.weekly_hours_cap,
        });
    }

    let monthly = month_total(&candidate);
    if monthly > limits.monthly_hours_cap {
        return Err(ScheduleError::MonthlyCapExceeded {
            total: monthly,
            cap: limits.monthly_hours_cap,
        });
    }

    Ok(finish(day, slot, shifts))
}

/// Builds the update result, recomputing the month total with the new slot
/// in place and pinning it to two decimals.
fn finish(day: usize, slot: ShiftSlot, shifts: &[ShiftSlot]) -> ShiftUpdate {
    let mut candidate = shifts.to_vec();
    candidate.resize(SLOT_COUNT, ShiftSlot::default());
    candidate[day] = slot.clone();
    let mut total = month_total(&candidate);
    total.rescale(2);
    ShiftUpdate {
        slot,
        month_total: total,
    }
}

fn check_work_window(
    which: &'static str,
    time: NaiveTime,
    limits: &ShiftLimits,
) -> ScheduleResult<()> {
    let hour = time.hour();
    if hour < limits.workday_start_hour || hour > limits.workday_end_hour {
        return Err(ScheduleError::OutsideWorkWindow {
            which,
            time,
            window_start: limits.workday_start_hour,
            window_end: limits.workday_end_hour,
        });
    }
    Ok(())
}
