//! Day reset.

use crate::error::{ScheduleError, ScheduleResult};
use crate::models::{SLOT_COUNT, ShiftSlot};

use super::shift_hours::ShiftUpdate;
use super::totals::month_total;

/// Clears the slot at `day` and recomputes the month total.
///
/// No caps are checked; a reset can only decrease totals. Resetting an
/// already empty day is a no-op, so the operation is idempotent.
pub fn reset_day_slot(day: usize, shifts: &[ShiftSlot]) -> ScheduleResult<ShiftUpdate> {
    if day >= SLOT_COUNT {
        return Err(ScheduleError::DayOutOfRange { day });
    }

    let mut candidate = shifts.to_vec();
    candidate.resize(SLOT_COUNT, ShiftSlot::default());
    candidate[day] = ShiftSlot::default();

    let mut total = month_total(&candidate);
    total.rescale(2);

    Ok(ShiftUpdate {
        slot: ShiftSlot::default(),
        month_total: total,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::parse_time_of_day;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn shifts_with_two_days() -> Vec<ShiftSlot> {
        let mut shifts = vec![ShiftSlot::default(); SLOT_COUNT];
        for day in [0, 1] {
            shifts[day] = ShiftSlot {
                start_time: parse_time_of_day("09:00").unwrap(),
                end_time: parse_time_of_day("13:00").unwrap(),
                hours: dec("4.00"),
            };
        }
        shifts
    }

    #[test]
    fn test_reset_clears_slot_and_recomputes_total() {
        let shifts = shifts_with_two_days();
        let update = reset_day_slot(0, &shifts).unwrap();
        assert_eq!(update.slot, ShiftSlot::default());
        assert_eq!(update.month_total, dec("4.00"));
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut shifts = shifts_with_two_days();
        let first = reset_day_slot(0, &shifts).unwrap();
        shifts[0] = first.slot.clone();
        let second = reset_day_slot(0, &shifts).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_reset_empty_schedule_totals_zero() {
        let shifts = vec![ShiftSlot::default(); SLOT_COUNT];
        let update = reset_day_slot(12, &shifts).unwrap();
        assert_eq!(update.month_total, dec("0.00"));
    }

    #[test]
    fn test_reset_out_of_range_rejected() {
        let shifts = vec![ShiftSlot::default(); SLOT_COUNT];
        assert!(matches!(
            reset_day_slot(31, &shifts).unwrap_err(),
            ScheduleError::DayOutOfRange { day: 31 }
        ));
    }
}
