//! Property tests for the calculation core.
//!
//! These cover the universally-quantified guarantees: computed hours equal
//! the minute difference for every valid pair, every out-of-window or
//! mis-ordered pair is rejected without mutation, the caps hold after any
//! sequence of edits, resets are idempotent, and serialization round-trips
//! through normalization.

use chrono::NaiveTime;
use proptest::prelude::*;
use rust_decimal::{Decimal, RoundingStrategy};

use schedule_engine::calculation::{
    compute_shift_hours, month_total, reset_day_slot, week_total,
};
use schedule_engine::config::{EngineConfig, ShiftLimits};
use schedule_engine::editor::ScheduleEditor;
use schedule_engine::models::{SLOT_COUNT, ScheduleState, ShiftSlot};
use schedule_engine::storage::MemoryStore;

fn from_minutes(minutes: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(minutes / 60, minutes % 60, 0).unwrap()
}

fn hhmm(minutes: u32) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Minutes whose hour component sits inside the 8..=17 window.
fn window_minutes() -> impl Strategy<Value = u32> {
    8 * 60..18 * 60u32
}

/// Minutes whose hour component sits outside the window.
fn outside_window_minutes() -> impl Strategy<Value = u32> {
    prop_oneof![0..8 * 60u32, 18 * 60..24 * 60u32]
}

fn empty_shifts() -> Vec<ShiftSlot> {
    vec![ShiftSlot::default(); SLOT_COUNT]
}

proptest! {
    /// For every valid pair with end > start, the computed hours equal the
    /// minute difference divided by 60, rounded to two decimals.
    #[test]
    fn computed_hours_match_minute_difference(
        (start, end) in (window_minutes(), window_minutes())
            .prop_filter("end strictly after start", |(s, e)| e > s)
    ) {
        let update = compute_shift_hours(
            0,
            Some(from_minutes(start)),
            Some(from_minutes(end)),
            &empty_shifts(),
            &ShiftLimits {
                // Disable the caps so only the arithmetic is under test.
                weekly_hours_cap: Decimal::from(1000),
                monthly_hours_cap: Decimal::from(1000),
                ..ShiftLimits::default()
            },
        ).unwrap();

        let mut expected = (Decimal::from(end - start) / Decimal::from(60))
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        expected.rescale(2);
        prop_assert_eq!(update.slot.hours, expected);
        prop_assert_eq!(update.slot.hours.scale(), 2);
    }

    /// Every pair with a start or end hour outside the window is rejected.
    #[test]
    fn out_of_window_times_rejected(
        bad in outside_window_minutes(),
        good in window_minutes(),
        bad_is_start in any::<bool>(),
    ) {
        let (start, end) = if bad_is_start { (bad, good) } else { (good, bad) };
        let result = compute_shift_hours(
            0,
            Some(from_minutes(start)),
            Some(from_minutes(end)),
            &empty_shifts(),
            &ShiftLimits::default(),
        );
        prop_assert!(result.is_err());
    }

    /// Every pair with end <= start is rejected.
    #[test]
    fn non_increasing_pairs_rejected(
        (start, end) in (window_minutes(), window_minutes())
            .prop_filter("end not after start", |(s, e)| e <= s)
    ) {
        let result = compute_shift_hours(
            0,
            Some(from_minutes(start)),
            Some(from_minutes(end)),
            &empty_shifts(),
            &ShiftLimits::default(),
        );
        prop_assert!(result.is_err());
    }

    /// After any sequence of edits (successful or rejected), every week
    /// window stays at or below 20 hours and the month at or below 80.
    #[test]
    fn caps_hold_after_any_edit_sequence(
        ops in prop::collection::vec(
            (0..SLOT_COUNT, 0..24 * 60u32, 0..24 * 60u32),
            1..25,
        )
    ) {
        let mut editor = ScheduleEditor::new(MemoryStore::new(), EngineConfig::default());
        for (day, start, end) in ops {
            let _ = editor.set_shift_times(day, Some(&hhmm(start)), Some(&hhmm(end)));
            let _ = editor.calculate_day(day);
        }

        let shifts = &editor.state().shifts;
        for day in 0..SLOT_COUNT {
            prop_assert!(week_total(shifts, day) <= Decimal::from(20));
        }
        prop_assert!(month_total(shifts) <= Decimal::from(80));
        prop_assert_eq!(editor.state().total_hours, month_total(shifts));
    }

    /// Resetting a day twice yields the same state as resetting it once.
    #[test]
    fn reset_is_idempotent(
        day in 0..SLOT_COUNT,
        filled in prop::collection::vec(0..SLOT_COUNT, 0..6),
    ) {
        let mut shifts = empty_shifts();
        for index in filled {
            shifts[index] = ShiftSlot {
                start_time: Some(from_minutes(9 * 60)),
                end_time: Some(from_minutes(12 * 60)),
                hours: Decimal::new(300, 2),
            };
        }

        let once = reset_day_slot(day, &shifts).unwrap();
        shifts[day] = once.slot.clone();
        let twice = reset_day_slot(day, &shifts).unwrap();
        prop_assert_eq!(once, twice);
    }

    /// Serializing and rehydrating any reachable state is lossless.
    #[test]
    fn serialize_rehydrate_round_trips(
        name in ".*",
        notes in ".*",
        ops in prop::collection::vec(
            (0..SLOT_COUNT, 8 * 60..18 * 60u32, 8 * 60..18 * 60u32),
            0..10,
        )
    ) {
        let mut editor = ScheduleEditor::new(MemoryStore::new(), EngineConfig::default());
        let _ = editor.set_field("employeeName", &name);
        let _ = editor.set_field("notes", &notes);
        for (day, start, end) in ops {
            let _ = editor.set_shift_times(day, Some(&hhmm(start)), Some(&hhmm(end)));
            let _ = editor.calculate_day(day);
        }

        let state = editor.state().clone();
        let value = serde_json::to_value(&state).unwrap();
        let back = ScheduleState::from_value(value).unwrap();
        prop_assert_eq!(back, state);
    }
}
