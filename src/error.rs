//! Error types for the work-schedule engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while editing, validating,
//! persisting or exporting a schedule.

use chrono::NaiveTime;
use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the work-schedule engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application. Validation
/// errors carry the offending values so callers can render a precise,
/// user-facing notice.
///
/// # Example
///
/// ```
/// use schedule_engine::error::ScheduleError;
///
/// let error = ScheduleError::DayOutOfRange { day: 42 };
/// assert_eq!(error.to_string(), "Day index 42 is out of range (0..=30)");
/// ```
#[derive(Debug, Error)]
pub enum ScheduleError {
    /// A day index outside the fixed 31-slot month was supplied.
    #[error("Day index {day} is out of range (0..=30)")]
    DayOutOfRange {
        /// The rejected index.
        day: usize,
    },

    /// A time-of-day string could not be parsed as `HH:MM`.
    #[error("Invalid time of day '{value}': expected HH:MM")]
    InvalidTime {
        /// The rejected input.
        value: String,
    },

    /// A shift start or end falls outside the permitted working window.
    #[error(
        "Work hours are between {window_start}:00 and {window_end}:00 ({which} time is {time})"
    )]
    OutsideWorkWindow {
        /// Which of the two times violated the window ("start" or "end").
        which: &'static str,
        /// The offending time.
        time: NaiveTime,
        /// First permitted hour of day, inclusive.
        window_start: u32,
        /// Last permitted hour of day, inclusive.
        window_end: u32,
    },

    /// A shift's end time was not strictly after its start time.
    #[error("End time {end} must be after start time {start}")]
    EndNotAfterStart {
        /// The shift start.
        start: NaiveTime,
        /// The shift end.
        end: NaiveTime,
    },

    /// The 5-day week window would exceed the weekly hours cap.
    #[error("Total weekly hours cannot exceed {cap} (would be {total})")]
    WeeklyCapExceeded {
        /// The week total the update would have produced.
        total: Decimal,
        /// The configured weekly cap.
        cap: Decimal,
    },

    /// The month total would exceed the monthly hours cap.
    #[error("Total hours cannot exceed {cap} (would be {total})")]
    MonthlyCapExceeded {
        /// The month total the update would have produced.
        total: Decimal,
        /// The configured monthly cap.
        cap: Decimal,
    },

    /// A mutation was attempted while the schedule is approved.
    #[error("Schedule is already approved and cannot be modified")]
    ScheduleLocked,

    /// The supplied manager secret did not match the configured one.
    #[error("Incorrect manager authorization")]
    InvalidSecret,

    /// Approval was requested for a schedule above the approval cap.
    #[error("Cannot approve a schedule exceeding {cap} hours (total is {total})")]
    ApprovalCapExceeded {
        /// The schedule's current total hours.
        total: Decimal,
        /// The configured approval cap.
        cap: Decimal,
    },

    /// An unknown scalar field name was supplied to the field-edit path.
    #[error("Unknown schedule field: {name}")]
    UnknownField {
        /// The rejected field name.
        name: String,
    },

    /// A scalar field edit carried a value the field cannot hold.
    #[error("Invalid value for field '{field}': {message}")]
    InvalidFieldValue {
        /// The field being edited.
        field: String,
        /// A description of what made the value invalid.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The backing store failed to load or save the schedule.
    #[error("Storage error at '{path}': {message}")]
    Storage {
        /// The store location involved.
        path: String,
        /// A description of the failure.
        message: String,
    },

    /// The spreadsheet export failed.
    #[error("Export failed: {message}")]
    Export {
        /// A description of the failure.
        message: String,
    },
}

/// A type alias for Results that return ScheduleError.
pub type ScheduleResult<T> = Result<T, ScheduleError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn time(s: &str) -> NaiveTime {
        NaiveTime::parse_from_str(s, "%H:%M").unwrap()
    }

    #[test]
    fn test_day_out_of_range_displays_index() {
        let error = ScheduleError::DayOutOfRange { day: 31 };
        assert_eq!(error.to_string(), "Day index 31 is out of range (0..=30)");
    }

    #[test]
    fn test_invalid_time_displays_value() {
        let error = ScheduleError::InvalidTime {
            value: "9 o'clock".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid time of day '9 o'clock': expected HH:MM"
        );
    }

    #[test]
    fn test_outside_work_window_displays_time_and_window() {
        let error = ScheduleError::OutsideWorkWindow {
            which: "start",
            time: time("06:00"),
            window_start: 8,
            window_end: 17,
        };
        assert_eq!(
            error.to_string(),
            "Work hours are between 8:00 and 17:00 (start time is 06:00:00)"
        );
    }

    #[test]
    fn test_end_not_after_start_displays_both_times() {
        let error = ScheduleError::EndNotAfterStart {
            start: time("12:00"),
            end: time("09:30"),
        };
        assert_eq!(
            error.to_string(),
            "End time 09:30:00 must be after start time 12:00:00"
        );
    }

    #[test]
    fn test_weekly_cap_displays_total_and_cap() {
        let error = ScheduleError::WeeklyCapExceeded {
            total: Decimal::from_str("20.01").unwrap(),
            cap: Decimal::from(20),
        };
        assert_eq!(
            error.to_string(),
            "Total weekly hours cannot exceed 20 (would be 20.01)"
        );
    }

    #[test]
    fn test_schedule_locked_message() {
        assert_eq!(
            ScheduleError::ScheduleLocked.to_string(),
            "Schedule is already approved and cannot be modified"
        );
    }

    #[test]
    fn test_invalid_secret_message() {
        assert_eq!(
            ScheduleError::InvalidSecret.to_string(),
            "Incorrect manager authorization"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<ScheduleError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_locked() -> ScheduleResult<()> {
            Err(ScheduleError::ScheduleLocked)
        }

        fn propagates_error() -> ScheduleResult<()> {
            returns_locked()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
