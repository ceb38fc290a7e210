//! Per-day shift slot model.
//!
//! A schedule always carries exactly 31 slots, one per possible calendar
//! day. Unset times are represented as `None` in memory and as an empty
//! string on the wire, matching the persisted schedule format.

use chrono::NaiveTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{ScheduleError, ScheduleResult};

/// One calendar day's shift record: start time, end time and derived hours.
///
/// `hours` is a non-negative decimal, `0` while the day is unset and a
/// two-decimal value once computed. It is derived from the slot's own
/// start/end pair and never entered directly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShiftSlot {
    /// Shift start as wall-clock time of day, `None` when unset.
    #[serde(with = "time_of_day")]
    pub start_time: Option<NaiveTime>,
    /// Shift end as wall-clock time of day, `None` when unset.
    #[serde(with = "time_of_day")]
    pub end_time: Option<NaiveTime>,
    /// Worked hours derived from the start/end pair.
    #[serde(with = "rust_decimal::serde::str")]
    pub hours: Decimal,
}

impl ShiftSlot {
    /// Returns true when both a start and an end time are recorded.
    pub fn is_complete(&self) -> bool {
        self.start_time.is_some() && self.end_time.is_some()
    }
}

/// Parses a wall-clock `HH:MM` string; an empty string means "unset".
///
/// # Example
///
/// ```
/// use schedule_engine::models::parse_time_of_day;
///
/// assert!(parse_time_of_day("").unwrap().is_none());
/// assert!(parse_time_of_day("09:30").unwrap().is_some());
/// assert!(parse_time_of_day("9 am").is_err());
/// ```
pub fn parse_time_of_day(value: &str) -> ScheduleResult<Option<NaiveTime>> {
    if value.is_empty() {
        return Ok(None);
    }
    NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .map(Some)
        .map_err(|_| ScheduleError::InvalidTime {
            value: value.to_string(),
        })
}

/// Formats an optional time of day back to its wire form (`HH:MM` or `""`).
pub fn format_time_of_day(value: Option<NaiveTime>) -> String {
    match value {
        Some(t) => t.format("%H:%M").to_string(),
        None => String::new(),
    }
}

/// Serde adapter for `Option<NaiveTime>` as `"HH:MM"` with `""` for unset.
mod time_of_day {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S>(value: &Option<NaiveTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::format_time_of_day(*value))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        super::parse_time_of_day(&raw).map_err(D::Error::custom)
    }
}
