//! Monthly schedule state.
//!
//! `ScheduleState` is the single record the whole engine operates on: one
//! employee's month of shift slots plus the derived total and the approval
//! state. The serde representation matches the JSON shape the original
//! browser editor persisted, so previously saved schedules rehydrate as-is.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::month::Month;
use super::slot::ShiftSlot;

/// The fixed number of day slots a schedule carries.
///
/// Slots beyond the selected month's real day count are kept but unused;
/// rendering and export skip them.
pub const SLOT_COUNT: usize = 31;

/// Whether the schedule has been signed off by a manager.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApprovalStatus {
    /// Awaiting manager approval; the schedule is editable.
    #[default]
    Pending,
    /// Approved; all normal-path mutation is locked out.
    Approved,
}

impl fmt::Display for ApprovalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApprovalStatus::Pending => f.write_str("pending"),
            ApprovalStatus::Approved => f.write_str("approved"),
        }
    }
}

/// One month's work schedule for one employee.
///
/// `total_hours` is strictly derived: it is recomputed from the slots by
/// every mutation that can change them and is not accepted through the
/// generic field-edit path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScheduleState {
    /// The employee the schedule belongs to.
    pub employee_name: String,
    /// The employee's position, free text.
    pub position: String,
    /// The responsible manager, free text.
    pub manager: String,
    /// The displayed calendar month.
    pub month: Month,
    /// The displayed year. Older saved documents carry it as a string, so
    /// deserialization accepts both forms.
    #[serde(with = "lenient_year")]
    pub year: i32,
    /// The 31 day slots (see [`SLOT_COUNT`]).
    pub shifts: Vec<ShiftSlot>,
    /// Sum of all slot hours, two-decimal once any day is computed.
    #[serde(with = "rust_decimal::serde::str")]
    pub total_hours: Decimal,
    /// Free-text note of days taken off; not validated or computed.
    pub time_off: String,
    /// Free-text notes.
    pub notes: String,
    /// Name of the approving manager, free text.
    pub approved_by: String,
    /// Date the schedule was approved, unset while pending.
    #[serde(with = "iso_date")]
    pub approval_date: Option<NaiveDate>,
    /// The approval gate state.
    pub approval_status: ApprovalStatus,
}

impl Default for ScheduleState {
    fn default() -> Self {
        Self {
            employee_name: String::new(),
            position: String::new(),
            manager: String::new(),
            month: Month::January,
            year: 2025,
            shifts: vec![ShiftSlot::default(); SLOT_COUNT],
            total_hours: Decimal::ZERO,
            time_off: String::new(),
            notes: String::new(),
            approved_by: String::new(),
            approval_date: None,
            approval_status: ApprovalStatus::Pending,
        }
    }
}

impl ScheduleState {
    /// Normalizes a possibly partial record into a well-formed one.
    ///
    /// Pads or truncates `shifts` to exactly [`SLOT_COUNT`] entries; missing
    /// entries become unset slots. Scalar fields already defaulted during
    /// deserialization.
    pub fn normalize(mut self) -> Self {
        self.shifts.resize(SLOT_COUNT, ShiftSlot::default());
        self
    }

    /// Rehydrates a schedule from a raw JSON value, normalizing the result.
    ///
    /// Returns the deserialization error when the value cannot be parsed as
    /// structured schedule data at all; callers are expected to log and fall
    /// back to [`ScheduleState::default`].
    pub fn from_value(value: serde_json::Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value::<ScheduleState>(value).map(ScheduleState::normalize)
    }

    /// Returns true when the schedule is locked by approval.
    pub fn is_approved(&self) -> bool {
        self.approval_status == ApprovalStatus::Approved
    }
}

/// Serde adapter for `year`: serializes as a number, deserializes from a
/// number or a numeric string. Documents saved by the original editor stored
/// the year as a string.
mod lenient_year {
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(i32),
        Text(String),
    }

    pub fn serialize<S>(value: &i32, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i32(*value)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<i32, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Raw::deserialize(deserializer)? {
            Raw::Number(year) => Ok(year),
            Raw::Text(raw) => raw.trim().parse().map_err(D::Error::custom),
        }
    }
}

/// Serde adapter for `Option<NaiveDate>` as `"YYYY-MM-DD"` with `""` for unset.
mod iso_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S>(value: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(date) => serializer.serialize_str(&date.format("%Y-%m-%d").to_string()),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        if raw.is_empty() {
            return Ok(None);
        }
        NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
            .map(Some)
            .map_err(D::Error::custom)
    }
}
