//! Request types for the work-schedule API.
//!
//! Field names follow the camelCase wire format of the schedule itself, so
//! the view sends the same names it renders.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Body for `PUT /schedule/fields`: one scalar field edit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldEditRequest {
    /// The wire name of the field to edit (e.g. `employeeName`).
    pub field: String,
    /// The new value, as entered.
    pub value: String,
}

/// Body for `PUT /schedule/shifts/{day}`: record start and/or end time.
///
/// An omitted time is left unchanged; an empty string unsets it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftTimesRequest {
    /// New start time, `HH:MM` or `""`.
    #[serde(default)]
    pub start_time: Option<String>,
    /// New end time, `HH:MM` or `""`.
    #[serde(default)]
    pub end_time: Option<String>,
}

/// Body for the approval transitions: the shared manager secret.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApprovalRequest {
    /// The manager secret, compared verbatim.
    pub secret: String,
}

/// Body for `POST /schedule/export`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExportRequest {
    /// Directory to write the workbook into; defaults to the current
    /// working directory.
    #[serde(default)]
    pub directory: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shift_times_request_accepts_partial_body() {
        let req: ShiftTimesRequest = serde_json::from_str(r#"{"startTime": "09:00"}"#).unwrap();
        assert_eq!(req.start_time.as_deref(), Some("09:00"));
        assert!(req.end_time.is_none());
    }

    #[test]
    fn test_export_request_accepts_empty_body() {
        let req: ExportRequest = serde_json::from_str("{}").unwrap();
        assert!(req.directory.is_none());
    }
}
