//! Response types for the work-schedule API.
//!
//! This module defines the error response structures, the mapping from
//! [`ScheduleError`] to HTTP statuses, and the success bodies of the
//! compute and export endpoints.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::ScheduleError;

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<ScheduleError> for ApiErrorResponse {
    fn from(error: ScheduleError) -> Self {
        let (status, code) = match &error {
            ScheduleError::DayOutOfRange { .. } => (StatusCode::BAD_REQUEST, "DAY_OUT_OF_RANGE"),
            ScheduleError::InvalidTime { .. } => (StatusCode::BAD_REQUEST, "INVALID_TIME"),
            ScheduleError::OutsideWorkWindow { .. } => {
                (StatusCode::BAD_REQUEST, "OUTSIDE_WORK_WINDOW")
            }
            ScheduleError::EndNotAfterStart { .. } => {
                (StatusCode::BAD_REQUEST, "INVALID_TIME_RANGE")
            }
            ScheduleError::WeeklyCapExceeded { .. } => {
                (StatusCode::BAD_REQUEST, "WEEKLY_CAP_EXCEEDED")
            }
            ScheduleError::MonthlyCapExceeded { .. } => {
                (StatusCode::BAD_REQUEST, "MONTHLY_CAP_EXCEEDED")
            }
            ScheduleError::ApprovalCapExceeded { .. } => {
                (StatusCode::BAD_REQUEST, "APPROVAL_CAP_EXCEEDED")
            }
            ScheduleError::UnknownField { .. } => (StatusCode::BAD_REQUEST, "UNKNOWN_FIELD"),
            ScheduleError::InvalidFieldValue { .. } => {
                (StatusCode::BAD_REQUEST, "INVALID_FIELD_VALUE")
            }
            ScheduleError::ScheduleLocked => (StatusCode::CONFLICT, "SCHEDULE_LOCKED"),
            ScheduleError::InvalidSecret => (StatusCode::FORBIDDEN, "INVALID_SECRET"),
            ScheduleError::ConfigNotFound { .. } | ScheduleError::ConfigParseError { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, "CONFIG_ERROR")
            }
            ScheduleError::Storage { .. } => (StatusCode::INTERNAL_SERVER_ERROR, "STORAGE_ERROR"),
            ScheduleError::Export { .. } => (StatusCode::INTERNAL_SERVER_ERROR, "EXPORT_ERROR"),
        };

        let error = match &error {
            // A failed save means the edit was dropped; say so explicitly.
            ScheduleError::Storage { .. } => ApiError::with_details(
                code,
                error.to_string(),
                "The change was not saved; re-attempt the action",
            ),
            _ => ApiError::new(code, error.to_string()),
        };

        ApiErrorResponse { status, error }
    }
}

/// Success body of `POST /schedule/shifts/{day}/hours`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoursResponse {
    /// The computed hours for the day.
    #[serde(with = "rust_decimal::serde::str")]
    pub hours: Decimal,
    /// The new month total.
    #[serde(with = "rust_decimal::serde::str")]
    pub total_hours: Decimal,
}

/// Success body of `POST /schedule/export`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportResponse {
    /// Path of the written workbook.
    pub path: PathBuf,
}
