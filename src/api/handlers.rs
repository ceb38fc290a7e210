//! HTTP request handlers for the work-schedule API.
//!
//! This module contains the handler functions for all endpoints. Day
//! parameters are slot indices, 0..=30 for calendar days 1..=31, matching
//! the calculation layer.

use std::path::PathBuf;

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::ScheduleError;

use super::request::{ApprovalRequest, ExportRequest, FieldEditRequest, ShiftTimesRequest};
use super::response::{ApiError, ApiErrorResponse, ExportResponse, HoursResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/schedule", get(get_schedule))
        .route("/schedule/fields", put(edit_field))
        .route("/schedule/shifts/:day", put(edit_shift_times))
        .route("/schedule/shifts/:day/hours", post(calculate_day))
        .route("/schedule/shifts/:day/reset", post(reset_day))
        .route("/schedule/approve", post(approve))
        .route("/schedule/approve/reset", post(reset_approval))
        .route("/schedule/export", post(export_schedule))
        .with_state(state)
}

/// Handler for GET /schedule: the current schedule snapshot.
async fn get_schedule(State(state): State<AppState>) -> Response {
    let editor = state.editor().lock().await;
    Json(editor.state().clone()).into_response()
}

/// Handler for PUT /schedule/fields: one scalar field edit.
async fn edit_field(
    State(state): State<AppState>,
    payload: Result<Json<FieldEditRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    info!(
        correlation_id = %correlation_id,
        field = %request.field,
        "Processing field edit"
    );

    let mut editor = state.editor().lock().await;
    match editor.set_field(&request.field, &request.value) {
        Ok(()) => Json(editor.state().clone()).into_response(),
        Err(err) => failure(correlation_id, "Field edit rejected", err),
    }
}

/// Handler for PUT /schedule/shifts/{day}: record start/end times.
async fn edit_shift_times(
    State(state): State<AppState>,
    Path(day): Path<usize>,
    payload: Result<Json<ShiftTimesRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    info!(correlation_id = %correlation_id, day, "Processing shift time edit");

    let mut editor = state.editor().lock().await;
    match editor.set_shift_times(day, request.start_time.as_deref(), request.end_time.as_deref())
    {
        Ok(()) => Json(editor.state().clone()).into_response(),
        Err(err) => failure(correlation_id, "Shift time edit rejected", err),
    }
}

/// Handler for POST /schedule/shifts/{day}/hours: compute the day.
async fn calculate_day(State(state): State<AppState>, Path(day): Path<usize>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, day, "Processing hours calculation");

    let mut editor = state.editor().lock().await;
    match editor.calculate_day(day) {
        Ok(hours) => {
            info!(
                correlation_id = %correlation_id,
                day,
                hours = %hours,
                total_hours = %editor.state().total_hours,
                "Hours calculated"
            );
            Json(HoursResponse {
                hours,
                total_hours: editor.state().total_hours,
            })
            .into_response()
        }
        Err(err) => failure(correlation_id, "Hours calculation rejected", err),
    }
}

/// Handler for POST /schedule/shifts/{day}/reset: clear the day.
async fn reset_day(State(state): State<AppState>, Path(day): Path<usize>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, day, "Processing day reset");

    let mut editor = state.editor().lock().await;
    match editor.reset_day(day) {
        Ok(()) => Json(editor.state().clone()).into_response(),
        Err(err) => failure(correlation_id, "Day reset rejected", err),
    }
}

/// Handler for POST /schedule/approve.
async fn approve(
    State(state): State<AppState>,
    payload: Result<Json<ApprovalRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    info!(correlation_id = %correlation_id, "Processing approval");

    let mut editor = state.editor().lock().await;
    match editor.approve(&request.secret) {
        Ok(()) => Json(editor.state().clone()).into_response(),
        Err(err) => failure(correlation_id, "Approval rejected", err),
    }
}

/// Handler for POST /schedule/approve/reset.
async fn reset_approval(
    State(state): State<AppState>,
    payload: Result<Json<ApprovalRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    info!(correlation_id = %correlation_id, "Processing approval reset");

    let mut editor = state.editor().lock().await;
    match editor.reset_approval(&request.secret) {
        Ok(()) => Json(editor.state().clone()).into_response(),
        Err(err) => failure(correlation_id, "Approval reset rejected", err),
    }
}

/// Handler for POST /schedule/export: write the workbook.
async fn export_schedule(
    State(state): State<AppState>,
    payload: Result<Json<ExportRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let directory = request.directory.unwrap_or_else(|| PathBuf::from("."));
    info!(
        correlation_id = %correlation_id,
        directory = %directory.display(),
        "Processing export"
    );

    let editor = state.editor().lock().await;
    match editor.export_to(&directory) {
        Ok(path) => {
            info!(
                correlation_id = %correlation_id,
                path = %path.display(),
                "Export written"
            );
            Json(ExportResponse { path }).into_response()
        }
        Err(err) => failure(correlation_id, "Export failed", err),
    }
}

/// Logs a rejected operation and renders its error response.
fn failure(correlation_id: Uuid, context: &str, err: ScheduleError) -> Response {
    warn!(correlation_id = %correlation_id, error = %err, "{context}");
    ApiErrorResponse::from(err).into_response()
}

/// Renders a JSON body rejection the way the rest of the API reports
/// errors.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => ApiError::new(
            "MISSING_CONTENT_TYPE",
            "Content-Type must be application/json",
        ),
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    (StatusCode::BAD_REQUEST, Json(error)).into_response()
}
