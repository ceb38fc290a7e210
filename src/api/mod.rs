//! HTTP API module for the work-schedule engine.
//!
//! This is the seam the view talks through: it renders the schedule
//! returned by `GET /schedule` and dispatches each user action to the
//! corresponding endpoint.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{ApprovalRequest, ExportRequest, FieldEditRequest, ShiftTimesRequest};
pub use response::{ApiError, ExportResponse, HoursResponse};
pub use state::{AppState, DynStore};
