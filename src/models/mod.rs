//! Core data models for the work-schedule engine.
//!
//! This module contains all the domain types used throughout the engine.

mod month;
mod schedule;
mod slot;

pub use month::Month;
pub use schedule::{ApprovalStatus, SLOT_COUNT, ScheduleState};
pub use slot::{ShiftSlot, format_time_of_day, parse_time_of_day};
