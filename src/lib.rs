//! Monthly work-schedule engine.
//!
//! This crate records daily start/end times across a month, computes worked
//! hours with weekly and monthly caps, gates mutation behind a manager
//! approval state machine, persists the schedule as JSON, and exports it to
//! an XLSX workbook. The calculation and approval logic is pure; storage
//! and export are injected adapters, and a thin HTTP API exposes the editor
//! to a view.

#![warn(missing_docs)]

pub mod api;
pub mod approval;
pub mod calculation;
pub mod config;
pub mod editor;
pub mod error;
pub mod export;
pub mod models;
pub mod storage;
