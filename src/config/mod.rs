//! Configuration loading and management for the work-schedule engine.
//!
//! Validation limits, the approval secret, the store location and the HTTP
//! binding all come from a single YAML file; every setting has a default
//! matching the behavior of the original editor.
//!
//! # Example
//!
//! ```no_run
//! use schedule_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/schedule.yaml").unwrap();
//! println!("storing schedule at {}", config.storage().path.display());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{ApprovalConfig, EngineConfig, ServerConfig, ShiftLimits, StorageConfig};
