//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the engine
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{ScheduleError, ScheduleResult};

use super::types::{ApprovalConfig, EngineConfig, ServerConfig, ShiftLimits, StorageConfig};

/// Loads and provides access to the engine configuration.
///
/// # Example
///
/// ```no_run
/// use schedule_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/schedule.yaml").unwrap();
/// println!("weekly cap: {}", loader.limits().weekly_hours_cap);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::ConfigNotFound`] when the file does not
    /// exist and [`ScheduleError::ConfigParseError`] when it is not valid
    /// YAML for [`EngineConfig`].
    pub fn load<P: AsRef<Path>>(path: P) -> ScheduleResult<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|err| {
            if err.kind() == std::io::ErrorKind::NotFound {
                ScheduleError::ConfigNotFound {
                    path: path.display().to_string(),
                }
            } else {
                ScheduleError::ConfigParseError {
                    path: path.display().to_string(),
                    message: err.to_string(),
                }
            }
        })?;

        let config: EngineConfig =
            serde_yaml::from_str(&raw).map_err(|err| ScheduleError::ConfigParseError {
                path: path.display().to_string(),
                message: err.to_string(),
            })?;

        Ok(Self { config })
    }

    /// Wraps an already assembled configuration, mainly for tests and
    /// embedders that construct their own.
    pub fn from_config(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Returns the full configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the shift validation limits.
    pub fn limits(&self) -> &ShiftLimits {
        &self.config.limits
    }

    /// Returns the approval gate settings.
    pub fn approval(&self) -> &ApprovalConfig {
        &self.config.approval
    }

    /// Returns the schedule store settings.
    pub fn storage(&self) -> &StorageConfig {
        &self.config.storage
    }

    /// Returns the HTTP server settings.
    pub fn server(&self) -> &ServerConfig {
        &self.config.server
    }
}
