//! Configuration type definitions.
//!
//! These structs map the engine's YAML configuration file. Every section is
//! optional; missing sections fall back to the defaults the original editor
//! hard-coded.

use std::path::PathBuf;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Top-level engine configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Shift validation limits.
    pub limits: ShiftLimits,
    /// Approval gate settings.
    pub approval: ApprovalConfig,
    /// Schedule store settings.
    pub storage: StorageConfig,
    /// HTTP server settings.
    pub server: ServerConfig,
}

/// Limits applied while entering shift times.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShiftLimits {
    /// First hour of day a shift may start or end, inclusive.
    pub workday_start_hour: u32,
    /// Last hour of day a shift may start or end, inclusive.
    pub workday_end_hour: u32,
    /// Maximum summed hours inside one week window.
    pub weekly_hours_cap: Decimal,
    /// Maximum summed hours across the whole month.
    pub monthly_hours_cap: Decimal,
}

impl Default for ShiftLimits {
    fn default() -> Self {
        Self {
            workday_start_hour: 8,
            workday_end_hour: 17,
            weekly_hours_cap: Decimal::from(20),
            monthly_hours_cap: Decimal::from(80),
        }
    }
}

/// Approval gate settings.
///
/// The secret is a deployment-configured shared string, compared verbatim
/// against manager input. It is not a credential and must not be treated as
/// a security control.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApprovalConfig {
    /// The shared manager secret.
    pub secret: String,
    /// Maximum `total_hours` a schedule may carry to be approvable.
    ///
    /// Intentionally stricter than [`ShiftLimits::monthly_hours_cap`]; the
    /// discrepancy comes from the original editor and is preserved.
    pub max_total_hours: Decimal,
}

impl Default for ApprovalConfig {
    fn default() -> Self {
        Self {
            secret: "managerjpac".to_string(),
            max_total_hours: Decimal::from(20),
        }
    }
}

/// Schedule store settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Path of the JSON file the schedule is persisted to.
    pub path: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("./data/schedule.json"),
        }
    }
}

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
    /// Mount path for serving the API under a sub-path, `/` for the root.
    pub base_path: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            base_path: "/".to_string(),
        }
    }
}
