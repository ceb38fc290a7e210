//! Schedule persistence.
//!
//! The [`ScheduleStore`] trait is the persistence seam: the editor talks to
//! it and never to the filesystem directly, so the calculation and approval
//! logic stays unit-testable without storage. [`JsonFileStore`] is the
//! production implementation (the local-storage slot of the original,
//! rendered as a JSON file); [`MemoryStore`] backs tests and embedders that
//! bring their own persistence.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::error::{ScheduleError, ScheduleResult};
use crate::models::ScheduleState;

/// Persistence adapter for one schedule record.
///
/// `load` returns the raw JSON value so the caller controls normalization
/// and the malformed-data fallback; `save` writes a full snapshot.
pub trait ScheduleStore {
    /// Loads the previously saved raw schedule, `None` when nothing has
    /// been saved yet.
    fn load(&self) -> ScheduleResult<Option<serde_json::Value>>;

    /// Persists a full snapshot of the schedule.
    fn save(&self, state: &ScheduleState) -> ScheduleResult<()>;

    /// Human-readable description of where this store keeps its data,
    /// used in error and log messages.
    fn location(&self) -> String;
}

impl<S: ScheduleStore + ?Sized> ScheduleStore for Box<S> {
    fn load(&self) -> ScheduleResult<Option<serde_json::Value>> {
        (**self).load()
    }

    fn save(&self, state: &ScheduleState) -> ScheduleResult<()> {
        (**self).save(state)
    }

    fn location(&self) -> String {
        (**self).location()
    }
}

/// Stores the schedule as a pretty-printed JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Creates a store backed by the given file path. The file and its
    /// parent directories are created on the first save.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    fn storage_error(&self, err: impl std::fmt::Display) -> ScheduleError {
        ScheduleError::Storage {
            path: self.path.display().to_string(),
            message: err.to_string(),
        }
    }
}

impl ScheduleStore for JsonFileStore {
    fn load(&self) -> ScheduleResult<Option<serde_json::Value>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(self.storage_error(err)),
        };
        let value = serde_json::from_str(&raw).map_err(|err| self.storage_error(err))?;
        Ok(Some(value))
    }

    fn save(&self, state: &ScheduleState) -> ScheduleResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|err| self.storage_error(err))?;
            }
        }
        let raw = serde_json::to_string_pretty(state).map_err(|err| self.storage_error(err))?;
        fs::write(&self.path, raw).map_err(|err| self.storage_error(err))
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

/// In-memory store, mainly for tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    value: Mutex<Option<serde_json::Value>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-seeded with a raw value, as if a prior session
    /// had saved it.
    pub fn with_value(value: serde_json::Value) -> Self {
        Self {
            value: Mutex::new(Some(value)),
        }
    }
}

impl ScheduleStore for MemoryStore {
    fn load(&self) -> ScheduleResult<Option<serde_json::Value>> {
        Ok(self
            .value
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone())
    }

    fn save(&self, state: &ScheduleState) -> ScheduleResult<()> {
        let value = serde_json::to_value(state).map_err(|err| ScheduleError::Storage {
            path: self.location(),
            message: err.to_string(),
        })?;
        *self
            .value
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(value);
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_store_load_missing_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("schedule.json"));
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_file_store_save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("nested/schedule.json"));

        let mut state = ScheduleState::default();
        state.employee_name = "Ada".to_string();
        store.save(&state).unwrap();

        let raw = store.load().unwrap().unwrap();
        let loaded = ScheduleState::from_value(raw).unwrap();
        assert_eq!(loaded, state);
    }

    #[test]
    fn test_file_store_corrupt_json_is_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("schedule.json");
        fs::write(&path, "{ not json").unwrap();

        let store = JsonFileStore::new(&path);
        assert!(matches!(
            store.load().unwrap_err(),
            ScheduleError::Storage { .. }
        ));
    }

    #[test]
    fn test_file_store_save_into_unwritable_path_is_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        // A file where a directory is needed makes create_dir_all fail.
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "x").unwrap();
        let store = JsonFileStore::new(blocker.join("schedule.json"));

        assert!(matches!(
            store.save(&ScheduleState::default()).unwrap_err(),
            ScheduleError::Storage { .. }
        ));
    }

    #[test]
    fn test_memory_store_round_trips() {
        let store = MemoryStore::new();
        assert!(store.load().unwrap().is_none());

        let state = ScheduleState::default();
        store.save(&state).unwrap();
        let raw = store.load().unwrap().unwrap();
        assert_eq!(ScheduleState::from_value(raw).unwrap(), state);
    }

    #[test]
    fn test_memory_store_seeded_value() {
        let store = MemoryStore::with_value(serde_json::json!({"employeeName": "Ada"}));
        let raw = store.load().unwrap().unwrap();
        assert_eq!(raw["employeeName"], "Ada");
    }
}
