//! Application state for the work-schedule API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::config::EngineConfig;
use crate::editor::ScheduleEditor;
use crate::storage::{JsonFileStore, ScheduleStore};

/// The store type the API serves, erased so tests can swap in-memory
/// stores for the file store.
pub type DynStore = Box<dyn ScheduleStore + Send + Sync>;

/// Shared application state.
///
/// Holds the single schedule editor behind a lock: the schedule is a
/// single-writer resource and every mutation runs to completion before the
/// next request touches it.
#[derive(Clone)]
pub struct AppState {
    editor: Arc<Mutex<ScheduleEditor<DynStore>>>,
}

impl AppState {
    /// Creates application state around an already constructed editor.
    pub fn new(editor: ScheduleEditor<DynStore>) -> Self {
        Self {
            editor: Arc::new(Mutex::new(editor)),
        }
    }

    /// Creates application state from configuration, backing the editor
    /// with the configured JSON file store.
    pub fn from_config(config: EngineConfig) -> Self {
        let store: DynStore = Box::new(JsonFileStore::new(&config.storage.path));
        Self::new(ScheduleEditor::new(store, config))
    }

    /// Returns the shared editor lock.
    pub fn editor(&self) -> &Arc<Mutex<ScheduleEditor<DynStore>>> {
        &self.editor
    }
}
