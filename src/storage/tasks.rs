use super::{KeyValueStore, StorageError};
use crate::entities::Task;

/// The task list, kept as one serialized JSON array under a single key.
///
/// Every save rewrites the whole list; there is no partial update.
pub struct TaskStore<S: KeyValueStore> {
    backend: S,
    key: String,
}

impl<S: KeyValueStore> TaskStore<S> {
    pub fn new(backend: S, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Load the persisted task list.
    ///
    /// Never fails: an empty slot, a backend error or content that is not a
    /// list of task records all read as an empty list.
    pub fn load(&self) -> Vec<Task> {
        let raw = match self.backend.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                log::warn!("Failed to read task slot '{}': {}", self.key, e);
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<Task>>(&raw) {
            Ok(tasks) => tasks,
            Err(e) => {
                log::warn!("Discarding malformed task slot '{}': {}", self.key, e);
                Vec::new()
            }
        }
    }

    /// Serialize `tasks` and overwrite the slot
    pub fn save(&mut self, tasks: &[Task]) -> Result<(), StorageError> {
        let raw = serde_json::to_string(tasks)?;
        self.backend.set(&self.key, &raw)?;
        log::debug!("Saved {} tasks under '{}'", tasks.len(), self.key);
        Ok(())
    }
}
