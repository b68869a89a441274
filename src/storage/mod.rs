//! Local persistence for the task list
//!
//! This module provides:
//! - The [`KeyValueStore`] capability (get/set/remove of string values)
//! - A file-backed and an in-memory implementation of it
//! - The [`TaskStore`], which keeps the whole task list under a single key

pub mod file;
pub mod memory;
pub mod tasks;

pub use file::FileKeyValueStore;
pub use memory::MemoryKeyValueStore;
pub use tasks::TaskStore;

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by a key-value backend
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O failed for {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to serialize stored data: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Durable string slots addressed by key
pub trait KeyValueStore {
    /// Read the value stored under `key`, `None` when the slot is empty
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Overwrite the slot under `key`
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Empty the slot under `key`; removing a missing key is not an error
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}
