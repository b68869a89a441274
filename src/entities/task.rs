use serde::{Deserialize, Serialize};

/// A single entry in the task list.
///
/// Stored records are `{ "text": ..., "completed": ... }`; a record without
/// `completed` is read as pending.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub text: String,
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    /// Create a pending task.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            completed: false,
        }
    }

    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }
}
