//! Icon service for task markers
//!
//! Supports a Unicode theme and an ASCII fallback for terminals with limited
//! glyph coverage.

use serde::{Deserialize, Serialize};

/// Icon theme variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconTheme {
    /// Unicode symbols (clean, native look)
    #[default]
    Unicode,
    /// ASCII characters (maximum compatibility)
    Ascii,
}

/// Task status icons
#[derive(Debug, Clone)]
pub struct TaskStatusIcons {
    pub pending: &'static str,
    pub completed: &'static str,
}

#[derive(Debug, Clone)]
pub struct IconService {
    status: TaskStatusIcons,
}

impl IconService {
    pub fn new(theme: IconTheme) -> Self {
        let status = match theme {
            IconTheme::Unicode => TaskStatusIcons {
                pending: "○",
                completed: "✓",
            },
            IconTheme::Ascii => TaskStatusIcons {
                pending: "[ ]",
                completed: "[x]",
            },
        };
        Self { status }
    }

    pub fn task_pending(&self) -> &'static str {
        self.status.pending
    }

    pub fn task_completed(&self) -> &'static str {
        self.status.completed
    }

    /// Marker for a task in the given state
    pub fn task_status(&self, completed: bool) -> &'static str {
        if completed {
            self.task_completed()
        } else {
            self.task_pending()
        }
    }
}

impl Default for IconService {
    fn default() -> Self {
        Self::new(IconTheme::default())
    }
}
