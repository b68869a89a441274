//! Intent dispatch
//!
//! User actions become typed [`Intent`] values. [`reduce`] computes the next
//! task list from the current one, and the [`Dispatcher`] runs the full
//! load, reduce, save, refresh sequence against its [`TaskStore`].
//!
//! Toggling matches tasks by their text, not by identity: tasks sharing a
//! label always flip together.

use crate::entities::Task;
use crate::storage::{KeyValueStore, StorageError, TaskStore};

/// A user request to change the task list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Append a task with the given input text
    AddTask(String),
    /// Flip completion on every task with exactly this text
    ToggleTask(String),
}

/// Surface that displays the task list
pub trait TaskRenderer {
    /// Replace whatever is displayed with one item per task, in order
    fn render_tasks(&mut self, tasks: &[Task]);
}

/// Surface that holds the pending new-task text
pub trait InputSurface {
    fn clear_input(&mut self);
}

/// Compute the list that results from applying `intent` to `tasks`.
///
/// Returns `None` when the intent is rejected (blank task text), in which case
/// nothing should be saved or refreshed.
pub fn reduce(mut tasks: Vec<Task>, intent: &Intent) -> Option<Vec<Task>> {
    match intent {
        Intent::AddTask(input) => {
            let text = input.trim();
            if text.is_empty() {
                return None;
            }
            tasks.push(Task::new(text));
        }
        Intent::ToggleTask(text) => {
            tasks.iter_mut().filter(|task| task.text == *text).for_each(Task::toggle);
        }
    }
    Some(tasks)
}

/// Applies intents to the persisted task list and refreshes the view
pub struct Dispatcher<S: KeyValueStore> {
    store: TaskStore<S>,
}

impl<S: KeyValueStore> Dispatcher<S> {
    pub fn new(store: TaskStore<S>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &TaskStore<S> {
        &self.store
    }

    /// Run one intent to completion.
    ///
    /// The list is re-read from the store, reduced, written back in full and
    /// only then pushed to the renderer. The input is cleared after a
    /// successful add. If saving fails the view is left untouched.
    pub fn dispatch(
        &mut self,
        intent: Intent,
        renderer: &mut dyn TaskRenderer,
        input: &mut dyn InputSurface,
    ) -> Result<(), StorageError> {
        let current = self.store.load();

        let Some(next) = reduce(current, &intent) else {
            log::debug!("Ignoring {:?}", intent);
            return Ok(());
        };

        self.store.save(&next)?;

        match &intent {
            Intent::AddTask(_) => {
                log::info!("Added task ({} total)", next.len());
                input.clear_input();
            }
            Intent::ToggleTask(text) => {
                let matched = next.iter().filter(|task| task.text == *text).count();
                log::info!("Toggled {} task(s) labelled {:?}", matched, text);
            }
        }

        renderer.render_tasks(&next);
        Ok(())
    }
}
