//! Reusable UI components

pub mod input_component;
pub mod status_bar;
pub mod task_list_component;

// Component exports
pub use input_component::InputComponent;
pub use status_bar::StatusBar;
pub use task_list_component::{TaskItem, TaskListComponent};
