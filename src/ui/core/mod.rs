//! Core UI functionality for Taskpad.
//!
//! # Module Components
//!
//! - [`actions`] - Action definitions and focus targets
//! - [`component`] - Base component trait and rendering abstractions
//! - [`event_handler`] - Terminal event polling
//!
//! Components turn raw input into [`Action`] values; the app component is the
//! only place where actions are executed.

pub mod actions;
pub mod component;
pub mod event_handler;

pub use actions::{Action, Focus};
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
