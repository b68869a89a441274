//! Taskpad - a terminal task list that survives restarts
//!
//! Tasks are plain text labels with a completion flag. The whole list is kept
//! under a single key of a key-value store, re-read and rewritten on every
//! change, and redrawn from scratch after each change.
//!
//! # Modules
//!
//! * [`config`] - Application configuration management
//! * [`entities`] - The task model
//! * [`storage`] - Key-value persistence and the task store
//! * [`dispatch`] - Intents, the reducer and the dispatcher
//! * [`ui`] - Terminal user interface components

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Intent dispatch from user actions to the task store
pub mod dispatch;

/// Data models
pub mod entities;

/// Icon definitions for visual representation in the TUI
pub mod icons;

/// File logging setup
pub mod logger;

/// Persistence layer
pub mod storage;

/// Terminal user interface components and rendering
pub mod ui;

pub use entities::Task;
