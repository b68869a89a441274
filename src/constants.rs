//! Constants used throughout the application
//!
//! This module centralizes magic strings, UI text, and other constant values
//! to improve maintainability and consistency.

/// Application name, used for config, data and log locations
pub const APP_NAME: &str = "taskpad";

// Storage
/// Key of the persisted slot holding the task list
pub const DEFAULT_TASKS_KEY: &str = "tasks";
pub const STORAGE_FILE_NAME: &str = "storage.json";
pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const LOCAL_CONFIG_FILE_NAME: &str = "taskpad.toml";
pub const LOG_FILE_NAME: &str = "taskpad.log";

// UI Titles
pub const TITLE_INPUT: &str = "New task";
pub const TITLE_TASKS: &str = "Tasks";
pub const LABEL_ADD_BUTTON: &str = "[ Add ]";
pub const EMPTY_LIST_HINT: &str = "No tasks yet. Type one above and press Enter.";

// Status bar
pub const HINTS_INPUT: &str = "Enter add · Tab tasks · Esc tasks · Ctrl+C quit";
pub const HINTS_LIST: &str = "↑↓/jk move · Enter/Space toggle · a add · Tab input · q quit";

// Messages
pub const ERROR_SAVE_FAILED: &str = "❌ Failed to save tasks";
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";

// UI Layout Constants
/// Height of the input row including borders
pub const INPUT_HEIGHT: u16 = 3;
/// Width of the add button including borders
pub const ADD_BUTTON_WIDTH: u16 = 11;
