//! Configuration management for Taskpad
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{
    APP_NAME, CONFIG_FILE_NAME, CONFIG_GENERATED, DEFAULT_TASKS_KEY, LOCAL_CONFIG_FILE_NAME, STORAGE_FILE_NAME,
};
use crate::icons::IconTheme;
use anyhow::{Context, Result};
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Descriptions written above each field of a generated config file
const FIELD_COMMENTS: &[(&str, &str)] = &[
    ("mouse_enabled", "Enable mouse support (click a task to toggle it, click [ Add ] to add)"),
    ("icon_theme", "Icon theme for task markers: \"unicode\" or \"ascii\""),
    ("key", "Key of the slot holding the task list"),
    ("enabled", "Write a log file to the XDG data directory"),
    ("level", "Minimum log level: \"error\", \"warn\", \"info\", \"debug\" or \"trace\""),
];

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub display: DisplayConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Enable mouse support (click to toggle, click the add button)
    pub mouse_enabled: bool,
}

/// Display configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DisplayConfig {
    /// Icon theme for task markers: "unicode" or "ascii"
    pub icon_theme: IconTheme,
}

/// Storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Storage file location; defaults to the XDG data directory
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    /// Key of the slot holding the task list
    pub key: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable logging to file
    pub enabled: bool,
    /// Minimum level: "error", "warn", "info", "debug" or "trace"
    pub level: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { mouse_enabled: true }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: None,
            key: DEFAULT_TASKS_KEY.to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".to_string(),
        }
    }
}

impl LoggingConfig {
    /// Parsed log level; `Off` when logging is disabled
    pub fn level_filter(&self) -> Result<LevelFilter> {
        if !self.enabled {
            return Ok(LevelFilter::Off);
        }
        LevelFilter::from_str(&self.level).map_err(|e| anyhow::anyhow!("Invalid log level '{}': {}", self.level, e))
    }
}

impl StorageConfig {
    /// Resolve the storage file location
    pub fn resolve_path(&self) -> Result<PathBuf> {
        match &self.path {
            Some(path) => Ok(path.clone()),
            None => Ok(Config::get_data_dir()?.join(STORAGE_FILE_NAME)),
        }
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from(LOCAL_CONFIG_FILE_NAME);
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Ok(xdg_config) = Self::get_default_config_path() {
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.storage.key.trim().is_empty() {
            anyhow::bail!("storage.key cannot be empty");
        }

        if let Some(path) = &self.storage.path {
            if path.as_os_str().is_empty() {
                anyhow::bail!("storage.path cannot be empty");
            }
        }

        if let Err(e) = LevelFilter::from_str(&self.logging.level) {
            anyhow::bail!("Invalid logging.level '{}': {}", self.logging.level, e);
        }

        Ok(())
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;
        let toml_content = Self::annotate(&toml_content);

        let header = format!(
            "# Taskpad Configuration File\n# Generated on {}\n\n",
            chrono::Local::now().format("%Y-%m-%d")
        );

        let full_content = header + &toml_content;

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        log::info!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Prefix each serialized field with its description and add the
    /// optional fields that are unset by default as commented-out lines
    fn annotate(toml_content: &str) -> String {
        let mut annotated = String::with_capacity(toml_content.len() * 2);

        for line in toml_content.lines() {
            let trimmed = line.trim();
            let key = trimmed.split('=').next().map(str::trim).unwrap_or_default();

            if !trimmed.starts_with('[') {
                if let Some((_, comment)) = FIELD_COMMENTS.iter().find(|(field, _)| *field == key) {
                    annotated.push_str("# ");
                    annotated.push_str(comment);
                    annotated.push('\n');
                }
            }

            annotated.push_str(line);
            annotated.push('\n');

            if trimmed == "[storage]" {
                annotated.push_str("# Storage file location (defaults to the XDG data directory)\n");
                annotated.push_str("# path = \"/path/to/storage.json\"\n");
            }
        }

        annotated
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join(APP_NAME))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Get the XDG data directory used for the storage and log files
    pub fn get_data_dir() -> Result<PathBuf> {
        dirs::data_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
            .map(|dir| dir.join(APP_NAME))
    }
}
