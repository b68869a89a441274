use crate::config::{Config, LoggingConfig};
use crate::constants::LOG_FILE_NAME;
use anyhow::{Context, Result};
use log::LevelFilter;
use std::path::{Path, PathBuf};

/// Install the global logger described by `config`.
///
/// Log lines only ever go to a file: the terminal belongs to the UI. When
/// logging is disabled nothing is installed and the `log` macros are no-ops.
pub fn init(config: &LoggingConfig) -> Result<Option<PathBuf>> {
    let level = config.level_filter()?;
    if level == LevelFilter::Off {
        return Ok(None);
    }

    let path = get_log_file_path()?;
    init_with_file(level, &path)?;
    Ok(Some(path))
}

/// Install a file logger at `path` with the given level
pub fn init_with_file(level: LevelFilter, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }

    let log_file = fern::log_file(path).with_context(|| format!("Failed to open log file: {}", path.display()))?;

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}] {:<5} {}: {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(log_file)
        .apply()
        .context("Failed to install logger")?;

    Ok(())
}

/// Location of the log file
pub fn get_log_file_path() -> Result<PathBuf> {
    Ok(Config::get_data_dir()?.join(LOG_FILE_NAME))
}
