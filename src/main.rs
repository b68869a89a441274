use anyhow::Result;
use taskpad::config::Config;
use taskpad::storage::{FileKeyValueStore, TaskStore};
use taskpad::{logger, ui};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = Config::load()?;

    if let Some(log_path) = logger::init(&config.logging)? {
        log::info!("Logging to {}", log_path.display());
    }

    let storage_path = config.storage.resolve_path()?;
    let backend = FileKeyValueStore::open(&storage_path);
    log::info!("Using storage file {}", backend.path().display());
    let store = TaskStore::new(backend, config.storage.key.clone());

    // Run the TUI application
    ui::run_app(&config, store).await?;

    Ok(())
}
