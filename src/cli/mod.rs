//! CLI command implementations

pub mod calc;
pub mod guide;
pub mod init;
pub mod learn;
pub mod list;
pub mod log;
pub mod schedule;
pub mod stats;

use std::path::PathBuf;

use anyhow::{Context, Result};

use ecotrack::config::Config;
use ecotrack::stats::WasteTracker;
use ecotrack::store::{BlobStore, DataDirLock, open_store};

pub type Tracker = WasteTracker<Box<dyn BlobStore>>;

/// Resolved config and data directory shared by all commands
pub struct AppContext {
    pub config: Config,
    pub data_dir: PathBuf,
}

impl AppContext {
    /// Load the config (creating it if missing) and apply the `--data-dir` override
    pub fn load(config_path: Option<PathBuf>, data_dir: Option<PathBuf>) -> Result<Self> {
        let config = Config::load_from(config_path.as_deref())?;
        let data_dir = data_dir.unwrap_or_else(|| config.data_dir());
        tracing::debug!(
            data_dir = %data_dir.display(),
            backend = config.storage.backend.as_str(),
            "Resolved data directory"
        );
        Ok(Self { config, data_dir })
    }

    /// Exclusive lock on the data directory, held for a whole command
    pub fn lock(&self) -> Result<DataDirLock> {
        DataDirLock::acquire(&self.data_dir)
            .with_context(|| format!("Failed to lock data directory: {}", self.data_dir.display()))
    }

    pub fn open_tracker(&self) -> Result<Tracker> {
        let store = open_store(self.config.storage.backend, &self.data_dir)
            .with_context(|| format!("Failed to open store in {}", self.data_dir.display()))?;
        Ok(WasteTracker::open(store, self.config.tracking.streak_policy)?)
    }
}
