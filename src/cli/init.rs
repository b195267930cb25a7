//! Init command implementation

use anyhow::{Context, Result, bail};
use std::path::PathBuf;

use ecotrack::config::Config;

/// Write a default config, optionally pointing at a custom data directory
pub fn init_command(config_path: Option<PathBuf>, data_dir: Option<PathBuf>, force: bool) -> Result<()> {
    let config_path = config_path.unwrap_or_else(Config::global_config_path);

    if config_path.exists() && !force {
        bail!(
            "Configuration already exists: {}\nUse --force to overwrite.",
            config_path.display()
        );
    }

    let mut config = Config::default();
    config.storage.data_dir = data_dir;
    config
        .save_to_file(&config_path)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    println!("Created: {}", config_path.display());
    println!("Data directory: {}", config.data_dir().display());
    Ok(())
}
