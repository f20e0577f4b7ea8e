use anyhow::{Context, Result};
use std::path::PathBuf;

/// Get the wallset config directory. Not created if missing.
pub fn wallset_config_dir() -> Result<PathBuf> {
    Ok(dirs::config_dir()
        .context("Unable to determine user config directory")?
        .join("wallset"))
}

/// Get the path of the main config file
pub fn config_file() -> Result<PathBuf> {
    Ok(wallset_config_dir()?.join("config.toml"))
}
