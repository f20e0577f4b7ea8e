use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::common::paths;

pub const DEFAULT_MODE: &str = "stretch";

fn default_mode() -> String {
    DEFAULT_MODE.to_string()
}

/// Settings threaded into every backend at construction.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Fill mode used when the caller does not request one
    #[serde(default = "default_mode")]
    pub default_mode: String,
    /// Echo every external command before running it
    #[serde(default)]
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_mode: default_mode(),
            verbose: false,
        }
    }
}

impl Config {
    /// Load `~/.config/wallset/config.toml`, falling back to defaults when it
    /// does not exist.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_file()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let s = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        toml::from_str(&s).with_context(|| format!("parsing config {}", path.display()))
    }
}
