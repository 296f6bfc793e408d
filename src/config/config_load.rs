// src/config/config_load.rs
//
// loading config.toml

use log::{info, warn};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use super::config_types::{AnimationConfig, OscConfig, StyleConfig, WindowConfig};
use super::ConfigError;

const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub window: WindowConfig,
    pub style: StyleConfig,
    pub animation: AnimationConfig,
    pub osc: OscConfig,
}

impl Config {
    /// Loads config.toml from the executable's directory, then the working
    /// directory. Falls back to the built-in defaults when neither exists.
    pub fn load() -> Result<Self, ConfigError> {
        let candidates = [Self::exe_dir_path(), Some(PathBuf::from(CONFIG_FILE))];

        for path in candidates.into_iter().flatten() {
            if path.exists() {
                return Self::load_from_path(&path);
            }
        }

        warn!("No {} found, using default config", CONFIG_FILE);
        Ok(Self::default())
    }

    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let config = Self::parse(&content)?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    fn exe_dir_path() -> Option<PathBuf> {
        let exe_path = std::env::current_exe().ok()?;
        let exe_dir = exe_path.parent()?;
        Some(exe_dir.join(CONFIG_FILE))
    }
}
