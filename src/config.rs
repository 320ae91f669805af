//! Configuration loaded once at startup from a YAML file.
//!
//! Only `cachedir` is required:
//!
//! ```yaml
//! cachedir: ./cache
//! database: pokemon.db
//! artwork_base_url: https://assets.pokemon.com/assets/cms2/img/pokedex/full
//! ```
//!
//! Paths are used as written; relative ones resolve against the working
//! directory, not the directory holding the config file.

use crate::error::{Result, WtpError};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Public pokedex artwork location; images live at `{base}/{padded_id}.png`
pub const DEFAULT_ARTWORK_BASE_URL: &str =
    "https://assets.pokemon.com/assets/cms2/img/pokedex/full";

/// Lookup table file name used when the config does not name one
pub const DEFAULT_DATABASE: &str = "pokemon.db";

const CONFIG_FILE_NAME: &str = "config.yaml";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Directory holding the `{key}_shrouded.png` / `{key}_unshrouded.png` pairs
    pub cachedir: PathBuf,
    #[serde(default = "default_database")]
    pub database: PathBuf,
    #[serde(default = "default_artwork_base_url")]
    pub artwork_base_url: String,
}

fn default_database() -> PathBuf {
    PathBuf::from(DEFAULT_DATABASE)
}

fn default_artwork_base_url() -> String {
    DEFAULT_ARTWORK_BASE_URL.to_string()
}

impl Config {
    /// Build a config in code, with default database and artwork URL
    pub fn new(cachedir: impl Into<PathBuf>) -> Self {
        Self {
            cachedir: cachedir.into(),
            database: default_database(),
            artwork_base_url: default_artwork_base_url(),
        }
    }

    pub fn with_database(mut self, database: impl Into<PathBuf>) -> Self {
        self.database = database.into();
        self
    }

    pub fn with_artwork_base_url(mut self, url: impl Into<String>) -> Self {
        self.artwork_base_url = url.into();
        self
    }

    /// Load and validate a config file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            WtpError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let config = Self::from_yaml(&contents)?;
        log::info!("Loaded config from {}", path.display());
        log::debug!("Cache directory: {}", config.cachedir.display());
        Ok(config)
    }

    /// Parse a config from YAML text without touching the filesystem
    pub fn from_yaml(contents: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(contents)?;
        if config.cachedir.as_os_str().is_empty() {
            return Err(WtpError::Config("cachedir must not be empty".to_string()));
        }
        if config.artwork_base_url.trim().is_empty() {
            return Err(WtpError::Config(
                "artwork_base_url must not be empty".to_string(),
            ));
        }
        Ok(config)
    }
}

/// Returns the default config location.
///
/// `../config.yaml` relative to the working directory if it exists, otherwise
/// `~/.config/wtp_cache/config.yaml`.
pub fn default_config_path() -> PathBuf {
    let sibling = std::env::current_dir()
        .ok()
        .and_then(|cwd| cwd.parent().map(|p| p.join(CONFIG_FILE_NAME)));

    match sibling {
        Some(path) if path.is_file() => path,
        _ => dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("wtp_cache")
            .join(CONFIG_FILE_NAME),
    }
}
