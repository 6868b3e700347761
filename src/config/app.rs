// src/config/app.rs
use super::defaults::*;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tracing::warn;

use crate::consts::{CONFIG_DIR_NAME, CONFIG_ENV_VAR, CONFIG_FILE_NAME};
use crate::core::Result;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(default = "default_logging")]
    pub logging: Logging,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Logging {
    /// `tracing` env-filter directive; `RUST_LOG` wins when set
    #[serde(default = "default_filter")]
    pub filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            logging: default_logging(),
        }
    }
}

static CONFIG: OnceLock<Config> = OnceLock::new();

/// `$CLASSIC_CIPHERS_CONFIG`, else `<config dir>/classic-ciphers/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
        return Some(PathBuf::from(path));
    }
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Read and parse one config file, surfacing every failure.
pub fn try_load_from(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Resolve [`config_path`] and load it. No file means defaults; a file that
/// cannot be read or parsed is an error.
pub fn try_load() -> Result<Config> {
    match config_path() {
        Some(path) if path.exists() => try_load_from(&path),
        _ => Ok(Config::default()),
    }
}

/// Load config once — falls back to defaults if missing or broken
pub fn load() -> &'static Config {
    CONFIG.get_or_init(|| {
        try_load().unwrap_or_else(|err| {
            warn!(error = %err, "unusable config, using defaults");
            Config::default()
        })
    })
}
