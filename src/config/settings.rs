//! Bot settings loaded from `config.toml`.
//!
//! The file is optional. Every field has a default, so a missing file or a missing
//! `[bot]` table yields [`Settings::default`].

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info};

/// Environment variable that overrides the config file location.
pub const CONFIG_PATH_VAR: &str = "LEDGER_BUDDY_CONFIG";

/// Config file used when [`CONFIG_PATH_VAR`] is not set.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Structure of the whole config file.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Bot presentation and command parsing
    pub bot: BotSettings,
}

/// The `[bot]` table.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BotSettings {
    /// Prefix for text commands (slash commands ignore it)
    pub prefix: String,
    /// Name shown in the `/start` greeting
    pub owner_name: String,
}

impl Default for BotSettings {
    fn default() -> Self {
        Self {
            prefix: "/".to_string(),
            owner_name: "Walter".to_string(),
        }
    }
}

/// Parses settings from a TOML string.
pub fn parse_settings(contents: &str) -> Result<Settings> {
    toml::from_str(contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config: {e}"),
    })
}

/// Loads settings from a TOML file.
///
/// # Errors
/// Returns [`Error::Config`] if the file cannot be read or is not valid TOML.
pub fn load_settings<P: AsRef<Path>>(path: P) -> Result<Settings> {
    let path = path.as_ref();
    debug!("Loading settings from {:?}", path);
    let contents = std::fs::read_to_string(path).map_err(|e| Error::Config {
        message: format!("Failed to read config file {}: {e}", path.display()),
    })?;
    parse_settings(&contents)
}

/// Loads settings from [`CONFIG_PATH_VAR`] or [`DEFAULT_CONFIG_PATH`], using defaults
/// when that file does not exist.
pub fn load_default_settings() -> Result<Settings> {
    let path =
        std::env::var(CONFIG_PATH_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    if Path::new(&path).exists() {
        load_settings(&path)
    } else {
        info!("No config file at {}, using defaults", path);
        Ok(Settings::default())
    }
}
