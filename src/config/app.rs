//! Application settings loaded from a TOML file.
//!
//! Every field has a default, so an empty or missing file yields a usable
//! configuration. The file path comes from `INVENTORY_CONFIG` and falls back
//! to `./config.toml`.

use crate::config::products::ProductSeed;
use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable naming the configuration file
pub const CONFIG_PATH_VAR: &str = "INVENTORY_CONFIG";

/// Configuration file used when `INVENTORY_CONFIG` is unset
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Shown in the menu header
    pub store_name: String,
    /// Prefix for every monetary amount (e.g., "R$", "$")
    pub currency_symbol: String,
    /// Emit ANSI color codes
    pub use_color: bool,
    /// Clear the terminal before each menu
    pub clear_screen: bool,
    /// Wait for Enter after each action
    pub pause_after_action: bool,
    /// Delay before the process exits, in milliseconds
    pub exit_delay_ms: u64,
    /// Filter used when `RUST_LOG` is not set
    pub log_level: String,
    /// Products registered at startup
    pub products: Vec<ProductSeed>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            store_name: "Gamer Store".to_string(),
            currency_symbol: "R$".to_string(),
            use_color: true,
            clear_screen: true,
            pause_after_action: true,
            exit_delay_ms: 1000,
            log_level: "warn".to_string(),
            products: Vec::new(),
        }
    }
}

impl AppConfig {
    /// Settings for non-interactive use: no colors, no clearing, no pauses, no delay.
    #[must_use]
    pub fn plain() -> Self {
        Self {
            use_color: false,
            clear_screen: false,
            pause_after_action: false,
            exit_delay_ms: 0,
            ..Self::default()
        }
    }
}

/// Loads configuration from a TOML file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
/// - A field has the wrong type
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let path_ref = path.as_ref();
    debug!("Attempting to load configuration from: {:?}", path_ref);
    let contents = std::fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("Failed to read config file {}: {e}", path_ref.display()),
    })?;

    parse_config(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse {}: {e}", path_ref.display()),
    })
}

/// Parses configuration from TOML text.
///
/// # Errors
/// Returns the TOML deserialization error unchanged.
pub fn parse_config(contents: &str) -> std::result::Result<AppConfig, toml::de::Error> {
    toml::from_str(contents)
}

/// Resolves the configuration path from the environment.
///
/// # Errors
/// Returns an error if `INVENTORY_CONFIG` is set but not valid unicode.
pub fn config_path() -> Result<PathBuf> {
    match std::env::var(CONFIG_PATH_VAR) {
        Ok(path) => Ok(PathBuf::from(path)),
        Err(std::env::VarError::NotPresent) => Ok(PathBuf::from(DEFAULT_CONFIG_PATH)),
        Err(e) => Err(e.into()),
    }
}

/// Loads configuration from `path`, or returns defaults if the file does not exist.
///
/// # Errors
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let path_ref = path.as_ref();
    if path_ref.exists() {
        load_config(path_ref)
    } else {
        Ok(AppConfig::default())
    }
}
