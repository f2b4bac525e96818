//! Configuration module
//!
//! Handles loading and saving of missive.toml configuration files.
//! Defines Config and TableConfig types.

mod types;

pub use types::{Config, TableConfig};

use crate::error::{MissiveError, Result};
use std::fs;
use std::path::Path;

/// Default configuration file name
pub const CONFIG_FILE: &str = "missive.toml";

/// Load configuration from a TOML file
///
/// A relative `themes_dir` is taken relative to the file's directory.
pub fn load(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path).map_err(|e| {
        MissiveError::Config(format!(
            "Cannot read config from '{}': {}. Run 'missive config init' to create one.",
            path.display(),
            e
        ))
    })?;

    let mut config: Config = toml::from_str(&content)?;

    if let (Some(dir), Some(base)) = (&config.themes_dir, path.parent()) {
        if dir.is_relative() {
            config.themes_dir = Some(base.join(dir));
        }
    }
    Ok(config)
}

/// Save configuration to a TOML file
pub fn save(config: &Config, path: &Path) -> Result<()> {
    let toml = toml::to_string_pretty(config)
        .map_err(|e| MissiveError::Config(format!("Failed to serialize config: {}", e)))?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, toml)?;
    Ok(())
}
