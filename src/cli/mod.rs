//! Command-line interface module
//!
//! Implements all CLI commands using clap:
//! - config init: Initialize configuration file
//! - render: Render a message to .html and .txt files
//! - themes: List available themes

pub mod config;
pub mod render;
pub mod themes;

use missive::config::{self as settings, Config, CONFIG_FILE};
use missive::error::Result;
use std::path::PathBuf;

/// Load the given config file, or missive.toml when present, or defaults
pub(crate) fn load_config(path: Option<PathBuf>) -> Result<Config> {
    match path {
        Some(path) => settings::load(&path),
        None => {
            let default_path = PathBuf::from(CONFIG_FILE);
            if default_path.exists() {
                settings::load(&default_path)
            } else {
                Ok(Config::default())
            }
        }
    }
}
