use std::path::PathBuf;

use missive::error::Result;
use missive::ThemeRegistry;

/// Print every available theme, marking the configured one
pub fn list(config_path: Option<PathBuf>) -> Result<()> {
    let config = super::load_config(config_path)?;

    let registry = ThemeRegistry::from_config(&config)?;

    for name in registry.names() {
        if name == config.theme {
            println!("* {}", name);
        } else {
            println!("  {}", name);
        }
    }

    Ok(())
}
