use missive::config::{self, Config, CONFIG_FILE};
use missive::error::Result;
use std::path::PathBuf;

/// Initialize missive.toml configuration file
pub fn init(path: Option<PathBuf>) -> Result<()> {
    let config_path = path.unwrap_or_else(|| PathBuf::from(CONFIG_FILE));

    if config_path.exists() {
        eprintln!(
            "Configuration file already exists at: {}",
            config_path.display()
        );
        eprintln!("Remove it first if you want to reinitialize.");
        return Ok(());
    }

    config::save(&Config::default(), &config_path)?;

    println!("Configuration file created: {}", config_path.display());
    println!("\nNext steps:");
    println!(
        "1. Edit {} to set your product name, link and theme",
        config_path.display()
    );
    println!("2. Run 'missive render <message.toml>' to render your first message");

    Ok(())
}
