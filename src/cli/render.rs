use std::fs;
use std::path::{Path, PathBuf};

use missive::error::{MissiveError, Result};
use missive::{Engine, Message, ThemeRegistry};

/// Render a message file
pub fn run(
    message_path: PathBuf,
    config_path: Option<PathBuf>,
    theme: Option<String>,
    out_dir: Option<PathBuf>,
    dry_run: bool,
) -> Result<()> {
    let config = super::load_config(config_path)?;
    let message = load_message(&message_path)?;

    let registry = ThemeRegistry::from_config(&config)?;
    let mut engine = Engine::from_config_with_themes(&config, &registry)?;

    if let Some(name) = theme {
        let theme = registry.get(&name).cloned().ok_or_else(|| {
            MissiveError::Theme(format!(
                "Unknown theme '{}'. Run 'missive themes' to list available themes.",
                name
            ))
        })?;
        engine = engine.with_theme(theme)?;
    }

    let rendered = engine.render(&message)?;

    if dry_run {
        print!("{}", rendered.plain_text);
        return Ok(());
    }

    let stem = message_path
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| {
            MissiveError::Message(format!(
                "Cannot derive an output name from '{}'",
                message_path.display()
            ))
        })?;

    let out_dir = out_dir.unwrap_or_else(|| PathBuf::from("."));
    if !out_dir.exists() {
        fs::create_dir_all(&out_dir)?;
    }

    let html_path = out_dir.join(format!("{}.html", stem));
    let text_path = out_dir.join(format!("{}.txt", stem));
    fs::write(&html_path, rendered.html)?;
    fs::write(&text_path, rendered.plain_text)?;

    println!("HTML written to: {}", html_path.display());
    println!("Plaintext written to: {}", text_path.display());

    Ok(())
}

/// Read a message from a .toml or .json file
fn load_message(path: &Path) -> Result<Message> {
    let content = fs::read_to_string(path).map_err(|e| {
        MissiveError::Message(format!(
            "Cannot read message from '{}': {}",
            path.display(),
            e
        ))
    })?;

    match path.extension().and_then(|e| e.to_str()) {
        Some("toml") => Ok(toml::from_str(&content)?),
        Some("json") => Ok(serde_json::from_str(&content)?),
        _ => Err(MissiveError::Message(format!(
            "Unsupported message file '{}': expected .toml or .json",
            path.display()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_toml_message() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("welcome.toml");
        fs::write(
            &path,
            r#"
[body]
name = "Jon Snow"
intros = ["Welcome!"]
"#,
        )
        .unwrap();

        let message = load_message(&path).unwrap();
        assert_eq!(message.body.name, "Jon Snow");
        assert_eq!(message.body.intros, vec!["Welcome!".to_string()]);
    }

    #[test]
    fn test_load_json_message() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("welcome.json");
        fs::write(&path, r#"{"body": {"title": "Hello", "outros": ["Bye"]}}"#).unwrap();

        let message = load_message(&path).unwrap();
        assert_eq!(message.body.title, "Hello");
        assert_eq!(message.body.outros, vec!["Bye".to_string()]);
    }

    #[test]
    fn test_load_unsupported_extension() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("welcome.yaml");
        fs::write(&path, "body: {}").unwrap();

        let err = load_message(&path).unwrap_err();
        assert!(err.to_string().contains("expected .toml or .json"));
    }

    #[test]
    fn test_load_missing_message() {
        let err = load_message(Path::new("/nonexistent/message.toml")).unwrap_err();
        assert!(err.to_string().contains("Cannot read message"));
    }
}
