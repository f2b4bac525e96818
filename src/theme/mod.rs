//! Themes module
//!
//! A theme is plain data: a name and two skeletons, one producing the HTML
//! document and one the plaintext fallback. Two themes are built in
//! (`default` and `flat`); more can be registered or discovered on disk as
//! `<name>.html` + `<name>.txt` pairs.

mod default;
mod flat;

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::config::Config;
use crate::error::{MissiveError, Result};

/// Name of the theme used when none is chosen
pub const DEFAULT_THEME: &str = "default";

/// A named pair of skeletons
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    name: Cow<'static, str>,
    html: Cow<'static, str>,
    plain_text: Cow<'static, str>,
}

impl Theme {
    pub fn new(
        name: impl Into<String>,
        html: impl Into<String>,
        plain_text: impl Into<String>,
    ) -> Self {
        Self {
            name: Cow::Owned(name.into()),
            html: Cow::Owned(html.into()),
            plain_text: Cow::Owned(plain_text.into()),
        }
    }

    /// Centered card layout with a masthead and footer
    pub fn default_theme() -> Self {
        Self {
            name: Cow::Borrowed(DEFAULT_THEME),
            html: Cow::Borrowed(default::HTML),
            plain_text: Cow::Borrowed(default::PLAIN_TEXT),
        }
    }

    /// Borderless layout on a coloured background
    pub fn flat() -> Self {
        Self {
            name: Cow::Borrowed("flat"),
            html: Cow::Borrowed(flat::HTML),
            plain_text: Cow::Borrowed(flat::PLAIN_TEXT),
        }
    }

    /// Every theme shipped with the crate
    pub fn builtins() -> Vec<Theme> {
        vec![Self::default_theme(), Self::flat()]
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn html_template(&self) -> &str {
        &self.html
    }

    pub fn plain_text_template(&self) -> &str {
        &self.plain_text
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}

/// Themes keyed by name
#[derive(Debug, Clone)]
pub struct ThemeRegistry {
    themes: BTreeMap<String, Theme>,
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemeRegistry {
    /// Registry holding the built-in themes
    pub fn new() -> Self {
        let mut registry = Self {
            themes: BTreeMap::new(),
        };
        for theme in Theme::builtins() {
            registry.register(theme);
        }
        registry
    }

    /// Built-in themes plus those found in the configured `themes_dir`
    pub fn from_config(config: &Config) -> Result<Self> {
        let mut registry = Self::new();
        if let Some(dir) = &config.themes_dir {
            registry.load_dir(dir)?;
        }
        Ok(registry)
    }

    /// Add a theme, replacing any theme with the same name
    pub fn register(&mut self, theme: Theme) {
        if self.themes.contains_key(theme.name()) {
            log::debug!("Replacing theme '{}'", theme.name());
        }
        self.themes.insert(theme.name().to_string(), theme);
    }

    pub fn get(&self, name: &str) -> Option<&Theme> {
        self.themes.get(name)
    }

    /// Theme names in alphabetical order
    pub fn names(&self) -> Vec<&str> {
        self.themes.keys().map(String::as_str).collect()
    }

    /// Register every theme found in `dir`, returning how many were added
    pub fn load_dir(&mut self, dir: &Path) -> Result<usize> {
        let themes = load_dir(dir)?;
        let count = themes.len();
        for theme in themes {
            self.register(theme);
        }
        Ok(count)
    }

    /// Look up `name`, falling back to the default theme when it is unknown
    pub fn resolve(&self, name: &str) -> Theme {
        match self.get(name) {
            Some(theme) => theme.clone(),
            None => {
                log::warn!("Unknown theme '{}', using '{}'", name, DEFAULT_THEME);
                self.get(DEFAULT_THEME).cloned().unwrap_or_default()
            }
        }
    }
}

/// Discover `<name>.html` + `<name>.txt` skeleton pairs in a directory
///
/// Only the top level is scanned. A skeleton without its partner is skipped
/// with a warning.
pub fn load_dir(dir: &Path) -> Result<Vec<Theme>> {
    if !dir.exists() {
        return Err(MissiveError::Theme(format!(
            "Themes directory does not exist: {}",
            dir.display()
        )));
    }

    if !dir.is_dir() {
        return Err(MissiveError::Theme(format!(
            "Themes path is not a directory: {}",
            dir.display()
        )));
    }

    let mut pairs: BTreeMap<String, (Option<PathBuf>, Option<PathBuf>)> = BTreeMap::new();

    for entry in WalkDir::new(dir)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let (Some(stem), Some(ext)) = (
            path.file_stem().and_then(|s| s.to_str()),
            path.extension().and_then(|e| e.to_str()),
        ) else {
            continue;
        };

        let slot = pairs.entry(stem.to_string()).or_default();
        match ext {
            "html" => slot.0 = Some(path.to_path_buf()),
            "txt" => slot.1 = Some(path.to_path_buf()),
            _ => {}
        }
    }

    let mut themes = Vec::new();
    for (name, pair) in pairs {
        match pair {
            (Some(html), Some(text)) => {
                let theme = Theme::new(
                    name.as_str(),
                    fs::read_to_string(&html)?,
                    fs::read_to_string(&text)?,
                );
                log::debug!("Loaded theme '{}' from {}", name, dir.display());
                themes.push(theme);
            }
            (Some(path), None) | (None, Some(path)) => {
                log::warn!(
                    "Skipping '{}': theme '{}' needs both a .html and a .txt skeleton",
                    path.display(),
                    name
                );
            }
            (None, None) => {}
        }
    }

    Ok(themes)
}
