use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::models::Product;
use crate::table::DEFAULT_WRAP_WIDTH;
use crate::theme::DEFAULT_THEME;

/// Missive configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Theme used for rendering, built in or found in `themes_dir`
    pub theme: String,

    /// Writing direction of the HTML output ("ltr" or "rtl")
    pub text_direction: String,

    /// Keep the stylesheet in `<style>` instead of inlining it
    pub disable_css_inlining: bool,

    /// Directory holding `<name>.html` + `<name>.txt` theme skeletons
    #[serde(skip_serializing_if = "Option::is_none")]
    pub themes_dir: Option<PathBuf>,

    /// Branding shown in every message
    pub product: Product,

    /// Plaintext table layout
    pub table: TableConfig,
}

/// Plaintext table settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Longest cell line before word-wrapping
    pub wrap_width: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: DEFAULT_THEME.to_string(),
            text_direction: "ltr".to_string(),
            disable_css_inlining: false,
            themes_dir: None,
            product: Product {
                name: "Missive".to_string(),
                link: "https://example.com/".to_string(),
                ..Default::default()
            },
            table: TableConfig::default(),
        }
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            wrap_width: DEFAULT_WRAP_WIDTH,
        }
    }
}
