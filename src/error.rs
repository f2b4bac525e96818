use thiserror::Error;

/// Missive error types
#[derive(Error, Debug)]
pub enum MissiveError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Template error in theme '{theme}': {message}")]
    Template { theme: String, message: String },

    #[error("Table row {row} has columns [{found}], expected [{expected}]")]
    TableShape {
        row: usize,
        expected: String,
        found: String,
    },

    #[error("Table row {row} has {found} cells, expected {expected}")]
    TableWidth {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Theme error: {0}")]
    Theme(String),

    #[error("Markup conversion error: {0}")]
    Markup(String),

    #[error("CSS inlining error: {0}")]
    Inline(String),

    #[error("Message error: {0}")]
    Message(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for Missive operations
pub type Result<T> = std::result::Result<T, MissiveError>;
