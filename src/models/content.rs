use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::message::{Action, Entry, Table};

/// Heading line of a message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Heading {
    /// Title used verbatim
    Title(String),
    /// Greeting followed by the recipient name
    Greeting { greeting: String, name: String },
}

impl Heading {
    /// Greeting and name joined, without the trailing comma themes add
    pub fn salutation(&self) -> Option<String> {
        match self {
            Heading::Title(_) => None,
            Heading::Greeting { greeting, name } if name.is_empty() => Some(greeting.clone()),
            Heading::Greeting { greeting, name } => Some(format!("{} {}", greeting, name)),
        }
    }

    pub fn title(&self) -> Option<&str> {
        match self {
            Heading::Title(title) => Some(title),
            Heading::Greeting { .. } => None,
        }
    }
}

/// What a message shows between its intros and outros
#[derive(Debug, Clone, PartialEq)]
pub enum Content {
    /// Dictionary, table and actions
    Structured {
        dictionary: Vec<Entry>,
        table: Option<Table>,
        actions: Vec<Action>,
    },
    /// A single markdown block
    FreeForm { markdown: String },
}

impl Content {
    pub fn mode(&self) -> &'static str {
        match self {
            Content::Structured { .. } => "structured",
            Content::FreeForm { .. } => "free-form",
        }
    }
}

/// Working copy of a body with every default applied
#[derive(Debug, Clone, PartialEq)]
pub struct MergedBody {
    pub heading: Heading,
    pub intros: Vec<String>,
    pub content: Content,
    pub outros: Vec<String>,
    pub signature: String,
    pub qr_code: Option<String>,
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// Writing direction of the HTML output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
    #[default]
    Ltr,
    Rtl,
}

impl TextDirection {
    /// Parse a direction, falling back to left-to-right for anything unknown
    pub fn normalize(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "rtl" => TextDirection::Rtl,
            "ltr" | "" => TextDirection::Ltr,
            other => {
                log::warn!("Unknown text direction '{}', using ltr", other);
                TextDirection::Ltr
            }
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TextDirection::Ltr => "ltr",
            TextDirection::Rtl => "rtl",
        }
    }
}
