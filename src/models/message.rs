use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ============================================================================
// Branding
// ============================================================================

/// Product branding shown in the header and footer of every message
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Product {
    /// Product name (defaults to the library name when empty)
    pub name: String,
    /// Link to the product home page
    pub link: String,
    /// Logo URL, only used by the HTML output
    pub logo: String,
    /// Copyright line of the footer
    pub copyright: String,
    /// Hint shown under button actions; `{ACTION}` is replaced by the button label
    pub trouble_text: String,
}

// ============================================================================
// Message content
// ============================================================================

/// A message to render
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Message {
    pub body: Body,
}

/// Body of a message
///
/// The structured fields (`dictionary`, `table`, `actions`) and
/// `free_markdown` are two exclusive content modes: as soon as
/// `free_markdown` is non-empty the structured fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Body {
    /// Name of the recipient, used after the greeting
    pub name: String,
    /// Greeting word ("Hi" when empty)
    pub greeting: String,
    /// Heading used verbatim instead of greeting and name
    pub title: String,
    /// Paragraphs shown before the content
    pub intros: Vec<String>,
    /// Key/value lines
    pub dictionary: Vec<Entry>,
    /// Tabular content
    pub table: Table,
    /// Calls to action
    pub actions: Vec<Action>,
    /// Paragraphs shown after the content
    pub outros: Vec<String>,
    /// Closing line ("Yours truly" when empty)
    pub signature: String,
    /// Free-form markdown replacing the structured content
    pub free_markdown: String,
    /// QR code image (URL or data URL), HTML output only
    pub qr_code: String,
    /// Theme-specific values, exposed to skeletons as `body.extra`
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// A single key/value pair
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub key: String,
    pub value: String,
}

impl Entry {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// A table of entries, one inner vector per row
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Table {
    pub data: Vec<Vec<Entry>>,
    pub columns: Columns,
}

impl Table {
    /// Column keys, in the order given by the first row
    pub fn keys(&self) -> Vec<&str> {
        self.data
            .first()
            .map(|row| row.iter().map(|e| e.key.as_str()).collect())
            .unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Per-column display hints, keyed by column key
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Columns {
    /// HTML width hints such as "20%" (ignored by the plaintext output)
    pub custom_width: BTreeMap<String, String>,
    /// Alignment of data cells
    pub custom_alignment: BTreeMap<String, Alignment>,
}

impl Columns {
    pub fn alignment(&self, key: &str) -> Alignment {
        self.custom_alignment.get(key).copied().unwrap_or_default()
    }

    pub fn width(&self, key: &str) -> Option<&str> {
        self.custom_width.get(key).map(String::as_str)
    }
}

/// Horizontal alignment of table data cells
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    Right,
}

impl Alignment {
    pub fn as_str(self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Right => "right",
        }
    }
}

// ============================================================================
// Actions
// ============================================================================

/// A call to action: instructions followed by a button or an invite code
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Action {
    pub instructions: String,
    pub button: Option<Button>,
    pub invite_code: Option<String>,
}

/// A clickable button
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Button {
    pub text: String,
    pub link: String,
    pub color: String,
    pub text_color: String,
}

/// The one call to action an action renders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallToAction<'a> {
    InviteCode(&'a str),
    Button(&'a Button),
}

impl Action {
    /// Primary call to action: the invite code wins over the button
    pub fn call_to_action(&self) -> Option<CallToAction<'_>> {
        if let Some(code) = self.invite_code.as_deref().filter(|c| !c.is_empty()) {
            return Some(CallToAction::InviteCode(code));
        }
        self.button
            .as_ref()
            .filter(|b| !b.text.is_empty() || !b.link.is_empty())
            .map(CallToAction::Button)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_keys_from_first_row() {
        let table = Table {
            data: vec![
                vec![Entry::new("Item", "Golang"), Entry::new("Price", "$10.99")],
                vec![Entry::new("Item", "Hermes"), Entry::new("Price", "$1.99")],
            ],
            columns: Columns::default(),
        };
        assert_eq!(table.keys(), vec!["Item", "Price"]);
        assert!(Table::default().keys().is_empty());
    }

    #[test]
    fn test_column_hints() {
        let mut columns = Columns::default();
        columns
            .custom_alignment
            .insert("Price".to_string(), Alignment::Right);
        columns
            .custom_width
            .insert("Item".to_string(), "20%".to_string());

        assert_eq!(columns.alignment("Price"), Alignment::Right);
        assert_eq!(columns.alignment("Item"), Alignment::Left);
        assert_eq!(columns.width("Item"), Some("20%"));
        assert_eq!(columns.width("Price"), None);
    }

    #[test]
    fn test_invite_code_wins_over_button() {
        let action = Action {
            instructions: "Here is your invite code:".to_string(),
            button: Some(Button {
                text: "Join".to_string(),
                link: "https://example.com/join".to_string(),
                ..Button::default()
            }),
            invite_code: Some("123456".to_string()),
        };
        assert_eq!(
            action.call_to_action(),
            Some(CallToAction::InviteCode("123456"))
        );
    }

    #[test]
    fn test_empty_button_is_no_call_to_action() {
        let action = Action {
            instructions: "Nothing to click".to_string(),
            button: Some(Button::default()),
            invite_code: Some(String::new()),
        };
        assert_eq!(action.call_to_action(), None);
    }

    #[test]
    fn test_message_from_toml() {
        let message: Message = toml::from_str(
            r##"
            [body]
            name = "Jon Snow"
            intros = ["Welcome!"]

            [[body.dictionary]]
            key = "Firstname"
            value = "Jon"

            [body.table.columns.custom_alignment]
            Price = "right"

            [[body.actions]]
            instructions = "Click here:"
            button = { text = "Confirm", link = "https://example.com", color = "#22BC66" }
            "##,
        )
        .unwrap();

        assert_eq!(message.body.name, "Jon Snow");
        assert_eq!(message.body.dictionary[0], Entry::new("Firstname", "Jon"));
        assert_eq!(
            message.body.table.columns.alignment("Price"),
            Alignment::Right
        );
        let button = message.body.actions[0].button.as_ref().unwrap();
        assert_eq!(button.color, "#22BC66");
        assert!(button.text_color.is_empty());
    }
}
