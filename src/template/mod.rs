//! Theme skeleton expansion
//!
//! Skeletons are Handlebars templates rendered against the serialized
//! message context. Both registries run in strict mode, so a placeholder
//! naming something the context does not hold fails the render instead of
//! expanding to nothing. `null` values are present and render as empty.
//!
//! The HTML skeleton escapes `{{ value }}` output; the plaintext skeleton
//! never escapes.

use handlebars::Handlebars;
use serde::Serialize;

use crate::error::{MissiveError, Result};
use crate::theme::Theme;

const SKELETON: &str = "skeleton";

/// The two compiled skeletons of a theme
#[derive(Debug)]
pub struct Skeletons {
    theme: Theme,
    html: Handlebars<'static>,
    plain_text: Handlebars<'static>,
}

impl Skeletons {
    /// Compile both skeletons of `theme`
    pub fn compile(theme: Theme) -> Result<Self> {
        let html = registry(&theme, Kind::Html)?;
        let plain_text = registry(&theme, Kind::PlainText)?;
        Ok(Self {
            theme,
            html,
            plain_text,
        })
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn render_html<T: Serialize>(&self, context: &T) -> Result<String> {
        self.html
            .render(SKELETON, context)
            .map_err(|e| template_error(&self.theme, Kind::Html, e))
    }

    pub fn render_plain_text<T: Serialize>(&self, context: &T) -> Result<String> {
        self.plain_text
            .render(SKELETON, context)
            .map_err(|e| template_error(&self.theme, Kind::PlainText, e))
    }
}

#[derive(Debug, Clone, Copy)]
enum Kind {
    Html,
    PlainText,
}

impl Kind {
    fn label(self) -> &'static str {
        match self {
            Kind::Html => "HTML",
            Kind::PlainText => "plaintext",
        }
    }
}

fn registry(theme: &Theme, kind: Kind) -> Result<Handlebars<'static>> {
    let mut handlebars = Handlebars::new();
    handlebars.set_strict_mode(true);

    let source = match kind {
        Kind::Html => {
            handlebars.register_escape_fn(escape_html);
            theme.html_template()
        }
        Kind::PlainText => {
            handlebars.register_escape_fn(handlebars::no_escape);
            theme.plain_text_template()
        }
    };

    handlebars
        .register_template_string(SKELETON, source)
        .map_err(|e| template_error(theme, kind, e))?;
    Ok(handlebars)
}

fn template_error(theme: &Theme, kind: Kind, err: impl std::fmt::Display) -> MissiveError {
    MissiveError::Template {
        theme: theme.name().to_string(),
        message: format!("{} skeleton, {}", kind.label(), err),
    }
}

/// Escape text for HTML content and attribute values
pub fn escape_html(text: &str) -> String {
    htmlescape::encode_minimal(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn skeletons(html: &str, plain_text: &str) -> Skeletons {
        Skeletons::compile(Theme::new("test", html, plain_text)).unwrap()
    }

    #[test]
    fn test_builtin_skeletons_compile() {
        for theme in Theme::builtins() {
            let name = theme.name().to_string();
            let compiled = Skeletons::compile(theme).unwrap();
            assert_eq!(compiled.theme().name(), name);
        }
    }

    #[test]
    fn test_html_values_escaped() {
        let out = skeletons("<p>{{ name }}</p>", "")
            .render_html(&json!({"name": "Tom & <Jerry>"}))
            .unwrap();
        assert_eq!(out, "<p>Tom &amp; &lt;Jerry&gt;</p>");
    }

    #[test]
    fn test_triple_braces_not_escaped() {
        let out = skeletons("{{{ html }}}", "")
            .render_html(&json!({"html": "<em>hi</em>"}))
            .unwrap();
        assert_eq!(out, "<em>hi</em>");
    }

    #[test]
    fn test_plain_text_never_escaped() {
        let out = skeletons("", "{{ name }}")
            .render_plain_text(&json!({"name": "a < b & \"c\""}))
            .unwrap();
        assert_eq!(out, "a < b & \"c\"");
    }

    #[test]
    fn test_sections_and_lists() {
        let context = json!({"title": null, "items": ["one", "two"], "button": {"link": "https://x"}});
        let out = skeletons(
            "",
            "{{#if title}}T{{/if}}{{#each items}}[{{ this }}]{{/each}}{{#if button}}{{ button.link }}{{/if}}",
        )
        .render_plain_text(&context)
        .unwrap();
        assert_eq!(out, "[one][two]https://x");
    }

    #[test]
    fn test_null_value_is_empty() {
        let out = skeletons("", "[{{ logo }}]")
            .render_plain_text(&json!({"logo": null}))
            .unwrap();
        assert_eq!(out, "[]");
    }

    #[test]
    fn test_unknown_placeholder_fails() {
        let err = skeletons("", "Hello\n{{ body.nope }}")
            .render_plain_text(&json!({"body": {"name": "x"}}))
            .unwrap_err();

        match err {
            MissiveError::Template { theme, message } => {
                assert_eq!(theme, "test");
                assert!(message.starts_with("plaintext skeleton, "), "{}", message);
                assert!(message.contains("body.nope"), "{}", message);
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_syntax_error_reported_at_compile() {
        let err = Skeletons::compile(Theme::new("broken", "{{#if x}}a{{/each}}", "")).unwrap_err();
        assert!(err
            .to_string()
            .starts_with("Template error in theme 'broken': HTML skeleton, "));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">&</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&amp;&lt;/a&gt;"
        );
    }
}
