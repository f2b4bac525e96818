//! CSS inlining post-pass for the HTML output
//!
//! Many mail clients drop `<style>` blocks, so rules are copied into the
//! `style` attribute of the elements they match. Only simple selectors are
//! handled (`tag`, `.class`, `tag.class` and comma lists of those); at-rules
//! such as `@media` and anything more complex stay in the style block.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::error::Result;

/// Moves stylesheet rules into inline `style` attributes
pub trait CssInliner {
    fn inline(&self, html: &str) -> Result<String>;
}

/// Default inliner working from the document's own `<style>` blocks
#[derive(Debug, Clone, Copy, Default)]
pub struct StyleSheetInliner;

/// Elements that never receive inline styles
const SKIPPED_TAGS: &[&str] = &["html", "head", "style", "meta", "title", "link", "script"];

static STYLE_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<style\b[^>]*>(.*?)</style>").expect("valid regex"));
static CSS_COMMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)/\*.*?\*/").expect("valid regex"));
static OPEN_TAG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"<([a-zA-Z][a-zA-Z0-9:-]*)((?:\s+[^\s"'>/=]+(?:\s*=\s*(?:"[^"]*"|'[^']*'|[^\s"'=<>`]+))?)*)\s*(/?)>"#,
    )
    .expect("valid regex")
});
static CLASS_ATTR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)\sclass\s*=\s*(?:"([^"]*)"|'([^']*)')"#).expect("valid regex")
});
static STYLE_ATTR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)\sstyle\s*=\s*(?:"([^"]*)"|'([^']*)')"#).expect("valid regex")
});

#[derive(Debug, Clone, PartialEq, Eq)]
struct Selector {
    tag: Option<String>,
    class: Option<String>,
}

impl Selector {
    fn parse(text: &str) -> Option<Self> {
        let (tag, class) = match text.split_once('.') {
            Some((tag, class)) => (tag, Some(class)),
            None => (text, None),
        };

        let tag_ok = tag.chars().all(|c| c.is_ascii_alphanumeric());
        let class_ok = class.is_none_or(|c| {
            !c.is_empty()
                && c
                    .chars()
                    .all(|ch| ch.is_ascii_alphanumeric() || ch == '-' || ch == '_')
        });
        if !tag_ok || !class_ok || (tag.is_empty() && class.is_none()) {
            return None;
        }

        Some(Self {
            tag: (!tag.is_empty()).then(|| tag.to_ascii_lowercase()),
            class: class.map(str::to_string),
        })
    }

    fn specificity(&self) -> u8 {
        u8::from(self.tag.is_some()) + 10 * u8::from(self.class.is_some())
    }

    fn matches(&self, tag: &str, classes: &[&str]) -> bool {
        self.tag.as_deref().is_none_or(|t| t.eq_ignore_ascii_case(tag))
            && self.class.as_deref().is_none_or(|c| classes.contains(&c))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Rule {
    selector: Selector,
    declarations: Vec<String>,
    order: usize,
}

fn declarations(block: &str) -> Vec<String> {
    block
        .split(';')
        .map(|d| d.trim().replace('"', "'"))
        .filter(|d| !d.is_empty())
        .collect()
}

fn parse_rules(css: &str, rules: &mut Vec<Rule>) {
    let mut rest = css;

    while let Some(open) = rest.find('{') {
        let selector = rest[..open].trim();

        if selector.starts_with('@') {
            // Skip the whole at-rule, nested blocks included
            let mut depth = 0;
            let mut end = rest.len();
            for (index, c) in rest[open..].char_indices() {
                match c {
                    '{' => depth += 1,
                    '}' => {
                        depth -= 1;
                        if depth == 0 {
                            end = open + index + 1;
                            break;
                        }
                    }
                    _ => {}
                }
            }
            rest = &rest[end..];
            continue;
        }

        let Some(close) = rest[open..].find('}').map(|i| open + i) else {
            break;
        };
        let decls = declarations(&rest[open + 1..close]);

        for part in selector.split(',') {
            if let Some(selector) = Selector::parse(part.trim()) {
                let order = rules.len();
                rules.push(Rule {
                    selector,
                    declarations: decls.clone(),
                    order,
                });
            }
        }
        rest = &rest[close + 1..];
    }
}

impl CssInliner for StyleSheetInliner {
    fn inline(&self, html: &str) -> Result<String> {
        let mut rules = Vec::new();
        for captures in STYLE_BLOCK.captures_iter(html) {
            let css = CSS_COMMENT.replace_all(&captures[1], "");
            parse_rules(&css, &mut rules);
        }
        if rules.is_empty() {
            return Ok(html.to_string());
        }
        rules.sort_by_key(|rule| (rule.selector.specificity(), rule.order));

        let inlined = OPEN_TAG.replace_all(html, |caps: &Captures| {
            let tag = &caps[1];
            let attrs = &caps[2];
            if SKIPPED_TAGS.iter().any(|t| t.eq_ignore_ascii_case(tag)) {
                return caps[0].to_string();
            }

            let classes: Vec<&str> = CLASS_ATTR
                .captures(attrs)
                .and_then(|c| c.get(1).or_else(|| c.get(2)))
                .map(|m| m.as_str().split_whitespace().collect())
                .unwrap_or_default();

            let mut styles: Vec<String> = rules
                .iter()
                .filter(|rule| rule.selector.matches(tag, &classes))
                .flat_map(|rule| rule.declarations.iter().cloned())
                .collect();
            if styles.is_empty() {
                return caps[0].to_string();
            }

            if let Some(existing) = STYLE_ATTR
                .captures(attrs)
                .and_then(|c| c.get(1).or_else(|| c.get(2)))
            {
                styles.extend(declarations(existing.as_str()));
            }

            let attrs = STYLE_ATTR.replace_all(attrs, "");
            let slash = if caps[3].is_empty() { "" } else { " /" };
            format!(
                "<{}{} style=\"{}\"{}>",
                tag,
                attrs,
                styles.join("; "),
                slash
            )
        });

        Ok(inlined.into_owned())
    }
}
