//! Render pipeline
//!
//! Turns a message into an HTML document and a plaintext fallback using the
//! skeletons of the active theme. Each call works on its own merged copy of
//! the message, so one engine can serve many threads.

mod context;

use serde_json::Value;

use crate::config::Config;
use crate::defaults;
use crate::error::{MissiveError, Result};
use crate::inline::{CssInliner, StyleSheetInliner};
use crate::markup::{CommonMark, Fragments, MarkupConverter};
use crate::models::{Content, MergedBody, Message, Product, TextDirection};
use crate::table::DEFAULT_WRAP_WIDTH;
use crate::template::Skeletons;
use crate::theme::{Theme, ThemeRegistry};

use context::Context;

/// Stands in for the converted markdown while the plaintext skeleton is
/// expanded and normalized
const FREE_FORM_SLOT: &str = "\u{FFFC}";

/// Both renderings of one message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub html: String,
    pub plain_text: String,
}

/// Message renderer
pub struct Engine {
    skeletons: Skeletons,
    product: Product,
    text_direction: TextDirection,
    css_inlining: bool,
    wrap_width: usize,
    markup: Box<dyn MarkupConverter + Send + Sync>,
    inliner: Box<dyn CssInliner + Send + Sync>,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(Product::default())
    }
}

/// Message with defaults applied and markdown converted
struct Prepared {
    product: Product,
    body: MergedBody,
    free_form: Option<Fragments>,
}

impl Engine {
    /// Engine using the built-in default theme
    pub fn new(product: Product) -> Self {
        let skeletons =
            Skeletons::compile(Theme::default()).expect("built-in skeletons should be valid");
        Self {
            skeletons,
            product,
            text_direction: TextDirection::default(),
            css_inlining: true,
            wrap_width: DEFAULT_WRAP_WIDTH,
            markup: Box::new(CommonMark),
            inliner: Box::new(StyleSheetInliner),
        }
    }

    /// Build an engine from configuration, loading `themes_dir` if set
    pub fn from_config(config: &Config) -> Result<Self> {
        let registry = ThemeRegistry::from_config(config)?;
        Self::from_config_with_themes(config, &registry)
    }

    /// Build an engine from configuration, picking the theme from `registry`
    pub fn from_config_with_themes(config: &Config, registry: &ThemeRegistry) -> Result<Self> {
        if config.table.wrap_width == 0 {
            return Err(MissiveError::Config(
                "table.wrap_width must be greater than zero".to_string(),
            ));
        }

        Ok(Self::new(config.product.clone())
            .with_theme(registry.resolve(&config.theme))?
            .with_text_direction(&config.text_direction)
            .with_css_inlining(!config.disable_css_inlining)
            .with_wrap_width(config.table.wrap_width))
    }

    /// Switch to `theme`, failing if either skeleton does not compile
    pub fn with_theme(mut self, theme: Theme) -> Result<Self> {
        self.skeletons = Skeletons::compile(theme)?;
        Ok(self)
    }

    /// Set the writing direction; anything but "rtl" means left-to-right
    pub fn with_text_direction(mut self, direction: &str) -> Self {
        self.text_direction = TextDirection::normalize(direction);
        self
    }

    pub fn with_css_inlining(mut self, enabled: bool) -> Self {
        self.css_inlining = enabled;
        self
    }

    /// Longest plaintext table cell line before wrapping
    pub fn with_wrap_width(mut self, wrap_width: usize) -> Self {
        self.wrap_width = wrap_width.max(1);
        self
    }

    pub fn with_markup_converter(
        mut self,
        converter: impl MarkupConverter + Send + Sync + 'static,
    ) -> Self {
        self.markup = Box::new(converter);
        self
    }

    pub fn with_css_inliner(mut self, inliner: impl CssInliner + Send + Sync + 'static) -> Self {
        self.inliner = Box::new(inliner);
        self
    }

    /// The active theme
    pub fn theme(&self) -> &Theme {
        self.skeletons.theme()
    }

    pub fn text_direction(&self) -> TextDirection {
        self.text_direction
    }

    /// Render both outputs of a message
    pub fn render(&self, message: &Message) -> Result<Rendered> {
        let prepared = self.prepare(message)?;
        let context = self.context(&prepared)?;

        Ok(Rendered {
            html: self.html_pass(&context)?,
            plain_text: self.plain_text_pass(&context, prepared.free_form.as_ref())?,
        })
    }

    /// Render only the HTML document
    pub fn generate_html(&self, message: &Message) -> Result<String> {
        let prepared = self.prepare(message)?;
        let context = self.context(&prepared)?;
        self.html_pass(&context)
    }

    /// Render only the plaintext fallback
    pub fn generate_plain_text(&self, message: &Message) -> Result<String> {
        let prepared = self.prepare(message)?;
        let context = self.context(&prepared)?;
        self.plain_text_pass(&context, prepared.free_form.as_ref())
    }

    fn prepare(&self, message: &Message) -> Result<Prepared> {
        let body = defaults::merge(&message.body);
        log::debug!(
            "Rendering {} message with theme '{}'",
            body.content.mode(),
            self.theme().name()
        );

        let free_form = match &body.content {
            Content::FreeForm { markdown } => Some(self.markup.convert(markdown, self.wrap_width)?),
            Content::Structured { .. } => None,
        };

        Ok(Prepared {
            product: defaults::merge_product(&self.product),
            body,
            free_form,
        })
    }

    fn context(&self, prepared: &Prepared) -> Result<Value> {
        Context::new(
            &prepared.product,
            self.text_direction,
            &prepared.body,
            prepared.free_form.as_ref(),
            self.wrap_width,
        )?
        .to_value()
    }

    fn html_pass(&self, context: &Value) -> Result<String> {
        let html = self.skeletons.render_html(context)?;

        if !self.css_inlining {
            log::debug!("CSS inlining disabled, keeping style blocks as is");
            return Ok(html);
        }
        self.inliner.inline(&html)
    }

    /// Expand and normalize the plaintext skeleton
    ///
    /// Converted markdown is spliced in after normalization so that code
    /// blocks keep their blank lines and indentation.
    fn plain_text_pass(&self, context: &Value, free_form: Option<&Fragments>) -> Result<String> {
        let Some(fragments) = free_form else {
            let text = self.skeletons.render_plain_text(context)?;
            return Ok(normalize_plain_text(&text));
        };

        let mut context = context.clone();
        if let Some(slot) = context.pointer_mut("/body/free_form/text") {
            *slot = Value::String(FREE_FORM_SLOT.to_string());
        }
        let text = normalize_plain_text(&self.skeletons.render_plain_text(&context)?);
        Ok(text.replace(FREE_FORM_SLOT, fragments.plain_text.trim_end()))
    }
}

/// Trim trailing whitespace on every line and collapse blank-line runs
fn normalize_plain_text(text: &str) -> String {
    let mut lines: Vec<&str> = Vec::new();
    for line in text.lines().map(str::trim_end) {
        let blank = line.is_empty();
        if blank && lines.last().is_none_or(|last| last.is_empty()) {
            continue;
        }
        lines.push(line);
    }
    while lines.last().is_some_and(|last| last.is_empty()) {
        lines.pop();
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
