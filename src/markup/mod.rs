//! Free-form markdown conversion
//!
//! A message in free-form mode carries one markdown block. It is converted
//! once per render into an HTML fragment and a plaintext fragment; tables
//! found in the markdown are laid out by [`crate::table::format`] so they
//! look the same as structured tables in the plaintext output.

mod plain;

use pulldown_cmark::{Event, Options, Parser};

use crate::error::Result;

/// The two renderings of a markdown block
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fragments {
    pub html: String,
    pub plain_text: String,
}

/// Converts free-form markup into HTML and plaintext fragments
pub trait MarkupConverter {
    fn convert(&self, markup: &str, wrap_width: usize) -> Result<Fragments>;
}

/// CommonMark converter with GitHub tables and strikethrough
#[derive(Debug, Clone, Copy, Default)]
pub struct CommonMark;

impl CommonMark {
    fn options() -> Options {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_STRIKETHROUGH);
        options
    }
}

impl MarkupConverter for CommonMark {
    fn convert(&self, markup: &str, wrap_width: usize) -> Result<Fragments> {
        let events: Vec<Event> = Parser::new_ext(markup, Self::options()).collect();

        let mut html = String::with_capacity(markup.len() * 2);
        pulldown_cmark::html::push_html(&mut html, events.iter().cloned());

        let plain_text = plain::render(events, wrap_width)?;

        Ok(Fragments { html, plain_text })
    }
}
