//! Markdown rendering seam for the live preview pane.
//!
//! Renderers are pure: the same source always yields the same output and
//! nothing is cached or persisted. Fenced code blocks are emitted without
//! syntax highlighting.

use pulldown_cmark::{html, Options, Parser};

pub trait MarkdownRenderer {
    type Output;

    fn render(&self, source: &str) -> Self::Output;
}

/// CommonMark to HTML with tables, strikethrough and task lists.
#[derive(Debug, Clone, Copy)]
pub struct HtmlRenderer {
    options: Options,
}

impl HtmlRenderer {
    pub fn new(options: Options) -> Self {
        Self { options }
    }
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_STRIKETHROUGH);
        options.insert(Options::ENABLE_TASKLISTS);
        Self::new(options)
    }
}

impl MarkdownRenderer for HtmlRenderer {
    type Output = String;

    fn render(&self, source: &str) -> String {
        let parser = Parser::new_ext(source, self.options);
        let mut out = String::with_capacity(source.len() * 3 / 2);
        html::push_html(&mut out, parser);
        out
    }
}
