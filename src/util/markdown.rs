//! Markdown rendering for AI-generated report text.

#[cfg(test)]
#[path = "markdown_test.rs"]
mod markdown_test;

use pulldown_cmark::{Options, Parser, html};

/// Render report markdown to an HTML fragment for `inner_html`.
pub fn render_markdown(source: &str) -> String {
    let options = Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH;
    let parser = Parser::new_ext(source, options);
    let mut rendered = String::with_capacity(source.len() * 2);
    html::push_html(&mut rendered, parser);
    rendered
}
