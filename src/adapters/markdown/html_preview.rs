//! HTML preview renderer.
//!
//! Renders composed README markdown to an HTML fragment using pulldown-cmark
//! (pure Rust, no external dependencies). The fragment is suitable for
//! embedding in a preview pane; it is not a complete HTML document.

use pulldown_cmark::{html, Options, Parser};

/// Markdown-to-HTML preview renderer.
///
/// Rendering is pure and deterministic.
#[derive(Debug, Clone)]
pub struct HtmlPreviewRenderer {
    /// Parser extensions enabled for the preview.
    options: Options,
}

impl HtmlPreviewRenderer {
    /// Creates a renderer with the default extension set.
    ///
    /// Smart punctuation stays off so shell snippets in installation
    /// sections keep their literal quoting.
    pub fn new() -> Self {
        Self {
            options: Options::ENABLE_TABLES
                | Options::ENABLE_FOOTNOTES
                | Options::ENABLE_STRIKETHROUGH
                | Options::ENABLE_TASKLISTS,
        }
    }

    /// Renders markdown to an HTML fragment.
    pub fn render(&self, markdown: &str) -> String {
        let parser = Parser::new_ext(markdown, self.options);

        let mut fragment = String::new();
        html::push_html(&mut fragment, parser);
        fragment
    }
}

impl Default for HtmlPreviewRenderer {
    fn default() -> Self {
        Self::new()
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_converts_basic_markdown() {
        let renderer = HtmlPreviewRenderer::new();
        let html = renderer.render("# my-project\n\nHello, world!");

        assert!(html.contains("<h1>my-project</h1>"));
        assert!(html.contains("<p>Hello, world!</p>"));
    }

    #[test]
    fn render_produces_a_fragment_not_a_document() {
        let renderer = HtmlPreviewRenderer::new();
        let html = renderer.render("# Title");

        assert!(!html.contains("<!DOCTYPE html>"));
        assert!(!html.contains("<body>"));
    }

    #[test]
    fn render_converts_fenced_code_blocks() {
        let renderer = HtmlPreviewRenderer::new();
        let html = renderer.render("## Installation\n\n```bash\nnpm install my-project\n```");

        assert!(html.contains("<pre><code class=\"language-bash\">"));
        assert!(html.contains("npm install my-project"));
    }

    #[test]
    fn render_converts_tables() {
        let renderer = HtmlPreviewRenderer::new();
        let html = renderer.render("| A | B |\n|---|---|\n| 1 | 2 |");

        assert!(html.contains("<table>"));
        assert!(html.contains("<th>A</th>"));
        assert!(html.contains("<td>1</td>"));
    }

    #[test]
    fn render_converts_strikethrough_and_task_lists() {
        let renderer = HtmlPreviewRenderer::new();
        let html = renderer.render("- [x] ~~old name~~ new name");

        assert!(html.contains("type=\"checkbox\""));
        assert!(html.contains("<del>old name</del>"));
    }

    #[test]
    fn render_keeps_image_embeds() {
        let renderer = HtmlPreviewRenderer::new();
        let html = renderer.render("![logo.png](https://cdn.example.com/logo.png)");

        assert!(html.contains("<img src=\"https://cdn.example.com/logo.png\" alt=\"logo.png\""));
    }
}
