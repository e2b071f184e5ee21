//! Markdown Adapters.
//!
//! Composition and rendering of README markdown.
//!
//! ## Available Adapters
//!
//! - `TemplateMarkdownComposer` - Canonical README layout from document state
//! - `HtmlPreviewRenderer` - Markdown to HTML fragment for preview panes

mod html_preview;
mod template_composer;

pub use html_preview::HtmlPreviewRenderer;
pub use template_composer::TemplateMarkdownComposer;
