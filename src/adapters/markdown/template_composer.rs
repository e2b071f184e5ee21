//! Template-based markdown composer adapter.
//!
//! Composes the canonical README markdown from document state using a fixed
//! layout. This is the primary implementation of the MarkdownComposer port.

use crate::domain::readme::ReadmeDocument;
use crate::ports::MarkdownComposer;

/// Template-based implementation of MarkdownComposer.
///
/// The layout is fixed: title, description, optional media embed, then each
/// section's content in document order. Section content is emitted verbatim;
/// the composer never adds headings of its own, so a section's heading lives
/// in its content (as the catalog seeds do).
#[derive(Debug, Clone, Default)]
pub struct TemplateMarkdownComposer {
    // Configuration could be added here for customization
}

impl TemplateMarkdownComposer {
    /// Creates a new template composer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Composes the title and description header.
    fn compose_header(&self, document: &ReadmeDocument) -> String {
        let mut header = String::new();
        header.push_str(&format!("# {}\n\n", document.project_name()));
        header.push_str(&format!("{}\n\n", document.description()));
        header
    }

    /// Composes the media embed, when one is attached.
    fn compose_media(&self, document: &ReadmeDocument) -> String {
        match document.attached_media() {
            Some(media) => format!("![{}]({})\n\n", media.file_name(), media.file_url()),
            None => String::new(),
        }
    }

    /// Composes the section bodies in document order.
    fn compose_sections(&self, document: &ReadmeDocument) -> String {
        let mut body = String::new();
        for section in document.sections() {
            body.push_str(&format!("{}\n\n", section.content()));
        }
        body
    }
}

impl MarkdownComposer for TemplateMarkdownComposer {
    fn compose(&self, document: &ReadmeDocument) -> String {
        let mut markdown = String::new();

        markdown.push_str(&self.compose_header(document));
        markdown.push_str(&self.compose_media(document));
        markdown.push_str(&self.compose_sections(document));

        markdown
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════
