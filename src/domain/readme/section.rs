//! Section entity - A titled block of Markdown content within a document.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::SectionId;

use super::SectionTemplate;

/// A uniquely identified, titled, editable Markdown content block.
///
/// The id is assigned at creation and never changes; the title is set once
/// from the originating template; the content may be rewritten any number
/// of times. Content is self-contained Markdown: when it carries a heading,
/// the heading lives inside the content itself (as the template catalog
/// seeds do), so composition never re-emits the title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    id: SectionId,
    title: String,
    content: String,
}

impl Section {
    // ════════════════════════════════════════════════════════════════════════════════
    // Construction
    // ════════════════════════════════════════════════════════════════════════════════

    /// Creates a section from a catalog template, with a fresh id and the
    /// template's seed content. Custom templates seed empty content.
    pub fn from_template(template: &SectionTemplate) -> Self {
        Self {
            id: SectionId::new(),
            title: template.title().to_string(),
            content: template.seed_content().to_string(),
        }
    }

    // ════════════════════════════════════════════════════════════════════════════════
    // Accessors
    // ════════════════════════════════════════════════════════════════════════════════

    /// Returns the section id.
    pub fn id(&self) -> SectionId {
        self.id
    }

    /// Returns the display title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the Markdown content body.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns true if the content body is empty.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    // ════════════════════════════════════════════════════════════════════════════════
    // Mutations
    // ════════════════════════════════════════════════════════════════════════════════

    /// Replaces the content body wholesale.
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════
