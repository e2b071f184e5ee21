//! ReadmeDocument aggregate - The in-memory README data model.
//!
//! A single document instance exists for the lifetime of an editing session.
//! All mutations are total: they cannot fail for any input shape, and a
//! lookup miss is reported as a boolean rather than an error.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::SectionId;

use super::{DocumentPatch, MediaReference, Section, SectionTemplate};

/// The README document aggregate root.
///
/// Holds project identity, description, an optional attached-media pair,
/// and an ordered sequence of sections. Insertion order is serialization
/// order; no reordering operation exists. Section ids are unique within
/// the sequence and never reused.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadmeDocument {
    // Identity and prose
    project_name: String,
    description: String,

    // Optional media embed, both fields present or the whole pair absent
    attached_media: Option<MediaReference>,

    // Ordered content blocks
    sections: Vec<Section>,
}

impl ReadmeDocument {
    // ════════════════════════════════════════════════════════════════════════════════
    // Construction
    // ════════════════════════════════════════════════════════════════════════════════

    /// Creates the all-defaults document: empty name and description, no
    /// media, no sections. Equivalent to `ReadmeDocument::default()`.
    pub fn new() -> Self {
        Self::default()
    }

    // ════════════════════════════════════════════════════════════════════════════════
    // Accessors
    // ════════════════════════════════════════════════════════════════════════════════

    /// Returns the project name.
    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    /// Returns the description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the attached media pair, if any.
    pub fn attached_media(&self) -> Option<&MediaReference> {
        self.attached_media.as_ref()
    }

    /// Returns the sections in insertion order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Returns the section with the given id, if present.
    pub fn section(&self, id: SectionId) -> Option<&Section> {
        self.sections.iter().find(|s| s.id() == id)
    }

    /// Returns true if a section with the given id exists.
    pub fn has_section(&self, id: SectionId) -> bool {
        self.section(id).is_some()
    }

    // ════════════════════════════════════════════════════════════════════════════════
    // Mutations
    // ════════════════════════════════════════════════════════════════════════════════

    /// Shallow-merges a partial update into the top-level fields.
    ///
    /// Fields the patch does not carry are left unchanged. Sections are
    /// never touched by a patch.
    pub fn apply_patch(&mut self, patch: DocumentPatch) {
        if let Some(project_name) = patch.project_name {
            self.project_name = project_name;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(attached_media) = patch.attached_media {
            self.attached_media = attached_media;
        }
    }

    /// Appends a section built from a template to the end of the sequence
    /// and returns its freshly assigned id.
    pub fn add_section(&mut self, template: SectionTemplate) -> SectionId {
        let section = Section::from_template(&template);
        let id = section.id();
        self.sections.push(section);
        id
    }

    /// Replaces the content of the section matching `id`.
    ///
    /// Returns true if a section was updated; a miss is a no-op and never
    /// creates a section.
    pub fn update_section_content(&mut self, id: SectionId, content: impl Into<String>) -> bool {
        match self.sections.iter_mut().find(|s| s.id() == id) {
            Some(section) => {
                section.set_content(content);
                true
            }
            None => false,
        }
    }

    /// Removes the section matching `id`, preserving the relative order of
    /// the remainder. Returns true if a section was removed.
    pub fn remove_section(&mut self, id: SectionId) -> bool {
        let before = self.sections.len();
        self.sections.retain(|s| s.id() != id);
        self.sections.len() != before
    }

    /// Replaces the document with the all-defaults initial value. A full
    /// replacement, not a merge.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    fn test_media() -> MediaReference {
        MediaReference::new("screenshot.png", "https://example.com/screenshot.png").unwrap()
    }

    // ───────────────────────────────────────────────────────────────
    // Default State Tests
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn default_document_is_all_empty() {
        let doc = ReadmeDocument::new();

        assert_eq!(doc.project_name(), "");
        assert_eq!(doc.description(), "");
        assert!(doc.attached_media().is_none());
        assert!(doc.sections().is_empty());
    }

    // ───────────────────────────────────────────────────────────────
    // Patch Tests
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn patch_merges_only_carried_fields() {
        let mut doc = ReadmeDocument::new();
        doc.apply_patch(
            DocumentPatch::new()
                .with_project_name("Foo")
                .with_media(test_media()),
        );
        doc.add_section(SectionTemplate::Features);
        let sections_before = doc.sections().to_vec();

        doc.apply_patch(DocumentPatch::new().with_description("d"));

        assert_eq!(doc.description(), "d");
        assert_eq!(doc.project_name(), "Foo");
        assert_eq!(doc.attached_media(), Some(&test_media()));
        assert_eq!(doc.sections(), sections_before.as_slice());
    }

    #[test]
    fn empty_patch_leaves_document_identical() {
        let mut doc = ReadmeDocument::new();
        doc.apply_patch(DocumentPatch::new().with_project_name("Foo"));
        let before = doc.clone();

        doc.apply_patch(DocumentPatch::new());

        assert_eq!(doc, before);
    }

    #[test]
    fn patch_can_clear_media_in_one_step() {
        let mut doc = ReadmeDocument::new();
        doc.apply_patch(DocumentPatch::new().with_media(test_media()));
        assert!(doc.attached_media().is_some());

        doc.apply_patch(DocumentPatch::new().clearing_media());

        assert!(doc.attached_media().is_none());
    }

    // ───────────────────────────────────────────────────────────────
    // Section Lifecycle Tests
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn add_section_appends_in_call_order() {
        let mut doc = ReadmeDocument::new();

        doc.add_section(SectionTemplate::Features);
        doc.add_section(SectionTemplate::Installation);
        doc.add_section(SectionTemplate::Custom("Roadmap".into()));

        let titles: Vec<&str> = doc.sections().iter().map(|s| s.title()).collect();
        assert_eq!(titles, vec!["Features", "Installation", "Roadmap"]);
    }

    #[test]
    fn add_section_returns_the_id_of_the_appended_section() {
        let mut doc = ReadmeDocument::new();

        let id = doc.add_section(SectionTemplate::Authors);

        assert!(doc.has_section(id));
        assert_eq!(doc.section(id).unwrap().title(), "Authors");
    }

    #[test]
    fn identical_titles_still_get_distinct_ids() {
        let mut doc = ReadmeDocument::new();

        let a = doc.add_section(SectionTemplate::Features);
        let b = doc.add_section(SectionTemplate::Features);

        assert_ne!(a, b);
        assert_eq!(doc.sections().len(), 2);
    }

    #[test]
    fn update_section_content_replaces_matching_section_only() {
        let mut doc = ReadmeDocument::new();
        let first = doc.add_section(SectionTemplate::Features);
        let second = doc.add_section(SectionTemplate::Installation);

        let updated = doc.update_section_content(first, "rewritten");

        assert!(updated);
        assert_eq!(doc.section(first).unwrap().content(), "rewritten");
        assert_eq!(
            doc.section(second).unwrap().content(),
            SectionTemplate::Installation.seed_content()
        );
    }

    #[test]
    fn update_with_unknown_id_is_a_noop() {
        let mut doc = ReadmeDocument::new();
        doc.add_section(SectionTemplate::Features);
        let before = doc.clone();

        let updated = doc.update_section_content(SectionId::new(), "x");

        assert!(!updated);
        assert_eq!(doc, before);
    }

    #[test]
    fn remove_middle_section_preserves_relative_order() {
        let mut doc = ReadmeDocument::new();
        let first = doc.add_section(SectionTemplate::Features);
        let middle = doc.add_section(SectionTemplate::Installation);
        let last = doc.add_section(SectionTemplate::Authors);

        let removed = doc.remove_section(middle);

        assert!(removed);
        let ids: Vec<SectionId> = doc.sections().iter().map(|s| s.id()).collect();
        assert_eq!(ids, vec![first, last]);
    }

    #[test]
    fn remove_with_unknown_id_is_a_noop() {
        let mut doc = ReadmeDocument::new();
        doc.add_section(SectionTemplate::Features);
        let before = doc.clone();

        let removed = doc.remove_section(SectionId::new());

        assert!(!removed);
        assert_eq!(doc, before);
    }

    // ───────────────────────────────────────────────────────────────
    // Reset Tests
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn reset_restores_the_all_defaults_document() {
        let mut doc = ReadmeDocument::new();
        doc.apply_patch(
            DocumentPatch::new()
                .with_project_name("Foo")
                .with_description("bar")
                .with_media(test_media()),
        );
        doc.add_section(SectionTemplate::Contributing);

        doc.reset();

        assert_eq!(doc, ReadmeDocument::default());
    }
}
