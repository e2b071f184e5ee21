//! ReadmeStore - The single source of truth for the live document.
//!
//! The store is an explicit state holder created by the composition root
//! and handed to every collaborator that needs it; nothing in this crate
//! reaches for ambient global state. Reads hand out immutable value
//! snapshots; mutations lock, compute the next document, and install it
//! as one indivisible step.

use std::sync::Mutex;

use crate::domain::foundation::SectionId;

use super::{DocumentPatch, ReadmeDocument, SectionTemplate};

/// Thread-safe owner of the README document.
///
/// Every operation is total: mutations never fail, and a lookup miss is
/// reported as `false` rather than an error. Snapshots returned by
/// [`ReadmeStore::snapshot`] are detached copies; mutating one has no
/// effect on store state.
///
/// # Example
///
/// ```ignore
/// let store = Arc::new(ReadmeStore::new());
///
/// store.apply_patch(DocumentPatch::new().with_project_name("Foo"));
/// let id = store.add_section(SectionTemplate::Installation);
/// store.update_section_content(id, "## Installation\n\ncargo add foo");
///
/// let snapshot = store.snapshot();
/// assert_eq!(snapshot.project_name(), "Foo");
/// ```
#[derive(Debug, Default)]
pub struct ReadmeStore {
    document: Mutex<ReadmeDocument>,
}

impl ReadmeStore {
    /// Creates a store holding the all-defaults document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded with an existing document.
    pub fn from_document(document: ReadmeDocument) -> Self {
        Self {
            document: Mutex::new(document),
        }
    }

    /// Returns a detached snapshot of the current document.
    pub fn snapshot(&self) -> ReadmeDocument {
        self.document.lock().unwrap().clone()
    }

    /// Returns the current number of sections.
    pub fn section_count(&self) -> usize {
        self.document.lock().unwrap().sections().len()
    }

    /// Shallow-merges a partial update into the document's top-level fields.
    pub fn apply_patch(&self, patch: DocumentPatch) {
        self.document.lock().unwrap().apply_patch(patch);
    }

    /// Appends a template-seeded section and returns its fresh id.
    pub fn add_section(&self, template: SectionTemplate) -> SectionId {
        self.document.lock().unwrap().add_section(template)
    }

    /// Replaces the content of the section matching `id`. Returns true if
    /// a section was updated; unknown ids are a no-op.
    pub fn update_section_content(&self, id: SectionId, content: impl Into<String>) -> bool {
        self.document.lock().unwrap().update_section_content(id, content)
    }

    /// Removes the section matching `id`, preserving the relative order of
    /// the remainder. Returns true if a section was removed.
    pub fn remove_section(&self, id: SectionId) -> bool {
        self.document.lock().unwrap().remove_section(id)
    }

    /// Replaces the document with the all-defaults initial value.
    pub fn reset(&self) {
        self.document.lock().unwrap().reset();
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════
