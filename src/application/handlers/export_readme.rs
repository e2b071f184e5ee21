//! ExportReadmeHandler - Produces the downloadable README artifact.
//!
//! Composes the canonical markdown from current document state and wraps it
//! with the fixed artifact metadata. Pure read path: the store is never
//! mutated, and identical state always yields an identical artifact.

use std::sync::Arc;

use crate::domain::readme::ReadmeStore;
use crate::ports::{ExportedReadme, MarkdownComposer};

/// Handler for exporting the README.
pub struct ExportReadmeHandler {
    store: Arc<ReadmeStore>,
    composer: Arc<dyn MarkdownComposer>,
}

impl ExportReadmeHandler {
    pub fn new(store: Arc<ReadmeStore>, composer: Arc<dyn MarkdownComposer>) -> Self {
        Self { store, composer }
    }

    pub fn handle(&self) -> ExportedReadme {
        let document = self.store.snapshot();
        let markdown = self.composer.compose(&document);
        ExportedReadme::from_markdown(markdown)
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════
