//! SaveReadmeHandler - Composes and persists the README artifact.
//!
//! Same composition path as export, followed by a write through the
//! ReadmeWriter port. Write failures never touch the document.

use std::sync::Arc;

use crate::domain::readme::ReadmeStore;
use crate::ports::{ExportedReadme, MarkdownComposer, ReadmeWriter, StoredReadme, WriteError};

/// Handler for saving the README to storage.
pub struct SaveReadmeHandler {
    store: Arc<ReadmeStore>,
    composer: Arc<dyn MarkdownComposer>,
    writer: Arc<dyn ReadmeWriter>,
}

impl SaveReadmeHandler {
    pub fn new(
        store: Arc<ReadmeStore>,
        composer: Arc<dyn MarkdownComposer>,
        writer: Arc<dyn ReadmeWriter>,
    ) -> Self {
        Self {
            store,
            composer,
            writer,
        }
    }

    pub async fn handle(&self) -> Result<StoredReadme, WriteError> {
        // 1. Compose from current state
        let document = self.store.snapshot();
        let markdown = self.composer.compose(&document);

        // 2. Persist the artifact
        let artifact = ExportedReadme::from_markdown(markdown);
        self.writer.write(&artifact).await
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════
