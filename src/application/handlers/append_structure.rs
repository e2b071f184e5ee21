//! AppendStructureHandler - Adds a project-structure section to the document.
//!
//! Scans a project root through the ProjectScanner port and appends the
//! rendered tree as a custom section, fenced so the layout survives markdown
//! rendering. The scan runs before any store mutation; a failed scan leaves
//! the document exactly as it was.

use std::path::PathBuf;
use std::sync::Arc;

use crate::domain::foundation::SectionId;
use crate::domain::readme::{ReadmeStore, SectionTemplate};
use crate::ports::{ProjectScanner, ScanError};

/// Title of the appended section.
const STRUCTURE_SECTION_TITLE: &str = "Auto-Generated Project Structure";

/// Command to append a project-structure section.
#[derive(Debug, Clone)]
pub struct AppendStructureCommand {
    /// Project root to scan.
    pub root: PathBuf,
}

impl AppendStructureCommand {
    /// Creates a command for the given project root.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

/// Result of a successful append.
#[derive(Debug, Clone)]
pub struct AppendStructureResult {
    /// Identity of the appended section.
    pub section_id: SectionId,
    /// The rendered tree, as embedded in the section.
    pub tree: String,
}

/// Handler for appending project structure sections.
pub struct AppendStructureHandler {
    store: Arc<ReadmeStore>,
    scanner: Arc<dyn ProjectScanner>,
}

impl AppendStructureHandler {
    pub fn new(store: Arc<ReadmeStore>, scanner: Arc<dyn ProjectScanner>) -> Self {
        Self { store, scanner }
    }

    pub fn handle(&self, cmd: AppendStructureCommand) -> Result<AppendStructureResult, ScanError> {
        // 1. Scan before touching the store
        let tree = self.scanner.scan_tree(&cmd.root)?;

        // 2. Wrap the tree in a fenced block under the section heading
        let content = format!("## {}\n\n```\n{}```", STRUCTURE_SECTION_TITLE, tree);

        // 3. Append as a custom section
        let section_id = self
            .store
            .add_section(SectionTemplate::Custom(STRUCTURE_SECTION_TITLE.to_string()));
        self.store.update_section_content(section_id, content);

        Ok(AppendStructureResult { section_id, tree })
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════
