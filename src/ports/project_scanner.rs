//! Project Scanner Port - Directory tree rendering interface.
//!
//! Feeds the auto-generated project-structure section: implementations walk
//! a directory and render an indented bullet tree of its contents.

use std::path::Path;
use thiserror::Error;

/// Port for scanning a project directory into a tree listing.
///
/// # Contract
///
/// Implementations must:
/// - Render one `- name/` line per directory and one `- name` line per file
/// - Indent two spaces per nesting level
/// - Order entries deterministically, so equal trees render equal strings
pub trait ProjectScanner: Send + Sync {
    /// Render the directory tree rooted at `root`.
    fn scan_tree(&self, root: &Path) -> Result<String, ScanError>;
}

/// Errors that can occur during a scan.
#[derive(Debug, Clone, Error)]
pub enum ScanError {
    /// The scan root does not exist.
    #[error("Scan root not found: {path}")]
    RootNotFound { path: String },

    /// The scan root is not a directory.
    #[error("Scan root is not a directory: {path}")]
    NotADirectory { path: String },

    /// I/O failure while walking the tree.
    #[error("I/O error during scan: {0}")]
    Io(String),
}

impl ScanError {
    /// Creates a root not found error.
    pub fn root_not_found(path: impl Into<String>) -> Self {
        Self::RootNotFound { path: path.into() }
    }

    /// Creates a not-a-directory error.
    pub fn not_a_directory(path: impl Into<String>) -> Self {
        Self::NotADirectory { path: path.into() }
    }

    /// Creates an I/O error.
    pub fn io(reason: impl Into<String>) -> Self {
        Self::Io(reason.into())
    }
}
