//! Readme Writer Port - Export artifact and file persistence interface.
//!
//! The export surface of the system is a single artifact: the composed
//! Markdown saved as a file literally named `README.md`. This port carries
//! the artifact value and the contract for writing it somewhere durable.

use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;

/// The fixed artifact filename.
pub const README_FILENAME: &str = "README.md";

/// The artifact content type.
pub const README_CONTENT_TYPE: &str = "text/markdown; charset=utf-8";

/// Port for persisting the exported artifact.
///
/// # Contract
///
/// Implementations must:
/// - Write the content bytes verbatim, UTF-8, no transformation
/// - Never leave a partially written artifact visible at the destination
/// - Report the stored location and a checksum of what was written
#[async_trait]
pub trait ReadmeWriter: Send + Sync {
    /// Write the artifact and return where and what was stored.
    async fn write(&self, readme: &ExportedReadme) -> Result<StoredReadme, WriteError>;
}

/// The exported README artifact: the exact composer output plus the
/// metadata the export surface guarantees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedReadme {
    /// The composed Markdown, verbatim.
    pub content: String,
    /// MIME content type of the artifact.
    pub content_type: String,
    /// Artifact filename, always `README.md`.
    pub filename: String,
}

impl ExportedReadme {
    /// Creates the artifact from composed Markdown.
    pub fn from_markdown(markdown: impl Into<String>) -> Self {
        Self {
            content: markdown.into(),
            content_type: README_CONTENT_TYPE.to_string(),
            filename: README_FILENAME.to_string(),
        }
    }

    /// Returns the artifact size in bytes.
    pub fn size_bytes(&self) -> u64 {
        self.content.len() as u64
    }
}

/// Result of a successful write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredReadme {
    /// Absolute or caller-relative path of the stored file.
    pub path: PathBuf,
    /// Number of bytes written.
    pub size_bytes: u64,
    /// SHA-256 checksum of the written content, hex-encoded.
    pub checksum: String,
}

/// Errors that can occur while writing the artifact.
#[derive(Debug, Clone, Error)]
pub enum WriteError {
    /// The destination directory does not exist or is not a directory.
    #[error("Invalid destination directory: {path}")]
    InvalidDestination { path: String },

    /// I/O failure while writing.
    #[error("I/O error during write: {0}")]
    Io(String),
}

impl WriteError {
    /// Creates an invalid destination error.
    pub fn invalid_destination(path: impl Into<String>) -> Self {
        Self::InvalidDestination { path: path.into() }
    }

    /// Creates an I/O error.
    pub fn io(reason: impl Into<String>) -> Self {
        Self::Io(reason.into())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════
