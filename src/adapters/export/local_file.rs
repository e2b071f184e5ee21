//! Local File Writer Adapter
//!
//! Writes the exported README artifact to a directory on disk. The write is
//! staged through a temporary file and renamed into place, so a crash mid-write
//! never leaves a truncated README.md behind.

use async_trait::async_trait;
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::ports::{ExportedReadme, ReadmeWriter, StoredReadme, WriteError};

/// File-based writer for exported READMEs.
#[derive(Debug, Clone)]
pub struct LocalReadmeWriter {
    output_dir: PathBuf,
}

impl LocalReadmeWriter {
    /// Create a new writer targeting an output directory.
    ///
    /// # Arguments
    /// * `output_dir` - The directory the README.md lands in
    ///
    /// # Example
    /// ```ignore
    /// let writer = LocalReadmeWriter::new("./out");
    /// ```
    pub fn new<P: AsRef<Path>>(output_dir: P) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
        }
    }

    /// Get the final path for the artifact.
    fn target_path(&self, readme: &ExportedReadme) -> PathBuf {
        self.output_dir.join(&readme.filename)
    }

    /// Get the staging path the content is written to first.
    fn staging_path(&self, readme: &ExportedReadme) -> PathBuf {
        self.output_dir.join(format!(".{}.tmp", readme.filename))
    }

    /// Ensure the output directory exists and is a directory.
    async fn ensure_output_dir(&self) -> Result<(), WriteError> {
        if self.output_dir.exists() {
            if !self.output_dir.is_dir() {
                return Err(WriteError::invalid_destination(
                    self.output_dir.display().to_string(),
                ));
            }
            return Ok(());
        }

        fs::create_dir_all(&self.output_dir)
            .await
            .map_err(|e| WriteError::io(e.to_string()))
    }
}

#[async_trait]
impl ReadmeWriter for LocalReadmeWriter {
    async fn write(&self, readme: &ExportedReadme) -> Result<StoredReadme, WriteError> {
        self.ensure_output_dir().await?;

        let staging = self.staging_path(readme);
        let target = self.target_path(readme);

        // Stage the content
        fs::write(&staging, readme.content.as_bytes())
            .await
            .map_err(|e| WriteError::io(e.to_string()))?;

        // Move into place
        fs::rename(&staging, &target)
            .await
            .map_err(|e| WriteError::io(e.to_string()))?;

        let mut hasher = Sha256::new();
        hasher.update(readme.content.as_bytes());
        let checksum = format!("{:x}", hasher.finalize());

        Ok(StoredReadme {
            path: target,
            size_bytes: readme.size_bytes(),
            checksum,
        })
    }
}
