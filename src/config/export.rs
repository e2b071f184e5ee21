//! README export configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// README export configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    /// Directory the README.md is written to
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
}

impl ExportConfig {
    /// Get the output directory as a path
    pub fn output_path(&self) -> PathBuf {
        PathBuf::from(&self.output_dir)
    }

    /// Validate export configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.output_dir.trim().is_empty() {
            return Err(ValidationError::EmptyOutputDir);
        }
        Ok(())
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
        }
    }
}

fn default_output_dir() -> String {
    ".".to_string()
}
