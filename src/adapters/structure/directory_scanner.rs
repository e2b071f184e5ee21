//! Directory Tree Scanner Adapter
//!
//! Walks a project root and renders its layout as an indented bullet tree.
//! Entries at each level are sorted by file name so the same tree always
//! renders the same text.

use std::path::Path;
use walkdir::WalkDir;

use crate::ports::{ProjectScanner, ScanError};

/// Filesystem-backed implementation of ProjectScanner.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectoryTreeScanner;

impl DirectoryTreeScanner {
    /// Creates a new scanner.
    pub fn new() -> Self {
        Self
    }
}

impl ProjectScanner for DirectoryTreeScanner {
    fn scan_tree(&self, root: &Path) -> Result<String, ScanError> {
        if !root.exists() {
            return Err(ScanError::root_not_found(root.display().to_string()));
        }
        if !root.is_dir() {
            return Err(ScanError::not_a_directory(root.display().to_string()));
        }

        let mut tree = String::new();

        // Depth-first walk, children immediately after their directory
        let walker = WalkDir::new(root).min_depth(1).sort_by_file_name();

        for entry in walker {
            let entry = entry.map_err(|e| ScanError::io(e.to_string()))?;

            let indent = "  ".repeat(entry.depth() - 1);
            let name = entry.file_name().to_string_lossy();

            if entry.file_type().is_dir() {
                tree.push_str(&format!("{}- {}/\n", indent, name));
            } else {
                tree.push_str(&format!("{}- {}\n", indent, name));
            }
        }

        Ok(tree)
    }
}
