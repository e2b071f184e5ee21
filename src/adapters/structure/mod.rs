//! Project Structure Adapters.
//!
//! Implementations of the ProjectScanner port.
//!
//! ## Available Adapters
//!
//! - `DirectoryTreeScanner` - Renders a directory layout as an indented tree

mod directory_scanner;

pub use directory_scanner::DirectoryTreeScanner;
