//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `TextGenerator` - Generative-text provider boundary
//! - `MarkdownComposer` - Document-to-Markdown projection
//! - `ReadmeWriter` - Persistence of the exported artifact
//! - `ProjectScanner` - Directory tree rendering for the structure section

mod markdown_composer;
mod project_scanner;
mod readme_writer;
mod text_generator;

pub use markdown_composer::MarkdownComposer;
pub use project_scanner::{ProjectScanner, ScanError};
pub use readme_writer::{
    ExportedReadme, ReadmeWriter, StoredReadme, WriteError, README_CONTENT_TYPE, README_FILENAME,
};
pub use text_generator::{
    GeneratedText, GenerationError, GenerationRequest, GeneratorInfo, TextGenerator,
};
