//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `ai` - Text generator implementations (Gemini, mock)
//! - `export` - README writer implementations (local filesystem)
//! - `markdown` - Markdown composition and HTML preview rendering
//! - `structure` - Project structure scanners (directory tree)

pub mod ai;
pub mod export;
pub mod markdown;
pub mod structure;

pub use ai::{GeminiConfig, GeminiTextGenerator, MockTextGenerator};
pub use export::LocalReadmeWriter;
pub use markdown::{HtmlPreviewRenderer, TemplateMarkdownComposer};
pub use structure::DirectoryTreeScanner;
