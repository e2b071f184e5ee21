//! Markdown Composer Port - Document-to-Markdown projection interface.
//!
//! The domain depends on this trait; adapters (like the fixed-template
//! composer) provide the implementation.

use crate::domain::readme::ReadmeDocument;

/// Port for composing a document snapshot into a single Markdown string.
///
/// # Contract
///
/// Implementations must:
/// - Be pure: the same document value yields byte-identical output on
///   every call (no clock, locale, or random state)
/// - Never mutate the document
/// - Always succeed; well-formed strings in, one string out
/// - Emit sections in insertion order with content verbatim, never
///   re-emitting section titles as headings
pub trait MarkdownComposer: Send + Sync {
    /// Compose the document into its canonical Markdown serialization.
    fn compose(&self, document: &ReadmeDocument) -> String;
}
