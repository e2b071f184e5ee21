//! README document domain - aggregate, sections, templates, and the store.
//!
//! The document model is deliberately small: a name, a description, an
//! optional media pair, and an ordered list of sections. Everything here
//! is total and synchronous; external concerns stay behind ports.

mod document;
mod media;
mod patch;
mod prompt;
mod section;
mod store;
mod template;

pub use document::ReadmeDocument;
pub use media::MediaReference;
pub use patch::DocumentPatch;
pub use prompt::DescriptionPrompt;
pub use section::Section;
pub use store::ReadmeStore;
pub use template::SectionTemplate;
