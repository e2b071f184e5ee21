//! GenerateDescriptionHandler - Command handler for AI description rewrites.
//!
//! Renders a prompt from the current document, calls the text generator, and
//! applies the returned description as a single patch. The store is only
//! touched on success with usable text; any failure leaves the document
//! exactly as it was.

use std::sync::Arc;

use crate::domain::readme::{DescriptionPrompt, DocumentPatch, ReadmeStore};
use crate::ports::{GenerationError, GenerationRequest, TextGenerator};

/// Command to generate a project description.
#[derive(Debug, Clone, Default)]
pub struct GenerateDescriptionCommand {
    /// Optional free-form hints from the author, folded into the prompt.
    pub brief: String,
}

impl GenerateDescriptionCommand {
    /// Creates a command with no brief.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the author's brief.
    pub fn with_brief(mut self, brief: impl Into<String>) -> Self {
        self.brief = brief.into();
        self
    }
}

/// Result of a successful description generation.
#[derive(Debug, Clone)]
pub struct GenerateDescriptionResult {
    /// The description now stored on the document.
    pub description: String,
    /// Model that produced it.
    pub model: String,
}

/// Handler for generating descriptions.
///
/// # Dependencies
///
/// - `ReadmeStore`: Read document state, apply the description patch
/// - `TextGenerator`: Produce the replacement description
///
/// # Usage
///
/// ```rust,ignore
/// let handler = GenerateDescriptionHandler::new(store, generator);
/// let result = handler.handle(GenerateDescriptionCommand::new()).await?;
/// println!("{}", result.description);
/// ```
pub struct GenerateDescriptionHandler {
    store: Arc<ReadmeStore>,
    generator: Arc<dyn TextGenerator>,
}

impl GenerateDescriptionHandler {
    pub fn new(store: Arc<ReadmeStore>, generator: Arc<dyn TextGenerator>) -> Self {
        Self { store, generator }
    }

    pub async fn handle(
        &self,
        cmd: GenerateDescriptionCommand,
    ) -> Result<GenerateDescriptionResult, GenerationError> {
        // 1. Snapshot the document for prompt context
        let document = self.store.snapshot();

        // 2. Render the prompt
        let prompt = DescriptionPrompt::new(cmd.brief).render(&document);

        // 3. Call the generator
        let generated = self
            .generator
            .generate(GenerationRequest::new(prompt))
            .await?;

        // 4. A blank completion must not replace the description
        if generated.is_blank() {
            return Err(GenerationError::EmptyCompletion);
        }

        // 5. Apply as a single patch
        self.store
            .apply_patch(DocumentPatch::new().with_description(generated.text.clone()));

        Ok(GenerateDescriptionResult {
            description: generated.text,
            model: generated.model,
        })
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════
