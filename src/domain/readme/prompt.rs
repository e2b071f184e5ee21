//! DescriptionPrompt - Deterministic prompt text for the generative-text call.

use super::ReadmeDocument;

/// Renders the prompt sent to the generative-text collaborator when the
/// caller asks for a replacement project description.
///
/// The prompt interpolates the caller's free-form brief together with the
/// current document snapshot (project name, description, and every section
/// title/content pair). Rendering is pure: the same brief and snapshot
/// always produce the same string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DescriptionPrompt {
    brief: String,
}

impl DescriptionPrompt {
    /// Creates a prompt around a free-form project brief.
    pub fn new(brief: impl Into<String>) -> Self {
        Self { brief: brief.into() }
    }

    /// Returns the caller-supplied brief.
    pub fn brief(&self) -> &str {
        &self.brief
    }

    /// Renders the full prompt text against a document snapshot.
    pub fn render(&self, document: &ReadmeDocument) -> String {
        let mut prompt = String::new();

        prompt.push_str(
            "Generate a concise, professional README description for a project with the following details:\n",
        );
        prompt.push_str(&format!("Project Name: {}\n", document.project_name()));
        prompt.push_str(&format!("Description: {}\n", document.description()));
        prompt.push('\n');

        prompt.push_str("**Sections:**\n");
        for section in document.sections() {
            prompt.push_str(&format!("- **{}**: {}\n", section.title(), section.content()));
        }

        if !self.brief.trim().is_empty() {
            prompt.push('\n');
            prompt.push_str(&format!("Project brief: {}\n", self.brief));
        }

        prompt.push('\n');
        prompt.push_str(
            "The description should be concise, informative, and follow best practices for README files.",
        );

        prompt
    }
}
