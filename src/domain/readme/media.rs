//! MediaReference value object - An attached-media pair for the document.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// A reference to an uploaded media resource: display name plus a
/// dereferenceable locator.
///
/// The pair is set together and cleared together. Construction rejects
/// blank fields, so a half-set reference cannot be represented; absence is
/// expressed as `Option<MediaReference>::None` on the document. Locator
/// reachability is never validated here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaReference {
    file_name: String,
    file_url: String,
}

impl MediaReference {
    /// Creates a media reference, rejecting blank names or locators.
    pub fn new(
        file_name: impl Into<String>,
        file_url: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let file_name = file_name.into();
        let file_url = file_url.into();

        if file_name.trim().is_empty() {
            return Err(ValidationError::empty_field("file_name"));
        }
        if file_url.trim().is_empty() {
            return Err(ValidationError::empty_field("file_url"));
        }

        Ok(Self { file_name, file_url })
    }

    /// Returns the display file name (used as image alt text).
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Returns the resource locator.
    pub fn file_url(&self) -> &str {
        &self.file_url
    }
}
