//! DocumentPatch - Partial top-level field updates for the document.

use super::MediaReference;

/// A shallow partial update over the document's top-level fields.
///
/// Each field is three-state for the media slot and two-state for the text
/// slots: `None` leaves the document field unchanged; `Some` installs the
/// carried value. For `attached_media`, `Some(None)` clears the pair and
/// `Some(Some(_))` replaces it, so one patch can set, swap, or drop media.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentPatch {
    /// Replacement project name, if any.
    pub project_name: Option<String>,
    /// Replacement description, if any.
    pub description: Option<String>,
    /// Replacement media slot, if any: `Some(None)` clears it.
    pub attached_media: Option<Option<MediaReference>>,
}

impl DocumentPatch {
    /// Creates an empty patch that changes nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the project name.
    pub fn with_project_name(mut self, name: impl Into<String>) -> Self {
        self.project_name = Some(name.into());
        self
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Attaches a media reference.
    pub fn with_media(mut self, media: MediaReference) -> Self {
        self.attached_media = Some(Some(media));
        self
    }

    /// Clears the attached media pair.
    pub fn clearing_media(mut self) -> Self {
        self.attached_media = Some(None);
        self
    }

    /// Returns true if applying this patch cannot change any field.
    pub fn is_empty(&self) -> bool {
        self.project_name.is_none() && self.description.is_none() && self.attached_media.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_patch_changes_nothing() {
        let patch = DocumentPatch::new();
        assert!(patch.is_empty());
        assert_eq!(patch.project_name, None);
        assert_eq!(patch.description, None);
        assert_eq!(patch.attached_media, None);
    }

    #[test]
    fn builder_sets_only_named_fields() {
        let patch = DocumentPatch::new().with_description("A parser library");

        assert!(!patch.is_empty());
        assert_eq!(patch.description, Some("A parser library".to_string()));
        assert_eq!(patch.project_name, None);
        assert_eq!(patch.attached_media, None);
    }

    #[test]
    fn clearing_media_is_distinct_from_leaving_it_alone() {
        let untouched = DocumentPatch::new();
        let cleared = DocumentPatch::new().clearing_media();

        assert_eq!(untouched.attached_media, None);
        assert_eq!(cleared.attached_media, Some(None));
        assert!(!cleared.is_empty());
    }

    #[test]
    fn with_media_installs_the_pair() {
        let media = MediaReference::new("demo.gif", "https://example.com/demo.gif").unwrap();
        let patch = DocumentPatch::new().with_media(media.clone());

        assert_eq!(patch.attached_media, Some(Some(media)));
    }
}
