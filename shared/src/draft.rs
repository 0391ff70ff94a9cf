//! Unsaved create/edit form state.

use crate::{
    api::{MultipartPayload, CONTENT_FIELD, PHOTOS_FIELD, SUMMARY_FIELD, TITLE_FIELD},
    Article,
};

/// Form inputs of the create/edit modal. `F` is the platform file handle.
#[derive(Debug, Clone, PartialEq)]
pub struct FormDraft<F> {
    /// Title input.
    pub title: String,
    /// Summary input.
    pub summary: String,
    /// Content textarea.
    pub content: String,
    /// Selected files in selection order.
    pub files: Vec<F>,
}

impl<F> Default for FormDraft<F> {
    fn default() -> Self {
        Self {
            title: String::new(),
            summary: String::new(),
            content: String::new(),
            files: Vec::new(),
        }
    }
}

impl<F> FormDraft<F> {
    /// Draft pre-filled from an existing article. Photos already on the
    /// server are not re-selected.
    pub fn from_article(article: &Article) -> Self {
        Self {
            title: article.title.clone(),
            summary: article.summary.clone(),
            content: article.content.clone(),
            files: Vec::new(),
        }
    }

    /// True when nothing has been typed or selected.
    pub fn is_empty(&self) -> bool {
        self.title.is_empty()
            && self.summary.is_empty()
            && self.content.is_empty()
            && self.files.is_empty()
    }

    /// Title and content are required; summary and photos are not.
    pub fn has_required_fields(&self) -> bool {
        !self.title.trim().is_empty() && !self.content.trim().is_empty()
    }
}

impl<F: Clone> FormDraft<F> {
    /// Multipart body: `title`, `summary`, `content`, then one `photos[]`
    /// per selected file.
    pub fn to_payload(&self) -> MultipartPayload<F> {
        let mut payload = MultipartPayload::new();
        payload
            .text(TITLE_FIELD, self.title.clone())
            .text(SUMMARY_FIELD, self.summary.clone())
            .text(CONTENT_FIELD, self.content.clone());
        for file in &self.files {
            payload.file(PHOTOS_FIELD, file.clone());
        }
        payload
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Photo;

    #[test]
    fn payload_without_files_has_three_fields() {
        let draft = FormDraft::<String> {
            title: "T".into(),
            summary: "S".into(),
            content: "C".into(),
            files: vec![],
        };
        let payload = draft.to_payload();

        assert_eq!(payload.parts().len(), 3);
        assert_eq!(payload.text_value(TITLE_FIELD), Some("T"));
        assert_eq!(payload.text_value(SUMMARY_FIELD), Some("S"));
        assert_eq!(payload.text_value(CONTENT_FIELD), Some("C"));
        assert_eq!(payload.count(PHOTOS_FIELD), 0);
    }

    #[test]
    fn edit_draft_copies_text_but_not_photos() {
        let article = Article {
            id: 7,
            title: "Old".into(),
            summary: "Sum".into(),
            content: "Body".into(),
            slug: "old".into(),
            published_at: None,
            photos: vec![Photo {
                url: "/uploads/x.jpg".into(),
            }],
        };
        let draft = FormDraft::<String>::from_article(&article);

        assert_eq!(draft.title, "Old");
        assert_eq!(draft.summary, "Sum");
        assert_eq!(draft.content, "Body");
        assert!(draft.files.is_empty());
    }

    #[test]
    fn required_fields_ignore_whitespace() {
        let mut draft = FormDraft::<String>::default();
        assert!(draft.is_empty());
        draft.title = "  ".into();
        draft.content = "C".into();
        assert!(!draft.has_required_fields());
        draft.title = "T".into();
        assert!(draft.has_required_fields());
    }
}
