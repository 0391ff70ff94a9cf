//! Contract for the article REST service and the pieces of it that do not
//! depend on a particular HTTP stack: URL building, the multipart payload
//! model and response decoding.

use async_trait::async_trait;
use serde::Deserialize;

use crate::{error::ApiError, Article, ArticleId};

/// Collection path relative to the API base.
pub const ARTICLES_PATH: &str = "/articles";
/// Multipart field carrying the title.
pub const TITLE_FIELD: &str = "title";
/// Multipart field carrying the summary.
pub const SUMMARY_FIELD: &str = "summary";
/// Multipart field carrying the body text.
pub const CONTENT_FIELD: &str = "content";
/// Multipart field repeated once per uploaded photo.
pub const PHOTOS_FIELD: &str = "photos[]";

/// Absolute URLs of the article endpoints under one base.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base: String,
}

impl Endpoints {
    /// `base` is the API root, e.g. `http://localhost:8081/api`.
    pub fn new(base: &str) -> Self {
        Self {
            base: base.trim().trim_end_matches('/').to_string(),
        }
    }

    /// `{base}/articles`
    pub fn collection(&self) -> String {
        format!("{}{}", self.base, ARTICLES_PATH)
    }

    /// `{base}/articles/{id}`
    pub fn item(&self, id: ArticleId) -> String {
        format!("{}{}/{}", self.base, ARTICLES_PATH, id)
    }
}

/// One multipart form field value.
#[derive(Debug, Clone, PartialEq)]
pub enum FormValue<F> {
    /// Plain text field.
    Text(String),
    /// File handle, passed through unmodified.
    File(F),
}

/// Ordered multipart form body. `F` is the platform's file handle.
#[derive(Debug, Clone, PartialEq)]
pub struct MultipartPayload<F> {
    parts: Vec<(String, FormValue<F>)>,
}

impl<F> Default for MultipartPayload<F> {
    fn default() -> Self {
        Self { parts: Vec::new() }
    }
}

impl<F> MultipartPayload<F> {
    /// Empty payload.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a text field.
    pub fn text(&mut self, name: &str, value: impl Into<String>) -> &mut Self {
        self.parts
            .push((name.to_string(), FormValue::Text(value.into())));
        self
    }

    /// Appends a file field. Repeated names are kept in append order.
    pub fn file(&mut self, name: &str, file: F) -> &mut Self {
        self.parts.push((name.to_string(), FormValue::File(file)));
        self
    }

    /// All parts in append order.
    pub fn parts(&self) -> &[(String, FormValue<F>)] {
        &self.parts
    }

    /// Consumes the payload into its parts.
    pub fn into_parts(self) -> Vec<(String, FormValue<F>)> {
        self.parts
    }

    /// First text value appended under `name`.
    pub fn text_value(&self, name: &str) -> Option<&str> {
        self.parts.iter().find_map(|(key, value)| match value {
            FormValue::Text(text) if key == name => Some(text.as_str()),
            _ => None,
        })
    }

    /// Files appended under `name`, in append order.
    pub fn files<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a F> + 'a {
        self.parts.iter().filter_map(move |(key, value)| match value {
            FormValue::File(file) if key == name => Some(file),
            _ => None,
        })
    }

    /// Number of parts appended under `name`.
    pub fn count(&self, name: &str) -> usize {
        self.parts.iter().filter(|(key, _)| key == name).count()
    }
}

/// The four calls the dashboard makes.
///
/// Futures are `?Send`: the browser implementation holds JS values across
/// await points.
#[async_trait(?Send)]
pub trait ArticleApi {
    /// File handle type carried in multipart payloads.
    type File;

    /// `GET /articles`, returning the inner `data.data` array in server order.
    async fn list_articles(&self) -> Result<Vec<Article>, ApiError>;

    /// `POST /articles`.
    async fn create_article(
        &self,
        payload: MultipartPayload<Self::File>,
    ) -> Result<Option<Article>, ApiError>;

    /// `PUT /articles/{id}`.
    async fn update_article(
        &self,
        id: ArticleId,
        payload: MultipartPayload<Self::File>,
    ) -> Result<Option<Article>, ApiError>;

    /// `DELETE /articles/{id}`.
    async fn delete_article(&self, id: ArticleId) -> Result<(), ApiError>;
}

#[derive(Debug, Deserialize)]
struct ListEnvelope {
    data: ListPage,
}

#[derive(Debug, Deserialize)]
struct ListPage {
    data: Vec<Article>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ArticleBody {
    Bare(Article),
    Wrapped { data: Article },
}

/// Decodes a `GET /articles` body of shape `{ "data": { "data": [...] } }`.
pub fn parse_list_body(body: &str) -> Result<Vec<Article>, ApiError> {
    serde_json::from_str::<ListEnvelope>(body)
        .map(|envelope| envelope.data.data)
        .map_err(|e| ApiError::Parse(e.to_string()))
}

/// Decodes a create/update body. Either a bare article or `{ "data": article }`
/// is accepted; anything else, including an empty body, gives `None`.
pub fn parse_article_body(body: &str) -> Option<Article> {
    if body.trim().is_empty() {
        return None;
    }
    match serde_json::from_str::<ArticleBody>(body).ok()? {
        ArticleBody::Bare(article) | ArticleBody::Wrapped { data: article } => Some(article),
    }
}
