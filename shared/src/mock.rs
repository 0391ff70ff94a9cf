//! In-memory stand-in for the article service.
//!
//! Behaves like the real endpoints (ids assigned on create, 404 on unknown
//! ids) and records every call, so it backs both the offline `mock` build of
//! the dashboard and the tests.

use std::cell::{Cell, Ref, RefCell};

use async_trait::async_trait;

use crate::{
    api::{
        ArticleApi, MultipartPayload, ARTICLES_PATH, CONTENT_FIELD, PHOTOS_FIELD, SUMMARY_FIELD,
        TITLE_FIELD,
    },
    error::ApiError,
    Article, ArticleId, Photo,
};

/// HTTP verb of a recorded call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// `GET`
    Get,
    /// `POST`
    Post,
    /// `PUT`
    Put,
    /// `DELETE`
    Delete,
}

/// One request as the server would have seen it.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall<F> {
    /// Verb.
    pub method: Method,
    /// Path relative to the API base, e.g. `/articles/7`.
    pub path: String,
    /// Multipart body of create/update calls.
    pub payload: Option<MultipartPayload<F>>,
}

/// Article service held in memory.
#[derive(Debug)]
pub struct InMemoryArticleApi<F> {
    articles: RefCell<Vec<Article>>,
    next_id: Cell<ArticleId>,
    calls: RefCell<Vec<RecordedCall<F>>>,
    failure: RefCell<Option<ApiError>>,
}

impl<F> Default for InMemoryArticleApi<F> {
    fn default() -> Self {
        Self::with_articles(Vec::new())
    }
}

impl<F> InMemoryArticleApi<F> {
    /// Service pre-seeded with `articles`.
    pub fn with_articles(articles: Vec<Article>) -> Self {
        let next_id = articles.iter().map(|a| a.id).max().unwrap_or(0) + 1;
        Self {
            articles: RefCell::new(articles),
            next_id: Cell::new(next_id),
            calls: RefCell::new(Vec::new()),
            failure: RefCell::new(None),
        }
    }

    /// Makes every following call fail with `error`, or succeed again with
    /// `None`. Failed calls are still recorded.
    pub fn fail_with(&self, error: Option<ApiError>) {
        *self.failure.borrow_mut() = error;
    }

    /// Every call so far, oldest first.
    pub fn calls(&self) -> Ref<'_, Vec<RecordedCall<F>>> {
        self.calls.borrow()
    }

    /// Number of recorded calls with `method`.
    pub fn count(&self, method: Method) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|call| call.method == method)
            .count()
    }

    /// Current server-side articles.
    pub fn articles(&self) -> Vec<Article> {
        self.articles.borrow().clone()
    }

    fn record(&self, method: Method, path: String, payload: Option<MultipartPayload<F>>) {
        self.calls.borrow_mut().push(RecordedCall {
            method,
            path,
            payload,
        });
    }

    fn check_failure(&self) -> Result<(), ApiError> {
        match self.failure.borrow().as_ref() {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    fn uploaded_photos(
        &self,
        id: ArticleId,
        offset: usize,
        payload: &MultipartPayload<F>,
    ) -> Vec<Photo> {
        (0..payload.count(PHOTOS_FIELD))
            .map(|n| Photo {
                url: format!("/uploads/mock-{}-{}.jpg", id, offset + n + 1),
            })
            .collect()
    }
}

fn not_found() -> ApiError {
    ApiError::Http {
        status: 404,
        message: Some("Article not found".to_string()),
    }
}

fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    for ch in title.trim().chars() {
        if ch.is_alphanumeric() {
            slug.extend(ch.to_lowercase());
        } else if !slug.ends_with('-') {
            slug.push('-');
        }
    }
    slug.trim_matches('-').to_string()
}

fn field<F>(payload: &MultipartPayload<F>, name: &str) -> String {
    payload.text_value(name).unwrap_or_default().to_string()
}

#[async_trait(?Send)]
impl<F> ArticleApi for InMemoryArticleApi<F> {
    type File = F;

    async fn list_articles(&self) -> Result<Vec<Article>, ApiError> {
        self.record(Method::Get, ARTICLES_PATH.to_string(), None);
        self.check_failure()?;
        Ok(self.articles())
    }

    async fn create_article(
        &self,
        payload: MultipartPayload<F>,
    ) -> Result<Option<Article>, ApiError> {
        let result = self.check_failure().map(|()| {
            let id = self.next_id.get();
            self.next_id.set(id + 1);
            let title = field(&payload, TITLE_FIELD);
            let article = Article {
                id,
                slug: slugify(&title),
                title,
                summary: field(&payload, SUMMARY_FIELD),
                content: field(&payload, CONTENT_FIELD),
                published_at: None,
                photos: self.uploaded_photos(id, 0, &payload),
            };
            self.articles.borrow_mut().push(article.clone());
            Some(article)
        });
        self.record(Method::Post, ARTICLES_PATH.to_string(), Some(payload));
        result
    }

    async fn update_article(
        &self,
        id: ArticleId,
        payload: MultipartPayload<F>,
    ) -> Result<Option<Article>, ApiError> {
        let result = self.check_failure().and_then(|()| {
            let mut articles = self.articles.borrow_mut();
            let article = articles.iter_mut().find(|a| a.id == id).ok_or_else(not_found)?;
            let uploaded = self.uploaded_photos(id, article.photos.len(), &payload);
            article.title = field(&payload, TITLE_FIELD);
            article.slug = slugify(&article.title);
            article.summary = field(&payload, SUMMARY_FIELD);
            article.content = field(&payload, CONTENT_FIELD);
            article.photos.extend(uploaded);
            Ok(Some(article.clone()))
        });
        self.record(Method::Put, format!("{}/{}", ARTICLES_PATH, id), Some(payload));
        result
    }

    async fn delete_article(&self, id: ArticleId) -> Result<(), ApiError> {
        self.record(Method::Delete, format!("{}/{}", ARTICLES_PATH, id), None);
        self.check_failure()?;
        let mut articles = self.articles.borrow_mut();
        let before = articles.len();
        articles.retain(|a| a.id != id);
        if articles.len() == before {
            return Err(not_found());
        }
        Ok(())
    }
}

/// A small fixed data set for demos and tests.
pub fn sample_articles() -> Vec<Article> {
    let photo = |url: &str| Photo {
        url: url.to_string(),
    };
    vec![
        Article {
            id: 1,
            title: "Getting started with Rust".to_string(),
            summary: "Ownership, borrowing and the borrow checker in ten minutes.".to_string(),
            content: "Rust guarantees memory safety without a garbage collector.".to_string(),
            slug: "getting-started-with-rust".to_string(),
            published_at: None,
            photos: vec![
                photo("/uploads/rust-1.jpg"),
                photo("/uploads/rust-2.jpg"),
                photo("/uploads/rust-3.jpg"),
                photo("/uploads/rust-4.jpg"),
                photo("/uploads/rust-5.jpg"),
            ],
        },
        Article {
            id: 2,
            title: "Building UIs with Yew".to_string(),
            summary: "Function components, hooks and reducers.".to_string(),
            content: "Yew renders a virtual DOM compiled to WebAssembly.".to_string(),
            slug: "building-uis-with-yew".to_string(),
            published_at: None,
            photos: vec![photo("/uploads/yew.png")],
        },
        Article {
            id: 3,
            title: "Release notes".to_string(),
            summary: String::new(),
            content: "Nothing to see here yet.".to_string(),
            slug: "release-notes".to_string(),
            published_at: None,
            photos: Vec::new(),
        },
    ]
}
