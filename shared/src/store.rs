//! Client-side article list and the one action that fills it.
//!
//! The list is only ever written by [`fetch_all`]: create, update and
//! delete go straight to the [`ArticleApi`] and are followed by a full
//! refresh, so the server stays the single source of truth.

use std::cell::{Cell, Ref, RefCell};

use crate::{api::ArticleApi, error::ApiError, Article};

/// Error text used when a failed fetch carries no message.
pub const FETCH_FALLBACK_ERROR: &str = "Failed to fetch articles";

/// Lifecycle of the list fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchStatus {
    /// Nothing requested yet.
    #[default]
    Idle,
    /// A fetch is outstanding.
    Loading,
    /// The last applied fetch succeeded.
    Succeeded,
    /// The last applied fetch failed.
    Failed,
}

impl FetchStatus {
    /// Lowercase name, as used in logs and `data-status` attributes.
    pub fn as_str(&self) -> &'static str {
        match self {
            FetchStatus::Idle => "idle",
            FetchStatus::Loading => "loading",
            FetchStatus::Succeeded => "succeeded",
            FetchStatus::Failed => "failed",
        }
    }
}

/// Transitions of [`ArticleListState`].
#[derive(Debug, Clone, PartialEq)]
pub enum StoreAction {
    /// A fetch with this id was issued.
    FetchPending {
        /// Issued request id.
        request_id: u64,
    },
    /// A fetch resolved with the server's list.
    FetchFulfilled {
        /// Id of the resolved request.
        request_id: u64,
        /// Articles in server order.
        articles: Vec<Article>,
    },
    /// A fetch failed.
    FetchRejected {
        /// Id of the failed request.
        request_id: u64,
        /// Error message, may be blank.
        message: String,
    },
}

/// The article list, its fetch status and the last error.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ArticleListState {
    articles: Vec<Article>,
    status: FetchStatus,
    error: Option<String>,
    latest_request: u64,
}

impl ArticleListState {
    /// Reducer. Only the most recently issued request may write the list;
    /// older responses that resolve late are dropped.
    pub fn apply(&mut self, action: StoreAction) {
        match action {
            StoreAction::FetchPending { request_id } => {
                self.latest_request = self.latest_request.max(request_id);
                self.status = FetchStatus::Loading;
            },
            StoreAction::FetchFulfilled {
                request_id,
                articles,
            } => {
                if request_id != self.latest_request {
                    tracing::debug!(request_id, latest = self.latest_request, "Dropping stale article list");
                    return;
                }
                self.articles = articles;
                self.status = FetchStatus::Succeeded;
                self.error = None;
            },
            StoreAction::FetchRejected {
                request_id,
                message,
            } => {
                if request_id != self.latest_request {
                    tracing::debug!(request_id, latest = self.latest_request, "Dropping stale fetch error");
                    return;
                }
                let message = message.trim();
                self.status = FetchStatus::Failed;
                self.error = Some(if message.is_empty() {
                    FETCH_FALLBACK_ERROR.to_string()
                } else {
                    message.to_string()
                });
            },
        }
    }

    /// Articles from the last applied fetch, in server order.
    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    /// Current fetch status.
    pub fn status(&self) -> FetchStatus {
        self.status
    }

    /// Message of the last failed fetch.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// True while a fetch is outstanding.
    pub fn is_loading(&self) -> bool {
        self.status == FetchStatus::Loading
    }
}

/// Something [`fetch_all`] can write into: hands out request ids and
/// accepts actions. Implemented by [`LocalStore`] and by the UI layer's
/// reducer handle.
pub trait ArticleStoreHandle {
    /// Next request id; strictly increasing per store.
    fn next_request_id(&self) -> u64;

    /// Applies an action to the underlying state.
    fn dispatch(&self, action: StoreAction);
}

/// Single-threaded owned store, for hosts without their own reducer.
#[derive(Debug, Default)]
pub struct LocalStore {
    state: RefCell<ArticleListState>,
    ids: Cell<u64>,
}

impl LocalStore {
    /// Empty idle store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Borrow of the current state.
    pub fn state(&self) -> Ref<'_, ArticleListState> {
        self.state.borrow()
    }
}

impl ArticleStoreHandle for LocalStore {
    fn next_request_id(&self) -> u64 {
        let next = self.ids.get() + 1;
        self.ids.set(next);
        next
    }

    fn dispatch(&self, action: StoreAction) {
        self.state.borrow_mut().apply(action);
    }
}

/// Fetches the full list and reduces it into `store`.
///
/// Status goes to loading before the request is sent. The returned error
/// is already recorded in the store; callers only need it for logging.
pub async fn fetch_all<A, S>(api: &A, store: &S) -> Result<usize, ApiError>
where
    A: ArticleApi + ?Sized,
    S: ArticleStoreHandle + ?Sized,
{
    let request_id = store.next_request_id();
    store.dispatch(StoreAction::FetchPending { request_id });
    tracing::debug!(request_id, "Fetching articles");

    match api.list_articles().await {
        Ok(articles) => {
            let count = articles.len();
            tracing::info!(request_id, count, "Fetched articles");
            store.dispatch(StoreAction::FetchFulfilled {
                request_id,
                articles,
            });
            Ok(count)
        },
        Err(err) => {
            tracing::warn!(request_id, "Failed to fetch articles: {err}");
            store.dispatch(StoreAction::FetchRejected {
                request_id,
                message: err.to_string(),
            });
            Err(err)
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{sample_articles, InMemoryArticleApi};

    fn article(id: i64, title: &str) -> Article {
        Article {
            id,
            title: title.to_string(),
            summary: String::new(),
            content: String::new(),
            slug: String::new(),
            published_at: None,
            photos: Vec::new(),
        }
    }

    #[test]
    fn starts_idle_and_empty() {
        let state = ArticleListState::default();
        assert_eq!(state.status(), FetchStatus::Idle);
        assert!(state.articles().is_empty());
        assert!(state.error().is_none());
    }

    #[test]
    fn fulfilled_replaces_list_wholesale() {
        let mut state = ArticleListState::default();
        state.apply(StoreAction::FetchPending { request_id: 1 });
        state.apply(StoreAction::FetchFulfilled {
            request_id: 1,
            articles: vec![article(1, "A"), article(2, "B")],
        });
        state.apply(StoreAction::FetchPending { request_id: 2 });
        assert!(state.is_loading());
        assert_eq!(state.articles().len(), 2);

        state.apply(StoreAction::FetchFulfilled {
            request_id: 2,
            articles: vec![article(9, "Z")],
        });
        assert_eq!(state.articles(), &[article(9, "Z")]);
        assert_eq!(state.status(), FetchStatus::Succeeded);
    }

    #[test]
    fn blank_rejection_uses_fallback_message() {
        let mut state = ArticleListState::default();
        state.apply(StoreAction::FetchPending { request_id: 1 });
        state.apply(StoreAction::FetchRejected {
            request_id: 1,
            message: "  ".to_string(),
        });
        assert_eq!(state.status(), FetchStatus::Failed);
        assert_eq!(state.error(), Some(FETCH_FALLBACK_ERROR));
    }

    #[test]
    fn stale_response_does_not_overwrite_newer_request() {
        let mut state = ArticleListState::default();
        state.apply(StoreAction::FetchPending { request_id: 1 });
        state.apply(StoreAction::FetchPending { request_id: 2 });
        state.apply(StoreAction::FetchFulfilled {
            request_id: 2,
            articles: vec![article(2, "new")],
        });
        state.apply(StoreAction::FetchFulfilled {
            request_id: 1,
            articles: vec![article(1, "old")],
        });
        assert_eq!(state.articles(), &[article(2, "new")]);
        assert_eq!(state.status(), FetchStatus::Succeeded);
    }

    #[test]
    fn older_pending_keeps_loading_until_latest_resolves() {
        let mut state = ArticleListState::default();
        state.apply(StoreAction::FetchPending { request_id: 1 });
        state.apply(StoreAction::FetchPending { request_id: 2 });
        state.apply(StoreAction::FetchRejected {
            request_id: 1,
            message: "boom".to_string(),
        });
        assert!(state.is_loading());
        assert!(state.error().is_none());
    }

    #[tokio::test]
    async fn fetch_all_mirrors_server_order() {
        let api = InMemoryArticleApi::<String>::with_articles(sample_articles());
        let store = LocalStore::new();

        let count = fetch_all(&api, &store).await.expect("fetch succeeds");

        let state = store.state();
        assert_eq!(count, sample_articles().len());
        assert_eq!(state.articles(), sample_articles().as_slice());
        assert_eq!(state.status(), FetchStatus::Succeeded);
        assert!(state.error().is_none());
    }

    #[tokio::test]
    async fn fetch_all_failure_records_message() {
        let api = InMemoryArticleApi::<String>::with_articles(sample_articles());
        api.fail_with(Some(ApiError::Network("connection refused".to_string())));
        let store = LocalStore::new();

        let result = fetch_all(&api, &store).await;

        let state = store.state();
        assert!(result.is_err());
        assert_eq!(state.status(), FetchStatus::Failed);
        assert_eq!(state.error(), Some("Network error: connection refused"));
        assert!(state.articles().is_empty());
    }

    #[tokio::test]
    async fn rejected_refresh_keeps_loaded_articles() {
        let api = InMemoryArticleApi::<String>::with_articles(vec![article(1, "kept")]);
        let store = LocalStore::new();
        fetch_all(&api, &store).await.expect("first fetch");

        api.fail_with(Some(ApiError::Http {
            status: 503,
            message: None,
        }));
        let result = fetch_all(&api, &store).await;

        let state = store.state();
        assert!(result.is_err());
        assert_eq!(state.status(), FetchStatus::Failed);
        assert_eq!(state.error(), Some("HTTP error: 503"));
        assert_eq!(state.articles(), &[article(1, "kept")]);
    }

    #[test]
    fn local_store_ids_increase() {
        let store = LocalStore::new();
        assert_eq!(store.next_request_id(), 1);
        assert_eq!(store.next_request_id(), 2);
    }
}
