//! State machine behind the dashboard page.
//!
//! One component covers every variant of the page; [`DashboardConfig`]
//! switches the optional pieces (edit confirmation, toasts, lightbox,
//! listing layout). All visibility flags are independent of each other.
//!
//! The machine itself is synchronous. The async half is [`run_mutation`],
//! which sends a [`Mutation`] and refreshes the store; the UI dispatches
//! the outcome back as a [`DashboardAction`].

use crate::{
    api::{ArticleApi, MultipartPayload},
    draft::FormDraft,
    error::ApiError,
    notification::Notification,
    store::{fetch_all, ArticleStoreHandle},
    Article, ArticleId,
};

/// How the article list is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListingLayout {
    /// Grid of cards.
    Cards,
    /// Plain bullet list.
    List,
    /// Data table.
    #[default]
    Table,
}

/// Optional pieces of the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    /// Ask before deleting. When off, selecting delete fires immediately.
    pub confirm_delete: bool,
    /// Ask before opening the edit form.
    pub confirm_edit: bool,
    /// Show success/error toasts after mutations.
    pub notifications: bool,
    /// Open photos in a preview overlay.
    pub lightbox: bool,
    /// Listing layout.
    pub layout: ListingLayout,
    /// Thumbnails per article before the `+N` badge; `None` shows all.
    pub photo_preview_limit: Option<usize>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self::full()
    }
}

impl DashboardConfig {
    /// Bullet list with no dialogs or toasts; delete fires on click.
    pub fn minimal() -> Self {
        Self {
            confirm_delete: false,
            confirm_edit: false,
            notifications: false,
            lightbox: false,
            layout: ListingLayout::List,
            photo_preview_limit: None,
        }
    }

    /// Card grid with toasts and the lightbox.
    pub fn cards() -> Self {
        Self {
            confirm_delete: true,
            confirm_edit: false,
            notifications: true,
            lightbox: true,
            layout: ListingLayout::Cards,
            photo_preview_limit: Some(3),
        }
    }

    /// Table with every optional piece turned on.
    pub fn full() -> Self {
        Self {
            confirm_delete: true,
            confirm_edit: true,
            notifications: true,
            lightbox: true,
            layout: ListingLayout::Table,
            photo_preview_limit: Some(3),
        }
    }

    /// Preset by name (`minimal`, `cards`, `full`); unknown names give `None`.
    pub fn preset(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "minimal" => Some(Self::minimal()),
            "cards" => Some(Self::cards()),
            "full" => Some(Self::full()),
            _ => None,
        }
    }
}

/// Create/edit modal visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalState {
    /// Hidden.
    #[default]
    Closed,
    /// Open for a new article.
    Creating,
    /// Open for the article with this id.
    Editing(ArticleId),
}

/// A request the dashboard wants sent.
#[derive(Debug, Clone, PartialEq)]
pub enum Mutation<F> {
    /// `POST /articles`
    Create(MultipartPayload<F>),
    /// `PUT /articles/{id}`
    Update(ArticleId, MultipartPayload<F>),
    /// `DELETE /articles/{id}`
    Delete(ArticleId),
}

/// Inputs to [`DashboardState::apply`].
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardAction<F> {
    /// Open the modal with an empty draft.
    OpenCreate,
    /// Close the modal and drop the draft.
    CancelModal,
    /// Title input changed.
    SetTitle(String),
    /// Summary input changed.
    SetSummary(String),
    /// Content input changed.
    SetContent(String),
    /// File selection changed.
    SetFiles(Vec<F>),
    /// Edit selected on a row.
    RequestEdit(Article),
    /// Edit confirmed in the dialog.
    ConfirmEdit,
    /// Edit dialog dismissed.
    CancelEdit,
    /// Delete selected on a row.
    RequestDelete(ArticleId),
    /// Delete dialog dismissed.
    CancelDelete,
    /// Photo clicked.
    OpenPreview(String),
    /// Lightbox closed.
    ClosePreview,
    /// Create/update sent.
    SubmitStarted,
    /// Create/update acknowledged and the list refreshed.
    SubmitSucceeded {
        /// True for an update, false for a create.
        updated: bool,
    },
    /// Create/update failed.
    SubmitFailed(String),
    /// Delete sent.
    DeleteStarted,
    /// Delete finished.
    DeleteFinished(Result<(), String>),
    /// Toast closed or timed out.
    DismissNotification,
}

/// Everything the dashboard page owns besides the article store.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState<F> {
    config: DashboardConfig,
    draft: FormDraft<F>,
    modal: ModalState,
    delete_target: Option<ArticleId>,
    edit_candidate: Option<Article>,
    preview: Option<String>,
    notification: Option<Notification>,
    notification_seq: u64,
    submitting: bool,
    deleting: bool,
}

impl<F> DashboardState<F> {
    /// Everything closed, empty draft.
    pub fn new(config: DashboardConfig) -> Self {
        Self {
            config,
            draft: FormDraft::default(),
            modal: ModalState::Closed,
            delete_target: None,
            edit_candidate: None,
            preview: None,
            notification: None,
            notification_seq: 0,
            submitting: false,
            deleting: false,
        }
    }

    /// Applies one transition.
    pub fn apply(&mut self, action: DashboardAction<F>) {
        match action {
            DashboardAction::OpenCreate => {
                self.draft = FormDraft::default();
                self.modal = ModalState::Creating;
            },
            DashboardAction::CancelModal => self.close_modal(),
            DashboardAction::SetTitle(value) => self.draft.title = value,
            DashboardAction::SetSummary(value) => self.draft.summary = value,
            DashboardAction::SetContent(value) => self.draft.content = value,
            DashboardAction::SetFiles(files) => self.draft.files = files,
            DashboardAction::RequestEdit(article) => {
                if self.config.confirm_edit {
                    self.edit_candidate = Some(article);
                } else {
                    self.begin_edit(&article);
                }
            },
            DashboardAction::ConfirmEdit => {
                if let Some(article) = self.edit_candidate.take() {
                    self.begin_edit(&article);
                }
            },
            DashboardAction::CancelEdit => self.edit_candidate = None,
            DashboardAction::RequestDelete(id) => self.delete_target = Some(id),
            DashboardAction::CancelDelete => self.delete_target = None,
            DashboardAction::OpenPreview(url) => {
                if self.config.lightbox {
                    self.preview = Some(url);
                }
            },
            DashboardAction::ClosePreview => self.preview = None,
            DashboardAction::SubmitStarted => self.submitting = true,
            DashboardAction::SubmitSucceeded { updated } => {
                self.submitting = false;
                self.close_modal();
                let message = if updated {
                    "Article updated"
                } else {
                    "Article created"
                };
                self.notify(Notification::success(message));
            },
            DashboardAction::SubmitFailed(message) => {
                self.submitting = false;
                self.notify(Notification::error(format!("Failed to save article: {}", message)));
            },
            DashboardAction::DeleteStarted => self.deleting = true,
            DashboardAction::DeleteFinished(outcome) => {
                self.deleting = false;
                self.delete_target = None;
                match outcome {
                    Ok(()) => self.notify(Notification::success("Article deleted")),
                    Err(message) => self.notify(Notification::error(format!(
                        "Failed to delete article: {}",
                        message
                    ))),
                }
            },
            DashboardAction::DismissNotification => self.notification = None,
        }
    }

    fn begin_edit(&mut self, article: &Article) {
        self.draft = FormDraft::from_article(article);
        self.modal = ModalState::Editing(article.id);
    }

    fn close_modal(&mut self) {
        self.modal = ModalState::Closed;
        self.draft = FormDraft::default();
    }

    fn notify(&mut self, notification: Notification) {
        if self.config.notifications {
            self.notification_seq += 1;
            self.notification = Some(notification);
        }
    }

    /// Active configuration.
    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// Current draft.
    pub fn draft(&self) -> &FormDraft<F> {
        &self.draft
    }

    /// Modal visibility.
    pub fn modal(&self) -> ModalState {
        self.modal
    }

    /// True while the create/edit modal is shown.
    pub fn is_modal_open(&self) -> bool {
        self.modal != ModalState::Closed
    }

    /// Id under edit, if the modal is in edit mode.
    pub fn editing_id(&self) -> Option<ArticleId> {
        match self.modal {
            ModalState::Editing(id) => Some(id),
            _ => None,
        }
    }

    /// Id awaiting delete confirmation.
    pub fn delete_target(&self) -> Option<ArticleId> {
        self.delete_target
    }

    /// Article awaiting edit confirmation.
    pub fn edit_candidate(&self) -> Option<&Article> {
        self.edit_candidate.as_ref()
    }

    /// URL shown in the lightbox.
    pub fn preview(&self) -> Option<&str> {
        self.preview.as_deref()
    }

    /// Toast to show.
    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    /// Bumped on every shown toast, so repeats of the same message are
    /// still distinct.
    pub fn notification_seq(&self) -> u64 {
        self.notification_seq
    }

    /// True when the modal is open, nothing is in flight, and title and
    /// content are not blank.
    pub fn can_submit(&self) -> bool {
        self.is_modal_open() && !self.submitting && self.draft.has_required_fields()
    }

    /// True while a create/update is in flight.
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// True while a delete is in flight.
    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    /// Delete request for the confirmed target.
    pub fn pending_delete(&self) -> Option<Mutation<F>> {
        self.delete_target.map(Mutation::Delete)
    }
}

impl<F: Clone> DashboardState<F> {
    /// Request the submit button should send: update when editing, create
    /// otherwise, nothing when the modal is closed.
    pub fn submission(&self) -> Option<Mutation<F>> {
        match self.modal {
            ModalState::Closed => None,
            ModalState::Creating => Some(Mutation::Create(self.draft.to_payload())),
            ModalState::Editing(id) => Some(Mutation::Update(id, self.draft.to_payload())),
        }
    }
}

/// Sends `mutation`, then refreshes the list once it was acknowledged.
///
/// A failed refresh does not fail the mutation; it is already recorded in
/// the store.
pub async fn run_mutation<A, S>(
    api: &A,
    store: &S,
    mutation: Mutation<A::File>,
) -> Result<(), ApiError>
where
    A: ArticleApi + ?Sized,
    S: ArticleStoreHandle + ?Sized,
{
    match mutation {
        Mutation::Create(payload) => {
            tracing::debug!("Creating article");
            api.create_article(payload).await?;
        },
        Mutation::Update(id, payload) => {
            tracing::debug!(id, "Updating article");
            api.update_article(id, payload).await?;
        },
        Mutation::Delete(id) => {
            tracing::debug!(id, "Deleting article");
            api.delete_article(id).await?;
        },
    }

    if let Err(err) = fetch_all(api, store).await {
        tracing::warn!("Refresh after mutation failed: {err}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use super::*;
    use crate::{
        api::{CONTENT_FIELD, PHOTOS_FIELD, SUMMARY_FIELD, TITLE_FIELD},
        mock::{sample_articles, InMemoryArticleApi, Method},
        notification::NotificationKind,
        store::LocalStore,
    };

    type State = DashboardState<String>;

    /// Accepts mutations but can't list.
    struct ListUnavailable(InMemoryArticleApi<String>);

    #[async_trait(?Send)]
    impl ArticleApi for ListUnavailable {
        type File = String;

        async fn list_articles(&self) -> Result<Vec<Article>, ApiError> {
            Err(ApiError::Network("list unavailable".to_string()))
        }

        async fn create_article(
            &self,
            payload: MultipartPayload<String>,
        ) -> Result<Option<Article>, ApiError> {
            self.0.create_article(payload).await
        }

        async fn update_article(
            &self,
            id: ArticleId,
            payload: MultipartPayload<String>,
        ) -> Result<Option<Article>, ApiError> {
            self.0.update_article(id, payload).await
        }

        async fn delete_article(&self, id: ArticleId) -> Result<(), ApiError> {
            self.0.delete_article(id).await
        }
    }

    fn fill(state: &mut State, title: &str, summary: &str, content: &str) {
        state.apply(DashboardAction::SetTitle(title.into()));
        state.apply(DashboardAction::SetSummary(summary.into()));
        state.apply(DashboardAction::SetContent(content.into()));
    }

    fn article_with_id(id: ArticleId) -> Article {
        sample_articles()
            .into_iter()
            .find(|a| a.id == id)
            .expect("sample article")
    }

    #[test]
    fn starts_with_everything_closed() {
        let state = State::new(DashboardConfig::full());
        assert!(!state.is_modal_open());
        assert!(state.delete_target().is_none());
        assert!(state.edit_candidate().is_none());
        assert!(state.preview().is_none());
        assert!(state.submission().is_none());
    }

    #[test]
    fn cancel_discards_draft() {
        let mut state = State::new(DashboardConfig::full());
        state.apply(DashboardAction::OpenCreate);
        fill(&mut state, "T", "S", "C");
        state.apply(DashboardAction::SetFiles(vec!["a.jpg".into()]));
        state.apply(DashboardAction::CancelModal);

        state.apply(DashboardAction::OpenCreate);
        assert!(state.is_modal_open());
        assert!(state.draft().is_empty());
    }

    #[test]
    fn create_submission_has_fields_and_no_photos() {
        let mut state = State::new(DashboardConfig::full());
        state.apply(DashboardAction::OpenCreate);
        fill(&mut state, "T", "S", "C");

        let Some(Mutation::Create(payload)) = state.submission() else {
            panic!("expected a create");
        };
        assert_eq!(payload.text_value(TITLE_FIELD), Some("T"));
        assert_eq!(payload.text_value(SUMMARY_FIELD), Some("S"));
        assert_eq!(payload.text_value(CONTENT_FIELD), Some("C"));
        assert_eq!(payload.count(PHOTOS_FIELD), 0);
    }

    #[test]
    fn confirmed_edit_prefills_and_targets_update() {
        let mut state = State::new(DashboardConfig::full());
        let article = article_with_id(2);
        state.apply(DashboardAction::RequestEdit(article.clone()));

        assert!(!state.is_modal_open());
        assert_eq!(state.edit_candidate(), Some(&article));

        state.apply(DashboardAction::ConfirmEdit);
        assert_eq!(state.editing_id(), Some(2));
        assert!(state.edit_candidate().is_none());
        assert_eq!(state.draft().title, article.title);
        assert!(matches!(state.submission(), Some(Mutation::Update(2, _))));
    }

    #[test]
    fn edit_without_confirmation_opens_directly() {
        let mut state = State::new(DashboardConfig::cards());
        state.apply(DashboardAction::RequestEdit(article_with_id(1)));
        assert_eq!(state.modal(), ModalState::Editing(1));
    }

    #[test]
    fn cancel_edit_leaves_modal_closed() {
        let mut state = State::new(DashboardConfig::full());
        state.apply(DashboardAction::RequestEdit(article_with_id(1)));
        state.apply(DashboardAction::CancelEdit);
        state.apply(DashboardAction::ConfirmEdit);
        assert!(!state.is_modal_open());
    }

    #[test]
    fn submit_failure_keeps_modal_and_draft() {
        let mut state = State::new(DashboardConfig::full());
        state.apply(DashboardAction::OpenCreate);
        fill(&mut state, "T", "S", "C");
        state.apply(DashboardAction::SubmitStarted);
        assert!(state.is_submitting());

        state.apply(DashboardAction::SubmitFailed("HTTP error: 500".into()));

        assert!(!state.is_submitting());
        assert!(state.is_modal_open());
        assert_eq!(state.draft().title, "T");
        let toast = state.notification().expect("error toast");
        assert_eq!(toast.kind, NotificationKind::Error);
        assert!(toast.message.contains("HTTP error: 500"));
    }

    #[test]
    fn submit_success_closes_and_clears() {
        let mut state = State::new(DashboardConfig::full());
        state.apply(DashboardAction::OpenCreate);
        fill(&mut state, "T", "S", "C");
        state.apply(DashboardAction::SubmitSucceeded { updated: false });

        assert!(!state.is_modal_open());
        assert!(state.draft().is_empty());
        assert_eq!(
            state.notification().map(|n| n.message.as_str()),
            Some("Article created")
        );

        state.apply(DashboardAction::DismissNotification);
        assert!(state.notification().is_none());
    }

    #[test]
    fn notifications_can_be_disabled() {
        let mut state = State::new(DashboardConfig::minimal());
        state.apply(DashboardAction::DeleteFinished(Err("boom".into())));
        assert!(state.notification().is_none());
    }

    #[test]
    fn delete_failure_raises_error_toast() {
        let mut state = State::new(DashboardConfig::full());
        state.apply(DashboardAction::RequestDelete(3));
        state.apply(DashboardAction::DeleteStarted);
        state.apply(DashboardAction::DeleteFinished(Err("HTTP error: 404".into())));

        let toast = state.notification().expect("error toast");
        assert_eq!(toast.kind, NotificationKind::Error);
        assert!(toast.message.contains("HTTP error: 404"));
        assert!(!state.is_deleting());
        assert!(state.delete_target().is_none());
    }

    #[test]
    fn repeated_toasts_are_distinct() {
        let mut state = State::new(DashboardConfig::full());
        state.apply(DashboardAction::DeleteFinished(Ok(())));
        let first = state.notification_seq();
        state.apply(DashboardAction::DeleteFinished(Ok(())));

        assert_eq!(
            state.notification().map(|n| n.message.as_str()),
            Some("Article deleted")
        );
        assert!(state.notification_seq() > first);
    }

    #[test]
    fn blank_required_fields_block_submit() {
        let mut state = State::new(DashboardConfig::full());
        assert!(!state.can_submit());

        state.apply(DashboardAction::OpenCreate);
        fill(&mut state, "   ", "S", "C");
        assert!(!state.can_submit());

        fill(&mut state, "T", "", "C");
        assert!(state.can_submit());

        state.apply(DashboardAction::SubmitStarted);
        assert!(!state.can_submit());
    }

    #[test]
    fn delete_dialog_tracks_target() {
        let mut state = State::new(DashboardConfig::full());
        state.apply(DashboardAction::RequestDelete(3));
        assert_eq!(state.pending_delete(), Some(Mutation::Delete(3)));

        state.apply(DashboardAction::CancelDelete);
        assert!(state.pending_delete().is_none());

        state.apply(DashboardAction::RequestDelete(3));
        state.apply(DashboardAction::DeleteStarted);
        state.apply(DashboardAction::DeleteFinished(Ok(())));
        assert!(state.delete_target().is_none());
        assert!(!state.is_deleting());
    }

    #[test]
    fn preview_respects_lightbox_flag() {
        let mut with = State::new(DashboardConfig::full());
        with.apply(DashboardAction::OpenPreview("http://localhost:8081/uploads/a.jpg".into()));
        assert_eq!(with.preview(), Some("http://localhost:8081/uploads/a.jpg"));
        with.apply(DashboardAction::ClosePreview);
        assert!(with.preview().is_none());

        let mut without = State::new(DashboardConfig::minimal());
        without.apply(DashboardAction::OpenPreview("x".into()));
        assert!(without.preview().is_none());
    }

    #[test]
    fn presets_by_name() {
        assert_eq!(DashboardConfig::preset(" Cards "), Some(DashboardConfig::cards()));
        assert_eq!(DashboardConfig::preset("minimal").map(|c| c.layout), Some(ListingLayout::List));
        assert!(DashboardConfig::preset("fancy").is_none());
        assert!(!DashboardConfig::minimal().confirm_delete);
        assert!(DashboardConfig::full().confirm_delete);
    }

    #[tokio::test]
    async fn create_with_two_files_posts_once_in_order() {
        let api = InMemoryArticleApi::<String>::with_articles(sample_articles());
        let store = LocalStore::new();
        let mut state = State::new(DashboardConfig::full());
        state.apply(DashboardAction::OpenCreate);
        fill(&mut state, "T", "S", "C");
        state.apply(DashboardAction::SetFiles(vec!["one.jpg".into(), "two.jpg".into()]));

        let mutation = state.submission().expect("submission");
        run_mutation(&api, &store, mutation).await.expect("create");

        assert_eq!(api.count(Method::Post), 1);
        assert_eq!(api.count(Method::Put), 0);
        let calls = api.calls();
        let post = calls
            .iter()
            .find(|c| c.method == Method::Post)
            .expect("post call");
        assert_eq!(post.path, "/articles");
        let payload = post.payload.as_ref().expect("payload");
        assert_eq!(
            payload.files(PHOTOS_FIELD).cloned().collect::<Vec<_>>(),
            vec!["one.jpg".to_string(), "two.jpg".to_string()]
        );
        assert_eq!(store.state().articles().len(), 4);
    }

    #[tokio::test]
    async fn editing_id_7_puts_and_never_posts() {
        let mut seeded = sample_articles();
        seeded.push(Article {
            id: 7,
            ..article_with_id(3)
        });
        let api = InMemoryArticleApi::<String>::with_articles(seeded);
        let store = LocalStore::new();
        let mut state = State::new(DashboardConfig::full());
        let target = api
            .articles()
            .into_iter()
            .find(|a| a.id == 7)
            .expect("article 7");

        state.apply(DashboardAction::RequestEdit(target));
        state.apply(DashboardAction::ConfirmEdit);
        state.apply(DashboardAction::SetTitle("Edited".into()));
        let mutation = state.submission().expect("submission");
        run_mutation(&api, &store, mutation).await.expect("update");

        assert_eq!(api.count(Method::Post), 0);
        assert_eq!(api.count(Method::Put), 1);
        assert!(api.calls().iter().any(|c| c.method == Method::Put && c.path == "/articles/7"));
        assert!(store.state().articles().iter().any(|a| a.id == 7 && a.title == "Edited"));
    }

    #[tokio::test]
    async fn confirmed_delete_sends_one_delete_and_one_refresh() {
        let api = InMemoryArticleApi::<String>::with_articles(sample_articles());
        let store = LocalStore::new();
        let mut state = State::new(DashboardConfig::full());
        state.apply(DashboardAction::RequestDelete(3));

        let mutation = state.pending_delete().expect("pending delete");
        run_mutation(&api, &store, mutation).await.expect("delete");

        let calls = api.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].method, Method::Delete);
        assert_eq!(calls[0].path, "/articles/3");
        assert_eq!(calls[1].method, Method::Get);
        assert!(store.state().articles().iter().all(|a| a.id != 3));
    }

    #[tokio::test]
    async fn failed_refresh_does_not_fail_mutation() {
        let api = ListUnavailable(InMemoryArticleApi::with_articles(sample_articles()));
        let store = LocalStore::new();

        run_mutation(&api, &store, Mutation::Delete(2))
            .await
            .expect("delete acknowledged");

        assert_eq!(api.0.count(Method::Delete), 1);
        assert!(api.0.articles().iter().all(|a| a.id != 2));
        let state = store.state();
        assert_eq!(state.status(), crate::store::FetchStatus::Failed);
        assert_eq!(state.error(), Some("Network error: list unavailable"));
    }

    #[tokio::test]
    async fn failed_mutation_skips_refresh() {
        let api = InMemoryArticleApi::<String>::with_articles(sample_articles());
        api.fail_with(Some(ApiError::Http {
            status: 500,
            message: None,
        }));
        let store = LocalStore::new();

        let result = run_mutation(&api, &store, Mutation::Delete(1)).await;

        assert!(result.is_err());
        assert_eq!(api.count(Method::Get), 0);
        assert_eq!(store.state().status(), crate::store::FetchStatus::Idle);
    }
}
