use std::rc::Rc;

use article_admin_shared::{
    dashboard::{run_mutation, DashboardAction, DashboardConfig, DashboardState, Mutation},
    store::{fetch_all, FetchStatus},
    ArticleId,
};
use web_sys::File;
use yew::prelude::*;

use crate::{
    api::ApiHandle,
    article_store::ArticleStoreContext,
    components::{
        article_form_modal::ArticleFormModal,
        article_listing::ArticleListing,
        confirm_dialog::ConfirmDialog,
        error_banner::ErrorBanner,
        icons::{Icon, IconName},
        loading_spinner::{LoadingSpinner, SpinnerSize},
        photo_lightbox::PhotoLightbox,
        toast::Toast,
    },
    hooks::use_article_store,
};

#[derive(Debug, Clone, PartialEq)]
struct DashboardModel(DashboardState<File>);

impl Reducible for DashboardModel {
    type Action = DashboardAction<File>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = self.0.clone();
        next.apply(action);
        Rc::new(DashboardModel(next))
    }
}

fn spawn_refresh(api: ApiHandle, store: ArticleStoreContext) {
    wasm_bindgen_futures::spawn_local(async move {
        if let Err(err) = fetch_all(api.0.as_ref(), &store).await {
            web_sys::console::error_1(&format!("Failed to fetch articles: {}", err).into());
        }
    });
}

#[derive(Properties, PartialEq)]
pub struct DashboardPageProps {
    pub api: ApiHandle,
    pub config: DashboardConfig,
    pub media_host: AttrValue,
}

#[function_component(DashboardPage)]
pub fn dashboard_page(props: &DashboardPageProps) -> Html {
    let store = use_article_store();
    let dashboard = {
        let config = props.config.clone();
        use_reducer(move || DashboardModel(DashboardState::new(config)))
    };

    {
        let store = store.clone();
        let api = props.api.clone();
        use_effect_with((), move |_| {
            if let Some(store) = store {
                spawn_refresh(api, store);
            }
            || ()
        });
    }

    let Some(store) = store else {
        return html! {
            <ErrorBanner message={"Article store is not available".to_string()} />
        };
    };
    let state = dashboard.0.clone();
    let config = state.config().clone();
    let list = store.state();

    let on_retry = {
        let api = props.api.clone();
        let store = store.clone();
        Callback::from(move |_: ()| spawn_refresh(api.clone(), store.clone()))
    };

    let on_open_create = {
        let dashboard = dashboard.clone();
        Callback::from(move |_: MouseEvent| dashboard.dispatch(DashboardAction::OpenCreate))
    };
    let on_cancel_modal = {
        let dashboard = dashboard.clone();
        Callback::from(move |_: ()| dashboard.dispatch(DashboardAction::CancelModal))
    };
    let on_title = {
        let dashboard = dashboard.clone();
        Callback::from(move |value: String| dashboard.dispatch(DashboardAction::SetTitle(value)))
    };
    let on_summary = {
        let dashboard = dashboard.clone();
        Callback::from(move |value: String| dashboard.dispatch(DashboardAction::SetSummary(value)))
    };
    let on_content = {
        let dashboard = dashboard.clone();
        Callback::from(move |value: String| dashboard.dispatch(DashboardAction::SetContent(value)))
    };
    let on_files = {
        let dashboard = dashboard.clone();
        Callback::from(move |files: Vec<File>| dashboard.dispatch(DashboardAction::SetFiles(files)))
    };

    let on_submit = {
        let dashboard = dashboard.clone();
        let api = props.api.clone();
        let store = store.clone();
        Callback::from(move |_: ()| {
            if !dashboard.0.can_submit() {
                return;
            }
            let Some(mutation) = dashboard.0.submission() else {
                return;
            };
            let updated = matches!(mutation, Mutation::Update(..));
            dashboard.dispatch(DashboardAction::SubmitStarted);

            let dispatcher = dashboard.dispatcher();
            let api = api.clone();
            let store = store.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match run_mutation(api.0.as_ref(), &store, mutation).await {
                    Ok(()) => dispatcher.dispatch(DashboardAction::SubmitSucceeded { updated }),
                    Err(err) => {
                        web_sys::console::error_1(&format!("Failed to save article: {}", err).into());
                        dispatcher.dispatch(DashboardAction::SubmitFailed(err.to_string()));
                    },
                }
            });
        })
    };

    let start_delete = {
        let dashboard = dashboard.clone();
        let api = props.api.clone();
        let store = store.clone();
        Callback::from(move |id: ArticleId| {
            dashboard.dispatch(DashboardAction::DeleteStarted);
            let dispatcher = dashboard.dispatcher();
            let api = api.clone();
            let store = store.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let outcome = run_mutation(api.0.as_ref(), &store, Mutation::Delete(id))
                    .await
                    .map_err(|err| {
                        web_sys::console::error_1(
                            &format!("Failed to delete article {}: {}", id, err).into(),
                        );
                        err.to_string()
                    });
                dispatcher.dispatch(DashboardAction::DeleteFinished(outcome));
            });
        })
    };

    let on_delete_request = {
        let dashboard = dashboard.clone();
        let start_delete = start_delete.clone();
        let confirm_delete = config.confirm_delete;
        Callback::from(move |id: ArticleId| {
            if confirm_delete {
                dashboard.dispatch(DashboardAction::RequestDelete(id));
            } else {
                start_delete.emit(id);
            }
        })
    };
    let on_delete_confirm = {
        let dashboard = dashboard.clone();
        Callback::from(move |_: ()| {
            if dashboard.0.is_deleting() {
                return;
            }
            if let Some(Mutation::Delete(id)) = dashboard.0.pending_delete() {
                start_delete.emit(id);
            }
        })
    };
    let on_delete_cancel = {
        let dashboard = dashboard.clone();
        Callback::from(move |_: ()| dashboard.dispatch(DashboardAction::CancelDelete))
    };

    let on_edit_request = {
        let dashboard = dashboard.clone();
        Callback::from(move |article| dashboard.dispatch(DashboardAction::RequestEdit(article)))
    };
    let on_edit_confirm = {
        let dashboard = dashboard.clone();
        Callback::from(move |_: ()| dashboard.dispatch(DashboardAction::ConfirmEdit))
    };
    let on_edit_cancel = {
        let dashboard = dashboard.clone();
        Callback::from(move |_: ()| dashboard.dispatch(DashboardAction::CancelEdit))
    };

    let on_preview = config.lightbox.then(|| {
        let dashboard = dashboard.clone();
        Callback::from(move |src: String| dashboard.dispatch(DashboardAction::OpenPreview(src)))
    });
    let on_preview_close = {
        let dashboard = dashboard.clone();
        Callback::from(move |_: ()| dashboard.dispatch(DashboardAction::ClosePreview))
    };
    let on_toast_close = {
        let dashboard = dashboard.clone();
        Callback::from(move |_: ()| dashboard.dispatch(DashboardAction::DismissNotification))
    };

    let title_of = |id: ArticleId| {
        list.articles()
            .iter()
            .find(|article| article.id == id)
            .map(|article| article.title.clone())
            .unwrap_or_else(|| format!("#{}", id))
    };

    let initial_load = list.articles().is_empty()
        && matches!(list.status(), FetchStatus::Idle | FetchStatus::Loading);
    let refreshing = list.is_loading() && !list.articles().is_empty();
    let busy = state.is_submitting() || state.is_deleting();

    html! {
        <main class="mx-auto max-w-6xl space-y-6 p-4" data-status={list.status().as_str()}>
            <header class="flex flex-wrap items-center justify-between gap-4">
                <h1 class="text-2xl font-bold">{"Articles Admin"}</h1>
                <div class="flex items-center gap-3">
                    if refreshing {
                        <LoadingSpinner size={SpinnerSize::Small} label="Refreshing..." inline_label=true />
                    }
                    <button
                        type="button"
                        class={classes!(
                            "inline-flex",
                            "items-center",
                            "gap-2",
                            "rounded-lg",
                            "bg-[var(--primary)]",
                            "px-4",
                            "py-2",
                            "text-sm",
                            "font-semibold",
                            "text-white",
                            "hover:opacity-90"
                        )}
                        onclick={on_open_create}
                    >
                        <Icon name={IconName::Plus} size={16} />
                        {"Create"}
                    </button>
                </div>
            </header>

            if list.status() == FetchStatus::Failed {
                <ErrorBanner message={list.error().unwrap_or_default().to_string()} on_retry={on_retry} />
            }

            if initial_load {
                <div class="flex justify-center">
                    <LoadingSpinner label="Loading articles..." inline_label=true />
                </div>
            } else {
                <ArticleListing
                    articles={list.articles().to_vec()}
                    layout={config.layout}
                    media_host={props.media_host.clone()}
                    photo_limit={config.photo_preview_limit}
                    on_edit={on_edit_request}
                    on_delete={on_delete_request}
                    on_preview={on_preview}
                    busy={busy}
                />
            }

            if state.is_modal_open() {
                <ArticleFormModal
                    draft={state.draft().clone()}
                    editing={state.editing_id().is_some()}
                    submitting={state.is_submitting()}
                    can_submit={state.can_submit()}
                    on_title={on_title}
                    on_summary={on_summary}
                    on_content={on_content}
                    on_files={on_files}
                    on_submit={on_submit}
                    on_cancel={on_cancel_modal}
                />
            }

            if let Some(article) = state.edit_candidate() {
                <ConfirmDialog
                    title="Edit article"
                    message={format!("Open \"{}\" for editing?", article.title)}
                    confirm_label="Edit"
                    on_confirm={on_edit_confirm}
                    on_cancel={on_edit_cancel}
                />
            }

            if let Some(id) = state.delete_target() {
                <ConfirmDialog
                    title="Delete article"
                    message={format!("Delete \"{}\"? This cannot be undone.", title_of(id))}
                    confirm_label="Delete"
                    danger=true
                    busy={state.is_deleting()}
                    on_confirm={on_delete_confirm}
                    on_cancel={on_delete_cancel}
                />
            }

            if let Some(src) = state.preview() {
                <PhotoLightbox src={src.to_string()} on_close={on_preview_close} />
            }

            if let Some(notification) = state.notification() {
                <Toast
                    key={state.notification_seq()}
                    notification={notification.clone()}
                    on_close={on_toast_close}
                />
            }
        </main>
    }
}
