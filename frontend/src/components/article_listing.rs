use article_admin_shared::{
    dashboard::ListingLayout,
    display::{photo_src, photo_strip, summary_excerpt},
    Article, ArticleId, Photo,
};
use yew::prelude::*;

use crate::{
    components::icons::{Icon, IconButton, IconName},
    utils::published_label,
};

const TABLE_SUMMARY_CHARS: usize = 80;

#[derive(Properties, PartialEq)]
pub struct PhotoThumbsProps {
    pub photos: Vec<Photo>,
    pub alt: AttrValue,
    pub media_host: AttrValue,
    #[prop_or_default]
    pub limit: Option<usize>,
    #[prop_or_default]
    pub on_preview: Option<Callback<String>>,
    #[prop_or(false)]
    pub large: bool,
}

/// Thumbnail strip with a `+N` badge and an empty placeholder.
#[function_component(PhotoThumbs)]
pub fn photo_thumbs(props: &PhotoThumbsProps) -> Html {
    let strip = photo_strip(&props.photos, props.limit);
    let size = if props.large {
        classes!("w-32", "h-20")
    } else {
        classes!("w-12", "h-12")
    };

    if strip.is_empty() {
        return html! {
            <span
                class={classes!(
                    "inline-flex",
                    "items-center",
                    "justify-center",
                    "rounded-md",
                    "bg-[var(--surface-alt)]",
                    "text-[var(--muted)]",
                    size
                )}
                title="No photos"
            >
                <Icon name={IconName::Image} size={18} />
            </span>
        };
    }

    html! {
        <div class="flex flex-wrap items-center gap-2">
            { for strip.shown.iter().map(|photo| {
                let src = photo_src(&props.media_host, &photo.url);
                let img = html! {
                    <img
                        class={classes!("rounded-md", "object-cover", size.clone())}
                        src={src.clone()}
                        alt={props.alt.clone()}
                        loading="lazy"
                    />
                };
                match props.on_preview.clone() {
                    Some(on_preview) => {
                        let onclick = Callback::from(move |_| on_preview.emit(src.clone()));
                        html! {
                            <button type="button" class="cursor-zoom-in" aria-label="Preview photo" {onclick}>
                                { img }
                            </button>
                        }
                    },
                    None => img,
                }
            }) }
            if let Some(label) = strip.overflow_label() {
                <span class="rounded-full bg-[var(--surface-alt)] px-2 py-0.5 text-xs font-semibold">
                    { label }
                </span>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ArticleListingProps {
    pub articles: Vec<Article>,
    pub layout: ListingLayout,
    pub media_host: AttrValue,
    #[prop_or_default]
    pub photo_limit: Option<usize>,
    pub on_edit: Callback<Article>,
    pub on_delete: Callback<ArticleId>,
    #[prop_or_default]
    pub on_preview: Option<Callback<String>>,
    /// Disables row actions while a mutation is in flight.
    #[prop_or_default]
    pub busy: bool,
}

struct RowActions {
    edit: Callback<MouseEvent>,
    delete: Callback<MouseEvent>,
}

fn row_actions(props: &ArticleListingProps, article: &Article) -> RowActions {
    let edit = {
        let on_edit = props.on_edit.clone();
        let article = article.clone();
        Callback::from(move |_| on_edit.emit(article.clone()))
    };
    let delete = {
        let on_delete = props.on_delete.clone();
        let id = article.id;
        Callback::from(move |_| on_delete.emit(id))
    };
    RowActions { edit, delete }
}

fn action_buttons(actions: RowActions, busy: bool) -> Html {
    html! {
        <div class="flex items-center gap-2">
            <IconButton icon={IconName::Pencil} label="Edit" onclick={actions.edit} disabled={busy} />
            <IconButton
                icon={IconName::Trash}
                label="Delete"
                onclick={actions.delete}
                danger=true
                disabled={busy}
            />
        </div>
    }
}

fn thumbs(props: &ArticleListingProps, article: &Article, large: bool) -> Html {
    html! {
        <PhotoThumbs
            photos={article.photos.clone()}
            alt={article.title.clone()}
            media_host={props.media_host.clone()}
            limit={props.photo_limit}
            on_preview={props.on_preview.clone()}
            {large}
        />
    }
}

fn render_cards(props: &ArticleListingProps) -> Html {
    html! {
        <div class="grid gap-4 sm:grid-cols-2 lg:grid-cols-3">
            { for props.articles.iter().map(|article| html! {
                <article
                    key={article.id}
                    class="flex flex-col gap-3 rounded-2xl border border-[var(--border)] bg-[var(--surface)] p-4 shadow-sm"
                >
                    { thumbs(props, article, true) }
                    <h3 class="text-lg font-semibold">{ &article.title }</h3>
                    if !article.summary.is_empty() {
                        <p class="text-sm text-[var(--muted)]">{ &article.summary }</p>
                    }
                    <div class="mt-auto flex items-center justify-between">
                        <span class="text-xs text-[var(--muted)]">{ published_label(article) }</span>
                        { action_buttons(row_actions(props, article), props.busy) }
                    </div>
                </article>
            }) }
        </div>
    }
}

fn render_list(props: &ArticleListingProps) -> Html {
    html! {
        <ul class="space-y-4">
            { for props.articles.iter().map(|article| html! {
                <li key={article.id} class="rounded border border-[var(--border)] p-3">
                    <div class="flex items-start justify-between gap-4">
                        <h2 class="font-semibold">{ &article.title }</h2>
                        { action_buttons(row_actions(props, article), props.busy) }
                    </div>
                    <div class="my-2">{ thumbs(props, article, true) }</div>
                    <p>{ &article.summary }</p>
                </li>
            }) }
        </ul>
    }
}

fn render_table(props: &ArticleListingProps) -> Html {
    html! {
        <div class="overflow-x-auto rounded-2xl border border-[var(--border)]">
            <table class="min-w-full text-sm">
                <thead class="bg-[var(--surface-alt)] text-left text-xs uppercase tracking-[0.06em]">
                    <tr>
                        <th class="px-4 py-3">{"ID"}</th>
                        <th class="px-4 py-3">{"Title"}</th>
                        <th class="px-4 py-3">{"Summary"}</th>
                        <th class="px-4 py-3">{"Photos"}</th>
                        <th class="px-4 py-3">{"Published"}</th>
                        <th class="px-4 py-3">{"Actions"}</th>
                    </tr>
                </thead>
                <tbody>
                    { for props.articles.iter().map(|article| html! {
                        <tr key={article.id} class="border-t border-[var(--border)] align-top">
                            <td class="px-4 py-3 font-mono text-xs">{ article.id }</td>
                            <td class="px-4 py-3 font-medium">{ &article.title }</td>
                            <td class="px-4 py-3 text-[var(--muted)]">
                                { summary_excerpt(&article.summary, TABLE_SUMMARY_CHARS) }
                            </td>
                            <td class="px-4 py-3">{ thumbs(props, article, false) }</td>
                            <td class="px-4 py-3 whitespace-nowrap">{ published_label(article) }</td>
                            <td class="px-4 py-3">
                                { action_buttons(row_actions(props, article), props.busy) }
                            </td>
                        </tr>
                    }) }
                </tbody>
            </table>
        </div>
    }
}

#[function_component(ArticleListing)]
pub fn article_listing(props: &ArticleListingProps) -> Html {
    if props.articles.is_empty() {
        return html! {
            <div class="flex flex-col items-center gap-2 py-16 text-[var(--muted)]">
                <Icon name={IconName::FileText} size={40} />
                <p>{"No articles yet."}</p>
            </div>
        };
    }

    match props.layout {
        ListingLayout::Cards => render_cards(props),
        ListingLayout::List => render_list(props),
        ListingLayout::Table => render_table(props),
    }
}
