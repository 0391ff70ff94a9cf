use article_admin_shared::draft::FormDraft;
use web_sys::{File, HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::{
    components::{
        icons::{Icon, IconName},
        loading_spinner::{LoadingSpinner, SpinnerSize},
    },
    hooks::use_escape_key,
    utils::selected_files,
};

#[derive(Properties, PartialEq)]
pub struct ArticleFormModalProps {
    pub draft: FormDraft<File>,
    /// Editing an existing article rather than creating one.
    pub editing: bool,
    pub submitting: bool,
    /// Required fields filled and nothing in flight.
    pub can_submit: bool,
    pub on_title: Callback<String>,
    pub on_summary: Callback<String>,
    pub on_content: Callback<String>,
    pub on_files: Callback<Vec<File>>,
    pub on_submit: Callback<()>,
    pub on_cancel: Callback<()>,
}

fn input_class() -> Classes {
    classes!(
        "w-full",
        "rounded-lg",
        "border",
        "border-[var(--border)]",
        "bg-[var(--surface)]",
        "px-3",
        "py-2",
        "text-sm",
        "focus:outline-none",
        "focus:ring-2",
        "focus:ring-[var(--primary)]"
    )
}

#[function_component(ArticleFormModal)]
pub fn article_form_modal(props: &ArticleFormModalProps) -> Html {
    let submitting = props.submitting;
    let can_submit = props.can_submit;

    let cancel = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_: ()| {
            if !submitting {
                on_cancel.emit(());
            }
        })
    };
    use_escape_key(true, cancel.clone());

    let on_title_input = {
        let on_title = props.on_title.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_title.emit(input.value());
        })
    };
    let on_summary_input = {
        let on_summary = props.on_summary.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_summary.emit(input.value());
        })
    };
    let on_content_input = {
        let on_content = props.on_content.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            on_content.emit(input.value());
        })
    };
    let on_files_change = {
        let on_files = props.on_files.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_files.emit(selected_files(&input));
        })
    };
    let on_form_submit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if can_submit {
                on_submit.emit(());
            }
        })
    };
    let on_cancel_click = {
        let cancel = cancel.clone();
        Callback::from(move |_: MouseEvent| cancel.emit(()))
    };

    let heading = if props.editing { "Edit article" } else { "Create article" };
    let submit_label = if props.editing { "Save changes" } else { "Create" };
    let draft = &props.draft;

    html! {
        <div
            class={classes!(
                "fixed",
                "inset-0",
                "z-[70]",
                "flex",
                "items-center",
                "justify-center",
                "bg-black/50",
                "p-4",
                "backdrop-blur-sm"
            )}
        >
            <form
                class={classes!(
                    "w-full",
                    "max-w-2xl",
                    "max-h-[90vh]",
                    "overflow-y-auto",
                    "rounded-2xl",
                    "bg-[var(--surface)]",
                    "p-6",
                    "shadow-2xl",
                    "space-y-4"
                )}
                role="dialog"
                aria-modal="true"
                aria-labelledby="article-form-title"
                onsubmit={on_form_submit}
            >
                <div class="flex items-center justify-between">
                    <h2 id="article-form-title" class="text-xl font-semibold">{ heading }</h2>
                    <button
                        type="button"
                        class="rounded-full p-1 hover:bg-[var(--surface-alt)]"
                        aria-label="Close form"
                        disabled={submitting}
                        onclick={on_cancel_click.clone()}
                    >
                        <Icon name={IconName::X} size={18} />
                    </button>
                </div>

                <label class="block space-y-1">
                    <span class="text-sm font-medium">{"Title"}</span>
                    <input
                        type="text"
                        class={input_class()}
                        placeholder="Title"
                        required=true
                        value={draft.title.clone()}
                        oninput={on_title_input}
                    />
                </label>

                <label class="block space-y-1">
                    <span class="text-sm font-medium">{"Summary"}</span>
                    <input
                        type="text"
                        class={input_class()}
                        placeholder="Summary"
                        value={draft.summary.clone()}
                        oninput={on_summary_input}
                    />
                </label>

                <label class="block space-y-1">
                    <span class="text-sm font-medium">{"Content"}</span>
                    <textarea
                        class={classes!(input_class(), "min-h-[10rem]")}
                        placeholder="Content"
                        required=true
                        value={draft.content.clone()}
                        oninput={on_content_input}
                    />
                </label>

                <label class="block space-y-1">
                    <span class="text-sm font-medium">{"Photos"}</span>
                    <input
                        type="file"
                        multiple=true
                        accept="image/*"
                        class="block text-sm"
                        onchange={on_files_change}
                    />
                </label>

                if !draft.files.is_empty() {
                    <ul class="flex flex-wrap gap-2 text-xs">
                        { for draft.files.iter().map(|file| html! {
                            <li class="rounded-full bg-[var(--surface-alt)] px-3 py-1">{ file.name() }</li>
                        }) }
                    </ul>
                }

                <div class="flex justify-end gap-3 pt-2">
                    <button
                        type="button"
                        class={classes!(
                            "rounded-lg",
                            "border",
                            "border-[var(--border)]",
                            "px-4",
                            "py-2",
                            "text-sm",
                            "hover:bg-[var(--surface-alt)]",
                            "disabled:opacity-50"
                        )}
                        disabled={submitting}
                        onclick={on_cancel_click}
                    >
                        {"Cancel"}
                    </button>
                    <button
                        type="submit"
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
                            "hover:opacity-90",
                            "disabled:opacity-50"
                        )}
                        disabled={!can_submit}
                    >
                        if submitting {
                            <LoadingSpinner size={SpinnerSize::Small} label="Saving..." />
                        }
                        { submit_label }
                    </button>
                </div>
            </form>
        </div>
    }
}
