use yew::prelude::*;

use crate::{
    components::loading_spinner::{LoadingSpinner, SpinnerSize},
    hooks::use_escape_key,
};

#[derive(Properties, PartialEq)]
pub struct ConfirmDialogProps {
    pub title: AttrValue,
    pub message: AttrValue,
    pub confirm_label: AttrValue,
    pub on_confirm: Callback<()>,
    pub on_cancel: Callback<()>,
    #[prop_or_default]
    pub danger: bool,
    /// Request in flight: buttons disabled, spinner on confirm.
    #[prop_or_default]
    pub busy: bool,
}

/// Non-blocking yes/no dialog. Escape and backdrop clicks cancel unless busy.
#[function_component(ConfirmDialog)]
pub fn confirm_dialog(props: &ConfirmDialogProps) -> Html {
    let busy = props.busy;

    let cancel = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_: ()| {
            if !busy {
                on_cancel.emit(());
            }
        })
    };
    use_escape_key(true, cancel.clone());

    let on_backdrop = {
        let cancel = cancel.clone();
        Callback::from(move |_: MouseEvent| cancel.emit(()))
    };
    let stop = Callback::from(|e: MouseEvent| e.stop_propagation());
    let on_cancel_click = {
        let cancel = cancel.clone();
        Callback::from(move |_: MouseEvent| cancel.emit(()))
    };
    let on_confirm_click = {
        let on_confirm = props.on_confirm.clone();
        Callback::from(move |_: MouseEvent| {
            if !busy {
                on_confirm.emit(());
            }
        })
    };

    let confirm_class = if props.danger {
        classes!("bg-red-600", "hover:bg-red-700", "text-white")
    } else {
        classes!("bg-[var(--primary)]", "hover:opacity-90", "text-white")
    };

    html! {
        <div
            class={classes!(
                "fixed",
                "inset-0",
                "z-[80]",
                "flex",
                "items-center",
                "justify-center",
                "bg-black/50",
                "p-4",
                "backdrop-blur-sm"
            )}
            onclick={on_backdrop}
        >
            <div
                class={classes!(
                    "w-full",
                    "max-w-md",
                    "rounded-2xl",
                    "bg-[var(--surface)]",
                    "p-6",
                    "shadow-2xl",
                    "space-y-4"
                )}
                role="alertdialog"
                aria-modal="true"
                aria-labelledby="confirm-dialog-title"
                onclick={stop}
            >
                <h2 id="confirm-dialog-title" class="text-lg font-semibold">{ props.title.clone() }</h2>
                <p class="text-sm text-[var(--muted)]">{ props.message.clone() }</p>
                <div class="flex justify-end gap-3">
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
                        disabled={busy}
                        onclick={on_cancel_click}
                    >
                        {"Cancel"}
                    </button>
                    <button
                        type="button"
                        class={classes!(
                            "inline-flex",
                            "items-center",
                            "gap-2",
                            "rounded-lg",
                            "px-4",
                            "py-2",
                            "text-sm",
                            "font-semibold",
                            "disabled:opacity-50",
                            confirm_class
                        )}
                        disabled={busy}
                        onclick={on_confirm_click}
                    >
                        if busy {
                            <LoadingSpinner size={SpinnerSize::Small} />
                        }
                        { props.confirm_label.clone() }
                    </button>
                </div>
            </div>
        </div>
    }
}
