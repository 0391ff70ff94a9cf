use yew::prelude::*;

use crate::components::icons::{Icon, IconName};

#[derive(Properties, PartialEq)]
pub struct ErrorBannerProps {
    pub message: String,
    #[prop_or_default]
    pub on_retry: Option<Callback<()>>,
}

/// Persistent banner for a failed list fetch. Stays until the next fetch
/// succeeds.
#[function_component(ErrorBanner)]
pub fn error_banner(props: &ErrorBannerProps) -> Html {
    if props.message.trim().is_empty() {
        return Html::default();
    }

    let wrapper_classes = classes!(
        "error-banner",
        "flex",
        "items-start",
        "gap-3",
        "rounded-2xl",
        "px-5",
        "py-4",
        "text-sm",
        "shadow-xl",
        "w-full",
        "bg-red-500/10",
        "text-red-800",
        "dark:text-red-200"
    );

    let retry_button = props.on_retry.as_ref().map(|on_retry| {
        let on_retry = on_retry.clone();
        let onclick = Callback::from(move |_| on_retry.emit(()));
        html! {
            <button
                type="button"
                class={classes!(
                    "ml-4",
                    "rounded-lg",
                    "border",
                    "border-current",
                    "px-3",
                    "py-1",
                    "text-sm",
                    "font-semibold",
                    "transition",
                    "duration-200",
                    "hover:bg-black/10",
                    "dark:hover:bg-white/15"
                )}
                {onclick}
            >
                {"Retry"}
            </button>
        }
    });

    html! {
        <div class={wrapper_classes} role="alert" aria-live="assertive">
            <Icon name={IconName::AlertTriangle} size={22} />
            <div class="flex-1 space-y-1">
                <p class="font-semibold text-base">{"Could not load articles"}</p>
                <p>{ props.message.clone() }</p>
            </div>
            { retry_button.unwrap_or_default() }
        </div>
    }
}
