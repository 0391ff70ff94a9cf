use article_admin_shared::notification::{Notification, NotificationKind};
use yew::prelude::*;
use yew_hooks::prelude::use_timeout;

use crate::components::icons::{Icon, IconName};

const AUTO_DISMISS_MS: u32 = 3000;

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    pub notification: Notification,
    pub on_close: Callback<()>,
}

/// Closes itself after a few seconds. Key it per notification so a repeated
/// message restarts the timer.
#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    let dismiss = {
        let on_close = props.on_close.clone();
        Callback::from(move |_| on_close.emit(()))
    };

    {
        let dismiss = dismiss.clone();
        use_timeout(move || dismiss.emit(()), AUTO_DISMISS_MS);
    }

    let (icon, tone) = match props.notification.kind {
        NotificationKind::Success => (
            IconName::CheckCircle,
            classes!("bg-emerald-600", "text-white"),
        ),
        NotificationKind::Error => (IconName::AlertTriangle, classes!("bg-red-600", "text-white")),
    };

    let close_button = {
        let dismiss = dismiss.clone();
        Callback::from(move |_| dismiss.emit(()))
    };

    html! {
        <div
            class={classes!(
                "toast",
                "fixed",
                "bottom-6",
                "right-6",
                "z-[90]",
                "flex",
                "items-start",
                "gap-3",
                "rounded-2xl",
                "px-5",
                "py-4",
                "text-sm",
                "shadow-xl",
                "max-w-md",
                tone
            )}
            role={if props.notification.is_error() { "alert" } else { "status" }}
            aria-live="assertive"
        >
            <Icon name={icon} size={20} />
            <p class="flex-1">{ props.notification.message.clone() }</p>
            <button
                type="button"
                class={classes!(
                    "ml-2",
                    "inline-flex",
                    "h-6",
                    "w-6",
                    "items-center",
                    "justify-center",
                    "rounded-full",
                    "bg-transparent",
                    "transition",
                    "duration-200",
                    "hover:bg-white/20"
                )}
                aria-label="Dismiss notification"
                onclick={close_button}
            >
                <Icon name={IconName::X} size={14} />
            </button>
        </div>
    }
}
