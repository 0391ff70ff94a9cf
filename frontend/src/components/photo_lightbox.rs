use yew::prelude::*;

use crate::{
    components::icons::{Icon, IconName},
    hooks::use_escape_key,
};

#[derive(Properties, PartialEq)]
pub struct PhotoLightboxProps {
    pub src: AttrValue,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub alt: AttrValue,
}

#[function_component(PhotoLightbox)]
pub fn photo_lightbox(props: &PhotoLightboxProps) -> Html {
    let load_failed = use_state(|| false);

    {
        let load_failed = load_failed.clone();
        use_effect_with(props.src.clone(), move |_| {
            load_failed.set(false);
            || ()
        });
    }

    use_escape_key(true, props.on_close.clone());

    let close_lightbox_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let on_error = {
        let load_failed = load_failed.clone();
        Callback::from(move |_: Event| load_failed.set(true))
    };
    let stop = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div
            class={classes!(
                "fixed",
                "inset-0",
                "z-[100]",
                "flex",
                "items-center",
                "justify-center",
                "bg-black/80",
                "p-4",
                "text-white",
                "backdrop-blur-sm",
                "transition",
                "dark:bg-black/80"
            )}
            role="dialog"
            aria-modal="true"
            onclick={close_lightbox_click.clone()}
        >
            <button
                type="button"
                class={classes!(
                    "absolute",
                    "right-4",
                    "top-4",
                    "z-[101]",
                    "rounded-full",
                    "bg-black/70",
                    "p-2",
                    "leading-none",
                    "text-white",
                    "hover:bg-black"
                )}
                aria-label="Close preview"
                onclick={close_lightbox_click}
            >
                <Icon name={IconName::X} size={20} />
            </button>
            if *load_failed {
                <div class="flex flex-col items-center gap-3 text-white/80" onclick={stop.clone()}>
                    <Icon name={IconName::Image} size={48} />
                    <p class="text-sm">{"Image could not be loaded"}</p>
                    <p class="text-xs break-all">{ props.src.clone() }</p>
                </div>
            } else {
                <img
                    class="max-h-[90vh] max-w-[90vw] rounded-lg object-contain shadow-2xl"
                    src={props.src.clone()}
                    alt={props.alt.clone()}
                    onclick={stop}
                    onerror={on_error}
                />
            }
        </div>
    }
}
