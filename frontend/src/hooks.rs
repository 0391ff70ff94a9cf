use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{window, KeyboardEvent};
use yew::prelude::*;

use crate::article_store::ArticleStoreContext;

/// Store provided by `ArticleStoreProvider`.
///
/// Returns `None` outside the provider so callers can render nothing
/// instead of panicking.
#[hook]
pub fn use_article_store() -> Option<ArticleStoreContext> {
    use_context::<ArticleStoreContext>()
}

/// Calls `on_escape` when Escape is pressed, while `active` is true.
///
/// The `keydown` listener lives on `window` and is removed as soon as
/// `active` turns false or the component unmounts.
#[hook]
pub fn use_escape_key(active: bool, on_escape: Callback<()>) {
    use_effect_with((active, on_escape), move |(active, on_escape)| {
        let keydown_listener_opt = if *active {
            let on_escape = on_escape.clone();
            let listener = Closure::wrap(Box::new(move |event: KeyboardEvent| {
                if event.key() == "Escape" {
                    on_escape.emit(());
                }
            }) as Box<dyn FnMut(_)>);

            if let Some(win) = window() {
                let _ = win
                    .add_event_listener_with_callback("keydown", listener.as_ref().unchecked_ref());
            }
            Some(listener)
        } else {
            None
        };

        move || {
            if let Some(listener) = keydown_listener_opt {
                if let Some(win) = window() {
                    let _ = win.remove_event_listener_with_callback(
                        "keydown",
                        listener.as_ref().unchecked_ref(),
                    );
                }
            }
        }
    });
}
