//! Browser dashboard for managing articles against the article REST service.

mod api;
mod article_store;
mod components;
mod config;
mod hooks;
mod pages;
mod utils;

use yew::prelude::*;

use crate::{article_store::ArticleStoreProvider, pages::dashboard::DashboardPage};

#[function_component(App)]
fn app() -> Html {
    let settings = use_memo((), |_| config::app_config());
    let api = {
        let settings = settings.clone();
        use_memo((), move |_| api::build_api(&settings))
    };
    let dashboard_config = use_memo((), |_| config::dashboard_config());

    html! {
        <ArticleStoreProvider>
            <DashboardPage
                api={(*api).clone()}
                config={(*dashboard_config).clone()}
                media_host={settings.media_host().to_string()}
            />
        </ArticleStoreProvider>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
