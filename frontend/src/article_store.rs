use std::{cell::Cell, rc::Rc};

use article_admin_shared::store::{ArticleListState, ArticleStoreHandle, StoreAction};
use yew::prelude::*;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArticleStore(pub ArticleListState);

impl Reducible for ArticleStore {
    type Action = StoreAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = self.0.clone();
        next.apply(action);
        Rc::new(ArticleStore(next))
    }
}

/// Reducer handle plus the request id counter, shared through context.
#[derive(Clone)]
pub struct ArticleStoreContext {
    state: UseReducerHandle<ArticleStore>,
    ids: Rc<Cell<u64>>,
}

impl PartialEq for ArticleStoreContext {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state && Rc::ptr_eq(&self.ids, &other.ids)
    }
}

impl ArticleStoreContext {
    pub fn state(&self) -> &ArticleListState {
        &self.state.0
    }
}

impl ArticleStoreHandle for ArticleStoreContext {
    fn next_request_id(&self) -> u64 {
        let next = self.ids.get() + 1;
        self.ids.set(next);
        next
    }

    fn dispatch(&self, action: StoreAction) {
        self.state.dispatch(action);
    }
}

#[derive(Properties, PartialEq)]
pub struct ArticleStoreProviderProps {
    pub children: Html,
}

#[function_component(ArticleStoreProvider)]
pub fn article_store_provider(props: &ArticleStoreProviderProps) -> Html {
    let state = use_reducer(ArticleStore::default);
    let ids = use_memo((), |_| Cell::new(0_u64));
    let context = ArticleStoreContext {
        state,
        ids,
    };
    html! {
        <ContextProvider<ArticleStoreContext> context={context}>
            {props.children.clone()}
        </ContextProvider<ArticleStoreContext>>
    }
}
