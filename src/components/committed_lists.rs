//! Committed Lists Component
//!
//! Scrollable column of saved list cards.

use leptos::prelude::*;

use crate::components::ListCard;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn CommittedLists() -> impl IntoView {
    let store = use_app_store();
    let ids = move || store.checklist().with(|c| c.lists().iter().map(|list| list.id).collect::<Vec<_>>());

    view! {
        <div class="committed-lists">
            <For
                each=ids
                key=|id| *id
                children=move |id| view! { <ListCard id=id /> }
            />
            <div class="list-footer" />
        </div>
    }
}
