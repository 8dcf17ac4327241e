//! Checklist Editor App
//!
//! Editor panel on top, committed list cards below.

use leptos::prelude::*;
use reactive_stores::Store;
use checklist_core::{Action, EntryOptions, ItemId};
use leptos_dragdrop::{bind_global_mouseup, create_dnd_signals, resolve_slot};

use crate::components::{CommittedLists, EditorPanel};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::store::{store_dispatch, AppState, AppStateStoreFields};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let options = EntryOptions {
        item_entry: config.item_entry,
        sub_field: config.sub_field,
    };
    let store = Store::new(AppState::new(options));
    provide_context(store);
    let panel_open = signal(config.start_expanded);
    provide_context(AppContext::new(config, panel_open));

    // Drag-and-drop for in-progress rows; document listeners are bound once
    let dnd = create_dnd_signals();
    bind_global_mouseup(dnd, move |dragged, target| {
        let order: Vec<u64> = store
            .checklist()
            .with_untracked(|c| c.pending().iter().map(|item| item.id.get()).collect());
        if let Some(slot) = resolve_slot(&order, dragged, target) {
            log::debug!(target: "dnd", "drop {} at slot {}", dragged, slot);
            store_dispatch(&store, Action::MoveItem(ItemId::new(dragged), slot));
        }
    });

    let list_count = move || {
        store.checklist().with(|c| match c.lists().len() {
            1 => "1 list".to_string(),
            n => format!("{} lists", n),
        })
    };

    view! {
        <main class="checklist-app">
            <EditorPanel dnd=dnd />
            <CommittedLists />
            <p class="list-count">{list_count}</p>
        </main>
    }
}
