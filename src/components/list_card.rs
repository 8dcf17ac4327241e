//! List Card Component
//!
//! A committed list. Clicking the title loads it into the editor.

use leptos::prelude::*;
use checklist_core::{Action, EditMode, ListId};

use crate::components::DeleteConfirmButton;
use crate::context::AppContext;
use crate::store::{store_dispatch, use_app_store, AppStateStoreFields};

#[component]
pub fn ListCard(id: ListId) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();
    let untitled = ctx.untitled_label();

    let list = Memo::new(move |_| store.checklist().with(|c| c.list(id).cloned()));
    let is_editing = Memo::new(move |_| store.checklist().with(|c| c.mode() == EditMode::Editing(id)));

    let title = move || list.get().map(|l| l.title).unwrap_or_default();
    let is_untitled = move || title().is_empty();
    let progress = move || {
        list.get()
            .map(|l| format!("{}/{}", l.checked_count(), l.items.len()))
            .unwrap_or_default()
    };
    let items = move || list.get().map(|l| l.items).unwrap_or_default();

    let load_for_edit = move |_| {
        store_dispatch(&store, Action::LoadForEdit(id));
        ctx.set_panel_open(true);
    };

    view! {
        <article class=move || if is_editing.get() { "list-card editing" } else { "list-card" }>
            <header class="list-card-header">
                <h3 class="list-card-title" class:untitled=is_untitled on:click=load_for_edit>
                    {move || if is_untitled() { untitled.clone() } else { title() }}
                </h3>
                <span class="list-card-progress">{progress}</span>
                <DeleteConfirmButton
                    button_class="icon-btn danger"
                    on_confirm=Callback::new(move |()| store_dispatch(&store, Action::RemoveList(id)))
                />
            </header>
            <div class="list-card-items">
                <For
                    each=items
                    // Key on every displayed field so edits re-render the row
                    key=|item| (item.id, item.checked, item.value.clone(), item.sub_value.clone())
                    children=move |item| {
                        let item_id = item.id;
                        view! {
                            <label class=if item.checked { "list-card-item checked" } else { "list-card-item" }>
                                <input
                                    type="checkbox"
                                    prop:checked=item.checked
                                    on:change=move |_| store_dispatch(&store, Action::ToggleListItem(id, item_id))
                                />
                                <span class="item-value">{item.value.clone()}</span>
                                <span class="item-sub-value">{item.sub_value.clone().unwrap_or_default()}</span>
                            </label>
                        }
                    }
                />
            </div>
        </article>
    }
}
