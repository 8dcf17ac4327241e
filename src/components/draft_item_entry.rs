//! Draft Item Entry Component
//!
//! Inputs for the next in-progress item. Enter, or leaving the entry row,
//! adds the item once the required text is present.

use leptos::html::Div;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use checklist_core::{Action, DraftField};

use crate::components::is_confirm_key;
use crate::store::{store_dispatch, use_app_store, AppStateStoreFields};

#[component]
pub fn DraftItemEntry() -> impl IntoView {
    let store = use_app_store();

    let item = move || store.checklist().with(|c| c.draft().item.clone());
    let sub_item = move || store.checklist().with(|c| c.draft().sub_item.clone());
    let checked = move || store.checklist().with(|c| c.draft().checked);
    let has_item_text = Memo::new(move |_| store.checklist().with(|c| !c.draft().item.is_empty()));
    let sub_field = Memo::new(move |_| store.checklist().with(|c| c.options().sub_field));

    let add_on_enter = move |ev: web_sys::KeyboardEvent| {
        if is_confirm_key(&ev) {
            ev.prevent_default();
            store_dispatch(&store, Action::AddItem);
        }
    };
    // Moving focus between controls of the row (checkbox, sub-item input)
    // must not add the item before its checked flag is set
    let row_ref = NodeRef::<Div>::new();
    let add_on_blur = move |ev: web_sys::FocusEvent| {
        let stays_in_row = ev
            .related_target()
            .and_then(|next| next.dyn_into::<web_sys::Node>().ok())
            .zip(row_ref.get_untracked())
            .is_some_and(|(next, row)| row.contains(Some(&next)));
        if !stays_in_row {
            store_dispatch(&store, Action::AddItem);
        }
    };

    view! {
        <div class="entry-row" node_ref=row_ref>
            <span class="grip">"⋮⋮"</span>
            <Show
                when=move || has_item_text.get()
                fallback=|| view! { <span class="plus">"+"</span> }
            >
                <input
                    type="checkbox"
                    class="entry-check"
                    prop:checked=checked
                    on:mousedown=|ev: web_sys::MouseEvent| ev.prevent_default()
                    on:change=move |ev| {
                        store_dispatch(&store, Action::SetField(DraftField::Checked, event_target_checked(&ev).into()));
                    }
                />
            </Show>
            <input
                type="text"
                placeholder="Add item..."
                autocapitalize="none"
                prop:value=item
                on:input=move |ev| {
                    store_dispatch(&store, Action::SetField(DraftField::Item, event_target_value(&ev).into()));
                }
                on:keydown=add_on_enter
                on:blur=add_on_blur
            />
            <Show when=move || sub_field.get()>
                <input
                    type="text"
                    placeholder="Add field..."
                    autocapitalize="none"
                    prop:value=sub_item
                    on:input=move |ev| {
                        store_dispatch(&store, Action::SetField(DraftField::SubItem, event_target_value(&ev).into()));
                    }
                    on:keydown=add_on_enter
                    on:blur=add_on_blur
                />
            </Show>
            // Keep focus in the input so clearing does not add the item first
            <button
                class="icon-btn danger"
                title="Clear"
                on:mousedown=|ev: web_sys::MouseEvent| ev.prevent_default()
                on:click=move |_| store_dispatch(&store, Action::ClearItemInput)
            >
                "×"
            </button>
        </div>
    }
}
