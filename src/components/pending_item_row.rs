//! Pending Item Row Component
//!
//! One in-progress item: grip handle, checkbox, text fields and delete.

use leptos::prelude::*;
use checklist_core::{Action, ItemId};
use leptos_dragdrop::*;

use crate::store::{store_dispatch, use_app_store, AppStateStoreFields};

#[component]
pub fn PendingItemRow(dnd: DndSignals, id: ItemId) -> impl IntoView {
    let store = use_app_store();
    let raw_id = id.get();

    let item = Memo::new(move |_| store.checklist().with(|c| c.pending().get(id).cloned()));
    let sub_field = Memo::new(move |_| store.checklist().with(|c| c.options().sub_field));

    let value = move || item.get().map(|i| i.value).unwrap_or_default();
    let sub_value = move || item.get().and_then(|i| i.sub_value).unwrap_or_default();
    let checked = move || item.get().is_some_and(|i| i.checked);
    let show_sub = move || sub_field.get() || item.get().is_some_and(|i| i.sub_value.is_some());
    let input_class = move || if sub_field.get() { "row-input borderless" } else { "row-input" };

    // DnD handlers
    let on_mousedown = make_on_mousedown(dnd, raw_id);
    let on_mouseenter = make_on_item_mouseenter(dnd, raw_id);
    let on_mouseleave = make_on_mouseleave(dnd);

    let row_class = move || {
        let mut c = String::from("pending-row");
        if dnd.dragging_id_read.get() == Some(raw_id) { c.push_str(" dragging"); }
        if dnd.drop_target_read.get() == Some(DropTarget::Item(raw_id)) { c.push_str(" drop-target"); }
        if checked() { c.push_str(" checked"); }
        c
    };

    view! {
        <div
            class=row_class
            on:mousedown=on_mousedown
            on:mouseenter=on_mouseenter
            on:mouseleave=on_mouseleave
        >
            <span class="grip" title="Drag to reorder">"⋮⋮"</span>
            <input
                type="checkbox"
                prop:checked=checked
                on:change=move |_| store_dispatch(&store, Action::ToggleItem(id))
            />
            <input
                type="text"
                class=input_class
                placeholder="Add item..."
                autocapitalize="none"
                prop:value=value
                on:input=move |ev| store_dispatch(&store, Action::UpdateItemValue(id, event_target_value(&ev)))
            />
            <Show when=show_sub>
                <input
                    type="text"
                    class=input_class
                    placeholder="Add subItem..."
                    autocapitalize="none"
                    prop:value=sub_value
                    on:input=move |ev| store_dispatch(&store, Action::UpdateItemSubValue(id, event_target_value(&ev)))
                />
            </Show>
            <button
                class="icon-btn danger"
                title="Remove item"
                on:click=move |_| store_dispatch(&store, Action::RemoveItem(id))
            >
                "🗑"
            </button>
        </div>
    }
}
