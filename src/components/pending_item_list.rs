//! Pending Item List Component
//!
//! In-progress items of the draft with drag-and-drop reordering.
//! Uses leptos-dragdrop with explicit slots between rows.

use leptos::prelude::*;
use leptos_dragdrop::*;

use crate::components::PendingItemRow;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn PendingItemList(dnd: DndSignals) -> impl IntoView {
    let store = use_app_store();

    let rows = move || {
        store.checklist().with(|c| {
            c.pending()
                .iter()
                .enumerate()
                .map(|(index, item)| (index, item.id))
                .collect::<Vec<_>>()
        })
    };
    let len = Memo::new(move |_| store.checklist().with(|c| c.pending().len()));
    let show_separator = move || store.checklist().with(|c| c.options().sub_field) && len.get() > 0;

    view! {
        <div class="pending-list">
            <Show when=show_separator>
                <hr class="separator" />
            </Show>
            <For
                each=rows
                key=|(index, id)| (*index, *id)
                children=move |(index, id)| {
                    view! {
                        <DropSlot dnd=dnd slot_index=index />
                        <PendingItemRow dnd=dnd id=id />
                    }
                }
            />
            // Slot after the last row
            {move || view! { <DropSlot dnd=dnd slot_index=len.get() /> }}
        </div>
    }
}

/// Drop slot - a horizontal gap before the row at `slot_index`
#[component]
pub fn DropSlot(dnd: DndSignals, slot_index: usize) -> impl IntoView {
    let on_mouseenter = make_on_slot_mouseenter(dnd, slot_index);
    let on_mouseleave = make_on_mouseleave(dnd);

    let is_active = move || dnd.drop_target_read.get() == Some(DropTarget::Slot(slot_index));
    // Only show when dragging
    let is_dragging = move || dnd.dragging_id_read.get().is_some();

    let slot_class = move || {
        let mut c = String::from("drop-slot");
        if !is_dragging() { c.push_str(" hidden"); }
        if is_active() { c.push_str(" active"); }
        c
    };

    view! {
        <div
            class=slot_class
            on:mouseenter=on_mouseenter
            on:mouseleave=on_mouseleave
        />
    }
}
