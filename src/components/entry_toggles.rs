//! Entry Toggles Component
//!
//! Footer toggles for the item-entry row and the sub-item field.

use leptos::prelude::*;
use checklist_core::{Action, EntryOptions};

use crate::store::{store_dispatch, use_app_store, AppStateStoreFields};

#[derive(Clone, Copy)]
enum EntryToggle {
    ItemEntry,
    SubField,
}

impl EntryToggle {
    fn is_on(self, options: EntryOptions) -> bool {
        match self {
            EntryToggle::ItemEntry => options.item_entry,
            EntryToggle::SubField => options.sub_field,
        }
    }

    fn action(self) -> Action {
        match self {
            EntryToggle::ItemEntry => Action::ToggleItemEntry,
            EntryToggle::SubField => Action::ToggleSubField,
        }
    }
}

/// Toggle options (toggle, icon, label)
const ENTRY_TOGGLES: &[(EntryToggle, &str, &str)] = &[
    (EntryToggle::ItemEntry, "☑", "Toggle item list"),
    (EntryToggle::SubField, "▦", "Toggle sub-item field"),
];

#[component]
pub fn EntryToggles() -> impl IntoView {
    let store = use_app_store();
    let options = Memo::new(move |_| store.checklist().with(|c| c.options()));

    view! {
        <div class="entry-toggles">
            {ENTRY_TOGGLES.iter().map(|(toggle, icon, label)| {
                let toggle = *toggle;
                let is_on = move || toggle.is_on(options.get());
                view! {
                    <button
                        class=move || if is_on() { "toggle-btn active" } else { "toggle-btn" }
                        aria-label=*label
                        aria-pressed=move || is_on().to_string()
                        on:click=move |_| store_dispatch(&store, toggle.action())
                    >
                        {*icon}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
