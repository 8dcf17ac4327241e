//! Editor Panel Component
//!
//! Collapsible card holding the draft title, item entry, in-progress items
//! and the commit controls.

use leptos::prelude::*;
use checklist_core::{Action, DraftField};
use leptos_dragdrop::DndSignals;

use crate::components::{is_confirm_key, DraftItemEntry, EntryToggles, PendingItemList};
use crate::context::AppContext;
use crate::store::{store_dispatch, use_app_store, AppStateStoreFields};

#[component]
pub fn EditorPanel(dnd: DndSignals) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let title = move || store.checklist().with(|c| c.draft().title.clone());
    let item_entry = Memo::new(move |_| store.checklist().with(|c| c.options().item_entry));
    let has_pending = Memo::new(move |_| store.checklist().with(|c| !c.pending().is_empty()));
    let is_editing = Memo::new(move |_| store.checklist().with(|c| c.is_editing()));

    let on_title_keydown = move |ev: web_sys::KeyboardEvent| {
        if is_confirm_key(&ev) {
            ev.prevent_default();
            store_dispatch(&store, Action::TitleEnter);
        }
    };

    let card_class = move || {
        let mut c = String::from("editor-card");
        if ctx.panel_open.get() { c.push_str(" open"); }
        if is_editing.get() { c.push_str(" editing"); }
        c
    };

    view! {
        <section class=card_class>
            <div class=move || if item_entry.get() || has_pending.get() { "title-row end" } else { "title-row" }>
                <input
                    type="text"
                    class="title-input"
                    autocapitalize="none"
                    placeholder=move || if item_entry.get() { "Add title..." } else { "Add note..." }
                    prop:value=title
                    on:input=move |ev| {
                        store_dispatch(&store, Action::SetField(DraftField::Title, event_target_value(&ev).into()));
                    }
                    on:keydown=on_title_keydown
                />
                <Show when=move || !ctx.panel_open.get()>
                    <button class="icon-btn" title="Expand" on:click=move |_| ctx.set_panel_open(true)>
                        "⌄"
                    </button>
                </Show>
            </div>

            <Show when=move || ctx.panel_open.get()>
                <div class="editor-content">
                    <Show when=move || item_entry.get()>
                        <DraftItemEntry />
                    </Show>
                    <PendingItemList dnd=dnd />
                    <hr class="separator" />
                    <div class="editor-footer">
                        <EntryToggles />
                        <div class="footer-actions">
                            <Show when=move || is_editing.get()>
                                <button class="text-btn" on:click=move |_| store_dispatch(&store, Action::CancelEdit)>
                                    "Cancel edit"
                                </button>
                            </Show>
                            <button class="icon-btn" title="Collapse" on:click=move |_| ctx.set_panel_open(false)>
                                "⌃"
                            </button>
                            <button class="icon-btn commit-btn" title="Save list" on:click=move |_| store_dispatch(&store, Action::Commit)>
                                "✓"
                            </button>
                        </div>
                    </div>
                </div>
            </Show>
        </section>
    }
}
