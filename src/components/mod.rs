//! UI Components
//!
//! Leptos components of the checklist editor.

mod committed_lists;
mod delete_confirm_button;
mod draft_item_entry;
mod editor_panel;
mod entry_toggles;
mod list_card;
mod pending_item_list;
mod pending_item_row;

pub use committed_lists::CommittedLists;
pub use delete_confirm_button::DeleteConfirmButton;
pub use draft_item_entry::DraftItemEntry;
pub use editor_panel::EditorPanel;
pub use entry_toggles::EntryToggles;
pub use list_card::ListCard;
pub use pending_item_list::PendingItemList;
pub use pending_item_row::PendingItemRow;

/// Key that confirms an input (adds an item, commits a title)
const CONFIRM_KEY: &str = "Enter";

fn is_confirm_key(ev: &web_sys::KeyboardEvent) -> bool {
    ev.key() == CONFIRM_KEY
}
