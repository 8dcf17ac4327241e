//! Checklist Store
//!
//! Uses Leptos reactive_stores. The whole editor state sits in one field so
//! every UI event is applied as a single checklist transition.

use leptos::prelude::*;
use reactive_stores::Store;
use checklist_core::{Action, Checklist, EntryOptions};

/// Global application state
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Draft, in-progress items and committed lists
    pub checklist: Checklist,
}

impl AppState {
    pub fn new(options: EntryOptions) -> Self {
        Self {
            checklist: Checklist::with_options(options),
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Apply an action to the checklist. Rejected actions leave the state as it was.
pub fn store_dispatch(store: &AppStore, action: Action) {
    let result = store.checklist().write().dispatch(action);
    match result {
        Ok(outcome) => log::debug!(target: "store", "{:?}", outcome),
        Err(err) => log::debug!(target: "store", "ignored: {}", err),
    }
}
