//! Checklist Core
//!
//! UI-independent state for the titled checklist editor:
//! - model: items and titled lists
//! - draft: the draft form controller
//! - pending: items composed before commit
//! - collection: committed titled lists
//! - state: the single `Checklist` state object and its transitions

mod collection;
mod draft;
mod error;
mod id;
mod model;
mod pending;
mod state;

pub use collection::TitledLists;
pub use draft::{DraftField, DraftForm, FieldValue};
pub use error::{ChecklistError, Result};
pub use id::{IdGenerator, ItemId, ListId};
pub use model::{Item, TitledList};
pub use pending::PendingItems;
pub use state::{Action, Checklist, EditMode, EntryOptions, Outcome};
