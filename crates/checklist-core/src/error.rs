//! Checklist errors
//!
//! Every failed transition leaves the state untouched. Callers driving the
//! widget from UI events treat all of these as no-ops.

use thiserror::Error;

use crate::draft::DraftField;
use crate::id::{ItemId, ListId};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChecklistError {
    /// A draft field was given a value of the wrong shape
    #[error("field `{field}` expects a {expected} value")]
    FieldShape {
        field: DraftField,
        expected: &'static str,
    },
    /// The item fields do not hold enough text to add an item
    #[error("item text is incomplete")]
    IncompleteItem,
    #[error("item {0} not found")]
    ItemNotFound(ItemId),
    #[error("list {0} not found")]
    ListNotFound(ListId),
    /// A guarded commit trigger did not fire
    #[error("commit skipped: {0}")]
    CommitSkipped(&'static str),
}

pub type Result<T> = std::result::Result<T, ChecklistError>;
