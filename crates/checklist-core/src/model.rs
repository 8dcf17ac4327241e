//! Checklist Entities
//!
//! Items and the titled lists they are committed into.

use serde::{Deserialize, Serialize};

use crate::id::{ItemId, ListId};

/// A checkable entry with a primary text and an optional secondary field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    /// Primary text
    pub value: String,
    /// Secondary text, present when the item was entered with the sub-item field in use
    pub sub_value: Option<String>,
    pub checked: bool,
}

impl Item {
    pub fn new(id: ItemId, value: impl Into<String>, sub_value: Option<String>, checked: bool) -> Self {
        Self {
            id,
            value: value.into(),
            sub_value,
            checked,
        }
    }

    /// Secondary text, or `""` when the item has none
    pub fn sub_value_str(&self) -> &str {
        self.sub_value.as_deref().unwrap_or_default()
    }
}

/// A committed, titled checklist
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TitledList {
    pub id: ListId,
    pub title: String,
    pub items: Vec<Item>,
}

impl TitledList {
    pub fn new(id: ListId, title: impl Into<String>, items: Vec<Item>) -> Self {
        Self {
            id,
            title: title.into(),
            items,
        }
    }

    /// Title to show, falling back to `untitled` when the title is empty
    pub fn display_title<'a>(&'a self, untitled: &'a str) -> &'a str {
        if self.title.is_empty() {
            untitled
        } else {
            &self.title
        }
    }

    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn checked_count(&self) -> usize {
        self.items.iter().filter(|item| item.checked).count()
    }
}
