//! Draft Form Controller
//!
//! Holds the in-flight title, item, sub-item and checked values.
//! Validation is by shape only: text fields take text, `checked` takes a flag.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{ChecklistError, Result};

/// Fields of the draft form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DraftField {
    Title,
    Item,
    SubItem,
    Checked,
}

impl DraftField {
    pub fn as_str(&self) -> &'static str {
        match self {
            DraftField::Title => "title",
            DraftField::Item => "item",
            DraftField::SubItem => "subItem",
            DraftField::Checked => "checked",
        }
    }

    fn expected_shape(&self) -> &'static str {
        match self {
            DraftField::Checked => "boolean",
            _ => "text",
        }
    }
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A value destined for a draft field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Flag(value)
    }
}

/// Current values of the draft form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DraftForm {
    pub title: String,
    pub item: String,
    pub sub_item: String,
    pub checked: bool,
}

impl DraftForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_field(&mut self, field: DraftField, value: FieldValue) -> Result<()> {
        match (field, value) {
            (DraftField::Title, FieldValue::Text(text)) => self.title = text,
            (DraftField::Item, FieldValue::Text(text)) => self.item = text,
            (DraftField::SubItem, FieldValue::Text(text)) => self.sub_item = text,
            (DraftField::Checked, FieldValue::Flag(flag)) => self.checked = flag,
            (field, _) => {
                return Err(ChecklistError::FieldShape {
                    field,
                    expected: field.expected_shape(),
                })
            }
        }
        Ok(())
    }

    pub fn reset_field(&mut self, field: DraftField) {
        match field {
            DraftField::Title => self.title.clear(),
            DraftField::Item => self.item.clear(),
            DraftField::SubItem => self.sub_item.clear(),
            DraftField::Checked => self.checked = false,
        }
    }

    pub fn reset_all(&mut self) {
        *self = Self::default();
    }

    /// Clear the item and sub-item inputs, keeping title and checked
    pub fn clear_item_input(&mut self) {
        self.item.clear();
        self.sub_item.clear();
    }

    /// Whether the item inputs hold enough text to become an item.
    /// The sub-item is only required while the sub-item field is in use.
    pub fn item_ready(&self, sub_field: bool) -> bool {
        !self.item.is_empty() && (!sub_field || !self.sub_item.is_empty())
    }
}
