//! In-Progress Item List
//!
//! Ordered items composed in the editor before they are committed into a
//! titled list. Every lookup is by id, never by text.

use serde::{Deserialize, Serialize};

use crate::error::{ChecklistError, Result};
use crate::id::{IdGenerator, ItemId};
use crate::model::Item;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PendingItems {
    items: Vec<Item>,
}

impl PendingItems {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items(items: Vec<Item>) -> Self {
        Self { items }
    }

    pub fn as_slice(&self) -> &[Item] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn position(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    /// Hand the items over, leaving the list empty
    pub fn take(&mut self) -> Vec<Item> {
        std::mem::take(&mut self.items)
    }

    /// Append a new item with a fresh id
    pub fn add_item(
        &mut self,
        ids: &mut IdGenerator,
        value: impl Into<String>,
        sub_value: Option<String>,
        checked: bool,
    ) -> ItemId {
        let id = ids.item();
        self.items.push(Item::new(id, value, sub_value, checked));
        id
    }

    fn find_mut(&mut self, id: ItemId) -> Result<&mut Item> {
        self.items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(ChecklistError::ItemNotFound(id))
    }

    pub fn update_item_value(&mut self, id: ItemId, value: impl Into<String>) -> Result<()> {
        self.find_mut(id)?.value = value.into();
        Ok(())
    }

    pub fn update_item_sub_value(&mut self, id: ItemId, value: impl Into<String>) -> Result<()> {
        self.find_mut(id)?.sub_value = Some(value.into());
        Ok(())
    }

    /// Flip the checked flag, returning the new value
    pub fn toggle_checked(&mut self, id: ItemId) -> Result<bool> {
        let item = self.find_mut(id)?;
        item.checked = !item.checked;
        Ok(item.checked)
    }

    pub fn remove_item(&mut self, id: ItemId) -> Result<Item> {
        let index = self.position(id).ok_or(ChecklistError::ItemNotFound(id))?;
        Ok(self.items.remove(index))
    }

    /// Move an item so it lands before the item currently at `slot`.
    /// `slot == len()` (or anything larger) moves it to the end.
    /// Returns the item's new index.
    pub fn move_item(&mut self, id: ItemId, slot: usize) -> Result<usize> {
        let from = self.position(id).ok_or(ChecklistError::ItemNotFound(id))?;
        let slot = slot.min(self.items.len());
        let to = if slot > from { slot - 1 } else { slot };
        let item = self.items.remove(from);
        self.items.insert(to, item);
        Ok(to)
    }
}
