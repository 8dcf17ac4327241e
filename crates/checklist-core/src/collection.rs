//! Titled List Collection
//!
//! Committed lists in creation order.

use serde::{Deserialize, Serialize};

use crate::error::{ChecklistError, Result};
use crate::id::{ItemId, ListId};
use crate::model::{Item, TitledList};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TitledLists {
    lists: Vec<TitledList>,
}

impl TitledLists {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_slice(&self) -> &[TitledList] {
        &self.lists
    }

    pub fn iter(&self) -> impl Iterator<Item = &TitledList> {
        self.lists.iter()
    }

    pub fn len(&self) -> usize {
        self.lists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    pub fn get(&self, id: ListId) -> Option<&TitledList> {
        self.lists.iter().find(|list| list.id == id)
    }

    pub fn push(&mut self, list: TitledList) {
        self.lists.push(list);
    }

    fn find_mut(&mut self, id: ListId) -> Result<&mut TitledList> {
        self.lists
            .iter_mut()
            .find(|list| list.id == id)
            .ok_or(ChecklistError::ListNotFound(id))
    }

    /// Overwrite a list's title and items wholesale
    pub fn replace(&mut self, id: ListId, title: String, items: Vec<Item>) -> Result<()> {
        let list = self.find_mut(id)?;
        list.title = title;
        list.items = items;
        Ok(())
    }

    pub fn remove(&mut self, id: ListId) -> Result<TitledList> {
        let index = self
            .lists
            .iter()
            .position(|list| list.id == id)
            .ok_or(ChecklistError::ListNotFound(id))?;
        Ok(self.lists.remove(index))
    }

    fn item_mut(&mut self, list_id: ListId, item_id: ItemId) -> Result<&mut Item> {
        self.find_mut(list_id)?
            .items
            .iter_mut()
            .find(|item| item.id == item_id)
            .ok_or(ChecklistError::ItemNotFound(item_id))
    }

    /// Flip an item's checked flag inside a committed list, returning the new value
    pub fn toggle_item_checked(&mut self, list_id: ListId, item_id: ItemId) -> Result<bool> {
        let item = self.item_mut(list_id, item_id)?;
        item.checked = !item.checked;
        Ok(item.checked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn groceries() -> TitledLists {
        let items = vec![
            Item::new(ItemId::new(1), "Milk", None, false),
            Item::new(ItemId::new(2), "Eggs", None, true),
        ];
        let mut lists = TitledLists::new();
        lists.push(TitledList::new(ListId::new(3), "Groceries", items));
        lists.push(TitledList::new(ListId::new(4), "Chores", Vec::new()));
        lists
    }

    #[test]
    fn test_replace_overwrites_title_and_items() {
        let mut lists = groceries();
        lists
            .replace(ListId::new(3), "Market".to_string(), Vec::new())
            .unwrap();

        let list = lists.get(ListId::new(3)).unwrap();
        assert_eq!(list.title, "Market");
        assert!(list.items.is_empty());
        assert_eq!(lists.len(), 2);
    }

    #[test]
    fn test_remove_by_id() {
        let mut lists = groceries();
        let removed = lists.remove(ListId::new(3)).unwrap();
        assert_eq!(removed.title, "Groceries");
        assert_eq!(lists.len(), 1);
        assert_eq!(
            lists.remove(ListId::new(3)),
            Err(ChecklistError::ListNotFound(ListId::new(3)))
        );
    }

    #[test]
    fn test_toggle_item_in_committed_list() {
        let mut lists = groceries();
        assert_eq!(lists.toggle_item_checked(ListId::new(3), ItemId::new(1)), Ok(true));
        assert_eq!(lists.toggle_item_checked(ListId::new(3), ItemId::new(2)), Ok(false));

        // Item ids are scoped to their list
        assert_eq!(
            lists.toggle_item_checked(ListId::new(4), ItemId::new(1)),
            Err(ChecklistError::ItemNotFound(ItemId::new(1)))
        );
    }
}
