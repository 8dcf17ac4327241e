//! Identifiers
//!
//! Opaque ids for items and lists, allocated from a monotonic counter.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of an [`Item`](crate::Item)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(u64);

impl ItemId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Identifier of a [`TitledList`](crate::TitledList)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListId(u64);

impl ListId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ListId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Id source shared by items and lists of one checklist.
///
/// Values start at 1 and are never handed out twice, even after the
/// entity that held them is deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdGenerator {
    next: u64,
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self { next: 1 }
    }
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    fn bump(&mut self) -> u64 {
        let raw = self.next;
        self.next += 1;
        raw
    }

    pub fn item(&mut self) -> ItemId {
        ItemId(self.bump())
    }

    pub fn list(&mut self) -> ListId {
        ListId(self.bump())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_are_unique_under_rapid_allocation() {
        let mut ids = IdGenerator::new();
        let items: HashSet<ItemId> = (0..10_000).map(|_| ids.item()).collect();
        assert_eq!(items.len(), 10_000);
    }

    #[test]
    fn test_items_and_lists_share_the_counter() {
        let mut ids = IdGenerator::new();
        assert_eq!(ids.item().get(), 1);
        assert_eq!(ids.list().get(), 2);
        assert_eq!(ids.item().get(), 3);
    }

    #[test]
    fn test_ids_serialize_as_plain_numbers() {
        let json = serde_json::to_string(&ItemId::new(42)).unwrap();
        assert_eq!(json, "42");
        let back: ListId = serde_json::from_str("7").unwrap();
        assert_eq!(back, ListId::new(7));
    }
}
