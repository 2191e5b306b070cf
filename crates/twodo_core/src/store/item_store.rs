//! Item store and its mutation operations.
//!
//! # Responsibility
//! - Provide the map of all items plus the add/remove/toggle/edit operations.
//! - Expose category-filtered iteration for presentation callers.
//!
//! # Invariants
//! - `add` with empty text is a silent no-op, mirroring entry-field behavior.
//! - `remove` of an absent id is a no-op, not an error.
//! - `toggle_complete`/`edit_text` on an absent id is a programming-contract
//!   violation and fails with `NotFound`.

use crate::model::item::{Category, Item, ItemId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

pub type StoreResult<T> = Result<T, StoreError>;

/// Mutation error for the in-memory item store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreError {
    /// The referenced id is not in the store. UI callers only ever hold ids
    /// read from the current store, so this indicates an internal bug.
    NotFound(ItemId),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "item not found: {id}"),
        }
    }
}

impl Error for StoreError {}

/// In-memory mapping from item id to item record.
///
/// Iteration order is the map's key order; no recency sorting is applied.
/// Serialized transparently as the bare id-to-record object, which is the
/// exact shape the persistence gateway writes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemStore {
    items: BTreeMap<ItemId, Item>,
}

impl ItemStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a new item with a fresh id and returns the id.
    ///
    /// # Contract
    /// - Empty `text` inserts nothing and returns `None`.
    /// - The new item starts with `is_complete = false`.
    /// - The new item is visible to all subsequent reads.
    pub fn add(&mut self, text: &str, category: Category) -> Option<ItemId> {
        if text.is_empty() {
            return None;
        }

        let id = Uuid::new_v4();
        self.items.insert(id, Item::new(text, category));
        Some(id)
    }

    /// Removes the entry for `id`, returning the removed item.
    ///
    /// Absent ids are a no-op (`None`); deletion is idempotent from the
    /// caller's point of view.
    pub fn remove(&mut self, id: ItemId) -> Option<Item> {
        self.items.remove(&id)
    }

    /// Flips the completion flag for `id` and returns the new value.
    pub fn toggle_complete(&mut self, id: ItemId) -> StoreResult<bool> {
        let item = self.items.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        Ok(item.toggle_complete())
    }

    /// Replaces the text for `id`.
    ///
    /// Unlike `add`, empty replacement text is accepted; clearing an existing
    /// entry is a deliberate user action.
    pub fn edit_text(&mut self, id: ItemId, new_text: impl Into<String>) -> StoreResult<()> {
        let item = self.items.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        item.text = new_text.into();
        Ok(())
    }

    /// Returns the item for `id`, if present.
    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.get(&id)
    }

    /// Returns whether `id` is in the store.
    pub fn contains(&self, id: ItemId) -> bool {
        self.items.contains_key(&id)
    }

    /// Iterates all items in natural order.
    pub fn iter(&self) -> impl Iterator<Item = (ItemId, &Item)> {
        self.items.iter().map(|(id, item)| (*id, item))
    }

    /// Iterates items belonging to `category`, in natural order.
    ///
    /// Lazy and restartable; call again to iterate from the start.
    pub fn list_by_category(&self, category: Category) -> impl Iterator<Item = (ItemId, &Item)> {
        self.iter().filter(move |(_, item)| item.category == category)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{ItemStore, StoreError};
    use crate::model::item::Category;
    use uuid::Uuid;

    #[test]
    fn failed_toggle_leaves_store_untouched() {
        let mut store = ItemStore::new();
        store.add("kept", Category::Today);
        let before = store.clone();

        let err = store.toggle_complete(Uuid::new_v4()).unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
        assert_eq!(store, before);
    }

    #[test]
    fn list_by_category_is_restartable() {
        let mut store = ItemStore::new();
        store.add("a", Category::Work);
        store.add("b", Category::Work);

        let first: Vec<_> = store.list_by_category(Category::Work).collect();
        let second: Vec<_> = store.list_by_category(Category::Work).collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
    }
}
