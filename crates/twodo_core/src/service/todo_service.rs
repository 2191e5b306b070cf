//! To-do application state and use-case service.
//!
//! # Responsibility
//! - Own the item store and the active category for the process lifetime.
//! - Run each mutation, then write the changed state through the gateway.
//! - Resolve startup-load failures into defaults instead of surfacing them.
//!
//! # Invariants
//! - A mutation is applied in memory before its write is attempted; a failed
//!   write never rolls the mutation back or blocks further interaction.
//! - Deletion only happens after the confirmation capability said yes.
//! - The visible listing is always the active category's partition.

use crate::gateway::persistence::{GatewayError, GatewayResult, PersistenceGateway};
use crate::kv::KeyValueStore;
use crate::model::item::{Category, Item, ItemId};
use crate::prompt::{DeleteConfirm, TextPrompt};
use crate::store::item_store::{ItemStore, StoreError, StoreResult};
use log::{debug, error, info, warn};

/// Application state plus the side-effecting persistence step after each
/// reducer call.
pub struct TodoService<S: KeyValueStore> {
    items: ItemStore,
    active_category: Category,
    gateway: PersistenceGateway<S>,
}

impl<S: KeyValueStore> TodoService<S> {
    /// Builds the service by reading persisted state once.
    ///
    /// # Contract
    /// - A never-written key (first run) resolves silently to defaults.
    /// - Malformed or unreadable state resolves to defaults with a warning;
    ///   hydration itself never fails.
    pub fn hydrate(gateway: PersistenceGateway<S>) -> Self {
        let items = match gateway.load_items() {
            Ok(items) => items,
            Err(GatewayError::Empty(_)) => {
                debug!("event=hydrate module=service status=first_run target=items");
                ItemStore::new()
            }
            Err(err) => {
                warn!("event=hydrate module=service status=fallback target=items error={err}");
                ItemStore::new()
            }
        };

        let active_category = match gateway.load_category() {
            Ok(category) => category,
            Err(GatewayError::Empty(_)) => {
                debug!("event=hydrate module=service status=first_run target=category");
                Category::default()
            }
            Err(err) => {
                warn!("event=hydrate module=service status=fallback target=category error={err}");
                Category::default()
            }
        };

        info!(
            "event=hydrate module=service status=ok items={} category={}",
            items.len(),
            active_category.label()
        );

        Self {
            items,
            active_category,
            gateway,
        }
    }

    /// Adds an item under the active category and returns its id.
    ///
    /// Empty text is a silent no-op (`None`), matching entry-field behavior.
    pub fn add_item(&mut self, text: &str) -> Option<ItemId> {
        let id = self.items.add(text, self.active_category)?;
        self.persist_items();
        Some(id)
    }

    /// Deletes an item after running the confirmation gate.
    ///
    /// Returns whether the store changed. Absent ids and declined
    /// confirmations both leave the store untouched.
    pub fn delete_item(&mut self, id: ItemId, confirm: &dyn DeleteConfirm) -> bool {
        let text = match self.items.get(id) {
            Some(item) => item.text.clone(),
            None => return false,
        };

        if !confirm.confirm_delete(&text) {
            return false;
        }

        let removed = self.items.remove(id).is_some();
        if removed {
            self.persist_items();
        }
        removed
    }

    /// Flips an item's completion flag and returns the new value.
    pub fn toggle_complete(&mut self, id: ItemId) -> StoreResult<bool> {
        let is_complete = self.items.toggle_complete(id)?;
        self.persist_items();
        Ok(is_complete)
    }

    /// Edits an item's text through the prompt capability.
    ///
    /// Returns whether the text changed; a cancelled prompt leaves the store
    /// untouched. `NotFound` propagates, the caller referenced an id it
    /// never read from this store.
    pub fn edit_item(&mut self, id: ItemId, prompt: &dyn TextPrompt) -> StoreResult<bool> {
        let current = self
            .items
            .get(id)
            .ok_or(StoreError::NotFound(id))?
            .text
            .clone();

        match prompt.request_text(&current) {
            Some(new_text) => {
                self.items.edit_text(id, new_text)?;
                self.persist_items();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Iterates the items of the active category, in store order.
    pub fn visible_items(&self) -> impl Iterator<Item = (ItemId, &Item)> {
        self.items.list_by_category(self.active_category)
    }

    /// Switches the active category and persists the flag.
    ///
    /// Items are never touched; only the displayed partition changes.
    pub fn set_active_category(&mut self, category: Category) {
        if self.active_category == category {
            return;
        }
        self.active_category = category;
        self.persist_category();
    }

    /// Switches to the other category and returns it.
    pub fn flip_category(&mut self) -> Category {
        self.set_active_category(self.active_category.flip());
        self.active_category
    }

    pub fn active_category(&self) -> Category {
        self.active_category
    }

    pub fn items(&self) -> &ItemStore {
        &self.items
    }

    fn persist_items(&self) {
        persist_with_retry("items", || self.gateway.save_items(&self.items));
    }

    fn persist_category(&self) {
        persist_with_retry("category", || self.gateway.save_category(self.active_category));
    }
}

/// Runs one persistence write with the fire-and-forget failure policy:
/// warn and retry once, then drop the write with an error event. Interaction
/// must never block on a failed write.
fn persist_with_retry(target: &'static str, attempt: impl Fn() -> GatewayResult<()>) {
    if let Err(err) = attempt() {
        warn!("event=persist module=service status=retry target={target} error={err}");
        if let Err(err) = attempt() {
            error!("event=persist module=service status=dropped target={target} error={err}");
        }
    }
}
