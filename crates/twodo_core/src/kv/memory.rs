//! Volatile in-memory key-value backend.
//!
//! # Responsibility
//! - Provide a process-local `KeyValueStore` for tests and hosts that have
//!   no durable data directory.
//!
//! # Invariants
//! - Never fails; the error channel exists only to satisfy the trait.

use super::{KeyValueStore, KvResult};
use std::collections::HashMap;
use std::sync::RwLock;

/// HashMap-backed store with interior mutability.
///
/// The lock is uncontended in practice (single UI thread), it only exists so
/// the trait can take `&self` like the SQLite backend does.
#[derive(Debug, Default)]
pub struct MemoryKeyValueStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get(&self, key: &str) -> KvResult<Option<String>> {
        let entries = self.entries.read().unwrap_or_else(|err| err.into_inner());
        Ok(entries.get(key).cloned())
    }

    fn put(&self, key: &str, value: &str) -> KvResult<()> {
        let mut entries = self.entries.write().unwrap_or_else(|err| err.into_inner());
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&self, key: &str) -> KvResult<()> {
        let mut entries = self.entries.write().unwrap_or_else(|err| err.into_inner());
        entries.remove(key);
        Ok(())
    }
}
