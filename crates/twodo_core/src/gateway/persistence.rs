//! JSON round-trip of application state through key-value storage.
//!
//! # Responsibility
//! - Serialize/deserialize the item map and the active category flag.
//! - Distinguish never-written keys from corrupt stored values.
//!
//! # Invariants
//! - `ITEMS_KEY` holds the id-to-record object; `CATEGORY_KEY` holds the
//!   category string. Nothing else is ever written.
//! - `load_items(save_items(S))` is structural identity for any store `S`.

use crate::kv::{KeyValueStore, KvError};
use crate::model::item::Category;
use crate::store::item_store::ItemStore;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Storage key for the serialized item map.
pub const ITEMS_KEY: &str = "twodo.items";
/// Storage key for the active category flag.
pub const CATEGORY_KEY: &str = "twodo.category";

pub type GatewayResult<T> = Result<T, GatewayError>;

/// Load/save error for persisted application state.
#[derive(Debug)]
pub enum GatewayError {
    /// The key has never been written. Expected on first run; callers
    /// resolve this to defaults, it is not surfaced to the user.
    Empty(&'static str),
    /// The stored value exists but does not parse as the expected shape.
    Deserialization { key: &'static str, detail: String },
    /// State could not be encoded for writing.
    Serialization(serde_json::Error),
    /// The storage backend itself failed.
    Storage(KvError),
}

impl Display for GatewayError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty(key) => write!(f, "no value has been persisted under `{key}`"),
            Self::Deserialization { key, detail } => {
                write!(f, "persisted value under `{key}` is malformed: {detail}")
            }
            Self::Serialization(err) => write!(f, "state could not be serialized: {err}"),
            Self::Storage(err) => write!(f, "{err}"),
        }
    }
}

impl Error for GatewayError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Empty(_) => None,
            Self::Deserialization { .. } => None,
            Self::Serialization(err) => Some(err),
            Self::Storage(err) => Some(err),
        }
    }
}

impl From<KvError> for GatewayError {
    fn from(value: KvError) -> Self {
        Self::Storage(value)
    }
}

impl From<serde_json::Error> for GatewayError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialization(value)
    }
}

/// Durable round-trip of the item store and active category flag.
pub struct PersistenceGateway<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> PersistenceGateway<S> {
    /// Creates a gateway over the provided storage backend.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Serializes the full item map and overwrites the items key.
    pub fn save_items(&self, items: &ItemStore) -> GatewayResult<()> {
        let encoded = serde_json::to_string(items)?;
        self.store.put(ITEMS_KEY, &encoded)?;
        Ok(())
    }

    /// Reads and deserializes the item map.
    ///
    /// # Errors
    /// - `Empty` when the items key was never written (first run).
    /// - `Deserialization` when the stored text is malformed.
    pub fn load_items(&self) -> GatewayResult<ItemStore> {
        let raw = self.read_required(ITEMS_KEY)?;
        serde_json::from_str(&raw).map_err(|err| GatewayError::Deserialization {
            key: ITEMS_KEY,
            detail: err.to_string(),
        })
    }

    /// Overwrites the category key with the active category.
    pub fn save_category(&self, category: Category) -> GatewayResult<()> {
        let encoded = serde_json::to_string(&category)?;
        self.store.put(CATEGORY_KEY, &encoded)?;
        Ok(())
    }

    /// Reads and deserializes the active category flag.
    ///
    /// Same failure modes as `load_items`.
    pub fn load_category(&self) -> GatewayResult<Category> {
        let raw = self.read_required(CATEGORY_KEY)?;
        serde_json::from_str(&raw).map_err(|err| GatewayError::Deserialization {
            key: CATEGORY_KEY,
            detail: err.to_string(),
        })
    }

    /// Gives access to the underlying storage backend.
    pub fn storage(&self) -> &S {
        &self.store
    }

    fn read_required(&self, key: &'static str) -> GatewayResult<String> {
        self.store.get(key)?.ok_or(GatewayError::Empty(key))
    }
}
