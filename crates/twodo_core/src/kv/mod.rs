//! Key-value storage bootstrap and backend contracts.
//!
//! # Responsibility
//! - Define the storage seam the persistence gateway writes through.
//! - Open and configure the durable SQLite backend.
//!
//! # Invariants
//! - Schema version is tracked via `PRAGMA user_version`.
//! - Gateway code must not read/write entries before migrations succeed.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod memory;
pub mod migrations;
mod sqlite;

pub use memory::MemoryKeyValueStore;
pub use sqlite::{open_kv, open_kv_in_memory, SqliteKeyValueStore};

pub type KvResult<T> = Result<T, KvError>;

#[derive(Debug)]
pub enum KvError {
    Sqlite(rusqlite::Error),
    UnsupportedSchemaVersion {
        db_version: u32,
        latest_supported: u32,
    },
}

impl Display for KvError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::UnsupportedSchemaVersion {
                db_version,
                latest_supported,
            } => write!(
                f,
                "storage schema version {db_version} is newer than supported {latest_supported}"
            ),
        }
    }
}

impl Error for KvError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::UnsupportedSchemaVersion { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for KvError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

/// String-keyed external storage backend.
///
/// Implementations decide durability; the gateway calls `put` on every
/// mutation and `get` once at startup, and treats values as opaque text.
pub trait KeyValueStore {
    /// Returns the stored value for `key`, or `None` when never written.
    fn get(&self, key: &str) -> KvResult<Option<String>>;

    /// Stores `value` under `key`, overwriting any prior value.
    fn put(&self, key: &str, value: &str) -> KvResult<()>;

    /// Removes `key` if present. Absent keys are a no-op.
    fn delete(&self, key: &str) -> KvResult<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get(&self, key: &str) -> KvResult<Option<String>> {
        (**self).get(key)
    }

    fn put(&self, key: &str, value: &str) -> KvResult<()> {
        (**self).put(key, value)
    }

    fn delete(&self, key: &str) -> KvResult<()> {
        (**self).delete(key)
    }
}
