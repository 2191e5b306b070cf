//! Core domain logic for the TwoDo list app.
//! This crate is the single source of truth for business invariants.

pub mod gateway;
pub mod kv;
pub mod logging;
pub mod model;
pub mod prompt;
pub mod service;
pub mod store;

pub use gateway::persistence::{
    GatewayError, GatewayResult, PersistenceGateway, CATEGORY_KEY, ITEMS_KEY,
};
pub use kv::{open_kv, open_kv_in_memory, KeyValueStore, KvError, MemoryKeyValueStore};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::item::{Category, Item, ItemId};
pub use prompt::{
    ConsoleConfirm, ConsolePrompt, DeleteConfirm, HostConfirmed, HostProvidedText, TextPrompt,
};
pub use service::todo_service::TodoService;
pub use store::item_store::{ItemStore, StoreError, StoreResult};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
