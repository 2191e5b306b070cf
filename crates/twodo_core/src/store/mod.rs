//! In-memory item store (reducer) layer.
//!
//! # Responsibility
//! - Own all items for the process lifetime and apply the write operations.
//! - Return semantic errors (`NotFound`) for contract-violating mutations.
//!
//! # Invariants
//! - A failed operation leaves the map exactly as it was.
//! - Store operations never touch persistence; the service layer decides
//!   when a mutation is written out.

pub mod item_store;
