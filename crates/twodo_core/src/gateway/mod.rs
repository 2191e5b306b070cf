//! Persistence gateway layer.
//!
//! # Responsibility
//! - Round-trip the item store and the active category through key-value
//!   storage under two fixed keys.
//! - Return semantic errors (`Empty`, `Deserialization`) that callers can
//!   resolve into defaults.
//!
//! # Invariants
//! - Saves serialize the full map; there are no partial writes.
//! - The gateway never decides fallback policy; that belongs to the service.

pub mod persistence;
