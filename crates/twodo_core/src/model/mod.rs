//! Domain model for to-do items.
//!
//! # Responsibility
//! - Define the canonical item record and its category partition.
//! - Keep wire field naming stable for the persisted layout.
//!
//! # Invariants
//! - Every item is identified by a stable `ItemId`; the id is the map key in
//!   the store and never appears twice.
//! - `Category` is a strict two-way partition; an item is always in exactly
//!   one of them.

pub mod item;
