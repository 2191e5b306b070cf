//! Item domain model.
//!
//! # Responsibility
//! - Define the to-do item record and the Today/Work category partition.
//! - Provide lifecycle helpers for completion state.
//!
//! # Invariants
//! - An item's id is assigned at insert time and never changes.
//! - `category` names the partition the item itself belongs to; the globally
//!   active category lives in the service layer, not on the record.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a to-do item.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
/// Random v4 ids keep uniqueness independent of creation-time resolution.
pub type ItemId = Uuid;

/// Two-way partition of the to-do list.
///
/// Replaces a bare boolean so the item-level partition and the globally
/// active partition cannot be conflated in signatures or persisted data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Personal day-to-day entries. First-run default.
    #[default]
    Today,
    /// Work entries.
    Work,
}

impl Category {
    /// Returns the other partition.
    pub fn flip(self) -> Self {
        match self {
            Self::Today => Self::Work,
            Self::Work => Self::Today,
        }
    }

    /// User-facing partition name.
    pub fn label(self) -> &'static str {
        match self {
            Self::Today => "Today",
            Self::Work => "Work",
        }
    }

    /// Stable wire string, identical to the serde representation.
    pub fn as_wire_str(self) -> &'static str {
        match self {
            Self::Today => "today",
            Self::Work => "work",
        }
    }
}

/// A single to-do entry.
///
/// The id is intentionally not part of the record; the store keys records by
/// `ItemId`, so the persisted form is an object mapping id-string to record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Free-form entry text. May be edited to empty after creation.
    pub text: String,
    /// Partition this item belongs to.
    pub category: Category,
    /// Completion flag, toggled by the user.
    pub is_complete: bool,
}

impl Item {
    /// Creates a new, not-yet-completed item.
    pub fn new(text: impl Into<String>, category: Category) -> Self {
        Self {
            text: text.into(),
            category,
            is_complete: false,
        }
    }

    /// Flips the completion flag and returns the new value.
    pub fn toggle_complete(&mut self) -> bool {
        self.is_complete = !self.is_complete;
        self.is_complete
    }
}
