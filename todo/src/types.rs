//! Domain types for the to-do list.
//!
//! A list is an ordered collection of items plus the filter currently
//! selected in the UI. Items are exclusively owned by the list state; the
//! rendering layer only ever sees read snapshots.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// Unique identifier for a list item
///
/// Opaque, never reused: two items never compare equal by id, even after
/// deletions. Ids are minted through the environment's `IdGenerator`, so
/// they are never derived from wall-clock timestamps.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemId(Uuid);

impl ItemId {
    /// Creates a new random `ItemId`
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates an `ItemId` from a UUID
    #[must_use]
    pub const fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Returns the inner UUID
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single to-do entry
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier
    pub id: ItemId,
    /// Entry text, non-empty and trimmed at creation
    pub text: String,
    /// Whether the entry is completed
    pub done: bool,
    /// When the entry was created
    pub created_at: DateTime<Utc>,
}

impl Item {
    /// Creates a new, not-yet-done item
    #[must_use]
    pub const fn new(id: ItemId, text: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            text,
            done: false,
            created_at,
        }
    }

    /// Flips the completion flag
    pub fn toggle(&mut self) {
        self.done = !self.done;
    }
}

/// Which subset of items is currently displayed
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Filter {
    /// Every item
    #[default]
    All,
    /// Items not yet done
    Active,
    /// Items already done
    Completed,
}

impl Filter {
    /// Whether an item belongs to this filter's subset
    #[must_use]
    pub const fn matches(self, item: &Item) -> bool {
        match self {
            Self::All => true,
            Self::Active => !item.done,
            Self::Completed => item.done,
        }
    }

    /// The lowercase name, as shown on the filter tabs
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Active => "active",
            Self::Completed => "completed",
        }
    }
}

impl std::fmt::Display for Filter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown filter name
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown filter {0:?} (expected all, active, or completed)")]
pub struct ParseFilterError(pub String);

impl FromStr for Filter {
    type Err = ParseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "active" => Ok(Self::Active),
            "completed" => Ok(Self::Completed),
            other => Err(ParseFilterError(other.to_owned())),
        }
    }
}

/// State of the to-do list
///
/// Items are kept in insertion order; no operation reorders them. The
/// derived queries below are pure and recomputed from the current snapshot,
/// never cached.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListState {
    /// All items, in insertion order
    pub items: Vec<Item>,
    /// Currently selected filter tab
    pub filter: Filter,
}

impl ListState {
    /// Creates a new empty list showing all items
    #[must_use]
    pub const fn new() -> Self {
        Self {
            items: Vec::new(),
            filter: Filter::All,
        }
    }

    /// Total number of items
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the list holds no items
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of items not yet done
    #[must_use]
    pub fn remaining_count(&self) -> usize {
        self.items.iter().filter(|item| !item.done).count()
    }

    /// Number of items already done
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.len() - self.remaining_count()
    }

    /// Whether every item is done
    ///
    /// An empty list is NOT all-done: the toggle-all checkbox renders
    /// unchecked when there is nothing to check.
    #[must_use]
    pub fn all_done(&self) -> bool {
        !self.is_empty() && self.remaining_count() == 0
    }

    /// The items the current filter tab shows, in insertion order
    pub fn visible_items(&self) -> impl Iterator<Item = &Item> {
        self.items_matching(self.filter)
    }

    /// The items a given filter would show, in insertion order
    pub fn items_matching(&self, filter: Filter) -> impl Iterator<Item = &Item> {
        self.items.iter().filter(move |item| filter.matches(item))
    }

    /// Returns an item by id
    #[must_use]
    pub fn find(&self, id: &ItemId) -> Option<&Item> {
        self.items.iter().find(|item| &item.id == id)
    }

    /// Checks whether an item with this id exists
    #[must_use]
    pub fn contains(&self, id: &ItemId) -> bool {
        self.find(id).is_some()
    }
}

/// Inputs to the list reducer, dispatched by the rendering layer
///
/// Every action is total over the current state: unknown ids and empty text
/// are tolerated as silent no-ops, never surfaced as errors.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum ListAction {
    /// Append a new item with the trimmed text; no-op if empty after trim
    Add {
        /// Raw input text, trimmed by the reducer
        text: String,
    },

    /// Flip `done` on the matching item; no-op on a stale id
    Toggle {
        /// Item to toggle
        id: ItemId,
    },

    /// Delete the matching item; no-op on a stale id
    Remove {
        /// Item to remove
        id: ItemId,
    },

    /// Set every item's `done` flag, unconditionally
    ToggleAll {
        /// The flag every item gets
        done: bool,
    },

    /// Drop every done item, preserving the order of the rest
    ClearCompleted,

    /// Select which subset of items is displayed
    SetFilter {
        /// The filter tab to select
        filter: Filter,
    },
}
