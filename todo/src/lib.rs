//! To-do list state manager.
//!
//! The entire behavioral surface of a single-page to-do list — create,
//! toggle, filter, and delete items, with derived counts and bulk actions —
//! expressed as a pure reducer over owned state. Rendering is an external
//! collaborator: it observes read-only snapshots and dispatches
//! [`ListAction`] intents; this crate never touches a screen.
//!
//! # Quick Start
//!
//! ```
//! use todolist::{ListAction, ListEnvironment, ListReducer, ListState};
//! use todolist_runtime::Store;
//!
//! # fn example() -> Result<(), todolist_runtime::StoreError> {
//! let mut store = Store::new(
//!     ListState::new(),
//!     ListReducer::new(),
//!     ListEnvironment::default(),
//! );
//!
//! store.send(ListAction::Add { text: "Buy milk".to_owned() })?;
//! store.send(ListAction::Add { text: "Ship the release".to_owned() })?;
//!
//! let id = store.state(|s| s.items[0].id.clone());
//! store.send(ListAction::Toggle { id })?;
//!
//! assert_eq!(store.state(ListState::remaining_count), 1);
//! assert_eq!(store.state(ListState::completed_count), 1);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod reducer;
pub mod types;

// Re-export commonly used types
pub use reducer::{ListEnvironment, ListReducer};
pub use types::{Filter, Item, ItemId, ListAction, ListState, ParseFilterError};
