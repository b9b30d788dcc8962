//! Reducer logic for the to-do list.
//!
//! Every action is a total function over the current state: invalid inputs
//! (empty text, stale ids) leave the state untouched and are logged at
//! debug level rather than surfaced as errors. That is the intended UX for
//! a form this simple, not a gap.

use crate::types::{Item, ItemId, ListAction, ListState};
use todolist_core::{
    SmallVec,
    effect::Effect,
    environment::{Clock, IdGenerator, SystemClock, UuidGenerator},
    reducer::Reducer,
};

/// Environment dependencies for the list reducer
#[derive(Clone)]
pub struct ListEnvironment {
    /// Clock for creation timestamps
    pub clock: std::sync::Arc<dyn Clock>,
    /// Source of fresh item ids
    pub ids: std::sync::Arc<dyn IdGenerator>,
}

impl ListEnvironment {
    /// Creates a new `ListEnvironment`
    #[must_use]
    pub fn new(clock: std::sync::Arc<dyn Clock>, ids: std::sync::Arc<dyn IdGenerator>) -> Self {
        Self { clock, ids }
    }
}

impl Default for ListEnvironment {
    /// Production wiring: system clock, random UUIDs
    fn default() -> Self {
        Self::new(
            std::sync::Arc::new(SystemClock),
            std::sync::Arc::new(UuidGenerator),
        )
    }
}

/// Reducer for the to-do list
#[derive(Clone, Debug)]
pub struct ListReducer;

impl ListReducer {
    /// Creates a new `ListReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for ListReducer {
    fn default() -> Self {
        Self::new()
    }
}

impl Reducer for ListReducer {
    type State = ListState;
    type Action = ListAction;
    type Environment = ListEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            ListAction::Add { text } => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    tracing::debug!("ignoring add with empty text");
                    return SmallVec::new();
                }

                let id = ItemId::from_uuid(env.ids.next_id());
                state
                    .items
                    .push(Item::new(id, trimmed.to_owned(), env.clock.now()));
                SmallVec::new()
            }

            ListAction::Toggle { id } => {
                if let Some(item) = state.items.iter_mut().find(|item| item.id == id) {
                    item.toggle();
                } else {
                    tracing::debug!(%id, "toggle for stale id ignored");
                }
                SmallVec::new()
            }

            ListAction::Remove { id } => {
                if let Some(pos) = state.items.iter().position(|item| item.id == id) {
                    state.items.remove(pos);
                } else {
                    tracing::debug!(%id, "remove for stale id ignored");
                }
                SmallVec::new()
            }

            ListAction::ToggleAll { done } => {
                for item in &mut state.items {
                    item.done = done;
                }
                SmallVec::new()
            }

            ListAction::ClearCompleted => {
                state.items.retain(|item| !item.done);
                SmallVec::new()
            }

            ListAction::SetFilter { filter } => {
                state.filter = filter;
                SmallVec::new()
            }
        }
    }
}
