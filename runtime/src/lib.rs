//! # Todolist Runtime
//!
//! Runtime implementation for the todolist architecture.
//!
//! This crate provides the Store that coordinates reducer execution and
//! effect draining.
//!
//! ## Core Components
//!
//! - **Store**: owns the state and runs the action → reducer → effects loop
//! - **Subscribers**: observers notified with a read-only state snapshot
//!   after every external action
//!
//! The model is single-threaded and synchronous: `send` takes `&mut self`,
//! completes atomically, and never suspends. Follow-up actions produced by
//! effects are drained inline before `send` returns.
//!
//! ## Example
//!
//! ```ignore
//! use todolist_runtime::Store;
//!
//! let mut store = Store::new(initial_state, my_reducer, environment);
//! store.subscribe(|state| render(state));
//!
//! store.send(Action::DoSomething)?;
//!
//! let value = store.state(|s| s.some_field);
//! ```

use std::collections::VecDeque;

use todolist_core::{effect::Effect, reducer::Reducer};

/// Error types for the Store runtime
pub mod error {
    use thiserror::Error;

    /// Errors that can occur during Store operations
    ///
    /// The domain reducers themselves are total: no action fails. The only
    /// failure mode lives in the runtime plumbing.
    #[derive(Error, Debug)]
    pub enum StoreError {
        /// The effect drain loop exceeded its bound
        ///
        /// A reducer kept producing `Effect::Dispatch` follow-ups past the
        /// drain limit, which means a feedback cycle. The state reflects the
        /// actions applied before the bound was hit.
        #[error("Effect dispatch chain exceeded {limit} actions")]
        DispatchOverflow {
            /// The drain bound that was exceeded
            limit: usize,
        },
    }
}

pub use error::StoreError;

/// Upper bound on follow-up actions drained per external `send`.
///
/// Generous for any real action chain; only an unintended cycle reaches it.
const MAX_DISPATCH_CHAIN: usize = 64;

/// Subscriber callback, invoked with a read-only snapshot after each send.
type Subscriber<S> = Box<dyn FnMut(&S)>;

/// The Store - runtime coordinator for a reducer
///
/// The Store manages:
/// 1. State (exclusively owned; observers get read snapshots only)
/// 2. Reducer (business logic)
/// 3. Environment (injected dependencies)
/// 4. Effect draining (with a bounded feedback loop)
/// 5. Subscriber notification (one snapshot per external action)
///
/// # Type Parameters
///
/// - `R`: reducer implementation; its associated types fix the state,
///   action, and environment types
///
/// # Example
///
/// ```ignore
/// let mut store = Store::new(
///     ListState::default(),
///     ListReducer::new(),
///     ListEnvironment::default(),
/// );
///
/// store.send(ListAction::Add { text: "Buy milk".into() })?;
/// let remaining = store.state(ListState::remaining_count);
/// ```
pub struct Store<R>
where
    R: Reducer,
{
    state: R::State,
    reducer: R,
    environment: R::Environment,
    subscribers: Vec<Subscriber<R::State>>,
}

impl<R> Store<R>
where
    R: Reducer,
    R::Action: std::fmt::Debug,
{
    /// Create a new store with initial state, reducer, and environment
    #[must_use]
    pub fn new(initial_state: R::State, reducer: R, environment: R::Environment) -> Self {
        Self {
            state: initial_state,
            reducer,
            environment,
            subscribers: Vec::new(),
        }
    }

    /// Register an observer notified with a read-only snapshot after every
    /// external action
    ///
    /// Subscribers see the state after the full effect drain, not the
    /// intermediate states between follow-up actions. They receive a shared
    /// reference and cannot mutate the store from within a notification.
    pub fn subscribe<F>(&mut self, subscriber: F)
    where
        F: FnMut(&R::State) + 'static,
    {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Send an action through the reducer and drain its effects
    ///
    /// Runs synchronously and atomically: the reducer is applied, any
    /// `Effect::Dispatch` follow-ups are fed back in order, and subscribers
    /// are notified once with the final snapshot before this returns.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DispatchOverflow`] if the follow-up chain
    /// exceeds the drain bound. Subscribers are still notified with the
    /// state reached so far.
    pub fn send(&mut self, action: R::Action) -> Result<(), StoreError> {
        let result = self.drain(action);
        for subscriber in &mut self.subscribers {
            subscriber(&self.state);
        }
        result
    }

    /// Read state through a closure, returning its result
    ///
    /// Mirrors the snapshot contract: callers get a shared reference scoped
    /// to the closure, never a handle into the store.
    pub fn state<T>(&self, f: impl FnOnce(&R::State) -> T) -> T {
        f(&self.state)
    }

    /// Borrow the current state snapshot
    #[must_use]
    pub const fn snapshot(&self) -> &R::State {
        &self.state
    }

    /// Number of registered subscribers
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    fn drain(&mut self, action: R::Action) -> Result<(), StoreError> {
        let mut queue = VecDeque::new();
        queue.push_back(action);
        let mut processed = 0usize;

        while let Some(action) = queue.pop_front() {
            if processed >= MAX_DISPATCH_CHAIN {
                tracing::warn!(
                    limit = MAX_DISPATCH_CHAIN,
                    "effect dispatch chain exceeded bound, dropping remainder"
                );
                return Err(StoreError::DispatchOverflow {
                    limit: MAX_DISPATCH_CHAIN,
                });
            }
            processed += 1;

            tracing::debug!(?action, "reducing action");
            let effects = self.reducer.reduce(&mut self.state, action, &self.environment);
            tracing::debug!(effects = effects.len(), "reducer returned effects");

            for effect in effects {
                Self::enqueue(effect, &mut queue);
            }
        }

        Ok(())
    }

    fn enqueue(effect: Effect<R::Action>, queue: &mut VecDeque<R::Action>) {
        match effect {
            Effect::None => {}
            Effect::Dispatch(action) => queue.push_back(*action),
            Effect::Batch(effects) => {
                for effect in effects {
                    Self::enqueue(effect, queue);
                }
            }
        }
    }
}
