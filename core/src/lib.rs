//! # Todolist Core
//!
//! Core traits and types for the todolist architecture.
//!
//! This crate provides the fundamental abstractions for building the list
//! state manager as a unidirectional data flow:
//!
//! - **State**: owned domain state for a feature
//! - **Action**: all possible inputs to a reducer
//! - **Reducer**: pure function `(State, Action, Environment) → (State, Effects)`
//! - **Effect**: side effect descriptions (not execution)
//! - **Environment**: injected dependencies via traits
//!
//! Everything here is synchronous: each action is processed atomically on
//! the calling thread before the next one, so effects are plain values that
//! the store drains inline rather than futures.
//!
//! ## Example
//!
//! ```ignore
//! use todolist_core::{effect::Effect, reducer::Reducer, SmallVec};
//!
//! impl Reducer for ListReducer {
//!     type State = ListState;
//!     type Action = ListAction;
//!     type Environment = ListEnvironment;
//!
//!     fn reduce(
//!         &self,
//!         state: &mut ListState,
//!         action: ListAction,
//!         env: &ListEnvironment,
//!     ) -> SmallVec<[Effect<ListAction>; 4]> {
//!         // Business logic goes here
//!         SmallVec::new()
//!     }
//! }
//! ```

// Re-export commonly used types
pub use chrono::{DateTime, Utc};
pub use serde::{Deserialize, Serialize};
pub use smallvec::SmallVec;

/// Reducer module - The core trait for business logic
///
/// Reducers are pure functions: `(State, Action, Environment) → (State, Effects)`.
/// They contain all state transitions and are deterministic once the
/// environment's dependencies are fixed, which is what makes them testable.
pub mod reducer {
    use super::effect::Effect;
    use super::SmallVec;

    /// The Reducer trait - core abstraction for business logic
    ///
    /// # Associated Types
    ///
    /// - `State`: the domain state this reducer operates on
    /// - `Action`: the action type this reducer processes
    /// - `Environment`: the injected dependencies this reducer needs
    ///
    /// # Example
    ///
    /// ```ignore
    /// impl Reducer for ListReducer {
    ///     type State = ListState;
    ///     type Action = ListAction;
    ///     type Environment = ListEnvironment;
    ///
    ///     fn reduce(
    ///         &self,
    ///         state: &mut ListState,
    ///         action: ListAction,
    ///         env: &ListEnvironment,
    ///     ) -> SmallVec<[Effect<ListAction>; 4]> {
    ///         match action {
    ///             ListAction::ClearCompleted => {
    ///                 state.items.retain(|item| !item.done);
    ///                 SmallVec::new()
    ///             }
    ///             _ => SmallVec::new(),
    ///         }
    ///     }
    /// }
    /// ```
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The action type this reducer processes
        type Action;

        /// The environment type with injected dependencies
        type Environment;

        /// Reduce an action into state changes and effects
        ///
        /// This is a pure function that:
        /// 1. Inspects the action against the current state
        /// 2. Updates state in place
        /// 3. Returns effect descriptions to be drained by the store
        ///
        /// Invalid inputs must not escalate: a reducer for a total state
        /// machine leaves the state untouched and returns no effects.
        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            env: &Self::Environment,
        ) -> SmallVec<[Effect<Self::Action>; 4]>;
    }
}

/// Effect module - Side effect descriptions
///
/// Effects describe follow-up work to be performed by the store. They are
/// values, not execution: a reducer never dispatches anything itself, it
/// returns descriptions and the store drains them synchronously.
pub mod effect {
    /// Effect type - describes a side effect to be executed
    ///
    /// Effects are NOT executed immediately. They are returned from reducers
    /// and drained by the store before the triggering `send` returns, so an
    /// effect never outlives the external event that produced it.
    ///
    /// # Type Parameters
    ///
    /// - `Action`: the action type that effects can produce (feedback loop)
    #[derive(Debug)]
    pub enum Effect<Action> {
        /// No-op effect
        None,

        /// Feed a follow-up action back into the reducer
        Dispatch(Box<Action>),

        /// Drain effects in order
        Batch(Vec<Effect<Action>>),
    }

    impl<Action> Effect<Action> {
        /// Wrap a follow-up action as an effect
        #[must_use]
        pub fn dispatch(action: Action) -> Self {
            Self::Dispatch(Box::new(action))
        }

        /// Combine effects to drain in order
        #[must_use]
        pub const fn batch(effects: Vec<Effect<Action>>) -> Self {
            Self::Batch(effects)
        }

        /// Whether this effect performs no work
        #[must_use]
        pub fn is_none(&self) -> bool {
            match self {
                Self::None => true,
                Self::Dispatch(_) => false,
                Self::Batch(effects) => effects.iter().all(Self::is_none),
            }
        }
    }
}

/// Environment module - Dependency injection traits
///
/// All external dependencies are abstracted behind traits and injected via
/// the Environment parameter. Production code wires the system
/// implementations; tests wire deterministic mocks.
pub mod environment {
    use chrono::{DateTime, Utc};
    use uuid::Uuid;

    /// Clock trait - abstracts time operations for testability
    ///
    /// # Examples
    ///
    /// ```
    /// use todolist_core::environment::{Clock, SystemClock};
    ///
    /// let clock = SystemClock;
    /// let stamp = clock.now();
    /// ```
    pub trait Clock: Send + Sync {
        /// Get the current time
        fn now(&self) -> DateTime<Utc>;
    }

    /// Production clock backed by the system time
    #[derive(Debug, Clone, Copy, Default)]
    pub struct SystemClock;

    impl Clock for SystemClock {
        fn now(&self) -> DateTime<Utc> {
            Utc::now()
        }
    }

    /// `IdGenerator` trait - abstracts identifier minting for testability
    ///
    /// Ids must be unique for the lifetime of the process: two calls never
    /// return the same value, even under rapid successive invocation. In
    /// particular an implementation must not derive ids from wall-clock
    /// timestamps.
    pub trait IdGenerator: Send + Sync {
        /// Mint a fresh identifier, never previously returned
        fn next_id(&self) -> Uuid;
    }

    /// Production id source backed by random UUIDs (v4)
    #[derive(Debug, Clone, Copy, Default)]
    pub struct UuidGenerator;

    impl IdGenerator for UuidGenerator {
        fn next_id(&self) -> Uuid {
            Uuid::new_v4()
        }
    }
}
