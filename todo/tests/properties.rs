//! Property tests for the list reducer.
//!
//! The reducer is a total function over the state, so every property is
//! checked against arbitrary action sequences: id uniqueness for the life
//! of the list, toggle involution, and clear-completed order preservation.

use std::collections::HashSet;
use std::sync::Arc;

use proptest::prelude::*;
use todolist::{Filter, ItemId, ListAction, ListEnvironment, ListReducer, ListState};
use todolist_core::reducer::Reducer;
use todolist_testing::{SequentialIds, test_clock};

/// Index-based op, resolved to an id against the state it runs on.
///
/// Indices past the end resolve to a freshly minted (stale) id, which
/// exercises the silent-no-op path alongside the happy one.
#[derive(Clone, Debug)]
enum Op {
    Add(String),
    Toggle(usize),
    Remove(usize),
    ToggleAll(bool),
    ClearCompleted,
    SetFilter(Filter),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => "[ a-z]{0,12}".prop_map(Op::Add),
        2 => (0usize..8).prop_map(Op::Toggle),
        2 => (0usize..8).prop_map(Op::Remove),
        1 => any::<bool>().prop_map(Op::ToggleAll),
        1 => Just(Op::ClearCompleted),
        1 => prop_oneof![
            Just(Filter::All),
            Just(Filter::Active),
            Just(Filter::Completed)
        ]
        .prop_map(Op::SetFilter),
    ]
}

fn resolve(op: Op, state: &ListState) -> ListAction {
    let id_at = |index: usize| {
        state
            .items
            .get(index)
            .map_or_else(ItemId::new, |item| item.id.clone())
    };

    match op {
        Op::Add(text) => ListAction::Add { text },
        Op::Toggle(index) => ListAction::Toggle { id: id_at(index) },
        Op::Remove(index) => ListAction::Remove { id: id_at(index) },
        Op::ToggleAll(done) => ListAction::ToggleAll { done },
        Op::ClearCompleted => ListAction::ClearCompleted,
        Op::SetFilter(filter) => ListAction::SetFilter { filter },
    }
}

fn test_env() -> ListEnvironment {
    ListEnvironment::new(Arc::new(test_clock()), Arc::new(SequentialIds::new()))
}

proptest! {
    /// Ids stay unique across the list's lifetime: no duplicates at any
    /// step, and an id that left the list never comes back.
    #[test]
    fn ids_remain_unique_for_the_lifetime_of_the_list(ops in prop::collection::vec(op_strategy(), 0..40)) {
        let reducer = ListReducer::new();
        let env = test_env();
        let mut state = ListState::new();
        let mut ever_seen: HashSet<ItemId> = HashSet::new();
        let mut removed: HashSet<ItemId> = HashSet::new();

        for op in ops {
            let before: HashSet<ItemId> = state.items.iter().map(|i| i.id.clone()).collect();
            let action = resolve(op, &state);
            reducer.reduce(&mut state, action, &env);

            let after: Vec<ItemId> = state.items.iter().map(|i| i.id.clone()).collect();
            let after_set: HashSet<ItemId> = after.iter().cloned().collect();
            prop_assert_eq!(after.len(), after_set.len(), "duplicate id within the list");

            for id in after_set.difference(&before) {
                prop_assert!(!ever_seen.contains(id), "id reused after deletion");
                prop_assert!(!removed.contains(id), "removed id resurfaced");
                ever_seen.insert(id.clone());
            }
            for id in before.difference(&after_set) {
                removed.insert(id.clone());
            }
        }
    }

    /// Derived counts agree with each other after any sequence.
    #[test]
    fn derived_counts_stay_consistent(ops in prop::collection::vec(op_strategy(), 0..40)) {
        let reducer = ListReducer::new();
        let env = test_env();
        let mut state = ListState::new();

        for op in ops {
            let action = resolve(op, &state);
            reducer.reduce(&mut state, action, &env);

            prop_assert_eq!(state.remaining_count() + state.completed_count(), state.len());
            prop_assert_eq!(state.all_done(), !state.is_empty() && state.remaining_count() == 0);
            prop_assert_eq!(state.items_matching(Filter::Active).count(), state.remaining_count());
            prop_assert_eq!(state.items_matching(Filter::Completed).count(), state.completed_count());
            prop_assert_eq!(state.items_matching(Filter::All).count(), state.len());
        }
    }

    /// Toggling the same id twice restores the state exactly.
    #[test]
    fn toggle_is_an_involution(ops in prop::collection::vec(op_strategy(), 0..20), index in 0usize..8) {
        let reducer = ListReducer::new();
        let env = test_env();
        let mut state = ListState::new();
        for op in ops {
            let action = resolve(op, &state);
            reducer.reduce(&mut state, action, &env);
        }

        let id = state
            .items
            .get(index)
            .map_or_else(ItemId::new, |item| item.id.clone());
        let before = state.clone();
        reducer.reduce(&mut state, ListAction::Toggle { id: id.clone() }, &env);
        reducer.reduce(&mut state, ListAction::Toggle { id }, &env);
        prop_assert_eq!(state, before);
    }

    /// Clearing completed keeps the active items in their original order
    /// and is idempotent.
    #[test]
    fn clear_completed_preserves_order_and_is_idempotent(ops in prop::collection::vec(op_strategy(), 0..40)) {
        let reducer = ListReducer::new();
        let env = test_env();
        let mut state = ListState::new();
        for op in ops {
            let action = resolve(op, &state);
            reducer.reduce(&mut state, action, &env);
        }

        let expected: Vec<ItemId> = state
            .items
            .iter()
            .filter(|item| !item.done)
            .map(|item| item.id.clone())
            .collect();

        reducer.reduce(&mut state, ListAction::ClearCompleted, &env);
        let cleared: Vec<ItemId> = state.items.iter().map(|i| i.id.clone()).collect();
        prop_assert_eq!(&cleared, &expected);
        prop_assert_eq!(state.completed_count(), 0);

        let once = state.clone();
        reducer.reduce(&mut state, ListAction::ClearCompleted, &env);
        prop_assert_eq!(state, once);
    }

    /// Add trims its input; whitespace-only text changes nothing.
    #[test]
    fn add_trims_and_ignores_blank_text(text in "[ \\t]{0,4}[a-z]{0,6}[ \\t]{0,4}") {
        let reducer = ListReducer::new();
        let env = test_env();
        let mut state = ListState::new();

        reducer.reduce(&mut state, ListAction::Add { text: text.clone() }, &env);

        let trimmed = text.trim();
        if trimmed.is_empty() {
            prop_assert!(state.is_empty());
        } else {
            prop_assert_eq!(state.len(), 1);
            prop_assert_eq!(state.items[0].text.as_str(), trimmed);
            prop_assert!(!state.items[0].done);
        }
    }
}
