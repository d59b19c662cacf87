// Copyright 2018 Steven Bosnick
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE-2.0 or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms

//! Storage for the transition relation of an automaton.
//!
//! A `TransitionStore` holds a labelled transition relation over a growable
//! set of states. It knows nothing about entry or accepting states; those are
//! the concern of the automaton that owns the store.

pub use self::dense::DenseStore;
pub use self::sparse::SparseStore;

mod dense;
mod sparse;

use std::fmt::Debug;

use symbol::{StateId, StateSet, Symbol};

/// A mutable, labelled transition relation over the states `0..state_count()`.
///
/// The required methods define the storage strategy. The provided methods
/// answer batch queries in terms of the single-pair lookup `transition()`; a
/// strategy with a faster native answer may override them but must return the
/// same set of states.
///
/// # Panics
/// Passing an index that is not less than `state_count()`, passing
/// `Symbol::None` where a label is required, or calling `remove_last_state()` on
/// an empty store are contract violations and panic.
pub trait TransitionStore: Clone + Debug + Default {
    /// The number of states in the store.
    fn state_count(&self) -> usize;

    /// Append a new state with no transitions.
    fn add_state(&mut self);

    /// Remove the highest indexed state and every transition into or out of it.
    fn remove_last_state(&mut self);

    /// Add a transition from `from` to `to` labelled with `symbol`.
    ///
    /// A strategy that holds one label per ordered pair replaces any existing
    /// label on the pair; a strategy that holds several keeps both.
    fn add_transition(&mut self, from: StateId, to: StateId, symbol: Symbol);

    /// Remove the transition from `from` to `to` labelled with `symbol`, if
    /// there is one.
    fn remove_transition(&mut self, from: StateId, to: StateId, symbol: Symbol);

    /// Get the label of the transition from `from` to `to`, or `Symbol::None`
    /// if there is no such transition.
    fn transition(&self, from: StateId, to: StateId) -> Symbol;

    /// Append a copy of every state and transition of `other`.
    ///
    /// The appended states are renumbered by adding the previous
    /// `state_count()` of `self` to each index.
    fn absorb(&mut self, other: &Self);

    /// Check if the store has no states.
    fn is_empty(&self) -> bool {
        self.state_count() == 0
    }

    /// The states reachable from `from` by one transition labelled exactly
    /// `symbol`.
    fn targets(&self, from: StateId, symbol: Symbol) -> StateSet {
        scan_targets(self, from, symbol)
    }

    /// The states reachable from any state in `origin` by one transition that
    /// is labelled either `symbol` or `Symbol::Any`.
    fn reachable_on(&self, origin: &StateSet, symbol: Symbol) -> StateSet {
        scan_reachable(self, origin, symbol)
    }

    /// Every transition into `to` as `(from, label)`, ordered by `from` and
    /// then by label.
    fn predecessors(&self, to: StateId) -> Vec<(StateId, Symbol)> {
        scan_predecessors(self, to)
    }

    /// Every transition in the store as `(from, to, label)`.
    fn edges(&self) -> Vec<(StateId, StateId, Symbol)> {
        scan_edges(self)
    }
}

fn scan_targets<S: TransitionStore + ?Sized>(store: &S, from: StateId, symbol: Symbol) -> StateSet {
    assert!(symbol.is_label(), "cannot look up targets of Symbol::None");

    (0..store.state_count())
        .filter(|&to| store.transition(from, to) == symbol)
        .collect()
}

fn scan_reachable<S>(store: &S, origin: &StateSet, symbol: Symbol) -> StateSet
where
    S: TransitionStore + ?Sized,
{
    assert!(symbol.is_label(), "cannot make a transition on Symbol::None");

    let mut reachable = StateSet::new();
    for &from in origin {
        for to in 0..store.state_count() {
            let label = store.transition(from, to);
            if label == symbol || label == Symbol::Any {
                reachable.insert(to);
            }
        }
    }
    reachable
}

fn scan_predecessors<S>(store: &S, to: StateId) -> Vec<(StateId, Symbol)>
where
    S: TransitionStore + ?Sized,
{
    check_state(store, to);

    (0..store.state_count())
        .map(|from| (from, store.transition(from, to)))
        .filter(|&(_, label)| label.is_label())
        .collect()
}

fn scan_edges<S: TransitionStore + ?Sized>(store: &S) -> Vec<(StateId, StateId, Symbol)> {
    let count = store.state_count();
    let mut edges = Vec::new();
    for from in 0..count {
        for to in 0..count {
            let label = store.transition(from, to);
            if label.is_label() {
                edges.push((from, to, label));
            }
        }
    }
    edges
}

// Shared by the dense and sparse stores.
fn check_state<S: TransitionStore + ?Sized>(store: &S, state: StateId) {
    assert!(
        state < store.state_count(),
        "state {} is out of range for a store with {} states",
        state,
        store.state_count()
    );
}
