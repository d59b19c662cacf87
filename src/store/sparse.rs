// Copyright 2018 Steven Bosnick
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE-2.0 or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms

use std::collections::BTreeMap;

use super::{check_state, TransitionStore};
use symbol::{StateId, StateSet, Symbol};

/// A `TransitionStore` held as a multi-map from label to destinations for
/// each state.
///
/// Memory use is proportional to the number of transitions and the same
/// ordered pair of states may carry several labels. The batch queries are
/// answered directly from the map rather than by scanning every state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SparseStore {
    states: Vec<BTreeMap<Symbol, Vec<StateId>>>,
}

impl TransitionStore for SparseStore {
    fn state_count(&self) -> usize {
        self.states.len()
    }

    fn add_state(&mut self) {
        self.states.push(BTreeMap::new());
    }

    fn remove_last_state(&mut self) {
        assert!(!self.states.is_empty(), "cannot remove a state from an empty store");

        self.states.pop();
        let removed = self.states.len();
        for map in self.states.iter_mut() {
            for destinations in map.values_mut() {
                destinations.retain(|&to| to != removed);
            }
            map.retain(|_, destinations| !destinations.is_empty());
        }
    }

    fn add_transition(&mut self, from: StateId, to: StateId, symbol: Symbol) {
        check_state(self, from);
        check_state(self, to);
        assert!(symbol.is_label(), "cannot add a transition labelled Symbol::None");

        let destinations = self.states[from].entry(symbol).or_insert_with(Vec::new);
        if !destinations.contains(&to) {
            destinations.push(to);
        }
    }

    fn remove_transition(&mut self, from: StateId, to: StateId, symbol: Symbol) {
        check_state(self, from);
        check_state(self, to);

        let now_empty = match self.states[from].get_mut(&symbol) {
            Some(destinations) => {
                destinations.retain(|&d| d != to);
                destinations.is_empty()
            }
            None => false,
        };
        if now_empty {
            self.states[from].remove(&symbol);
        }
    }

    fn transition(&self, from: StateId, to: StateId) -> Symbol {
        check_state(self, from);
        check_state(self, to);

        self.states[from]
            .iter()
            .find(|&(_, destinations)| destinations.contains(&to))
            .map_or(Symbol::None, |(symbol, _)| *symbol)
    }

    fn absorb(&mut self, other: &SparseStore) {
        let offset = self.states.len();
        self.states.extend(other.states.iter().map(|map| {
            map.iter()
                .map(|(symbol, destinations)| {
                    let destinations = destinations.iter().map(|to| to + offset);
                    (*symbol, destinations.collect::<Vec<_>>())
                })
                .collect::<BTreeMap<_, _>>()
        }));
    }

    fn targets(&self, from: StateId, symbol: Symbol) -> StateSet {
        check_state(self, from);

        self.states[from]
            .get(&symbol)
            .map(|destinations| destinations.iter().cloned().collect())
            .unwrap_or_default()
    }

    fn reachable_on(&self, origin: &StateSet, symbol: Symbol) -> StateSet {
        assert!(symbol.is_label(), "cannot make a transition on Symbol::None");

        let mut reachable = StateSet::new();
        for &from in origin {
            check_state(self, from);
            let map = &self.states[from];
            for label in &[symbol, Symbol::Any] {
                if let Some(destinations) = map.get(label) {
                    reachable.extend(destinations.iter().cloned());
                }
            }
        }
        reachable
    }

    fn predecessors(&self, to: StateId) -> Vec<(StateId, Symbol)> {
        check_state(self, to);

        let mut predecessors: Vec<_> = self.states
            .iter()
            .enumerate()
            .flat_map(|(from, map)| {
                map.iter()
                    .filter(move |&(_, destinations)| destinations.contains(&to))
                    .map(move |(symbol, _)| (from, *symbol))
            })
            .collect();
        predecessors.sort();
        predecessors
    }

    fn edges(&self) -> Vec<(StateId, StateId, Symbol)> {
        let mut edges: Vec<_> = self.states
            .iter()
            .enumerate()
            .flat_map(|(from, map)| {
                map.iter().flat_map(move |(symbol, destinations)| {
                    destinations.iter().map(move |&to| (from, to, *symbol))
                })
            })
            .collect();
        edges.sort();
        edges
    }
}
