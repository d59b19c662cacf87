// Copyright 2018 Steven Bosnick
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE-2.0 or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms

//! Deterministic finite automata built from an `Nfa` by subset construction.
//!
//! Each state of a `Dfa` stands for the set of `Nfa` states that the
//! nondeterministic automaton could be in at the same point of the input.
//! Those sets are only needed while building, so a finished `Dfa` keeps just
//! its transition table and its accepting states.

use std::collections::{BTreeMap, BTreeSet, HashMap, VecDeque};
use std::fmt::{self, Display};
use std::iter;

use itertools::Itertools;

use nfa::Nfa;
use store::TransitionStore;
use symbol::{StateId, StateSet, Symbol};

/// The order in which subset construction visits newly discovered states.
///
/// The order changes the numbering of the states but never the language of
/// the resulting `Dfa`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Exploration {
    /// Explore the most recently discovered state first.
    DepthFirst,

    /// Explore states in the order they were discovered.
    BreadthFirst,
}

impl Default for Exploration {
    fn default() -> Self {
        Exploration::DepthFirst
    }
}

/// A deterministic finite automaton.
///
/// State 0 is the entry state. Each state has at most one transition for each
/// symbol. A `Symbol::Any` transition applies to every char that has no
/// transition of its own.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dfa {
    transitions: Vec<BTreeMap<Symbol, StateId>>,
    accepting: BTreeSet<StateId>,
}

impl Dfa {
    /// Build the `Dfa` that matches the same language as `nfa`.
    pub fn build_from<S: TransitionStore>(nfa: &Nfa<S>) -> Dfa {
        DfaBuilder::new().build(nfa)
    }

    /// The entry state.
    pub fn entry(&self) -> StateId {
        0
    }

    /// The number of states.
    pub fn state_count(&self) -> usize {
        self.transitions.len()
    }

    /// Check if `state` is an accepting state.
    pub fn is_accepting(&self, state: StateId) -> bool {
        self.accepting.contains(&state)
    }

    /// The accepting states.
    pub fn accepting_states(&self) -> &BTreeSet<StateId> {
        &self.accepting
    }

    /// The state reached from `state` on the char `c`, if any.
    ///
    /// # Panics
    /// Panics if `state` is not a state of this `Dfa`.
    pub fn next_state(&self, state: StateId, c: char) -> Option<StateId> {
        assert!(
            state < self.state_count(),
            "state {} is out of range for a DFA with {} states",
            state,
            self.state_count()
        );

        let row = &self.transitions[state];
        row.get(&Symbol::Char(c))
            .or_else(|| row.get(&Symbol::Any))
            .cloned()
    }

    /// Check if the `Dfa` matches the whole of `candidate`.
    pub fn simulate(&self, candidate: &str) -> bool {
        let mut current = self.entry();
        for c in candidate.chars() {
            match self.next_state(current, c) {
                Some(next) => current = next,
                None => return false,
            }
        }

        self.is_accepting(current)
    }
}

impl<'a, S: TransitionStore> From<&'a Nfa<S>> for Dfa {
    fn from(nfa: &'a Nfa<S>) -> Dfa {
        Dfa::build_from(nfa)
    }
}

impl Display for Dfa {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "entry: {}, accepting: {{{}}}",
            self.entry(),
            self.accepting.iter().join(", ")
        )?;
        for (from, row) in self.transitions.iter().enumerate() {
            for (symbol, to) in row {
                writeln!(f, "{} -> {} : {}", from, to, symbol)?;
            }
        }
        Ok(())
    }
}

/// Builder for a `Dfa`.
#[derive(Clone, Copy, Debug, Default)]
pub struct DfaBuilder {
    exploration: Exploration,
}

impl DfaBuilder {
    /// Create a builder with the default options.
    pub fn new() -> DfaBuilder {
        DfaBuilder::default()
    }

    /// Set the order in which newly discovered states are explored.
    pub fn exploration(mut self, exploration: Exploration) -> DfaBuilder {
        self.exploration = exploration;
        self
    }

    /// Run subset construction on `nfa`.
    pub fn build<S: TransitionStore>(&self, nfa: &Nfa<S>) -> Dfa {
        let mut subsets = Subsets::default();
        let mut pending = VecDeque::new();

        let start = nfa.epsilon_closure(&iter::once(nfa.entry()).collect());
        pending.push_back(subsets.intern(start).0);

        while let Some(state) = self.next_pending(&mut pending) {
            let mut row = BTreeMap::new();
            for &symbol in nfa.alphabet() {
                let reached = nfa.store().reachable_on(&subsets.states[state], symbol);
                let next = nfa.epsilon_closure(&reached);
                if next.is_empty() {
                    continue;
                }

                let (next_state, is_new) = subsets.intern(next);
                if is_new {
                    trace!("discovered DFA state {} on {}", next_state, symbol);
                    pending.push_back(next_state);
                }
                row.insert(symbol, next_state);
            }
            subsets.rows[state] = row;
        }

        let accepting = subsets
            .states
            .iter()
            .enumerate()
            .filter(|&(_, states)| nfa.is_accepting(states))
            .map(|(state, _)| state)
            .collect();

        debug!(
            "built a DFA with {} states from an NFA with {} states",
            subsets.rows.len(),
            nfa.state_count()
        );

        Dfa {
            transitions: subsets.rows,
            accepting,
        }
    }

    fn next_pending(&self, pending: &mut VecDeque<StateId>) -> Option<StateId> {
        match self.exploration {
            Exploration::DepthFirst => pending.pop_back(),
            Exploration::BreadthFirst => pending.pop_front(),
        }
    }
}

// The NFA state set behind each DFA state, with an index from each set back
// to its DFA state.
#[derive(Default)]
struct Subsets {
    states: Vec<StateSet>,
    rows: Vec<BTreeMap<Symbol, StateId>>,
    index: HashMap<StateSet, StateId>,
}

impl Subsets {
    fn intern(&mut self, states: StateSet) -> (StateId, bool) {
        if let Some(&state) = self.index.get(&states) {
            return (state, false);
        }

        let state = self.states.len();
        self.index.insert(states.clone(), state);
        self.states.push(states);
        self.rows.push(BTreeMap::new());
        (state, true)
    }
}
