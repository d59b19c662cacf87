// Copyright 2018 Steven Bosnick
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE-2.0 or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms

//! Nondeterministic finite automata built by Thompson's construction.
//!
//! An `Nfa` is built bottom up: `Nfa::symbol` creates the automaton for a
//! single label and `concatenate`, `union`, `star` and `plus` combine or
//! repeat automata in place. After every one of these operations the highest
//! indexed state is the only accepting state, and it has no outgoing
//! transition other than a self-loop.

use std::fmt::{self, Display};
use std::iter;

use itertools::Itertools;

use store::{DenseStore, TransitionStore};
use symbol::{Alphabet, StateId, StateSet, Symbol};

/// A nondeterministic finite automaton.
///
/// The automaton owns its transition store exclusively. The binary operations
/// copy the states of their right-hand operand into `self`; no automaton ever
/// refers to the storage of another.
///
/// # Type Parameter
/// - S: the strategy used to store the transitions
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Nfa<S = DenseStore> {
    store: S,
    entry: StateId,
    accept: StateId,
    alphabet: Alphabet,
}

impl<S: TransitionStore> Nfa<S> {
    /// Create an empty `Nfa`.
    ///
    /// The empty automaton has no states and matches nothing. It is the
    /// identity for `concatenate` and for `union`.
    pub fn new() -> Nfa<S> {
        Nfa {
            store: S::default(),
            entry: 0,
            accept: 0,
            alphabet: Alphabet::new(),
        }
    }

    /// Create an `Nfa` that matches a single `symbol`.
    ///
    /// # Panics
    /// Panics if `symbol` is `Symbol::None`.
    pub fn symbol(symbol: Symbol) -> Nfa<S> {
        let mut nfa: Nfa<S> = Nfa::new();
        nfa.store.add_state();
        nfa.store.add_state();
        nfa.store.add_transition(0, 1, symbol);
        nfa.accept = 1;
        if symbol != Symbol::Epsilon {
            nfa.alphabet.insert(symbol);
        }

        nfa.check_invariants();
        nfa
    }

    /// The entry state.
    pub fn entry(&self) -> StateId {
        self.entry
    }

    /// The accepting state. This is always the highest indexed state of a
    /// non-empty automaton.
    pub fn accept(&self) -> StateId {
        self.accept
    }

    /// The labels observed while building the automaton.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// The transition store of the automaton.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The number of states.
    pub fn state_count(&self) -> usize {
        self.store.state_count()
    }

    /// Check if the automaton has no states.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Check if `states` contains the accepting state.
    pub fn is_accepting(&self, states: &StateSet) -> bool {
        !self.is_empty() && states.contains(&self.accept)
    }

    /// Make `self` match its own language followed by the language of `other`.
    pub fn concatenate(&mut self, other: &Nfa<S>) {
        self.merge_alphabet(other);
        if other.is_empty() {
            return;
        }

        let old_count = self.state_count();
        if old_count == 0 {
            self.store = other.store.clone();
            self.entry = other.entry;
            self.accept = other.accept;
        } else if old_count == 1 || self.has_self_loop(self.accept) {
            // The accepting state must stay reachable for its self-loop, so
            // link it to `other` rather than replacing it.
            let from = if old_count == 1 { self.entry } else { self.accept };
            self.store.absorb(&other.store);
            self.store
                .add_transition(from, other.entry + old_count, Symbol::Epsilon);
            self.accept = other.accept + old_count;
        } else {
            // The accepting state has no outgoing transition so it can be
            // replaced by the entry state of `other`.
            let old_accept = self.accept;
            let incoming = self.incoming_edges(old_accept);
            for &(from, symbol) in &incoming {
                self.store.remove_transition(from, old_accept, symbol);
            }
            self.store.remove_last_state();

            let offset = self.state_count();
            self.store.absorb(&other.store);
            for (from, symbol) in incoming {
                self.store.add_transition(from, other.entry + offset, symbol);
            }
            self.accept = other.accept + offset;
        }

        trace!(
            "concatenate: {} states + {} states = {} states",
            old_count,
            other.state_count(),
            self.state_count()
        );
        self.check_invariants();
    }

    /// Make `self` match either its own language or the language of `other`.
    ///
    /// If either operand is already in unified form (see `is_unified()`) its
    /// branching entry state and its accepting state are reused instead of
    /// adding two new states.
    pub fn union(&mut self, other: &Nfa<S>) {
        self.merge_alphabet(other);
        if other.is_empty() {
            return;
        }
        if self.is_empty() {
            self.concatenate(other);
            return;
        }

        let old_count = self.state_count();
        let (old_entry, old_accept) = (self.entry, self.accept);
        let (other_entry, other_accept) = (other.entry + old_count, other.accept + old_count);
        let reuse_other = other.can_share_entry() && other.can_share_accept();
        let reuse_self = self.can_share_entry() && other.can_share_accept();

        self.store.absorb(&other.store);
        if reuse_other {
            self.store
                .add_transition(other_entry, old_entry, Symbol::Epsilon);
            self.store
                .add_transition(old_accept, other_accept, Symbol::Epsilon);
            self.entry = other_entry;
            self.accept = other_accept;
        } else if reuse_self {
            self.store
                .add_transition(old_entry, other_entry, Symbol::Epsilon);
            self.store
                .add_transition(old_accept, other_accept, Symbol::Epsilon);
            self.accept = other_accept;
        } else {
            self.store.add_state();
            let entry = self.state_count() - 1;
            self.store.add_transition(entry, old_entry, Symbol::Epsilon);
            self.store.add_transition(entry, other_entry, Symbol::Epsilon);

            self.store.add_state();
            let accept = self.state_count() - 1;
            self.store.add_transition(old_accept, accept, Symbol::Epsilon);
            self.store.add_transition(other_accept, accept, Symbol::Epsilon);

            self.entry = entry;
            self.accept = accept;
        }

        trace!(
            "union: reused other {}, reused self {}, {} states",
            reuse_other,
            reuse_self,
            self.state_count()
        );
        self.check_invariants();
    }

    /// Make `self` match zero or more repetitions of its language.
    pub fn star(&mut self) {
        if self.is_empty() {
            return;
        }

        if let Some(symbol) = self.simple_symbol() {
            let (entry, accept) = (self.entry, self.accept);
            self.store.remove_transition(entry, accept, symbol);
            self.store.remove_last_state();
            self.store.add_transition(entry, entry, symbol);
            self.accept = entry;
        } else {
            let (old_entry, old_accept) = (self.entry, self.accept);
            let entry_revisited = self.has_incoming(old_entry);
            if old_accept != old_entry {
                self.store
                    .add_transition(old_accept, old_entry, Symbol::Epsilon);
            }

            // Skipping straight from an entry state that is also reached from
            // inside the automaton would accept partial repetitions.
            let bypass = if entry_revisited {
                self.store.add_state();
                let entry = self.state_count() - 1;
                self.store.add_transition(entry, old_entry, Symbol::Epsilon);
                self.entry = entry;
                entry
            } else {
                old_entry
            };

            self.store.add_state();
            let accept = self.state_count() - 1;
            self.store.add_transition(old_accept, accept, Symbol::Epsilon);
            self.store.add_transition(bypass, accept, Symbol::Epsilon);
            self.accept = accept;
        }

        trace!("star: {} states", self.state_count());
        self.check_invariants();
    }

    /// Make `self` match one or more repetitions of its language.
    pub fn plus(&mut self) {
        if self.is_empty() {
            return;
        }

        let (entry, old_accept) = (self.entry, self.accept);
        self.store.add_state();
        let accept = self.state_count() - 1;
        self.store.add_transition(old_accept, accept, Symbol::Epsilon);
        if old_accept != entry {
            self.store.add_transition(old_accept, entry, Symbol::Epsilon);
        }
        self.accept = accept;

        trace!("plus: {} states", self.state_count());
        self.check_invariants();
    }

    /// Check if the automaton is in unified form.
    ///
    /// An automaton is in unified form when its entry state has epsilon
    /// transitions to at least two states other than itself, which is the
    /// shape that `union` produces.
    pub fn is_unified(&self) -> bool {
        if self.is_empty() {
            return false;
        }

        self.store
            .targets(self.entry, Symbol::Epsilon)
            .iter()
            .filter(|&&state| state != self.entry)
            .count() >= 2
    }

    /// Compute the epsilon closure of `states`.
    ///
    /// The closure holds `states` and every state reachable from them through
    /// epsilon transitions alone. An automaton that has never observed a label
    /// other than epsilon cannot match anything and always has an empty
    /// closure.
    pub fn epsilon_closure(&self, states: &StateSet) -> StateSet {
        if self.alphabet.is_empty() {
            return StateSet::new();
        }

        let mut closure = states.clone();
        let mut pending: Vec<StateId> = states.iter().cloned().collect();
        while let Some(state) = pending.pop() {
            for next in self.store.targets(state, Symbol::Epsilon) {
                if closure.insert(next) {
                    pending.push(next);
                }
            }
        }
        closure
    }

    /// Check if the automaton matches the whole of `candidate` by simulating
    /// every path through it at once.
    pub fn simulate(&self, candidate: &str) -> bool {
        let mut current = self.epsilon_closure(&iter::once(self.entry).collect());
        for c in candidate.chars() {
            current = self.epsilon_closure(&self.store.reachable_on(&current, Symbol::Char(c)));
            if current.is_empty() {
                return false;
            }
        }

        self.is_accepting(&current)
    }

    fn merge_alphabet(&mut self, other: &Nfa<S>) {
        self.alphabet.extend(
            other
                .alphabet
                .iter()
                .filter(|&&symbol| symbol != Symbol::Epsilon),
        );
    }

    // The label of an automaton with exactly two states and one transition
    // from the entry to the accepting state.
    fn simple_symbol(&self) -> Option<Symbol> {
        if self.state_count() != 2 {
            return None;
        }

        match self.store.edges().as_slice() {
            &[(from, to, symbol)]
                if from == self.entry && to == self.accept && symbol != Symbol::Epsilon =>
            {
                Some(symbol)
            }
            _ => None,
        }
    }

    fn has_self_loop(&self, state: StateId) -> bool {
        self.store.transition(state, state).is_label()
    }

    fn has_incoming(&self, state: StateId) -> bool {
        (0..self.state_count()).any(|from| self.store.transition(from, state).is_label())
    }

    fn has_outgoing(&self, state: StateId) -> bool {
        (0..self.state_count()).any(|to| self.store.transition(state, to).is_label())
    }

    fn incoming_edges(&self, state: StateId) -> Vec<(StateId, Symbol)> {
        self.store
            .predecessors(state)
            .into_iter()
            .filter(|&(from, _)| from != state)
            .collect()
    }

    // A new branch may only be hung off the entry state if nothing inside the
    // automaton leads back to it.
    fn can_share_entry(&self) -> bool {
        self.is_unified() && !self.has_incoming(self.entry)
    }

    fn can_share_accept(&self) -> bool {
        !self.has_outgoing(self.accept)
    }

    fn check_invariants(&self) {
        if !cfg!(debug_assertions) || self.is_empty() {
            return;
        }

        let count = self.state_count();
        debug_assert_eq!(
            self.accept,
            count - 1,
            "the accepting state is not the highest state"
        );
        debug_assert!(self.entry < count, "the entry state is out of range");
        debug_assert!(
            count == 1 || self.entry != self.accept,
            "the entry state is also the accepting state"
        );
        debug_assert!(
            (0..count)
                .all(|to| to == self.accept || !self.store.transition(self.accept, to).is_label()),
            "the accepting state has an outgoing transition"
        );
    }
}

impl<S: TransitionStore> From<char> for Nfa<S> {
    fn from(c: char) -> Nfa<S> {
        Nfa::symbol(Symbol::Char(c))
    }
}

impl<S: TransitionStore> Display for Nfa<S> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_empty() {
            return writeln!(f, "empty automaton");
        }

        writeln!(f, "entry: {}, accepting: {}", self.entry, self.accept)?;
        writeln!(f, "alphabet: {{{}}}", self.alphabet.iter().join(", "))?;
        for (from, to, symbol) in self.store.edges() {
            writeln!(f, "{} -> {} : {}", from, to, symbol)?;
        }
        Ok(())
    }
}
