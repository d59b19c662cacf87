// Copyright 2018 Steven Bosnick
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE-2.0 or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms

// The utility functions in this module are used to support tests in more
// than one other module.

use proptest::prelude::*;

use dfa::Dfa;
use nfa::Nfa;
use store::TransitionStore;
use symbol::{StateId, Symbol};

/// Something that can decide whether it matches a whole string.
pub trait Matcher {
    fn matches(&self, candidate: &str) -> bool;
}

impl<S: TransitionStore> Matcher for Nfa<S> {
    fn matches(&self, candidate: &str) -> bool {
        self.simulate(candidate)
    }
}

impl Matcher for Dfa {
    fn matches(&self, candidate: &str) -> bool {
        self.simulate(candidate)
    }
}

/// Every string over `alphabet` with at most `max_len` chars, shortest first.
pub fn candidates(alphabet: &[char], max_len: usize) -> Vec<String> {
    let mut result = vec![String::new()];
    let mut previous = vec![String::new()];

    for _ in 0..max_len {
        let next: Vec<String> = previous
            .iter()
            .flat_map(|prefix| {
                alphabet.iter().map(move |&c| {
                    let mut s = prefix.clone();
                    s.push(c);
                    s
                })
            })
            .collect();
        result.extend(next.iter().cloned());
        previous = next;
    }

    result
}

/// Assert that `matcher` matches exactly the candidates over `alphabet` that
/// `expected` holds for.
pub fn assert_language<M, F>(matcher: &M, alphabet: &[char], max_len: usize, expected: F)
where
    M: Matcher,
    F: Fn(&str) -> bool,
{
    for candidate in candidates(alphabet, max_len) {
        assert_eq!(
            matcher.matches(&candidate),
            expected(&candidate),
            "candidate {:?}",
            candidate
        );
    }
}

/// Build a store of type `S` with `count` states and the given transitions.
pub fn store_from_edges<S: TransitionStore>(count: usize, edges: &[(StateId, StateId, Symbol)]) -> S {
    let mut store = S::default();
    for _ in 0..count {
        store.add_state();
    }
    for &(from, to, symbol) in edges {
        store.add_transition(from, to, symbol);
    }
    store
}

fn label() -> BoxedStrategy<Symbol> {
    prop_oneof![
        Just(Symbol::Char('a')),
        Just(Symbol::Char('b')),
        Just(Symbol::Char('c')),
        Just(Symbol::Epsilon),
        Just(Symbol::Any),
    ].boxed()
}

/// A state count together with a list of transitions between those states
/// that has at most one transition for each pair of states.
pub fn edge_list() -> BoxedStrategy<(usize, Vec<(StateId, StateId, Symbol)>)> {
    (1usize..8)
        .prop_flat_map(|count| {
            let edges = prop::collection::btree_map((0..count, 0..count), label(), 0..16)
                .prop_map(|edges| {
                    edges
                        .into_iter()
                        .map(|((from, to), symbol)| (from, to, symbol))
                        .collect::<Vec<_>>()
                });
            (Just(count), edges)
        })
        .boxed()
}

#[test]
fn candidates_are_enumerated_shortest_first() {
    let result = candidates(&['a', 'b'], 2);

    assert_eq!(result, vec!["", "a", "b", "aa", "ab", "ba", "bb"]);
}
