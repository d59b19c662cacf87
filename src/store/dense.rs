// Copyright 2018 Steven Bosnick
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE-2.0 or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms

use super::{check_state, TransitionStore};
use symbol::{StateId, Symbol};

/// A `TransitionStore` held as a square matrix of labels.
///
/// There is one label slot for every ordered pair of states, so adding a
/// transition replaces any label already on that pair. Memory use is
/// quadratic in the number of states but a single-pair lookup is constant
/// time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DenseStore {
    rows: Vec<Vec<Symbol>>,
}

impl TransitionStore for DenseStore {
    fn state_count(&self) -> usize {
        self.rows.len()
    }

    fn add_state(&mut self) {
        let count = self.rows.len() + 1;
        for row in self.rows.iter_mut() {
            row.push(Symbol::None);
        }
        self.rows.push(vec![Symbol::None; count]);
    }

    fn remove_last_state(&mut self) {
        assert!(!self.rows.is_empty(), "cannot remove a state from an empty store");

        self.rows.pop();
        for row in self.rows.iter_mut() {
            row.pop();
        }
    }

    fn add_transition(&mut self, from: StateId, to: StateId, symbol: Symbol) {
        check_state(self, from);
        check_state(self, to);
        assert!(symbol.is_label(), "cannot add a transition labelled Symbol::None");

        self.rows[from][to] = symbol;
    }

    fn remove_transition(&mut self, from: StateId, to: StateId, symbol: Symbol) {
        check_state(self, from);
        check_state(self, to);

        let slot = &mut self.rows[from][to];
        if *slot == symbol {
            *slot = Symbol::None;
        }
    }

    fn transition(&self, from: StateId, to: StateId) -> Symbol {
        check_state(self, from);
        check_state(self, to);

        self.rows[from][to]
    }

    fn absorb(&mut self, other: &DenseStore) {
        let offset = self.rows.len();
        let count = offset + other.rows.len();

        for row in self.rows.iter_mut() {
            row.resize(count, Symbol::None);
        }
        for other_row in other.rows.iter() {
            let mut row = vec![Symbol::None; offset];
            row.extend(other_row.iter().cloned());
            self.rows.push(row);
        }
    }
}
