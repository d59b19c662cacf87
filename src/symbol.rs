// Copyright 2018 Steven Bosnick
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE-2.0 or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms

use std::collections::BTreeSet;
use std::fmt::{self, Display};

/// The index of a state within an automaton.
///
/// States are never allocated individually; a `StateId` is a dense, zero-based
/// index into the owning automaton's transition store.
pub type StateId = usize;

/// A set of states.
///
/// The set is ordered so that two sets holding the same states compare (and
/// hash) equal regardless of the order in which the states were discovered.
pub type StateSet = BTreeSet<StateId>;

/// The set of labels an automaton has observed during its construction.
///
/// This holds every label except `Symbol::Epsilon`: the concrete characters
/// and, when a `.` was used, `Symbol::Any`.
pub type Alphabet = BTreeSet<Symbol>;

/// The label of a transition.
///
/// Concrete characters and the three sentinel values share one domain and are
/// told apart by comparison.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Symbol {
    /// The absence of a transition.
    None,

    /// A transition that does not consume a character.
    Epsilon,

    /// A transition that consumes any one character.
    Any,

    /// A transition that consumes exactly this character.
    Char(char),
}

impl Symbol {
    /// Check if the symbol may label a transition (i.e. it is anything other
    /// than `Symbol::None`).
    pub fn is_label(&self) -> bool {
        *self != Symbol::None
    }
}

impl From<char> for Symbol {
    fn from(c: char) -> Symbol {
        Symbol::Char(c)
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Symbol::None => write!(f, "none"),
            Symbol::Epsilon => write!(f, "epsilon"),
            Symbol::Any => write!(f, "any"),
            Symbol::Char(c) => write!(f, "{:?}", c),
        }
    }
}
