// Copyright 2018 Steven Bosnick
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE-2.0 or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms

//! A small regular expression engine built from finite automata.
//!
//! A pattern is parsed by a recursive-descent parser that drives Thompson's
//! construction to produce a nondeterministic finite automaton (`Nfa`). The
//! `Nfa` can be simulated directly or converted into a deterministic finite
//! automaton (`Dfa`) through subset construction.
//!
//! The transitions of an `Nfa` are held in a `TransitionStore`. Two
//! interchangeable strategies are provided: `DenseStore`, a matrix with one
//! label per ordered pair of states, and `SparseStore`, a per-state multi-map
//! from label to destinations.
//!
//! ```
//! use thompson::{Dfa, Nfa};
//!
//! let nfa: Nfa = "(ab)*".parse().expect("invalid pattern");
//! let dfa = Dfa::build_from(&nfa);
//!
//! assert!(dfa.simulate("abab"));
//! assert!(!dfa.simulate("aba"));
//! ```
//!
//! The supported syntax is: literal characters, `.` (any character), `*` and
//! `+` (postfix repetition), `|` (alternation), `(` `)` (grouping), `\`
//! (escape the next character) and `[x-y]` (an inclusive character range).

#![deny(missing_docs)]

#[macro_use]
extern crate failure;
extern crate itertools;
#[macro_use]
extern crate log;

#[cfg(test)]
#[macro_use]
extern crate proptest;

#[cfg(test)]
#[macro_use]
extern crate assert_matches;

pub mod dfa;
pub mod nfa;
pub mod store;

mod error;
mod parser;
mod symbol;

#[cfg(test)]
mod testutils;

pub use dfa::{Dfa, DfaBuilder, Exploration};
pub use error::{ParseError, Result};
pub use nfa::Nfa;
pub use parser::parse;
pub use store::{DenseStore, SparseStore, TransitionStore};
pub use symbol::{Alphabet, StateId, StateSet, Symbol};
