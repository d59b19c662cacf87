// Copyright 2018 Steven Bosnick
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE-2.0 or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms

#[macro_use]
extern crate quickcheck;
extern crate thompson;

use std::fmt::{self, Display};

use quickcheck::{Arbitrary, Gen};
use thompson::{Dfa, DfaBuilder, Exploration, Nfa, SparseStore};

// A random pattern over a small alphabet. Every compound pattern renders
// inside a group so that patterns can be combined textually.
#[derive(Clone, Debug)]
enum Pattern {
    Char(char),
    Any,
    Range(char, char),
    Concat(Box<Pattern>, Box<Pattern>),
    Alt(Box<Pattern>, Box<Pattern>),
    Star(Box<Pattern>),
    Plus(Box<Pattern>),
}

const CHARS: &[char] = &['a', 'b', 'c'];

impl Pattern {
    fn generate<G: Gen>(g: &mut G, depth: u32) -> Pattern {
        use Pattern::*;

        if depth == 0 || g.gen_range(0, 3) == 0 {
            return match g.gen_range(0, 6) {
                0 => Any,
                1 => Range('a', 'b'),
                n => Char(CHARS[n as usize % CHARS.len()]),
            };
        }

        let choice = g.gen_range(0, 4);
        let mut sub = || Box::new(Pattern::generate(g, depth - 1));
        match choice {
            0 => {
                let left = sub();
                Concat(left, sub())
            }
            1 => {
                let left = sub();
                Alt(left, sub())
            }
            2 => Star(sub()),
            _ => Plus(sub()),
        }
    }
}

impl Arbitrary for Pattern {
    fn arbitrary<G: Gen>(g: &mut G) -> Pattern {
        Pattern::generate(g, 3)
    }
}

impl Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use Pattern::*;

        match *self {
            Char(c) => write!(f, "{}", c),
            Any => write!(f, "."),
            Range(first, last) => write!(f, "[{}-{}]", first, last),
            Concat(ref left, ref right) => write!(f, "({}{})", left, right),
            Alt(ref left, ref right) => write!(f, "({}|{})", left, right),
            Star(ref inner) => write!(f, "({})*", inner),
            Plus(ref inner) => write!(f, "({})+", inner),
        }
    }
}

fn candidates() -> Vec<String> {
    let mut result = vec![String::new()];
    let mut previous = vec![String::new()];
    for _ in 0..4 {
        let next: Vec<String> = previous
            .iter()
            .flat_map(|prefix| "abcd".chars().map(move |c| format!("{}{}", prefix, c)))
            .collect();
        result.extend(next.iter().cloned());
        previous = next;
    }
    result
}

fn nfa(pattern: &str) -> Nfa {
    pattern.parse().expect("generated pattern should parse")
}

fn same_language<F>(left: &str, right: &str, adjust: F) -> bool
where
    F: Fn(&str, bool) -> bool,
{
    let (left, right) = (nfa(left), nfa(right));
    candidates()
        .iter()
        .all(|s| left.simulate(s) == adjust(s, right.simulate(s)))
}

fn unchanged(_: &str, matched: bool) -> bool {
    matched
}

quickcheck! {
    fn union_is_commutative(p: Pattern, q: Pattern) -> bool {
        same_language(&format!("{}|{}", p, q), &format!("{}|{}", q, p), unchanged)
    }

    fn union_is_idempotent(p: Pattern) -> bool {
        same_language(&format!("{}|{}", p, p), &p.to_string(), unchanged)
    }

    fn concatenation_is_associative(p: Pattern, q: Pattern, r: Pattern) -> bool {
        same_language(&format!("({}{}){}", p, q, r), &format!("{}({}{})", p, q, r), unchanged)
    }

    fn star_is_plus_or_empty(p: Pattern) -> bool {
        same_language(&format!("({})*", p), &format!("({})+", p), |s, matched| {
            s.is_empty() || matched
        })
    }

    fn plus_is_pattern_then_star(p: Pattern) -> bool {
        same_language(&format!("({})+", p), &format!("{}({})*", p, p), unchanged)
    }

    fn dfa_agrees_with_nfa(p: Pattern) -> bool {
        let nfa = nfa(&p.to_string());
        let dfa = Dfa::from(&nfa);
        candidates().iter().all(|s| nfa.simulate(s) == dfa.simulate(s))
    }

    fn exploration_order_keeps_language(p: Pattern) -> bool {
        let nfa: Nfa<SparseStore> = p.to_string().parse().expect("generated pattern should parse");
        let depth = DfaBuilder::new().exploration(Exploration::DepthFirst).build(&nfa);
        let breadth = DfaBuilder::new().exploration(Exploration::BreadthFirst).build(&nfa);
        depth.state_count() == breadth.state_count()
            && candidates().iter().all(|s| depth.simulate(s) == breadth.simulate(s))
    }
}
