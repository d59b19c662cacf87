// Copyright 2018 Steven Bosnick
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE-2.0 or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms

use std::iter;
use std::str::FromStr;

use error::{ParseError, Result};
use nfa::Nfa;
use store::TransitionStore;
use symbol::Symbol;

/// Parse `pattern` into an `Nfa` that matches the same language.
///
/// The supported syntax is literal chars, `.` for any char, postfix `*` and
/// `+`, `|` for alternation, `(` and `)` for grouping, `\` to escape the next
/// char and `[x-y]` for an inclusive range of chars. Every other char is a
/// literal. The empty pattern gives the empty automaton, which matches
/// nothing.
///
/// # Errors
/// Returns an error for a `)` without an open group, for a bracket expression
/// that is not exactly of the form `[x-y]` or that has `x` after `y`, and for
/// a `*` or `+` with nothing before it to repeat.
pub fn parse<S: TransitionStore>(pattern: &str) -> Result<Nfa<S>> {
    let input: Vec<char> = pattern.chars().collect();
    let parser = Parser { input: &input };

    let (nfa, _) = parser.alternation(0, false)?;
    debug!(
        "parsed {:?} into an NFA with {} states",
        pattern,
        nfa.state_count()
    );
    Ok(nfa)
}

impl<S: TransitionStore> FromStr for Nfa<S> {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Nfa<S>> {
        parse(s)
    }
}

// Each parsing function takes the position to start at and returns the
// automaton together with the position where it stopped.
struct Parser<'p> {
    input: &'p [char],
}

impl<'p> Parser<'p> {
    fn alternation<S: TransitionStore>(&self, start: usize, in_group: bool) -> Result<(Nfa<S>, usize)> {
        let (mut nfa, end) = self.sequence(start, in_group)?;

        if self.input.get(end) == Some(&'|') {
            let (right, end) = self.alternation::<S>(end + 1, in_group)?;
            nfa.union(&right);
            return Ok((nfa, end));
        }

        Ok((nfa, end))
    }

    fn sequence<S: TransitionStore>(&self, start: usize, in_group: bool) -> Result<(Nfa<S>, usize)> {
        let mut atoms: Vec<Nfa<S>> = Vec::new();
        let mut pos = start;

        while let Some(&c) = self.input.get(pos) {
            match c {
                '|' => break,
                ')' if in_group => break,
                ')' => return Err(ParseError::ExtraneousParenthesis(pos)),
                '(' => {
                    // an unclosed group runs to the end of the input
                    let (group, end) = self.alternation(pos + 1, true)?;
                    atoms.push(group);
                    pos = end + 1;
                }
                '*' | '+' => {
                    let atom = atoms
                        .last_mut()
                        .ok_or(ParseError::NothingToRepeat(c, pos))?;
                    if c == '*' {
                        atom.star();
                    } else {
                        atom.plus();
                    }
                    pos += 1;
                }
                '\\' => {
                    let literal = self.input.get(pos + 1).cloned().unwrap_or('\\');
                    atoms.push(Nfa::from(literal));
                    pos += 2;
                }
                '[' => {
                    let (range, end) = self.range(pos)?;
                    atoms.push(range);
                    pos = end;
                }
                '.' => {
                    atoms.push(Nfa::symbol(Symbol::Any));
                    pos += 1;
                }
                _ => {
                    atoms.push(Nfa::from(c));
                    pos += 1;
                }
            }
        }

        let nfa = atoms.iter().fold(Nfa::new(), |mut nfa, atom| {
            nfa.concatenate(atom);
            nfa
        });
        Ok((nfa, pos.min(self.input.len())))
    }

    fn range<S: TransitionStore>(&self, start: usize) -> Result<(Nfa<S>, usize)> {
        let close = self.input
            .iter()
            .enumerate()
            .skip(start + 2)
            .find(|&(_, &c)| c == ']')
            .map(|(pos, _)| pos);
        let body = &self.input[start + 1..close.unwrap_or(self.input.len())];

        let (first, last) = match (close, body) {
            (Some(_), &[first, '-', last]) => (first, last),
            _ => {
                let mut text: String = iter::once('[').chain(body.iter().cloned()).collect();
                if close.is_some() {
                    text.push(']');
                }
                return Err(ParseError::MalformedRange(text));
            }
        };
        if first > last {
            return Err(ParseError::InvertedRange(first, last));
        }

        let nfa = (first as u32..last as u32 + 1)
            .filter_map(::std::char::from_u32)
            .fold(Nfa::new(), |mut nfa, c| {
                nfa.union(&Nfa::from(c));
                nfa
            });
        trace!("range [{}-{}] has {} states", first, last, nfa.state_count());

        Ok((nfa, close.map_or(self.input.len(), |close| close + 1)))
    }
}
