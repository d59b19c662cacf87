// Copyright 2018 Steven Bosnick
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE-2.0 or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms

use std::io::{BufRead, Write};

use itertools::Itertools;
use quicli::prelude::*;
use thompson::{self, Dfa, DfaBuilder, Exploration, Nfa, TransitionStore};

const PATTERN_PROMPT: &str = "Please enter a regex : ";
const CANDIDATE_PROMPT: &str = "> ";

/// The automaton used to decide matches.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Engine {
    Nfa,
    Dfa(Exploration),
}

enum Compiled<S> {
    Nfa(Nfa<S>),
    Dfa(Dfa),
}

impl<S: TransitionStore> Compiled<S> {
    fn matches(&self, candidate: &str) -> bool {
        match *self {
            Compiled::Nfa(ref nfa) => nfa.simulate(candidate),
            Compiled::Dfa(ref dfa) => dfa.simulate(candidate),
        }
    }
}

/// An interactive session that reads a pattern and then candidate strings
/// to match against it.
///
/// A blank candidate line goes back to reading a pattern. The session ends
/// at the end of the input.
pub struct Session<R, W> {
    input: R,
    output: W,
    engine: Engine,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, engine: Engine) -> Self {
        Session {
            input,
            output,
            engine,
        }
    }

    pub fn run<S: TransitionStore>(&mut self) -> Result<()> {
        while let Some(pattern) = self.prompt(PATTERN_PROMPT)? {
            if pattern.is_empty() {
                continue;
            }

            let compiled = match self.compile::<S>(&pattern) {
                Ok(compiled) => compiled,
                Err(err) => {
                    warn!("unable to parse {:?}", pattern);
                    writeln!(self.output, "{}", err)?;
                    continue;
                }
            };

            loop {
                let candidate = match self.prompt(CANDIDATE_PROMPT)? {
                    Some(candidate) => candidate,
                    None => return Ok(()),
                };
                if candidate.is_empty() {
                    break;
                }

                let verdict = if compiled.matches(&candidate) {
                    "match"
                } else {
                    "do not match"
                };
                writeln!(self.output, "{}", verdict)?;
            }
        }

        Ok(())
    }

    fn compile<S: TransitionStore>(&self, pattern: &str) -> thompson::Result<Compiled<S>> {
        let nfa: Nfa<S> = pattern.parse()?;
        debug!("alphabet: {}", nfa.alphabet().iter().join(", "));
        debug!("nfa:\n{}", nfa);

        Ok(match self.engine {
            Engine::Nfa => Compiled::Nfa(nfa),
            Engine::Dfa(exploration) => {
                let dfa = DfaBuilder::new().exploration(exploration).build(&nfa);
                debug!("dfa:\n{}", dfa);
                Compiled::Dfa(dfa)
            }
        })
    }

    fn prompt(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_owned()))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::io::Cursor;
    use thompson::{DenseStore, SparseStore};

    fn run_session<S: TransitionStore>(input: &str, engine: Engine) -> String {
        let mut output = Vec::new();
        {
            let mut sut = Session::new(Cursor::new(input), &mut output, engine);
            sut.run::<S>().expect("session failed");
        }
        String::from_utf8(output).expect("output is not utf-8")
    }

    #[test]
    fn session_reports_match_and_no_match() {
        let result = run_session::<DenseStore>("a|b\na\nc\n", Engine::Dfa(Exploration::DepthFirst));

        assert_eq!(
            result,
            "Please enter a regex : > match\n> do not match\n> "
        );
    }

    #[test]
    fn blank_candidate_returns_to_pattern_prompt() {
        let result = run_session::<SparseStore>("a+\naa\n\n(ab)*\naba\n", Engine::Nfa);

        assert_eq!(
            result,
            "Please enter a regex : > match\n> Please enter a regex : > do not match\n> "
        );
    }

    #[test]
    fn parse_error_is_printed_and_pattern_is_prompted_again() {
        let result = run_session::<DenseStore>(")\n[c-a]\n.\nx\n", Engine::Dfa(Exploration::BreadthFirst));

        assert_eq!(
            result,
            "Please enter a regex : Unexpected ')' at position 0.\n\
             Please enter a regex : Invalid range: 'c' is greater lexicographically than 'a'.\n\
             Please enter a regex : > match\n> "
        );
    }

    #[test]
    fn blank_pattern_is_skipped() {
        let result = run_session::<DenseStore>("\n", Engine::Nfa);

        assert_eq!(result, "Please enter a regex : Please enter a regex : ");
    }
}
