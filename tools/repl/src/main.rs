// Copyright 2018 Steven Bosnick
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE-2.0 or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms

#[macro_use]
extern crate quicli;

extern crate itertools;
extern crate thompson;

mod session;

use std::io;
use quicli::prelude::*;
use session::{Engine, Session};
use thompson::{DenseStore, Exploration, SparseStore};

/// Match strings against regular expressions interactively.
#[derive(Debug, StructOpt)]
struct Cli {
    /// Store transitions in sparse adjacency lists instead of a dense matrix.
    #[structopt(long = "sparse")]
    sparse: bool,

    /// Simulate the NFA directly instead of building a DFA from it.
    #[structopt(long = "nfa")]
    nfa: bool,

    /// Explore the DFA states breadth first instead of depth first.
    #[structopt(long = "breadth-first")]
    breadth_first: bool,

    /// Pass many times for more log output.
    #[structopt(long = "verbose", short = "v", parse(from_occurrences))]
    verbosity: u8,
}

impl Cli {
    fn engine(&self) -> Engine {
        match (self.nfa, self.breadth_first) {
            (true, _) => Engine::Nfa,
            (false, true) => Engine::Dfa(Exploration::BreadthFirst),
            (false, false) => Engine::Dfa(Exploration::DepthFirst),
        }
    }
}

main!(|args: Cli, log_level: verbosity| {
    let engine = args.engine();
    info!(
        "matching with {:?} on the {} store",
        engine,
        if args.sparse { "sparse" } else { "dense" }
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock(), engine);

    if args.sparse {
        session.run::<SparseStore>()?;
    } else {
        session.run::<DenseStore>()?;
    }
});
