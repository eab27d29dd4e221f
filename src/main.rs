// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Prints the assignment of {2, 3, 5, 7, 9} satisfying `a + b*c^2 + d^3 - e = 399`.

use clap::Parser;
use solve_eq::{CandidatePool, SearchOutcome, Solver};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "solve-eq", version, about)]
struct Cli {
    /// Print every solution, one per line, instead of the first one
    #[arg(long)]
    all: bool,

    /// Write search counters to stderr
    #[arg(long)]
    stats: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut solver = Solver::new(CandidatePool::standard());

    if cli.all {
        let solutions = solver.all();
        assert!(!solutions.is_empty(), "no assignment satisfies the equation");
        for solution in &solutions {
            println!("{}", solution);
        }
    } else {
        match solver.first() {
            SearchOutcome::Solved(solution) => println!("{}", solution),
            SearchOutcome::Exhausted => panic!("no assignment satisfies the equation"),
        }
    }

    if cli.stats {
        eprintln!("{}", solver.statistics());
    }
}
