// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Backtracking search for the equation `a + b*c^2 + d^3 - e = 399`.
//!
//! The five values `a..e` are drawn without repetition from the candidate
//! pool {2, 3, 5, 7, 9}, so the search space is the 120 permutations of the
//! pool.
//!
//! # Architecture
//!
//! ## Immutable data
//!
//! - [`pool::CandidatePool`] - the values the search may use
//! - [`equation`] - the fixed equation
//!
//! ## Mutable state, tracked on the trail
//!
//! - [`Trail`] - records placements for O(1) backtracking
//! - [`state::PartialAssignment`] - the assignment and its used set
//!
//! Both live in a [`SearchContext`] owned by one search, so searches are
//! reentrant and independent.
//!
//! # Search Algorithm
//!
//! The [`SearchEngine`] runs a sequence of predicates:
//!
//! 1. **AssignPredicate**: one round per position, one choice per unused candidate
//! 2. **EquationPredicate**: checks the complete assignment
//! 3. **SuspendPredicate** (first solution) or **RecordSolutionPredicate + FailPredicate** (all solutions)
//!
//! # Example
//!
//! ```
//! use solve_eq::{solve, CandidatePool, SearchOutcome};
//!
//! match solve(CandidatePool::standard()) {
//!     SearchOutcome::Solved(assignment) => assert_eq!(assignment.to_string(), "[9, 2, 5, 7, 3]"),
//!     SearchOutcome::Exhausted => unreachable!(),
//! }
//! ```

pub mod context;
pub mod engine;
pub mod equation;
pub mod pool;
pub mod predicates;
pub mod solver;
pub mod state;
pub mod trail;

// Re-export commonly used types
pub use context::SearchContext;
pub use engine::{Predicate, PredicateResult, SearchEngine};
pub use pool::{CandidatePool, PoolError};
pub use solver::{solve, solve_all, SearchOutcome, Solver};
pub use state::Assignment;
pub use trail::Trail;
