// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Predicates that act on a complete assignment.
//!
//! - `EquationPredicate` checks the equation and fails the branch if it does not hold
//! - `RecordSolutionPredicate` copies the assignment into the context's solutions

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult};
use crate::equation;
use crate::state::Counters;
use tracing::debug;

/// Succeeds iff the complete assignment satisfies the equation.
///
/// Counts every complete assignment it sees as a leaf, and every
/// satisfying one as a solution.
#[derive(Debug)]
pub struct EquationPredicate;

impl Predicate for EquationPredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        let Some(assignment) = ctx.assignment.to_complete() else {
            return PredicateResult::Failure;
        };

        ctx.statistics.increment_counter(Counters::Leaves);
        if equation::satisfies(assignment.values()) {
            ctx.statistics.increment_counter(Counters::Solutions);
            debug!(%assignment, "equation satisfied");
            PredicateResult::Success
        } else {
            PredicateResult::Failure
        }
    }

    fn name(&self) -> &str {
        "Equation"
    }
}

/// Records the current assignment as a solution and succeeds.
///
/// Followed by `FailPredicate`, this turns a first-solution program into
/// one that enumerates every solution.
#[derive(Debug)]
pub struct RecordSolutionPredicate;

impl Predicate for RecordSolutionPredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        if ctx.record_solution() {
            PredicateResult::Success
        } else {
            PredicateResult::Failure
        }
    }

    fn name(&self) -> &str {
        "RecordSolution"
    }
}
