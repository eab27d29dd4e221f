// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use solve_eq::context::SearchContext;
use solve_eq::state::Assignment;
use solve_eq::{Predicate, PredicateResult};

/// Every permutation of `values`, generated independently of the engine.
pub fn permutations(values: &[i64]) -> Vec<Vec<i64>> {
    if values.is_empty() {
        return vec![Vec::new()];
    }
    let mut result = Vec::new();
    for i in 0..values.len() {
        let mut rest = values.to_vec();
        let first = rest.remove(i);
        for mut tail in permutations(&rest) {
            tail.insert(0, first);
            result.push(tail);
        }
    }
    result
}

/// Brute-force the equation over every permutation of `values`.
pub fn brute_force(values: &[i64; 5]) -> Vec<Assignment> {
    permutations(values)
        .into_iter()
        .filter(|p| p[0] + p[1] * p[2] * p[2] + p[3] * p[3] * p[3] - p[4] == 399)
        .map(|p| Assignment::new([p[0], p[1], p[2], p[3], p[4]]))
        .collect()
}

/// Assert the no-repetition invariant on the current assignment.
pub fn check_invariants(ctx: &SearchContext) {
    let assignment = &ctx.assignment;
    assert!(assignment.is_consistent(), "inconsistent {:?}", assignment);
    assert_eq!(assignment.used().len(), assignment.len());

    let mut values = assignment.values().to_vec();
    values.sort_unstable();
    values.dedup();
    assert_eq!(values.len(), assignment.len(), "duplicate in {:?}", assignment);
    assert!(assignment.values().iter().all(|&v| ctx.pool.contains(v)));
}

/// Wraps a predicate and checks the invariants before and after every call,
/// so they are verified at every depth the engine visits.
#[derive(Debug)]
pub struct Checked<P>(pub P);

impl<P: Predicate> Predicate for Checked<P> {
    fn try_pred(&mut self, ctx: &mut SearchContext, round: usize) -> PredicateResult {
        check_invariants(ctx);
        let result = self.0.try_pred(ctx, round);
        check_invariants(ctx);
        result
    }

    fn retry_pred(&mut self, ctx: &mut SearchContext, round: usize, choice: usize) -> PredicateResult {
        check_invariants(ctx);
        assert_eq!(ctx.assignment.len(), round, "retry at round {} saw wrong depth", round);
        let result = self.0.retry_pred(ctx, round, choice);
        check_invariants(ctx);
        result
    }

    fn name(&self) -> &str {
        self.0.name()
    }
}

/// Offers one choice per listed pool index; each choice places that candidate.
#[derive(Debug)]
pub struct PlaceFrom(pub Vec<usize>);

impl Predicate for PlaceFrom {
    fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        if self.0.is_empty() {
            PredicateResult::Failure
        } else {
            PredicateResult::Choices(self.0.len())
        }
    }

    fn retry_pred(&mut self, ctx: &mut SearchContext, _round: usize, choice: usize) -> PredicateResult {
        ctx.place(self.0[choice]);
        PredicateResult::Success
    }

    fn name(&self) -> &str {
        "PlaceFrom"
    }
}

/// Places pool index `round` for rounds 0..n, one round at a time.
#[derive(Debug)]
pub struct PlaceInOrder(pub usize);

impl Predicate for PlaceInOrder {
    fn try_pred(&mut self, ctx: &mut SearchContext, round: usize) -> PredicateResult {
        if round >= self.0 {
            return PredicateResult::Failure;
        }
        ctx.place(round);
        if round + 1 < self.0 {
            PredicateResult::SuccessSamePredicate
        } else {
            PredicateResult::Success
        }
    }

    fn name(&self) -> &str {
        "PlaceInOrder"
    }
}
