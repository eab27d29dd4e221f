// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! AssignPredicate - Fills the assignment one position per round.
//!
//! Round `r` is the search depth: the assignment holds `r` values when the
//! round starts. Each remaining candidate is one choice, so the predicate
//! enumerates the permutations of the pool depth-first.

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult};
use crate::equation::ARITY;

/// AssignPredicate chooses a value for each position in turn.
///
/// This predicate runs for ARITY + 1 rounds (0..=ARITY):
/// - Rounds 0..ARITY return `Choices(k)` for the k candidates not yet used
/// - Round ARITY (assignment complete) returns `Success`
///
/// # Choices
///
/// Choice `i` places the `i`-th unused candidate in pool order, so for the
/// standard pool the first complete assignment tried is `[2, 3, 5, 7, 9]`.
/// The trail is rewound before each retry, so the set of unused candidates
/// is the same for every choice in a round.
#[derive(Debug)]
pub struct AssignPredicate;

impl Predicate for AssignPredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, round: usize) -> PredicateResult {
        debug_assert_eq!(
            round,
            ctx.assignment.len(),
            "AssignPredicate round out of step with assignment"
        );

        if ctx.assignment.is_complete() {
            return PredicateResult::Success;
        }

        match ctx.remaining().len() {
            0 => PredicateResult::Failure,
            count => PredicateResult::Choices(count),
        }
    }

    fn retry_pred(
        &mut self,
        ctx: &mut SearchContext,
        round: usize,
        choice: usize,
    ) -> PredicateResult {
        debug_assert!(round < ARITY, "AssignPredicate retried past the last position");

        match ctx.remaining().nth(choice) {
            Some(index) => {
                ctx.place(index);
                PredicateResult::SuccessSamePredicate
            }
            None => PredicateResult::Failure,
        }
    }

    fn name(&self) -> &str {
        "Assign"
    }
}
