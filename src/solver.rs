// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Ready-made search programs over a candidate pool.
//!
//! Two programs are built from the predicates in [`crate::predicates`]:
//!
//! ```text
//! first: Assign -> Equation -> Suspend
//! all:   Assign -> Equation -> RecordSolution -> Fail
//! ```
//!
//! The first stops with the solved assignment left in the context; the
//! second backtracks through all `5! = 120` permutations.

use crate::context::SearchContext;
use crate::engine::EngineBuilder;
use crate::pool::CandidatePool;
use crate::predicates::{
    AssignPredicate, EquationPredicate, FailPredicate, RecordSolutionPredicate, SuspendPredicate,
};
use crate::state::{Assignment, Counters, Statistics};
use tracing::info;

/// Result of a first-solution search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// A satisfying assignment, in positional order.
    Solved(Assignment),
    /// Every permutation was tried and none satisfied the equation.
    Exhausted,
}

impl SearchOutcome {
    pub fn is_solved(&self) -> bool {
        matches!(self, SearchOutcome::Solved(_))
    }

    pub fn into_assignment(self) -> Option<Assignment> {
        match self {
            SearchOutcome::Solved(assignment) => Some(assignment),
            SearchOutcome::Exhausted => None,
        }
    }
}

/// Runs searches over one pool, keeping the context of the last run.
///
/// # Example
///
/// ```
/// use solve_eq::pool::CandidatePool;
/// use solve_eq::solver::{SearchOutcome, Solver};
/// use solve_eq::state::{Assignment, Counters};
///
/// let mut solver = Solver::new(CandidatePool::standard());
/// assert_eq!(
///     solver.first(),
///     SearchOutcome::Solved(Assignment::new([9, 2, 5, 7, 3]))
/// );
///
/// assert_eq!(solver.all().len(), 1);
/// assert_eq!(solver.statistics().get(Counters::Leaves), 120);
/// ```
#[derive(Debug)]
pub struct Solver {
    ctx: SearchContext,
}

impl Solver {
    pub fn new(pool: CandidatePool) -> Self {
        Self {
            ctx: SearchContext::with_pool(pool),
        }
    }

    /// Find the first satisfying assignment in pool order.
    pub fn first(&mut self) -> SearchOutcome {
        self.ctx.reset();
        let engine = EngineBuilder::new()
            .add(Box::new(AssignPredicate))
            .add(Box::new(EquationPredicate))
            .terminal(Box::new(SuspendPredicate))
            .build();

        let outcome = match engine.search(&mut self.ctx) {
            Some(_suspended) => match self.ctx.assignment.to_complete() {
                Some(assignment) => SearchOutcome::Solved(assignment),
                None => panic!(
                    "Search suspended with incomplete assignment {:?}",
                    self.ctx.assignment.values()
                ),
            },
            None => SearchOutcome::Exhausted,
        };

        info!(
            pool = ?self.ctx.pool.values(),
            ?outcome,
            leaves = self.ctx.statistics.get(Counters::Leaves),
            "first-solution search finished"
        );
        outcome
    }

    /// Find every satisfying assignment, in search order.
    pub fn all(&mut self) -> Vec<Assignment> {
        self.ctx.reset();
        let engine = EngineBuilder::new()
            .add(Box::new(AssignPredicate))
            .add(Box::new(EquationPredicate))
            .add(Box::new(RecordSolutionPredicate))
            .terminal(Box::new(FailPredicate))
            .build();

        assert!(
            engine.search(&mut self.ctx).is_none(),
            "FAIL-terminated program suspended"
        );

        info!(
            pool = ?self.ctx.pool.values(),
            solutions = self.ctx.solutions.len(),
            leaves = self.ctx.statistics.get(Counters::Leaves),
            "full enumeration finished"
        );
        self.ctx.solutions.clone()
    }

    /// Counters from the last run.
    pub fn statistics(&self) -> &Statistics {
        &self.ctx.statistics
    }

    /// The context as the last run left it.
    pub fn context(&self) -> &SearchContext {
        &self.ctx
    }
}

/// Find the first satisfying assignment of `pool`.
pub fn solve(pool: CandidatePool) -> SearchOutcome {
    Solver::new(pool).first()
}

/// Find every satisfying assignment of `pool`.
pub fn solve_all(pool: CandidatePool) -> Vec<Assignment> {
    Solver::new(pool).all()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solve_standard_pool() {
        let outcome = solve(CandidatePool::standard());
        assert!(outcome.is_solved());
        assert_eq!(
            outcome.into_assignment(),
            Some(Assignment::new([9, 2, 5, 7, 3]))
        );
    }

    #[test]
    fn test_first_leaves_solved_state() {
        let mut solver = Solver::new(CandidatePool::standard());
        solver.first();
        let ctx = solver.context();
        assert!(ctx.assignment.is_complete());
        assert!(ctx.assignment.is_consistent());
        assert_eq!(ctx.statistics.get(Counters::Solutions), 1);
    }

    #[test]
    fn test_exhausted_pool() {
        let pool = CandidatePool::new([1, 2, 3, 4, 5]).unwrap();
        let mut solver = Solver::new(pool);
        assert_eq!(solver.first(), SearchOutcome::Exhausted);
        assert_eq!(solver.statistics().get(Counters::Leaves), 120);
        assert!(solver.context().assignment.is_empty());
        assert_eq!(SearchOutcome::Exhausted.into_assignment(), None);
    }

    #[test]
    fn test_all_counts_every_permutation() {
        let mut solver = Solver::new(CandidatePool::standard());
        let solutions = solver.all();
        assert_eq!(solutions, vec![Assignment::new([9, 2, 5, 7, 3])]);
        assert_eq!(solver.statistics().get(Counters::Leaves), 120);
        assert_eq!(solver.statistics().get(Counters::Solutions), 1);
        // 5 + 5*4 + 5*4*3 + 5*4*3*2 + 5! descents
        assert_eq!(solver.statistics().get(Counters::Placements), 325);
        assert!(solver.context().assignment.is_empty());
    }

    #[test]
    fn test_rerun_resets_state() {
        let mut solver = Solver::new(CandidatePool::standard());
        let first = solver.first();
        let second = solver.first();
        assert_eq!(first, second);
        assert_eq!(solver.statistics().get(Counters::Solutions), 1);
    }

    #[test]
    fn test_all_runs_to_exhaustion() {
        let mut solver = Solver::new(CandidatePool::new([400, 0, -1, 1, 2]).unwrap());
        let first = solver.first();
        // A suspended first() leaves state behind; all() still exhausts from scratch
        assert!(first.is_solved());
        let solutions = solver.all();
        assert_eq!(solutions.len(), 5);
        assert_eq!(solutions[0], first.into_assignment().unwrap());
        assert!(solver.context().assignment.is_empty());
        assert!(solver.context().trail.is_empty());
        assert_eq!(solver.statistics().get(Counters::Leaves), 120);
    }
}
