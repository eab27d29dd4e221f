// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search predicates.
//!
//! This module contains the predicates used in the search algorithm.
//!
//! # Organization
//!
//! - `assign`: AssignPredicate, one choice point per position
//! - `equation`: EquationPredicate and RecordSolutionPredicate for complete assignments
//! - Built-in predicates: `FailPredicate`, `SuspendPredicate`

pub mod assign;
pub mod equation;

pub use assign::AssignPredicate;
pub use equation::{EquationPredicate, RecordSolutionPredicate};

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult, TerminalPredicate};

/// Built-in fail predicate (Prolog's `fail.`).
///
/// This predicate always fails, forcing backtracking. As a terminal
/// predicate it makes the engine explore every alternative.
///
/// # Example
///
/// ```
/// use solve_eq::context::SearchContext;
/// use solve_eq::engine::EngineBuilder;
/// use solve_eq::predicates::{
///     AssignPredicate, EquationPredicate, FailPredicate, RecordSolutionPredicate,
/// };
///
/// let mut ctx = SearchContext::new();
/// let engine = EngineBuilder::new()
///     .add(Box::new(AssignPredicate))
///     .add(Box::new(EquationPredicate))
///     .add(Box::new(RecordSolutionPredicate))
///     .terminal(Box::new(FailPredicate))
///     .build();
///
/// let result = engine.search(&mut ctx);
/// assert!(result.is_none()); // Failed - engine consumed
/// assert_eq!(ctx.solutions.len(), 1);
/// ```
#[derive(Debug)]
pub struct FailPredicate;

impl Predicate for FailPredicate {
    fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        PredicateResult::Failure
    }

    fn name(&self) -> &str {
        "Fail"
    }
}

impl TerminalPredicate for FailPredicate {}

/// Built-in suspend predicate.
///
/// Pauses the engine with the context left exactly as the preceding
/// predicates built it; the caller reads the solution from the context and
/// may resume the engine to look for the next one.
#[derive(Debug)]
pub struct SuspendPredicate;

impl Predicate for SuspendPredicate {
    fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        PredicateResult::Suspend
    }

    fn name(&self) -> &str {
        "Suspend"
    }
}

impl TerminalPredicate for SuspendPredicate {}
