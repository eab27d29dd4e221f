// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Predicate trait for non-deterministic search.
//!
//! The search engine works by trying predicates in sequence. Each predicate
//! represents a step in the search. Predicates can succeed, fail, offer
//! choices, or suspend the search.
//!
//! # Example
//!
//! ```
//! use solve_eq::engine::{Predicate, PredicateResult};
//! use solve_eq::context::SearchContext;
//!
//! #[derive(Debug)]
//! struct PlaceFirstFree;
//!
//! impl Predicate for PlaceFirstFree {
//!     fn try_pred(&mut self, ctx: &mut SearchContext, _round: usize) -> PredicateResult {
//!         match ctx.remaining().iter().next() {
//!             Some(index) => {
//!                 ctx.place(index);
//!                 PredicateResult::Success
//!             }
//!             None => PredicateResult::Failure,
//!         }
//!     }
//!
//!     fn name(&self) -> &str {
//!         "PlaceFirstFree"
//!     }
//! }
//! ```

use crate::context::SearchContext;
use std::fmt::Debug;

/// Result of attempting a predicate.
///
/// Predicates can return:
/// - `Success`: Move to next predicate in the sequence
/// - `SuccessSamePredicate`: Stay at same predicate, increment round (for iterative predicates)
/// - `Failure`: Backtrack to previous predicate
/// - `Choices(n)`: Predicate has n choices to explore via retry_pred
/// - `Suspend`: Pause execution, leaving the context in its current state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredicateResult {
    /// Predicate succeeded. Move to next predicate in sequence.
    Success,

    /// Predicate succeeded but stay at same predicate with next round.
    /// Allows a single predicate to execute multiple times (e.g., once per position).
    SuccessSamePredicate,

    /// Predicate has no (more) valid choices. Backtrack to previous predicate.
    Failure,

    /// Predicate has multiple choices to explore.
    /// Engine will call retry_pred(round, choice) for each choice in 0..n.
    Choices(usize),

    /// Suspend execution. Engine returns control with state preserved.
    Suspend,
}

/// A terminal predicate that ends a program.
///
/// Terminal predicates are FAIL or SUSPEND - they never return Success.
/// [`EngineBuilder`](super::EngineBuilder) only builds programs that end
/// with one.
pub trait TerminalPredicate: Predicate {}

/// Trait for search predicates in the non-deterministic engine.
///
/// # Lifecycle
///
/// 1. Engine calls `try_pred` when first encountering the predicate
/// 2. If Success: engine advances to next predicate
/// 3. If Failure: engine backtracks to previous predicate
/// 4. If Choices(n): engine calls `retry_pred` for choice 0, then on each
///    backtrack for the next choice, until one is left to try
///
/// # Trail Integration
///
/// Predicates modify `SearchContext` through trail-recorded operations.
/// Before each `retry_pred` and on every backtrack the engine rewinds the
/// trail, so a choice always starts from the state `try_pred` left behind.
pub trait Predicate: Debug {
    /// Try this predicate for a given round.
    ///
    /// The round starts at 0 and increments each time the predicate returns
    /// `SuccessSamePredicate`.
    fn try_pred(&mut self, ctx: &mut SearchContext, round: usize) -> PredicateResult;

    /// Retry this predicate with a specific choice.
    ///
    /// Called after try_pred returns Choices(n), for each choice in 0..n.
    /// May return `Success`, `SuccessSamePredicate` or `Failure`; returning
    /// Choices or Suspend here is a bug and panics in the engine.
    #[allow(unused)]
    fn retry_pred(
        &mut self,
        ctx: &mut SearchContext,
        round: usize,
        choice: usize,
    ) -> PredicateResult {
        // Predicates that return Choices must implement this.
        panic!("{}::retry_pred should never be called", self.name());
    }

    /// Name for logging and debugging. Defaults to the type name.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}
