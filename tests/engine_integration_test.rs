// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Integration tests for the search engine.
//!
//! These tests validate that the engine correctly:
//! - Runs predicates in sequence
//! - Handles Choices and retry_pred correctly
//! - Backtracks on failure, undoing placements
//! - Supports SuccessSamePredicate for multi-round predicates
//! - Suspends execution when requested, and resumes from there

mod common;

use common::{PlaceFrom, PlaceInOrder};
use solve_eq::context::SearchContext;
use solve_eq::engine::EngineBuilder;
use solve_eq::predicates::{AssignPredicate, FailPredicate, SuspendPredicate};
use solve_eq::state::{Counters, Statistics};

#[test]
fn test_choice_places_first_option() {
    let mut ctx = SearchContext::new();
    let engine = EngineBuilder::new()
        .add(Box::new(PlaceFrom(vec![4, 0, 2])))
        .terminal(Box::new(SuspendPredicate))
        .build();

    // Should suspend after choosing first option
    let engine = engine.search(&mut ctx);
    assert!(engine.is_some()); // Suspended
    let engine = engine.unwrap();
    assert_eq!(ctx.assignment.values(), &[9]);
    let (tries, retries) = engine.statistics();
    assert_eq!(tries, 2); // PlaceFrom.try_pred + Suspend.try_pred
    assert_eq!(retries, 1); // PlaceFrom.retry_pred(choice=0)
}

#[test]
fn test_two_choice_points() {
    let mut ctx = SearchContext::new();
    let engine = EngineBuilder::new()
        .add(Box::new(PlaceFrom(vec![0, 1])))
        .add(Box::new(PlaceFrom(vec![3, 4])))
        .terminal(Box::new(SuspendPredicate))
        .build();

    let engine = engine.search(&mut ctx).unwrap();
    assert_eq!(ctx.assignment.values(), &[2, 7]);
    let (tries, retries) = engine.statistics();
    assert_eq!(tries, 3); // All three predicates tried
    assert_eq!(retries, 2); // One retry_pred per choice point
}

#[test]
fn test_backtracking_with_failure() {
    let mut ctx = SearchContext::new();
    let engine = EngineBuilder::new()
        .add(Box::new(PlaceFrom(vec![0, 1])))
        .add(Box::new(FailPredicate)) // Force backtracking
        .terminal(Box::new(SuspendPredicate))
        .build();

    let result = engine.search(&mut ctx);
    assert!(result.is_none()); // Exhausted - engine consumed
    assert!(ctx.assignment.is_empty());
    assert_eq!(ctx.statistics.get(Counters::Placements), 2);
}

#[test]
fn test_backtracking_exhausts_options() {
    let mut ctx = SearchContext::new();
    let engine = EngineBuilder::new()
        .add(Box::new(PlaceFrom(vec![0, 1, 2])))
        .add(Statistics::counting_predicate(Counters::Leaves, None))
        .add(Box::new(PlaceFrom(vec![3, 4])))
        .add(Statistics::counting_predicate(Counters::Solutions, None))
        .terminal(Box::new(FailPredicate))
        .build();

    assert!(engine.search(&mut ctx).is_none());
    // Every combination of first * second is reached exactly once
    assert_eq!(ctx.statistics.get(Counters::Leaves), 3);
    assert_eq!(ctx.statistics.get(Counters::Solutions), 6);
    assert_eq!(ctx.statistics.get(Counters::Placements), 9);
    assert!(ctx.trail.is_empty());
}

#[test]
fn test_empty_search_space() {
    let mut ctx = SearchContext::new();
    let engine = EngineBuilder::new()
        .add(Box::new(PlaceFrom(vec![])))
        .terminal(Box::new(SuspendPredicate))
        .build();

    assert!(engine.search(&mut ctx).is_none());
}

#[test]
fn test_multi_round_predicate() {
    let mut ctx = SearchContext::new();
    let engine = EngineBuilder::new()
        .add(Box::new(PlaceInOrder(3)))
        .terminal(Box::new(SuspendPredicate))
        .build();

    let engine = engine.search(&mut ctx).unwrap();
    let (tries, retries) = engine.statistics();

    // PlaceInOrder(0, 1, 2) + Suspend
    assert_eq!(tries, 4);
    assert_eq!(retries, 0);
    assert_eq!(ctx.assignment.values(), &[2, 3, 5]);
}

#[test]
fn test_resume_walks_all_choices() {
    let mut ctx = SearchContext::new();
    let mut engine = EngineBuilder::new()
        .add(Box::new(PlaceFrom(vec![0, 1])))
        .add(Box::new(PlaceFrom(vec![2, 3, 4])))
        .add(Statistics::counting_predicate(Counters::Solutions, None))
        .terminal(Box::new(SuspendPredicate))
        .build();

    let mut seen = Vec::new();
    while let Some(suspended) = engine.search(&mut ctx) {
        seen.push(ctx.assignment.values().to_vec());
        engine = suspended;
    }
    assert_eq!(
        seen,
        vec![
            vec![2, 5],
            vec![2, 7],
            vec![2, 9],
            vec![3, 5],
            vec![3, 7],
            vec![3, 9]
        ]
    );
    assert_eq!(ctx.statistics.get(Counters::Solutions), 6);
    assert!(ctx.assignment.is_empty());
}

#[test]
fn test_assign_counts_placements() {
    let mut ctx = SearchContext::new();
    let engine = EngineBuilder::new()
        .add(Box::new(AssignPredicate))
        .add(Statistics::counting_predicate(
            Counters::Leaves,
            Some(|ctx: &SearchContext| ctx.assignment.values()[0] == 9),
        ))
        .terminal(Box::new(FailPredicate))
        .build();

    assert!(engine.search(&mut ctx).is_none());
    assert_eq!(ctx.statistics.get(Counters::Placements), 325);
    // 4! permutations start with 9
    assert_eq!(ctx.statistics.get(Counters::Leaves), 24);
}

#[test]
fn test_only_terminal() {
    let mut ctx = SearchContext::new();
    let program = EngineBuilder::new().terminal(Box::new(SuspendPredicate));
    assert_eq!(program.len(), 1);

    let result = program.build().search(&mut ctx);
    assert!(result.is_some()); // Suspends immediately with just terminal
}
