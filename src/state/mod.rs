// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Mutable search state.
//!
//! - `assignment`: the partial assignment and its used set, changed only
//!   through trail-recorded operations
//! - `statistics`: counters that survive backtracking

pub mod assignment;
pub mod statistics;

pub use assignment::{Assignment, PartialAssignment};
pub use statistics::{Counters, Statistics};
