// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The fixed equation the search is trying to satisfy.
//!
//! Five positional values `(a, b, c, d, e)` satisfy the equation iff
//!
//! ```text
//! a + b*c^2 + d^3 - e == 399
//! ```
//!
//! # Examples
//!
//! ```
//! use solve_eq::equation::{evaluate, satisfies};
//!
//! assert_eq!(evaluate(&[9, 2, 5, 7, 3]), Some(399));
//! assert!(satisfies(&[9, 2, 5, 7, 3]));
//! assert!(!satisfies(&[2, 3, 5, 7, 9]));
//! ```

/// Number of positions in a complete assignment.
pub const ARITY: usize = 5;

/// Right-hand side of the equation.
pub const TARGET: i128 = 399;

/// Compute the left-hand side `a + b*c^2 + d^3 - e`.
///
/// Arithmetic is done in `i128` with checked operations; `None` means the
/// value does not fit, which can never equal [`TARGET`].
pub fn evaluate(values: &[i64; ARITY]) -> Option<i128> {
    let [a, b, c, d, e] = values.map(i128::from);
    let bc2 = b.checked_mul(c.checked_mul(c)?)?;
    let d3 = d.checked_mul(d)?.checked_mul(d)?;
    a.checked_add(bc2)?.checked_add(d3)?.checked_sub(e)
}

/// Whether the values, in positional order, satisfy the equation.
pub fn satisfies(values: &[i64; ARITY]) -> bool {
    evaluate(values) == Some(TARGET)
}
