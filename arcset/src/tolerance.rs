//! Fixed floating-point tolerance shared by every comparison in the crate.
//!
//! Two positions `a` and `b` (radians) are considered equal when
//!
//! ```text
//! |a - b| <= ABS_EPSILON  or  |a - b| <= REL_EPSILON * max(|a|, |b|)
//! ```
//!
//! The same pair of constants is used for angle equality, segment boundary
//! coincidence, containment and the merge/subtract sweeps, so results at
//! shared boundaries are reproducible. Ordering helpers (`definitely_lt`,
//! `definitely_gt`) treat tolerance-equal values as neither less nor greater.

use core::f64::consts::TAU;

/// Absolute tolerance in radians.
pub const ABS_EPSILON: f64 = 1e-9;

/// Relative tolerance (fraction of the larger magnitude).
pub const REL_EPSILON: f64 = 1e-9;

/// `true` when `a` and `b` are equal within the crate tolerance.
#[inline]
pub fn approx_eq(a: f64, b: f64) -> bool {
    approx::relative_eq!(a, b, epsilon = ABS_EPSILON, max_relative = REL_EPSILON)
}

/// `a < b` and the two are not tolerance-equal.
#[inline]
pub fn definitely_lt(a: f64, b: f64) -> bool {
    a < b && !approx_eq(a, b)
}

/// `a > b` and the two are not tolerance-equal.
#[inline]
pub fn definitely_gt(a: f64, b: f64) -> bool {
    a > b && !approx_eq(a, b)
}

/// `true` when `a` and `b` name the same point of the circle.
///
/// Compares the forward distance from `b` to `a` against both `0` and `2π`,
/// so values straddling the wrap point (e.g. `-1e-12` and `0.0`) still match.
#[inline]
pub fn circular_eq(a: f64, b: f64) -> bool {
    let d = (a - b).rem_euclid(TAU);
    approx_eq(d, 0.0) || approx_eq(d, TAU)
}
