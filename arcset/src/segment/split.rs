//! Interval splitting: the single normalisation point of the crate.

use super::Segment;
use crate::angle::wrap_turn;
use crate::tolerance::approx_eq;
use core::f64::consts::TAU;

/// `true` when the raw span `end - start` is a non-zero multiple of `2π`.
pub fn is_full_turn(start: f64, end: f64) -> bool {
    !approx_eq(start, end) && wrap_turn(end - start) == 0.0
}

/// Normalised `(start', end')` of an interval.
///
/// Both endpoints are reduced into `[0, 2π)`, except for a full turn where
/// `end' = start' + 2π`. `end' < start'` marks a wrapping interval.
pub fn canonical_bounds(start: f64, end: f64) -> (f64, f64) {
    let s = wrap_turn(start);
    if is_full_turn(start, end) {
        return (s, s + TAU);
    }
    let e = wrap_turn(end);
    if approx_eq(s, e) {
        (s, s)
    } else {
        (s, e)
    }
}

/// Splits the arc swept from `start` to `end` into non-wrapping segments.
///
/// * A non-wrapping arc gives one segment `[start', end']`.
/// * A wrapping arc gives `[start', 2π]` and `[0, end']`; the cut at `0 ≡ 2π`
///   is inclusive on both pieces since it is not a real endpoint.
/// * A wrapping arc that ends exactly at `0` gives the single segment
///   `[start', 2π]` carrying the interval's own end flag.
/// * A full turn anchored at `0` gives `[0, 2π]`; anchored elsewhere it gives
///   `[start', 2π]` and `[0, start']` so that every position stays in `[0, 2π]`.
pub fn split(start: f64, end: f64, include_start: bool, include_end: bool) -> Vec<Segment> {
    if !start.is_finite() || !end.is_finite() {
        log::warn!("splitting interval with non-finite endpoints ({}, {})", start, end);
    }

    let full = is_full_turn(start, end);
    let (s, e) = canonical_bounds(start, end);

    if full && s > 0.0 {
        return vec![
            Segment::from_parts(s, include_start, TAU, true),
            Segment::from_parts(0.0, true, s, include_end),
        ];
    }
    if s <= e {
        return vec![Segment::from_parts(s, include_start, e, include_end)];
    }
    if e == 0.0 {
        return vec![Segment::from_parts(s, include_start, TAU, include_end)];
    }
    vec![
        Segment::from_parts(s, include_start, TAU, true),
        Segment::from_parts(0.0, true, e, include_end),
    ]
}
