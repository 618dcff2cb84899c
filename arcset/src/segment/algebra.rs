//! Set algebra over non-wrapping segments.
//!
//! All comparisons go through [`crate::tolerance`], so two positions closer
//! than the crate epsilon are treated as the same boundary and their
//! inclusiveness flags decide the outcome.

use super::{Bound, Segment};
use crate::tolerance::{approx_eq, definitely_gt, definitely_lt};

/// Merges overlapping or touching segments into disjoint groups, sorted by start.
///
/// Two segments join when the next one starts strictly before the running end,
/// or exactly at it with at least one side inclusive there. Empty segments are
/// dropped.
pub fn merge<I>(segments: I) -> Vec<Segment>
where
    I: IntoIterator<Item = Segment>,
{
    let mut flat: Vec<Segment> = segments.into_iter().filter(|s| !s.is_empty()).collect();
    flat.sort_by(|a, b| a.lo.pos.total_cmp(&b.lo.pos));

    let mut iter = flat.into_iter();
    let Some(mut current) = iter.next() else {
        return Vec::new();
    };

    let mut merged = Vec::new();
    for next in iter {
        let touches = approx_eq(next.lo.pos, current.hi.pos)
            && (next.lo.inclusive || current.hi.inclusive);
        let joins = definitely_lt(next.lo.pos, current.hi.pos) || touches;

        if !joins {
            merged.push(current);
            current = next;
            continue;
        }

        if approx_eq(next.lo.pos, current.lo.pos) {
            current.lo.inclusive |= next.lo.inclusive;
        }
        if definitely_gt(next.hi.pos, current.hi.pos) {
            current.hi = next.hi;
        } else if approx_eq(next.hi.pos, current.hi.pos) {
            current.hi.inclusive |= next.hi.inclusive;
        }
    }
    merged.push(current);
    merged
}

/// `a - b`, yielding zero, one or two pieces.
///
/// Computed as `a ∩ (left of b)` plus `a ∩ (right of b)`, where the cuts at
/// `b`'s endpoints take the opposite inclusiveness of `b`. This single rule
/// covers every overlap topology:
///
/// * no overlap: `a` comes back unchanged;
/// * touching at one point, both inclusive: that endpoint of `a` turns exclusive;
/// * `b` covers `a`: nothing, except an endpoint of `a` that is inclusive where
///   the coincident endpoint of `b` is exclusive, which survives as `[p, p]`;
/// * `b` overlaps one side of `a`: the remainder on the other side, plus a
///   possible surviving endpoint;
/// * `b` strictly inside `a`: a left and a right remainder, each exclusive at the cut.
///
/// An empty `b` removes nothing; an empty `a` yields nothing.
pub fn subtract(a: Segment, b: Segment) -> Vec<Segment> {
    if a.is_empty() {
        return Vec::new();
    }
    if b.is_empty() {
        return vec![a];
    }

    let mut pieces = Vec::with_capacity(2);

    let left = Segment::new(a.lo, lower_of(a.hi, b.lo.flipped()));
    if let Some(piece) = non_empty(left) {
        pieces.push(piece);
    }

    let right = Segment::new(upper_of(a.lo, b.hi.flipped()), a.hi);
    if let Some(piece) = non_empty(right) {
        pieces.push(piece);
    }

    pieces
}

/// Whether `outer` contains every point of `inner`.
///
/// At a shared boundary an inclusive outer endpoint hosts either kind of inner
/// endpoint, while an exclusive outer endpoint only hosts an exclusive one.
pub fn contains(outer: &Segment, inner: &Segment) -> bool {
    if inner.is_empty() {
        return true;
    }
    let start_ok = definitely_lt(outer.lo.pos, inner.lo.pos)
        || (approx_eq(outer.lo.pos, inner.lo.pos) && (outer.lo.inclusive || !inner.lo.inclusive));
    let end_ok = definitely_gt(outer.hi.pos, inner.hi.pos)
        || (approx_eq(outer.hi.pos, inner.hi.pos) && (outer.hi.inclusive || !inner.hi.inclusive));
    start_ok && end_ok
}

/// The smaller of two upper endpoints; on a tie the point is kept only if both keep it.
fn lower_of(x: Bound, y: Bound) -> Bound {
    if definitely_lt(x.pos, y.pos) {
        x
    } else if definitely_gt(x.pos, y.pos) {
        y
    } else {
        Bound::new(x.pos, x.inclusive && y.inclusive)
    }
}

/// The larger of two lower endpoints; on a tie the point is kept only if both keep it.
fn upper_of(x: Bound, y: Bound) -> Bound {
    if definitely_gt(x.pos, y.pos) {
        x
    } else if definitely_lt(x.pos, y.pos) {
        y
    } else {
        Bound::new(x.pos, x.inclusive && y.inclusive)
    }
}

fn non_empty(seg: Segment) -> Option<Segment> {
    if seg.is_empty() {
        return None;
    }
    if seg.is_point() {
        return Some(Segment::point(seg.lo.pos));
    }
    Some(seg)
}
