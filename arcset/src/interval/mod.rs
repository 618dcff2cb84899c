//! Intervals of angles on the circle.
//!
//! An [`AngleInterval`] is the arc swept from `start` to `end` in the
//! increasing direction. Endpoints are stored raw (they may be negative or
//! exceed `2π`); when `end` reduces below `start` the arc wraps through zero,
//! and a non-zero span that is an exact multiple of `2π` is the full turn.
//!
//! Every comparison and every set operation first splits the interval into
//! anchored, non-wrapping [`Segment`]s (see [`crate::segment::split`]), works on
//! those, and reassembles the surviving pieces into intervals. Two pieces that
//! meet at the `0 ≡ 2π` cut are fused back into one wrapping interval.
//!
//! Union and difference always return an [`AngleIntervalSet`]: an ordered,
//! possibly empty sequence of intervals. A single interval is simply a set of
//! length one.
//!
//! ```rust
//! use arcset::AngleInterval;
//! use core::f64::consts::PI;
//!
//! let whole = AngleInterval::closed(0.0, PI) + AngleInterval::closed(PI, 1.5 * PI);
//! assert_eq!(whole, AngleInterval::closed(0.0, 1.5 * PI));
//!
//! let cut = AngleInterval::closed(0.0, PI) - AngleInterval::closed(PI / 3.0, 2.0 * PI / 3.0);
//! assert_eq!(cut.len(), 2);
//! assert_eq!(cut[0].to_string(), format!("[0, {})", PI / 3.0));
//! ```

mod parse;
mod set;

pub use set::AngleIntervalSet;

use crate::angle::{wrap_turn, Angle};
use crate::segment::{self, Segment};
use crate::tolerance::{approx_eq, definitely_gt};
use core::cmp::Ordering;
use core::f64::consts::TAU;
use core::fmt;
use core::ops::{Add, Sub};

/// An arc of the circle with inclusive or exclusive endpoints.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AngleInterval {
    start: Angle,
    end: Angle,
    include_start: bool,
    include_end: bool,
}

impl AngleInterval {
    /// Creates the arc from `start` to `end`.
    pub fn new(
        start: impl Into<Angle>,
        end: impl Into<Angle>,
        include_start: bool,
        include_end: bool,
    ) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            include_start,
            include_end,
        }
    }

    /// Creates the closed arc `[start, end]`.
    pub fn closed(start: impl Into<Angle>, end: impl Into<Angle>) -> Self {
        Self::new(start, end, true, true)
    }

    /// Creates an arc from endpoints given in degrees.
    pub fn from_degrees(start: f64, end: f64, include_start: bool, include_end: bool) -> Self {
        Self::new(
            Angle::from_degrees(start),
            Angle::from_degrees(end),
            include_start,
            include_end,
        )
    }

    /// The arc `[0, angle)` swept by a single angle.
    pub fn from_angle(angle: impl Into<Angle>) -> Self {
        Self::new(Angle::ZERO, angle, true, false)
    }

    /// The degenerate arc `[angle, angle]` holding one point.
    pub fn point(angle: impl Into<Angle>) -> Self {
        let angle = angle.into();
        Self::new(angle, angle, true, true)
    }

    /// The closed full turn `[0, 2π]`.
    pub fn full_turn() -> Self {
        Self::closed(Angle::ZERO, Angle::FULL_TURN)
    }

    /// Start angle as given.
    pub fn start(&self) -> Angle {
        self.start
    }

    /// End angle as given.
    pub fn end(&self) -> Angle {
        self.end
    }

    /// Whether the start point belongs to the interval.
    pub fn include_start(&self) -> bool {
        self.include_start
    }

    /// Whether the end point belongs to the interval.
    pub fn include_end(&self) -> bool {
        self.include_end
    }

    /// Anchored, non-wrapping segments covering this interval (one or two).
    pub fn segments(&self) -> Vec<Segment> {
        segment::split(
            self.start.radians(),
            self.end.radians(),
            self.include_start,
            self.include_end,
        )
    }

    /// Normalised `(start', end')`; `end' < start'` for a wrapping interval and
    /// `end' = start' + 2π` for a full turn.
    pub fn canonical_bounds(&self) -> (f64, f64) {
        segment::canonical_bounds(self.start.radians(), self.end.radians())
    }

    /// `true` when the span is a non-zero multiple of `2π`.
    pub fn is_full_turn(&self) -> bool {
        segment::is_full_turn(self.start.radians(), self.end.radians())
    }

    /// `true` when the end reduces below the start, so the arc crosses zero.
    pub fn is_wrapping(&self) -> bool {
        let (s, e) = self.canonical_bounds();
        e < s
    }

    /// Forward arc length in `[0, 2π]`.
    ///
    /// ```rust
    /// use arcset::AngleInterval;
    /// use core::f64::consts::{FRAC_PI_2, PI};
    ///
    /// let wrap = AngleInterval::closed(3.0 * FRAC_PI_2, FRAC_PI_2);
    /// assert!((wrap.length() - PI).abs() < 1e-12);
    /// ```
    pub fn length(&self) -> f64 {
        self.segments().iter().map(Segment::length).sum()
    }

    /// `true` when the interval holds no point (e.g. `(a, a)`).
    pub fn is_empty(&self) -> bool {
        self.segments().iter().all(Segment::is_empty)
    }

    /// Positional equality that also compares inclusiveness at every boundary.
    pub fn same_bounds(&self, other: &AngleInterval) -> bool {
        let mine = self.segments();
        let theirs = other.segments();
        mine.len() == theirs.len() && mine.iter().zip(&theirs).all(|(a, b)| a.same_bounds(b))
    }

    /// Whether every point of `other` lies in `self`.
    pub fn contains(&self, other: &AngleInterval) -> bool {
        if definitely_gt(other.length(), self.length()) {
            return false;
        }
        let outer = segment::merge(with_wrap_point(self.segments()));
        other
            .segments()
            .iter()
            .filter(|inner| !inner.is_empty())
            .all(|inner| {
                if inner.is_point() {
                    return self.contains_point(Angle::new(inner.lo.pos));
                }
                outer.iter().any(|o| segment::contains(o, inner))
            })
    }

    /// Whether the arc `[0, angle)` swept by `angle` lies in `self`.
    pub fn contains_angle(&self, angle: impl Into<Angle>) -> bool {
        self.contains(&AngleInterval::from_angle(angle))
    }

    /// Whether the single point `angle` lies in `self`.
    pub fn contains_point(&self, angle: impl Into<Angle>) -> bool {
        let p = wrap_turn(angle.into().radians());
        self.segments()
            .iter()
            .any(|s| s.holds(p) || (p == 0.0 && s.holds(TAU)))
    }

    /// Set union.
    pub fn union(&self, other: &AngleInterval) -> AngleIntervalSet {
        let merged = segment::merge(self.segments().into_iter().chain(other.segments()));
        let result = reassemble(merged);
        if result.len() != 1 {
            log::debug!("union of {} and {} is {}", self, other, result);
        }
        result
    }

    /// Set difference `self - other`.
    ///
    /// `0` and `2π` are one point of the circle, so a subtrahend that holds
    /// either one removes both: `[0, π] - [π, 2π]` is `(0, π)`, not `[0, π)`.
    pub fn difference(&self, other: &AngleInterval) -> AngleIntervalSet {
        let subtrahend = with_wrap_point(other.segments());

        let mut pieces = Vec::new();
        for seg in self.segments() {
            let mut working = vec![seg];
            for cut in &subtrahend {
                working = working
                    .into_iter()
                    .flat_map(|piece| segment::subtract(piece, *cut))
                    .collect();
            }
            pieces.extend(working);
        }

        let result = reassemble(segment::merge(pieces));
        if result.len() != 1 {
            log::debug!("difference {} - {} is {}", self, other, result);
        }
        result
    }
}

/// Adds the `0 ≡ 2π` point on the other side of the cut whenever a segment
/// holds it on one side, so both spellings of that point are covered.
fn with_wrap_point(mut segs: Vec<Segment>) -> Vec<Segment> {
    let holds_zero = segs.iter().any(|s| s.holds(0.0));
    let holds_full = segs.iter().any(|s| s.holds(TAU));
    if holds_full && !holds_zero {
        segs.push(Segment::point(0.0));
    }
    if holds_zero && !holds_full {
        segs.push(Segment::point(TAU));
    }
    segs
}

/// Converts sorted, disjoint pieces back into intervals, fusing the piece that
/// starts at `0` with the one that ends at `2π` when they meet at the cut.
fn reassemble(pieces: Vec<Segment>) -> AngleIntervalSet {
    let mut pieces: Vec<Segment> = pieces.into_iter().filter(|p| !p.is_empty()).collect();

    let wrap = match (pieces.first(), pieces.last()) {
        (Some(first), Some(last))
            if pieces.len() >= 2
                && approx_eq(first.lo.pos, 0.0)
                && approx_eq(last.hi.pos, TAU)
                && (first.lo.inclusive || last.hi.inclusive) =>
        {
            Some((*first, *last))
        }
        _ => None,
    };

    let mut intervals: Vec<AngleInterval> = Vec::with_capacity(pieces.len());
    if let Some((first, last)) = wrap {
        pieces.remove(0);
        pieces.pop();
        // Meeting end-to-end means the whole turn minus the cut point.
        let end = if approx_eq(first.hi.pos, last.lo.pos) {
            first.hi.pos + TAU
        } else {
            first.hi.pos
        };
        log::trace!("rejoining {} and {} across zero", last, first);
        intervals.extend(pieces.iter().map(from_segment));
        intervals.push(AngleInterval::new(
            last.lo.pos,
            end,
            last.lo.inclusive,
            first.hi.inclusive,
        ));
    } else {
        intervals.extend(pieces.iter().map(from_segment));
    }
    AngleIntervalSet::from(intervals)
}

fn from_segment(seg: &Segment) -> AngleInterval {
    AngleInterval::new(seg.lo.pos, seg.hi.pos, seg.lo.inclusive, seg.hi.inclusive)
}

impl PartialEq for AngleInterval {
    /// Equal when the canonical `(start', end')` pairs and the lengths match.
    /// Inclusiveness is not compared; see [`AngleInterval::same_bounds`].
    fn eq(&self, other: &Self) -> bool {
        if self.is_full_turn() && other.is_full_turn() {
            return true;
        }
        let (s1, e1) = self.canonical_bounds();
        let (s2, e2) = other.canonical_bounds();
        approx_eq(s1, s2) && approx_eq(e1, e2) && approx_eq(self.length(), other.length())
    }
}

impl PartialOrd for AngleInterval {
    /// Orders by length. Intervals of the same length that are not equal are
    /// incomparable, so `partial_cmp` returns `None` for them.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            return Some(Ordering::Equal);
        }
        let (a, b) = (self.length(), other.length());
        if approx_eq(a, b) {
            return None;
        }
        a.partial_cmp(&b)
    }
}

impl fmt::Display for AngleInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let open = if self.include_start { '[' } else { '(' };
        let close = if self.include_end { ']' } else { ')' };
        write!(f, "{}{}, {}{}", open, self.start, self.end, close)
    }
}

impl From<Angle> for AngleInterval {
    /// Same as [`AngleInterval::from_angle`].
    fn from(angle: Angle) -> Self {
        AngleInterval::from_angle(angle)
    }
}

impl Add for AngleInterval {
    type Output = AngleIntervalSet;
    fn add(self, rhs: AngleInterval) -> AngleIntervalSet {
        self.union(&rhs)
    }
}

impl Add for &AngleInterval {
    type Output = AngleIntervalSet;
    fn add(self, rhs: &AngleInterval) -> AngleIntervalSet {
        self.union(rhs)
    }
}

impl Sub for AngleInterval {
    type Output = AngleIntervalSet;
    fn sub(self, rhs: AngleInterval) -> AngleIntervalSet {
        self.difference(&rhs)
    }
}

impl Sub for &AngleInterval {
    type Output = AngleIntervalSet;
    fn sub(self, rhs: &AngleInterval) -> AngleIntervalSet {
        self.difference(rhs)
    }
}
