//! Non-wrapping segments of the circle.
//!
//! Every interval is reduced to one or two [`Segment`]s anchored inside
//! `[0, 2π]` before it is compared or combined (see [`split`]). The algebra in
//! [`algebra`] only ever sees segments, so it can reason on the real line and
//! leave the wraparound to the splitter and to interval reassembly.

pub mod algebra;
mod split;

pub use algebra::{contains, merge, subtract};
pub use split::{canonical_bounds, is_full_turn, split};

use crate::tolerance::{approx_eq, definitely_gt, definitely_lt};
use core::fmt;

/// One endpoint of a segment.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bound {
    /// Position in radians, within `[0, 2π]`.
    pub pos: f64,
    /// Whether the endpoint itself belongs to the segment.
    pub inclusive: bool,
}

impl Bound {
    /// Creates a bound.
    #[inline]
    pub const fn new(pos: f64, inclusive: bool) -> Self {
        Self { pos, inclusive }
    }

    /// Same position with the opposite inclusiveness.
    #[inline]
    pub const fn flipped(self) -> Self {
        Self::new(self.pos, !self.inclusive)
    }
}

/// A non-wrapping arc `lo ..= hi` with per-endpoint inclusiveness.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment {
    /// Lower endpoint.
    pub lo: Bound,
    /// Upper endpoint.
    pub hi: Bound,
}

impl Segment {
    /// Creates a segment from its endpoints.
    #[inline]
    pub const fn new(lo: Bound, hi: Bound) -> Self {
        Self { lo, hi }
    }

    /// Creates a segment from raw positions and flags.
    #[inline]
    pub const fn from_parts(lo: f64, include_lo: bool, hi: f64, include_hi: bool) -> Self {
        Self::new(Bound::new(lo, include_lo), Bound::new(hi, include_hi))
    }

    /// The closed single-point segment `[p, p]`.
    #[inline]
    pub const fn point(pos: f64) -> Self {
        Self::from_parts(pos, true, pos, true)
    }

    /// `hi - lo`.
    #[inline]
    pub fn length(&self) -> f64 {
        self.hi.pos - self.lo.pos
    }

    /// `true` when the segment holds no point at all: reversed, or zero-length
    /// with at least one exclusive endpoint.
    pub fn is_empty(&self) -> bool {
        if definitely_gt(self.lo.pos, self.hi.pos) {
            return true;
        }
        approx_eq(self.lo.pos, self.hi.pos) && !(self.lo.inclusive && self.hi.inclusive)
    }

    /// `true` for the single-point segment `[p, p]`.
    pub fn is_point(&self) -> bool {
        approx_eq(self.lo.pos, self.hi.pos) && self.lo.inclusive && self.hi.inclusive
    }

    /// Whether the position `pos` (already in `[0, 2π]`) lies inside the segment.
    pub fn holds(&self, pos: f64) -> bool {
        let after_lo = definitely_gt(pos, self.lo.pos)
            || (approx_eq(pos, self.lo.pos) && self.lo.inclusive);
        let before_hi = definitely_lt(pos, self.hi.pos)
            || (approx_eq(pos, self.hi.pos) && self.hi.inclusive);
        after_lo && before_hi
    }

    /// Positions and flags equal within tolerance.
    pub fn same_bounds(&self, other: &Segment) -> bool {
        approx_eq(self.lo.pos, other.lo.pos)
            && approx_eq(self.hi.pos, other.hi.pos)
            && self.lo.inclusive == other.lo.inclusive
            && self.hi.inclusive == other.hi.inclusive
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let open = if self.lo.inclusive { '[' } else { '(' };
        let close = if self.hi.inclusive { ']' } else { ')' };
        write!(f, "{}{}, {}{}", open, self.lo.pos, self.hi.pos, close)
    }
}
