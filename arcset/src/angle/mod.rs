//! Circular angles.
//!
//! [`Angle`] stores a raw radian value on top of [`qtty::Radians`]. The value is
//! never normalised on construction or by arithmetic; the circle only shows up
//! when angles are compared.
//!
//! # Equality and ordering
//!
//! Two angles are equal when their representatives in `[0, 2π)` coincide within
//! the crate tolerance (see [`crate::tolerance`]), so `Angle::new(x)` equals
//! `Angle::new(x + 2πn)` for every integer `n`.
//!
//! Ordering compares the same `[0, 2π)` representatives. This is a *circular*
//! ordering, not a total order: `Angle::new(6.2) > Angle::new(0.1)` even though
//! the two are only ~0.18 rad apart going forward through zero, and
//! `Angle::new(-0.1) > Angle::new(3.0)` because `-0.1` wraps to `2π - 0.1`.
//!
//! ```rust
//! use arcset::Angle;
//! use core::f64::consts::PI;
//!
//! let a = Angle::from_degrees(180.0);
//! assert_eq!(a, Angle::new(PI));
//! assert_eq!(a, Angle::new(3.0 * PI));
//! assert!(Angle::new(-0.1) > Angle::new(3.0));
//! ```

mod ops;
mod parse;

pub use ops::{BinaryOp, Operand};

use crate::tolerance::{approx_eq, circular_eq};
use core::cmp::Ordering;
use core::f64::consts::{FRAC_PI_2, PI, TAU};
use core::fmt;
use qtty::{Degree, Degrees, Radian, Radians};

/// A circular quantity stored in radians.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Angle(Radians);

impl Angle {
    /// Zero radians.
    pub const ZERO: Angle = Angle::new(0.0);
    /// A quarter turn (π/2).
    pub const QUARTER_TURN: Angle = Angle::new(FRAC_PI_2);
    /// Half a turn (π).
    pub const HALF_TURN: Angle = Angle::new(PI);
    /// A full turn (2π). Compares equal to [`Angle::ZERO`].
    pub const FULL_TURN: Angle = Angle::new(TAU);

    /// Creates an angle from a raw radian value.
    #[inline]
    pub const fn new(radians: f64) -> Self {
        Self(Radians::new(radians))
    }

    /// Alias of [`Angle::new`].
    #[inline]
    pub const fn from_radians(radians: f64) -> Self {
        Self::new(radians)
    }

    /// Creates an angle from degrees (`radians = degrees * π / 180`).
    ///
    /// ```rust
    /// use arcset::Angle;
    /// let a = Angle::from_degrees(90.0);
    /// assert!((a.radians() - core::f64::consts::FRAC_PI_2).abs() < 1e-12);
    /// ```
    #[inline]
    pub fn from_degrees(degrees: f64) -> Self {
        Self(Degrees::new(degrees).to::<Radian>())
    }

    /// Raw radian value, exactly as stored.
    #[inline]
    pub const fn radians(self) -> f64 {
        self.0.value()
    }

    /// Raw value converted to degrees (`radians * 180 / π`).
    #[inline]
    pub fn degrees(self) -> f64 {
        self.0.to::<Degree>().value()
    }

    /// Replaces the stored value.
    #[inline]
    pub fn set_radians(&mut self, radians: f64) {
        self.0 = Radians::new(radians);
    }

    /// Replaces the stored value with `degrees` converted to radians.
    #[inline]
    pub fn set_degrees(&mut self, degrees: f64) {
        *self = Self::from_degrees(degrees);
    }

    /// The underlying `qtty` quantity.
    #[inline]
    pub const fn as_radians(self) -> Radians {
        self.0
    }

    /// Representative of this angle in `[0, 2π)`.
    #[inline]
    pub fn normalized(self) -> Angle {
        Angle::new(wrap_turn(self.radians()))
    }

    /// Raw radian value as `f64`.
    #[inline]
    pub const fn to_f64(self) -> f64 {
        self.radians()
    }

    /// Raw radian value truncated toward zero (saturating on overflow, `0` for NaN).
    #[inline]
    pub fn to_i64(self) -> i64 {
        self.radians().trunc() as i64
    }
}

/// Reduces `radians` into `[0, 2π)`.
///
/// Values within tolerance of `0` or `2π` snap to exactly `0.0` so that a
/// rounding residue never leaves a position a hair below the full turn.
pub(crate) fn wrap_turn(radians: f64) -> f64 {
    let r = Radians::new(radians).wrap_pos().value();
    if approx_eq(r, 0.0) || approx_eq(r, TAU) {
        0.0
    } else {
        r
    }
}

impl PartialEq for Angle {
    fn eq(&self, other: &Self) -> bool {
        circular_eq(self.radians(), other.radians())
    }
}

impl PartialOrd for Angle {
    /// Circular ordering of the `[0, 2π)` representatives; `Equal` exactly when `==` holds.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            return Some(Ordering::Equal);
        }
        wrap_turn(self.radians()).partial_cmp(&wrap_turn(other.radians()))
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.radians())
    }
}

impl From<f64> for Angle {
    fn from(radians: f64) -> Self {
        Angle::new(radians)
    }
}

impl From<i32> for Angle {
    fn from(radians: i32) -> Self {
        Angle::new(f64::from(radians))
    }
}

impl From<Radians> for Angle {
    fn from(value: Radians) -> Self {
        Angle(value)
    }
}

impl From<Degrees> for Angle {
    fn from(value: Degrees) -> Self {
        Angle(value.to::<Radian>())
    }
}

impl From<Angle> for f64 {
    fn from(angle: Angle) -> Self {
        angle.radians()
    }
}

impl From<Angle> for Radians {
    fn from(angle: Angle) -> Self {
        angle.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    // ─────────────────────────────────────────────────────────────────────────────
    // Construction and conversion
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn from_degrees_matches_formula() {
        for d in [-720.0, -90.0, 0.0, 45.0, 180.0, 270.0, 1080.0] {
            assert_abs_diff_eq!(Angle::from_degrees(d).radians(), d * PI / 180.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn degrees_roundtrip() {
        let a = Angle::new(1.234);
        assert_abs_diff_eq!(a.degrees(), 1.234 * 180.0 / PI, epsilon = 1e-12);
        assert_abs_diff_eq!(Angle::from_degrees(a.degrees()).radians(), 1.234, epsilon = 1e-12);
    }

    #[test]
    fn setters_rewrite_radians() {
        let mut a = Angle::ZERO;
        a.set_degrees(180.0);
        assert_abs_diff_eq!(a.radians(), PI, epsilon = 1e-12);
        a.set_radians(-4.0);
        assert_eq!(a.radians(), -4.0);
    }

    #[test]
    fn raw_value_is_not_normalized() {
        let a = Angle::new(7.0 * PI);
        assert_eq!(a.radians(), 7.0 * PI);
        assert_abs_diff_eq!(a.normalized().radians(), PI, epsilon = 1e-9);
    }

    #[test]
    fn normalized_handles_negative_and_boundary() {
        assert_abs_diff_eq!(
            Angle::new(-FRAC_PI_2).normalized().radians(),
            3.0 * FRAC_PI_2,
            epsilon = 1e-12
        );
        assert_eq!(Angle::FULL_TURN.normalized().radians(), 0.0);
        assert_eq!(Angle::new(-1e-15).normalized().radians(), 0.0);
    }

    #[test]
    fn numeric_conversions() {
        let a = Angle::new(2.9);
        assert_eq!(a.to_f64(), 2.9);
        assert_eq!(a.to_i64(), 2);
        assert_eq!(Angle::new(-2.9).to_i64(), -2);
        assert_eq!(f64::from(a), 2.9);
        assert_eq!(Angle::from(3).radians(), 3.0);
    }

    #[test]
    fn qtty_conversions() {
        let a: Angle = Degrees::new(90.0).into();
        assert_abs_diff_eq!(a.radians(), FRAC_PI_2, epsilon = 1e-12);
        let r: Radians = Angle::new(1.5).into();
        assert_eq!(r.value(), 1.5);
        assert_eq!(Angle::from(Radians::new(0.5)).as_radians().value(), 0.5);
    }

    #[test]
    fn display_is_raw_radians() {
        assert_eq!(Angle::new(PI).to_string(), PI.to_string());
        assert_eq!(Angle::new(-7.5).to_string(), "-7.5");
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Comparison
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn equality_is_modulo_full_turn() {
        assert_eq!(Angle::new(FRAC_PI_2), Angle::new(FRAC_PI_2 + TAU));
        assert_eq!(Angle::new(FRAC_PI_2), Angle::new(FRAC_PI_2 - 3.0 * TAU));
        assert_eq!(Angle::ZERO, Angle::FULL_TURN);
        assert_ne!(Angle::ZERO, Angle::HALF_TURN);
    }

    #[test]
    fn equality_across_wrap_point() {
        assert_eq!(Angle::new(TAU - 1e-12), Angle::ZERO);
        assert_eq!(Angle::new(-1e-12), Angle::new(TAU));
    }

    #[test]
    fn ordering_compares_representatives() {
        assert!(Angle::HALF_TURN > Angle::QUARTER_TURN);
        assert!(Angle::new(5.0 * PI) > Angle::QUARTER_TURN);
        assert!(Angle::new(-0.1) > Angle::new(3.0));
        assert!(Angle::FULL_TURN < Angle::QUARTER_TURN);
        assert!(Angle::FULL_TURN <= Angle::ZERO);
        assert!(Angle::ZERO >= Angle::FULL_TURN);
    }

    #[test]
    fn ordering_equal_iff_eq() {
        let a = Angle::new(1.0);
        let b = Angle::new(1.0 + TAU);
        assert_eq!(a.partial_cmp(&b), Some(Ordering::Equal));
        assert!(!(a < b) && !(a > b));
    }

    proptest! {
        #[test]
        fn prop_modular_equivalence(x in -1e3..1e3f64, n in -50i32..50) {
            prop_assert_eq!(Angle::new(x), Angle::new(x + f64::from(n) * TAU));
        }

        #[test]
        fn prop_normalized_range(x in -1e6..1e6f64) {
            let r = Angle::new(x).normalized().radians();
            prop_assert!((0.0..TAU).contains(&r));
        }

        #[test]
        fn prop_normalized_is_equal(x in -1e4..1e4f64) {
            prop_assert_eq!(Angle::new(x).normalized(), Angle::new(x));
        }
    }
}
