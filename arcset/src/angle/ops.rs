//! Arithmetic on angles.
//!
//! Operators are unchecked: nothing is normalised and division follows
//! IEEE-754 (`x / 0.0` is infinite). `+` and `-` accept another [`Angle`] or a
//! bare `f64` interpreted as radians; `*` and `/` accept only a scalar.
//!
//! For callers that hold an operand whose kind is only known at run time,
//! [`Angle::apply`] dispatches over the [`Operand`] tagged union and reports
//! unsupported combinations as [`ArcError::UnsupportedOperation`].

use super::Angle;
use crate::error::{ArcError, ArcResult, NumericErrorKind};
use core::fmt;
use core::ops::*;

/// Right-hand operand of an angle operation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Operand {
    /// Another angle.
    Angle(Angle),
    /// A plain number (radians for `+`/`-`, a scalar for `*`/`/`).
    Number(f64),
}

impl Operand {
    fn kind(&self) -> &'static str {
        match self {
            Operand::Angle(_) => "an angle",
            Operand::Number(_) => "a number",
        }
    }
}

impl From<Angle> for Operand {
    fn from(value: Angle) -> Self {
        Operand::Angle(value)
    }
}

impl From<f64> for Operand {
    fn from(value: f64) -> Self {
        Operand::Number(value)
    }
}

/// Binary operators understood by [`Angle::apply`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinaryOp {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

impl BinaryOp {
    /// Operator symbol.
    pub const fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl Angle {
    /// Applies `op` with a run-time typed right-hand side.
    ///
    /// ```rust
    /// use arcset::{Angle, ArcError, BinaryOp, Operand};
    ///
    /// let a = Angle::new(1.0);
    /// assert_eq!(a.apply(BinaryOp::Add, 0.5).unwrap().radians(), 1.5);
    /// assert!(matches!(
    ///     a.apply(BinaryOp::Mul, Angle::new(2.0)),
    ///     Err(ArcError::UnsupportedOperation { .. })
    /// ));
    /// ```
    pub fn apply(self, op: BinaryOp, rhs: impl Into<Operand>) -> ArcResult<Angle> {
        let rhs = rhs.into();
        match (op, rhs) {
            (BinaryOp::Add, Operand::Angle(other)) => Ok(self + other),
            (BinaryOp::Add, Operand::Number(n)) => Ok(self + n),
            (BinaryOp::Sub, Operand::Angle(other)) => Ok(self - other),
            (BinaryOp::Sub, Operand::Number(n)) => Ok(self - n),
            (BinaryOp::Mul, Operand::Number(n)) => Ok(self * n),
            (BinaryOp::Div, Operand::Number(n)) => self.checked_div(n),
            (BinaryOp::Mul | BinaryOp::Div, Operand::Angle(_)) => {
                Err(ArcError::UnsupportedOperation {
                    op: op.symbol(),
                    operand: rhs.kind(),
                })
            }
        }
    }

    /// Division by a scalar that reports a zero divisor instead of producing infinity.
    pub fn checked_div(self, rhs: f64) -> ArcResult<Angle> {
        if rhs == 0.0 {
            return Err(ArcError::NumericDomain {
                op: "/",
                kind: NumericErrorKind::DivisionByZero,
            });
        }
        if rhs.is_nan() {
            return Err(ArcError::NumericDomain {
                op: "/",
                kind: NumericErrorKind::NotFinite,
            });
        }
        Ok(self / rhs)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Operator implementations
// ─────────────────────────────────────────────────────────────────────────────

impl Add for Angle {
    type Output = Angle;
    #[inline]
    fn add(self, rhs: Angle) -> Angle {
        Angle::new(self.radians() + rhs.radians())
    }
}

impl Add<f64> for Angle {
    type Output = Angle;
    #[inline]
    fn add(self, rhs: f64) -> Angle {
        Angle::new(self.radians() + rhs)
    }
}

impl Add<Angle> for f64 {
    type Output = Angle;
    #[inline]
    fn add(self, rhs: Angle) -> Angle {
        rhs + self
    }
}

impl AddAssign for Angle {
    #[inline]
    fn add_assign(&mut self, rhs: Angle) {
        *self = *self + rhs;
    }
}

impl AddAssign<f64> for Angle {
    #[inline]
    fn add_assign(&mut self, rhs: f64) {
        *self = *self + rhs;
    }
}

impl Sub for Angle {
    type Output = Angle;
    #[inline]
    fn sub(self, rhs: Angle) -> Angle {
        Angle::new(self.radians() - rhs.radians())
    }
}

impl Sub<f64> for Angle {
    type Output = Angle;
    #[inline]
    fn sub(self, rhs: f64) -> Angle {
        Angle::new(self.radians() - rhs)
    }
}

impl Sub<Angle> for f64 {
    type Output = Angle;
    #[inline]
    fn sub(self, rhs: Angle) -> Angle {
        Angle::new(self - rhs.radians())
    }
}

impl SubAssign for Angle {
    #[inline]
    fn sub_assign(&mut self, rhs: Angle) {
        *self = *self - rhs;
    }
}

impl SubAssign<f64> for Angle {
    #[inline]
    fn sub_assign(&mut self, rhs: f64) {
        *self = *self - rhs;
    }
}

impl Mul<f64> for Angle {
    type Output = Angle;
    #[inline]
    fn mul(self, rhs: f64) -> Angle {
        Angle::new(self.radians() * rhs)
    }
}

impl Mul<Angle> for f64 {
    type Output = Angle;
    #[inline]
    fn mul(self, rhs: Angle) -> Angle {
        rhs * self
    }
}

impl MulAssign<f64> for Angle {
    #[inline]
    fn mul_assign(&mut self, rhs: f64) {
        *self = *self * rhs;
    }
}

impl Div<f64> for Angle {
    type Output = Angle;
    #[inline]
    fn div(self, rhs: f64) -> Angle {
        Angle::new(self.radians() / rhs)
    }
}

/// `n / angle` yields an angle whose raw value is `n / radians`.
impl Div<Angle> for f64 {
    type Output = Angle;
    #[inline]
    fn div(self, rhs: Angle) -> Angle {
        Angle::new(self / rhs.radians())
    }
}

impl DivAssign<f64> for Angle {
    #[inline]
    fn div_assign(&mut self, rhs: f64) {
        *self = *self / rhs;
    }
}

impl Neg for Angle {
    type Output = Angle;
    #[inline]
    fn neg(self) -> Angle {
        Angle::new(-self.radians())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use core::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn add_angle_and_number() {
        let a = Angle::new(FRAC_PI_2);
        assert_abs_diff_eq!((a + a).radians(), PI, epsilon = 1e-12);
        assert_abs_diff_eq!((a + PI).radians(), 1.5 * PI, epsilon = 1e-12);
        assert_abs_diff_eq!((PI + a).radians(), 1.5 * PI, epsilon = 1e-12);
    }

    #[test]
    fn add_does_not_normalize() {
        let a = Angle::new(6.0) + Angle::new(6.0);
        assert_eq!(a.radians(), 12.0);
    }

    #[test]
    fn sub_angle_and_number() {
        let a = Angle::new(PI);
        let b = Angle::new(FRAC_PI_2);
        assert_abs_diff_eq!((a - b).radians(), FRAC_PI_2, epsilon = 1e-12);
        assert_abs_diff_eq!((a - 1.0).radians(), PI - 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!((1.0 - a).radians(), 1.0 - PI, epsilon = 1e-12);
    }

    #[test]
    fn scalar_mul_and_div() {
        let a = Angle::new(FRAC_PI_2);
        assert_abs_diff_eq!((a * 2.0).radians(), PI, epsilon = 1e-12);
        assert_abs_diff_eq!((2.0 * a).radians(), PI, epsilon = 1e-12);
        assert_abs_diff_eq!((a / 2.0).radians(), PI / 4.0, epsilon = 1e-12);
        assert_abs_diff_eq!((PI / a).radians(), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn assign_operators() {
        let mut a = Angle::new(1.0);
        a += Angle::new(1.0);
        a += 1.0;
        assert_eq!(a.radians(), 3.0);
        a -= 0.5;
        a -= Angle::new(0.5);
        assert_eq!(a.radians(), 2.0);
        a *= 3.0;
        a /= 2.0;
        assert_eq!(a.radians(), 3.0);
        assert_eq!((-a).radians(), -3.0);
    }

    #[test]
    fn unchecked_div_by_zero_is_infinite() {
        let a = Angle::new(1.0) / 0.0;
        assert!(a.radians().is_infinite());
    }

    #[test]
    fn apply_dispatches_over_operand_kinds() {
        let a = Angle::new(2.0);
        assert_eq!(a.apply(BinaryOp::Add, Angle::new(1.0)).unwrap().radians(), 3.0);
        assert_eq!(a.apply(BinaryOp::Add, 1.0).unwrap().radians(), 3.0);
        assert_eq!(a.apply(BinaryOp::Sub, Angle::new(0.5)).unwrap().radians(), 1.5);
        assert_eq!(a.apply(BinaryOp::Sub, 0.5).unwrap().radians(), 1.5);
        assert_eq!(a.apply(BinaryOp::Mul, 2.0).unwrap().radians(), 4.0);
        assert_eq!(a.apply(BinaryOp::Div, 4.0).unwrap().radians(), 0.5);
    }

    #[test]
    fn apply_rejects_angle_scalars() {
        let a = Angle::new(2.0);
        for op in [BinaryOp::Mul, BinaryOp::Div] {
            let err = a.apply(op, Angle::new(1.0)).unwrap_err();
            assert_eq!(
                err,
                ArcError::UnsupportedOperation {
                    op: op.symbol(),
                    operand: "an angle",
                }
            );
        }
    }

    #[test]
    fn checked_div_reports_zero_divisor() {
        let err = Angle::new(1.0).checked_div(0.0).unwrap_err();
        assert_eq!(
            err,
            ArcError::NumericDomain {
                op: "/",
                kind: NumericErrorKind::DivisionByZero,
            }
        );
        assert!(matches!(
            Angle::new(1.0).apply(BinaryOp::Div, -0.0),
            Err(ArcError::NumericDomain { .. })
        ));
        assert!(matches!(
            Angle::new(1.0).checked_div(f64::NAN),
            Err(ArcError::NumericDomain {
                kind: NumericErrorKind::NotFinite,
                ..
            })
        ));
    }

    #[test]
    fn binary_op_display() {
        assert_eq!(BinaryOp::Add.to_string(), "+");
        assert_eq!(BinaryOp::Div.to_string(), "/");
    }
}
