//! Error types for angle arithmetic and textual parsing.
//!
//! Interval algebra itself is total over finite inputs and never fails; the
//! variants below cover the checked arithmetic entry points
//! ([`Angle::apply`](crate::Angle::apply), [`Angle::checked_div`](crate::Angle::checked_div))
//! and the `FromStr` implementations.

use core::fmt;

/// Result type for fallible angle operations.
pub type ArcResult<T> = Result<T, ArcError>;

/// Classification of numeric-domain failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericErrorKind {
    /// Division by a zero scalar.
    DivisionByZero,
    /// Operand or result is NaN or infinite.
    NotFinite,
}

impl fmt::Display for NumericErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericErrorKind::DivisionByZero => f.write_str("division by zero"),
            NumericErrorKind::NotFinite => f.write_str("non-finite value"),
        }
    }
}

/// Error type for angle operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ArcError {
    /// Operand kind not accepted by the operator.
    #[error("Unsupported operation: cannot apply `{op}` to an angle and {operand}")]
    UnsupportedOperation {
        /// Symbol of the attempted operator.
        op: &'static str,
        /// Kind of the right-hand operand.
        operand: &'static str,
    },

    /// Arithmetic left the real-number domain.
    #[error("Numeric domain error in `{op}`: {kind}")]
    NumericDomain {
        /// Symbol of the attempted operator.
        op: &'static str,
        /// What went wrong.
        kind: NumericErrorKind,
    },

    /// Malformed textual angle or interval.
    #[error("Parse error: {0}")]
    Parse(String),
}

impl ArcError {
    pub(crate) fn parse(msg: impl Into<String>) -> Self {
        ArcError::Parse(msg.into())
    }
}
