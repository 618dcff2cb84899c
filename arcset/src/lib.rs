//! Circular angles and set algebra over arcs of the circle.
//!
//! - [`Angle`]: a raw radian value whose equality and ordering work modulo `2π`.
//! - [`AngleInterval`]: an arc with inclusive or exclusive endpoints that may
//!   wrap through zero, with length, containment, union (`+`) and
//!   difference (`-`).
//! - [`AngleIntervalSet`]: the ordered, possibly empty result of a union or a
//!   difference.
//! - [`segment`]: the non-wrapping segment layer every interval operation is
//!   built on.
//!
//! All approximate comparisons share the tolerance in [`tolerance`].
//!
//! ```rust
//! use arcset::{Angle, AngleInterval};
//! use core::f64::consts::{FRAC_PI_2, PI};
//!
//! let upper = AngleInterval::closed(0.0, PI);
//! assert!(upper.contains(&AngleInterval::closed(PI / 6.0, 5.0 * PI / 6.0)));
//! assert!(upper.contains_point(Angle::from_degrees(90.0)));
//!
//! let wrap = AngleInterval::closed(3.0 * FRAC_PI_2, FRAC_PI_2);
//! assert!(!upper.contains(&wrap));
//! assert!((upper.length() - wrap.length()).abs() < 1e-12);
//! ```

#![deny(missing_docs)]
#![forbid(unsafe_code)]

pub mod angle;
pub mod error;
pub mod interval;
pub mod segment;
pub mod tolerance;

pub use angle::{Angle, BinaryOp, Operand};
pub use error::{ArcError, ArcResult, NumericErrorKind};
pub use interval::{AngleInterval, AngleIntervalSet};
