//! Parsing angles from text.
//!
//! Accepted forms (whitespace is ignored between tokens):
//!
//! ```text
//! Plain radians:     1.25   -0.5   2e-3   1.5rad
//! Multiples of pi:   pi   -pi/4   3pi/2   3*pi/2   2π
//! Degrees:           90°   -45deg   22.5 deg
//! ```
//!
//! A bare number is always radians, matching how the rest of the crate treats
//! plain `f64` values.

use super::Angle;
use crate::error::ArcError;
use core::f64::consts::PI;
use core::str::FromStr;
use once_cell::sync::Lazy;
use regex::Regex;

static ANGLE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?x)^\s*
        (?P<sign>[+-])?\s*
        (?:(?P<coef>\d+(?:\.\d*)?(?:[eE][+-]?\d+)?|\.\d+(?:[eE][+-]?\d+)?)\s*\*?\s*)?
        (?P<pi>pi|π)?\s*
        (?:/\s*(?P<den>\d+(?:\.\d*)?))?\s*
        (?P<unit>°|deg|rad)?
        \s*$",
    )
    .expect("angle pattern is valid")
});

impl FromStr for Angle {
    type Err = ArcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = ANGLE_RE
            .captures(s)
            .ok_or_else(|| ArcError::parse(format!("invalid angle: {:?}", s)))?;

        let has_pi = caps.name("pi").is_some();
        let coef = match caps.name("coef") {
            Some(m) => parse_number(m.as_str())?,
            None if has_pi => 1.0,
            None => return Err(ArcError::parse(format!("invalid angle: {:?}", s))),
        };
        let den = match caps.name("den") {
            Some(m) => {
                let d = parse_number(m.as_str())?;
                if d == 0.0 {
                    return Err(ArcError::parse(format!("zero denominator in {:?}", s)));
                }
                d
            }
            None => 1.0,
        };
        let sign = match caps.name("sign").map(|m| m.as_str()) {
            Some("-") => -1.0,
            _ => 1.0,
        };

        let mut value = sign * coef / den;
        if has_pi {
            value *= PI;
        }

        match caps.name("unit").map(|m| m.as_str()) {
            Some("°") | Some("deg") if has_pi => Err(ArcError::parse(format!(
                "multiples of pi cannot carry a degree unit: {:?}",
                s
            ))),
            Some("°") | Some("deg") => Ok(Angle::from_degrees(value)),
            _ => Ok(Angle::new(value)),
        }
    }
}

fn parse_number(text: &str) -> Result<f64, ArcError> {
    text.parse::<f64>()
        .map_err(|e| ArcError::parse(format!("invalid number {:?}: {}", text, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use core::f64::consts::{FRAC_PI_2, FRAC_PI_4};

    fn rad(s: &str) -> f64 {
        s.parse::<Angle>().unwrap().radians()
    }

    #[test]
    fn parse_plain_radians() {
        assert_eq!(rad("1.25"), 1.25);
        assert_eq!(rad("  -0.5 "), -0.5);
        assert_eq!(rad("2e-3"), 2e-3);
        assert_eq!(rad(".5"), 0.5);
        assert_eq!(rad("1.5rad"), 1.5);
        assert_eq!(rad("3/2"), 1.5);
    }

    #[test]
    fn parse_multiples_of_pi() {
        assert_abs_diff_eq!(rad("pi"), PI, epsilon = 1e-12);
        assert_abs_diff_eq!(rad("-pi/4"), -FRAC_PI_4, epsilon = 1e-12);
        assert_abs_diff_eq!(rad("3pi/2"), 3.0 * FRAC_PI_2, epsilon = 1e-12);
        assert_abs_diff_eq!(rad("3 * pi / 2"), 3.0 * FRAC_PI_2, epsilon = 1e-12);
        assert_abs_diff_eq!(rad("2π"), 2.0 * PI, epsilon = 1e-12);
    }

    #[test]
    fn parse_degrees() {
        assert_abs_diff_eq!(rad("90°"), FRAC_PI_2, epsilon = 1e-12);
        assert_abs_diff_eq!(rad("-45deg"), -FRAC_PI_4, epsilon = 1e-12);
        assert_abs_diff_eq!(rad("22.5 deg"), FRAC_PI_4 / 2.0, epsilon = 1e-12);
    }

    #[test]
    fn parse_rejects_garbage() {
        for s in ["", "  ", "abc", "1.2.3", "pi deg", "pi/0", "1,5", "--1"] {
            assert!(
                matches!(s.parse::<Angle>(), Err(ArcError::Parse(_))),
                "expected parse error for {:?}",
                s
            );
        }
    }
}
