//! Bracket notation for intervals: `[0, pi/2)`, `(270°, 45°]`, `[-1.5, 2]`.
//!
//! Each endpoint is any text accepted by `Angle::from_str`, so degrees and
//! multiples of pi mix freely with plain radians.

use super::AngleInterval;
use crate::angle::Angle;
use crate::error::ArcError;
use core::str::FromStr;
use once_cell::sync::Lazy;
use regex::Regex;

static INTERVAL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?x)^\s*
        (?P<open>[\[(])\s*
        (?P<start>[^,\[\]()]+?)\s*,\s*
        (?P<end>[^,\[\]()]+?)\s*
        (?P<close>[\])])
        \s*$",
    )
    .expect("interval pattern is valid")
});

impl FromStr for AngleInterval {
    type Err = ArcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = INTERVAL_RE
            .captures(s)
            .ok_or_else(|| ArcError::parse(format!("invalid interval: {:?}", s)))?;

        let start: Angle = caps["start"].parse()?;
        let end: Angle = caps["end"].parse()?;
        Ok(AngleInterval::new(
            start,
            end,
            &caps["open"] == "[",
            &caps["close"] == "]",
        ))
    }
}
