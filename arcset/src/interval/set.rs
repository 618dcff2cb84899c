use super::{reassemble, AngleInterval};
use crate::angle::Angle;
use crate::segment;
use core::fmt;
use core::ops::{Add, Index, Sub};

/// Ordered, possibly empty result of a union or a difference.
///
/// Members are pairwise disjoint and sorted by the start of their first
/// segment; a member that wraps through zero comes last.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct AngleIntervalSet(Vec<AngleInterval>);

impl AngleIntervalSet {
    /// The empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of intervals.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `true` when the set holds no interval.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the intervals in order.
    pub fn iter(&self) -> core::slice::Iter<'_, AngleInterval> {
        self.0.iter()
    }

    /// The only member, when there is exactly one.
    pub fn as_single(&self) -> Option<&AngleInterval> {
        match self.0.as_slice() {
            [only] => Some(only),
            _ => None,
        }
    }

    /// Intervals as a slice.
    pub fn as_slice(&self) -> &[AngleInterval] {
        &self.0
    }

    /// Consumes the set and returns its intervals.
    pub fn into_vec(self) -> Vec<AngleInterval> {
        self.0
    }

    /// Sum of the member lengths.
    pub fn total_length(&self) -> f64 {
        self.0.iter().map(AngleInterval::length).sum()
    }

    /// Whether any member holds the point `angle`.
    pub fn contains_point(&self, angle: impl Into<Angle>) -> bool {
        let angle = angle.into();
        self.0.iter().any(|i| i.contains_point(angle))
    }

    /// Whether some member contains the whole of `interval`.
    pub fn contains(&self, interval: &AngleInterval) -> bool {
        interval.is_empty() || self.0.iter().any(|i| i.contains(interval))
    }

    /// Whether some member contains the sweep `[0, angle)`.
    pub fn contains_angle(&self, angle: impl Into<Angle>) -> bool {
        self.contains(&AngleInterval::from_angle(angle))
    }

    /// Union of every member with `other`.
    pub fn union(&self, other: &AngleInterval) -> AngleIntervalSet {
        let segs = self
            .0
            .iter()
            .chain(core::iter::once(other))
            .flat_map(AngleInterval::segments);
        reassemble(segment::merge(segs))
    }

    /// Removes `other` from every member.
    pub fn difference(&self, other: &AngleInterval) -> AngleIntervalSet {
        let segs = self
            .0
            .iter()
            .flat_map(|i| i.difference(other))
            .flat_map(|i| i.segments());
        reassemble(segment::merge(segs))
    }
}

impl From<Vec<AngleInterval>> for AngleIntervalSet {
    /// Wraps the intervals as given; no merging takes place.
    fn from(intervals: Vec<AngleInterval>) -> Self {
        Self(intervals)
    }
}

impl From<AngleInterval> for AngleIntervalSet {
    fn from(interval: AngleInterval) -> Self {
        Self(vec![interval])
    }
}

impl FromIterator<AngleInterval> for AngleIntervalSet {
    /// Unions every interval yielded by the iterator.
    fn from_iter<T: IntoIterator<Item = AngleInterval>>(iter: T) -> Self {
        let segs: Vec<_> = iter.into_iter().flat_map(|i| i.segments()).collect();
        reassemble(segment::merge(segs))
    }
}

impl IntoIterator for AngleIntervalSet {
    type Item = AngleInterval;
    type IntoIter = std::vec::IntoIter<AngleInterval>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a AngleIntervalSet {
    type Item = &'a AngleInterval;
    type IntoIter = core::slice::Iter<'a, AngleInterval>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Index<usize> for AngleIntervalSet {
    type Output = AngleInterval;

    fn index(&self, index: usize) -> &AngleInterval {
        &self.0[index]
    }
}

impl PartialEq<AngleInterval> for AngleIntervalSet {
    /// A set equals an interval when it holds exactly that interval.
    fn eq(&self, other: &AngleInterval) -> bool {
        self.as_single().is_some_and(|only| only == other)
    }
}

impl PartialEq<AngleIntervalSet> for AngleInterval {
    fn eq(&self, other: &AngleIntervalSet) -> bool {
        other == self
    }
}

impl Add<AngleInterval> for AngleIntervalSet {
    type Output = AngleIntervalSet;
    fn add(self, rhs: AngleInterval) -> AngleIntervalSet {
        self.union(&rhs)
    }
}

impl Sub<AngleInterval> for AngleIntervalSet {
    type Output = AngleIntervalSet;
    fn sub(self, rhs: AngleInterval) -> AngleIntervalSet {
        self.difference(&rhs)
    }
}

impl fmt::Display for AngleIntervalSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, interval) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", interval)?;
        }
        f.write_str("}")
    }
}
