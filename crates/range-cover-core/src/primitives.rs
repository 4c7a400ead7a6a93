// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Core Primitives
//!
//! Fundamental building blocks shared by the rest of the workspace.
//!
//! The central type is [`ClosedInterval`], a closed interval `[start, end]`.
//! Closed semantics matter for the cover problem: two intervals whose
//! endpoints merely touch (`a.end == b.start`) still overlap, and a chain of
//! such intervals covers a contiguous range.

use std::cmp::Ordering;
use std::fmt;

/// A closed interval `[start, end]`.
///
/// Both endpoints are inclusive, so `[start, end]` contains every value `x`
/// with `start <= x <= end`. The type only requires a total order on `T`;
/// no arithmetic is performed.
///
/// # Examples
///
/// ```
/// use range_cover_core::primitives::ClosedInterval;
///
/// let interval = ClosedInterval::new(1, 5);
/// assert_eq!(interval.start(), 1);
/// assert_eq!(interval.end(), 5);
/// assert!(interval.contains(5));
/// assert!(!interval.contains(6));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClosedInterval<T> {
    start: T,
    end: T,
}

impl<T> ClosedInterval<T> {
    /// Creates a new closed interval `[start, end]`.
    ///
    /// The two bounds are ordered automatically: passing them in reverse
    /// yields the same interval. This upholds the invariant
    /// `start <= end` that every other method relies on.
    ///
    /// # Panics
    ///
    /// Panics if the bounds are not comparable (e.g. NaN).
    ///
    /// # Examples
    ///
    /// ```
    /// use range_cover_core::primitives::ClosedInterval;
    ///
    /// assert_eq!(ClosedInterval::new(3, 7), ClosedInterval::new(7, 3));
    /// ```
    #[inline]
    pub fn new(a: T, b: T) -> Self
    where
        T: PartialOrd + Copy,
    {
        let ord = a
            .partial_cmp(&b)
            .expect("ClosedInterval::new: non-comparable bounds (NaN?)");
        let (start, end) = match ord {
            Ordering::Greater => (b, a),
            _ => (a, b),
        };
        Self { start, end }
    }

    /// Returns the inclusive lower endpoint.
    #[inline]
    pub fn start(&self) -> T
    where
        T: Copy,
    {
        self.start
    }

    /// Returns the inclusive upper endpoint.
    #[inline]
    pub fn end(&self) -> T
    where
        T: Copy,
    {
        self.end
    }

    /// Returns `true` if the interval is a single point, i.e. `start == end`.
    #[inline]
    pub fn is_point(&self) -> bool
    where
        T: PartialEq,
    {
        self.start == self.end
    }

    /// Checks whether `x` lies within the interval (both ends inclusive).
    ///
    /// # Examples
    ///
    /// ```
    /// use range_cover_core::primitives::ClosedInterval;
    ///
    /// let interval = ClosedInterval::new(1, 5);
    /// assert!(interval.contains(1));
    /// assert!(interval.contains(5));
    /// assert!(!interval.contains(0));
    /// ```
    #[inline]
    pub fn contains(&self, x: T) -> bool
    where
        T: PartialOrd,
    {
        x >= self.start && x <= self.end
    }

    /// Checks whether the interval fully contains `other`.
    #[inline]
    pub fn contains_interval(&self, other: &Self) -> bool
    where
        T: PartialOrd,
    {
        other.start >= self.start && other.end <= self.end
    }

    /// Checks whether two closed intervals overlap.
    ///
    /// Touching counts: `[0, 5]` and `[5, 9]` share the point `5` and
    /// therefore overlap. This is exactly the condition under which two
    /// consecutive cover intervals leave no gap.
    ///
    /// # Examples
    ///
    /// ```
    /// use range_cover_core::primitives::ClosedInterval;
    ///
    /// let a = ClosedInterval::new(0, 5);
    /// assert!(a.overlaps(&ClosedInterval::new(5, 9)));
    /// assert!(!a.overlaps(&ClosedInterval::new(6, 9)));
    /// ```
    #[inline]
    pub fn overlaps(&self, other: &Self) -> bool
    where
        T: PartialOrd,
    {
        self.start <= other.end && other.start <= self.end
    }
}

impl<T: fmt::Display> fmt::Display for ClosedInterval<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

impl<T: PartialOrd + Copy> From<(T, T)> for ClosedInterval<T> {
    #[inline]
    fn from((a, b): (T, T)) -> Self {
        Self::new(a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[inline]
    fn iv(a: i64, b: i64) -> ClosedInterval<i64> {
        ClosedInterval::new(a, b)
    }

    #[test]
    fn new_normalizes_bounds() {
        assert_eq!(iv(5, 3), iv(3, 5));
        assert_eq!(iv(3, 5).start(), 3);
        assert_eq!(iv(3, 5).end(), 5);
    }

    #[test]
    fn point_interval() {
        let p = iv(4, 4);
        assert!(p.is_point());
        assert!(p.contains(4));
        assert!(!p.contains(3));
        assert!(!iv(1, 2).is_point());
    }

    #[test]
    fn contains_is_inclusive_on_both_ends() {
        let i = iv(2, 8);
        assert!(i.contains(2));
        assert!(i.contains(8));
        assert!(i.contains(5));
        assert!(!i.contains(1));
        assert!(!i.contains(9));
    }

    #[test]
    fn contains_interval() {
        let outer = iv(0, 10);
        assert!(outer.contains_interval(&iv(0, 10)));
        assert!(outer.contains_interval(&iv(3, 7)));
        assert!(!outer.contains_interval(&iv(3, 11)));
        assert!(!outer.contains_interval(&iv(-1, 7)));
    }

    #[test]
    fn overlap_includes_touching() {
        assert!(iv(0, 5).overlaps(&iv(5, 9)));
        assert!(iv(5, 9).overlaps(&iv(0, 5)));
        assert!(iv(0, 5).overlaps(&iv(3, 4)));
        assert!(!iv(0, 5).overlaps(&iv(6, 9)));
    }

    #[test]
    fn from_tuple() {
        let i: ClosedInterval<i64> = (9, 2).into();
        assert_eq!(i, iv(2, 9));
    }

    #[test]
    fn display() {
        assert_eq!(iv(1, 5).to_string(), "[1, 5]");
    }
}
