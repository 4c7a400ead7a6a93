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

//! A validated instance of the minimum interval-cover problem.
//!
//! Invariants (checked on construction, relied upon by every solver):
//!    - `L(i) < L(i + 1)` and `R(i) < R(i + 1)` (strict monotonicity)
//!    - `L(i) < R(i)` (no degenerate intervals)
//!    - `L(i + 1) <= R(i)` (consecutive intervals overlap; the union is
//!      one contiguous range)

use crate::err::{
    CoverageGapError, DegenerateIntervalError, LeftNotIncreasingError, ProblemValidationError,
    RightNotIncreasingError,
};
use range_cover_core::{CoverPoint, primitives::ClosedInterval};

/// A strictly monotone, gap-free sequence of closed intervals.
///
/// The sequence may be empty; solvers treat an empty problem as having an
/// empty cover. Once constructed, the instance is immutable.
///
/// # Examples
///
/// ```
/// use range_cover_model::problem::CoverProblem;
///
/// let problem = CoverProblem::from_endpoints([(0, 5), (3, 10)]).unwrap();
/// assert_eq!(problem.len(), 2);
/// assert_eq!(problem.left(1), 3);
/// assert_eq!(problem.right(0), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverProblem<T> {
    intervals: Vec<ClosedInterval<T>>,
}

impl<T: CoverPoint> CoverProblem<T> {
    /// Validates `intervals` against the input contract and wraps them.
    ///
    /// Violations are reported with the offending index and endpoint
    /// values. Validation is `O(n)` and always runs; solvers downstream
    /// only `debug_assert!` what is established here.
    pub fn try_new(intervals: Vec<ClosedInterval<T>>) -> Result<Self, ProblemValidationError<T>> {
        for (i, interval) in intervals.iter().enumerate() {
            if interval.start() >= interval.end() {
                return Err(
                    DegenerateIntervalError::new(i, interval.start(), interval.end()).into(),
                );
            }
        }
        for (i, pair) in intervals.windows(2).enumerate() {
            let (cur, next) = (&pair[0], &pair[1]);
            if cur.start() >= next.start() {
                return Err(LeftNotIncreasingError::new(i, cur.start(), next.start()).into());
            }
            if cur.end() >= next.end() {
                return Err(RightNotIncreasingError::new(i, cur.end(), next.end()).into());
            }
            if next.start() > cur.end() {
                return Err(CoverageGapError::new(i, cur.end(), next.start()).into());
            }
        }
        Ok(Self { intervals })
    }

    /// Builds a problem from `(left, right)` endpoint pairs.
    pub fn from_endpoints<I>(pairs: I) -> Result<Self, ProblemValidationError<T>>
    where
        I: IntoIterator<Item = (T, T)>,
    {
        Self::try_new(
            pairs
                .into_iter()
                .map(|(l, r)| ClosedInterval::new(l, r))
                .collect(),
        )
    }

    /// Number of intervals in the instance.
    #[inline]
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    /// Returns `true` if the instance has no intervals.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// The interval at `index`.
    #[inline]
    pub fn interval(&self, index: usize) -> ClosedInterval<T> {
        self.intervals[index]
    }

    /// Left endpoint of interval `index`.
    #[inline]
    pub fn left(&self, index: usize) -> T {
        self.intervals[index].start()
    }

    /// Right endpoint of interval `index`.
    #[inline]
    pub fn right(&self, index: usize) -> T {
        self.intervals[index].end()
    }

    /// All intervals, in index order.
    #[inline]
    pub fn intervals(&self) -> &[ClosedInterval<T>] {
        &self.intervals
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::err::ProblemValidationError;

    fn problem(pairs: &[(i64, i64)]) -> Result<CoverProblem<i64>, ProblemValidationError<i64>> {
        CoverProblem::from_endpoints(pairs.iter().copied())
    }

    #[test]
    fn accepts_valid_instance() {
        let p = problem(&[(0, 5), (3, 10), (7, 15)]).unwrap();
        assert_eq!(p.len(), 3);
        assert_eq!(p.left(0), 0);
        assert_eq!(p.right(2), 15);
        assert_eq!(p.interval(1).start(), 3);
    }

    #[test]
    fn accepts_empty_and_singleton() {
        assert!(problem(&[]).unwrap().is_empty());
        assert_eq!(problem(&[(0, 10)]).unwrap().len(), 1);
    }

    #[test]
    fn accepts_touching_neighbors() {
        // L(i + 1) == R(i) is still contiguous for closed intervals.
        let p = problem(&[(0, 5), (5, 10), (10, 15)]).unwrap();
        assert_eq!(p.len(), 3);
    }

    #[test]
    fn rejects_degenerate_interval() {
        let err = problem(&[(0, 5), (7, 7)]).unwrap_err();
        match err {
            ProblemValidationError::DegenerateInterval(e) => {
                assert_eq!(e.index(), 1);
                assert_eq!(e.left(), 7);
                assert_eq!(e.right(), 7);
            }
            other => panic!("expected DegenerateInterval, got {other:?}"),
        }
    }

    #[test]
    fn rejects_non_increasing_left() {
        let err = problem(&[(3, 8), (3, 10)]).unwrap_err();
        match err {
            ProblemValidationError::LeftNotIncreasing(e) => {
                assert_eq!(e.index(), 0);
                assert_eq!(e.left(), 3);
                assert_eq!(e.next_left(), 3);
            }
            other => panic!("expected LeftNotIncreasing, got {other:?}"),
        }
    }

    #[test]
    fn rejects_non_increasing_right() {
        let err = problem(&[(0, 10), (2, 9)]).unwrap_err();
        match err {
            ProblemValidationError::RightNotIncreasing(e) => {
                assert_eq!(e.index(), 0);
                assert_eq!(e.right(), 10);
                assert_eq!(e.next_right(), 9);
            }
            other => panic!("expected RightNotIncreasing, got {other:?}"),
        }
    }

    #[test]
    fn rejects_gap() {
        let err = problem(&[(0, 5), (6, 10)]).unwrap_err();
        match err {
            ProblemValidationError::CoverageGap(e) => {
                assert_eq!(e.index(), 0);
                assert_eq!(e.right(), 5);
                assert_eq!(e.next_left(), 6);
            }
            other => panic!("expected CoverageGap, got {other:?}"),
        }
    }

    #[test]
    fn error_messages_name_the_index() {
        let err = problem(&[(0, 5), (6, 10)]).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("gap after interval 0"), "message: {msg}");
    }
}
