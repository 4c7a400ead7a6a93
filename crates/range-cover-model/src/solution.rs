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

//! The per-interval selection bitmap a cover solver produces, plus the
//! audits that check it really is a minimum cover.

use crate::problem::CoverProblem;
use range_cover_core::CoverPoint;

/// A per-interval selection marking the members of a cover.
///
/// Index `i` is `true` iff interval `i` belongs to the selected cover.
/// The bitmap length always equals the problem size it was produced for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverSelection {
    bits: Vec<bool>,
}

impl CoverSelection {
    /// Wraps a raw bitmap.
    #[inline]
    pub fn new(bits: Vec<bool>) -> Self {
        Self { bits }
    }

    /// Number of intervals the selection covers (selected or not).
    #[inline]
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Returns `true` for the empty selection.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Whether interval `index` is part of the cover.
    #[inline]
    pub fn is_selected(&self, index: usize) -> bool {
        self.bits[index]
    }

    /// The raw bitmap.
    #[inline]
    pub fn as_slice(&self) -> &[bool] {
        &self.bits
    }

    /// Number of selected intervals.
    #[inline]
    pub fn selected_count(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }

    /// Indices of the selected intervals, in ascending order.
    #[inline]
    pub fn selected_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits
            .iter()
            .enumerate()
            .filter_map(|(i, &b)| b.then_some(i))
    }

    /// Checks that the selected intervals cover the same range as the
    /// whole instance.
    ///
    /// The conditions, for a non-empty problem:
    ///    - the first selected interval starts no later than interval 0
    ///    - consecutive selected intervals `a` then `b` satisfy
    ///      `L(b) <= R(a)` (no gap)
    ///    - the last selected interval is the final one
    ///
    /// An empty selection covers an empty problem.
    pub fn verify_cover<T: CoverPoint>(&self, problem: &CoverProblem<T>) -> bool {
        if self.len() != problem.len() {
            return false;
        }
        if problem.is_empty() {
            return true;
        }

        let mut prev: Option<usize> = None;
        for i in self.selected_indices() {
            match prev {
                None => {
                    if problem.left(i) > problem.left(0) {
                        return false;
                    }
                }
                Some(p) => {
                    if problem.left(i) > problem.right(p) {
                        return false;
                    }
                }
            }
            prev = Some(i);
        }
        prev == Some(problem.len() - 1)
    }

    /// Checks that no selected interval is redundant.
    ///
    /// For each selected `i` strictly between two selected neighbors `a`
    /// and `b`, dropping `i` must break the chain, i.e. `L(b) > R(a)`.
    /// Endpoints (the first and last selected interval) are always
    /// necessary for a valid cover and are not examined.
    pub fn verify_minimal<T: CoverPoint>(&self, problem: &CoverProblem<T>) -> bool {
        let selected: Vec<usize> = self.selected_indices().collect();
        for w in selected.windows(3) {
            let (a, b) = (w[0], w[2]);
            if problem.left(b) <= problem.right(a) {
                return false;
            }
        }
        true
    }
}

impl From<Vec<bool>> for CoverSelection {
    #[inline]
    fn from(bits: Vec<bool>) -> Self {
        Self::new(bits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn problem(pairs: &[(i64, i64)]) -> CoverProblem<i64> {
        CoverProblem::from_endpoints(pairs.iter().copied()).unwrap()
    }

    #[test]
    fn selected_indices_and_count() {
        let s = CoverSelection::new(vec![true, false, false, true]);
        assert_eq!(s.selected_count(), 2);
        assert_eq!(s.selected_indices().collect::<Vec<_>>(), vec![0, 3]);
        assert!(s.is_selected(0));
        assert!(!s.is_selected(2));
    }

    #[test]
    fn empty_selection_covers_empty_problem() {
        let p = CoverProblem::<i64>::try_new(vec![]).unwrap();
        let s = CoverSelection::new(vec![]);
        assert!(s.verify_cover(&p));
        assert!(s.verify_minimal(&p));
    }

    #[test]
    fn accepts_full_chain() {
        let p = problem(&[(0, 5), (5, 10), (10, 15)]);
        let s = CoverSelection::new(vec![true, true, true]);
        assert!(s.verify_cover(&p));
        assert!(s.verify_minimal(&p));
    }

    #[test]
    fn accepts_greedy_jump() {
        // Nested family: only the outermost and the last are needed.
        let p = problem(&[(0, 50), (10, 60), (15, 70), (30, 80), (35, 90)]);
        let s = CoverSelection::new(vec![true, false, false, false, true]);
        assert!(s.verify_cover(&p));
        assert!(s.verify_minimal(&p));
    }

    #[test]
    fn rejects_missing_last_interval() {
        let p = problem(&[(0, 5), (3, 10)]);
        let s = CoverSelection::new(vec![true, false]);
        assert!(!s.verify_cover(&p));
    }

    #[test]
    fn rejects_gap_in_selection() {
        let p = problem(&[(0, 5), (5, 10), (10, 15)]);
        let s = CoverSelection::new(vec![true, false, true]);
        // Dropping the middle interval leaves L(2) = 10 > R(0) = 5.
        assert!(!s.verify_cover(&p));
    }

    #[test]
    fn rejects_redundant_member() {
        let p = problem(&[(0, 50), (10, 60), (15, 70), (30, 80), (35, 90)]);
        let s = CoverSelection::new(vec![true, false, true, false, true]);
        // Valid cover, but index 2 can be dropped: L(4) = 35 <= R(0) = 50.
        assert!(s.verify_cover(&p));
        assert!(!s.verify_minimal(&p));
    }

    #[test]
    fn rejects_length_mismatch() {
        let p = problem(&[(0, 5), (3, 10)]);
        let s = CoverSelection::new(vec![true, true, true]);
        assert!(!s.verify_cover(&p));
    }
}
