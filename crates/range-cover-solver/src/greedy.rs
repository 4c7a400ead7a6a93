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

//! Serial greedy selection.
//!
//! The linear-time reference the parallel kernel must reproduce
//! bit-for-bit. Interval 0 and interval `n - 1` always belong to the
//! cover; in between, an interval is taken exactly when the next one
//! starts beyond the reach of the most recently taken interval.

use range_cover_core::CoverPoint;

/// Computes the greedy minimum-cover bitmap in `O(n)`.
pub fn greedy_cover<T, L, R>(n: usize, left: &L, right: &R) -> Vec<bool>
where
    T: CoverPoint,
    L: Fn(usize) -> T,
    R: Fn(usize) -> T,
{
    let mut selection = vec![false; n];
    if n == 0 {
        return selection;
    }

    selection[0] = true;
    selection[n - 1] = true;

    let mut current = 0usize;
    for i in 1..n.saturating_sub(1) {
        if left(i + 1) > right(current) {
            selection[i] = true;
            current = i;
        }
    }
    selection
}
