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

//! The furthest-reachable table.
//!
//! Entry `i` is the index of the last interval whose left endpoint still
//! lies within interval `i`:
//!
//!    `F[i] = max { j : L(j) <= R(i), 0 <= j < n }`
//!
//! Because the left endpoints are strictly increasing the table is
//! non-decreasing, and `F[n - 1] = n - 1`. The parallel build slices the
//! table into blocks; each block seeds itself with one binary search and
//! then sweeps forward, so blocks have no data dependency on each other.
//! Work is `O(n + (n / B) * log n)`, span `O(B + log n)`.

use crate::par::{PARALLEL_BLOCK_SIZE, sliced_for};
use range_cover_core::CoverPoint;

/// Builds the furthest table in parallel with the default block size.
pub fn build_furthest<T, L, R>(n: usize, left: &L, right: &R) -> Vec<usize>
where
    T: CoverPoint,
    L: Fn(usize) -> T + Sync,
    R: Fn(usize) -> T + Sync,
{
    build_furthest_with_block(n, PARALLEL_BLOCK_SIZE, left, right)
}

/// Builds the furthest table in parallel with an explicit block size.
pub fn build_furthest_with_block<T, L, R>(
    n: usize,
    block_size: usize,
    left: &L,
    right: &R,
) -> Vec<usize>
where
    T: CoverPoint,
    L: Fn(usize) -> T + Sync,
    R: Fn(usize) -> T + Sync,
{
    let mut table = vec![0usize; n];
    sliced_for(&mut table, block_size, |_, offset, chunk| {
        fill_block(chunk, offset, n, left, right);
    });
    table
}

/// Serial reference build over the whole range, used by the debug
/// cross-check and tests.
pub fn build_furthest_serial<T, L, R>(n: usize, left: &L, right: &R) -> Vec<usize>
where
    T: CoverPoint,
    L: Fn(usize) -> T,
    R: Fn(usize) -> T,
{
    let mut table = vec![0usize; n];
    fill_block(&mut table, 0, n, left, right);
    table
}

/// Fills one block `[offset, offset + chunk.len())` of the table.
///
/// The first entry comes from a binary search for the last `j` with
/// `L(j) <= R(offset)`; subsequent entries resume the sweep from their
/// predecessor, which is valid because `R` is strictly increasing.
fn fill_block<T, L, R>(chunk: &mut [usize], offset: usize, n: usize, left: &L, right: &R)
where
    T: CoverPoint,
    L: Fn(usize) -> T,
    R: Fn(usize) -> T,
{
    if chunk.is_empty() {
        return;
    }

    // L(offset) <= R(offset) holds by the input contract, so `lo` is
    // always a witness and the search never underflows.
    let reach = right(offset);
    let mut lo = offset;
    let mut hi = n;
    while lo + 1 < hi {
        let mid = lo + (hi - lo) / 2;
        if left(mid) <= reach {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    chunk[0] = lo;

    for j in 1..chunk.len() {
        let mut rid = chunk[j - 1];
        let reach = right(offset + j);
        while rid < n && left(rid) <= reach {
            rid += 1;
        }
        chunk[j] = rid - 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn columns(pairs: &[(i64, i64)]) -> (Vec<i64>, Vec<i64>) {
        pairs.iter().copied().unzip()
    }

    fn assert_furthest_invariant(table: &[usize], pairs: &[(i64, i64)]) {
        let n = pairs.len();
        for (i, &f) in table.iter().enumerate() {
            assert!(
                pairs[f].0 <= pairs[i].1,
                "F[{i}] = {f} does not reach: L({f}) = {} > R({i}) = {}",
                pairs[f].0,
                pairs[i].1
            );
            if f + 1 < n {
                assert!(
                    pairs[f + 1].0 > pairs[i].1,
                    "F[{i}] = {f} is not maximal"
                );
            }
        }
    }

    #[test]
    fn singleton() {
        let pairs = [(0i64, 10)];
        let (lefts, rights) = columns(&pairs);
        let l = |i: usize| lefts[i];
        let r = |i: usize| rights[i];
        assert_eq!(build_furthest(1, &l, &r), vec![0]);
    }

    #[test]
    fn simple_chain() {
        let pairs = [(0i64, 5), (3, 10), (7, 15), (12, 20)];
        let (lefts, rights) = columns(&pairs);
        let l = |i: usize| lefts[i];
        let r = |i: usize| rights[i];
        let table = build_furthest(4, &l, &r);
        assert_eq!(table, vec![1, 2, 3, 3]);
        assert_furthest_invariant(&table, &pairs);
    }

    #[test]
    fn nested_family_reaches_far() {
        let pairs = [(0i64, 50), (10, 60), (15, 70), (30, 80), (35, 90)];
        let (lefts, rights) = columns(&pairs);
        let l = |i: usize| lefts[i];
        let r = |i: usize| rights[i];
        let table = build_furthest(5, &l, &r);
        // Every left endpoint is within [0, 50], so F[0] = 4 already.
        assert_eq!(table, vec![4, 4, 4, 4, 4]);
        assert_furthest_invariant(&table, &pairs);
    }

    #[test]
    fn last_entry_is_self() {
        let pairs = [(0i64, 5), (5, 10), (10, 15)];
        let (lefts, rights) = columns(&pairs);
        let l = |i: usize| lefts[i];
        let r = |i: usize| rights[i];
        let table = build_furthest(3, &l, &r);
        assert_eq!(table[2], 2);
    }

    #[test]
    fn table_is_non_decreasing() {
        let pairs: Vec<(i64, i64)> = (0..500).map(|i| (i as i64, i as i64 + 2)).collect();
        let (lefts, rights) = columns(&pairs);
        let l = |i: usize| lefts[i];
        let r = |i: usize| rights[i];
        let table = build_furthest(500, &l, &r);
        assert!(table.windows(2).all(|w| w[0] <= w[1]));
        assert_furthest_invariant(&table, &pairs);
    }

    #[test]
    fn parallel_matches_serial_across_block_boundaries() {
        let pairs: Vec<(i64, i64)> = {
            // Deterministic but irregular step/length pattern.
            let mut out = Vec::new();
            let (mut l, mut r) = (0i64, 7i64);
            out.push((l, r));
            for i in 1..3000i64 {
                let step = (1 + i * 37 % 5).min(r - l);
                l += step;
                r = (r + 1).max(l + 4 + i * 13 % 11);
                out.push((l, r));
            }
            out
        };
        let n = pairs.len();
        let (lefts, rights) = columns(&pairs);
        let l = |i: usize| lefts[i];
        let r = |i: usize| rights[i];
        let serial = build_furthest_serial(n, &l, &r);
        // Force many blocks, including a ragged tail.
        for block in [1usize, 7, 64, 1001] {
            assert_eq!(build_furthest_with_block(n, block, &l, &r), serial);
        }
        assert_furthest_invariant(&serial, &pairs);
    }
}
