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

//! Fork-join loop primitives on top of rayon.
//!
//! The kernel is written against two shapes of data parallelism: an indexed
//! loop over `[lo, hi)` and a sliced loop that hands each worker one
//! contiguous block of an output slice to fill serially. Both return only
//! after every iteration has completed.

use rand::{RngCore, SeedableRng, rngs::SmallRng};
use rayon::prelude::*;

/// Granularity for sliced loops and sample spacing.
///
/// A tuning knob, not part of any contract: larger blocks mean fewer,
/// longer-running tasks.
pub const PARALLEL_BLOCK_SIZE: usize = 2048;

/// Number of worker threads the global pool will use.
#[inline]
pub fn num_workers() -> usize {
    rayon::current_num_threads()
}

/// Invokes `body(i)` for every `i` in `[lo, hi)`, potentially in parallel.
#[inline]
pub fn parallel_for<F>(lo: usize, hi: usize, body: F)
where
    F: Fn(usize) + Send + Sync,
{
    (lo..hi).into_par_iter().for_each(body);
}

/// Partitions `data` into contiguous blocks of at most `block_size` and
/// processes each block serially on one worker.
///
/// `body` receives the block index, the block's offset into `data`, and the
/// block itself as an exclusive slice, so block-local sweeps need no
/// synchronization.
#[inline]
pub fn sliced_for<T, F>(data: &mut [T], block_size: usize, body: F)
where
    T: Send,
    F: Fn(usize, usize, &mut [T]) + Send + Sync,
{
    debug_assert!(block_size > 0);
    data.par_chunks_mut(block_size)
        .enumerate()
        .for_each(|(block, chunk)| body(block, block * block_size, chunk));
}

/// The `i`-th value of a deterministic pseudorandom sequence.
///
/// Each index gets its own short-lived generator, so values can be drawn
/// for arbitrary indices in any order (or concurrently) and always agree.
#[inline]
pub fn ith_rand(seed: u64, i: u64) -> u64 {
    SmallRng::seed_from_u64(seed ^ i).next_u64()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn parallel_for_visits_each_index_once() {
        let hits: Vec<AtomicUsize> = (0..1000).map(|_| AtomicUsize::new(0)).collect();
        parallel_for(0, 1000, |i| {
            hits[i].fetch_add(1, Ordering::Relaxed);
        });
        assert!(hits.iter().all(|h| h.load(Ordering::Relaxed) == 1));
    }

    #[test]
    fn parallel_for_empty_range() {
        parallel_for(5, 5, |_| panic!("must not run"));
    }

    #[test]
    fn sliced_for_covers_all_blocks() {
        let mut data = vec![0usize; 10_001];
        sliced_for(&mut data, 100, |block, offset, chunk| {
            assert_eq!(offset, block * 100);
            for (j, slot) in chunk.iter_mut().enumerate() {
                *slot = offset + j;
            }
        });
        for (i, v) in data.iter().enumerate() {
            assert_eq!(*v, i);
        }
    }

    #[test]
    fn sliced_for_block_larger_than_input() {
        let mut data = vec![0u8; 3];
        sliced_for(&mut data, 1000, |block, offset, chunk| {
            assert_eq!(block, 0);
            assert_eq!(offset, 0);
            assert_eq!(chunk.len(), 3);
            chunk.fill(7);
        });
        assert_eq!(data, vec![7, 7, 7]);
    }

    #[test]
    fn ith_rand_is_deterministic() {
        for i in 0..64 {
            assert_eq!(ith_rand(0, i), ith_rand(0, i));
        }
        assert_ne!(ith_rand(0, 1), ith_rand(0, 2));
    }
}
