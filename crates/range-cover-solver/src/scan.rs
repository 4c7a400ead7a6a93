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

//! List ranking by sample scan: a prefix-OR along the chain.
//!
//! After the scan, every node's `valid` flag answers "does any node at or
//! before me on the chain carry `valid`". Three phases:
//!
//!    - **A**: `k = 1 + ceil(2n / B)` seed nodes are marked `sampled`
//!      (seed 0 is the chain start, the rest come from a deterministic
//!      pseudorandom function of the seed index); each seed's segment is
//!      scanned in parallel up to, but not including, the next sampled
//!      node.
//!    - **B**: one serial walk over the whole chain propagates carries
//!      across segment boundaries and through the seeds themselves.
//!    - **C**: phase A again, letting each segment absorb the carry its
//!      seed now holds.
//!
//! Duplicate seeds are fine: coinciding segments perform the same
//! monotone writes. The scan is idempotent, and work is `O(n)` expected
//! with segments of expected length `O(B)`.

use crate::node::{ChainNode, NULL_NODE};
use crate::par::ith_rand;
use rayon::prelude::*;

/// Seed for the deterministic sample id sequence.
const SAMPLE_SEED: u64 = 0;

/// The sampled skeleton of one scan: seed node ids and, per seed, the
/// node id its phase-C segment walk terminated on (`NULL_NODE` for the
/// final segment).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleScan {
    samples: Vec<u64>,
    segment_next: Vec<u64>,
}

impl SampleScan {
    /// Seed node ids, in selection order. Entry 0 is the chain start.
    #[inline]
    pub fn samples(&self) -> &[u64] {
        &self.samples
    }

    /// Terminating node id of each seed's segment walk.
    #[inline]
    pub fn segment_next(&self) -> &[u64] {
        &self.segment_next
    }
}

/// Chooses the seed node ids for a chain of `total_nodes` nodes.
///
/// Deterministic in `(total_nodes, block_size)`; duplicates permitted.
pub fn choose_samples(total_nodes: usize, block_size: usize, start: u64) -> Vec<u64> {
    debug_assert!(block_size > 0);
    let count = 1 + total_nodes.div_ceil(block_size);
    let mut samples = Vec::with_capacity(count);
    samples.push(start);
    for i in 1..count {
        samples.push(ith_rand(SAMPLE_SEED, i as u64) % total_nodes as u64);
    }
    samples
}

/// Serial prefix-OR along the chain from `start`. Reference
/// implementation; also phase B of the parallel scan.
pub fn scan_serial(nodes: &[ChainNode], start: u64) {
    let mut id = start;
    let mut carry = false;
    while id != NULL_NODE {
        let node = &nodes[id as usize];
        if carry {
            node.mark_valid();
        } else if node.is_valid() {
            carry = true;
        }
        id = node.nxt();
    }
}

/// Parallel prefix-OR along the chain from `start`.
///
/// Equivalent to [`scan_serial`] on every input; returns the sampled
/// skeleton for inspection.
pub fn scan_parallel(nodes: &[ChainNode], start: u64, block_size: usize) -> SampleScan {
    let samples = choose_samples(nodes.len(), block_size, start);
    for &s in &samples {
        nodes[s as usize].mark_sampled();
    }

    // Phase A: independent segment walks.
    let mut segment_next: Vec<u64> = samples
        .par_iter()
        .map(|&s| walk_segment(nodes, s))
        .collect();

    // Phase B: serial walk across all segment boundaries.
    scan_serial(nodes, start);

    // Phase C: re-walk the segments so every node sees its seed's carry.
    // Terminators are rewritten with identical values.
    segment_next
        .par_iter_mut()
        .zip(&samples)
        .for_each(|(slot, &s)| *slot = walk_segment(nodes, s));

    SampleScan {
        samples,
        segment_next,
    }
}

/// Scans one segment: processes `start` and every following node up to
/// the next sampled node, which is left untouched. Returns the id of that
/// terminating node, or [`NULL_NODE`] if the walk fell off the chain end.
fn walk_segment(nodes: &[ChainNode], start: u64) -> u64 {
    let mut id = start;
    let mut carry = false;
    loop {
        if id == NULL_NODE {
            return NULL_NODE;
        }
        let node = &nodes[id as usize];
        if id != start && node.is_sampled() {
            return id;
        }
        if carry {
            node.mark_valid();
        } else if node.is_valid() {
            carry = true;
        }
        id = node.nxt();
    }
}
