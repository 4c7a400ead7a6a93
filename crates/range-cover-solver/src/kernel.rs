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

//! The parallel cover kernel.
//!
//! [`CoverKernel`] drives the five phases in strict order: validate
//! (debug builds), furthest table, Euler-tour chain, sample scan,
//! selection extraction. Parallelism exists only within a phase.
//!
//! The kernel trusts its input. Preconditions (strict monotonicity of
//! both endpoint sequences, non-degeneracy, the overlap chain) are
//! asserted in debug builds only; the validated entry point is
//! [`CoverProblem::try_new`] in the model crate, and [`solve`] goes
//! through it. In debug builds every parallel phase is additionally
//! cross-checked against its serial counterpart.

use crate::chain::{build_chain, chain_is_well_formed, chain_start};
use crate::furthest::build_furthest;
use crate::greedy::greedy_cover;
use crate::node::{l_node_id, r_node_id};
use crate::par::{PARALLEL_BLOCK_SIZE, parallel_for};
use crate::scan::scan_parallel;
use range_cover_core::CoverPoint;
use range_cover_model::problem::CoverProblem;
use range_cover_model::solution::CoverSelection;
use rayon::prelude::*;
use std::marker::PhantomData;
use std::time::{Duration, Instant};

/// Wall time spent in each parallel phase of one [`CoverKernel::run`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PhaseTimings {
    pub furthest: Duration,
    pub build_chain: Duration,
    pub scan: Duration,
    pub extract: Duration,
    pub total: Duration,
}

/// One-shot minimum interval-cover solver.
///
/// Construction takes the interval count and two accessors returning the
/// left and right endpoint of interval `i`; [`CoverKernel::run`] computes
/// the selection bitmap.
///
/// # Examples
///
/// ```
/// use range_cover_solver::kernel::CoverKernel;
///
/// let intervals = [(0i64, 5), (3, 10)];
/// let mut kernel = CoverKernel::new(
///     intervals.len(),
///     |i| intervals[i].0,
///     |i| intervals[i].1,
/// );
/// kernel.run();
/// assert_eq!(kernel.selection(), &[true, true]);
/// ```
pub struct CoverKernel<T, L, R>
where
    T: CoverPoint,
    L: Fn(usize) -> T + Sync,
    R: Fn(usize) -> T + Sync,
{
    n: usize,
    left: L,
    right: R,
    selection: Vec<bool>,
    _endpoint: PhantomData<T>,
}

impl<T, L, R> CoverKernel<T, L, R>
where
    T: CoverPoint,
    L: Fn(usize) -> T + Sync,
    R: Fn(usize) -> T + Sync,
{
    pub fn new(n: usize, left: L, right: R) -> Self {
        Self {
            n,
            left,
            right,
            selection: Vec::new(),
            _endpoint: PhantomData,
        }
    }

    /// Number of input intervals.
    #[inline]
    pub fn n(&self) -> usize {
        self.n
    }

    /// The selection bitmap. Empty until [`CoverKernel::run`] has been
    /// called.
    #[inline]
    pub fn selection(&self) -> &[bool] {
        &self.selection
    }

    /// Consumes the kernel into the computed selection.
    #[inline]
    pub fn into_selection(self) -> CoverSelection {
        CoverSelection::new(self.selection)
    }

    /// Runs the parallel kernel.
    pub fn run(&mut self) {
        self.run_timed();
    }

    /// Runs the parallel kernel and reports per-phase wall times.
    pub fn run_timed(&mut self) -> PhaseTimings {
        let n = self.n;
        self.selection = vec![false; n];
        if n == 0 {
            return PhaseTimings::default();
        }
        // Node ids must fit the 62-bit nxt field.
        debug_assert!((2 * n as u128) < (1u128 << 62));

        if cfg!(debug_assertions) {
            self.validate_input();
        }

        let total_start = Instant::now();
        let mut timings = PhaseTimings::default();

        tracing::debug!(n, "running parallel cover kernel");

        let phase = Instant::now();
        let furthest = build_furthest(n, &self.left, &self.right);
        timings.furthest = phase.elapsed();

        if cfg!(debug_assertions) {
            let serial = crate::furthest::build_furthest_serial(n, &self.left, &self.right);
            debug_assert_eq!(furthest, serial, "furthest table mismatch");
        }

        let phase = Instant::now();
        let nodes = build_chain(n, &furthest);
        timings.build_chain = phase.elapsed();
        debug_assert!(chain_is_well_formed(&nodes, n));

        let phase = Instant::now();
        if cfg!(debug_assertions) {
            // Run the parallel scan, then replay the serial scan on the
            // pre-scan flags and require identical results.
            let saved: Vec<bool> = nodes.iter().map(|node| node.is_valid()).collect();
            scan_parallel(&nodes, chain_start(n), PARALLEL_BLOCK_SIZE);
            let scanned: Vec<bool> = nodes.iter().map(|node| node.is_valid()).collect();
            for (node, &was) in nodes.iter().zip(&saved) {
                node.set_valid(was);
            }
            crate::scan::scan_serial(&nodes, chain_start(n));
            for (id, node) in nodes.iter().enumerate() {
                debug_assert_eq!(node.is_valid(), scanned[id], "scan mismatch at node {id}");
            }
        } else {
            scan_parallel(&nodes, chain_start(n), PARALLEL_BLOCK_SIZE);
        }
        timings.scan = phase.elapsed();

        let phase = Instant::now();
        self.selection
            .par_iter_mut()
            .enumerate()
            .for_each(|(i, slot)| {
                let l_valid = nodes[l_node_id(i) as usize].is_valid();
                let r_valid = nodes[r_node_id(i) as usize].is_valid();
                *slot = l_valid != r_valid;
            });
        timings.extract = phase.elapsed();
        timings.total = total_start.elapsed();

        if cfg!(debug_assertions) {
            let oracle = greedy_cover(n, &self.left, &self.right);
            debug_assert_eq!(self.selection, oracle, "parallel kernel diverged from greedy");
        }

        tracing::debug!(
            selected = self.selection.iter().filter(|&&b| b).count(),
            "cover kernel finished"
        );
        timings
    }

    /// Runs the serial greedy instead of the parallel phases. Same
    /// output, used for baselines.
    pub fn run_serial(&mut self) {
        self.selection = greedy_cover(self.n, &self.left, &self.right);
    }

    fn validate_input(&self) {
        let n = self.n;
        parallel_for(0, n, |i| {
            assert!(
                (self.left)(i) < (self.right)(i),
                "interval {i} is degenerate"
            );
        });
        parallel_for(0, n - 1, |i| {
            assert!(
                (self.left)(i) < (self.left)(i + 1) && (self.right)(i) < (self.right)(i + 1),
                "endpoints not strictly increasing at {i}"
            );
            assert!(
                (self.left)(i + 1) <= (self.right)(i),
                "coverage gap after interval {i}"
            );
        });
    }
}

/// Solves a validated problem with the parallel kernel.
pub fn solve<T: CoverPoint>(problem: &CoverProblem<T>) -> CoverSelection {
    let mut kernel = CoverKernel::new(
        problem.len(),
        |i| problem.left(i),
        |i| problem.right(i),
    );
    kernel.run();
    kernel.into_selection()
}
