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

//! # Parallel Minimum Interval-Cover Kernel
//!
//! Given a strictly monotone, gap-free sequence of closed intervals, the
//! kernel selects a minimum-cardinality subset covering the same range,
//! reproducing the serial greedy result with near-linear work and
//! polylogarithmic span.
//!
//! The pipeline: a per-interval furthest-reachable table
//! ([`furthest`]), an Euler-tour linked chain over `2n` bit-packed nodes
//! ([`chain`], [`node`]), a sample-scan list ranking that turns per-node
//! validity into a prefix-OR along the chain ([`scan`]), and a
//! per-interval extraction comparing the two node flags ([`kernel`]).
//! The serial greedy lives in [`greedy`] and doubles as the debug-build
//! cross-check oracle.

pub mod chain;
pub mod furthest;
pub mod greedy;
pub mod kernel;
pub mod node;
pub mod par;
pub mod scan;

pub use kernel::{CoverKernel, PhaseTimings, solve};
