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

//! Bit-packed chain nodes.
//!
//! Every interval contributes two nodes to the Euler-tour chain: an `L`
//! node with id `2i` and an `R` node with id `2i + 1`. A node is a single
//! 64-bit word:
//!
//!    - bits 0..=61: `nxt`, the successor node id, or [`NULL_NODE`]
//!    - bit 62: `sampled`, the node is a scan seed
//!    - bit 63: `valid`, the scanned flag
//!
//! The word is an `AtomicU64` so the scan's concurrent flag updates are
//! well-defined. `valid` and `sampled` only ever transition from 0 to 1
//! and are set with `fetch_or`, which makes overlapping segment walks
//! harmless. `nxt` is written with a plain read-modify-write: the chain
//! builder guarantees each node's `nxt` is stored by exactly one iteration
//! of one pass, and no flag is written concurrently with a link write.

use std::sync::atomic::{AtomicU64, Ordering};

/// Sentinel successor id: the all-ones value of the 62-bit `nxt` field.
pub const NULL_NODE: u64 = (1 << 62) - 1;

const NXT_MASK: u64 = NULL_NODE;
const SAMPLED_BIT: u64 = 1 << 62;
const VALID_BIT: u64 = 1 << 63;

/// Chain node id of the `L` node of interval `index`.
#[inline]
pub fn l_node_id(index: usize) -> u64 {
    (index as u64) << 1
}

/// Chain node id of the `R` node of interval `index`.
#[inline]
pub fn r_node_id(index: usize) -> u64 {
    ((index as u64) << 1) | 1
}

/// A packed Euler-tour chain node.
#[derive(Debug)]
pub struct ChainNode(AtomicU64);

impl ChainNode {
    /// A fresh node: `nxt` is [`NULL_NODE`], both flags are clear.
    #[inline]
    pub fn new() -> Self {
        Self(AtomicU64::new(NULL_NODE))
    }

    /// The successor node id, or [`NULL_NODE`] at the chain end.
    #[inline]
    pub fn nxt(&self) -> u64 {
        self.0.load(Ordering::Relaxed) & NXT_MASK
    }

    /// Stores the successor id, preserving both flags.
    ///
    /// Not an atomic read-modify-write: callers must ensure no other
    /// thread writes this node's word concurrently.
    #[inline]
    pub fn set_nxt(&self, nxt: u64) {
        debug_assert!(nxt <= NULL_NODE);
        let word = self.0.load(Ordering::Relaxed);
        self.0
            .store((word & !NXT_MASK) | nxt, Ordering::Relaxed);
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.0.load(Ordering::Relaxed) & VALID_BIT != 0
    }

    /// Sets `valid`. Monotone, safe to race.
    #[inline]
    pub fn mark_valid(&self) {
        self.0.fetch_or(VALID_BIT, Ordering::Relaxed);
    }

    /// Forces `valid` to an explicit value. Only used to restore saved
    /// scan state in debug cross-checks and tests.
    #[inline]
    pub fn set_valid(&self, valid: bool) {
        if valid {
            self.0.fetch_or(VALID_BIT, Ordering::Relaxed);
        } else {
            self.0.fetch_and(!VALID_BIT, Ordering::Relaxed);
        }
    }

    #[inline]
    pub fn is_sampled(&self) -> bool {
        self.0.load(Ordering::Relaxed) & SAMPLED_BIT != 0
    }

    /// Sets `sampled`. Monotone, safe to race.
    #[inline]
    pub fn mark_sampled(&self) {
        self.0.fetch_or(SAMPLED_BIT, Ordering::Relaxed);
    }
}

impl Default for ChainNode {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_ids_interleave() {
        assert_eq!(l_node_id(0), 0);
        assert_eq!(r_node_id(0), 1);
        assert_eq!(l_node_id(3), 6);
        assert_eq!(r_node_id(3), 7);
    }

    #[test]
    fn fresh_node_is_clear() {
        let node = ChainNode::new();
        assert_eq!(node.nxt(), NULL_NODE);
        assert!(!node.is_valid());
        assert!(!node.is_sampled());
    }

    #[test]
    fn set_nxt_preserves_flags() {
        let node = ChainNode::new();
        node.mark_valid();
        node.mark_sampled();
        node.set_nxt(12345);
        assert_eq!(node.nxt(), 12345);
        assert!(node.is_valid());
        assert!(node.is_sampled());
    }

    #[test]
    fn flags_do_not_disturb_nxt() {
        let node = ChainNode::new();
        node.set_nxt(77);
        node.mark_valid();
        node.mark_sampled();
        assert_eq!(node.nxt(), 77);
    }

    #[test]
    fn set_valid_round_trips() {
        let node = ChainNode::new();
        node.set_valid(true);
        assert!(node.is_valid());
        node.set_valid(false);
        assert!(!node.is_valid());
    }

    #[test]
    fn null_fits_the_field() {
        let node = ChainNode::new();
        node.set_nxt(NULL_NODE);
        assert_eq!(node.nxt(), NULL_NODE);
        assert!(!node.is_valid());
    }
}
