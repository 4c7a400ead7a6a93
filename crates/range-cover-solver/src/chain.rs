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

//! The Euler-tour chain.
//!
//! The `2n` nodes are wired into one simple path that starts at
//! `Lnode(n - 1)`, visits every node exactly once, and ends at
//! `Rnode(n - 1)`. Walking the path and folding a running OR over the
//! `valid` flags linearizes the greedy selection: an interval belongs to
//! the minimum cover exactly when the running OR differs between its two
//! nodes.
//!
//! Write discipline inside the parallel build: the `nxt` of any single
//! node is stored by exactly one iteration of one pass. The predecessor
//! rule targets `Lnode(i)`'s predecessor, which is `Lnode(F[i])` only for
//! the first index of each run of equal furthest values (runs are maximal,
//! so those targets are distinct), and `Rnode(i - 1)` otherwise; the
//! successor rule only ever writes the iteration's own `Rnode(i)`. The
//! input contract's overlap chain gives `F[i] >= i + 1` for `i < n - 1`,
//! which rules out the one overlap the two rules could otherwise have.

use crate::node::{ChainNode, NULL_NODE, l_node_id, r_node_id};
use crate::par::parallel_for;

/// Node id the chain starts at: the `L` node of the last interval.
#[inline]
pub fn chain_start(n: usize) -> u64 {
    l_node_id(n - 1)
}

/// Builds the chain for `n` intervals from their furthest table.
///
/// On return, only `Rnode(0)` carries `valid = true`; the scan turns the
/// flags into prefix-ORs.
pub fn build_chain(n: usize, furthest: &[usize]) -> Vec<ChainNode> {
    debug_assert_eq!(furthest.len(), n);

    let nodes: Vec<ChainNode> = std::iter::repeat_with(ChainNode::new).take(2 * n).collect();
    if n == 0 {
        return nodes;
    }

    nodes[r_node_id(0) as usize].mark_valid();

    parallel_for(0, n - 1, |i| {
        let f = furthest[i];

        // Predecessor of Lnode(i).
        if i == 0 || furthest[i - 1] != f {
            nodes[l_node_id(f) as usize].set_nxt(l_node_id(i));
        } else {
            nodes[r_node_id(i - 1) as usize].set_nxt(l_node_id(i));
        }

        // Successor of Rnode(i); the remaining case is wired by the
        // predecessor rule of a later index.
        if furthest[i + 1] != f {
            nodes[r_node_id(i) as usize].set_nxt(r_node_id(f));
        } else if i + 1 == f {
            nodes[r_node_id(i) as usize].set_nxt(r_node_id(i + 1));
        }
    });

    // Within-interval edges: any L node still unlinked flows into its own
    // R node.
    parallel_for(0, n, |i| {
        let l = &nodes[l_node_id(i) as usize];
        if l.nxt() == NULL_NODE {
            l.set_nxt(r_node_id(i));
        }
    });

    nodes[r_node_id(n - 1) as usize].set_nxt(NULL_NODE);
    nodes
}

/// Checks the chain shape: starting at `Lnode(n - 1)`, the walk must make
/// exactly `2n - 1` hops, arrive at `Rnode(n - 1)`, and stop there.
pub fn chain_is_well_formed(nodes: &[ChainNode], n: usize) -> bool {
    if n == 0 {
        return nodes.is_empty();
    }
    if nodes.len() != 2 * n {
        return false;
    }

    let terminal = r_node_id(n - 1);
    let mut id = chain_start(n);
    let mut hops = 0usize;
    while id != terminal && id != NULL_NODE {
        hops += 1;
        if hops >= 2 * n {
            // Longer than any simple path over 2n nodes: a cycle.
            return false;
        }
        id = nodes[id as usize].nxt();
    }
    id == terminal && hops == 2 * n - 1 && nodes[terminal as usize].nxt() == NULL_NODE
}
