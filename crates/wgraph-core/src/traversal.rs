//! Reachability over successor edges.
//!
//! All three traversals share one discipline: a node is put on the frontier
//! at most once, the first time it is discovered, and the source itself is
//! never reported. They differ only in where newly discovered successors
//! enter the frontier:
//!
//! | Traversal               | New successors go…                         |
//! |-------------------------|--------------------------------------------|
//! | [`reachable_bfs`]       | to the back (FIFO)                         |
//! | [`reachable_dfs`]       | to the front, keeping their edge order     |
//! | [`reachable_with_dist`] | to the back, tagged with `hops + 1`        |
//!
//! Pushing a node's successors onto the front of the queue (rather than
//! onto a separate stack) means the next node visited is always the most
//! recently discovered one, which yields a depth-first visit order.

use std::collections::VecDeque;

use fixedbitset::FixedBitSet;
use petgraph::graph::NodeIndex;

use crate::error::Result;
use crate::graph::{Graph, NodeId};

/// Nodes reachable from `from` in breadth-first discovery order,
/// excluding `from`.
///
/// # Errors
///
/// Returns [`GraphError::NodeNotFound`](crate::GraphError::NodeNotFound) if
/// `from` is absent.
pub fn reachable_bfs<N: NodeId>(graph: &Graph<N>, from: &N) -> Result<Vec<N>> {
    let source = graph.index_of(from)?;
    Ok(graph.ids(bfs_hops(graph, source).into_iter().map(|(idx, _)| idx)))
}

/// Nodes reachable from `from` in depth-first visit order, excluding `from`.
///
/// Returns the same set as [`reachable_bfs`]; only the order differs.
///
/// # Errors
///
/// Returns [`GraphError::NodeNotFound`](crate::GraphError::NodeNotFound) if
/// `from` is absent.
pub fn reachable_dfs<N: NodeId>(graph: &Graph<N>, from: &N) -> Result<Vec<N>> {
    let source = graph.index_of(from)?;

    let mut seen = FixedBitSet::with_capacity(graph.node_count());
    seen.insert(source.index());
    let mut frontier: VecDeque<NodeIndex> = VecDeque::from([source]);
    let mut order = Vec::new();

    while let Some(node) = frontier.pop_front() {
        if node != source {
            order.push(node);
        }
        let mut slot = 0;
        for (next, _) in graph.out_edges(node) {
            if !seen.put(next.index()) {
                frontier.insert(slot, next);
                slot += 1;
            }
        }
    }

    Ok(graph.ids(order))
}

/// Nodes reachable from `from` with their hop count, in breadth-first
/// discovery order, excluding `from`.
///
/// A node's hop count is fixed when it is first discovered, which under
/// FIFO order is the length of a fewest-edges path.
///
/// # Errors
///
/// Returns [`GraphError::NodeNotFound`](crate::GraphError::NodeNotFound) if
/// `from` is absent.
pub fn reachable_with_dist<N: NodeId>(graph: &Graph<N>, from: &N) -> Result<Vec<(N, usize)>> {
    let source = graph.index_of(from)?;
    Ok(bfs_hops(graph, source)
        .into_iter()
        .map(|(idx, hops)| (graph.node_at(idx).clone(), hops))
        .collect())
}

/// Breadth-first walk from `source` returning `(node, hops)` in discovery
/// order, `source` excluded.
pub(crate) fn bfs_hops<N: NodeId>(graph: &Graph<N>, source: NodeIndex) -> Vec<(NodeIndex, usize)> {
    let mut seen = FixedBitSet::with_capacity(graph.node_count());
    seen.insert(source.index());
    let mut frontier: VecDeque<(NodeIndex, usize)> = VecDeque::from([(source, 0)]);
    let mut order = Vec::new();

    while let Some((node, hops)) = frontier.pop_front() {
        if node != source {
            order.push((node, hops));
        }
        for (next, _) in graph.out_edges(node) {
            if !seen.put(next.index()) {
                frontier.push_back((next, hops + 1));
            }
        }
    }

    order
}
