//! Mean distance between reachable node pairs.

use tracing::instrument;

use crate::graph::{Graph, NodeId};
use crate::traversal::bfs_hops;

/// Mean hop distance over every ordered `(source, target)` pair where
/// `target` is reachable from `source`.
///
/// Unreachable pairs are left out of both the sum and the count, so a
/// disconnected graph is not penalised. Returns 0.0 when no pair is
/// reachable.
#[must_use]
#[instrument(skip(graph))]
#[allow(clippy::cast_precision_loss)]
pub fn mean_distances<N: NodeId>(graph: &Graph<N>) -> f64 {
    let mut total = 0_usize;
    let mut pairs = 0_usize;

    for source in graph.node_indices() {
        for (_, hops) in bfs_hops(graph, source) {
            total += hops;
            pairs += 1;
        }
    }

    if pairs == 0 {
        return 0.0;
    }
    total as f64 / pairs as f64
}
