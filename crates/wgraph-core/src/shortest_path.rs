//! Single-pair shortest paths (Dijkstra).
//!
//! # Algorithm
//!
//! This is the O(V²) "scan for the minimum" formulation rather than a
//! binary-heap one, because its tie-breaking is part of the contract:
//!
//! 1. `settled` starts as `[from]`, every distance at zero.
//! 2. Each round, every edge `s → k` with `s` settled and `k` not settled
//!    yields a candidate `dist[s] + weight(s, k)`. Candidates are scanned
//!    with settled nodes in the order they were settled and, within one,
//!    successors in edge insertion order.
//! 3. The candidate that is **strictly** smaller than every earlier one
//!    wins, so among equal candidates the first scanned is kept.
//! 4. The winner is settled with its predecessor and distance. No
//!    candidate at all means `to` is unreachable.
//! 5. Once `to` is settled the path is rebuilt from predecessor links.
//!
//! # Preconditions
//!
//! Edge weights must be non-negative. They are not validated; with a
//! negative weight the returned path need not be the shortest one.

use std::fmt;

use fixedbitset::FixedBitSet;
use petgraph::graph::NodeIndex;
use tracing::{debug, instrument, trace};

use crate::error::{GraphError, Result};
use crate::graph::{Graph, NodeId};

// ---------------------------------------------------------------------------
// Public types
// ---------------------------------------------------------------------------

/// A shortest path and its total weight.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPath<N> {
    /// Nodes from source to target, both inclusive.
    pub path: Vec<N>,
    /// Sum of edge weights along `path`.
    pub distance: f64,
}

impl<N> ShortestPath<N> {
    /// Number of edges on the path.
    #[must_use]
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// `1 -> 2 -> 5 -> 6 (dist = 7)`
impl<N: fmt::Display> fmt::Display for ShortestPath<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, node) in self.path.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{node}")?;
        }
        write!(f, " (dist = {})", self.distance)
    }
}

// ---------------------------------------------------------------------------
// Core computation
// ---------------------------------------------------------------------------

/// Shortest path from `from` to `to`.
///
/// `dijkstra(g, a, a)` is the one-node path with distance 0.
///
/// # Errors
///
/// - [`GraphError::NodeNotFound`] if either endpoint is absent.
/// - [`GraphError::NotReachable`] if no directed path leads from `from`
///   to `to`.
#[instrument(skip(graph, from, to), fields(from = %from, to = %to))]
pub fn dijkstra<N: NodeId>(graph: &Graph<N>, from: &N, to: &N) -> Result<ShortestPath<N>> {
    let source = graph.index_of(from)?;
    let target = graph.index_of(to)?;

    let n = graph.node_count();
    let mut dist = vec![0.0_f64; n];
    let mut prev: Vec<Option<NodeIndex>> = vec![None; n];
    let mut is_settled = FixedBitSet::with_capacity(n);
    is_settled.insert(source.index());
    let mut settled: Vec<NodeIndex> = vec![source];

    while !is_settled.contains(target.index()) {
        let mut best: Option<(NodeIndex, NodeIndex)> = None;
        let mut best_dist = f64::INFINITY;

        for &s in &settled {
            for (k, weight) in graph.out_edges(s) {
                if is_settled.contains(k.index()) {
                    continue;
                }
                let candidate = dist[s.index()] + weight;
                if candidate < best_dist {
                    best = Some((s, k));
                    best_dist = candidate;
                }
            }
        }

        let Some((via, node)) = best else {
            debug!("target not reachable");
            return Err(GraphError::NotReachable {
                from: from.to_string(),
                to: to.to_string(),
            });
        };

        trace!(node = %graph.node_at(node), via = %graph.node_at(via), distance = best_dist, "settled");
        dist[node.index()] = best_dist;
        prev[node.index()] = Some(via);
        is_settled.insert(node.index());
        settled.push(node);
    }

    Ok(ShortestPath {
        path: graph.ids(walk_back(&prev, source, target)),
        distance: dist[target.index()],
    })
}

/// Follow predecessor links from `target` back to `source`, returning the
/// path in forward order.
fn walk_back(prev: &[Option<NodeIndex>], source: NodeIndex, target: NodeIndex) -> Vec<NodeIndex> {
    let mut path = vec![target];
    let mut cursor = target;
    while cursor != source {
        match prev[cursor.index()] {
            Some(p) => {
                cursor = p;
                path.push(cursor);
            }
            None => break,
        }
    }
    path.reverse();
    path
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn weighted_mesh() -> Graph<u32> {
        Graph::from_adjacency([
            (1, vec![(2, 2.0), (3, 5.0)]),
            (2, vec![(1, 2.0), (3, 3.0), (4, 1.0), (5, 2.0)]),
            (3, vec![(1, 5.0), (2, 3.0), (4, 1.0), (5, 2.0)]),
            (4, vec![(2, 1.0), (3, 1.0), (5, 2.0), (6, 7.0)]),
            (5, vec![(2, 2.0), (3, 2.0), (4, 2.0), (6, 3.0)]),
            (6, vec![(4, 7.0), (5, 3.0)]),
        ])
    }

    fn sample() -> Graph<u32> {
        Graph::from_edges([
            (1, 5, 7.0),
            (1, 2, 2.0),
            (2, 3, 8.0),
            (2, 4, 1.0),
            (3, 8, 5.0),
            (3, 9, 5.0),
            (4, 7, 4.0),
            (7, 10, 4.0),
            (9, 1, 6.0),
            (9, 10, 2.0),
            (11, 12, 1.0),
        ])
    }

    #[test]
    fn tie_goes_to_first_scanned_candidate() {
        // Third round: 2 → 5 and 4 → 3 both cost 4; 2 → 5 is scanned first.
        let sp = dijkstra(&weighted_mesh(), &1, &6).expect("path should exist");
        assert_eq!(sp.path, vec![1, 2, 5, 6]);
        assert!((sp.distance - 7.0).abs() < f64::EPSILON);
        assert_eq!(sp.to_string(), "1 -> 2 -> 5 -> 6 (dist = 7)");
        assert_eq!(sp.hops(), 3);
    }

    #[test]
    fn sample_path_to_ten() {
        let sp = dijkstra(&sample(), &1, &10).expect("path should exist");
        assert_eq!(sp.path, vec![1, 2, 4, 7, 10]);
        assert!((sp.distance - 11.0).abs() < f64::EPSILON);
    }

    #[test]
    fn disconnected_target_is_not_reachable() {
        let err = dijkstra(&sample(), &1, &12).expect_err("12 is unreachable");
        assert_eq!(
            err,
            GraphError::NotReachable {
                from: "1".to_string(),
                to: "12".to_string(),
            }
        );
    }

    #[test]
    fn same_endpoint_is_trivial_path() {
        let sp = dijkstra(&sample(), &3, &3).expect("path should exist");
        assert_eq!(sp.path, vec![3]);
        assert!(sp.distance.abs() < f64::EPSILON);
        assert_eq!(sp.hops(), 0);
    }

    #[test]
    fn unknown_endpoint_fails() {
        let g = sample();
        assert!(matches!(
            dijkstra(&g, &1, &99),
            Err(GraphError::NodeNotFound { .. })
        ));
        assert!(matches!(
            dijkstra(&g, &99, &1),
            Err(GraphError::NodeNotFound { .. })
        ));
    }

    #[test]
    fn cheaper_detour_beats_direct_edge() {
        let g = Graph::from_edges([("a", "c", 10.0), ("a", "b", 1.0), ("b", "c", 1.0)]);
        let sp = dijkstra(&g, &"a", &"c").expect("path should exist");
        assert_eq!(sp.path, vec!["a", "b", "c"]);
        assert!((sp.distance - 2.0).abs() < f64::EPSILON);
    }
}
