//! Cycle detection.
//!
//! [`node_has_cycle`] answers "does some directed walk leave `n` and come
//! back to it?" with a breadth-first search that stops at the first edge
//! pointing back at `n`. [`has_cycle`] asks the same question of every node
//! until one succeeds.
//!
//! [`find_cycle_components`] goes further and lists the strongly connected
//! components that contain cycles, using petgraph's Tarjan SCC.

#![allow(clippy::module_name_repetitions)]

use std::collections::VecDeque;

use fixedbitset::FixedBitSet;
use petgraph::algo::tarjan_scc;
use petgraph::graph::NodeIndex;
use tracing::{debug, instrument};

use crate::error::Result;
use crate::graph::{Graph, NodeId};

/// Return `true` if a directed walk starting at `node` returns to it.
///
/// A self-loop counts.
///
/// # Errors
///
/// Returns [`GraphError::NodeNotFound`](crate::GraphError::NodeNotFound) if
/// `node` is absent.
pub fn node_has_cycle<N: NodeId>(graph: &Graph<N>, node: &N) -> Result<bool> {
    let start = graph.index_of(node)?;
    Ok(returns_to(graph, start))
}

/// Return `true` if any node in the graph lies on a cycle.
#[must_use]
#[instrument(skip(graph))]
pub fn has_cycle<N: NodeId>(graph: &Graph<N>) -> bool {
    graph.node_indices().any(|idx| {
        let found = returns_to(graph, idx);
        if found {
            debug!(node = %graph.node_at(idx), "cycle found");
        }
        found
    })
}

/// Find every strongly connected component that contains a cycle.
///
/// A component qualifies if it has more than one member, or if its single
/// member has a self-loop. Members are listed in node insertion order and
/// components are ordered by their earliest-inserted member.
#[must_use]
pub fn find_cycle_components<N: NodeId>(graph: &Graph<N>) -> Vec<Vec<N>> {
    cycle_component_indices(graph)
        .into_iter()
        .map(|component| graph.ids(component))
        .collect()
}

pub(crate) fn cycle_component_indices<N: NodeId>(graph: &Graph<N>) -> Vec<Vec<NodeIndex>> {
    let mut components: Vec<Vec<NodeIndex>> = tarjan_scc(graph.as_petgraph())
        .into_iter()
        .filter(|component| {
            component.len() > 1
                || component
                    .first()
                    .is_some_and(|&idx| graph.has_edge(idx, idx))
        })
        .map(|mut component| {
            component.sort_unstable();
            component
        })
        .collect();

    components.sort_unstable_by_key(|component| component.first().copied());
    components
}

fn returns_to<N: NodeId>(graph: &Graph<N>, start: NodeIndex) -> bool {
    let mut seen = FixedBitSet::with_capacity(graph.node_count());
    seen.insert(start.index());
    let mut frontier: VecDeque<NodeIndex> = VecDeque::from([start]);

    while let Some(node) = frontier.pop_front() {
        for (next, _) in graph.out_edges(node) {
            if next == start {
                return true;
            }
            if !seen.put(next.index()) {
                frontier.push_back(next);
            }
        }
    }

    false
}
