//! Local clustering coefficients.
//!
//! The neighbourhood of a node is its undirected neighbourhood
//! ([`Graph::adjacents`]). For `k` neighbours, every ordered pair `(i, j)`
//! with `i != j` counts as a link when an edge joins them in either
//! direction, and the coefficient is `links / (k * (k - 1))`. Nodes with
//! fewer than two neighbours score 0.0.

use std::collections::{BTreeMap, HashMap};

use petgraph::graph::NodeIndex;
use tracing::instrument;

use crate::error::Result;
use crate::graph::{DegreeMode, Graph, NodeId};
use crate::metrics::mean;

/// Clustering coefficient of `node`.
///
/// # Errors
///
/// Returns [`GraphError::NodeNotFound`](crate::GraphError::NodeNotFound) if
/// `node` is absent.
pub fn clustering_coef<N: NodeId>(graph: &Graph<N>, node: &N) -> Result<f64> {
    Ok(coef_at(graph, graph.index_of(node)?))
}

/// Clustering coefficient of every node.
#[must_use]
#[instrument(skip(graph))]
pub fn all_clustering_coefs<N: NodeId>(graph: &Graph<N>) -> HashMap<N, f64> {
    graph
        .node_indices()
        .map(|idx| (graph.node_at(idx).clone(), coef_at(graph, idx)))
        .collect()
}

/// Mean clustering coefficient over all nodes; 0.0 for an empty graph.
#[must_use]
pub fn mean_clustering_coef<N: NodeId>(graph: &Graph<N>) -> f64 {
    mean(graph.node_indices().map(|idx| coef_at(graph, idx)))
}

/// Mean clustering coefficient of the nodes sharing each degree value
/// under `mode`, keyed by degree in ascending order.
#[must_use]
#[instrument(skip(graph))]
pub fn mean_clustering_per_degree<N: NodeId>(
    graph: &Graph<N>,
    mode: DegreeMode,
) -> BTreeMap<usize, f64> {
    let mut by_degree: BTreeMap<usize, Vec<f64>> = BTreeMap::new();
    for idx in graph.node_indices() {
        by_degree
            .entry(graph.degree_at(idx, mode))
            .or_default()
            .push(coef_at(graph, idx));
    }

    by_degree
        .into_iter()
        .map(|(degree, coefs)| (degree, mean(coefs)))
        .collect()
}

#[allow(clippy::cast_precision_loss)]
fn coef_at<N: NodeId>(graph: &Graph<N>, idx: NodeIndex) -> f64 {
    let adj = graph.adjacent_indices(idx);
    let k = adj.len();
    if k <= 1 {
        return 0.0;
    }

    let mut links = 0_usize;
    for &i in &adj {
        for &j in &adj {
            if i != j && (graph.has_edge(i, j) || graph.has_edge(j, i)) {
                links += 1;
            }
        }
    }

    links as f64 / (k * (k - 1)) as f64
}
