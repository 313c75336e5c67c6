//! Degree distribution: mean degree and per-degree probabilities.

use std::collections::BTreeMap;

use crate::graph::{DegreeMode, Graph, NodeId};
use crate::metrics::mean;

/// Mean of [`Graph::all_degrees`] under `mode`; 0.0 for an empty graph.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn mean_degree<N: NodeId>(graph: &Graph<N>, mode: DegreeMode) -> f64 {
    mean(
        graph
            .node_indices()
            .map(|idx| graph.degree_at(idx, mode) as f64),
    )
}

/// Empirical probability of each degree value under `mode`.
///
/// Returns `(degree, fraction of nodes with that degree)` pairs sorted by
/// degree, each fraction rounded to two decimal places.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn prob_degree<N: NodeId>(graph: &Graph<N>, mode: DegreeMode) -> Vec<(usize, f64)> {
    let total = graph.node_count();
    if total == 0 {
        return Vec::new();
    }

    let mut counts: BTreeMap<usize, usize> = BTreeMap::new();
    for idx in graph.node_indices() {
        *counts.entry(graph.degree_at(idx, mode)).or_insert(0) += 1;
    }

    counts
        .into_iter()
        .map(|(degree, count)| (degree, round2(count as f64 / total as f64)))
        .collect()
}

/// Round to two decimals through fixed-precision formatting, which rounds
/// the exact binary value and sends ties to even (0.125 -> 0.12).
fn round2(value: f64) -> f64 {
    format!("{value:.2}").parse().unwrap_or(value)
}
