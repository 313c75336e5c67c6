//! Summary statistics for a [`Graph`].
//!
//! # Statistics Provided
//!
//! - **node_count** / **edge_count**: the store's `size()`.
//! - **density**: `edge_count / (node_count * (node_count - 1))`, the
//!   fraction of possible directed edges present. Zero for graphs with
//!   fewer than two nodes. Self-loops count as edges, so a graph made of
//!   loops can exceed 1.0.
//! - **weakly_connected_component_count**: components of the undirected view.
//! - **isolated_node_count**: nodes with neither in- nor out-edges.
//! - **max_in_degree** / **max_out_degree**: over all nodes.
//! - **scc_count**: strongly connected components.
//! - **cycle_component_count**: SCCs that contain a cycle (more than one
//!   member, or a single member with a self-loop).

use petgraph::algo::{connected_components, tarjan_scc};
use tracing::instrument;

use crate::cycles::cycle_component_indices;
use crate::graph::degree::DegreeMode;
use crate::graph::store::{Graph, NodeId};

// ---------------------------------------------------------------------------
// GraphStats
// ---------------------------------------------------------------------------

/// Summary statistics for a graph, computed by [`GraphStats::from_graph`].
#[derive(Debug, Clone, PartialEq)]
pub struct GraphStats {
    /// Number of nodes.
    pub node_count: usize,
    /// Number of directed edges.
    pub edge_count: usize,
    /// `edge_count / (node_count * (node_count - 1))`; 0.0 below two nodes.
    pub density: f64,
    /// Number of weakly connected components.
    pub weakly_connected_component_count: usize,
    /// Number of nodes with no in-edges and no out-edges.
    pub isolated_node_count: usize,
    /// Highest in-degree of any node.
    pub max_in_degree: usize,
    /// Highest out-degree of any node.
    pub max_out_degree: usize,
    /// Number of strongly connected components.
    pub scc_count: usize,
    /// Number of strongly connected components containing a cycle.
    pub cycle_component_count: usize,
}

impl GraphStats {
    /// Compute statistics for `graph`.
    #[must_use]
    #[instrument(skip(graph))]
    pub fn from_graph<N: NodeId>(graph: &Graph<N>) -> Self {
        let (node_count, edge_count) = graph.size();
        let pg = graph.as_petgraph();

        let isolated_node_count = graph
            .node_indices()
            .filter(|&idx| graph.degree_at(idx, DegreeMode::InOut) == 0)
            .count();

        let max_in_degree = graph
            .node_indices()
            .map(|idx| graph.degree_at(idx, DegreeMode::In))
            .max()
            .unwrap_or(0);

        let max_out_degree = graph
            .node_indices()
            .map(|idx| graph.degree_at(idx, DegreeMode::Out))
            .max()
            .unwrap_or(0);

        Self {
            node_count,
            edge_count,
            density: compute_density(node_count, edge_count),
            weakly_connected_component_count: connected_components(pg),
            isolated_node_count,
            max_in_degree,
            max_out_degree,
            scc_count: tarjan_scc(pg).len(),
            cycle_component_count: cycle_component_indices(graph).len(),
        }
    }

    /// Return `true` if the graph has no edges.
    #[must_use]
    pub const fn is_flat(&self) -> bool {
        self.edge_count == 0
    }

    /// Return `true` if the graph contains at least one cycle.
    #[must_use]
    pub const fn has_cycles(&self) -> bool {
        self.cycle_component_count > 0
    }
}

#[allow(clippy::cast_precision_loss)]
fn compute_density(node_count: usize, edge_count: usize) -> f64 {
    if node_count < 2 {
        return 0.0_f64;
    }
    let max_edges = (node_count * (node_count - 1)) as f64;
    edge_count as f64 / max_edges
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn graph(edges: &[(&'static str, &'static str)]) -> Graph<&'static str> {
        Graph::from_edges(edges.iter().map(|&(a, b)| (a, b, 1.0)))
    }

    fn graph_with_nodes(
        nodes: &[&'static str],
        edges: &[(&'static str, &'static str)],
    ) -> Graph<&'static str> {
        let mut g = Graph::new();
        for &n in nodes {
            g.add_node(n);
        }
        for &(a, b) in edges {
            g.add_edge(a, b, 1.0);
        }
        g
    }

    #[test]
    fn empty_graph_stats() {
        let g: Graph<&str> = Graph::new();
        let stats = GraphStats::from_graph(&g);

        assert_eq!(stats.node_count, 0);
        assert_eq!(stats.edge_count, 0);
        assert!((stats.density - 0.0).abs() < f64::EPSILON);
        assert_eq!(stats.weakly_connected_component_count, 0);
        assert_eq!(stats.isolated_node_count, 0);
        assert_eq!(stats.max_in_degree, 0);
        assert_eq!(stats.max_out_degree, 0);
        assert_eq!(stats.scc_count, 0);
        assert!(stats.is_flat());
        assert!(!stats.has_cycles());
    }

    #[test]
    fn linear_chain_stats() {
        // A → B → C
        let stats = GraphStats::from_graph(&graph(&[("A", "B"), ("B", "C")]));

        assert_eq!(stats.node_count, 3);
        assert_eq!(stats.edge_count, 2);
        assert_eq!(stats.scc_count, 3);
        assert_eq!(stats.cycle_component_count, 0);
        assert_eq!(stats.max_in_degree, 1);
        assert_eq!(stats.max_out_degree, 1);
        assert!(!stats.has_cycles());
        assert!(!stats.is_flat());
    }

    #[test]
    fn two_cycle_is_one_component() {
        // A ⇄ B: density = 2 / (2 * 1) = 1.0
        let stats = GraphStats::from_graph(&graph(&[("A", "B"), ("B", "A")]));

        assert_eq!(stats.scc_count, 1);
        assert_eq!(stats.cycle_component_count, 1);
        assert!((stats.density - 1.0).abs() < 1e-10);
        assert!(stats.has_cycles());
    }

    #[test]
    fn self_loop_counts_as_cycle() {
        let stats = GraphStats::from_graph(&graph(&[("A", "A"), ("A", "B")]));
        assert_eq!(stats.scc_count, 2);
        assert_eq!(stats.cycle_component_count, 1);
    }

    #[test]
    fn disjoint_and_isolated() {
        let g = graph_with_nodes(&["E"], &[("A", "B"), ("C", "D")]);
        let stats = GraphStats::from_graph(&g);

        assert_eq!(stats.weakly_connected_component_count, 3);
        assert_eq!(stats.isolated_node_count, 1);
    }

    #[test]
    fn hub_degrees() {
        // A→C, B→C, D→C, C→E
        let g = graph(&[("A", "C"), ("B", "C"), ("D", "C"), ("C", "E")]);
        let stats = GraphStats::from_graph(&g);

        assert_eq!(stats.max_in_degree, 3);
        assert_eq!(stats.max_out_degree, 1);
    }
}
