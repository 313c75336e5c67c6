//! Insertion-ordered weighted directed graph storage.
//!
//! # Representation
//!
//! Nodes live in a petgraph `DiGraph<N, f64>`; `node_map` resolves an
//! identifier to its [`NodeIndex`]. Because nodes are never removed, node
//! indices are dense and ascend in insertion order.
//!
//! petgraph keeps each node's edge lists newest-first, so the accessors
//! below reverse them to expose edge insertion order. Edges are written
//! with `update_edge`, which rewrites the weight of an existing edge in
//! place: at most one edge per ordered pair, last write wins.

#![allow(clippy::module_name_repetitions)]

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use petgraph::{
    Direction,
    graph::{DiGraph, NodeIndex},
    visit::EdgeRef,
};

use crate::error::{GraphError, Result};

/// Bounds required of a node identifier.
///
/// Implemented for every type that is cloneable, hashable, comparable and
/// printable, which covers integers, `String` and `&'static str`.
pub trait NodeId: Clone + Eq + Hash + fmt::Debug + fmt::Display {}

impl<T> NodeId for T where T: Clone + Eq + Hash + fmt::Debug + fmt::Display {}

// ---------------------------------------------------------------------------
// Graph
// ---------------------------------------------------------------------------

/// A weighted directed graph with insertion-ordered adjacency.
#[derive(Debug, Clone)]
pub struct Graph<N: NodeId> {
    graph: DiGraph<N, f64>,
    node_map: HashMap<N, NodeIndex>,
}

impl<N: NodeId> Default for Graph<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: NodeId> Graph<N> {
    /// Create an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self {
            graph: DiGraph::new(),
            node_map: HashMap::new(),
        }
    }

    /// Build a graph from an adjacency literal.
    ///
    /// Each entry is a node followed by its `(successor, weight)` pairs.
    /// Nodes and edges are added in the order given, so the literal's order
    /// becomes the graph's insertion order.
    ///
    /// ```rust
    /// use wgraph_core::Graph;
    ///
    /// let g = Graph::from_adjacency([
    ///     (1, vec![(2, 2.0), (3, 5.0)]),
    ///     (2, vec![(3, 3.0)]),
    ///     (3, vec![]),
    /// ]);
    /// assert_eq!(g.size(), (3, 3));
    /// ```
    #[must_use]
    pub fn from_adjacency<I, S>(adjacency: I) -> Self
    where
        I: IntoIterator<Item = (N, S)>,
        S: IntoIterator<Item = (N, f64)>,
    {
        let mut g = Self::new();
        for (node, successors) in adjacency {
            g.add_node(node.clone());
            for (succ, weight) in successors {
                g.add_edge(node.clone(), succ, weight);
            }
        }
        g
    }

    /// Build a graph by replaying `(from, to, weight)` triples through
    /// [`Graph::add_edge`].
    #[must_use]
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (N, N, f64)>,
    {
        let mut g = Self::new();
        for (from, to, weight) in edges {
            g.add_edge(from, to, weight);
        }
        g
    }

    /// Add `node` if it is not already present. Idempotent.
    pub fn add_node(&mut self, node: N) {
        self.ensure_node(node);
    }

    /// Add the edge `from → to` with `weight`, creating either endpoint as
    /// needed. An existing edge between the same ordered pair keeps its
    /// position and takes the new weight.
    pub fn add_edge(&mut self, from: N, to: N, weight: f64) {
        let a = self.ensure_node(from);
        let b = self.ensure_node(to);
        self.graph.update_edge(a, b, weight);
    }

    fn ensure_node(&mut self, node: N) -> NodeIndex {
        if let Some(&idx) = self.node_map.get(&node) {
            return idx;
        }
        let idx = self.graph.add_node(node.clone());
        self.node_map.insert(node, idx);
        idx
    }

    /// Return `true` if `node` is present.
    #[must_use]
    pub fn contains_node(&self, node: &N) -> bool {
        self.node_map.contains_key(node)
    }

    /// Weight of the edge `from → to`, if that edge exists.
    #[must_use]
    pub fn weight(&self, from: &N, to: &N) -> Option<f64> {
        let a = *self.node_map.get(from)?;
        let b = *self.node_map.get(to)?;
        self.graph
            .find_edge(a, b)
            .and_then(|e| self.graph.edge_weight(e).copied())
    }

    /// Iterate over node identifiers in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &N> + '_ {
        self.graph.node_indices().map(move |idx| &self.graph[idx])
    }

    /// All directed edges as `(from, to)` pairs: sources in node insertion
    /// order, and for each source its successors in edge insertion order.
    #[must_use]
    pub fn edges(&self) -> Vec<(N, N)> {
        self.edges_with_weights()
            .into_iter()
            .map(|(from, to, _)| (from, to))
            .collect()
    }

    /// Like [`Graph::edges`] but including each edge's weight.
    #[must_use]
    pub fn edges_with_weights(&self) -> Vec<(N, N, f64)> {
        let mut out = Vec::with_capacity(self.graph.edge_count());
        for idx in self.graph.node_indices() {
            for (succ, weight) in self.out_edges(idx) {
                out.push((self.graph[idx].clone(), self.graph[succ].clone(), weight));
            }
        }
        out
    }

    /// `(node count, edge count)`.
    #[must_use]
    pub fn size(&self) -> (usize, usize) {
        (self.node_count(), self.edge_count())
    }

    /// Number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of directed edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Return `true` if the graph has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Nodes that `node` points to, in edge insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if `node` is absent.
    pub fn successors(&self, node: &N) -> Result<Vec<N>> {
        let idx = self.index_of(node)?;
        Ok(self
            .out_edges(idx)
            .into_iter()
            .map(|(succ, _)| self.graph[succ].clone())
            .collect())
    }

    /// Nodes with an edge into `node`, in the order those edges were added.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if `node` is absent.
    pub fn predecessors(&self, node: &N) -> Result<Vec<N>> {
        let idx = self.index_of(node)?;
        Ok(self.ids(self.in_neighbors(idx)))
    }

    /// Undirected neighbourhood of `node`: successors first, then any
    /// predecessor not already listed. Each neighbour appears once.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if `node` is absent.
    pub fn adjacents(&self, node: &N) -> Result<Vec<N>> {
        let idx = self.index_of(node)?;
        Ok(self.ids(self.adjacent_indices(idx)))
    }

    /// Borrow the underlying petgraph graph, e.g. to run petgraph
    /// algorithms directly. Node indices follow insertion order.
    #[must_use]
    pub const fn as_petgraph(&self) -> &DiGraph<N, f64> {
        &self.graph
    }

    // -----------------------------------------------------------------------
    // Index-level accessors used by the engines
    // -----------------------------------------------------------------------

    pub(crate) fn index_of(&self, node: &N) -> Result<NodeIndex> {
        self.node_map
            .get(node)
            .copied()
            .ok_or_else(|| GraphError::node_not_found(node))
    }

    pub(crate) fn node_at(&self, idx: NodeIndex) -> &N {
        &self.graph[idx]
    }

    pub(crate) fn node_indices(&self) -> petgraph::graph::NodeIndices {
        self.graph.node_indices()
    }

    pub(crate) fn ids(&self, indices: impl IntoIterator<Item = NodeIndex>) -> Vec<N> {
        indices
            .into_iter()
            .map(|idx| self.graph[idx].clone())
            .collect()
    }

    /// Outgoing `(target, weight)` pairs in edge insertion order.
    pub(crate) fn out_edges(&self, idx: NodeIndex) -> Vec<(NodeIndex, f64)> {
        let mut out: Vec<(NodeIndex, f64)> = self
            .graph
            .edges(idx)
            .map(|e| (e.target(), *e.weight()))
            .collect();
        out.reverse();
        out
    }

    /// Sources of incoming edges in edge insertion order.
    pub(crate) fn in_neighbors(&self, idx: NodeIndex) -> Vec<NodeIndex> {
        let mut preds: Vec<NodeIndex> = self
            .graph
            .neighbors_directed(idx, Direction::Incoming)
            .collect();
        preds.reverse();
        preds
    }

    pub(crate) fn adjacent_indices(&self, idx: NodeIndex) -> Vec<NodeIndex> {
        let mut adj: Vec<NodeIndex> = self.out_edges(idx).into_iter().map(|(n, _)| n).collect();
        for pred in self.in_neighbors(idx) {
            if !adj.contains(&pred) {
                adj.push(pred);
            }
        }
        adj
    }

    pub(crate) fn has_edge(&self, from: NodeIndex, to: NodeIndex) -> bool {
        self.graph.contains_edge(from, to)
    }
}

/// One line per edge, `from ---(weight)---> to`, in [`Graph::edges`] order.
impl<N: NodeId> fmt::Display for Graph<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (from, to, weight) in self.edges_with_weights() {
            writeln!(f, "{from} ---({weight})---> {to}")?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
