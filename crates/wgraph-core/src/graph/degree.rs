//! Degree queries.
//!
//! `degree` is the size of the undirected neighbourhood
//! ([`Graph::adjacents`]), **not** `in_degree + out_degree`: a neighbour
//! joined in both directions counts once.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use petgraph::graph::NodeIndex;

use crate::error::{GraphError, Result};
use crate::graph::store::{Graph, NodeId};

/// Which degree a per-node or whole-graph degree query measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DegreeMode {
    /// Number of successors.
    Out,
    /// Number of predecessors.
    In,
    /// Number of distinct adjacent nodes in either direction.
    #[default]
    InOut,
}

impl DegreeMode {
    /// The canonical lowercase name (`"out"`, `"in"`, `"inout"`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Out => "out",
            Self::In => "in",
            Self::InOut => "inout",
        }
    }
}

impl fmt::Display for DegreeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DegreeMode {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "out" => Ok(Self::Out),
            "in" => Ok(Self::In),
            "inout" => Ok(Self::InOut),
            other => Err(GraphError::InvalidArgument(format!(
                "degree mode must be one of 'out', 'in' or 'inout', got '{other}'"
            ))),
        }
    }
}

impl<N: NodeId> Graph<N> {
    /// Number of successors of `node`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if `node` is absent.
    pub fn out_degree(&self, node: &N) -> Result<usize> {
        Ok(self.degree_at(self.index_of(node)?, DegreeMode::Out))
    }

    /// Number of predecessors of `node`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if `node` is absent.
    pub fn in_degree(&self, node: &N) -> Result<usize> {
        Ok(self.degree_at(self.index_of(node)?, DegreeMode::In))
    }

    /// Number of distinct neighbours of `node` in either direction.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if `node` is absent.
    pub fn degree(&self, node: &N) -> Result<usize> {
        Ok(self.degree_at(self.index_of(node)?, DegreeMode::InOut))
    }

    /// Degree of every node under `mode`.
    #[must_use]
    pub fn all_degrees(&self, mode: DegreeMode) -> HashMap<N, usize> {
        self.node_indices()
            .map(|idx| (self.node_at(idx).clone(), self.degree_at(idx, mode)))
            .collect()
    }

    pub(crate) fn degree_at(&self, idx: NodeIndex, mode: DegreeMode) -> usize {
        match mode {
            DegreeMode::Out => self.as_petgraph().edges(idx).count(),
            DegreeMode::In => self.in_neighbors(idx).len(),
            DegreeMode::InOut => self.adjacent_indices(idx).len(),
        }
    }
}
