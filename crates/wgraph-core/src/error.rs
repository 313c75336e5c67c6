//! Error type shared by the store and every engine.

/// Errors surfaced by graph queries and engines.
///
/// Node identifiers are captured through their `Display` form so the error
/// stays independent of the node type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// The requested node is not present in the graph.
    #[error("node not found in graph: {node}")]
    NodeNotFound { node: String },

    /// An argument outside the accepted domain (e.g. an unknown degree mode).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Shortest-path search exhausted every candidate without settling `to`.
    #[error("no path from {from} to {to}")]
    NotReachable { from: String, to: String },
}

impl GraphError {
    pub(crate) fn node_not_found(node: &impl std::fmt::Display) -> Self {
        Self::NodeNotFound {
            node: node.to_string(),
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T, E = GraphError> = std::result::Result<T, E>;
