//! Graph store module.
//!
//! # Overview
//!
//! [`Graph`] owns every node and weighted edge. It is a thin layer over a
//! petgraph [`DiGraph`](petgraph::graph::DiGraph) plus an identifier → index
//! map, and it is the only component that mutates graph state. All engines
//! in this crate read it through the accessors defined here.
//!
//! ## Ordering
//!
//! Node and edge insertion order is observable: nodes iterate in the order
//! they were first added, successors in the order their edge was first
//! added. Shortest-path tie-breaking depends on this, so re-adding an edge
//! only updates its weight and never moves it.
//!
//! ## Typical Usage
//!
//! ```rust
//! use wgraph_core::graph::{DegreeMode, Graph, GraphStats};
//!
//! let mut g = Graph::new();
//! g.add_edge("a", "b", 1.0);
//! g.add_edge("b", "a", 1.0);
//! g.add_edge("b", "c", 4.0);
//!
//! assert_eq!(g.size(), (3, 3));
//! assert_eq!(g.degree(&"b").unwrap(), 2);
//! assert_eq!(g.all_degrees(DegreeMode::Out)[&"b"], 2);
//!
//! let stats = GraphStats::from_graph(&g);
//! assert!(stats.has_cycles());
//! ```

pub mod degree;
pub mod stats;
pub mod store;

// Re-export primary types at module level for convenience.
pub use degree::DegreeMode;
pub use stats::GraphStats;
pub use store::{Graph, NodeId};
