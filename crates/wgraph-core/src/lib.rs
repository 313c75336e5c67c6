#![forbid(unsafe_code)]
//! wgraph-core library.
//!
//! An in-memory weighted directed graph with a small set of analysis
//! engines layered on top of it.
//!
//! # Layout
//!
//! - [`graph`]: the store ([`Graph`]), degree queries and summary statistics.
//! - [`traversal`]: breadth-first / depth-first reachability and hop counts.
//! - [`cycles`]: per-node and whole-graph cycle detection.
//! - [`shortest_path`]: the settle-order Dijkstra engine.
//! - [`metrics`]: degree distributions, mean distance, clustering.
//!
//! Engines are free functions over `&Graph<N>`; none of them mutate or
//! cache anything between calls.
//!
//! # Conventions
//!
//! - **Errors**: fallible operations return [`Result`] with a [`GraphError`].
//! - **Logging**: Use `tracing` macros (`debug!`, `trace!`). The library
//!   never installs a subscriber.
//!
//! ```rust
//! use wgraph_core::{Graph, shortest_path::dijkstra};
//!
//! let mut g = Graph::new();
//! g.add_edge(1, 2, 2.0);
//! g.add_edge(2, 3, 1.0);
//! g.add_edge(1, 3, 5.0);
//!
//! let sp = dijkstra(&g, &1, &3).unwrap();
//! assert_eq!(sp.path, vec![1, 2, 3]);
//! assert!((sp.distance - 3.0).abs() < f64::EPSILON);
//! ```

pub mod cycles;
pub mod error;
pub mod graph;
pub mod metrics;
pub mod shortest_path;
pub mod traversal;

pub use error::{GraphError, Result};
pub use graph::{DegreeMode, Graph, GraphStats, NodeId};
pub use shortest_path::ShortestPath;
