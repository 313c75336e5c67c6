//! Network-analysis metrics.
//!
//! # Overview
//!
//! - **Degree distribution** (`distribution`): mean degree and the
//!   empirical probability of each degree value.
//! - **Distance** (`distance`): mean hop distance over all reachable
//!   ordered pairs.
//! - **Clustering** (`clustering`): local clustering coefficients, their
//!   mean, and their mean grouped by degree.
//!
//! Every metric reads the graph through the store and the traversal
//! engine; nothing is cached between calls.
//!
//! ```rust
//! use wgraph_core::{DegreeMode, Graph};
//! use wgraph_core::metrics::{clustering::clustering_coef, distribution::mean_degree};
//!
//! // Triangle with every pair joined in both directions.
//! let mut g = Graph::new();
//! for (a, b) in [(1, 2), (2, 3), (3, 1)] {
//!     g.add_edge(a, b, 1.0);
//!     g.add_edge(b, a, 1.0);
//! }
//! assert!((mean_degree(&g, DegreeMode::InOut) - 2.0).abs() < f64::EPSILON);
//! assert!((clustering_coef(&g, &1).unwrap() - 1.0).abs() < f64::EPSILON);
//! ```

pub mod clustering;
pub mod distance;
pub mod distribution;

/// Arithmetic mean; 0.0 for an empty sequence.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn mean(values: impl IntoIterator<Item = f64>) -> f64 {
    let (sum, count) = values
        .into_iter()
        .fold((0.0_f64, 0_usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        return 0.0;
    }
    sum / count as f64
}
