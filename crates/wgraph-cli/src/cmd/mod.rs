//! Subcommand handlers.
//!
//! Every handler takes its parsed args, the resolved [`OutputMode`] and the
//! graph built from the global `--preset` / `--edge` options.
//!
//! [`OutputMode`]: crate::output::OutputMode

pub mod cycles;
pub mod metrics;
pub mod neighbors;
pub mod path;
pub mod reach;
pub mod show;
pub mod stats;

use std::collections::HashMap;

use serde::Serialize;
use wgraph_core::Graph;

/// A per-node value, used to emit maps in node insertion order.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NodeValue<T> {
    pub node: String,
    pub value: T,
}

/// Flatten a node-keyed map into node insertion order.
pub fn in_node_order<T: Copy>(
    graph: &Graph<String>,
    values: &HashMap<String, T>,
) -> Vec<NodeValue<T>> {
    graph
        .nodes()
        .filter_map(|node| {
            values.get(node).map(|&value| NodeValue {
                node: node.clone(),
                value,
            })
        })
        .collect()
}
