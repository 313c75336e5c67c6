//! Building the graph a command runs against.
//!
//! A graph comes from an optional preset followed by any number of
//! `--edge FROM:TO[:WEIGHT]` triples, applied in command-line order.

use std::str::FromStr;

use anyhow::{Context, bail};
use clap::ValueEnum;
use tracing::debug;
use wgraph_core::Graph;

/// One `--edge` argument.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeSpec {
    pub from: String,
    pub to: String,
    pub weight: f64,
}

impl FromStr for EdgeSpec {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        let parts: Vec<&str> = s.split(':').collect();
        let (from, to, weight) = match parts.as_slice() {
            [from, to] => (*from, *to, 1.0),
            [from, to, weight] => {
                let weight: f64 = weight
                    .trim()
                    .parse()
                    .with_context(|| format!("invalid weight in edge '{s}'"))?;
                (*from, *to, weight)
            }
            _ => bail!("edge must look like FROM:TO or FROM:TO:WEIGHT, got '{s}'"),
        };

        let (from, to) = (from.trim(), to.trim());
        if from.is_empty() || to.is_empty() {
            bail!("edge endpoints must not be empty in '{s}'");
        }

        Ok(Self {
            from: from.to_string(),
            to: to.to_string(),
            weight,
        })
    }
}

/// Built-in graphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Preset {
    /// Six densely linked nodes with symmetric weights.
    WeightedMesh,
    /// Eleven edges with one cycle and a detached pair.
    Sample,
}

impl Preset {
    fn edges(self) -> &'static [(u32, u32, f64)] {
        match self {
            Self::WeightedMesh => &[
                (1, 2, 2.0),
                (1, 3, 5.0),
                (2, 1, 2.0),
                (2, 3, 3.0),
                (2, 4, 1.0),
                (2, 5, 2.0),
                (3, 1, 5.0),
                (3, 2, 3.0),
                (3, 4, 1.0),
                (3, 5, 2.0),
                (4, 2, 1.0),
                (4, 3, 1.0),
                (4, 5, 2.0),
                (4, 6, 7.0),
                (5, 2, 2.0),
                (5, 3, 2.0),
                (5, 4, 2.0),
                (5, 6, 3.0),
                (6, 4, 7.0),
                (6, 5, 3.0),
            ],
            Self::Sample => &[
                (1, 5, 7.0),
                (1, 2, 2.0),
                (2, 3, 8.0),
                (2, 4, 1.0),
                (3, 8, 5.0),
                (3, 9, 5.0),
                (4, 7, 4.0),
                (7, 10, 4.0),
                (9, 1, 6.0),
                (9, 10, 2.0),
                (11, 12, 1.0),
            ],
        }
    }
}

/// Build the graph from `preset` (if any) and then `edges`.
pub fn build_graph(preset: Option<Preset>, edges: &[EdgeSpec]) -> Graph<String> {
    let mut graph = Graph::new();

    if let Some(preset) = preset {
        for &(from, to, weight) in preset.edges() {
            graph.add_edge(from.to_string(), to.to_string(), weight);
        }
    }

    for edge in edges {
        graph.add_edge(edge.from.clone(), edge.to.clone(), edge.weight);
    }

    let (nodes, edge_count) = graph.size();
    debug!(?preset, nodes, edges = edge_count, "graph built");
    graph
}
