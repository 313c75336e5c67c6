//! `wg neighbors`: successors, predecessors, adjacents and degrees of one node.

use std::io::Write;

use clap::Args;
use serde::Serialize;
use wgraph_core::Graph;

use crate::output::{OutputMode, join_or_dash, pretty_kv, pretty_section, render};

/// Arguments for `wg neighbors`.
#[derive(Args, Debug)]
pub struct NeighborsArgs {
    /// Node to inspect.
    pub node: String,
}

/// Report payload for `wg neighbors`.
#[derive(Debug, Serialize)]
pub struct NeighborsOutput {
    node: String,
    successors: Vec<String>,
    predecessors: Vec<String>,
    adjacents: Vec<String>,
    out_degree: usize,
    in_degree: usize,
    degree: usize,
}

impl NeighborsOutput {
    fn collect(graph: &Graph<String>, node: &String) -> wgraph_core::Result<Self> {
        Ok(Self {
            node: node.clone(),
            successors: graph.successors(node)?,
            predecessors: graph.predecessors(node)?,
            adjacents: graph.adjacents(node)?,
            out_degree: graph.out_degree(node)?,
            in_degree: graph.in_degree(node)?,
            degree: graph.degree(node)?,
        })
    }
}

/// Execute `wg neighbors`.
pub fn run_neighbors(
    args: &NeighborsArgs,
    output: OutputMode,
    graph: &Graph<String>,
) -> anyhow::Result<()> {
    let payload = NeighborsOutput::collect(graph, &args.node)?;
    render(output, &payload, render_neighbors_human)
}

fn render_neighbors_human(payload: &NeighborsOutput, w: &mut dyn Write) -> std::io::Result<()> {
    pretty_section(w, &format!("Node {}", payload.node))?;
    pretty_kv(w, "successors", join_or_dash(&payload.successors))?;
    pretty_kv(w, "predecessors", join_or_dash(&payload.predecessors))?;
    pretty_kv(w, "adjacents", join_or_dash(&payload.adjacents))?;
    pretty_kv(w, "out degree", payload.out_degree.to_string())?;
    pretty_kv(w, "in degree", payload.in_degree.to_string())?;
    pretty_kv(w, "degree", payload.degree.to_string())
}
