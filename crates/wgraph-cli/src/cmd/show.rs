//! `wg show`: edge listing and graph size.

use std::io::Write;

use clap::Args;
use serde::Serialize;
use wgraph_core::Graph;

use crate::output::{OutputMode, pretty_kv, pretty_section, render_mode};

/// Arguments for `wg show`.
#[derive(Args, Debug, Default)]
pub struct ShowArgs {}

#[derive(Debug, Serialize)]
struct EdgeRow {
    from: String,
    to: String,
    weight: f64,
}

/// Report payload for `wg show`.
#[derive(Debug, Serialize)]
pub struct ShowOutput {
    nodes: usize,
    edges: usize,
    edge_list: Vec<EdgeRow>,
}

impl ShowOutput {
    fn from_graph(graph: &Graph<String>) -> Self {
        let (nodes, edges) = graph.size();
        let edge_list = graph
            .edges_with_weights()
            .into_iter()
            .map(|(from, to, weight)| EdgeRow { from, to, weight })
            .collect();
        Self {
            nodes,
            edges,
            edge_list,
        }
    }
}

/// Execute `wg show`.
pub fn run_show(_args: &ShowArgs, output: OutputMode, graph: &Graph<String>) -> anyhow::Result<()> {
    let payload = ShowOutput::from_graph(graph);
    render_mode(output, &payload, render_show_text, render_show_pretty)
}

fn render_show_text(payload: &ShowOutput, w: &mut dyn Write) -> std::io::Result<()> {
    for edge in &payload.edge_list {
        writeln!(w, "{}\t{}\t{}", edge.from, edge.to, edge.weight)?;
    }
    Ok(())
}

fn render_show_pretty(payload: &ShowOutput, w: &mut dyn Write) -> std::io::Result<()> {
    pretty_section(w, "Edges")?;
    if payload.edge_list.is_empty() {
        writeln!(w, "(no edges)")?;
    }
    for edge in &payload.edge_list {
        writeln!(w, "{} ---({})---> {}", edge.from, edge.weight, edge.to)?;
    }
    writeln!(w)?;
    pretty_kv(w, "nodes", payload.nodes.to_string())?;
    pretty_kv(w, "edges", payload.edges.to_string())
}
