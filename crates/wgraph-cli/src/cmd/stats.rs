//! `wg stats`: structural summary of the graph.

use std::io::Write;

use clap::Args;
use serde::Serialize;
use wgraph_core::{Graph, GraphStats};

use crate::output::{OutputMode, pretty_kv, pretty_section, render_mode};

/// Arguments for `wg stats`.
#[derive(Args, Debug, Default)]
pub struct StatsArgs {}

/// Report payload for `wg stats`.
#[derive(Debug, Serialize)]
pub struct StatsOutput {
    node_count: usize,
    edge_count: usize,
    density: f64,
    weakly_connected_components: usize,
    isolated_nodes: usize,
    max_in_degree: usize,
    max_out_degree: usize,
    strongly_connected_components: usize,
    cycle_components: usize,
    has_cycles: bool,
}

impl From<GraphStats> for StatsOutput {
    fn from(s: GraphStats) -> Self {
        let has_cycles = s.has_cycles();
        Self {
            node_count: s.node_count,
            edge_count: s.edge_count,
            density: s.density,
            weakly_connected_components: s.weakly_connected_component_count,
            isolated_nodes: s.isolated_node_count,
            max_in_degree: s.max_in_degree,
            max_out_degree: s.max_out_degree,
            strongly_connected_components: s.scc_count,
            cycle_components: s.cycle_component_count,
            has_cycles,
        }
    }
}

/// Execute `wg stats`.
pub fn run_stats(_args: &StatsArgs, output: OutputMode, graph: &Graph<String>) -> anyhow::Result<()> {
    let payload = StatsOutput::from(GraphStats::from_graph(graph));
    render_mode(output, &payload, render_stats_text, render_stats_pretty)
}

fn rows(p: &StatsOutput) -> [(&'static str, String); 10] {
    [
        ("nodes", p.node_count.to_string()),
        ("edges", p.edge_count.to_string()),
        ("density", format!("{:.4}", p.density)),
        ("wcc", p.weakly_connected_components.to_string()),
        ("isolated", p.isolated_nodes.to_string()),
        ("max in", p.max_in_degree.to_string()),
        ("max out", p.max_out_degree.to_string()),
        ("scc", p.strongly_connected_components.to_string()),
        ("cyclic scc", p.cycle_components.to_string()),
        ("has cycles", p.has_cycles.to_string()),
    ]
}

fn render_stats_text(payload: &StatsOutput, w: &mut dyn Write) -> std::io::Result<()> {
    for (key, value) in rows(payload) {
        writeln!(w, "{}\t{value}", key.replace(' ', "_"))?;
    }
    Ok(())
}

fn render_stats_pretty(payload: &StatsOutput, w: &mut dyn Write) -> std::io::Result<()> {
    pretty_section(w, "Graph stats")?;
    for (key, value) in rows(payload) {
        pretty_kv(w, key, value)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_rows_are_snake_case() {
        let g = Graph::from_edges([
            ("a".to_string(), "b".to_string(), 1.0),
            ("b".to_string(), "a".to_string(), 1.0),
        ]);
        let payload = StatsOutput::from(GraphStats::from_graph(&g));
        assert!(payload.has_cycles);

        let mut out = Vec::new();
        render_stats_text(&payload, &mut out).expect("render");
        let rendered = String::from_utf8(out).expect("utf8");
        assert!(rendered.contains("nodes\t2\n"));
        assert!(rendered.contains("density\t1.0000\n"));
        assert!(rendered.contains("cyclic_scc\t1\n"));
        assert!(rendered.contains("has_cycles\ttrue\n"));
    }
}
