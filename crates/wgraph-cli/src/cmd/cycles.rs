//! `wg cycles`: cycle detection for the graph or a single node.

use std::io::Write;

use clap::Args;
use serde::Serialize;
use wgraph_core::Graph;
use wgraph_core::cycles::{find_cycle_components, has_cycle, node_has_cycle};

use crate::output::{OutputMode, join_or_dash, pretty_kv, pretty_section, render_mode};

/// Arguments for `wg cycles`.
#[derive(Args, Debug, Default)]
pub struct CyclesArgs {
    /// Only report whether this node lies on a cycle.
    pub node: Option<String>,
}

/// Report payload for `wg cycles`.
#[derive(Debug, Serialize)]
pub struct CyclesOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    node: Option<String>,
    has_cycle: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    components: Vec<Vec<String>>,
}

impl CyclesOutput {
    fn collect(graph: &Graph<String>, node: Option<&String>) -> wgraph_core::Result<Self> {
        Ok(match node {
            Some(node) => Self {
                node: Some(node.clone()),
                has_cycle: node_has_cycle(graph, node)?,
                components: Vec::new(),
            },
            None => Self {
                node: None,
                has_cycle: has_cycle(graph),
                components: find_cycle_components(graph),
            },
        })
    }
}

/// Execute `wg cycles`.
pub fn run_cycles(args: &CyclesArgs, output: OutputMode, graph: &Graph<String>) -> anyhow::Result<()> {
    let payload = CyclesOutput::collect(graph, args.node.as_ref())?;
    render_mode(output, &payload, render_cycles_text, render_cycles_pretty)
}

fn render_cycles_text(payload: &CyclesOutput, w: &mut dyn Write) -> std::io::Result<()> {
    writeln!(w, "{}", payload.has_cycle)?;
    for component in &payload.components {
        writeln!(w, "{}", component.join(" "))?;
    }
    Ok(())
}

fn render_cycles_pretty(payload: &CyclesOutput, w: &mut dyn Write) -> std::io::Result<()> {
    match &payload.node {
        Some(node) => {
            pretty_section(w, &format!("Cycles through {node}"))?;
            pretty_kv(w, "on a cycle", yes_no(payload.has_cycle))
        }
        None => {
            pretty_section(w, "Cycles")?;
            pretty_kv(w, "has cycle", yes_no(payload.has_cycle))?;
            for (i, component) in payload.components.iter().enumerate() {
                pretty_kv(w, &format!("component {}", i + 1), join_or_dash(component))?;
            }
            Ok(())
        }
    }
}

const fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}
