//! `wg reach`: nodes reachable from a source.

use std::io::Write;

use clap::{Args, ValueEnum};
use serde::Serialize;
use wgraph_core::Graph;
use wgraph_core::traversal::{reachable_bfs, reachable_dfs, reachable_with_dist};

use crate::output::{OutputMode, join_or_dash, pretty_section, render_mode};

/// Visit order reported by `wg reach`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReachOrder {
    /// Breadth-first order.
    #[default]
    Bfs,
    /// Depth-first order.
    Dfs,
    /// Breadth-first order with hop counts.
    Dist,
}

/// Arguments for `wg reach`.
#[derive(Args, Debug)]
pub struct ReachArgs {
    /// Source node.
    pub node: String,

    /// Traversal order.
    #[arg(long, value_enum, default_value_t = ReachOrder::Bfs)]
    pub order: ReachOrder,
}

#[derive(Debug, Serialize)]
struct Reached {
    node: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    hops: Option<usize>,
}

/// Report payload for `wg reach`.
#[derive(Debug, Serialize)]
pub struct ReachOutput {
    source: String,
    order: ReachOrder,
    reached: Vec<Reached>,
}

impl ReachOutput {
    fn collect(graph: &Graph<String>, source: &String, order: ReachOrder) -> wgraph_core::Result<Self> {
        let plain = |nodes: Vec<String>| -> Vec<Reached> {
            nodes
                .into_iter()
                .map(|node| Reached { node, hops: None })
                .collect()
        };
        let reached = match order {
            ReachOrder::Bfs => plain(reachable_bfs(graph, source)?),
            ReachOrder::Dfs => plain(reachable_dfs(graph, source)?),
            ReachOrder::Dist => reachable_with_dist(graph, source)?
                .into_iter()
                .map(|(node, hops)| Reached {
                    node,
                    hops: Some(hops),
                })
                .collect(),
        };
        Ok(Self {
            source: source.clone(),
            order,
            reached,
        })
    }
}

/// Execute `wg reach`.
pub fn run_reach(args: &ReachArgs, output: OutputMode, graph: &Graph<String>) -> anyhow::Result<()> {
    let payload = ReachOutput::collect(graph, &args.node, args.order)?;
    render_mode(output, &payload, render_reach_text, render_reach_pretty)
}

fn render_reach_text(payload: &ReachOutput, w: &mut dyn Write) -> std::io::Result<()> {
    for r in &payload.reached {
        match r.hops {
            Some(hops) => writeln!(w, "{}\t{hops}", r.node)?,
            None => writeln!(w, "{}", r.node)?,
        }
    }
    Ok(())
}

fn render_reach_pretty(payload: &ReachOutput, w: &mut dyn Write) -> std::io::Result<()> {
    pretty_section(w, &format!("Reachable from {}", payload.source))?;
    let labels: Vec<String> = payload
        .reached
        .iter()
        .map(|r| match r.hops {
            Some(hops) => format!("{} ({hops})", r.node),
            None => r.node.clone(),
        })
        .collect();
    writeln!(w, "{}", join_or_dash(&labels))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain() -> Graph<String> {
        Graph::from_edges([
            ("a".to_string(), "b".to_string(), 1.0),
            ("a".to_string(), "c".to_string(), 1.0),
            ("b".to_string(), "d".to_string(), 1.0),
        ])
    }

    fn names(payload: &ReachOutput) -> Vec<&str> {
        payload.reached.iter().map(|r| r.node.as_str()).collect()
    }

    #[test]
    fn bfs_and_dfs_orders_differ() {
        let g = chain();
        let src = "a".to_string();
        let bfs = ReachOutput::collect(&g, &src, ReachOrder::Bfs).expect("bfs");
        let dfs = ReachOutput::collect(&g, &src, ReachOrder::Dfs).expect("dfs");
        assert_eq!(names(&bfs), vec!["b", "c", "d"]);
        assert_eq!(names(&dfs), vec!["b", "d", "c"]);
    }

    #[test]
    fn dist_order_carries_hops() {
        let payload =
            ReachOutput::collect(&chain(), &"a".to_string(), ReachOrder::Dist).expect("dist");
        let hops: Vec<Option<usize>> = payload.reached.iter().map(|r| r.hops).collect();
        assert_eq!(hops, vec![Some(1), Some(1), Some(2)]);

        let mut out = Vec::new();
        render_reach_text(&payload, &mut out).expect("render");
        assert_eq!(String::from_utf8(out).expect("utf8"), "b\t1\nc\t1\nd\t2\n");
    }

    #[test]
    fn sink_reaches_nothing() {
        let payload =
            ReachOutput::collect(&chain(), &"d".to_string(), ReachOrder::Bfs).expect("sink");
        let mut out = Vec::new();
        render_reach_pretty(&payload, &mut out).expect("render");
        assert!(String::from_utf8(out).expect("utf8").ends_with("-\n"));
    }
}
