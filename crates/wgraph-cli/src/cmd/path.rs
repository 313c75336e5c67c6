//! `wg path`: weighted shortest path between two nodes.

use std::io::Write;

use clap::Args;
use serde::Serialize;
use wgraph_core::shortest_path::dijkstra;
use wgraph_core::{Graph, GraphError, ShortestPath};

use crate::output::{CliError, OutputMode, pretty_kv, pretty_section, render_error, render_mode};

/// Arguments for `wg path`.
#[derive(Args, Debug)]
pub struct PathArgs {
    /// Source node.
    pub from: String,
    /// Target node.
    pub to: String,
}

/// Report payload for `wg path`.
#[derive(Debug, Serialize)]
pub struct PathOutput {
    from: String,
    to: String,
    path: Vec<String>,
    distance: f64,
    hops: usize,
}

impl PathOutput {
    fn new(args: &PathArgs, sp: ShortestPath<String>) -> Self {
        let hops = sp.hops();
        Self {
            from: args.from.clone(),
            to: args.to.clone(),
            path: sp.path,
            distance: sp.distance,
            hops,
        }
    }
}

/// Execute `wg path`.
///
/// An unreachable target is reported through the structured error channel
/// and still fails the command.
pub fn run_path(args: &PathArgs, output: OutputMode, graph: &Graph<String>) -> anyhow::Result<()> {
    match dijkstra(graph, &args.from, &args.to) {
        Ok(sp) => {
            let payload = PathOutput::new(args, sp);
            render_mode(output, &payload, render_path_text, render_path_pretty)
        }
        Err(err @ GraphError::NotReachable { .. }) => {
            render_error(
                output,
                &CliError::with_details(
                    err.to_string(),
                    format!("list what {} can reach with `wg reach {}`", args.from, args.from),
                    "not_reachable",
                ),
            )?;
            Err(err.into())
        }
        Err(err) => Err(err.into()),
    }
}

fn render_path_text(payload: &PathOutput, w: &mut dyn Write) -> std::io::Result<()> {
    writeln!(w, "{}\t{}", payload.path.join(" "), payload.distance)
}

fn render_path_pretty(payload: &PathOutput, w: &mut dyn Write) -> std::io::Result<()> {
    pretty_section(w, &format!("Shortest path {} -> {}", payload.from, payload.to))?;
    pretty_kv(w, "path", payload.path.join(" -> "))?;
    pretty_kv(w, "distance", payload.distance.to_string())?;
    pretty_kv(w, "hops", payload.hops.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(from: &str, to: &str) -> PathArgs {
        PathArgs {
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    fn triangle() -> Graph<String> {
        Graph::from_edges([
            ("a".to_string(), "b".to_string(), 1.0),
            ("b".to_string(), "c".to_string(), 1.5),
            ("a".to_string(), "c".to_string(), 4.0),
        ])
    }

    #[test]
    fn payload_carries_path_and_hops() {
        let a = args("a", "c");
        let sp = dijkstra(&triangle(), &a.from, &a.to).expect("reachable");
        let payload = PathOutput::new(&a, sp);
        assert_eq!(payload.path, vec!["a", "b", "c"]);
        assert_eq!(payload.hops, 2);

        let mut out = Vec::new();
        render_path_text(&payload, &mut out).expect("render");
        assert_eq!(String::from_utf8(out).expect("utf8"), "a b c\t2.5\n");
    }

    #[test]
    fn pretty_shows_arrowed_path() {
        let a = args("a", "b");
        let sp = dijkstra(&triangle(), &a.from, &a.to).expect("reachable");
        let mut out = Vec::new();
        render_path_pretty(&PathOutput::new(&a, sp), &mut out).expect("render");

        let rendered = String::from_utf8(out).expect("utf8");
        assert!(rendered.contains("Shortest path a -> b"));
        assert!(rendered.contains("path:          a -> b"));
    }

    #[test]
    fn unreachable_target_fails() {
        let err = run_path(&args("c", "a"), OutputMode::Json, &triangle()).expect_err("c is a sink");
        assert!(matches!(
            err.downcast_ref::<GraphError>(),
            Some(GraphError::NotReachable { .. })
        ));
    }
}
