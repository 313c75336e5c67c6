#![forbid(unsafe_code)]

mod cmd;
mod config;
mod input;
mod output;

use std::env;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use output::{OutputMode, resolve_output_mode};
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::input::{EdgeSpec, Preset};

#[derive(Parser, Debug)]
#[command(
    name = "wg",
    author,
    version,
    about = "wg: analyze small weighted directed graphs",
    long_about = None
)]
struct Cli {
    /// Enable debug logging (same as setting DEBUG); WGRAPH_LOG still wins.
    #[arg(short, long)]
    verbose: bool,

    /// Output format (pretty, text, json). Overrides FORMAT and config.
    #[arg(long, value_enum, global = true)]
    format: Option<OutputMode>,

    /// Shorthand for `--format json`.
    #[arg(long, global = true, hide = true)]
    json: bool,

    /// Read configuration from this file instead of the default location.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Start from a built-in graph.
    #[arg(long, value_enum, global = true)]
    preset: Option<Preset>,

    /// Add an edge as FROM:TO or FROM:TO:WEIGHT (repeatable).
    #[arg(short, long = "edge", global = true, value_name = "EDGE")]
    edges: Vec<EdgeSpec>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(
        about = "List every edge and the graph size",
        after_help = "EXAMPLES:\n    wg --preset sample show\n    wg -e a:b:2 -e b:c show --json"
    )]
    Show(cmd::show::ShowArgs),

    #[command(
        about = "Show successors, predecessors and degrees of a node",
        after_help = "EXAMPLES:\n    wg --preset sample neighbors 1"
    )]
    Neighbors(cmd::neighbors::NeighborsArgs),

    #[command(
        about = "List nodes reachable from a node",
        after_help = "EXAMPLES:\n    wg --preset sample reach 1\n    wg --preset sample reach 1 --order dist"
    )]
    Reach(cmd::reach::ReachArgs),

    #[command(
        about = "Find the weighted shortest path between two nodes",
        after_help = "EXAMPLES:\n    wg --preset weighted-mesh path 1 6"
    )]
    Path(cmd::path::PathArgs),

    #[command(
        about = "Detect cycles in the graph or through one node",
        after_help = "EXAMPLES:\n    wg --preset sample cycles\n    wg --preset sample cycles 9"
    )]
    Cycles(cmd::cycles::CyclesArgs),

    #[command(
        about = "Compute degree, distance and clustering metrics",
        after_help = "EXAMPLES:\n    wg --preset weighted-mesh metrics\n    wg --preset sample metrics --mode out"
    )]
    Metrics(cmd::metrics::MetricsArgs),

    #[command(
        about = "Summarize components, density and degree extremes",
        after_help = "EXAMPLES:\n    wg --preset sample stats --format text"
    )]
    Stats(cmd::stats::StatsArgs),
}

/// Filter used when `WGRAPH_LOG` is unset.
const fn default_filter(debug: bool) -> &'static str {
    if debug { "wg=debug,info" } else { "wg=info,warn" }
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env("WGRAPH_LOG").unwrap_or_else(|_| {
        EnvFilter::new(default_filter(verbose || env::var("DEBUG").is_ok()))
    });

    let format = env::var("WGRAPH_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(filter);

    match format.as_str() {
        "json" => {
            registry
                .with(fmt::layer().json().with_ansi(false).with_writer(std::io::stderr))
                .init();
        }
        _ => {
            registry
                .with(fmt::layer().compact().with_writer(std::io::stderr))
                .init();
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.verbose {
        debug!("verbose mode enabled");
    }

    let user_config = config::load_user_config(cli.config.as_deref())?;
    let output = resolve_output_mode(cli.format, cli.json, user_config.output.as_deref());
    let graph = input::build_graph(cli.preset, &cli.edges);

    match cli.command {
        Commands::Show(ref args) => cmd::show::run_show(args, output, &graph),
        Commands::Neighbors(ref args) => cmd::neighbors::run_neighbors(args, output, &graph),
        Commands::Reach(ref args) => cmd::reach::run_reach(args, output, &graph),
        Commands::Path(ref args) => cmd::path::run_path(args, output, &graph),
        Commands::Cycles(ref args) => cmd::cycles::run_cycles(args, output, &graph),
        Commands::Metrics(ref args) => {
            let default_mode = user_config.analysis.degree_mode()?;
            cmd::metrics::run_metrics(args, output, &graph, default_mode)
        }
        Commands::Stats(ref args) => cmd::stats::run_stats(args, output, &graph),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_accumulate_in_order() {
        let cli = Cli::parse_from(["wg", "-e", "a:b:2", "show", "--edge", "b:c"]);
        assert_eq!(cli.edges.len(), 2);
        assert_eq!(cli.edges[0].from, "a");
        assert!((cli.edges[1].weight - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn json_flag_after_subcommand() {
        let cli = Cli::parse_from(["wg", "--preset", "sample", "stats", "--json"]);
        assert!(cli.json);
        assert_eq!(cli.preset, Some(Preset::Sample));
        assert!(matches!(cli.command, Commands::Stats(_)));
    }

    #[test]
    fn format_flag_parses() {
        let cli = Cli::parse_from(["wg", "--format", "text", "cycles", "9"]);
        assert_eq!(cli.format, Some(OutputMode::Text));
        assert!(matches!(
            cli.command,
            Commands::Cycles(cmd::cycles::CyclesArgs { node: Some(ref n) }) if n == "9"
        ));
    }

    #[test]
    fn malformed_edge_is_rejected() {
        assert!(Cli::try_parse_from(["wg", "-e", "a", "show"]).is_err());
    }

    #[test]
    fn verbose_selects_debug_filter() {
        let cli = Cli::parse_from(["wg", "-v", "show"]);
        assert!(cli.verbose);
        assert_eq!(default_filter(cli.verbose), "wg=debug,info");
        assert_eq!(default_filter(false), "wg=info,warn");
    }

    #[test]
    fn reach_order_defaults_to_bfs() {
        let cli = Cli::parse_from(["wg", "reach", "1"]);
        let Commands::Reach(args) = cli.command else {
            panic!("expected reach");
        };
        assert_eq!(args.order, cmd::reach::ReachOrder::Bfs);
    }
}
