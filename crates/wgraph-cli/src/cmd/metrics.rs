//! `wg metrics`: degree distribution, mean distance and clustering.

use std::io::Write;

use anyhow::Context as _;
use clap::Args;
use serde::Serialize;
use wgraph_core::metrics::clustering::{
    all_clustering_coefs, mean_clustering_coef, mean_clustering_per_degree,
};
use wgraph_core::metrics::distance::mean_distances;
use wgraph_core::metrics::distribution::{mean_degree, prob_degree};
use wgraph_core::{DegreeMode, Graph};

use super::{NodeValue, in_node_order};
use crate::output::{OutputMode, pretty_kv, pretty_section, render_mode};

/// Arguments for `wg metrics`.
#[derive(Args, Debug, Default)]
pub struct MetricsArgs {
    /// Degree mode: `out`, `in` or `inout`. Defaults to the config value.
    #[arg(long)]
    pub mode: Option<String>,
}

#[derive(Debug, Serialize, PartialEq)]
struct DegreeShare {
    degree: usize,
    probability: f64,
}

#[derive(Debug, Serialize, PartialEq)]
struct DegreeClustering {
    degree: usize,
    mean_clustering: f64,
}

/// Report payload for `wg metrics`.
#[derive(Debug, Serialize)]
pub struct MetricsOutput {
    mode: String,
    mean_degree: f64,
    degree_distribution: Vec<DegreeShare>,
    mean_distance: f64,
    mean_clustering: f64,
    clustering: Vec<NodeValue<f64>>,
    clustering_per_degree: Vec<DegreeClustering>,
}

impl MetricsOutput {
    fn compute(graph: &Graph<String>, mode: DegreeMode) -> Self {
        Self {
            mode: mode.to_string(),
            mean_degree: mean_degree(graph, mode),
            degree_distribution: prob_degree(graph, mode)
                .into_iter()
                .map(|(degree, probability)| DegreeShare {
                    degree,
                    probability,
                })
                .collect(),
            mean_distance: mean_distances(graph),
            mean_clustering: mean_clustering_coef(graph),
            clustering: in_node_order(graph, &all_clustering_coefs(graph)),
            clustering_per_degree: mean_clustering_per_degree(graph, mode)
                .into_iter()
                .map(|(degree, mean_clustering)| DegreeClustering {
                    degree,
                    mean_clustering,
                })
                .collect(),
        }
    }
}

/// Execute `wg metrics`.
///
/// `default_mode` comes from `[analysis] degree_mode` in the user config.
pub fn run_metrics(
    args: &MetricsArgs,
    output: OutputMode,
    graph: &Graph<String>,
    default_mode: DegreeMode,
) -> anyhow::Result<()> {
    let mode = match args.mode.as_deref() {
        Some(raw) => raw
            .parse::<DegreeMode>()
            .with_context(|| format!("bad --mode {raw:?}"))?,
        None => default_mode,
    };
    let payload = MetricsOutput::compute(graph, mode);
    render_mode(output, &payload, render_metrics_text, render_metrics_pretty)
}

fn render_metrics_text(payload: &MetricsOutput, w: &mut dyn Write) -> std::io::Result<()> {
    writeln!(w, "mean_degree\t{}", payload.mean_degree)?;
    for share in &payload.degree_distribution {
        writeln!(w, "prob_degree\t{}\t{}", share.degree, share.probability)?;
    }
    writeln!(w, "mean_distance\t{}", payload.mean_distance)?;
    writeln!(w, "mean_clustering\t{}", payload.mean_clustering)?;
    for nv in &payload.clustering {
        writeln!(w, "clustering\t{}\t{}", nv.node, nv.value)?;
    }
    for dc in &payload.clustering_per_degree {
        writeln!(w, "clustering_per_degree\t{}\t{}", dc.degree, dc.mean_clustering)?;
    }
    Ok(())
}

fn render_metrics_pretty(payload: &MetricsOutput, w: &mut dyn Write) -> std::io::Result<()> {
    pretty_section(w, &format!("Metrics (degree mode: {})", payload.mode))?;
    pretty_kv(w, "mean degree", format!("{:.4}", payload.mean_degree))?;
    pretty_kv(w, "mean distance", format!("{:.4}", payload.mean_distance))?;
    pretty_kv(w, "clustering", format!("{:.4}", payload.mean_clustering))?;
    writeln!(w)?;

    pretty_section(w, "Degree distribution")?;
    for share in &payload.degree_distribution {
        pretty_kv(w, &format!("degree {}", share.degree), format!("{:.2}", share.probability))?;
    }
    writeln!(w)?;

    pretty_section(w, "Clustering by node")?;
    for nv in &payload.clustering {
        pretty_kv(w, &nv.node, format!("{:.4}", nv.value))?;
    }
    writeln!(w)?;

    pretty_section(w, "Clustering by degree")?;
    for dc in &payload.clustering_per_degree {
        pretty_kv(w, &format!("degree {}", dc.degree), format!("{:.4}", dc.mean_clustering))?;
    }
    Ok(())
}
