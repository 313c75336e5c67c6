//! E2E CLI tests for `wg`:
//! - Graph construction from presets and `--edge` arguments
//! - Shortest path output, including the unreachable failure contract
//! - JSON output for metrics and stats
//! - Config file handling (`output`, `[analysis] degree_mode`)
//!
//! Each test runs the binary as a subprocess.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

// ---------------------------------------------------------------------------
// Test Harness
// ---------------------------------------------------------------------------

/// Build a Command targeting the `wg` binary with a config file that does
/// not exist, so the user's real config never leaks in.
fn wg_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("wg"));
    cmd.env("WGRAPH_LOG", "error");
    cmd.env_remove("FORMAT");
    cmd.env("XDG_CONFIG_HOME", "/nonexistent-wgraph-test-config");
    cmd
}

/// Run `wg` with `args`, assert success and parse stdout as JSON.
fn wg_json(args: &[&str]) -> Value {
    let output = wg_cmd()
        .args(args)
        .arg("--json")
        .output()
        .expect("wg should not crash");
    assert!(
        output.status.success(),
        "wg {args:?} failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout should be JSON")
}

fn approx(value: &Value, expected: f64) -> bool {
    value
        .as_f64()
        .is_some_and(|v| (v - expected).abs() < 1e-9)
}

// ---------------------------------------------------------------------------
// Graph construction
// ---------------------------------------------------------------------------

#[test]
fn show_sample_preset_reports_size() {
    let json = wg_json(&["--preset", "sample", "show"]);
    assert_eq!(json["nodes"], 11);
    assert_eq!(json["edges"], 11);
    assert_eq!(json["edge_list"][0]["from"], "1");
    assert_eq!(json["edge_list"][0]["to"], "5");
}

#[test]
fn pretty_show_uses_arrow_listing() {
    wg_cmd()
        .args(["--format", "pretty", "-e", "a:b:2.5", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("a ---(2.5)---> b"));
}

#[test]
fn edges_extend_a_preset() {
    let json = wg_json(&["--preset", "sample", "-e", "10:1:1", "cycles", "10"]);
    assert_eq!(json["has_cycle"], true);
}

#[test]
fn malformed_edge_fails_to_parse() {
    wg_cmd()
        .args(["-e", "a:b:heavy", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid weight"));
}

// ---------------------------------------------------------------------------
// Queries
// ---------------------------------------------------------------------------

#[test]
fn neighbors_follow_insertion_order() {
    let json = wg_json(&["--preset", "sample", "neighbors", "1"]);
    assert_eq!(json["successors"], serde_json::json!(["5", "2"]));
    assert_eq!(json["predecessors"], serde_json::json!(["9"]));
    assert_eq!(json["adjacents"], serde_json::json!(["5", "2", "9"]));
}

#[test]
fn unknown_node_fails() {
    wg_cmd()
        .args(["--preset", "sample", "neighbors", "42"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("node not found in graph: 42"));
}

#[test]
fn reach_text_output_is_one_node_per_line() {
    wg_cmd()
        .args(["--preset", "sample", "--format", "text", "reach", "1"])
        .assert()
        .success()
        .stdout("5\n2\n3\n4\n8\n9\n7\n10\n");
}

// ---------------------------------------------------------------------------
// Shortest path
// ---------------------------------------------------------------------------

#[test]
fn mesh_path_matches_known_route() {
    let json = wg_json(&["--preset", "weighted-mesh", "path", "1", "6"]);
    assert_eq!(json["path"], serde_json::json!(["1", "2", "5", "6"]));
    assert!(approx(&json["distance"], 7.0));
    assert_eq!(json["hops"], 3);
}

#[test]
fn text_path_is_tab_separated() {
    wg_cmd()
        .args(["--preset", "sample", "--format", "text", "path", "1", "10"])
        .assert()
        .success()
        .stdout("1 2 4 7 10\t11\n");
}

#[test]
fn unreachable_path_exits_nonzero_with_code() {
    let output = wg_cmd()
        .args(["--preset", "sample", "--json", "path", "1", "12"])
        .output()
        .expect("wg should not crash");
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("\"error_code\": \"not_reachable\""), "{stderr}");
    assert!(stderr.contains("no path from 1 to 12"), "{stderr}");
}

// ---------------------------------------------------------------------------
// Metrics and stats
// ---------------------------------------------------------------------------

#[test]
fn mesh_metrics_json() {
    let json = wg_json(&["--preset", "weighted-mesh", "metrics"]);
    assert_eq!(json["mode"], "inout");
    assert!(approx(&json["mean_degree"], 20.0 / 6.0));
    assert!(approx(&json["mean_distance"], 1.4));
    assert!(approx(&json["mean_clustering"], 14.0 / 18.0));

    let dist = json["degree_distribution"]
        .as_array()
        .expect("distribution array");
    assert_eq!(dist.len(), 2);
    assert_eq!(dist[0]["degree"], 2);
    assert!(approx(&dist[0]["probability"], 0.33));
    assert!(approx(&dist[1]["probability"], 0.67));
}

#[test]
fn metrics_mode_flag_switches_degree_view() {
    let json = wg_json(&["--preset", "sample", "metrics", "--mode", "out"]);
    assert_eq!(json["mode"], "out");
    assert!(approx(&json["mean_degree"], 1.0));
}

#[test]
fn invalid_mode_is_rejected() {
    wg_cmd()
        .args(["--preset", "sample", "metrics", "--mode", "sideways"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("sideways"));
}

#[test]
fn stats_sample_counts_components() {
    let json = wg_json(&["--preset", "sample", "stats"]);
    assert_eq!(json["node_count"], 11);
    assert_eq!(json["weakly_connected_components"], 2);
    assert_eq!(json["strongly_connected_components"], 8);
    assert_eq!(json["cycle_components"], 1);
    assert_eq!(json["has_cycles"], true);
}

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

#[test]
fn config_sets_output_and_degree_mode() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "output = \"json\"\n\n[analysis]\ndegree_mode = \"in\"\n")
        .expect("write config");

    let output = wg_cmd()
        .args(["--config"])
        .arg(&path)
        .args(["--preset", "sample", "metrics"])
        .output()
        .expect("wg should not crash");
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).expect("config selects JSON");
    assert_eq!(json["mode"], "in");
}

#[test]
fn missing_explicit_config_fails() {
    wg_cmd()
        .args(["--config", "/definitely/not/here.toml", "show"])
        .assert()
        .failure();
}
