//! E2E tests for `skillet analyze`.
//!
//! Covers: report file schema, `--json` stdout parity, schema failure on a
//! bad corpus, row limiting, and the optional pairing section.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

// ---------------------------------------------------------------------------
// Test harness helpers
// ---------------------------------------------------------------------------

fn skillet_cmd(dir: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("skillet"));
    cmd.current_dir(dir);
    cmd.env("SKILLET_LOG", "error");
    cmd
}

fn write_corpus(dir: &Path) -> PathBuf {
    let path = dir.join("recipes.csv");
    fs::write(
        &path,
        "id,title,ingredients\n\
         r1,Pancakes,\"['eggs', 'milk']\"\n\
         r2,Crepes,\"['milk', 'flour']\"\n\
         r3,Caramel,\"['sugar']\"\n",
    )
    .expect("write corpus");
    path
}

fn read_report(path: &Path) -> Value {
    let raw = fs::read_to_string(path).expect("report file");
    serde_json::from_str(&raw).expect("valid JSON report")
}

// ---------------------------------------------------------------------------
// Happy path
// ---------------------------------------------------------------------------

#[test]
fn analyze_writes_report_and_prints_summary() {
    let dir = TempDir::new().expect("temp dir");
    let corpus = write_corpus(dir.path());
    let report_path = dir.path().join("report.json");

    skillet_cmd(dir.path())
        .args([
            "analyze",
            corpus.to_str().expect("utf8 path"),
            "--output",
            report_path.to_str().expect("utf8 path"),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Graph statistics"))
        .stdout(predicate::str::contains("Ingredient statistics"));

    let report = read_report(&report_path);
    assert_eq!(report["graph_statistics"]["node_count"], 3);
    assert_eq!(report["graph_statistics"]["edge_count"], 1);
    assert_eq!(report["graph_statistics"]["connected_components_count"], 2);
    assert_eq!(
        report["graph_statistics"]["component_size_distribution"],
        serde_json::json!([2, 1])
    );
    assert_eq!(report["ingredient_statistics"]["total_ingredients"], 5);
    assert!(report.get("pairing_statistics").is_none());
}

#[test]
fn json_mode_emits_the_report_on_stdout() {
    let dir = TempDir::new().expect("temp dir");
    let corpus = write_corpus(dir.path());
    let report_path = dir.path().join("report.json");

    let output = skillet_cmd(dir.path())
        .args([
            "analyze",
            corpus.to_str().expect("utf8 path"),
            "--output",
            report_path.to_str().expect("utf8 path"),
            "--json",
        ])
        .output()
        .expect("analyze should not crash");
    assert!(
        output.status.success(),
        "analyze failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout: Value = serde_json::from_slice(&output.stdout).expect("valid JSON on stdout");
    assert!(stdout.get("graph_statistics").is_some());
    assert!(stdout.get("ingredient_statistics").is_some());

    // Stdout and the report file agree.
    let report = read_report(&report_path);
    assert_eq!(stdout["graph_statistics"], report["graph_statistics"]);
}

// ---------------------------------------------------------------------------
// Failure modes
// ---------------------------------------------------------------------------

#[test]
fn missing_ingredients_column_is_a_schema_error() {
    let dir = TempDir::new().expect("temp dir");
    let corpus = dir.path().join("bad.csv");
    fs::write(&corpus, "id,title\nr1,Pancakes\n").expect("write corpus");

    skillet_cmd(dir.path())
        .args(["analyze", corpus.to_str().expect("utf8 path")])
        .assert()
        .failure()
        .stderr(predicate::str::contains("E2001"));
}

#[test]
fn missing_input_file_fails() {
    let dir = TempDir::new().expect("temp dir");

    skillet_cmd(dir.path())
        .args(["analyze", "no-such-file.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("E2002"));
}

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

#[test]
fn limit_caps_the_corpus() {
    let dir = TempDir::new().expect("temp dir");
    let corpus = write_corpus(dir.path());
    let report_path = dir.path().join("report.json");

    skillet_cmd(dir.path())
        .args([
            "analyze",
            corpus.to_str().expect("utf8 path"),
            "--output",
            report_path.to_str().expect("utf8 path"),
            "--limit",
            "2",
        ])
        .assert()
        .success();

    let report = read_report(&report_path);
    assert_eq!(report["graph_statistics"]["node_count"], 2);
}

#[test]
fn pairing_table_adds_the_optional_section() {
    let dir = TempDir::new().expect("temp dir");
    let corpus = write_corpus(dir.path());
    let pairing = dir.path().join("pairs.csv");
    fs::write(&pairing, "eggs,milk,4\nmilk,flour,2\n").expect("write pairing");
    let report_path = dir.path().join("report.json");

    skillet_cmd(dir.path())
        .args([
            "analyze",
            corpus.to_str().expect("utf8 path"),
            "--output",
            report_path.to_str().expect("utf8 path"),
            "--pairing",
            pairing.to_str().expect("utf8 path"),
        ])
        .assert()
        .success();

    let report = read_report(&report_path);
    let pairing_stats = &report["pairing_statistics"];
    assert_eq!(pairing_stats["scored_recipe_count"], 3);
    // Pancakes: eggs+milk pair scores 4 over 2 ingredients.
    assert_eq!(pairing_stats["top_recipes"][0][0], "r1");
}

#[test]
fn config_file_overrides_sampling() {
    let dir = TempDir::new().expect("temp dir");
    let corpus = write_corpus(dir.path());
    let config = dir.path().join("skillet.toml");
    fs::write(&config, "[ingredients]\ntop_ingredients = 1\n").expect("write config");
    let report_path = dir.path().join("report.json");

    skillet_cmd(dir.path())
        .args([
            "analyze",
            corpus.to_str().expect("utf8 path"),
            "--output",
            report_path.to_str().expect("utf8 path"),
            "--config",
            config.to_str().expect("utf8 path"),
        ])
        .assert()
        .success();

    let report = read_report(&report_path);
    let top = report["ingredient_statistics"]["most_common_ingredients"]
        .as_array()
        .expect("array");
    assert_eq!(top.len(), 1);
    assert_eq!(top[0], serde_json::json!(["milk", 2]));
}
