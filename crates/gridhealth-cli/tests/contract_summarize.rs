#![allow(deprecated)]
use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::tempdir;

const GRID: &str = r#"{
  "columns": [{"started": 1000}, {"started": 2000}, {"started": 3000}, {"started": 9000}],
  "rows": [
    {"name": "//pkg:unit - [linux]", "results": [1, 2, 12, 2], "messages": ["", "", "expected 1 got 2", "node_lost"]},
    {"name": "//pkg:unit - [mac]", "results": [1, 4], "messages": ["", "", "", ""]},
    {"name": "standalone", "results": [13, 1, 1, 3], "messages": []}
  ]
}"#;

fn gridhealth() -> Command {
    Command::cargo_bin("gridhealth").unwrap()
}

#[test]
fn summarize_writes_json_report() {
    let dir = tempdir().unwrap();
    let grid = dir.path().join("grid.json");
    let out = dir.path().join("report.json");
    fs::write(&grid, GRID).unwrap();

    gridhealth()
        .args(["summarize", "--tab", "ci", "--start", "0", "--end", "5000"])
        .arg("--grid")
        .arg(&grid)
        .arg("--out")
        .arg(&out)
        .assert()
        .success()
        .stderr(predicate::str::contains("Summary: 2 tests from 3 configs"));

    let report: Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(report["schema_version"], 1);
    assert_eq!(report["total_configs"], 3);
    assert_eq!(report["total_tests"], 2);
    assert_eq!(report["start_date"], 0);
    assert_eq!(report["end_date"], 5000);

    let tests = report["tests"].as_array().unwrap();
    let unit = tests.iter().find(|t| t["name"] == "//pkg:unit").unwrap();
    assert_eq!(unit["env"], "linux");
    assert_eq!(unit["infra_info"], "");
    let standalone = tests.iter().find(|t| t["name"] == "standalone").unwrap();
    assert_eq!(standalone["env"], "ci");
    assert_eq!(standalone["flaky_runs"], 1);

    // node_lost sits at t=9000, outside the window.
    assert!(report["infra_issues"].as_object().unwrap().is_empty());
}

#[test]
fn summarize_text_format_to_stdout() {
    let dir = tempdir().unwrap();
    let grid = dir.path().join("grid.json");
    fs::write(&grid, GRID).unwrap();

    gridhealth()
        .args(["summarize", "--tab", "ci", "--start", "0", "--end", "10000", "--format", "text"])
        .arg("--grid")
        .arg(&grid)
        .assert()
        .success()
        .stdout(predicate::str::contains("//pkg:unit [linux]"))
        .stdout(predicate::str::contains("infra: node_lost 100.00%"))
        .stdout(predicate::str::contains("//pkg:unit - [linux]-node_lost: 1"));
}

#[test]
fn min_runs_flag_overrides_config() {
    let dir = tempdir().unwrap();
    let grid = dir.path().join("grid.json");
    let config = dir.path().join("analyzer.yaml");
    let out = dir.path().join("report.json");
    fs::write(&grid, GRID).unwrap();
    fs::write(&config, "min_runs: 100\n").unwrap();

    gridhealth()
        .args(["summarize", "--tab", "ci", "--start", "0", "--end", "10000", "--min-runs", "4"])
        .arg("--grid")
        .arg(&grid)
        .arg("--config")
        .arg(&config)
        .arg("--out")
        .arg(&out)
        .assert()
        .success();

    let report: Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    // Only the mac row has four counted runs; linux has three plus an infra failure.
    assert_eq!(report["total_tests"], 1);
    assert_eq!(report["tests"][0]["env"], "mac");
}

#[test]
fn invalid_config_exits_with_config_error() {
    let dir = tempdir().unwrap();
    let grid = dir.path().join("grid.json");
    let config = dir.path().join("analyzer.yaml");
    fs::write(&grid, GRID).unwrap();
    fs::write(&config, "default_flakiness: 500\n").unwrap();

    gridhealth()
        .args(["summarize", "--tab", "ci"])
        .arg("--grid")
        .arg(&grid)
        .arg("--config")
        .arg(&config)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("default_flakiness"));
}

#[test]
fn missing_grid_exits_with_config_error() {
    gridhealth()
        .args(["summarize", "--tab", "ci", "--grid", "/nonexistent/grid.json"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("failed to read grid"));
}
