//! Naive flakiness: the share of counted runs that genuinely failed.

use std::collections::{BTreeMap, HashMap};

use crate::config::{AnalyzerConfig, HealthBand};
use crate::grid::{parse_grid, RowCounts, TimeWindow};
use crate::model::Grid;
use crate::naming::split_name_and_env;
use crate::natural::natural_cmp;
use crate::report::{create_healthiness, Healthiness, TestInfo};

/// Parses `grid` within `window` and summarizes it. `tab` is the fallback env
/// for rows whose names carry none.
pub fn calculate_healthiness(
    grid: &Grid,
    window: TimeWindow,
    tab: &str,
    config: &AnalyzerConfig,
) -> Healthiness {
    let results = parse_grid(grid, window, config.default_flakiness);
    analyze_flakiness_from_results(&results, window, tab, config)
}

pub fn analyze_flakiness_from_results(
    results: &[RowCounts],
    window: TimeWindow,
    tab: &str,
    config: &AnalyzerConfig,
) -> Healthiness {
    naive_flakiness(
        results,
        config.min_runs,
        window.start,
        window.end,
        tab,
        &config.health_bands,
    )
}

/// Merges rows by base test name, keeping the most flaky environment of each.
///
/// Rows below `min_runs` still count toward infra issues and `total_configs`.
pub fn naive_flakiness(
    results: &[RowCounts],
    min_runs: i64,
    start_date: i64,
    end_date: i64,
    tab: &str,
    bands: &[HealthBand],
) -> Healthiness {
    let mut tests: Vec<TestInfo> = Vec::new();
    let mut by_name: HashMap<String, usize> = HashMap::new();
    let mut infra_issues: BTreeMap<String, u32> = BTreeMap::new();

    for row in results {
        let (name, env) = split_name_and_env(&row.name, tab);
        for (cause, count) in &row.infra_failures {
            *infra_issues
                .entry(format!("{}-{}", row.name, cause))
                .or_insert(0) += count;
        }

        let Some(mut info) = calculate_naive_flakiness(row, min_runs) else {
            tracing::debug!(test = %row.name, min_runs, "too few runs, excluding from report");
            continue;
        };
        info.name = name;
        info.env = env;

        match by_name.get(&info.name) {
            Some(&idx) => {
                if tests[idx].flakiness < info.flakiness {
                    tests[idx] = info;
                }
            }
            None => {
                by_name.insert(info.name.clone(), tests.len());
                tests.push(info);
            }
        }
    }

    create_healthiness(start_date, end_date, results, tests, infra_issues, bands)
}

/// Per-row stats, or `None` when the row has fewer than `min_runs` counted runs.
/// `name` and `env` are left empty for the caller to fill.
pub fn calculate_naive_flakiness(row: &RowCounts, min_runs: i64) -> Option<TestInfo> {
    let total_runs = row.passed + row.failed;
    if i64::from(total_runs) < min_runs {
        return None;
    }
    let flakiness = if total_runs == 0 {
        0.0
    } else {
        100.0 * f64::from(row.failed) / f64::from(total_runs)
    };

    Some(TestInfo {
        name: String::new(),
        env: String::new(),
        total_runs,
        total_runs_with_infra: total_runs + row.failed_infra_count,
        passed_runs: row.passed,
        failed_runs: row.failed,
        failed_infra_runs: row.failed_infra_count,
        flaky_runs: row.flaky_count,
        flakiness,
        infra_info: calculate_infra_info(&row.infra_failures, row.failed_infra_count),
    })
}

/// Renders infra causes as `"<cause> <pct>%"` pairs, most frequent first;
/// equal counts are ordered by cause in natural order.
pub fn calculate_infra_info(issues: &BTreeMap<String, u32>, failed_count: u32) -> String {
    if issues.is_empty() || failed_count == 0 {
        return String::new();
    }

    let mut ranked: Vec<(&str, u32)> = issues
        .iter()
        .map(|(cause, &count)| (cause.as_str(), count))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| natural_cmp(a.0, b.0)));

    ranked
        .iter()
        .map(|(cause, count)| {
            format!(
                "{} {:.2}%",
                cause,
                100.0 * f64::from(*count) / f64::from(failed_count)
            )
        })
        .collect::<Vec<_>>()
        .join(" ")
}
