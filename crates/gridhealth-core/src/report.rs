//! Healthiness report for one dashboard tab.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::HealthBand;
use crate::grid::RowCounts;

/// Current schema version for the serialized report.
pub const SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Healthiness {
    pub schema_version: u32,
    pub start_date: i64,
    pub end_date: i64,
    pub tests: Vec<TestInfo>,
    pub total_tests: usize,
    /// Reserved; jailed tests are not counted yet.
    pub total_jailed_tests: usize,
    pub average_flakiness: f64,
    pub flaky_buckets: Vec<FlakyBucket>,
    /// Infra failure counts keyed by `<raw row name>-<cause>`.
    pub infra_issues: BTreeMap<String, u32>,
    /// Number of parsed rows before merging by test name.
    pub total_configs: usize,
}

/// Merged view of one test, taken from its most flaky environment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TestInfo {
    pub name: String,
    pub env: String,
    /// Passed + genuinely failed runs.
    pub total_runs: u32,
    pub total_runs_with_infra: u32,
    pub passed_runs: u32,
    pub failed_runs: u32,
    pub failed_infra_runs: u32,
    pub flaky_runs: u32,
    /// Percentage, 0..=100.
    pub flakiness: f64,
    /// Ranked infra causes, e.g. `"node_lost 75.00% oom 25.00%"`.
    pub infra_info: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlakyBucket {
    pub threshold: f64,
    pub label: String,
    pub tests: usize,
}

/// Assembles the final report.
///
/// `bands` may come in any order; buckets are always laid out from the highest
/// threshold down, and each test is counted in the first bucket whose threshold
/// its flakiness strictly exceeds (or in none).
pub fn create_healthiness(
    start_date: i64,
    end_date: i64,
    results: &[RowCounts],
    tests: Vec<TestInfo>,
    infra_issues: BTreeMap<String, u32>,
    bands: &[HealthBand],
) -> Healthiness {
    let mut sorted_bands = bands.to_vec();
    sorted_bands.sort_by(|a, b| b.threshold.total_cmp(&a.threshold));
    let mut flaky_buckets: Vec<FlakyBucket> = sorted_bands
        .into_iter()
        .map(|band| FlakyBucket {
            threshold: band.threshold,
            label: band.label,
            tests: 0,
        })
        .collect();

    let mut flakiness_sum = 0.0;
    for test in &tests {
        flakiness_sum += test.flakiness;
        if let Some(bucket) = flaky_buckets
            .iter_mut()
            .find(|bucket| test.flakiness > bucket.threshold)
        {
            bucket.tests += 1;
        }
    }

    let total_tests = tests.len();
    let average_flakiness = if total_tests > 0 {
        flakiness_sum / total_tests as f64
    } else {
        0.0
    };

    Healthiness {
        schema_version: SCHEMA_VERSION,
        start_date,
        end_date,
        tests,
        total_tests,
        total_jailed_tests: 0,
        average_flakiness,
        flaky_buckets,
        infra_issues,
        total_configs: results.len(),
    }
}

#[cfg(test)]
impl Healthiness {
    pub(crate) fn bucket(&self, threshold: f64) -> Option<&FlakyBucket> {
        self.flaky_buckets.iter().find(|b| b.threshold == threshold)
    }
}
