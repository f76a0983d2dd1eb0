//! Grid parsing: turns a tab's rows into per-row outcome counts inside a time window.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::classify::categorize_failure;
use crate::model::{Column, Grid, RowResult};

/// Inclusive `[start, end]` window, in the same unit as `Column::started`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub start: i64,
    pub end: i64,
}

impl TimeWindow {
    pub fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, column: &Column) -> bool {
        is_within_time_frame(column, self.start, self.end)
    }
}

pub fn is_within_time_frame(column: &Column, start_time: i64, end_time: i64) -> bool {
    column.started >= start_time as f64 && column.started <= end_time as f64
}

/// Outcome counts for one grid row inside the window.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RowCounts {
    pub name: String,
    pub passed: u32,
    /// Genuine failures only; infra failures are counted separately.
    pub failed: u32,
    pub flaky_count: u32,
    pub average_flakiness: f64,
    pub failed_infra_count: u32,
    pub infra_failures: BTreeMap<String, u32>,
}

impl RowCounts {
    pub fn has_activity(&self) -> bool {
        self.passed > 0 || self.failed > 0 || self.flaky_count > 0
    }

    /// Folds one more flaky observation into the running mean.
    pub fn record_flaky(&mut self, flakiness: f64) {
        self.flaky_count += 1;
        self.average_flakiness += (flakiness - self.average_flakiness) / self.flaky_count as f64;
    }
}

/// Parses every row of `grid`, keeping only rows with activity inside `window`.
///
/// Each flaky cell contributes `default_flakiness` to the row's average.
pub fn parse_grid(grid: &Grid, window: TimeWindow, default_flakiness: f64) -> Vec<RowCounts> {
    let mut results = Vec::new();

    for row in &grid.rows {
        let mut counts = RowCounts::default();

        for (i, (result, column)) in row.decoded_results().zip(&grid.columns).enumerate() {
            if !window.contains(column) {
                continue;
            }
            match result.coalesce(true) {
                RowResult::Fail => categorize_failure(&mut counts, row.message(i)),
                RowResult::Pass => counts.passed += 1,
                RowResult::Flaky => counts.record_flaky(default_flakiness),
                _ => {}
            }
        }

        if counts.has_activity() {
            counts.name = row.name.clone();
            results.push(counts);
        } else {
            tracing::debug!(test = %row.name, "no results in window, dropping row");
        }
    }

    tracing::debug!(
        rows = grid.rows.len(),
        kept = results.len(),
        start = window.start,
        end = window.end,
        "parsed grid"
    );
    results
}
