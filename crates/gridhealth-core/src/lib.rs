//! Flakiness and infra-failure health summaries for CI test grids.
//!
//! Pipeline: [`grid::parse_grid`] counts outcomes per row inside a time window,
//! [`flakiness::naive_flakiness`] merges rows per test, and
//! [`report::create_healthiness`] buckets the merged tests by severity.

pub mod classify;
pub mod config;
pub mod errors;
pub mod flakiness;
pub mod grid;
pub mod model;
pub mod naming;
pub mod natural;
pub mod report;
pub mod rle;

use std::path::Path;

pub use config::{AnalyzerConfig, HealthBand};
pub use errors::{Result, SummaryError};
pub use flakiness::calculate_healthiness;
pub use grid::{RowCounts, TimeWindow};
pub use model::{Column, Grid, Row, RowResult};
pub use report::{FlakyBucket, Healthiness, TestInfo};

/// Loads a grid snapshot exported as JSON.
pub fn load_grid(path: &Path) -> Result<Grid> {
    let raw = std::fs::read_to_string(path).map_err(|source| SummaryError::GridIo {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| SummaryError::GridParse {
        path: path.to_path_buf(),
        source,
    })
}
