//! Analyzer configuration.
//!
//! Every knob has a default, so an empty (or partial) YAML file is valid:
//!
//! ```yaml
//! default_flakiness: 50.0
//! min_runs: 0
//! health_bands:
//!   - { threshold: 20, label: red }
//!   - { threshold: 10, label: purple }
//!   - { threshold: 3, label: orange }
//!   - { threshold: 0, label: green }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{Result, SummaryError};

/// Flakiness is measured out of 100, i.e. 23 not 0.23.
pub const DEFAULT_FLAKINESS: f64 = 50.0;
pub const DEFAULT_MIN_RUNS: i64 = 0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalyzerConfig {
    /// Value each flaky cell contributes to a row's running mean.
    pub default_flakiness: f64,
    /// Rows with fewer counted runs (passed + failed) are left out of the report.
    pub min_runs: i64,
    pub health_bands: Vec<HealthBand>,
}

/// A severity tier: tests whose flakiness strictly exceeds `threshold` land here
/// unless a higher band already took them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HealthBand {
    pub threshold: f64,
    pub label: String,
}

impl HealthBand {
    pub fn new(threshold: f64, label: impl Into<String>) -> Self {
        Self {
            threshold,
            label: label.into(),
        }
    }
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            default_flakiness: DEFAULT_FLAKINESS,
            min_runs: DEFAULT_MIN_RUNS,
            health_bands: vec![
                HealthBand::new(20.0, "red"),
                HealthBand::new(10.0, "purple"),
                HealthBand::new(3.0, "orange"),
                HealthBand::new(0.0, "green"),
            ],
        }
    }
}

impl AnalyzerConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|source| SummaryError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&raw, Some(path))
    }

    pub fn from_yaml_str(raw: &str) -> Result<Self> {
        Self::parse(raw, None)
    }

    fn parse(raw: &str, path: Option<&Path>) -> Result<Self> {
        // An empty document deserializes as null, not as an empty mapping.
        let cfg: Self = if raw.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml::from_str(raw).map_err(|source| SummaryError::ConfigParse {
                path: path.map(Path::to_path_buf),
                source,
            })?
        };
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.default_flakiness.is_finite() || !(0.0..=100.0).contains(&self.default_flakiness)
        {
            return Err(SummaryError::InvalidConfig(format!(
                "default_flakiness must be within [0, 100], got {}",
                self.default_flakiness
            )));
        }
        for (i, band) in self.health_bands.iter().enumerate() {
            if !band.threshold.is_finite() {
                return Err(SummaryError::InvalidConfig(format!(
                    "health band '{}' has a non-finite threshold",
                    band.label
                )));
            }
            if self.health_bands[..i]
                .iter()
                .any(|other| other.threshold == band.threshold)
            {
                return Err(SummaryError::InvalidConfig(format!(
                    "duplicate health band threshold {}",
                    band.threshold
                )));
            }
        }
        Ok(())
    }
}
