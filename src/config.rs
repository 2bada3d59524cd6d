//! Threshold Configuration
//!
//! Deviation thresholds that drive resource classification, with
//! optional loading from a YAML file:
//!
//! ```yaml
//! bad_usage: 0.25
//! tolerated_usage: 0.1
//! ```

use std::fs;

use log::{info, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default fraction beyond which a deviation classifies as an error.
const DEFAULT_BAD_USAGE: f64 = 0.25;

/// Default fraction of deviation tolerated without any warning.
const DEFAULT_TOLERATED_USAGE: f64 = 0.1;

fn default_bad_usage() -> f64 {
    DEFAULT_BAD_USAGE
}

fn default_tolerated_usage() -> f64 {
    DEFAULT_TOLERATED_USAGE
}

/// A threshold fraction outside the valid [0, 1] range.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ThresholdError {
    #[error("bad_usage must lie within [0, 1], got {0}")]
    BadUsageOutOfRange(f64),
    #[error("tolerated_usage must lie within [0, 1], got {0}")]
    ToleratedUsageOutOfRange(f64),
}

/// Deviation thresholds for resource classification.
///
/// Both fields are fractions of the requested amount: a deviation of
/// `usage / requested` outside `1 ± tolerated_usage` yields a warning,
/// outside `1 ± bad_usage` an error.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    /// Deviation fraction beyond which usage is an error
    #[serde(default = "default_bad_usage")]
    pub bad_usage: f64,

    /// Deviation fraction tolerated without a warning
    #[serde(default = "default_tolerated_usage")]
    pub tolerated_usage: f64,
}

impl Thresholds {
    /// Creates validated thresholds.
    pub fn new(bad_usage: f64, tolerated_usage: f64) -> Result<Self, ThresholdError> {
        let thresholds = Self {
            bad_usage,
            tolerated_usage,
        };
        thresholds.validate()?;
        Ok(thresholds)
    }

    /// Checks that both fractions lie within [0, 1].
    ///
    /// `tolerated_usage > bad_usage` collapses the warning tier into
    /// the error tier; that configuration is accepted but logged.
    pub fn validate(&self) -> Result<(), ThresholdError> {
        if !(0.0..=1.0).contains(&self.bad_usage) {
            return Err(ThresholdError::BadUsageOutOfRange(self.bad_usage));
        }
        if !(0.0..=1.0).contains(&self.tolerated_usage) {
            return Err(ThresholdError::ToleratedUsageOutOfRange(
                self.tolerated_usage,
            ));
        }
        if self.tolerated_usage > self.bad_usage {
            warn!(
                "tolerated_usage ({}) exceeds bad_usage ({}); the warning tier will never trigger",
                self.tolerated_usage, self.bad_usage
            );
        }
        Ok(())
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            bad_usage: DEFAULT_BAD_USAGE,
            tolerated_usage: DEFAULT_TOLERATED_USAGE,
        }
    }
}

/// Loads thresholds from a YAML file.
///
/// Missing fields fall back to the shipped defaults; out-of-range
/// fractions are rejected.
pub fn load_thresholds(path: &str) -> Result<Thresholds, Box<dyn std::error::Error>> {
    info!("Loading thresholds from: {}", path);

    let yaml_content = fs::read_to_string(path).map_err(|e| {
        format!(
            "Failed to read threshold file '{}': {}. Check that the file exists and is readable.",
            path, e
        )
    })?;

    let thresholds: Thresholds = serde_yaml::from_str(&yaml_content).map_err(|e| {
        format!("Failed to parse threshold YAML: {}. Check the file format.", e)
    })?;

    thresholds.validate()?;

    info!(
        "Thresholds loaded: bad_usage={}, tolerated_usage={}",
        thresholds.bad_usage, thresholds.tolerated_usage
    );
    Ok(thresholds)
}
