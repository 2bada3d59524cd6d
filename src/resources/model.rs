//! Resource Record Model
//!
//! Core data structure representing one named resource measurement for
//! one job, together with its threshold-based classification rule.
//!
//! A record starts out [`WarningLevel::Unclassified`] and stays that way
//! until [`Resource::classify`] is invoked with a set of deviation
//! thresholds; classification is the only operation that touches the
//! warning level.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

use crate::config::Thresholds;

/// An ordered list of resources for one job.
///
/// Order matches the column order of the source log data and is kept
/// through conversion and aggregation; resource identity is by name.
pub type ResourceList = Vec<Resource>;

/// Classification tier of a resource measurement.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum WarningLevel {
    /// No classification has run yet
    #[default]
    Unclassified,
    /// Usage deviation within the tolerated band
    Normal,
    /// Usage deviation outside the tolerated band
    Warning,
    /// Usage deviation outside the bad-usage band, or usage without a request
    Error,
    /// Usage value was not reported (not-a-number)
    LightWarning,
}

impl WarningLevel {
    /// Returns the snake_case label used in mappings and log lines.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unclassified => "unclassified",
            Self::Normal => "normal",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::LightWarning => "light_warning",
        }
    }
}

/// A single named resource measurement for one job.
///
/// Holds the amount the job actually used alongside what it requested
/// and what the scheduler allocated. Usage may be NaN when the log did
/// not report a value.
///
/// # Example
///
/// ```
/// use jobusage::{Resource, Thresholds, WarningLevel};
///
/// let mut cpus = Resource::new("Cpus", 0.99, 1.0, 1.0);
/// cpus.classify(&Thresholds::default());
/// assert_eq!(cpus.warning_level, WarningLevel::Normal);
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Resource {
    /// Resource identifier (e.g., "Cpus", "Memory", "Disk")
    pub name: String,

    /// Amount the job actually consumed; NaN when not reported
    pub usage: f64,

    /// Amount the job asked the scheduler for
    pub requested: f64,

    /// Amount the scheduler granted
    pub allocated: f64,

    /// Classification tier, set by [`Resource::classify`]
    #[serde(default)]
    pub warning_level: WarningLevel,
}

impl Resource {
    /// Creates a new unclassified resource measurement.
    pub fn new(name: impl Into<String>, usage: f64, requested: f64, allocated: f64) -> Self {
        Self {
            name: name.into().trim().to_string(),
            usage,
            requested,
            allocated,
            warning_level: WarningLevel::Unclassified,
        }
    }

    /// Returns true once [`Resource::classify`] has assigned a tier.
    pub fn is_classified(&self) -> bool {
        self.warning_level != WarningLevel::Unclassified
    }

    /// Sets the warning level from the usage/requested deviation.
    ///
    /// With a non-zero request the deviation `usage / requested` is
    /// compared against the two threshold bands, both bounds inclusive:
    /// a deviation exactly at `1 ± bad_usage` still counts as inside
    /// the band. An unreported (NaN) usage classifies as
    /// [`WarningLevel::LightWarning`].
    ///
    /// With a zero request, any positive usage is an anomaly and
    /// classifies as [`WarningLevel::Error`]; everything else is
    /// [`WarningLevel::Normal`].
    ///
    /// Always terminates with a defined level and mutates nothing but
    /// `warning_level`.
    pub fn classify(&mut self, thresholds: &Thresholds) {
        if self.requested != 0.0 {
            let deviation = self.usage / self.requested;

            if self.usage.is_nan() {
                self.warning_level = WarningLevel::LightWarning;
            } else if !within_band(deviation, thresholds.bad_usage) {
                self.warning_level = WarningLevel::Error;
            } else if !within_band(deviation, thresholds.tolerated_usage) {
                self.warning_level = WarningLevel::Warning;
            } else {
                self.warning_level = WarningLevel::Normal;
            }
        } else if self.usage > 0.0 {
            // Usage without any request is always an anomaly
            self.warning_level = WarningLevel::Error;
        } else {
            self.warning_level = WarningLevel::Normal;
        }
    }

    /// Returns this resource as a flat field-to-value mapping.
    ///
    /// Intended for serialization and debug dumps, not display
    /// formatting. NaN amounts map to JSON null.
    pub fn to_mapping(&self) -> Map<String, Value> {
        let mut fields = Map::new();
        fields.insert("name".to_string(), Value::String(self.name.clone()));
        fields.insert("usage".to_string(), number_or_null(self.usage));
        fields.insert("requested".to_string(), number_or_null(self.requested));
        fields.insert("allocated".to_string(), number_or_null(self.allocated));
        fields.insert(
            "warning_level".to_string(),
            Value::String(self.warning_level.as_str().to_string()),
        );
        fields
    }
}

/// Checks `1 - fraction <= deviation <= 1 + fraction`, bounds inclusive.
fn within_band(deviation: f64, fraction: f64) -> bool {
    (1.0 - fraction) <= deviation && deviation <= (1.0 + fraction)
}

fn number_or_null(value: f64) -> Value {
    Number::from_f64(value).map(Value::Number).unwrap_or(Value::Null)
}
