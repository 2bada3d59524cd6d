//! JobUsage - Per-Job Resource Usage Accounting
//!
//! Tracks computational resource measurements (CPU, memory, disk)
//! reported by batch scheduler job logs, classifies each measurement
//! against configurable deviation thresholds, and totals measurements
//! across jobs for summary reports.
//!
//! # Architecture
//!
//! The library is organized into three main modules:
//!
//! - [`resources`]: record model, classification, columnar conversion
//!   and cross-job totals
//! - [`config`]: deviation thresholds with YAML loading
//! - [`display`]: terminal color decoration and table rendering
//!
//! # Example
//!
//! ```rust
//! use std::collections::HashMap;
//!
//! use jobusage::{resources_from_columns, Column, Thresholds};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Columnar data as parsed from a job log
//!     let mut columns = HashMap::new();
//!     columns.insert(
//!         "Resources".to_string(),
//!         Column::Names(vec!["Cpus".to_string(), "Memory".to_string()]),
//!     );
//!     columns.insert("Usage".to_string(), Column::Values(vec![0.7, 1100.0]));
//!     columns.insert("Requested".to_string(), Column::Values(vec![1.0, 1024.0]));
//!     columns.insert("Allocated".to_string(), Column::Values(vec![1.0, 2048.0]));
//!
//!     let thresholds = Thresholds::default();
//!     let mut resources = resources_from_columns(&columns)?;
//!     for resource in &mut resources {
//!         resource.classify(&thresholds);
//!     }
//!
//!     println!("{}", jobusage::display::render_table(&resources));
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod display;
pub mod resources;

// Re-export commonly used types
pub use config::{load_thresholds, Thresholds};
pub use resources::aggregate::sum_job_resources;
pub use resources::convert::{
    resources_from_columns,
    resources_to_columns,
    Column,
    ColumnMap,
    ConvertError,
};
pub use resources::model::{Resource, ResourceList, WarningLevel};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "JobUsage";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_version() {
        assert!(!VERSION.is_empty());
        assert!(VERSION.contains('.'));
    }

    #[test]
    fn test_app_name() {
        assert_eq!(APP_NAME, "JobUsage");
    }

    #[test]
    fn test_module_exports_resource() {
        let resource = Resource::new("Cpus", 1.0, 1.0, 1.0);
        assert_eq!(resource.name, "Cpus");
        assert_eq!(resource.warning_level, WarningLevel::Unclassified);
    }

    #[test]
    fn test_module_exports_thresholds() {
        let thresholds = Thresholds::default();
        assert!(thresholds.tolerated_usage <= thresholds.bad_usage);
    }

    #[test]
    fn test_pipeline_end_to_end() {
        // columnar -> records -> classify -> aggregate -> columnar
        let mut columns = ColumnMap::new();
        columns.insert(
            "Resources".to_string(),
            Column::Names(vec!["Cpus".to_string()]),
        );
        columns.insert("Usage".to_string(), Column::Values(vec![1.0]));
        columns.insert("Requested".to_string(), Column::Values(vec![1.0]));
        columns.insert("Allocated".to_string(), Column::Values(vec![1.0]));

        let thresholds = Thresholds::default();
        let mut resources = resources_from_columns(&columns).unwrap();
        for resource in &mut resources {
            resource.classify(&thresholds);
        }
        assert_eq!(resources[0].warning_level, WarningLevel::Normal);

        let totals = sum_job_resources(&[resources.clone(), resources]);
        assert_eq!(totals[0].usage, 2.0);

        let output = resources_to_columns(&totals);
        assert_eq!(output["Usage"], Column::Values(vec![2.0]));
    }

    #[test]
    fn test_version_format() {
        let parts: Vec<&str> = VERSION.split('.').collect();
        assert!(parts.len() >= 2, "Version should have at least major.minor");
        for part in parts {
            assert!(part.parse::<u32>().is_ok(), "Version components should be numeric");
        }
    }
}
