//! Resource Accounting Module
//!
//! Data structures and transforms for per-job resource measurements.
//!
//! # Structure
//!
//! - [`model`]: the resource record and its threshold classification
//! - [`convert`]: columnar log data to records and back
//! - [`aggregate`]: cross-job running totals

pub mod aggregate;
pub mod convert;
pub mod model;

pub use aggregate::sum_job_resources;
pub use convert::{
    resources_from_columns,
    resources_to_columns,
    Column,
    ColumnMap,
    ConvertError,
    COLUMN_ORDER,
};
pub use model::{Resource, ResourceList, WarningLevel};
