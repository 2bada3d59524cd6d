//! Columnar Conversion
//!
//! Job logs arrive parsed into columns: one sequence per attribute,
//! aligned by position across resources. This module transposes that
//! shape into an ordered list of [`Resource`] records and back.
//!
//! Attribute keys are matched case-insensitively; the shape of the
//! input is validated strictly so malformed data fails here with a
//! named error instead of surfacing as an indexing panic downstream.
//!
//! The reverse conversion is undecorated: plain numeric columns under
//! four fixed keys. Colorized display cells are layered on top by
//! [`crate::display`].

use std::collections::HashMap;

use log::debug;
use thiserror::Error;

use super::model::{Resource, ResourceList};

/// Canonical display order of the columnar output keys.
pub const COLUMN_ORDER: [&str; 4] = ["Resources", "Usage", "Requested", "Allocated"];

/// One parsed log column: resource names, or numeric samples.
#[derive(Debug, Clone, PartialEq)]
pub enum Column {
    /// The column naming the resource identifiers
    Names(Vec<String>),
    /// A column of numeric measurements (NaN marks unreported values)
    Values(Vec<f64>),
}

impl Column {
    /// Returns the number of entries in this column.
    pub fn len(&self) -> usize {
        match self {
            Self::Names(names) => names.len(),
            Self::Values(values) => values.len(),
        }
    }

    /// Returns true if this column has no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Columnar representation of parsed job log data.
pub type ColumnMap = HashMap<String, Column>;

/// Structural failures of the columnar input shape.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConvertError {
    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),
    #[error("unrecognized column '{0}'")]
    UnknownColumn(String),
    #[error("column '{column}' must hold {expected}")]
    ColumnType {
        column: String,
        expected: &'static str,
    },
    #[error("column '{column}' has {found} entries, expected {expected}")]
    LengthMismatch {
        column: String,
        expected: usize,
        found: usize,
    },
}

/// Transposes columnar log data into an ordered list of resource records.
///
/// The `resources` column (any casing) supplies the record names; the
/// `usage`, `requested` and `allocated` columns supply the numeric
/// fields, matched positionally. All four columns are required and must
/// have equal length; unrecognized keys are rejected.
pub fn resources_from_columns(columns: &ColumnMap) -> Result<ResourceList, ConvertError> {
    for key in columns.keys() {
        if !is_known_column(key) {
            return Err(ConvertError::UnknownColumn(key.clone()));
        }
    }

    let names = names_column(columns, "resources")?;
    let usage = values_column(columns, "usage")?;
    let requested = values_column(columns, "requested")?;
    let allocated = values_column(columns, "allocated")?;

    let expected = names.len();
    for (label, found) in [
        ("usage", usage.len()),
        ("requested", requested.len()),
        ("allocated", allocated.len()),
    ] {
        if found != expected {
            return Err(ConvertError::LengthMismatch {
                column: label.to_string(),
                expected,
                found,
            });
        }
    }

    let mut resources = Vec::with_capacity(expected);
    for index in 0..expected {
        resources.push(Resource::new(
            names[index].clone(),
            usage[index],
            requested[index],
            allocated[index],
        ));
    }

    debug!("Converted {} columnar rows into resource records", resources.len());
    Ok(resources)
}

/// Lays resource records back out as columns under the four fixed keys.
///
/// The output is undecorated and round-trips exactly through
/// [`resources_from_columns`]; warning levels are not part of the
/// columnar shape.
pub fn resources_to_columns(resources: &[Resource]) -> ColumnMap {
    let mut columns = ColumnMap::new();
    columns.insert(
        "Resources".to_string(),
        Column::Names(resources.iter().map(|r| r.name.clone()).collect()),
    );
    columns.insert(
        "Usage".to_string(),
        Column::Values(resources.iter().map(|r| r.usage).collect()),
    );
    columns.insert(
        "Requested".to_string(),
        Column::Values(resources.iter().map(|r| r.requested).collect()),
    );
    columns.insert(
        "Allocated".to_string(),
        Column::Values(resources.iter().map(|r| r.allocated).collect()),
    );
    columns
}

fn is_known_column(key: &str) -> bool {
    COLUMN_ORDER.iter().any(|known| key.eq_ignore_ascii_case(known))
}

fn find_column<'a>(
    columns: &'a ColumnMap,
    name: &'static str,
) -> Result<(&'a str, &'a Column), ConvertError> {
    columns
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .map(|(key, column)| (key.as_str(), column))
        .ok_or(ConvertError::MissingColumn(name))
}

fn names_column<'a>(
    columns: &'a ColumnMap,
    name: &'static str,
) -> Result<&'a [String], ConvertError> {
    match find_column(columns, name)? {
        (_, Column::Names(names)) => Ok(names),
        (key, Column::Values(_)) => Err(ConvertError::ColumnType {
            column: key.to_string(),
            expected: "resource names",
        }),
    }
}

fn values_column<'a>(
    columns: &'a ColumnMap,
    name: &'static str,
) -> Result<&'a [f64], ConvertError> {
    match find_column(columns, name)? {
        (_, Column::Values(values)) => Ok(values),
        (key, Column::Names(_)) => Err(ConvertError::ColumnType {
            column: key.to_string(),
            expected: "numeric values",
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_columns() -> ColumnMap {
        let mut columns = ColumnMap::new();
        columns.insert(
            "Resources".to_string(),
            Column::Names(vec!["Cpus".to_string(), "Memory".to_string()]),
        );
        columns.insert("Usage".to_string(), Column::Values(vec![1.0, 500.0]));
        columns.insert("Requested".to_string(), Column::Values(vec![1.0, 1000.0]));
        columns.insert("Allocated".to_string(), Column::Values(vec![1.0, 1024.0]));
        columns
    }

    #[test]
    fn test_from_columns_basic() {
        let resources = resources_from_columns(&sample_columns()).unwrap();

        assert_eq!(resources.len(), 2);
        assert_eq!(resources[0].name, "Cpus");
        assert_eq!(resources[0].usage, 1.0);
        assert_eq!(resources[1].name, "Memory");
        assert_eq!(resources[1].requested, 1000.0);
        assert_eq!(resources[1].allocated, 1024.0);
    }

    #[test]
    fn test_from_columns_preserves_row_order() {
        let resources = resources_from_columns(&sample_columns()).unwrap();
        let names: Vec<_> = resources.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Cpus", "Memory"]);
    }

    #[test]
    fn test_from_columns_records_unclassified() {
        let resources = resources_from_columns(&sample_columns()).unwrap();
        assert!(resources.iter().all(|r| !r.is_classified()));
    }

    #[test]
    fn test_from_columns_case_insensitive_keys() {
        let mut columns = ColumnMap::new();
        columns.insert(
            "resources".to_string(),
            Column::Names(vec!["Disk".to_string()]),
        );
        columns.insert("USAGE".to_string(), Column::Values(vec![20.0]));
        columns.insert("requested".to_string(), Column::Values(vec![50.0]));
        columns.insert("Allocated".to_string(), Column::Values(vec![50.0]));

        let resources = resources_from_columns(&columns).unwrap();
        assert_eq!(resources[0].name, "Disk");
        assert_eq!(resources[0].usage, 20.0);
    }

    #[test]
    fn test_from_columns_missing_column() {
        let mut columns = sample_columns();
        columns.remove("Usage");

        let result = resources_from_columns(&columns);
        assert_eq!(result, Err(ConvertError::MissingColumn("usage")));
    }

    #[test]
    fn test_from_columns_unknown_column() {
        let mut columns = sample_columns();
        columns.insert("Wasted".to_string(), Column::Values(vec![0.0, 0.0]));

        let result = resources_from_columns(&columns);
        assert_eq!(
            result,
            Err(ConvertError::UnknownColumn("Wasted".to_string()))
        );
    }

    #[test]
    fn test_from_columns_length_mismatch() {
        let mut columns = sample_columns();
        columns.insert("Requested".to_string(), Column::Values(vec![1.0]));

        let result = resources_from_columns(&columns);
        assert_eq!(
            result,
            Err(ConvertError::LengthMismatch {
                column: "requested".to_string(),
                expected: 2,
                found: 1,
            })
        );
    }

    #[test]
    fn test_from_columns_wrong_names_type() {
        let mut columns = sample_columns();
        columns.insert("Resources".to_string(), Column::Values(vec![1.0, 2.0]));

        let result = resources_from_columns(&columns);
        assert!(matches!(result, Err(ConvertError::ColumnType { .. })));
    }

    #[test]
    fn test_from_columns_wrong_values_type() {
        let mut columns = sample_columns();
        columns.insert(
            "Usage".to_string(),
            Column::Names(vec!["high".to_string(), "low".to_string()]),
        );

        let result = resources_from_columns(&columns);
        assert!(matches!(
            result,
            Err(ConvertError::ColumnType { expected: "numeric values", .. })
        ));
    }

    #[test]
    fn test_from_columns_empty_columns() {
        let mut columns = ColumnMap::new();
        columns.insert("Resources".to_string(), Column::Names(Vec::new()));
        columns.insert("Usage".to_string(), Column::Values(Vec::new()));
        columns.insert("Requested".to_string(), Column::Values(Vec::new()));
        columns.insert("Allocated".to_string(), Column::Values(Vec::new()));

        let resources = resources_from_columns(&columns).unwrap();
        assert!(resources.is_empty());
    }

    #[test]
    fn test_from_columns_nan_usage_passes_through() {
        let mut columns = ColumnMap::new();
        columns.insert(
            "Resources".to_string(),
            Column::Names(vec!["Disk".to_string()]),
        );
        columns.insert("Usage".to_string(), Column::Values(vec![f64::NAN]));
        columns.insert("Requested".to_string(), Column::Values(vec![50.0]));
        columns.insert("Allocated".to_string(), Column::Values(vec![50.0]));

        let resources = resources_from_columns(&columns).unwrap();
        assert!(resources[0].usage.is_nan());
    }

    #[test]
    fn test_to_columns_fixed_keys() {
        let resources = vec![
            Resource::new("Cpus", 1.0, 1.0, 1.0),
            Resource::new("Memory", 500.0, 1000.0, 1024.0),
        ];

        let columns = resources_to_columns(&resources);

        assert_eq!(columns.len(), 4);
        for key in COLUMN_ORDER {
            assert!(columns.contains_key(key), "missing key '{}'", key);
        }
    }

    #[test]
    fn test_to_columns_values() {
        let resources = vec![Resource::new("Memory", 500.0, 1000.0, 1024.0)];
        let columns = resources_to_columns(&resources);

        assert_eq!(
            columns["Resources"],
            Column::Names(vec!["Memory".to_string()])
        );
        assert_eq!(columns["Usage"], Column::Values(vec![500.0]));
        assert_eq!(columns["Requested"], Column::Values(vec![1000.0]));
        assert_eq!(columns["Allocated"], Column::Values(vec![1024.0]));
    }

    #[test]
    fn test_round_trip() {
        let original = resources_from_columns(&sample_columns()).unwrap();
        let recovered = resources_from_columns(&resources_to_columns(&original)).unwrap();

        assert_eq!(recovered, original);
    }

    #[test]
    fn test_round_trip_empty() {
        let columns = resources_to_columns(&[]);
        let recovered = resources_from_columns(&columns).unwrap();
        assert!(recovered.is_empty());
    }

    #[test]
    fn test_column_len() {
        assert_eq!(Column::Names(vec!["a".to_string()]).len(), 1);
        assert_eq!(Column::Values(vec![1.0, 2.0]).len(), 2);
        assert!(Column::Values(Vec::new()).is_empty());
    }

    #[test]
    fn test_error_messages() {
        let error = ConvertError::LengthMismatch {
            column: "usage".to_string(),
            expected: 3,
            found: 2,
        };
        assert_eq!(error.to_string(), "column 'usage' has 2 entries, expected 3");

        let error = ConvertError::MissingColumn("resources");
        assert!(error.to_string().contains("resources"));
    }
}
