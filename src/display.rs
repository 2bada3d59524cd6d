//! Report Presentation
//!
//! Terminal-facing decoration for classified resources: the warning
//! level color table, colorized display columns and a plain
//! fixed-width table. Classification itself never looks at colors;
//! everything color-related lives here.

use std::collections::HashMap;

use colored::{Color, Colorize};
use once_cell::sync::Lazy;

use crate::resources::convert::COLUMN_ORDER;
use crate::resources::model::{Resource, WarningLevel};

/// Width of the resource name cell in rendered tables.
const NAME_WIDTH: usize = 12;

/// Width of each numeric cell in rendered tables.
const VALUE_WIDTH: usize = 10;

/// Static read-only mapping from warning level to terminal color.
pub static LEVEL_COLORS: Lazy<HashMap<WarningLevel, Color>> = Lazy::new(|| {
    HashMap::from([
        (WarningLevel::Error, Color::Red),
        (WarningLevel::Warning, Color::Yellow),
        (WarningLevel::LightWarning, Color::BrightYellow),
        (WarningLevel::Normal, Color::Green),
    ])
});

/// Returns the terminal color for a warning level, if one is mapped.
///
/// Unmapped levels (currently only [`WarningLevel::Unclassified`])
/// yield `None`, meaning the value renders undecorated.
pub fn level_color(level: WarningLevel) -> Option<Color> {
    LEVEL_COLORS.get(&level).copied()
}

/// Wraps a cell in the color of its warning level.
fn paint(cell: &str, level: WarningLevel) -> String {
    match level_color(level) {
        Some(color) => cell.color(color).to_string(),
        None => cell.to_string(),
    }
}

/// Builds display columns with colorized usage cells.
///
/// Returns the four fixed keys of the columnar shape (`Resources`,
/// `Usage`, `Requested`, `Allocated`) with every cell stringified and
/// the usage cells wrapped in their warning level color. This is the
/// decorated counterpart of
/// [`crate::resources::convert::resources_to_columns`].
pub fn decorated_columns(resources: &[Resource]) -> HashMap<String, Vec<String>> {
    let mut columns = HashMap::new();
    columns.insert(
        "Resources".to_string(),
        resources.iter().map(|r| r.name.clone()).collect(),
    );
    columns.insert(
        "Usage".to_string(),
        resources
            .iter()
            .map(|r| paint(&r.usage.to_string(), r.warning_level))
            .collect(),
    );
    columns.insert(
        "Requested".to_string(),
        resources.iter().map(|r| r.requested.to_string()).collect(),
    );
    columns.insert(
        "Allocated".to_string(),
        resources.iter().map(|r| r.allocated.to_string()).collect(),
    );
    columns
}

/// Renders resources as a fixed-width table.
///
/// Usage cells are padded before coloring so the escape codes do not
/// disturb the column alignment.
pub fn render_table(resources: &[Resource]) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "{:<name$} {:>value$} {:>value$} {:>value$}\n",
        COLUMN_ORDER[0],
        COLUMN_ORDER[1],
        COLUMN_ORDER[2],
        COLUMN_ORDER[3],
        name = NAME_WIDTH,
        value = VALUE_WIDTH,
    ));

    for resource in resources {
        let usage = format!("{:>value$}", resource.usage, value = VALUE_WIDTH);
        output.push_str(&format!(
            "{:<name$} {} {:>value$} {:>value$}\n",
            fit_name(&resource.name, NAME_WIDTH),
            paint(&usage, resource.warning_level),
            resource.requested,
            resource.allocated,
            name = NAME_WIDTH,
            value = VALUE_WIDTH,
        ));
    }

    output
}

/// Pads a name to the cell width, truncating with an ellipsis if needed.
fn fit_name(name: &str, width: usize) -> String {
    if name.len() <= width {
        format!("{:width$}", name, width = width)
    } else {
        format!("{}...", &name[..width - 3])
    }
}
