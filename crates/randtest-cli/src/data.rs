//! Reading sample data from text files

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Read one number per line
///
/// Surrounding whitespace and blank lines are ignored; there is no header.
pub fn read_data(path: &Path) -> Result<Vec<f64>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read data file {}", path.display()))?;
    parse_data(&text).with_context(|| format!("Invalid data in {}", path.display()))
}

/// Parse one number per line of `text`
pub fn parse_data(text: &str) -> Result<Vec<f64>> {
    text.lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
        .map(|(line_number, line)| {
            line.parse::<f64>()
                .with_context(|| format!("line {line_number}: '{line}' is not a number"))
        })
        .collect()
}
