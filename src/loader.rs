//! CSV loading for predictions files
//!
//! The upstream model run does not always produce a predictions file, and CI
//! sometimes hands us a zero-byte artifact. Both are benign outcomes and are
//! reported as distinct `LoadOutcome` variants rather than errors.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::types::PredictionTable;

/// Outcome of loading a predictions file
#[derive(Debug)]
pub enum LoadOutcome {
    /// Path does not exist
    Missing,
    /// File exists but has no parseable header (e.g. zero bytes)
    NoColumns,
    /// File parsed; the table may still have zero data rows
    Table(PredictionTable),
}

/// Load a predictions CSV: comma-separated, first row is the header.
///
/// Malformed rows (wrong field count, bad quoting) are real errors and
/// propagate to the caller.
pub fn load_predictions(path: &Path) -> Result<LoadOutcome> {
    if !path.exists() {
        return Ok(LoadOutcome::Missing);
    }

    let meta = fs::metadata(path)
        .with_context(|| format!("Failed to stat predictions file: {}", path.display()))?;
    if meta.len() == 0 {
        return Ok(LoadOutcome::NoColumns);
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("Failed to open predictions file: {}", path.display()))?;

    let headers = reader.headers().context("Failed to read CSV header")?;
    if headers.is_empty() {
        return Ok(LoadOutcome::NoColumns);
    }
    let columns: Vec<String> = headers.iter().map(str::to_string).collect();

    let mut rows = Vec::new();
    for (n, record) in reader.records().enumerate() {
        // Row numbers in errors are 1-based file lines, header included
        let record = record.with_context(|| format!("Failed to parse CSV row {}", n + 2))?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    debug!(
        columns = columns.len(),
        rows = rows.len(),
        "loaded predictions table"
    );
    Ok(LoadOutcome::Table(PredictionTable::new(columns, rows)))
}
