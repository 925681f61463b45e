use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Columns the reporter knows how to display, in preferred order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SchemaColumn {
    File,
    BlockName,
    Probability,
    FaultProne,
}

impl SchemaColumn {
    /// All known columns, in the order they should appear in the table
    pub fn all() -> [SchemaColumn; 4] {
        [
            SchemaColumn::File,
            SchemaColumn::BlockName,
            SchemaColumn::Probability,
            SchemaColumn::FaultProne,
        ]
    }

    /// Header name as it appears in the predictions CSV
    pub fn as_str(&self) -> &'static str {
        match self {
            SchemaColumn::File => "file",
            SchemaColumn::BlockName => "block_name",
            SchemaColumn::Probability => "probability",
            SchemaColumn::FaultProne => "fault_prone",
        }
    }
}

impl std::fmt::Display for SchemaColumn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An in-memory predictions table: header plus data rows, all cells kept as
/// the raw CSV strings. Values are echoed back verbatim when rendered; only
/// `fault_prone` is ever interpreted numerically.
#[derive(Debug, Clone)]
pub struct PredictionTable {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl PredictionTable {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { columns, rows }
    }

    /// Header names in file order
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of data rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn has_column(&self, column: SchemaColumn) -> bool {
        self.column_index(column.as_str()).is_some()
    }

    /// Known columns actually present in the file, preserving the preferred
    /// order rather than the file's header order
    pub fn display_columns(&self) -> Vec<SchemaColumn> {
        SchemaColumn::all()
            .into_iter()
            .filter(|c| self.has_column(*c))
            .collect()
    }

    /// Sum the `fault_prone` column and count rows. The sum is permissive:
    /// any numeric value contributes, blank cells count as zero, and a
    /// non-numeric cell is a hard parse error.
    pub fn summary(&self) -> Result<RiskSummary> {
        let risk_count = match self.column_index(SchemaColumn::FaultProne.as_str()) {
            Some(idx) => {
                let mut sum = 0.0;
                for (n, row) in self.rows.iter().enumerate() {
                    let cell = row.get(idx).map(String::as_str).unwrap_or("").trim();
                    if cell.is_empty() {
                        continue;
                    }
                    let value: f64 = cell.parse().with_context(|| {
                        format!("invalid fault_prone value {:?} in row {}", cell, n + 2)
                    })?;
                    sum += value;
                }
                sum
            }
            None => 0.0,
        };

        Ok(RiskSummary {
            total: self.rows.len(),
            risk_count,
        })
    }
}

/// Aggregate risk statistics for one predictions run
#[derive(Debug, Clone, Serialize)]
pub struct RiskSummary {
    /// Data rows in the full table, independent of which columns displayed
    pub total: usize,
    /// Sum of the `fault_prone` column, 0 when the column is absent
    pub risk_count: f64,
}

impl RiskSummary {
    pub fn has_risk(&self) -> bool {
        self.risk_count > 0.0
    }

    /// Integral sums print without a decimal point, matching 0/1 flag columns
    pub fn risk_display(&self) -> String {
        if self.risk_count.fract() == 0.0 {
            format!("{}", self.risk_count as i64)
        } else {
            format!("{}", self.risk_count)
        }
    }

    /// Risk density as `risky/total`
    pub fn density(&self) -> String {
        format!("{}/{}", self.risk_display(), self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(columns: &[&str], rows: &[&[&str]]) -> PredictionTable {
        PredictionTable::new(
            columns.iter().map(|c| c.to_string()).collect(),
            rows.iter()
                .map(|r| r.iter().map(|c| c.to_string()).collect())
                .collect(),
        )
    }

    #[test]
    fn test_display_columns_preserves_preferred_order() {
        // File order differs from the preferred order
        let t = table(&["fault_prone", "extra", "file"], &[]);
        assert_eq!(
            t.display_columns(),
            vec![SchemaColumn::File, SchemaColumn::FaultProne]
        );
    }

    #[test]
    fn test_display_columns_empty_intersection() {
        let t = table(&["foo", "bar"], &[]);
        assert!(t.display_columns().is_empty());
    }

    #[test]
    fn test_summary_sums_fault_prone() {
        let t = table(
            &["file", "fault_prone"],
            &[&["a.py", "1"], &["b.py", "0"], &["c.py", "1"]],
        );
        let summary = t.summary().unwrap();
        assert_eq!(summary.total, 3);
        assert_eq!(summary.density(), "2/3");
        assert!(summary.has_risk());
    }

    #[test]
    fn test_summary_without_fault_prone_column() {
        let t = table(&["foo", "bar"], &[&["x", "y"]]);
        let summary = t.summary().unwrap();
        assert_eq!(summary.total, 1);
        assert_eq!(summary.density(), "0/1");
        assert!(!summary.has_risk());
    }

    #[test]
    fn test_summary_blank_cells_count_as_zero() {
        let t = table(&["fault_prone"], &[&["1"], &[""], &["  "]]);
        let summary = t.summary().unwrap();
        assert_eq!(summary.density(), "1/3");
    }

    #[test]
    fn test_summary_fractional_sum_keeps_decimal() {
        let t = table(&["fault_prone"], &[&["0.5"], &["1"]]);
        let summary = t.summary().unwrap();
        assert_eq!(summary.risk_display(), "1.5");
    }

    #[test]
    fn test_summary_rejects_non_numeric_fault_prone() {
        let t = table(&["fault_prone"], &[&["yes"]]);
        let err = t.summary().unwrap_err();
        assert!(err.to_string().contains("fault_prone"));
    }

    #[test]
    fn test_schema_column_display() {
        assert_eq!(SchemaColumn::BlockName.to_string(), "block_name");
        assert_eq!(SchemaColumn::Probability.to_string(), "probability");
    }
}
