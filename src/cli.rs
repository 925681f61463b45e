//! The reporter's run sequence, extracted from main.rs for testability
//!
//! Returns the process exit code instead of exiting so tests can drive it
//! directly. Everything user-facing goes to stdout; diagnostics go through
//! tracing on stderr.

use anyhow::Result;
use colored::Colorize;
use std::path::Path;
use tracing::info;

use crate::config::ReporterConfig;
use crate::loader::{load_predictions, LoadOutcome};
use crate::report;

/// Read the predictions file at `path`, print the analysis, and return the
/// exit code. Missing and empty inputs are benign (exit 0); only an outright
/// parse failure bubbles up as an error.
pub fn run(path: &Path, config: &ReporterConfig) -> Result<i32> {
    let table = match load_predictions(path)? {
        LoadOutcome::Missing => {
            println!("File not found: {}", path.display());
            return Ok(0);
        }
        LoadOutcome::NoColumns => {
            println!("No columns to parse from file");
            return Ok(0);
        }
        LoadOutcome::Table(table) => table,
    };

    if table.is_empty() {
        println!("No predictions data available.");
        return Ok(0);
    }

    println!("📊 Defect Prediction Analysis");
    println!("{}", report::rule('='));

    let display = table.display_columns();
    if display.is_empty() {
        println!("Expected columns not found in CSV.");
        println!(
            "Available columns: {}",
            report::format_column_list(table.columns())
        );
    } else {
        println!("CHANGED BLOCKS & RISK ASSESSMENT:");
        println!("{}", report::rule('-'));
        print!("{}", report::render_table(&table, &display));
    }

    let summary = table.summary()?;
    println!();
    println!("{}", report::rule('-'));
    println!("Total Blocks Analyzed: {}", summary.total);
    println!("High Risk Density: {}", summary.density());

    if summary.has_risk() {
        println!(
            "{}",
            format!(
                "❌ FAILURE: {} Potential Defects Detected!",
                summary.risk_display()
            )
            .bright_red()
            .bold()
        );
        println!("   Please review the table above for high-risk blocks.");
        if config.fail_on_risk {
            info!(risk = %summary.risk_display(), "fail_on_risk set, failing the build");
            return Ok(1);
        }
    } else {
        println!("{}", "✅ SUCCESS: No defects predicted.".bright_green().bold());
    }

    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_run_missing_file_is_benign() {
        let dir = TempDir::new().unwrap();
        let code = run(&dir.path().join("none.csv"), &ReporterConfig::default()).unwrap();
        assert_eq!(code, 0);
    }

    #[test]
    fn test_run_with_risk_exits_zero_by_default() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("p.csv");
        fs::write(&path, "file,fault_prone\na.py,1\n").unwrap();
        let code = run(&path, &ReporterConfig::default()).unwrap();
        assert_eq!(code, 0);
    }

    #[test]
    fn test_run_fail_on_risk_exits_one() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("p.csv");
        fs::write(&path, "file,fault_prone\na.py,1\n").unwrap();
        let config = ReporterConfig { fail_on_risk: true };
        let code = run(&path, &config).unwrap();
        assert_eq!(code, 1);
    }

    #[test]
    fn test_run_fail_on_risk_without_risk_exits_zero() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("p.csv");
        fs::write(&path, "file,fault_prone\na.py,0\n").unwrap();
        let config = ReporterConfig { fail_on_risk: true };
        let code = run(&path, &config).unwrap();
        assert_eq!(code, 0);
    }
}
