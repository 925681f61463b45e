//! Rendering for the predictions report
//!
//! Pure string builders so every piece of output is unit testable; the CLI
//! layer decides what reaches stdout.

use crate::types::{PredictionTable, SchemaColumn};

/// Width of the banner and separator rules
pub const RULE_WIDTH: usize = 50;

/// A horizontal rule of the given character
pub fn rule(ch: char) -> String {
    ch.to_string().repeat(RULE_WIDTH)
}

/// Format header names the way the summary prints them, e.g. `['foo', 'bar']`
pub fn format_column_list(columns: &[String]) -> String {
    let quoted: Vec<String> = columns.iter().map(|c| format!("'{}'", c)).collect();
    format!("[{}]", quoted.join(", "))
}

/// Render the table restricted to `columns`, one markdown-style row per data
/// row, cells left-aligned and padded to the widest value. No index column.
///
/// Columns missing from a row (never the case for well-formed CSV) render as
/// empty cells. Returns a string ending with a newline.
pub fn render_table(table: &PredictionTable, columns: &[SchemaColumn]) -> String {
    let indices: Vec<Option<usize>> = columns
        .iter()
        .map(|c| table.column_index(c.as_str()))
        .collect();

    let mut widths: Vec<usize> = columns.iter().map(|c| c.as_str().chars().count()).collect();
    for row in table.rows() {
        for (width, index) in widths.iter_mut().zip(&indices) {
            let cell = cell_at(row, *index);
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();

    out.push('|');
    for (column, width) in columns.iter().zip(&widths) {
        out.push_str(&format!(" {:<w$} |", column.as_str(), w = *width));
    }
    out.push('\n');

    out.push('|');
    for width in &widths {
        out.push_str(&"-".repeat(*width + 2));
        out.push('|');
    }
    out.push('\n');

    for row in table.rows() {
        out.push('|');
        for (index, width) in indices.iter().zip(&widths) {
            out.push_str(&format!(" {:<w$} |", cell_at(row, *index), w = *width));
        }
        out.push('\n');
    }

    out
}

fn cell_at<'a>(row: &'a [String], index: Option<usize>) -> &'a str {
    index
        .and_then(|i| row.get(i))
        .map(String::as_str)
        .unwrap_or("")
}
