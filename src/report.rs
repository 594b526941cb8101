// Copyright 2025 N. Dornseif
//
// Dual-licensed under Apache 2.0 and MIT terms.

//! Fixed-format text output.

use std::io::{self, Write};

use crate::stats::{BucketRow, Report};
use crate::strings;

/// `hh   | count | expected | difference`
pub fn format_row(row: &BucketRow, expected: f64) -> String {
    format!(
        "{:02x}   | {:6} | {:15.4} | {:15.2}",
        row.byte, row.count, expected, row.difference
    )
}

/// Bracketed, space separated list, e.g. `[0 17 255]`.
pub fn format_indexes(indexes: &[u8]) -> String {
    let joined = indexes
        .iter()
        .map(|index| index.to_string())
        .collect::<Vec<String>>()
        .join(" ");
    format!("[{}]", joined)
}

/// Share of completed iterations.
pub fn format_progress(done: u64, total: u64) -> String {
    format!("progress: {:.2}%", 100.0 * done as f64 / total as f64)
}

/// Write the full report: table, summary and the strategy label.
pub fn write_report(out: &mut impl Write, report: &Report, label: &str) -> io::Result<()> {
    writeln!(out, "{}", strings::REPORT_TITLE)?;
    writeln!(out, "{}", strings::TABLE_HEADER)?;
    for row in &report.rows {
        writeln!(out, "{}", format_row(row, report.expected))?;
    }
    writeln!(
        out,
        "Average Absolute Difference: {:.6}",
        report.average_difference
    )?;
    writeln!(out, "Minimum Difference: {:.6}", report.min_difference)?;
    writeln!(out, "Maximum Difference: {:.6}", report.max_difference)?;
    writeln!(out, "Total count: {}", report.total)?;
    writeln!(out, "Zero hits: {}", report.zero_hits.len())?;
    writeln!(out, "Zero hit indexes: {}", format_indexes(&report.zero_hits))?;
    writeln!(out, "     hits: {}", report.exact_hits.len())?;
    writeln!(out, "     hit indexes: {}", format_indexes(&report.exact_hits))?;
    writeln!(out, "{}", label)?;
    Ok(())
}
