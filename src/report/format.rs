//! Formatted terminal output for statistics and aggregates.
//!
//! We keep formatting code in one place so:
//! - the enrichment/aggregation code stays clean and testable
//! - output changes are localized (important for future snapshot tests)

use crate::domain::{GroupKey, GroupTotal, ReportConfig};
use crate::io::ingest::IngestedData;
use crate::stats::{ColumnSummary, DescribeReport};

/// How many skipped-row diagnostics to show before summarizing the rest.
const MAX_ROW_ERRORS_SHOWN: usize = 5;

/// Format the run header: source path and ingest counters.
pub fn format_run_summary(ingest: &IngestedData, config: &ReportConfig) -> String {
    let mut out = String::new();

    out.push_str("=== SALES REPORT ===\n");
    out.push_str(&format!("Source: {}\n", config.csv_path.display()));
    out.push_str(&format!(
        "Rows: read={} | used={} | skipped={}\n",
        ingest.rows_read,
        ingest.rows_used,
        ingest.row_errors.len()
    ));

    for err in ingest.row_errors.iter().take(MAX_ROW_ERRORS_SHOWN) {
        out.push_str(&format!("  (line {}) {}\n", err.line, err.message));
    }
    if ingest.row_errors.len() > MAX_ROW_ERRORS_SHOWN {
        out.push_str(&format!(
            "  ... and {} more\n",
            ingest.row_errors.len() - MAX_ROW_ERRORS_SHOWN
        ));
    }

    out.push('\n');
    out
}

/// Format the descriptive-statistics table for the three numeric columns.
pub fn format_describe(report: &DescribeReport) -> String {
    let cols = [
        ("units_sold", &report.units_sold),
        ("unit_price", &report.unit_price),
        ("total_revenue", &report.total_revenue),
    ];

    let mut out = String::new();
    out.push_str("=== BASIC STATISTICS ===\n");

    out.push_str(&format!(
        "{:<8} {:>14} {:>14} {:>14}\n",
        "", cols[0].0, cols[1].0, cols[2].0
    ));

    let int_row = |label: &str, f: &dyn Fn(&ColumnSummary) -> usize| {
        format!(
            "{:<8} {:>14} {:>14} {:>14}\n",
            label,
            f(cols[0].1),
            f(cols[1].1),
            f(cols[2].1)
        )
    };
    let val_row = |label: &str, f: &dyn Fn(&ColumnSummary) -> Option<f64>| {
        format!(
            "{:<8} {:>14} {:>14} {:>14}\n",
            label,
            fmt_opt(f(cols[0].1)),
            fmt_opt(f(cols[1].1)),
            fmt_opt(f(cols[2].1))
        )
    };

    out.push_str(&int_row("count", &|s| s.count));
    out.push_str(&int_row("missing", &|s| s.missing));
    out.push_str(&val_row("mean", &|s| s.mean));
    out.push_str(&val_row("std", &|s| s.std_dev));
    out.push_str(&val_row("min", &|s| s.min));
    out.push_str(&val_row("25%", &|s| s.p25));
    out.push_str(&val_row("50%", &|s| s.median));
    out.push_str(&val_row("75%", &|s| s.p75));
    out.push_str(&val_row("max", &|s| s.max));

    out
}

/// Format a ranked aggregate table, in the order received (no re-sorting).
pub fn format_aggregate(key: GroupKey, groups: &[GroupTotal]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "=== REVENUE BY {} ===\n",
        key.display_name().to_ascii_uppercase()
    ));

    if groups.is_empty() {
        out.push_str("(no rows)\n");
        return out;
    }

    out.push_str(&format!(
        "{:<20} {:>14} {:>6}\n",
        key.column_name(),
        "total_revenue",
        "rows"
    ));
    out.push_str(&format!("{:-<20} {:-<14} {:-<6}\n", "", "", ""));

    for g in groups {
        out.push_str(&format!(
            "{:<20} {:>14.2} {:>6}\n",
            truncate(&g.key, 20),
            g.total_revenue,
            g.rows
        ));
    }

    out
}

fn fmt_opt(v: Option<f64>) -> String {
    match v {
        Some(x) => format!("{x:.2}"),
        None => "n/a".to_string(),
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out = String::new();
    for (i, ch) in s.chars().enumerate() {
        if i + 1 >= max {
            break;
        }
        out.push(ch);
    }
    out.push('.');
    out
}
