//! Column summaries over the enriched table.
//!
//! Statistics are computed over the non-missing values of each column.
//! The standard deviation is the sample convention (divisor `n - 1`), so a
//! column needs at least two non-missing values for a defined `std`; value
//! statistics of an all-missing column are `None` rather than an error.

use serde::{Deserialize, Serialize};

use crate::domain::EnrichedRecord;
use crate::stats::quantile::quantile;

/// Seven-number summary for one numeric column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnSummary {
    /// Number of non-missing values.
    pub count: usize,
    /// Number of missing values (`count + missing` == total row count).
    pub missing: usize,
    pub mean: Option<f64>,
    /// Sample standard deviation (divisor `n - 1`).
    pub std_dev: Option<f64>,
    pub min: Option<f64>,
    pub p25: Option<f64>,
    pub median: Option<f64>,
    pub p75: Option<f64>,
    pub max: Option<f64>,
}

/// Summaries for the three numeric columns of the enriched table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DescribeReport {
    pub units_sold: ColumnSummary,
    pub unit_price: ColumnSummary,
    pub total_revenue: ColumnSummary,
}

/// Compute summaries for `units_sold`, `unit_price`, and `total_revenue`.
pub fn describe(rows: &[EnrichedRecord]) -> DescribeReport {
    let n = rows.len();
    DescribeReport {
        units_sold: summarize_column(n, rows.iter().filter_map(|r| r.record.units_sold.map(|u| u as f64))),
        unit_price: summarize_column(n, rows.iter().filter_map(|r| r.record.unit_price)),
        total_revenue: summarize_column(n, rows.iter().filter_map(|r| r.total_revenue)),
    }
}

/// Summarize one column given the total row count and its non-missing values.
pub fn summarize_column(total_rows: usize, values: impl Iterator<Item = f64>) -> ColumnSummary {
    let mut sorted: Vec<f64> = values.collect();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let count = sorted.len();
    let missing = total_rows.saturating_sub(count);

    let mean = if count > 0 {
        Some(sorted.iter().sum::<f64>() / count as f64)
    } else {
        None
    };

    // Two-pass sample variance: simple and numerically stable enough for
    // bounded in-memory tables.
    let std_dev = match (mean, count) {
        (Some(m), n) if n >= 2 => {
            let ss: f64 = sorted.iter().map(|v| (v - m) * (v - m)).sum();
            Some((ss / (n as f64 - 1.0)).sqrt())
        }
        _ => None,
    };

    ColumnSummary {
        count,
        missing,
        mean,
        std_dev,
        min: sorted.first().copied(),
        p25: quantile(&sorted, 0.25),
        median: quantile(&sorted, 0.5),
        p75: quantile(&sorted, 0.75),
        max: sorted.last().copied(),
    }
}
