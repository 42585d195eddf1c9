//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory during enrichment and aggregation
//! - exported to JSON/CSV
//! - reloaded later for plotting or comparisons

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// One sales transaction as read from the source CSV.
///
/// Numeric cells are optional: an empty or unparseable cell becomes `None`
/// and propagates as a missing value through derivation and aggregation
/// instead of failing the run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesRecord {
    pub date: NaiveDate,
    pub region: String,
    pub product: String,
    pub units_sold: Option<u64>,
    pub unit_price: Option<f64>,
}

/// A [`SalesRecord`] plus the derived `total_revenue` column.
///
/// `total_revenue` is only ever recomputed from `units_sold` and
/// `unit_price`; it is never set independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedRecord {
    #[serde(flatten)]
    pub record: SalesRecord,
    pub total_revenue: Option<f64>,
}

/// Categorical attribute used to partition rows for aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum GroupKey {
    Region,
    Product,
}

impl GroupKey {
    /// Column name as it appears in the source CSV and in reports.
    pub fn column_name(self) -> &'static str {
        match self {
            GroupKey::Region => "region",
            GroupKey::Product => "product",
        }
    }

    /// Human-readable label for terminal output.
    pub fn display_name(self) -> &'static str {
        match self {
            GroupKey::Region => "Region",
            GroupKey::Product => "Product",
        }
    }
}

/// Summed `total_revenue` for one group of rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupTotal {
    pub key: String,
    pub total_revenue: f64,
    /// Number of rows in the group (including rows whose revenue is missing).
    pub rows: usize,
}

/// A full run's configuration as understood by the pipeline.
///
/// This is derived from CLI flags (plus defaults).
#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub csv_path: PathBuf,
    /// Bucket count for the units-sold histogram.
    pub bins: usize,
    pub plot: bool,
    pub plot_width: usize,
    /// Directory for SVG chart output (charts skipped when `None`).
    pub chart_dir: Option<PathBuf>,
    pub export_rows: Option<PathBuf>,
    pub export_report: Option<PathBuf>,
}

/// Configuration for synthetic sample generation.
#[derive(Debug, Clone)]
pub struct GenConfig {
    pub out_path: PathBuf,
    pub rows: usize,
    pub seed: u64,
    pub start_date: NaiveDate,
    pub days: u32,
}

/// A saved report file (JSON).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportFile {
    pub tool: String,
    pub source: PathBuf,
    pub stats: crate::stats::DescribeReport,
    pub by_region: Vec<GroupTotal>,
    pub by_product: Vec<GroupTotal>,
}
