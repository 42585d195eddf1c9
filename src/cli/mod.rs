//! Command-line parsing for the sales reporting tool.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the pipeline/statistics code.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use crate::domain::GroupKey;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "sales", version, about = "Sales revenue reporting pipeline")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Full report: statistics, ranked aggregates, and charts.
    Report(ReportArgs),
    /// Print summary statistics only.
    Stats(ReportArgs),
    /// Print one ranked aggregate only (useful for scripting).
    Rank(RankArgs),
    /// Generate a synthetic sample sales CSV.
    Gen(GenArgs),
}

/// Common options for reporting commands.
#[derive(Debug, Parser, Clone)]
pub struct ReportArgs {
    /// Path to the sales CSV.
    #[arg(long, value_name = "CSV", default_value = "data/sample_sales.csv")]
    pub csv: PathBuf,

    /// Bucket count for the units-sold histogram.
    #[arg(long, default_value_t = 5)]
    pub bins: usize,

    /// Render terminal charts (enabled by default).
    #[arg(long, default_value_t = true)]
    pub plot: bool,

    /// Disable the terminal charts.
    #[arg(long)]
    pub no_plot: bool,

    /// Terminal chart width (columns used for the longest bar).
    #[arg(long, default_value_t = 60)]
    pub width: usize,

    /// Write SVG charts into this directory.
    #[arg(long, value_name = "DIR")]
    pub charts: Option<PathBuf>,

    /// Export enriched rows to CSV.
    #[arg(long, value_name = "CSV")]
    pub export: Option<PathBuf>,

    /// Export the full report (statistics + aggregates) to JSON.
    #[arg(long = "export-report", value_name = "JSON")]
    pub export_report: Option<PathBuf>,
}

/// Options for `sales rank`.
#[derive(Debug, Parser)]
pub struct RankArgs {
    #[command(flatten)]
    pub report: ReportArgs,

    /// Grouping key for the aggregate.
    #[arg(long, value_enum, default_value_t = GroupKey::Region)]
    pub by: GroupKey,
}

/// Options for `sales gen`.
#[derive(Debug, Parser)]
pub struct GenArgs {
    /// Output CSV path.
    #[arg(long, value_name = "CSV", default_value = "data/sample_sales.csv")]
    pub out: PathBuf,

    /// Number of rows to generate.
    #[arg(long, default_value_t = 200)]
    pub rows: usize,

    /// Random seed (same seed, same rows).
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// First calendar date of the generated range.
    #[arg(long, default_value = "2024-01-01")]
    pub start_date: NaiveDate,

    /// Number of days covered by the generated range.
    #[arg(long, default_value_t = 365)]
    pub days: u32,
}
