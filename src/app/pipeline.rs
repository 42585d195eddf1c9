//! Shared report pipeline used by all reporting subcommands.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! load -> enrich -> statistics -> aggregate(region) -> aggregate(product)
//!
//! The subcommands then focus on presentation (what to print or plot).

use crate::aggregate::revenue_by;
use crate::domain::{EnrichedRecord, GroupKey, GroupTotal, ReportConfig};
use crate::enrich::add_total_revenue;
use crate::error::AppError;
use crate::io::ingest::{IngestedData, load_sales_csv};
use crate::plot::histogram::{Histogram, build_histogram};
use crate::stats::{DescribeReport, describe};

/// All computed outputs of a single reporting run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub ingest: IngestedData,
    pub enriched: Vec<EnrichedRecord>,
    pub stats: DescribeReport,
    pub by_region: Vec<GroupTotal>,
    pub by_product: Vec<GroupTotal>,
    /// Units-sold frequency buckets; `None` when no row has a units value.
    pub units_hist: Option<Histogram>,
}

/// Execute the full reporting pipeline and return the computed outputs.
///
/// Every stage is a pure function over the previous stage's output; the
/// enriched table is shared read-only by statistics and both aggregations.
pub fn run_report(config: &ReportConfig) -> Result<RunOutput, AppError> {
    let ingest = load_sales_csv(&config.csv_path)?;
    let enriched = add_total_revenue(&ingest.rows);

    let stats = describe(&enriched);
    let by_region = revenue_by(&enriched, GroupKey::Region);
    let by_product = revenue_by(&enriched, GroupKey::Product);

    let units: Vec<f64> = enriched
        .iter()
        .filter_map(|r| r.record.units_sold.map(|u| u as f64))
        .collect();
    let units_hist = build_histogram(&units, config.bins);

    Ok(RunOutput {
        ingest,
        enriched,
        stats,
        by_region,
        by_product,
        units_hist,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use std::path::PathBuf;

    fn config(csv_path: PathBuf) -> ReportConfig {
        ReportConfig {
            csv_path,
            bins: 5,
            plot: false,
            plot_width: 60,
            chart_dir: None,
            export_rows: None,
            export_report: None,
        }
    }

    fn temp_csv(name: &str, body: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("sales-report-{}-{name}", std::process::id()));
        std::fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn full_pipeline_over_the_reference_scenario() {
        let path = temp_csv(
            "pipeline.csv",
            "date,region,product,units_sold,unit_price\n\
             2024-01-02,East,A,10,2.0\n\
             2024-01-03,East,B,5,4.0\n\
             2024-01-04,West,A,1,100.0\n",
        );
        let run = run_report(&config(path.clone())).unwrap();

        let revenue: Vec<f64> = run.enriched.iter().map(|r| r.total_revenue.unwrap()).collect();
        assert_eq!(revenue, vec![20.0, 20.0, 100.0]);

        assert_eq!(run.by_region[0].key, "West");
        assert!((run.by_region[0].total_revenue - 100.0).abs() < 1e-12);
        assert_eq!(run.by_region[1].key, "East");
        assert!((run.by_region[1].total_revenue - 40.0).abs() < 1e-12);

        assert_eq!(run.stats.total_revenue.count, 3);
        assert!((run.stats.total_revenue.mean.unwrap() - 140.0 / 3.0).abs() < 1e-9);

        let hist = run.units_hist.unwrap();
        assert_eq!(hist.total(), 3);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn zero_row_table_produces_empty_aggregates_and_undefined_stats() {
        let path = temp_csv("empty.csv", "date,region,product,units_sold,unit_price\n");
        let run = run_report(&config(path.clone())).unwrap();

        assert!(run.by_region.is_empty());
        assert!(run.by_product.is_empty());
        assert_eq!(run.stats.units_sold.count, 0);
        assert_eq!(run.stats.units_sold.mean, None);
        assert!(run.units_hist.is_none());

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn missing_source_aborts_before_any_computation() {
        let err = run_report(&config(PathBuf::from("no/such/file.csv"))).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::SourceNotFound);
    }

    #[test]
    fn missing_required_column_aborts_the_run() {
        let path = temp_csv(
            "nocol.csv",
            "date,region,product,units_sold\n2024-01-02,East,A,10\n",
        );
        let err = run_report(&config(path.clone())).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingColumn);
        let _ = std::fs::remove_file(&path);
    }
}
