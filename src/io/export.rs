//! Export enriched rows and report summaries to files.
//!
//! Exports are meant to be easy to consume in spreadsheets or downstream
//! scripts.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::domain::{EnrichedRecord, ReportFile};
use crate::error::AppError;

/// Write enriched rows (including the derived `total_revenue`) to a CSV file.
pub fn write_enriched_csv(path: &Path, rows: &[EnrichedRecord]) -> Result<(), AppError> {
    let mut file = File::create(path).map_err(|e| {
        AppError::render(format!(
            "Failed to create export CSV '{}': {e}",
            path.display()
        ))
    })?;

    writeln!(file, "date,region,product,units_sold,unit_price,total_revenue")
        .map_err(|e| AppError::render(format!("Failed to write export CSV header: {e}")))?;

    for r in rows {
        writeln!(
            file,
            "{},{},{},{},{},{}",
            r.record.date,
            r.record.region,
            r.record.product,
            r.record.units_sold.map(|v| v.to_string()).unwrap_or_default(),
            r.record.unit_price.map(|v| format!("{v:.2}")).unwrap_or_default(),
            r.total_revenue.map(|v| format!("{v:.2}")).unwrap_or_default(),
        )
        .map_err(|e| AppError::render(format!("Failed to write export CSV row: {e}")))?;
    }

    Ok(())
}

/// Write the full report (statistics + both aggregates) as JSON.
pub fn write_report_json(path: &Path, report: &ReportFile) -> Result<(), AppError> {
    let file = File::create(path).map_err(|e| {
        AppError::render(format!(
            "Failed to create report JSON '{}': {e}",
            path.display()
        ))
    })?;

    serde_json::to_writer_pretty(file, report)
        .map_err(|e| AppError::render(format!("Failed to write report JSON: {e}")))?;

    Ok(())
}
