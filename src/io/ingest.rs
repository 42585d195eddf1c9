//! CSV ingest and normalization.
//!
//! This module is responsible for turning a sales CSV into a clean sequence
//! of [`SalesRecord`]s that are safe to enrich and aggregate.
//!
//! Design goals:
//! - **Strict schema** for required columns (clear errors + stable exit codes)
//! - **Row-level validation** (skip bad rows, but report what happened)
//! - **Missing-value tolerance**: empty numeric cells become `None` and
//!   propagate, they do not fail the run
//! - **Separation of concerns**: no aggregation logic here

use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

use chrono::NaiveDate;
use csv::StringRecord;

use crate::domain::SalesRecord;
use crate::error::AppError;

/// Columns that must be present in the source header.
const REQUIRED_COLUMNS: [&str; 5] = ["date", "region", "product", "units_sold", "unit_price"];

/// A row-level error encountered during ingest.
#[derive(Debug, Clone)]
pub struct RowError {
    pub line: usize,
    pub message: String,
}

/// Ingest output: parsed rows + row errors + counters.
#[derive(Debug, Clone)]
pub struct IngestedData {
    pub rows: Vec<SalesRecord>,
    pub row_errors: Vec<RowError>,
    pub rows_read: usize,
    pub rows_used: usize,
}

/// Load a sales table from a CSV file.
///
/// Fails with `SourceNotFound` if the path does not resolve to a readable
/// file, and with `MissingColumn` if a required header is absent. Malformed
/// rows are skipped and reported via [`IngestedData::row_errors`].
pub fn load_sales_csv(path: &Path) -> Result<IngestedData, AppError> {
    if !path.is_file() {
        return Err(AppError::source_not_found(format!(
            "CSV file not found at '{}'",
            path.display()
        )));
    }

    let file = File::open(path).map_err(|e| {
        AppError::source_not_found(format!("Failed to open CSV '{}': {e}", path.display()))
    })?;

    read_sales_rows(file)
}

/// Parse sales rows from any reader (split out so tests can feed strings).
pub fn read_sales_rows<R: std::io::Read>(input: R) -> Result<IngestedData, AppError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(input);

    let headers = reader
        .headers()
        .map_err(|e| AppError::source_not_found(format!("Failed to read CSV headers: {e}")))?
        .clone();

    let header_map = build_header_map(&headers);
    ensure_required_columns_exist(&header_map)?;

    let mut rows = Vec::new();
    let mut row_errors = Vec::new();
    let mut rows_read = 0usize;

    for (idx, result) in reader.records().enumerate() {
        // +2 because:
        // - records() starts at line 1 after headers
        // - CSV is 1-based line numbers
        let line = idx + 2;
        rows_read += 1;

        let record = match result {
            Ok(r) => r,
            Err(e) => {
                row_errors.push(RowError {
                    line,
                    message: format!("CSV parse error: {e}"),
                });
                continue;
            }
        };

        match parse_row(&record, &header_map) {
            Ok(row) => rows.push(row),
            Err(e) => row_errors.push(RowError { line, message: e }),
        }
    }

    let rows_used = rows.len();

    Ok(IngestedData {
        rows,
        row_errors,
        rows_read,
        rows_used,
    })
}

fn build_header_map(headers: &StringRecord) -> HashMap<String, usize> {
    headers
        .iter()
        .enumerate()
        .map(|(idx, name)| (normalize_header_name(name), idx))
        .collect()
}

fn normalize_header_name(name: &str) -> String {
    // Excel and other tools sometimes emit UTF-8 CSVs with a BOM prefix on the
    // first header (e.g. "﻿date"). If we don't strip it, schema validation
    // will incorrectly report missing columns.
    let name = name.trim().trim_start_matches('\u{feff}');
    name.to_ascii_lowercase()
}

fn ensure_required_columns_exist(header_map: &HashMap<String, usize>) -> Result<(), AppError> {
    for name in REQUIRED_COLUMNS {
        if !header_map.contains_key(name) {
            return Err(AppError::missing_column(format!(
                "Missing required column: `{name}`"
            )));
        }
    }
    Ok(())
}

fn parse_row(record: &StringRecord, header_map: &HashMap<String, usize>) -> Result<SalesRecord, String> {
    let date = parse_date(get_required(record, header_map, "date")?)?;
    let region = get_required(record, header_map, "region")?.to_string();
    let product = get_required(record, header_map, "product")?.to_string();

    let units_sold = parse_opt_u64(get_optional(record, header_map, "units_sold"));
    let unit_price = parse_opt_f64(get_optional(record, header_map, "unit_price"));

    Ok(SalesRecord {
        date,
        region,
        product,
        units_sold,
        unit_price,
    })
}

fn get_required<'a>(
    record: &'a StringRecord,
    header_map: &HashMap<String, usize>,
    name: &str,
) -> Result<&'a str, String> {
    let idx = header_map
        .get(name)
        .ok_or_else(|| format!("Missing required column: `{name}`"))?;
    record
        .get(*idx)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| format!("Missing required value: `{name}`"))
}

fn get_optional<'a>(record: &'a StringRecord, header_map: &HashMap<String, usize>, name: &str) -> Option<&'a str> {
    let idx = header_map.get(name)?;
    record.get(*idx).map(str::trim).filter(|s| !s.is_empty())
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    // We recommend ISO dates (`YYYY-MM-DD`), but in practice sales exports
    // often use `DD/MM/YYYY` or `DD-MM-YYYY`. We accept a small set of common
    // formats to reduce friction while keeping parsing deterministic.
    const FMTS: [&str; 4] = ["%Y-%m-%d", "%d/%m/%Y", "%d-%m-%Y", "%Y/%m/%d"];
    for fmt in FMTS {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Ok(d);
        }
    }
    Err(format!(
        "Invalid date '{s}'. Expected one of: YYYY-MM-DD, DD/MM/YYYY, DD-MM-YYYY, YYYY/MM/DD."
    ))
}

fn parse_opt_u64(s: Option<&str>) -> Option<u64> {
    s?.parse::<u64>().ok()
}

fn parse_opt_f64(s: Option<&str>) -> Option<f64> {
    let v = s?.parse::<f64>().ok()?;
    if v.is_finite() { Some(v) } else { None }
}
