//! Column derivation: attach `total_revenue` to each sales record.
//!
//! The derivation is element-wise and row-independent; the input slice is
//! never mutated. A missing operand yields a missing result rather than an
//! error, mirroring how the rest of the pipeline treats missing values.

use crate::domain::{EnrichedRecord, SalesRecord};

/// Derive `total_revenue = units_sold * unit_price` for every row.
pub fn add_total_revenue(rows: &[SalesRecord]) -> Vec<EnrichedRecord> {
    rows.iter()
        .map(|r| EnrichedRecord {
            record: r.clone(),
            total_revenue: total_revenue(r),
        })
        .collect()
}

/// Recompute the derived column for already-enriched rows.
///
/// `total_revenue` is a pure function of the two source columns, so
/// re-deriving always reproduces the same values (no drift).
pub fn rederive(rows: &[EnrichedRecord]) -> Vec<EnrichedRecord> {
    rows.iter()
        .map(|r| EnrichedRecord {
            record: r.record.clone(),
            total_revenue: total_revenue(&r.record),
        })
        .collect()
}

fn total_revenue(r: &SalesRecord) -> Option<f64> {
    match (r.units_sold, r.unit_price) {
        (Some(units), Some(price)) => Some(units as f64 * price),
        _ => None,
    }
}
