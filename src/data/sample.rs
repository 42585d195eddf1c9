//! Synthetic sales sample generation.
//!
//! Generates a deterministic sales CSV for demos and smoke tests: a fixed
//! seed always produces the same rows, so downstream reports are
//! reproducible.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use chrono::Duration;
use rand::prelude::*;
use rand::rngs::StdRng;
use rand_distr::Normal;

use crate::domain::{GenConfig, SalesRecord};
use crate::error::AppError;

const REGIONS: [&str; 4] = ["North", "South", "East", "West"];
const PRODUCTS: [&str; 4] = ["Widget", "Gadget", "Sprocket", "Gizmo"];

/// Minimum generated unit price; the Normal sample is clamped here so
/// prices stay positive.
const PRICE_FLOOR: f64 = 0.5;

/// Generate `config.rows` synthetic sales records.
pub fn generate_sample(config: &GenConfig) -> Result<Vec<SalesRecord>, AppError> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let price_dist = Normal::new(25.0, 8.0)
        .map_err(|e| AppError::render(format!("Price distribution error: {e}")))?;

    let days = i64::from(config.days.max(1));
    let mut rows = Vec::with_capacity(config.rows);

    for _ in 0..config.rows {
        let date = config.start_date + Duration::days(rng.gen_range(0..days));
        let region = REGIONS[rng.gen_range(0..REGIONS.len())];
        let product = PRODUCTS[rng.gen_range(0..PRODUCTS.len())];
        let units_sold = rng.gen_range(1..=60u64);
        let price: f64 = price_dist.sample(&mut rng);
        let unit_price = (price.max(PRICE_FLOOR) * 100.0).round() / 100.0;

        rows.push(SalesRecord {
            date,
            region: region.to_string(),
            product: product.to_string(),
            units_sold: Some(units_sold),
            unit_price: Some(unit_price),
        });
    }

    Ok(rows)
}

/// Write generated records to a CSV file in the ingest schema.
pub fn write_sample_csv(path: &Path, rows: &[SalesRecord]) -> Result<(), AppError> {
    let mut file = File::create(path).map_err(|e| {
        AppError::render(format!(
            "Failed to create sample CSV '{}': {e}",
            path.display()
        ))
    })?;

    writeln!(file, "date,region,product,units_sold,unit_price")
        .map_err(|e| AppError::render(format!("Failed to write sample CSV header: {e}")))?;

    for r in rows {
        writeln!(
            file,
            "{},{},{},{},{}",
            r.date,
            r.region,
            r.product,
            r.units_sold.map(|v| v.to_string()).unwrap_or_default(),
            r.unit_price.map(|v| format!("{v:.2}")).unwrap_or_default(),
        )
        .map_err(|e| AppError::render(format!("Failed to write sample CSV row: {e}")))?;
    }

    Ok(())
}
