//! CSV loaders for curve anchors.
//!
//! Discount anchors are read from `date,discount_factor` files and rate
//! samples from `time,rate` files. Fields are trimmed and a header row is
//! required.

use curve_core::market_data::RatePoint;
use curve_core::types::Date;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

use crate::{CliError, Result};

#[derive(Debug, Deserialize)]
struct DiscountRecord {
    date: Date,
    #[serde(alias = "df")]
    discount_factor: f64,
}

fn reader(path: &Path) -> Result<csv::Reader<std::fs::File>> {
    if !path.exists() {
        return Err(CliError::FileNotFound(path.display().to_string()));
    }
    Ok(csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .from_path(path)?)
}

/// Loads `(date, discount_factor)` anchors in file order.
pub fn load_discount_points(path: &Path) -> Result<Vec<(Date, f64)>> {
    let mut points = Vec::new();
    for record in reader(path)?.deserialize() {
        let record: DiscountRecord = record?;
        points.push((record.date, record.discount_factor));
    }
    debug!("Loaded {} discount anchors from {}", points.len(), path.display());
    Ok(points)
}

/// Loads `(time, rate)` samples in file order.
pub fn load_rate_points(path: &Path) -> Result<Vec<RatePoint>> {
    let mut points = Vec::new();
    for record in reader(path)?.deserialize() {
        points.push(record?);
    }
    debug!("Loaded {} rate samples from {}", points.len(), path.display());
    Ok(points)
}
