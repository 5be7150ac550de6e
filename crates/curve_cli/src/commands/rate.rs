//! Rate command implementation
//!
//! Loads a time-keyed zero-rate curve and reports interpolated rates and
//! continuous discount factors.

use curve_core::market_data::RateCurve;
use serde::Serialize;
use std::io::{self, Write};
use std::path::Path;
use tracing::{info, warn};

use crate::config::CliConfig;
use crate::output::{fmt_discount, fmt_rate, write_rows, TableRow};
use crate::{loader, Result};

#[derive(Debug, Serialize)]
struct RateRow {
    time: f64,
    rate: f64,
    discount_factor: f64,
}

impl TableRow for RateRow {
    fn headers() -> &'static [&'static str] {
        &["time", "rate", "discount_factor"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            format!("{:.6}", self.time),
            fmt_rate(Some(self.rate)),
            fmt_discount(self.discount_factor),
        ]
    }
}

/// Run the rate command
pub fn run(points: &Path, times: &[f64], config: &CliConfig) -> Result<()> {
    let stdout = io::stdout();
    execute(points, times, config, &mut stdout.lock())
}

/// Writes one row per query time to `out`.
///
/// Without query times the curve is evaluated at its own sample times.
pub fn execute<W: Write>(
    points: &Path,
    times: &[f64],
    config: &CliConfig,
    out: &mut W,
) -> Result<()> {
    let samples = loader::load_rate_points(points)?;
    let curve = RateCurve::from_points(samples.iter().map(|p| (p.time, p.rate)))?;
    info!("Loaded rate curve with {} points", curve.point_count());
    if curve.point_count() == 0 {
        warn!("Rate curve is empty, every rate reads as zero");
    }

    let query: Vec<f64> = if times.is_empty() {
        curve.points().iter().map(|p| p.time).collect()
    } else {
        times.to_vec()
    };

    let rows: Vec<RateRow> = query
        .into_iter()
        .map(|time| RateRow {
            time,
            rate: curve.interpolate_rate(time),
            discount_factor: curve.discount(time),
        })
        .collect();

    write_rows(out, config.format, &rows)
}
