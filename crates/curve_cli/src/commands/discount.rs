//! Discount command implementation
//!
//! Reports discount factors and zero rates at arbitrary dates.

use curve_core::types::Date;
use serde::Serialize;
use std::io::{self, Write};
use std::path::Path;
use tracing::info;

use crate::commands::load_discount_curve;
use crate::config::CliConfig;
use crate::output::{fmt_discount, fmt_rate, write_rows, TableRow};
use crate::{CliError, Result};

#[derive(Debug, Serialize)]
struct DiscountRow {
    date: Date,
    time: f64,
    discount_factor: f64,
    zero_rate: Option<f64>,
}

impl TableRow for DiscountRow {
    fn headers() -> &'static [&'static str] {
        &["date", "time", "discount_factor", "zero_rate"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.date.to_string(),
            format!("{:.6}", self.time),
            fmt_discount(self.discount_factor),
            fmt_rate(self.zero_rate),
        ]
    }
}

/// Run the discount command
pub fn run(points: &Path, dates: &[Date], config: &CliConfig) -> Result<()> {
    let stdout = io::stdout();
    execute(points, dates, config, &mut stdout.lock())
}

/// Writes one row per query date to `out`.
///
/// The zero rate is left empty for dates on or before the reference date.
pub fn execute<W: Write>(
    points: &Path,
    dates: &[Date],
    config: &CliConfig,
    out: &mut W,
) -> Result<()> {
    if dates.is_empty() {
        return Err(CliError::InvalidArgument(
            "at least one --date is required".to_string(),
        ));
    }

    info!("Querying {} dates against {}", dates.len(), points.display());
    let curve = load_discount_curve(points, config)?;
    let reference = curve.reference_date()?;

    let rows = dates
        .iter()
        .map(|&date| -> Result<DiscountRow> {
            let time = config.day_count.year_fraction(reference, date);
            let zero_rate = if time > 0.0 {
                Some(curve.zero_rate(date, config.compounding, config.frequency)?)
            } else {
                None
            };
            Ok(DiscountRow {
                date,
                time,
                discount_factor: curve.discount(date)?,
                zero_rate,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    write_rows(out, config.format, &rows)
}
