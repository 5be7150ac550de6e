//! Forward command implementations
//!
//! `forward` reports the rate implied between pairs of dates, `daily` the
//! overnight forward for every calendar day of a window.

use curve_core::types::Date;
use serde::Serialize;
use std::io::{self, Write};
use std::path::Path;
use std::str::FromStr;
use tracing::info;

use crate::commands::load_discount_curve;
use crate::config::CliConfig;
use crate::output::{fmt_rate, write_rows, TableRow};
use crate::{CliError, Result};

/// A `START:END` pair of dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Period {
    pub start: Date,
    pub end: Date,
}

impl FromStr for Period {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self> {
        let (start, end) = s
            .split_once(':')
            .ok_or_else(|| CliError::InvalidArgument(format!("expected START:END, got {}", s)))?;
        Ok(Period {
            start: start.parse()?,
            end: end.parse()?,
        })
    }
}

#[derive(Debug, Serialize)]
struct ForwardRow {
    start: Date,
    end: Date,
    tau: f64,
    forward_rate: f64,
}

impl TableRow for ForwardRow {
    fn headers() -> &'static [&'static str] {
        &["start", "end", "tau", "forward_rate"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.start.to_string(),
            self.end.to_string(),
            format!("{:.6}", self.tau),
            fmt_rate(Some(self.forward_rate)),
        ]
    }
}

#[derive(Debug, Serialize)]
struct DailyRow {
    date: Date,
    forward_rate: f64,
}

impl TableRow for DailyRow {
    fn headers() -> &'static [&'static str] {
        &["date", "forward_rate"]
    }

    fn cells(&self) -> Vec<String> {
        vec![self.date.to_string(), fmt_rate(Some(self.forward_rate))]
    }
}

/// Run the forward command
pub fn run(points: &Path, periods: &[Period], config: &CliConfig) -> Result<()> {
    let stdout = io::stdout();
    execute(points, periods, config, &mut stdout.lock())
}

/// Writes one forward rate per period to `out`.
pub fn execute<W: Write>(
    points: &Path,
    periods: &[Period],
    config: &CliConfig,
    out: &mut W,
) -> Result<()> {
    if periods.is_empty() {
        return Err(CliError::InvalidArgument(
            "at least one --period is required".to_string(),
        ));
    }

    info!("Querying {} forward periods", periods.len());
    let curve = load_discount_curve(points, config)?;

    let rows = periods
        .iter()
        .map(|p| -> Result<ForwardRow> {
            Ok(ForwardRow {
                start: p.start,
                end: p.end,
                tau: config.day_count.year_fraction(p.start, p.end),
                forward_rate: curve.forward_rate(
                    p.start,
                    p.end,
                    config.compounding,
                    config.frequency,
                )?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    write_rows(out, config.format, &rows)
}

/// Run the daily command
pub fn run_daily(points: &Path, window: Period, config: &CliConfig) -> Result<()> {
    let stdout = io::stdout();
    execute_daily(points, window, config, &mut stdout.lock())
}

/// Writes the overnight forward for each day in `[window.start, window.end)`.
pub fn execute_daily<W: Write>(
    points: &Path,
    window: Period,
    config: &CliConfig,
    out: &mut W,
) -> Result<()> {
    info!("Daily forwards from {} to {}", window.start, window.end);
    let curve = load_discount_curve(points, config)?;

    let rows: Vec<DailyRow> = curve
        .daily_forward_rates(
            window.start,
            window.end,
            config.compounding,
            config.frequency,
        )?
        .into_iter()
        .map(|(date, forward_rate)| DailyRow { date, forward_rate })
        .collect();

    write_rows(out, config.format, &rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::fixtures::{discount_csv, json_rows};
    use crate::output::OutputFormat;
    use approx::assert_relative_eq;
    use curve_core::market_data::CurveError;

    fn json_config() -> CliConfig {
        CliConfig {
            format: OutputFormat::Json,
            ..Default::default()
        }
    }

    #[test]
    fn test_period_parsing() {
        let p: Period = "2025-01-03:2025-07-03".parse().unwrap();
        assert_eq!(p.start, Date::from_ymd(2025, 1, 3).unwrap());
        assert_eq!(p.end, Date::from_ymd(2025, 7, 3).unwrap());

        assert!(matches!(
            "2025-01-03".parse::<Period>(),
            Err(CliError::InvalidArgument(_))
        ));
        assert!(matches!(
            "2025-01-03:July".parse::<Period>(),
            Err(CliError::Date(_))
        ));
    }

    #[test]
    fn test_forward_between_anchors() {
        let file = discount_csv();
        let mut out = Vec::new();
        let period: Period = "2025-07-03:2026-01-05".parse().unwrap();
        execute(file.path(), &[period], &json_config(), &mut out).unwrap();

        let rows = json_rows(out);
        // 186 days ACT/360
        let tau = 186.0 / 360.0;
        assert_relative_eq!(rows[0]["tau"].as_f64().unwrap(), tau, max_relative = 1e-12);
        assert_relative_eq!(
            rows[0]["forward_rate"].as_f64().unwrap(),
            (0.98f64 / 0.96).ln() / tau,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_forward_rejects_reversed_period() {
        let file = discount_csv();
        let period: Period = "2026-01-05:2025-07-03".parse().unwrap();
        let err = execute(file.path(), &[period], &json_config(), &mut Vec::new()).unwrap_err();
        assert!(matches!(
            err,
            CliError::Curve(CurveError::InvalidDateOrder { .. })
        ));
    }

    #[test]
    fn test_daily_window() {
        let file = discount_csv();
        let mut out = Vec::new();
        let window: Period = "2025-02-01:2025-02-08".parse().unwrap();
        execute_daily(file.path(), window, &json_config(), &mut out).unwrap();

        let rows = json_rows(out);
        assert_eq!(rows.len(), 7);
        assert_eq!(rows[0]["date"], "2025-02-01");
        assert_eq!(rows[6]["date"], "2025-02-07");

        // Inside one log-linear segment every overnight forward is the same.
        let first = rows[0]["forward_rate"].as_f64().unwrap();
        for row in &rows {
            assert_relative_eq!(row["forward_rate"].as_f64().unwrap(), first, max_relative = 1e-9);
        }
    }
}
