//! Check command implementation
//!
//! Prints the resolved configuration and, given an anchor file, verifies
//! that it builds into a curve.

use serde::Serialize;
use std::io::{self, Write};
use std::path::Path;
use tracing::info;

use crate::commands::load_discount_curve;
use crate::config::CliConfig;
use crate::output::{write_rows, TableRow};
use crate::Result;

#[derive(Debug, Serialize)]
struct SettingRow {
    setting: &'static str,
    value: String,
}

impl TableRow for SettingRow {
    fn headers() -> &'static [&'static str] {
        &["setting", "value"]
    }

    fn cells(&self) -> Vec<String> {
        vec![self.setting.to_string(), self.value.clone()]
    }
}

fn setting(setting: &'static str, value: impl ToString) -> SettingRow {
    SettingRow {
        setting,
        value: value.to_string(),
    }
}

/// Run the check command
pub fn run(config: &CliConfig, points: Option<&Path>) -> Result<()> {
    let stdout = io::stdout();
    execute(config, points, &mut stdout.lock())
}

/// Writes the effective settings, plus curve facts when `points` is given.
pub fn execute<W: Write>(config: &CliConfig, points: Option<&Path>, out: &mut W) -> Result<()> {
    info!("Checking configuration");

    let mut rows = vec![
        setting("log_level", config.log_level),
        setting("format", config.format),
        setting("day_count", config.day_count),
        setting("compounding", config.compounding),
        setting("frequency", config.frequency),
        setting("extrapolation", config.extrapolation),
        setting("interpolation", config.interpolation),
    ];

    if let Some(path) = points {
        let curve = load_discount_curve(path, config)?;
        rows.push(setting("anchors", curve.point_count()));
        rows.push(setting("reference_date", curve.reference_date()?));
        rows.push(setting("max_date", curve.max_date()?));
    }

    write_rows(out, config.format, &rows)?;
    info!("Check complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::fixtures::{csv_file, discount_csv};
    use crate::CliError;
    use curve_core::market_data::CurveError;

    #[test]
    fn test_settings_only() {
        let mut out = Vec::new();
        execute(&CliConfig::default(), None, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 9);
        assert!(text.contains("ACT/360"));
        assert!(text.contains("flat-forward"));
        assert!(text.contains("log-linear"));
        assert!(!text.contains("anchors"));
    }

    #[test]
    fn test_with_curve() {
        let file = discount_csv();
        let mut out = Vec::new();
        execute(&CliConfig::default(), Some(file.path()), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("anchors"));
        assert!(text.contains("2025-01-03"));
        assert!(text.contains("2028-01-04"));
    }

    #[test]
    fn test_invalid_discount_factor_fails() {
        let file = csv_file("date,discount_factor\n2025-01-03,1.0\n2025-07-03,0.0\n");
        let err = execute(&CliConfig::default(), Some(file.path()), &mut Vec::new()).unwrap_err();
        assert!(matches!(
            err,
            CliError::Curve(CurveError::InvalidDiscountFactor { .. })
        ));
    }
}
