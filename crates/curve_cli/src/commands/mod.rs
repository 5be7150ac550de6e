//! CLI command implementations
//!
//! Each command module provides a `run` function that writes to stdout and
//! an `execute` function that writes to any `io::Write`.

use curve_core::market_data::DiscountCurve;
use std::path::Path;
use tracing::info;

use crate::config::CliConfig;
use crate::{loader, Result};

pub mod check;
pub mod discount;
pub mod forward;
pub mod nodes;
pub mod rate;

/// Loads anchors from `path` and builds a discount curve under the
/// configured day count, interpolation and extrapolation policy.
pub(crate) fn load_discount_curve(path: &Path, config: &CliConfig) -> Result<DiscountCurve> {
    let points = loader::load_discount_points(path)?;
    let mut curve = DiscountCurve::from_points(points)
        .with_day_count(config.day_count)
        .with_extrapolation(config.extrapolation)
        .with_interpolation(config.interpolation);
    curve.build()?;

    info!(
        "Built discount curve: {} anchors, {} to {}, {} interpolation",
        curve.point_count(),
        curve.reference_date()?,
        curve.max_date()?,
        curve.interpolation()
    );
    Ok(curve)
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::CliError;
    use curve_core::market_data::CurveError;

    #[test]
    fn test_load_discount_curve_applies_config() {
        let file = fixtures::discount_csv();
        let config = CliConfig {
            day_count: curve_core::types::DayCountConvention::Actual365Fixed,
            interpolation: curve_core::market_data::Interpolation::CubicZero,
            ..Default::default()
        };
        let curve = load_discount_curve(file.path(), &config).unwrap();
        assert!(curve.is_built());
        assert_eq!(curve.point_count(), 4);
        assert_eq!(curve.day_count(), config.day_count);
        assert_eq!(curve.interpolation(), config.interpolation);
    }

    #[test]
    fn test_load_discount_curve_reports_build_errors() {
        let file = fixtures::csv_file("date,discount_factor\n2025-01-03,1.0\n");
        let err = load_discount_curve(file.path(), &CliConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            CliError::Curve(CurveError::InsufficientPoints { got: 1, .. })
        ));
    }
}
