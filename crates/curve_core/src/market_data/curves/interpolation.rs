//! Interpolation methods for the discount curve.

use std::fmt;
use std::str::FromStr;

use crate::math::interpolators::{
    CubicSplineInterpolator, Interpolator, Knots, LinearInterpolator,
};
use crate::types::InterpolationError;

/// How a [`DiscountCurve`](super::DiscountCurve) fills the gaps between anchors.
///
/// Every method reproduces the anchor factors exactly. The zero-rate methods
/// work on continuous zero rates measured from the first anchor; that anchor
/// carries the rate of the second one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Interpolation {
    /// Linear in `ln P`: piecewise constant forward rates.
    #[default]
    LogLinearDiscount,
    /// Linear in the continuous zero rate.
    LinearZero,
    /// Zero rate held at the earlier anchor's value until the next anchor.
    StepZero,
    /// Natural cubic spline through the continuous zero rates. Two anchors
    /// fall back to [`LinearZero`](Interpolation::LinearZero).
    CubicZero,
}

impl Interpolation {
    /// Returns the canonical name.
    pub fn name(&self) -> &'static str {
        match self {
            Interpolation::LogLinearDiscount => "log-linear",
            Interpolation::LinearZero => "linear-zero",
            Interpolation::StepZero => "step-zero",
            Interpolation::CubicZero => "cubic-zero",
        }
    }
}

impl FromStr for Interpolation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['_', '-', ' '], "").as_str() {
            "loglinear" | "loglineardiscount" | "logdiscount" => {
                Ok(Interpolation::LogLinearDiscount)
            }
            "linearzero" | "linear" => Ok(Interpolation::LinearZero),
            "stepzero" | "step" | "stepforward" => Ok(Interpolation::StepZero),
            "cubiczero" | "cubic" | "cubicspline" => Ok(Interpolation::CubicZero),
            _ => Err(format!("Unknown interpolation method: {}", s)),
        }
    }
}

impl fmt::Display for Interpolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Zero-rate interpolant captured at build time.
#[derive(Debug, Clone)]
pub(super) enum ZeroShape {
    Linear(LinearInterpolator<f64>),
    Step(Knots<f64>),
    Cubic(CubicSplineInterpolator<f64>),
}

impl ZeroShape {
    /// Builds the zero-rate interpolant over day `offsets` (first one zero).
    ///
    /// `Ok(None)` for [`Interpolation::LogLinearDiscount`], which works on
    /// the discount factors directly.
    pub(super) fn build(
        method: Interpolation,
        offsets: &[f64],
        discounts: &[f64],
    ) -> Result<Option<Self>, InterpolationError> {
        let knots = match method {
            Interpolation::LogLinearDiscount => return Ok(None),
            _ => zero_knots(offsets, discounts)?,
        };

        let shape = match method {
            Interpolation::StepZero => ZeroShape::Step(knots),
            Interpolation::CubicZero
                if knots.len() >= CubicSplineInterpolator::<f64>::MIN_POINTS =>
            {
                ZeroShape::Cubic(CubicSplineInterpolator::from_knots(knots)?)
            }
            _ => ZeroShape::Linear(LinearInterpolator::from_knots(knots)),
        };
        Ok(Some(shape))
    }

    /// Continuous zero rate per day at offset `x` inside the anchor range.
    pub(super) fn zero_at(&self, x: f64) -> f64 {
        match self {
            ZeroShape::Linear(interp) => interp.extrapolate(x),
            ZeroShape::Step(knots) => {
                let pos = knots.xs().partition_point(|&xi| xi <= x);
                knots.ys()[pos.saturating_sub(1)]
            }
            ZeroShape::Cubic(spline) => spline.extrapolate(x),
        }
    }
}

/// `z_i = -ln(P_i / P_0) / x_i`, with `z_0 = z_1`.
fn zero_knots(offsets: &[f64], discounts: &[f64]) -> Result<Knots<f64>, InterpolationError> {
    let base = discounts.first().copied().unwrap_or(1.0);
    let mut zeros: Vec<f64> = offsets
        .iter()
        .zip(discounts)
        .skip(1)
        .map(|(&x, &df)| -(df / base).ln() / x)
        .collect();

    match zeros.first() {
        Some(&first) => zeros.insert(0, first),
        None => {
            return Err(InterpolationError::InsufficientData {
                got: offsets.len(),
                need: 2,
            })
        }
    }
    Knots::new(offsets, &zeros)
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::Interpolation;
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
    use std::str::FromStr;

    impl Serialize for Interpolation {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_str(self.name())
        }
    }

    impl<'de> Deserialize<'de> for Interpolation {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let s = String::deserialize(deserializer)?;
            Interpolation::from_str(&s).map_err(de::Error::custom)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const OFFSETS: [f64; 4] = [0.0, 90.0, 181.0, 365.0];
    const DISCOUNTS: [f64; 4] = [1.0, 0.99, 0.975, 0.95];

    fn zero(df: f64, x: f64) -> f64 {
        -df.ln() / x
    }

    #[test]
    fn test_interpolation_parse() {
        assert_eq!(
            "log_linear".parse::<Interpolation>().unwrap(),
            Interpolation::LogLinearDiscount
        );
        assert_eq!(
            "Linear".parse::<Interpolation>().unwrap(),
            Interpolation::LinearZero
        );
        assert_eq!(
            "step-forward".parse::<Interpolation>().unwrap(),
            Interpolation::StepZero
        );
        assert_eq!(
            "CUBIC_SPLINE".parse::<Interpolation>().unwrap(),
            Interpolation::CubicZero
        );
        assert!("hybrid".parse::<Interpolation>().is_err());
        assert_eq!(Interpolation::default().to_string(), "log-linear");
    }

    #[test]
    fn test_log_linear_builds_no_shape() {
        let shape = ZeroShape::build(Interpolation::LogLinearDiscount, &OFFSETS, &DISCOUNTS);
        assert!(matches!(shape, Ok(None)));
    }

    #[test]
    fn test_zero_knots_first_takes_second() {
        let knots = zero_knots(&OFFSETS, &DISCOUNTS).unwrap();
        assert_eq!(knots.ys()[0], knots.ys()[1]);
        assert_relative_eq!(knots.ys()[3], zero(0.95, 365.0), epsilon = 1e-15);
    }

    #[test]
    fn test_zero_knots_relative_to_first_factor() {
        let knots = zero_knots(&[0.0, 100.0], &[0.98, 0.98 * 0.99]).unwrap();
        assert_relative_eq!(knots.ys()[1], zero(0.99, 100.0), epsilon = 1e-15);
    }

    #[test]
    fn test_step_holds_earlier_rate() {
        let shape = ZeroShape::build(Interpolation::StepZero, &OFFSETS, &DISCOUNTS)
            .unwrap()
            .unwrap();
        assert_relative_eq!(shape.zero_at(100.0), zero(0.99, 90.0), epsilon = 1e-15);
        assert_relative_eq!(shape.zero_at(180.0), zero(0.99, 90.0), epsilon = 1e-15);
        assert_relative_eq!(shape.zero_at(181.0), zero(0.975, 181.0), epsilon = 1e-15);
        assert_relative_eq!(shape.zero_at(365.0), zero(0.95, 365.0), epsilon = 1e-15);
    }

    #[test]
    fn test_cubic_falls_back_to_linear_on_two_anchors() {
        let shape = ZeroShape::build(Interpolation::CubicZero, &[0.0, 365.0], &[1.0, 0.95])
            .unwrap()
            .unwrap();
        assert!(matches!(shape, ZeroShape::Linear(_)));

        let shape = ZeroShape::build(Interpolation::CubicZero, &OFFSETS, &DISCOUNTS)
            .unwrap()
            .unwrap();
        assert!(matches!(shape, ZeroShape::Cubic(_)));
    }
}
