//! Log-linear interpolation (linear in `ln y`).

use super::{Interpolator, Knots, LinearInterpolator};
use crate::types::InterpolationError;
use num_traits::Float;

/// Piecewise log-linear interpolator.
///
/// Interpolates `ln(y)` linearly and exponentiates the result:
///
/// ```text
/// α = (x - x0) / (x1 - x0)
/// y = exp((1 - α) · ln y0 + α · ln y1)
/// ```
///
/// For discount factors this is the constant-forward-rate assumption
/// between knots. All y-values must be strictly positive.
///
/// # Example
///
/// ```
/// use curve_core::math::interpolators::{Interpolator, LogLinearInterpolator};
///
/// let interp = LogLinearInterpolator::<f64>::new(&[0.0, 2.0], &[1.0, 0.81]).unwrap();
///
/// // Geometric mean at the midpoint
/// let y = interp.interpolate(1.0).unwrap();
/// assert!((y - 0.9).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct LogLinearInterpolator<T: Float> {
    values: Knots<T>,
    log_values: LinearInterpolator<T>,
}

impl<T: Float> LogLinearInterpolator<T> {
    /// Construct from x and y data points.
    ///
    /// # Returns
    ///
    /// * `Ok(LogLinearInterpolator)` - Successfully constructed interpolator
    /// * `Err(InterpolationError::NonPositiveValue)` - A y-value is `<= 0` or not finite
    /// * any error of [`Knots::new`]
    pub fn new(xs: &[T], ys: &[T]) -> Result<Self, InterpolationError> {
        Self::from_knots(Knots::new(xs, ys)?)
    }

    /// Wrap an existing knot set, validating positivity of the y-values.
    pub fn from_knots(knots: Knots<T>) -> Result<Self, InterpolationError> {
        if let Some((index, &value)) = knots
            .ys()
            .iter()
            .enumerate()
            .find(|&(_, &y)| !y.is_finite() || y <= T::zero())
        {
            return Err(InterpolationError::NonPositiveValue {
                index,
                value: value.to_f64().unwrap_or(f64::NAN),
            });
        }

        let log_values = LinearInterpolator::from_knots(knots.map_values(T::ln));
        Ok(Self {
            values: knots,
            log_values,
        })
    }

    /// Returns the sorted x-coordinates.
    #[inline]
    pub fn xs(&self) -> &[T] {
        self.values.xs()
    }

    /// Returns the y-values (in sorted x order).
    #[inline]
    pub fn ys(&self) -> &[T] {
        self.values.ys()
    }

    /// Returns the number of data points.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false for a constructed interpolator.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<T: Float> Interpolator<T> for LogLinearInterpolator<T> {
    fn interpolate(&self, x: T) -> Result<T, InterpolationError> {
        self.log_values.interpolate(x).map(T::exp)
    }

    /// Continues the log-linear slope of the edge segment outside the domain.
    #[inline]
    fn extrapolate(&self, x: T) -> T {
        self.log_values.extrapolate(x).exp()
    }

    #[inline]
    fn domain(&self) -> (T, T) {
        self.values.domain()
    }
}
