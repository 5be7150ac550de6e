//! Core traits for interpolation.

use crate::types::InterpolationError;
use num_traits::Float;

/// Generic trait for 1D interpolation over an ordered sample set.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`, `f32`)
///
/// # Contract
///
/// - `interpolate(x)` returns `Ok(y)` if `x` is within `domain()`
/// - `interpolate(x)` returns `Err(OutOfBounds)` if `x` is outside `domain()`
/// - `extrapolate(x)` never fails: inside the domain it agrees with
///   `interpolate`, outside it continues the nearest edge segment
/// - `domain()` returns `(x_min, x_max)` where `x_min < x_max`
///
/// # Example
///
/// ```
/// use curve_core::math::interpolators::{Interpolator, LinearInterpolator};
///
/// fn value_or_edge<I: Interpolator<f64>>(interp: &I, x: f64) -> f64 {
///     interp.interpolate(x).unwrap_or_else(|_| interp.extrapolate(x))
/// }
///
/// let interp = LinearInterpolator::new(&[0.0, 1.0], &[0.0, 2.0]).unwrap();
/// assert_eq!(value_or_edge(&interp, 2.0), 4.0);
/// ```
pub trait Interpolator<T: Float> {
    /// Interpolate value at point `x`.
    ///
    /// # Returns
    ///
    /// * `Ok(y)` - The interpolated value at `x`
    /// * `Err(InterpolationError::OutOfBounds)` - If `x` is outside the valid domain
    fn interpolate(&self, x: T) -> Result<T, InterpolationError>;

    /// Evaluate at `x`, extending the first or last segment outside the domain.
    fn extrapolate(&self, x: T) -> T;

    /// Return the valid interpolation domain `(x_min, x_max)`.
    fn domain(&self) -> (T, T);

    /// Returns true if `x` lies inside `domain()` (bounds included).
    #[inline]
    fn contains(&self, x: T) -> bool {
        let (x_min, x_max) = self.domain();
        x >= x_min && x <= x_max
    }
}
