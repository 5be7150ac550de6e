//! Linear interpolation implementation.

use super::{Interpolator, Knots};
use crate::types::InterpolationError;
use num_traits::Float;

/// Piecewise linear interpolator over a [`Knots`] set.
///
/// Used for linear zero-rate curves and, on log values, by
/// [`LogLinearInterpolator`](super::LogLinearInterpolator).
///
/// # Example
///
/// ```
/// use curve_core::math::interpolators::{Interpolator, LinearInterpolator};
///
/// let xs = [0.0, 1.0, 2.0, 3.0];
/// let ys = [0.0, 2.0, 4.0, 6.0];
///
/// let interp = LinearInterpolator::new(&xs, &ys).unwrap();
/// assert_eq!(interp.domain(), (0.0, 3.0));
/// ```
#[derive(Debug, Clone)]
pub struct LinearInterpolator<T: Float> {
    knots: Knots<T>,
}

impl<T: Float> LinearInterpolator<T> {
    /// Builds the knot set from `xs` and `ys` (sorted by x).
    ///
    /// # Errors
    ///
    /// Any error of [`Knots::new`].
    ///
    /// ```
    /// use curve_core::math::interpolators::LinearInterpolator;
    ///
    /// assert!(LinearInterpolator::new(&[0.0, 1.0], &[0.0, 1.0]).is_ok());
    /// assert!(LinearInterpolator::new(&[0.0], &[0.0]).is_err());
    /// ```
    pub fn new(xs: &[T], ys: &[T]) -> Result<Self, InterpolationError> {
        Ok(Self::from_knots(Knots::new(xs, ys)?))
    }

    /// Wrap an existing knot set.
    pub fn from_knots(knots: Knots<T>) -> Self {
        Self { knots }
    }

    /// Returns the underlying knot set.
    #[inline]
    pub fn knots(&self) -> &Knots<T> {
        &self.knots
    }

    /// Sorted abscissae.
    #[inline]
    pub fn xs(&self) -> &[T] {
        self.knots.xs()
    }

    /// Values in abscissa order.
    #[inline]
    pub fn ys(&self) -> &[T] {
        self.knots.ys()
    }

    /// Number of knots.
    #[inline]
    pub fn len(&self) -> usize {
        self.knots.len()
    }

    /// Always false once constructed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.knots.is_empty()
    }
}

impl<T: Float> Interpolator<T> for LinearInterpolator<T> {
    /// Interpolate value at point `x` using piecewise linear interpolation.
    ///
    /// # Formula
    ///
    /// ```text
    /// y = y0 + (y1 - y0) * (x - x0) / (x1 - x0)
    /// ```
    ///
    /// # Example
    ///
    /// ```
    /// use curve_core::math::interpolators::{Interpolator, LinearInterpolator};
    ///
    /// let interp = LinearInterpolator::<f64>::new(&[0.0, 1.0, 2.0], &[0.0, 2.0, 4.0]).unwrap();
    ///
    /// let y = interp.interpolate(0.5).unwrap();
    /// assert!((y - 1.0).abs() < 1e-10);
    ///
    /// assert!(interp.interpolate(2.5).is_err());
    /// ```
    fn interpolate(&self, x: T) -> Result<T, InterpolationError> {
        if !self.contains(x) {
            return Err(self.knots.out_of_bounds(x));
        }
        Ok(self.extrapolate(x))
    }

    /// Linear value at `x`, extending the first or last segment beyond the domain.
    ///
    /// # Example
    ///
    /// ```
    /// use curve_core::math::interpolators::{Interpolator, LinearInterpolator};
    ///
    /// let interp = LinearInterpolator::<f64>::new(&[1.0, 2.0], &[1.0, 3.0]).unwrap();
    /// assert!((interp.extrapolate(0.0) - (-1.0)).abs() < 1e-12);
    /// assert!((interp.extrapolate(3.0) - 5.0).abs() < 1e-12);
    /// ```
    #[inline]
    fn extrapolate(&self, x: T) -> T {
        let i = self.knots.find_segment(x);
        self.knots.lerp_on_segment(i, x)
    }

    #[inline]
    fn domain(&self) -> (T, T) {
        self.knots.domain()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // ========================================
    // Construction Tests
    // ========================================

    #[test]
    fn test_new_with_minimum_points() {
        let interp = LinearInterpolator::new(&[0.0, 1.0], &[0.0, 1.0]).unwrap();
        assert_eq!(interp.len(), 2);
        assert!(!interp.is_empty());
    }

    #[test]
    fn test_new_insufficient_data_zero_points() {
        let xs: [f64; 0] = [];
        let ys: [f64; 0] = [];
        match LinearInterpolator::new(&xs, &ys).unwrap_err() {
            InterpolationError::InsufficientData { got, need } => {
                assert_eq!(got, 0);
                assert_eq!(need, 2);
            }
            _ => panic!("Expected InsufficientData error"),
        }
    }

    #[test]
    fn test_new_duplicate_abscissa() {
        let result = LinearInterpolator::new(&[0.0, 1.0, 0.0], &[1.0, 2.0, 3.0]);
        assert!(matches!(
            result,
            Err(InterpolationError::DuplicateKnot { .. })
        ));
    }

    #[test]
    fn test_new_auto_sorts_unsorted_data() {
        let interp = LinearInterpolator::new(&[3.0, 1.0, 2.0, 0.0], &[9.0, 1.0, 4.0, 0.0]).unwrap();
        assert_eq!(interp.xs(), &[0.0, 1.0, 2.0, 3.0]);
        assert_eq!(interp.ys(), &[0.0, 1.0, 4.0, 9.0]);
    }

    #[test]
    fn test_with_f32() {
        let xs: [f32; 3] = [0.0, 1.0, 2.0];
        let ys: [f32; 3] = [0.0, 2.0, 4.0];
        let interp = LinearInterpolator::new(&xs, &ys).unwrap();

        let y = interp.interpolate(0.5_f32).unwrap();
        assert!((y - 1.0_f32).abs() < 1e-6);
    }

    // ========================================
    // Interpolation Tests
    // ========================================

    #[test]
    fn test_interpolate_at_knot_points() {
        let xs = [0.0, 1.0, 2.0, 3.0];
        let ys = [0.0, 2.0, 4.0, 6.0];
        let interp = LinearInterpolator::new(&xs, &ys).unwrap();

        for (&x, &y) in xs.iter().zip(ys.iter()) {
            assert_eq!(interp.interpolate(x).unwrap(), y);
        }
    }

    #[test]
    fn test_interpolate_arbitrary_points() {
        let interp = LinearInterpolator::new(&[0.0, 1.0, 2.0], &[0.0, 1.0, 4.0]).unwrap();

        // Between (1,1) and (2,4): 1 + 3*0.75
        assert_relative_eq!(interp.interpolate(1.75).unwrap(), 3.25, epsilon = 1e-12);
        assert_relative_eq!(interp.interpolate(0.25).unwrap(), 0.25, epsilon = 1e-12);
    }

    #[test]
    fn test_interpolate_non_uniform_spacing() {
        let interp = LinearInterpolator::new(&[0.0, 0.1, 1.0, 10.0], &[0.0, 1.0, 2.0, 3.0]).unwrap();

        assert_relative_eq!(interp.interpolate(0.05).unwrap(), 0.5, epsilon = 1e-12);
        assert_relative_eq!(interp.interpolate(0.55).unwrap(), 1.5, epsilon = 1e-12);
    }

    #[test]
    fn test_interpolate_out_of_bounds() {
        let interp = LinearInterpolator::new(&[0.0, 1.0, 2.0], &[0.0, 1.0, 4.0]).unwrap();

        match interp.interpolate(2.1).unwrap_err() {
            InterpolationError::OutOfBounds { x, min, max } => {
                assert_relative_eq!(x, 2.1);
                assert_eq!(min, 0.0);
                assert_eq!(max, 2.0);
            }
            _ => panic!("Expected OutOfBounds error"),
        }
        assert!(interp.interpolate(-0.1).is_err());
    }

    #[test]
    fn test_extrapolate_uses_edge_segments() {
        let interp = LinearInterpolator::new(&[0.0, 1.0, 2.0], &[0.0, 1.0, 4.0]).unwrap();

        // Left: slope 1 from the first segment
        assert_relative_eq!(interp.extrapolate(-1.0), -1.0, epsilon = 1e-12);
        // Right: slope 3 from the last segment
        assert_relative_eq!(interp.extrapolate(3.0), 7.0, epsilon = 1e-12);
        // Inside: agrees with interpolate
        assert_relative_eq!(
            interp.extrapolate(1.5),
            interp.interpolate(1.5).unwrap(),
            epsilon = 1e-15
        );
    }
}
