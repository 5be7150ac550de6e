//! Natural cubic spline interpolation.

use super::{Interpolator, Knots};
use crate::types::InterpolationError;
use num_traits::Float;

/// Polynomial coefficients for one spline segment.
///
/// `y = a + b*(x-xi) + c*(x-xi)² + d*(x-xi)³`
#[derive(Debug, Clone, Copy)]
struct SplineCoeffs<T: Float> {
    a: T,
    b: T,
    c: T,
    d: T,
}

impl<T: Float> SplineCoeffs<T> {
    #[inline]
    fn eval(&self, dx: T) -> T {
        self.a + dx * (self.b + dx * (self.c + dx * self.d))
    }
}

/// Natural cubic spline over a [`Knots`] set, C² at interior knots.
///
/// The second derivative is zero at both ends. Used by the discount curve
/// to smooth zero rates.
///
/// # Example
///
/// ```
/// use curve_core::math::interpolators::{CubicSplineInterpolator, Interpolator};
///
/// let interp = CubicSplineInterpolator::<f64>::new(&[0.0, 1.0, 2.0, 3.0], &[0.0, 1.0, 4.0, 9.0]).unwrap();
/// assert!((interp.interpolate(2.0).unwrap() - 4.0).abs() < 1e-12);
/// assert!(interp.interpolate(3.5).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct CubicSplineInterpolator<T: Float> {
    knots: Knots<T>,
    coeffs: Vec<SplineCoeffs<T>>,
}

impl<T: Float> CubicSplineInterpolator<T> {
    /// Minimum number of knots for a spline.
    pub const MIN_POINTS: usize = 3;

    /// Builds the knot set from `xs` and `ys` and solves for the spline.
    ///
    /// # Returns
    ///
    /// * `Err(InterpolationError::InsufficientData)` - fewer than 3 samples
    /// * any other error of [`Knots::new`]
    pub fn new(xs: &[T], ys: &[T]) -> Result<Self, InterpolationError> {
        Self::from_knots(Knots::new(xs, ys)?)
    }

    /// Solves the spline over an existing knot set.
    pub fn from_knots(knots: Knots<T>) -> Result<Self, InterpolationError> {
        if knots.len() < Self::MIN_POINTS {
            return Err(InterpolationError::InsufficientData {
                got: knots.len(),
                need: Self::MIN_POINTS,
            });
        }
        let coeffs = compute_coefficients(knots.xs(), knots.ys());
        Ok(Self { knots, coeffs })
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

/// Second derivatives by the Thomas algorithm, then per-segment coefficients.
///
/// Natural boundary: `M[0] = M[n-1] = 0`. Interior rows read
/// `h[i-1]*M[i-1] + 2*(h[i-1]+h[i])*M[i] + h[i]*M[i+1] = rhs[i]`.
fn compute_coefficients<T: Float>(xs: &[T], ys: &[T]) -> Vec<SplineCoeffs<T>> {
    let n = xs.len();
    let two = T::one() + T::one();
    let six = two + two + two;

    let h: Vec<T> = xs.windows(2).map(|w| w[1] - w[0]).collect();
    let slope = |i: usize| (ys[i + 1] - ys[i]) / h[i];

    let interior = n - 2;
    let mut c_prime: Vec<T> = Vec::with_capacity(interior);
    let mut d_prime: Vec<T> = Vec::with_capacity(interior);

    // Forward elimination over rows i = 1..n-1
    for k in 0..interior {
        let i = k + 1;
        let diag = two * (h[i - 1] + h[i]);
        let rhs = six * (slope(i) - slope(i - 1));
        let (denom, carried) = if k == 0 {
            (diag, T::zero())
        } else {
            (diag - h[i - 1] * c_prime[k - 1], h[i - 1] * d_prime[k - 1])
        };
        c_prime.push(h[i] / denom);
        d_prime.push((rhs - carried) / denom);
    }

    // Back substitution
    let mut m = vec![T::zero(); n];
    for k in (0..interior).rev() {
        m[k + 1] = d_prime[k] - c_prime[k] * m[k + 2];
    }

    (0..n - 1)
        .map(|i| SplineCoeffs {
            a: ys[i],
            b: slope(i) - h[i] * (two * m[i] + m[i + 1]) / six,
            c: m[i] / two,
            d: (m[i + 1] - m[i]) / (six * h[i]),
        })
        .collect()
}

impl<T: Float> Interpolator<T> for CubicSplineInterpolator<T> {
    /// Spline value at `x`.
    ///
    /// # Returns
    ///
    /// * `Ok(y)` - The interpolated value
    /// * `Err(InterpolationError::OutOfBounds)` - If `x` is outside the domain
    fn interpolate(&self, x: T) -> Result<T, InterpolationError> {
        if !self.contains(x) {
            return Err(self.knots.out_of_bounds(x));
        }
        Ok(self.extrapolate(x))
    }

    /// Evaluates the edge polynomial beyond the domain.
    #[inline]
    fn extrapolate(&self, x: T) -> T {
        let i = self.knots.find_segment(x);
        self.coeffs[i].eval(x - self.knots.xs()[i])
    }

    #[inline]
    fn domain(&self) -> (T, T) {
        self.knots.domain()
    }
}
