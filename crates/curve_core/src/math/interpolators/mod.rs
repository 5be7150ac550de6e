//! Interpolation methods over ordered sample sets.
//!
//! ## Building blocks
//!
//! - [`Knots`]: sorted `(x, y)` samples with strictly increasing x and
//!   binary-search segment lookup
//! - [`LinearInterpolator`]: piecewise linear interpolation (zero rates)
//! - [`LogLinearInterpolator`]: linear in `ln y` (discount-factor curves)
//! - [`CubicSplineInterpolator`]: natural cubic spline (smoothed zero rates)
//!
//! ## Core Trait
//!
//! All interpolators implement the [`Interpolator`] trait, which defines:
//! - `interpolate(x: T) -> Result<T, InterpolationError>`: value inside the domain
//! - `extrapolate(x: T) -> T`: value anywhere, extending the edge segments
//! - `domain() -> (T, T)`: valid interpolation range
//!
//! All interpolators are generic over `T: num_traits::Float`.
//!
//! ## Example
//!
//! ```
//! use curve_core::math::interpolators::{Interpolator, LinearInterpolator};
//!
//! let xs = [0.0, 1.0, 2.0, 3.0];
//! let ys = [0.0, 1.0, 4.0, 9.0];
//!
//! let interp = LinearInterpolator::<f64>::new(&xs, &ys).unwrap();
//! let (x_min, x_max) = interp.domain();
//! assert_eq!(x_min, 0.0);
//! assert_eq!(x_max, 3.0);
//!
//! // Interpolate at x = 1.5 (between y=1.0 and y=4.0)
//! let y = interp.interpolate(1.5).unwrap();
//! assert!((y - 2.5).abs() < 1e-10);
//! ```

mod cubic_spline;
mod knots;
mod linear;
mod log_linear;
mod traits;

// Re-export public types at module level
pub use cubic_spline::CubicSplineInterpolator;
pub use knots::Knots;
pub use linear::LinearInterpolator;
pub use log_linear::LogLinearInterpolator;
pub use traits::Interpolator;
