//! Ordered sample set shared by the 1D interpolators.

use crate::types::InterpolationError;
use num_traits::Float;

/// Sorted `(x, y)` samples with strictly increasing x-coordinates.
///
/// Construction sorts the samples stably by x and rejects repeated
/// x-coordinates, so every segment `[xs[i], xs[i+1]]` has positive width.
///
/// # Example
///
/// ```
/// use curve_core::math::interpolators::Knots;
///
/// let knots = Knots::new(&[2.0, 0.0, 1.0], &[4.0, 0.0, 1.0]).unwrap();
/// assert_eq!(knots.xs(), &[0.0, 1.0, 2.0]);
/// assert_eq!(knots.ys(), &[0.0, 1.0, 4.0]);
/// assert_eq!(knots.find_segment(1.5), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Knots<T: Float> {
    xs: Vec<T>,
    ys: Vec<T>,
}

impl<T: Float> Knots<T> {
    /// Build a knot set from parallel x and y slices.
    ///
    /// # Returns
    ///
    /// * `Err(InterpolationError::InvalidInput)` - mismatched lengths or NaN abscissa
    /// * `Err(InterpolationError::InsufficientData)` - fewer than 2 samples
    /// * `Err(InterpolationError::DuplicateKnot)` - repeated x-coordinate
    pub fn new(xs: &[T], ys: &[T]) -> Result<Self, InterpolationError> {
        if xs.len() != ys.len() {
            return Err(InterpolationError::InvalidInput(format!(
                "xs and ys must have same length: got {} and {}",
                xs.len(),
                ys.len()
            )));
        }
        Self::from_pairs(xs.iter().copied().zip(ys.iter().copied()))
    }

    /// Build a knot set from `(x, y)` pairs in any order.
    pub fn from_pairs<I>(pairs: I) -> Result<Self, InterpolationError>
    where
        I: IntoIterator<Item = (T, T)>,
    {
        let mut pairs: Vec<(T, T)> = pairs.into_iter().collect();

        if pairs.len() < 2 {
            return Err(InterpolationError::InsufficientData {
                got: pairs.len(),
                need: 2,
            });
        }
        if pairs.iter().any(|(x, _)| x.is_nan()) {
            return Err(InterpolationError::InvalidInput(
                "x-coordinates must not be NaN".to_string(),
            ));
        }

        // Stable sort keeps insertion order among equal x (reported below).
        pairs.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));

        if let Some(w) = pairs.windows(2).find(|w| w[0].0 == w[1].0) {
            return Err(InterpolationError::DuplicateKnot {
                x: w[0].0.to_f64().unwrap_or(f64::NAN),
            });
        }

        let (xs, ys) = pairs.into_iter().unzip();
        Ok(Self { xs, ys })
    }

    /// Returns the sorted x-coordinates.
    #[inline]
    pub fn xs(&self) -> &[T] {
        &self.xs
    }

    /// Returns the y-values in sorted x order.
    #[inline]
    pub fn ys(&self) -> &[T] {
        &self.ys
    }

    /// Returns the number of samples (always at least 2).
    #[inline]
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// Always false for a constructed knot set.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// Returns `(x_min, x_max)`.
    #[inline]
    pub fn domain(&self) -> (T, T) {
        (self.xs[0], self.xs[self.xs.len() - 1])
    }

    /// Find the segment index for `x` using binary search.
    ///
    /// Returns the index `i` such that `xs[i] <= x < xs[i+1]`,
    /// clamped to valid segment range [0, n-2]. Points left of the domain map
    /// to the first segment and points right of it to the last.
    #[inline]
    pub fn find_segment(&self, x: T) -> usize {
        let pos = self.xs.partition_point(|&xi| xi <= x);

        if pos == 0 {
            0
        } else if pos >= self.xs.len() {
            self.xs.len() - 2
        } else {
            pos - 1
        }
    }

    /// Linear blend of the y-values on segment `i` at `x`.
    ///
    /// `y = y0 + (y1 - y0) * (x - x0) / (x1 - x0)`; `x` may lie outside the
    /// segment, in which case the segment line is extended.
    #[inline]
    pub(crate) fn lerp_on_segment(&self, i: usize, x: T) -> T {
        let x0 = self.xs[i];
        let x1 = self.xs[i + 1];
        let y0 = self.ys[i];
        let y1 = self.ys[i + 1];

        let t = (x - x0) / (x1 - x0);
        y0 + (y1 - y0) * t
    }

    /// Apply `f` to every y-value, keeping the x-coordinates.
    pub(crate) fn map_values<F>(&self, f: F) -> Self
    where
        F: Fn(T) -> T,
    {
        Self {
            xs: self.xs.clone(),
            ys: self.ys.iter().map(|&y| f(y)).collect(),
        }
    }

    pub(crate) fn out_of_bounds(&self, x: T) -> InterpolationError {
        let (x_min, x_max) = self.domain();
        InterpolationError::OutOfBounds {
            x: x.to_f64().unwrap_or(f64::NAN),
            min: x_min.to_f64().unwrap_or(f64::NAN),
            max: x_max.to_f64().unwrap_or(f64::NAN),
        }
    }
}
