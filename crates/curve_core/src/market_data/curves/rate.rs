//! Time-keyed zero-rate curve with linear interpolation.

use tracing::debug;

use crate::market_data::error::CurveError;
use crate::rates::continuous_discount;

/// A `(time, rate)` sample of a [`RateCurve`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RatePoint {
    /// Year fraction from the curve origin (finite, non-negative)
    pub time: f64,
    /// Continuously compounded zero rate
    pub rate: f64,
}

/// Lightweight zero-rate curve keyed by year fraction.
///
/// Samples are kept sorted by time as they are added; there is no build
/// step and queries never fail:
///
/// - no samples: rate 0
/// - one distinct time: that sample's rate everywhere
/// - beyond the last sample: the last rate
/// - otherwise linear between samples, with the first segment extended to
///   the left of the first sample
///
/// When several samples share a time, the one added last wins. Lookups
/// binary-search the sorted samples and allocate nothing.
///
/// # Example
///
/// ```
/// use curve_core::market_data::curves::RateCurve;
///
/// let mut curve = RateCurve::new();
/// curve.add_point(2.0, 0.04).unwrap();
/// curve.add_point(1.0, 0.03).unwrap();
///
/// assert!((curve.interpolate_rate(1.5) - 0.035).abs() < 1e-12);
/// assert_eq!(curve.interpolate_rate(10.0), 0.04);
///
/// let df = curve.discount(1.0);
/// assert!((df - (-0.03_f64).exp()).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RateCurve {
    points: Vec<RatePoint>,
}

impl RateCurve {
    /// Creates an empty curve.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a curve from `(time, rate)` samples in any order.
    ///
    /// Fails on the first negative or non-finite time.
    pub fn from_points<I>(points: I) -> Result<Self, CurveError>
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        let mut curve = Self::new();
        for (time, rate) in points {
            curve.add_point(time, rate)?;
        }
        Ok(curve)
    }

    /// Inserts a sample, keeping samples sorted by time.
    ///
    /// A sample goes after any existing samples with the same time.
    ///
    /// # Returns
    ///
    /// * `Err(CurveError::NegativeTime)` - `time < 0`, NaN or infinite; the
    ///   curve is unchanged
    pub fn add_point(&mut self, time: f64, rate: f64) -> Result<(), CurveError> {
        if !time.is_finite() || time < 0.0 {
            return Err(CurveError::NegativeTime { time });
        }
        let pos = self.points.partition_point(|p| p.time <= time);
        self.points.insert(pos, RatePoint { time, rate });
        Ok(())
    }

    /// Zero rate at `time`.
    pub fn interpolate_rate(&self, time: f64) -> f64 {
        let (first, last) = match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => (*first, *last),
            _ => return 0.0,
        };
        if time > last.time || first.time == last.time {
            return last.rate;
        }

        // Left of the first sample the first segment is extended
        let left = match self.points.partition_point(|p| p.time <= time) {
            0 => self.latest_at(first.time),
            pos => pos - 1,
        };
        let next = left + 1;
        if next == self.points.len() {
            return last.rate;
        }

        let l = self.points[left];
        let r = self.points[self.latest_at(self.points[next].time)];
        l.rate + (r.rate - l.rate) * (time - l.time) / (r.time - l.time)
    }

    /// Index of the last-added sample at `time`, which must be present.
    fn latest_at(&self, time: f64) -> usize {
        self.points
            .partition_point(|p| p.time <= time)
            .saturating_sub(1)
    }

    /// Discount factor `exp(-r(t) * t)`.
    pub fn discount(&self, time: f64) -> f64 {
        continuous_discount(self.interpolate_rate(time), time)
    }

    /// Number of samples added (repeated times counted individually).
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Samples sorted by time.
    pub fn points(&self) -> &[RatePoint] {
        &self.points
    }

    /// Removes every sample.
    pub fn clear(&mut self) {
        debug!(points = self.points.len(), "Rate curve cleared");
        self.points.clear();
    }
}
