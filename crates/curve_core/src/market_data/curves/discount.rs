//! Date-keyed discount-factor curve with selectable interpolation.

use std::fmt;
use std::str::FromStr;

use tracing::{debug, trace};

use super::interpolation::{Interpolation, ZeroShape};
use crate::market_data::error::CurveError;
use crate::math::interpolators::{Interpolator, LogLinearInterpolator};
use crate::rates::{Compounding, Frequency, InterestRate};
use crate::types::{Date, DayCountConvention};

/// Behaviour for queries outside `[first anchor, last anchor]`.
///
/// Applies the same way under every [`Interpolation`] method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Extrapolation {
    /// Continue the edge segment's log-linear slope (constant forward rate).
    #[default]
    FlatForward,
    /// Fail with [`CurveError::OutOfRange`].
    Reject,
}

impl Extrapolation {
    /// Returns the canonical name.
    pub fn name(&self) -> &'static str {
        match self {
            Extrapolation::FlatForward => "flat-forward",
            Extrapolation::Reject => "reject",
        }
    }
}

impl FromStr for Extrapolation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['_', '-', ' '], "").as_str() {
            "flatforward" | "flat" => Ok(Extrapolation::FlatForward),
            "reject" | "none" => Ok(Extrapolation::Reject),
            _ => Err(format!("Unknown extrapolation policy: {}", s)),
        }
    }
}

impl fmt::Display for Extrapolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One row of the curve table produced by [`DiscountCurve::nodes`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CurveNode {
    /// Anchor date
    pub date: Date,
    /// Year fraction from the reference date
    pub time: f64,
    /// Anchor discount factor
    pub discount_factor: f64,
    /// Zero rate to the anchor (`None` at the reference date)
    pub zero_rate: Option<f64>,
    /// Forward rate from the previous anchor (`None` for the first anchor)
    pub forward_rate: Option<f64>,
}

/// Snapshot captured by a successful build.
#[derive(Debug, Clone)]
struct BuiltCurve {
    reference_date: Date,
    max_date: Date,
    /// Sorted anchors as validated; later `add_point` calls leave them alone.
    anchors: Vec<(Date, f64)>,
    /// Log-linear in discount factors; also drives extrapolation.
    interpolator: LogLinearInterpolator<f64>,
    zero_shape: Option<ZeroShape>,
}

impl BuiltCurve {
    /// Discount factor at day offset `x` inside the anchor range.
    fn discount_within(&self, x: f64) -> Result<f64, CurveError> {
        match &self.zero_shape {
            None => Ok(self.interpolator.interpolate(x)?),
            Some(shape) => Ok(self.anchors[0].1 * (-shape.zero_at(x) * x).exp()),
        }
    }
}

/// Discount curve keyed by date.
///
/// Anchors `(date, discount factor)` are accumulated in any order, then
/// [`build`](DiscountCurve::build) sorts and validates them and captures an
/// interpolator over serial-day offsets from the earliest anchor (the
/// reference date), log-linear in the discount factor unless another
/// [`Interpolation`] is chosen. Queries answer from the last successful build.
///
/// # Example
///
/// ```
/// use curve_core::market_data::curves::DiscountCurve;
/// use curve_core::rates::{Compounding, Frequency};
/// use curve_core::types::Date;
///
/// let d0 = Date::from_ymd(2025, 1, 3).unwrap();
/// let d1 = Date::from_ymd(2026, 1, 3).unwrap();
///
/// let mut curve = DiscountCurve::new();
/// curve.add_point(d1, 0.95);
/// curve.add_point(d0, 1.0);
/// curve.build().unwrap();
///
/// assert!((curve.discount(d1).unwrap() - 0.95).abs() < 1e-12);
///
/// // Continuous zero rate under ACT/360: -ln(0.95) / (365 / 360)
/// let z = curve.zero_rate(d1, Compounding::Continuous, Frequency::NoFrequency).unwrap();
/// assert!((z + 0.95_f64.ln() * 360.0 / 365.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DiscountCurve {
    anchors: Vec<(Date, f64)>,
    day_count: DayCountConvention,
    extrapolation: Extrapolation,
    interpolation: Interpolation,
    built: Option<BuiltCurve>,
}

impl DiscountCurve {
    /// Minimum number of anchors for a build.
    pub const MIN_POINTS: usize = 2;

    /// Creates an empty, unbuilt curve with ACT/360 day count, log-linear
    /// interpolation and flat-forward extrapolation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an unbuilt curve from `(date, discount factor)` anchors.
    pub fn from_points<I>(points: I) -> Self
    where
        I: IntoIterator<Item = (Date, f64)>,
    {
        Self {
            anchors: points.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Sets the day count used for zero and forward rates.
    pub fn with_day_count(mut self, day_count: DayCountConvention) -> Self {
        self.day_count = day_count;
        self
    }

    /// Sets the extrapolation policy.
    pub fn with_extrapolation(mut self, extrapolation: Extrapolation) -> Self {
        self.extrapolation = extrapolation;
        self
    }

    /// Sets the interpolation method; takes effect at the next build.
    pub fn with_interpolation(mut self, interpolation: Interpolation) -> Self {
        self.interpolation = interpolation;
        self
    }

    /// Appends an anchor. No validation happens until [`build`](Self::build);
    /// a curve that is already built keeps answering from its snapshot.
    pub fn add_point(&mut self, date: Date, discount_factor: f64) {
        self.anchors.push((date, discount_factor));
    }

    /// Validates the anchors and captures the interpolation snapshot.
    ///
    /// # Returns
    ///
    /// * `Err(CurveError::InsufficientPoints)` - fewer than two anchors
    /// * `Err(CurveError::DuplicateDate)` - two anchors share a date
    /// * `Err(CurveError::InvalidDiscountFactor)` - factor `<= 0` or non-finite
    ///
    /// On error the curve is left unbuilt with its anchors kept (sorted).
    pub fn build(&mut self) -> Result<(), CurveError> {
        self.built = None;

        if self.anchors.len() < Self::MIN_POINTS {
            return Err(CurveError::InsufficientPoints {
                got: self.anchors.len(),
                need: Self::MIN_POINTS,
            });
        }

        self.anchors.sort_by_key(|&(date, _)| date);

        if let Some(w) = self.anchors.windows(2).find(|w| w[0].0 == w[1].0) {
            return Err(CurveError::DuplicateDate { date: w[0].0 });
        }
        if let Some(&(date, discount_factor)) = self
            .anchors
            .iter()
            .find(|&&(_, df)| !df.is_finite() || df <= 0.0)
        {
            return Err(CurveError::InvalidDiscountFactor {
                date,
                discount_factor,
            });
        }

        let reference_date = self.anchors[0].0;
        let max_date = self.anchors[self.anchors.len() - 1].0;
        let (xs, ys): (Vec<f64>, Vec<f64>) = self
            .anchors
            .iter()
            .map(|&(date, df)| ((date - reference_date) as f64, df))
            .unzip();
        let interpolator = LogLinearInterpolator::new(&xs, &ys)?;
        let zero_shape = ZeroShape::build(self.interpolation, &xs, &ys)?;

        debug!(
            points = self.anchors.len(),
            %reference_date,
            %max_date,
            day_count = %self.day_count,
            interpolation = %self.interpolation,
            "Discount curve built"
        );

        self.built = Some(BuiltCurve {
            reference_date,
            max_date,
            anchors: self.anchors.clone(),
            interpolator,
            zero_shape,
        });
        Ok(())
    }

    /// Returns true after a successful build.
    pub fn is_built(&self) -> bool {
        self.built.is_some()
    }

    fn snapshot(&self) -> Result<&BuiltCurve, CurveError> {
        self.built.as_ref().ok_or(CurveError::NotBuilt)
    }

    /// Discount factor at `date`.
    ///
    /// Interpolated between the bracketing anchors with the method captured
    /// at build time; outside the anchor range the extrapolation policy applies.
    pub fn discount(&self, date: Date) -> Result<f64, CurveError> {
        let built = self.snapshot()?;
        let x = (date - built.reference_date) as f64;

        if built.interpolator.contains(x) {
            return built.discount_within(x);
        }

        match self.extrapolation {
            Extrapolation::FlatForward => {
                trace!(%date, "Extrapolating discount factor");
                Ok(built.interpolator.extrapolate(x))
            }
            Extrapolation::Reject => Err(CurveError::OutOfRange {
                date,
                min: built.reference_date,
                max: built.max_date,
            }),
        }
    }

    /// Zero rate from the reference date to `date`.
    ///
    /// # Returns
    ///
    /// * `Err(CurveError::NotBuilt)` - no successful build yet
    /// * `Err(CurveError::InvalidFrequency)` - periodic compounding without a
    ///   periodic frequency
    /// * `Err(CurveError::InvalidTimeSpan)` - `date` is not after the reference date
    ///
    /// # Example
    ///
    /// ```
    /// use curve_core::market_data::curves::DiscountCurve;
    /// use curve_core::rates::{Compounding, Frequency};
    /// use curve_core::types::Date;
    ///
    /// let d0 = Date::from_ymd(2025, 1, 3).unwrap();
    /// let d1 = Date::from_ymd(2025, 12, 29).unwrap(); // 360 days later
    ///
    /// let mut curve = DiscountCurve::from_points([(d0, 1.0), (d1, 0.96)]);
    /// curve.build().unwrap();
    ///
    /// let simple = curve.zero_rate(d1, Compounding::Simple, Frequency::Annual).unwrap();
    /// assert!((simple - (1.0 / 0.96 - 1.0)).abs() < 1e-12);
    ///
    /// assert!(curve.zero_rate(d0, Compounding::Simple, Frequency::Annual).is_err());
    /// ```
    pub fn zero_rate(
        &self,
        date: Date,
        compounding: Compounding,
        frequency: Frequency,
    ) -> Result<f64, CurveError> {
        let built = self.snapshot()?;
        compounding
            .check_frequency(frequency)
            .map_err(|e| CurveError::from_rate(e, date))?;

        let discount = self.discount(date)?;
        let tau = self.day_count.year_fraction(built.reference_date, date);
        implied_rate(1.0 / discount, tau, compounding, frequency, date)
    }

    /// Forward rate over `[start, end]`, implied by `P(start) / P(end)`.
    ///
    /// # Returns
    ///
    /// * `Err(CurveError::NotBuilt)` - no successful build yet
    /// * `Err(CurveError::InvalidDateOrder)` - `start >= end`
    /// * `Err(CurveError::InvalidFrequency)` - as for [`zero_rate`](Self::zero_rate)
    /// * `Err(CurveError::InvalidTimeSpan)` - the day count gives a non-positive fraction
    pub fn forward_rate(
        &self,
        start: Date,
        end: Date,
        compounding: Compounding,
        frequency: Frequency,
    ) -> Result<f64, CurveError> {
        self.snapshot()?;
        if start >= end {
            return Err(CurveError::InvalidDateOrder { start, end });
        }
        compounding
            .check_frequency(frequency)
            .map_err(|e| CurveError::from_rate(e, end))?;

        let compound = self.discount(start)? / self.discount(end)?;
        let tau = self.day_count.year_fraction(start, end);
        implied_rate(compound, tau, compounding, frequency, end)
    }

    /// Forward rate from `date` to the next calendar day.
    pub fn overnight_forward_rate(
        &self,
        date: Date,
        compounding: Compounding,
        frequency: Frequency,
    ) -> Result<f64, CurveError> {
        self.forward_rate(date, date.add_days(1)?, compounding, frequency)
    }

    /// Overnight forward rates for every calendar day in `[start, end)`.
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<(Date, f64)>)` - one `(day, rate)` pair per day
    /// * `Err(CurveError::InvalidDateOrder)` - `start >= end`
    /// * any error of [`forward_rate`](Self::forward_rate)
    pub fn daily_forward_rates(
        &self,
        start: Date,
        end: Date,
        compounding: Compounding,
        frequency: Frequency,
    ) -> Result<Vec<(Date, f64)>, CurveError> {
        self.snapshot()?;
        if start >= end {
            return Err(CurveError::InvalidDateOrder { start, end });
        }

        let mut rates = Vec::with_capacity((end - start) as usize);
        let mut day = start;
        while day < end {
            rates.push((
                day,
                self.overnight_forward_rate(day, compounding, frequency)?,
            ));
            day = day.add_days(1)?;
        }
        Ok(rates)
    }

    /// The curve table: one row per anchor of the last successful build, with
    /// its zero rate from the reference date and forward rate from the
    /// previous anchor.
    ///
    /// Rates whose year fraction is not positive (the reference row, or a
    /// zero-length 30/360 period) are reported as `None`.
    pub fn nodes(
        &self,
        compounding: Compounding,
        frequency: Frequency,
    ) -> Result<Vec<CurveNode>, CurveError> {
        let built = self.snapshot()?;
        compounding
            .check_frequency(frequency)
            .map_err(|e| CurveError::from_rate(e, built.reference_date))?;

        let mut nodes = Vec::with_capacity(built.anchors.len());
        let mut previous: Option<(Date, f64)> = None;

        for &(date, discount_factor) in &built.anchors {
            let time = self.day_count.year_fraction(built.reference_date, date);
            let zero_rate = if time > 0.0 {
                Some(implied_rate(
                    1.0 / discount_factor,
                    time,
                    compounding,
                    frequency,
                    date,
                )?)
            } else {
                None
            };

            let forward_rate = match previous {
                Some((prev_date, prev_df)) => {
                    let tau = self.day_count.year_fraction(prev_date, date);
                    if tau > 0.0 {
                        Some(implied_rate(
                            prev_df / discount_factor,
                            tau,
                            compounding,
                            frequency,
                            date,
                        )?)
                    } else {
                        None
                    }
                }
                None => None,
            };

            nodes.push(CurveNode {
                date,
                time,
                discount_factor,
                zero_rate,
                forward_rate,
            });
            previous = Some((date, discount_factor));
        }

        Ok(nodes)
    }

    /// Removes every anchor and drops the built snapshot.
    pub fn clear(&mut self) {
        debug!(points = self.anchors.len(), "Discount curve cleared");
        self.anchors.clear();
        self.built = None;
    }

    /// Number of anchors added, independent of build state.
    pub fn point_count(&self) -> usize {
        self.anchors.len()
    }

    /// Anchors in insertion order, or sorted by date once a build was attempted.
    pub fn anchors(&self) -> &[(Date, f64)] {
        &self.anchors
    }

    /// Day count used for rate queries.
    pub fn day_count(&self) -> DayCountConvention {
        self.day_count
    }

    /// Extrapolation policy.
    pub fn extrapolation(&self) -> Extrapolation {
        self.extrapolation
    }

    /// Interpolation method used by the next build.
    pub fn interpolation(&self) -> Interpolation {
        self.interpolation
    }

    /// Earliest anchor date of the built curve.
    pub fn reference_date(&self) -> Result<Date, CurveError> {
        self.snapshot().map(|b| b.reference_date)
    }

    /// Latest anchor date of the built curve.
    pub fn max_date(&self) -> Result<Date, CurveError> {
        self.snapshot().map(|b| b.max_date)
    }
}

fn implied_rate(
    compound: f64,
    tau: f64,
    compounding: Compounding,
    frequency: Frequency,
    date: Date,
) -> Result<f64, CurveError> {
    InterestRate::implied(compound, tau, compounding, frequency)
        .map(|r| r.rate())
        .map_err(|e| CurveError::from_rate(e, date))
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::Extrapolation;
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
    use std::str::FromStr;

    impl Serialize for Extrapolation {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_str(self.name())
        }
    }

    impl<'de> Deserialize<'de> for Extrapolation {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let s = String::deserialize(deserializer)?;
            Extrapolation::from_str(&s).map_err(de::Error::custom)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn ymd(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    /// Reference 2025-01-03 with anchors at +90, +181 and +365 days.
    fn sample_curve() -> DiscountCurve {
        let mut curve = DiscountCurve::new();
        curve.add_point(ymd(2025, 7, 3), 0.975);
        curve.add_point(ymd(2025, 1, 3), 1.0);
        curve.add_point(ymd(2026, 1, 3), 0.95);
        curve.add_point(ymd(2025, 4, 3), 0.99);
        curve.build().unwrap();
        curve
    }

    // ========================================
    // Build
    // ========================================

    #[test]
    fn test_build_needs_two_points() {
        let mut curve = DiscountCurve::new();
        assert_eq!(
            curve.build(),
            Err(CurveError::InsufficientPoints { got: 0, need: 2 })
        );

        curve.add_point(ymd(2025, 1, 3), 1.0);
        assert_eq!(
            curve.build(),
            Err(CurveError::InsufficientPoints { got: 1, need: 2 })
        );
        assert!(!curve.is_built());

        curve.add_point(ymd(2025, 4, 3), 0.99);
        assert!(curve.build().is_ok());
        assert!(curve.is_built());
    }

    #[test]
    fn test_build_sorts_and_sets_reference() {
        let curve = sample_curve();
        assert_eq!(curve.reference_date().unwrap(), ymd(2025, 1, 3));
        assert_eq!(curve.max_date().unwrap(), ymd(2026, 1, 3));
        let dates: Vec<Date> = curve.anchors().iter().map(|&(d, _)| d).collect();
        assert!(dates.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_build_rejects_duplicate_dates() {
        let mut curve = DiscountCurve::from_points([
            (ymd(2025, 1, 3), 1.0),
            (ymd(2025, 4, 3), 0.99),
            (ymd(2025, 4, 3), 0.98),
        ]);
        assert_eq!(
            curve.build(),
            Err(CurveError::DuplicateDate {
                date: ymd(2025, 4, 3)
            })
        );
        assert!(!curve.is_built());
        assert_eq!(curve.point_count(), 3);
    }

    #[test]
    fn test_build_rejects_non_positive_factor() {
        let mut curve =
            DiscountCurve::from_points([(ymd(2025, 1, 3), 1.0), (ymd(2025, 4, 3), 0.0)]);
        assert_eq!(
            curve.build(),
            Err(CurveError::InvalidDiscountFactor {
                date: ymd(2025, 4, 3),
                discount_factor: 0.0
            })
        );
    }

    #[test]
    fn test_failed_rebuild_drops_snapshot() {
        let mut curve = sample_curve();
        curve.add_point(ymd(2025, 4, 3), 0.98);
        // Still answering from the previous snapshot
        assert!(curve.discount(ymd(2025, 4, 3)).is_ok());

        assert!(curve.build().is_err());
        assert_eq!(curve.discount(ymd(2025, 4, 3)), Err(CurveError::NotBuilt));
    }

    #[test]
    fn test_non_monotone_factors_accepted() {
        let mut curve = DiscountCurve::from_points([
            (ymd(2025, 1, 3), 1.0),
            (ymd(2025, 4, 3), 0.97),
            (ymd(2025, 7, 3), 0.99),
        ]);
        assert!(curve.build().is_ok());
    }

    // ========================================
    // Discount
    // ========================================

    #[test]
    fn test_queries_before_build() {
        let curve = DiscountCurve::from_points([(ymd(2025, 1, 3), 1.0), (ymd(2025, 4, 3), 0.99)]);
        let d = ymd(2025, 2, 1);
        assert_eq!(curve.discount(d), Err(CurveError::NotBuilt));
        assert_eq!(
            curve.zero_rate(d, Compounding::Continuous, Frequency::Annual),
            Err(CurveError::NotBuilt)
        );
        assert_eq!(
            curve.forward_rate(d, d, Compounding::Continuous, Frequency::Annual),
            Err(CurveError::NotBuilt)
        );
        assert_eq!(curve.reference_date(), Err(CurveError::NotBuilt));
    }

    #[test]
    fn test_discount_exact_at_anchors() {
        let curve = sample_curve();
        for &(date, df) in curve.anchors() {
            assert_relative_eq!(curve.discount(date).unwrap(), df, max_relative = 1e-14);
        }
    }

    #[test]
    fn test_discount_log_linear_between_anchors() {
        let curve = sample_curve();
        // 2025-02-17 is 45 days after the reference, half way to 2025-04-03
        let df = curve.discount(ymd(2025, 2, 17)).unwrap();
        assert_relative_eq!(df, 0.99_f64.sqrt(), epsilon = 1e-14);
    }

    #[test]
    fn test_discount_flat_forward_extrapolation() {
        let curve = sample_curve();
        // Last segment: 2025-07-03 (181d, 0.975) to 2026-01-03 (365d, 0.95)
        let slope = (0.95_f64.ln() - 0.975_f64.ln()) / 184.0;
        let expected = (0.95_f64.ln() + slope * 31.0).exp();
        assert_relative_eq!(
            curve.discount(ymd(2026, 2, 3)).unwrap(),
            expected,
            epsilon = 1e-14
        );
    }

    #[test]
    fn test_discount_reject_extrapolation() {
        let mut curve = DiscountCurve::from_points([(ymd(2025, 1, 3), 1.0), (ymd(2025, 4, 3), 0.99)])
            .with_extrapolation(Extrapolation::Reject);
        curve.build().unwrap();

        assert_eq!(
            curve.discount(ymd(2025, 1, 2)),
            Err(CurveError::OutOfRange {
                date: ymd(2025, 1, 2),
                min: ymd(2025, 1, 3),
                max: ymd(2025, 4, 3),
            })
        );
        assert!(curve.discount(ymd(2025, 4, 3)).is_ok());
    }

    // ========================================
    // Zero and forward rates
    // ========================================

    #[test]
    fn test_zero_rate_at_reference_is_invalid_time_span() {
        let curve = sample_curve();
        assert_eq!(
            curve.zero_rate(ymd(2025, 1, 3), Compounding::Continuous, Frequency::Annual),
            Err(CurveError::InvalidTimeSpan { tau: 0.0 })
        );
    }

    #[test]
    fn test_zero_rate_frequency_checked_first() {
        let curve = sample_curve();
        assert_eq!(
            curve.zero_rate(ymd(2025, 1, 3), Compounding::Compounded, Frequency::NoFrequency),
            Err(CurveError::InvalidFrequency {
                compounding: Compounding::Compounded,
                frequency: Frequency::NoFrequency,
            })
        );
        assert!(curve
            .zero_rate(ymd(2025, 4, 3), Compounding::Continuous, Frequency::NoFrequency)
            .is_ok());
    }

    #[test]
    fn test_zero_rate_compounded_annual() {
        let curve = sample_curve();
        let r = curve
            .zero_rate(ymd(2026, 1, 3), Compounding::Compounded, Frequency::Annual)
            .unwrap();
        let tau = 365.0 / 360.0;
        assert_relative_eq!(r, 0.95_f64.powf(-1.0 / tau) - 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_forward_rate_date_order() {
        let curve = sample_curve();
        let d = ymd(2025, 4, 3);
        assert_eq!(
            curve.forward_rate(d, d, Compounding::Simple, Frequency::Annual),
            Err(CurveError::InvalidDateOrder { start: d, end: d })
        );
    }

    #[test]
    fn test_forward_rate_simple() {
        let curve = sample_curve();
        let fwd = curve
            .forward_rate(
                ymd(2025, 4, 3),
                ymd(2025, 7, 3),
                Compounding::Simple,
                Frequency::Annual,
            )
            .unwrap();
        assert_relative_eq!(fwd, (0.99 / 0.975 - 1.0) / (91.0 / 360.0), epsilon = 1e-12);
    }

    #[test]
    fn test_forward_constant_within_segment() {
        let curve = sample_curve();
        let a = curve
            .overnight_forward_rate(ymd(2025, 5, 1), Compounding::Continuous, Frequency::Annual)
            .unwrap();
        let b = curve
            .overnight_forward_rate(ymd(2025, 6, 1), Compounding::Continuous, Frequency::Annual)
            .unwrap();
        assert_relative_eq!(a, b, epsilon = 1e-10);
    }

    #[test]
    fn test_daily_forward_rates() {
        let curve = sample_curve();
        let rates = curve
            .daily_forward_rates(
                ymd(2025, 3, 30),
                ymd(2025, 4, 6),
                Compounding::Continuous,
                Frequency::NoFrequency,
            )
            .unwrap();
        assert_eq!(rates.len(), 7);
        assert_eq!(rates[0].0, ymd(2025, 3, 30));
        assert_eq!(rates[6].0, ymd(2025, 4, 5));
        // Forward jumps when crossing the 2025-04-03 anchor
        assert!((rates[2].1 - rates[4].1).abs() > 1e-4);
    }

    // ========================================
    // Nodes and maintenance
    // ========================================

    #[test]
    fn test_nodes_table() {
        let curve = sample_curve();
        let nodes = curve
            .nodes(Compounding::Continuous, Frequency::NoFrequency)
            .unwrap();
        assert_eq!(nodes.len(), 4);

        assert_eq!(nodes[0].time, 0.0);
        assert_eq!(nodes[0].zero_rate, None);
        assert_eq!(nodes[0].forward_rate, None);

        let last = nodes[3];
        assert_relative_eq!(last.time, 365.0 / 360.0, epsilon = 1e-15);
        assert_relative_eq!(
            last.zero_rate.unwrap(),
            -(0.95_f64.ln()) / last.time,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            last.forward_rate.unwrap(),
            (0.975_f64 / 0.95).ln() / (184.0 / 360.0),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_nodes_ignore_points_added_after_build() {
        let mut curve =
            DiscountCurve::from_points([(ymd(2025, 1, 3), 1.0), (ymd(2026, 1, 3), 0.95)]);
        curve.build().unwrap();
        curve.add_point(ymd(2024, 6, 1), 1.02);
        curve.add_point(ymd(2025, 7, 3), -5.0);

        let nodes = curve
            .nodes(Compounding::Continuous, Frequency::NoFrequency)
            .unwrap();
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[0].date, ymd(2025, 1, 3));
        assert_eq!(nodes[0].time, 0.0);
        assert_eq!(nodes[1].date, ymd(2026, 1, 3));
        assert_eq!(nodes[1].discount_factor, 0.95);
        assert!(curve.discount(ymd(2025, 7, 3)).is_ok());
        assert_eq!(curve.point_count(), 4);
    }

    #[test]
    fn test_clear_resets() {
        let mut curve = sample_curve();
        curve.clear();
        assert_eq!(curve.point_count(), 0);
        assert!(!curve.is_built());
        assert_eq!(curve.discount(ymd(2025, 1, 3)), Err(CurveError::NotBuilt));
    }

    #[test]
    fn test_day_count_changes_rates_only() {
        let mut curve = sample_curve().with_day_count(DayCountConvention::Actual365Fixed);
        curve.build().unwrap();
        let d = ymd(2026, 1, 3);
        assert_relative_eq!(curve.discount(d).unwrap(), 0.95, max_relative = 1e-14);
        let z = curve
            .zero_rate(d, Compounding::Continuous, Frequency::NoFrequency)
            .unwrap();
        assert_relative_eq!(z, -(0.95_f64.ln()), epsilon = 1e-12);
    }

    #[test]
    fn test_extrapolation_parse() {
        assert_eq!(
            "flat_forward".parse::<Extrapolation>().unwrap(),
            Extrapolation::FlatForward
        );
        assert_eq!("Reject".parse::<Extrapolation>().unwrap(), Extrapolation::Reject);
        assert!("cubic".parse::<Extrapolation>().is_err());
        assert_eq!(Extrapolation::default().to_string(), "flat-forward");
    }

    // ========================================
    // Interpolation methods
    // ========================================

    const METHODS: [Interpolation; 4] = [
        Interpolation::LogLinearDiscount,
        Interpolation::LinearZero,
        Interpolation::StepZero,
        Interpolation::CubicZero,
    ];

    fn sample_with(interpolation: Interpolation) -> DiscountCurve {
        let mut curve = sample_curve().with_interpolation(interpolation);
        curve.build().unwrap();
        curve
    }

    /// Continuous zero rate per day of offset.
    fn zero_per_day(df: f64, days: f64) -> f64 {
        -df.ln() / days
    }

    #[test]
    fn test_every_method_exact_at_anchors() {
        for method in METHODS {
            let curve = sample_with(method);
            assert_eq!(curve.interpolation(), method);
            for &(date, df) in curve.anchors() {
                assert_relative_eq!(curve.discount(date).unwrap(), df, max_relative = 1e-13);
            }
        }
    }

    #[test]
    fn test_linear_zero_between_anchors() {
        let curve = sample_with(Interpolation::LinearZero);
        // 2025-10-03 is 273 days out, half way from 181 to 365
        let z = 0.5 * (zero_per_day(0.975, 181.0) + zero_per_day(0.95, 365.0));
        let df = curve.discount(ymd(2025, 10, 3)).unwrap();
        assert_relative_eq!(df, (-z * 273.0).exp(), epsilon = 1e-14);
        assert!((df - (0.975_f64 * 0.95).sqrt()).abs() > 1e-6);
    }

    #[test]
    fn test_step_zero_holds_earlier_anchor_rate() {
        let curve = sample_with(Interpolation::StepZero);
        assert_relative_eq!(
            curve.discount(ymd(2025, 10, 3)).unwrap(),
            0.975_f64.powf(273.0 / 181.0),
            epsilon = 1e-14
        );
        // Before the second anchor the first segment uses its rate
        assert_relative_eq!(
            curve.discount(ymd(2025, 2, 17)).unwrap(),
            0.99_f64.sqrt(),
            epsilon = 1e-14
        );
    }

    #[test]
    fn test_cubic_zero_follows_spline_of_zero_rates() {
        use crate::math::interpolators::CubicSplineInterpolator;

        let curve = sample_with(Interpolation::CubicZero);
        let z1 = zero_per_day(0.99, 90.0);
        let spline = CubicSplineInterpolator::new(
            &[0.0, 90.0, 181.0, 365.0],
            &[z1, z1, zero_per_day(0.975, 181.0), zero_per_day(0.95, 365.0)],
        )
        .unwrap();

        for (date, x) in [(ymd(2025, 2, 17), 45.0), (ymd(2025, 10, 3), 273.0)] {
            let expected = (-spline.interpolate(x).unwrap() * x).exp();
            assert_relative_eq!(curve.discount(date).unwrap(), expected, epsilon = 1e-14);
        }
    }

    #[test]
    fn test_zero_methods_keep_reference_factor() {
        let mut curve =
            DiscountCurve::from_points([(ymd(2025, 1, 3), 0.98), (ymd(2026, 1, 3), 0.98 * 0.95)])
                .with_interpolation(Interpolation::LinearZero);
        curve.build().unwrap();
        assert_relative_eq!(curve.discount(ymd(2025, 1, 3)).unwrap(), 0.98, epsilon = 1e-15);
        // Two anchors: flat zero rate relative to the reference factor
        assert_relative_eq!(
            curve.discount(ymd(2025, 7, 4)).unwrap(),
            0.98 * 0.95_f64.powf(182.0 / 365.0),
            epsilon = 1e-14
        );
    }

    #[test]
    fn test_extrapolation_independent_of_method() {
        let reference = sample_curve().discount(ymd(2026, 2, 3)).unwrap();
        for method in METHODS {
            let curve = sample_with(method);
            assert_relative_eq!(
                curve.discount(ymd(2026, 2, 3)).unwrap(),
                reference,
                epsilon = 1e-15
            );
        }
    }

    #[test]
    fn test_interpolation_change_needs_rebuild() {
        let curve = sample_curve().with_interpolation(Interpolation::StepZero);
        let d = ymd(2025, 10, 3);
        assert_relative_eq!(
            curve.discount(d).unwrap(),
            (0.975_f64 * 0.95).sqrt(),
            epsilon = 1e-14
        );

        let mut curve = curve;
        curve.build().unwrap();
        assert_relative_eq!(
            curve.discount(d).unwrap(),
            0.975_f64.powf(273.0 / 181.0),
            epsilon = 1e-14
        );
    }
}
