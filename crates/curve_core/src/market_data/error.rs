//! Curve error types.
//!
//! This module provides structured error handling for curve construction
//! and rate queries.

use crate::rates::{Compounding, Frequency};
use crate::types::{Date, DateError, InterpolationError, RateError};
use thiserror::Error;

/// Curve operation errors.
///
/// Every fallible curve operation reports one of these synchronously; the
/// curve is left unchanged (or, for a failed build, unbuilt with its anchors
/// retained).
///
/// # Variants
///
/// - `InsufficientPoints`: Build with fewer than two anchors
/// - `DuplicateDate`: Two anchors share a date
/// - `InvalidDiscountFactor`: Anchor factor is not strictly positive and finite
/// - `NotBuilt`: Query before a successful build
/// - `InvalidDateOrder`: Forward period with start on or after end
/// - `InvalidTimeSpan`: Non-positive year fraction in a rate conversion
/// - `InvalidFrequency`: Periodic compounding without a periodic frequency
/// - `NegativeTime`: Rate sample at a negative or non-finite time
/// - `OutOfRange`: Query outside the anchors under a rejecting extrapolation policy
/// - `Interpolation`: Wrapped interpolation error
/// - `Date`: Wrapped date arithmetic error
///
/// # Examples
///
/// ```
/// use curve_core::market_data::CurveError;
///
/// let err = CurveError::InsufficientPoints { got: 1, need: 2 };
/// assert_eq!(format!("{}", err), "Insufficient points: got 1, need at least 2");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CurveError {
    /// Fewer anchors than needed to build.
    #[error("Insufficient points: got {got}, need at least {need}")]
    InsufficientPoints {
        /// Number of anchors supplied
        got: usize,
        /// Minimum number of anchors
        need: usize,
    },

    /// Two anchors on the same date.
    #[error("Duplicate anchor date: {date}")]
    DuplicateDate {
        /// The repeated date
        date: Date,
    },

    /// Anchor discount factor not strictly positive and finite.
    #[error("Invalid discount factor {discount_factor} at {date}")]
    InvalidDiscountFactor {
        /// Anchor date
        date: Date,
        /// The rejected factor
        discount_factor: f64,
    },

    /// Query issued before a successful build.
    #[error("Curve not built")]
    NotBuilt,

    /// Forward period start is not strictly before its end.
    #[error("Invalid date order: {start} is not before {end}")]
    InvalidDateOrder {
        /// Period start
        start: Date,
        /// Period end
        end: Date,
    },

    /// Year fraction must be strictly positive.
    #[error("Invalid time span: tau = {tau}")]
    InvalidTimeSpan {
        /// The rejected year fraction
        tau: f64,
    },

    /// Compounding rule needs a periodic frequency.
    #[error("Frequency {frequency} not allowed with {compounding} compounding")]
    InvalidFrequency {
        /// Requested compounding rule
        compounding: Compounding,
        /// Rejected frequency
        frequency: Frequency,
    },

    /// Rate sample time must be finite and non-negative.
    #[error("Negative or non-finite time: t = {time}")]
    NegativeTime {
        /// The rejected time
        time: f64,
    },

    /// Query date outside the anchor range with extrapolation disabled.
    #[error("Date {date} outside curve range [{min}, {max}]")]
    OutOfRange {
        /// Query date
        date: Date,
        /// First anchor date
        min: Date,
        /// Last anchor date
        max: Date,
    },

    /// Interpolation error.
    #[error("Interpolation error: {0}")]
    Interpolation(#[from] InterpolationError),

    /// Date arithmetic left the representable range.
    #[error("Date error: {0}")]
    Date(#[from] DateError),
}

impl CurveError {
    /// Converts a rate-conversion error raised while quoting a rate to `date`.
    pub(crate) fn from_rate(err: RateError, date: Date) -> Self {
        match err {
            RateError::InvalidFrequency {
                compounding,
                frequency,
            } => CurveError::InvalidFrequency {
                compounding,
                frequency,
            },
            RateError::InvalidTimeSpan { tau } => CurveError::InvalidTimeSpan { tau },
            RateError::NonPositiveCompoundFactor { compound } => {
                CurveError::InvalidDiscountFactor {
                    date,
                    discount_factor: 1.0 / compound,
                }
            }
        }
    }
}
