//! Error types for structured error handling.
//!
//! This module provides:
//! - `DateError`: Errors from date construction, parsing and serial conversion
//! - `InterpolationError`: Errors from interpolation operations
//! - `RateError`: Errors from compounding-rule inversion

use std::fmt;
use thiserror::Error;

use crate::rates::{Compounding, Frequency};

/// Date-related errors.
///
/// Provides structured error handling for date construction and parsing
/// with descriptive context for each failure mode.
///
/// # Variants
/// - `InvalidDate`: Invalid date components (e.g., February 30th)
/// - `ParseError`: Failed to parse date string
/// - `SerialOutOfRange`: Serial number does not map to a representable date
///
/// # Examples
/// ```
/// use curve_core::types::DateError;
///
/// let err = DateError::InvalidDate { year: 2024, month: 2, day: 30 };
/// assert_eq!(format!("{}", err), "Invalid date: 2024-2-30");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    /// Invalid date components (e.g., February 30th).
    InvalidDate {
        /// Year component
        year: i32,
        /// Month component (1-12)
        month: u32,
        /// Day component (1-31)
        day: u32,
    },

    /// Failed to parse date string.
    ParseError(String),

    /// Serial number outside the representable date range.
    SerialOutOfRange(i64),
}

impl fmt::Display for DateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateError::InvalidDate { year, month, day } => {
                write!(f, "Invalid date: {}-{}-{}", year, month, day)
            }
            DateError::ParseError(msg) => write!(f, "Date parse error: {}", msg),
            DateError::SerialOutOfRange(serial) => {
                write!(f, "Serial number out of range: {}", serial)
            }
        }
    }
}

impl std::error::Error for DateError {}

/// Interpolation-related errors.
///
/// # Variants
/// - `OutOfBounds`: Query point outside valid interpolation domain
/// - `InsufficientData`: Not enough data points for interpolation
/// - `DuplicateKnot`: Two knots share the same x-coordinate
/// - `NonPositiveValue`: Log-space interpolation over a value <= 0
/// - `InvalidInput`: General invalid input error
///
/// # Examples
/// ```
/// use curve_core::types::InterpolationError;
///
/// let err = InterpolationError::OutOfBounds { x: 5.0, min: 0.0, max: 3.0 };
/// assert!(format!("{}", err).contains("outside valid domain"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InterpolationError {
    /// Query point outside valid interpolation domain.
    #[error("Query point {x} outside valid domain [{min}, {max}]")]
    OutOfBounds {
        /// The query point that was out of bounds
        x: f64,
        /// Minimum valid value
        min: f64,
        /// Maximum valid value
        max: f64,
    },

    /// Insufficient data points for interpolation.
    #[error("Insufficient data points: got {got}, need at least {need}")]
    InsufficientData {
        /// Number of points provided
        got: usize,
        /// Minimum number of points required
        need: usize,
    },

    /// Two knots share the same x-coordinate.
    #[error("Duplicate knot at x = {x}")]
    DuplicateKnot {
        /// The repeated x-coordinate
        x: f64,
    },

    /// Log-linear interpolation requires strictly positive values.
    #[error("Non-positive value {value} at index {index}")]
    NonPositiveValue {
        /// Index of the offending knot (in sorted order)
        index: usize,
        /// The offending value
        value: f64,
    },

    /// Invalid input data or parameters.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Errors raised while converting between rates and compound factors.
///
/// # Examples
/// ```
/// use curve_core::types::RateError;
///
/// let err = RateError::InvalidTimeSpan { tau: 0.0 };
/// assert_eq!(format!("{}", err), "Invalid time span: tau = 0");
/// ```
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum RateError {
    /// The compounding rule needs a periodic frequency.
    #[error("Frequency {frequency} not allowed with {compounding} compounding")]
    InvalidFrequency {
        /// Requested compounding rule
        compounding: Compounding,
        /// Rejected frequency
        frequency: Frequency,
    },

    /// Year fraction must be strictly positive.
    #[error("Invalid time span: tau = {tau}")]
    InvalidTimeSpan {
        /// The rejected year fraction
        tau: f64,
    },

    /// Compound factors (and discount factors) must be positive and finite.
    #[error("Non-positive compound factor: {compound}")]
    NonPositiveCompoundFactor {
        /// The rejected compound factor
        compound: f64,
    },
}
