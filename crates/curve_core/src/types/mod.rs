//! Core time and error types.
//!
//! This module provides:
//! - `time`: `Date` (with serial numbers) and `DayCountConvention`
//! - `error`: Structured error types for date, interpolation and rate operations
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`Date`], [`DayCountConvention`] from `time`
//! - [`DateError`], [`InterpolationError`], [`RateError`] from `error`

pub mod error;
pub mod time;

pub use error::{DateError, InterpolationError, RateError};
pub use time::{Date, DayCountConvention};
