//! # curve_core: Discount Curve Engine
//!
//! Builds interest-rate curves from anchor points and answers rate queries
//! against them consistently.
//!
//! - [`market_data::DiscountCurve`]: date-keyed discount factors with
//!   selectable interpolation (log-linear by default), zero and forward rates under a day count,
//!   compounding rule and frequency
//! - [`market_data::RateCurve`]: time-keyed zero rates with linear
//!   interpolation and `exp(-r·t)` discounting
//! - [`market_data::SharedCurve`]: single-writer / multi-reader handle
//! - Time types: `Date` (with serial numbers), `DayCountConvention` (`types::time`)
//! - Rate conventions: `Compounding`, `Frequency`, `InterestRate` (`rates`)
//! - Interpolation: `Knots`, `LinearInterpolator`, `LogLinearInterpolator`,
//!   `CubicSplineInterpolator` (`math::interpolators`)
//!
//! The engine performs no I/O and keeps no global "today": the reference date
//! of a discount curve is its earliest anchor.
//!
//! ## Usage Examples
//!
//! ```rust
//! use curve_core::market_data::DiscountCurve;
//! use curve_core::rates::{Compounding, Frequency};
//! use curve_core::types::Date;
//!
//! let mut curve = DiscountCurve::new();
//! curve.add_point(Date::parse("2025-01-03").unwrap(), 1.0);
//! curve.add_point(Date::parse("2025-07-03").unwrap(), 0.975);
//! curve.add_point(Date::parse("2026-01-03").unwrap(), 0.95);
//! curve.build().unwrap();
//!
//! let d1 = Date::parse("2025-07-03").unwrap();
//! let d2 = Date::parse("2026-01-03").unwrap();
//! let fwd = curve
//!     .forward_rate(d1, d2, Compounding::Continuous, Frequency::NoFrequency)
//!     .unwrap();
//! assert!(fwd > 0.0);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for Date, conventions and curve nodes

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod market_data;
pub mod math;
pub mod rates;
pub mod types;
