//! Market data structures: discount and rate curves.
//!
//! # Components
//!
//! - [`curves`]: `DiscountCurve`, `RateCurve` and the shared handle
//! - [`error`]: Curve error type (`CurveError`)
//!
//! # Example
//!
//! ```
//! use curve_core::market_data::{CurveError, DiscountCurve, RateCurve};
//! use curve_core::types::Date;
//!
//! let mut curve = DiscountCurve::new();
//! curve.add_point(Date::from_ymd(2025, 1, 3).unwrap(), 1.0);
//! assert_eq!(
//!     curve.build(),
//!     Err(CurveError::InsufficientPoints { got: 1, need: 2 })
//! );
//!
//! let mut rates = RateCurve::new();
//! rates.add_point(1.0, 0.05).unwrap();
//! assert!((rates.discount(1.0) - 0.951229).abs() < 1e-5);
//! ```

pub mod curves;
pub mod error;

// Re-export commonly used types
pub use curves::{
    CurveNode, DiscountCurve, Extrapolation, Interpolation, RateCurve, RatePoint, SharedCurve,
};
pub use error::CurveError;
