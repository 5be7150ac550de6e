//! Curve engines.
//!
//! This module provides:
//! - [`DiscountCurve`]: Date-keyed discount factors, zero and forward rates
//!   under a day count and compounding rule
//! - [`Interpolation`]: Log-linear discount, linear, step or cubic zero rates
//! - [`RateCurve`]: Time-keyed zero rates with linear interpolation
//! - [`SharedCurve`]: `Arc<RwLock<_>>` handle for cross-thread use
//! - [`Extrapolation`]: Policy for dates outside the anchor range
//! - [`CurveNode`], [`RatePoint`]: Curve table rows

mod discount;
mod interpolation;
mod rate;
mod shared;

pub use discount::{CurveNode, DiscountCurve, Extrapolation};
pub use interpolation::Interpolation;
pub use rate::{RateCurve, RatePoint};
pub use shared::SharedCurve;
