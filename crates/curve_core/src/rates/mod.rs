//! Interest rate conventions.
//!
//! This module provides:
//! - [`Compounding`]: Simple, compounded, continuous and simple-then-compounded rules
//! - [`Frequency`]: Compounding frequencies with integer tags
//! - [`InterestRate`]: Rate value with compound factor and inversion
//! - [`continuous_discount`]: `exp(-r·t)` helper
//!
//! # Example
//!
//! ```
//! use curve_core::rates::{Compounding, Frequency, InterestRate};
//!
//! // Zero rate implied by a 0.9 discount factor over two years
//! let zero = InterestRate::implied(1.0 / 0.9, 2.0, Compounding::Compounded, Frequency::Annual)
//!     .unwrap();
//! assert!((zero.discount_factor(2.0) - 0.9).abs() < 1e-12);
//! ```

mod compounding;
mod interest_rate;

pub use compounding::{Compounding, Frequency};
pub use interest_rate::{continuous_discount, InterestRate};
