//! Numerical building blocks for curve construction.
//!
//! - [`interpolators`]: ordered sample sets and 1D interpolation strategies

pub mod interpolators;
