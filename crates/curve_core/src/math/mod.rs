//! Numerical algorithms.
//!
//! - `interpolators`: Piecewise-linear and cubic Hermite curve interpolation

pub mod interpolators;
