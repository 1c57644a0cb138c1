//! Core geometric and error types.
//!
//! This module provides:
//! - `point`: The 2D [`Point`] value type
//! - `line`: [`Line`] slope/intercept helper over two points
//! - `error`: Structured error types for geometry, interpolation and I/O
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`Point`] from `point`
//! - [`Line`] from `line`
//! - [`CurveError`], [`Degeneracy`], [`ErrorKind`] from `error`

pub mod error;
pub mod line;
pub mod point;

pub use error::{CurveError, Degeneracy, ErrorKind};
pub use line::Line;
pub use point::Point;
