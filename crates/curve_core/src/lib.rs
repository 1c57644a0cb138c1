//! # curve_core: Curve Interpolation Engine
//!
//! curve_core turns a set of 2D sample points into a densely sampled curve
//! passing through them, using either piecewise-linear or cubic Hermite
//! spline interpolation. It provides:
//! - The [`Point`](types::Point) value type and [`Line`](types::Line) helper (`types`)
//! - The [`Interpolator`](math::interpolators::Interpolator) and method
//!   selection (`math::interpolators`)
//! - Two-column point file I/O (`io`)
//! - Error types: `CurveError`, `Degeneracy`, `ErrorKind` (`types::error`)
//!
//! ## Dependencies
//!
//! - num-traits: Traits for generic floating-point computation
//! - nalgebra: QR solve of the spline tangent system
//! - thiserror: Error derivation
//! - serde: Serialisation of points and methods
//! - tracing: Debug-level events for each interpolation run
//!
//! ## Usage Examples
//!
//! ```rust
//! use curve_core::math::interpolators::{Interpolator, Method};
//! use curve_core::types::Point;
//!
//! let mut interp = Interpolator::new(vec![
//!     Point::new(0.0, 0.0),
//!     Point::new(2.0, 4.0),
//! ]);
//!
//! // Linear: the single sample of a two-point input is the midpoint
//! let gaps = interp.run(Method::Linear, 1).unwrap();
//! assert_eq!(gaps[0][0], Point::new(1.0, 2.0));
//!
//! // Spline: two knots are not enough, nothing is generated
//! let gaps = interp.run(Method::Spline, 1).unwrap();
//! assert!(gaps.is_empty());
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod io;
pub mod math;
pub mod types;
