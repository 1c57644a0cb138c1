//! Curve interpolation through 2D sample points.
//!
//! An [`Interpolator`] owns a sequence of input points and fills every gap
//! between neighbouring points with a configurable number of generated
//! points, using one of two methods:
//!
//! - [`Interpolator::linear`]: piecewise-linear, in the caller's point order
//! - [`Interpolator::spline`]: cubic Hermite spline over the x-sorted,
//!   x-distinct knots, with tangents solved from a continuity system
//!
//! ## Result Shape
//!
//! The generated points form a matrix with one row per gap. Row `i` holds
//! the points strictly between input point `i` and `i + 1`; the input points
//! themselves are never repeated. Use [`Interpolator::interleaved`] for the
//! full curve.
//!
//! ## Under-determined Input
//!
//! Too few points is not an error: the call succeeds and generates nothing.
//! [`Interpolator::ensure_determined`] reports the case explicitly.
//!
//! ## Example
//!
//! ```
//! use curve_core::math::interpolators::{Interpolator, Method};
//! use curve_core::types::Point;
//!
//! let points = vec![
//!     Point::new(0.0, 0.0),
//!     Point::new(1.0, 2.0),
//!     Point::new(3.0, 1.0),
//! ];
//!
//! let mut interp = Interpolator::new(points);
//! let gaps = interp.run(Method::Linear, 3).unwrap();
//! assert_eq!(gaps.len(), 2);
//! assert!(gaps.iter().all(|gap| gap.len() == 3));
//!
//! // Input points and generated points in curve order
//! assert_eq!(interp.interleaved().len(), 3 + 2 * 3);
//! ```

mod interpolator;
mod linear;
mod method;
mod spline;
mod tangents;

pub use interpolator::{interleave, GapMatrix, Interpolator};
pub use method::Method;

use num_traits::Float;

/// Convert a sample index or count to `T`.
///
/// Every `Float` can represent small counts; NaN is returned otherwise and
/// caught by the finiteness checks of the callers.
#[inline]
fn cast<T: Float>(n: usize) -> T {
    T::from(n).unwrap_or_else(T::nan)
}

/// Total-order key for sorting by coordinate.
///
/// Every `Float` widens to `f64` without reordering. NaN of either sign maps
/// to the positive quiet NaN, which sorts after `+inf`.
#[inline]
fn order_key<T: Float>(v: T) -> f64 {
    match v.to_f64() {
        Some(key) if !key.is_nan() => key,
        _ => f64::NAN,
    }
}
