//! Cubic Hermite spline interpolation.

use super::tangents::solve_tangents;
use super::{cast, Interpolator, Method};
use crate::types::{CurveError, Degeneracy, Point};
use num_traits::Float;
use tracing::debug;

impl<T: Float> Interpolator<T> {
    /// Cubic spline interpolation with `samples` points per gap.
    ///
    /// Sorts the input points by x (keeping the original order in
    /// [`Interpolator::backup`]) and drops all but the first point of each
    /// repeated x. The remaining `m` knots get one tangent each from the
    /// continuity system, and every gap is filled with the Hermite blend
    ///
    /// ```text
    /// y(t) = (1-t)·y0 + t·y1 + t(1-t)·((1-t)·a + t·b)
    /// a = K0·dx - dy,  b = -K1·dx + dy,  t = j / (samples + 1)
    /// ```
    ///
    /// with x spaced evenly over the gap.
    ///
    /// # Returns
    ///
    /// * `Ok(gaps)` - `m - 1` gaps, or none with fewer than 3 distinct x
    /// * `Err(CurveError::DegenerateGeometry)` - Non-finite knots or a
    ///   singular tangent system
    ///
    /// # Example
    ///
    /// ```
    /// use curve_core::math::interpolators::Interpolator;
    /// use curve_core::types::Point;
    ///
    /// let mut interp = Interpolator::new(vec![
    ///     Point::new(2.0_f64, 0.0),
    ///     Point::new(0.0, 0.0),
    ///     Point::new(1.0, 1.0),
    /// ]);
    /// let gaps = interp.spline(1).unwrap();
    /// assert_eq!(gaps.len(), 2);
    /// assert!((gaps[0][0].y() - 0.625).abs() < 1e-12);
    /// ```
    pub fn spline(&mut self, samples: usize) -> Result<&[Vec<Point<T>>], CurveError> {
        self.generated.clear();
        self.sort();
        self.remove_duplicate_x();

        let m = self.points.len();
        if m < Method::Spline.min_points() {
            debug!(
                knots = m,
                "Spline interpolation skipped: not enough distinct x"
            );
            return Ok(&self.generated);
        }

        let tangents = solve_tangents(&self.points)?;

        let generated = self
            .points
            .windows(2)
            .zip(tangents.windows(2))
            .enumerate()
            .map(|(segment, (knots, k))| {
                hermite_gap(knots[0], knots[1], k[0], k[1], samples, segment)
            })
            .collect::<Result<Vec<_>, _>>()?;

        debug!(
            knots = m,
            samples,
            gaps = generated.len(),
            "Spline interpolation complete"
        );

        self.generated = generated;
        Ok(&self.generated)
    }
}

/// Sample the Hermite blend between two knots with tangents `k0`, `k1`.
fn hermite_gap<T: Float>(
    p0: Point<T>,
    p1: Point<T>,
    k0: T,
    k1: T,
    samples: usize,
    segment: usize,
) -> Result<Vec<Point<T>>, CurveError> {
    let dx = p1.x() - p0.x();
    let dy = p1.y() - p0.y();
    if dx == T::zero() {
        return Err(CurveError::degenerate(segment, Degeneracy::ZeroWidth));
    }

    let a = k0 * dx - dy;
    let b = -k1 * dx + dy;
    let steps = cast::<T>(samples + 1);

    (1..=samples)
        .map(|j| {
            let t = cast::<T>(j) / steps;
            let s = T::one() - t;
            let y = s * p0.y() + t * p1.y() + t * s * (s * a + t * b);
            let point = Point::new(p0.x() + t * dx, y);
            if point.is_finite() {
                Ok(point)
            } else {
                Err(CurveError::degenerate(segment, Degeneracy::NonFinite))
            }
        })
        .collect()
}
