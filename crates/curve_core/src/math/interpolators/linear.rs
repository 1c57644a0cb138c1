//! Piecewise-linear interpolation.

use super::{cast, Interpolator, Method};
use crate::types::{CurveError, Degeneracy, Line, Point};
use num_traits::Float;
use tracing::debug;

impl<T: Float> Interpolator<T> {
    /// Piecewise-linear interpolation with `samples` points per gap.
    ///
    /// Gaps follow the current order of the input points, which are not
    /// modified. Each gap gets `samples` evenly spaced points strictly
    /// between its endpoints: spaced in x on a regular segment, in y on a
    /// vertical one (where the slope is never evaluated).
    ///
    /// # Returns
    ///
    /// * `Ok(gaps)` - `points.len() - 1` gaps, or none with fewer than 2 points
    /// * `Err(CurveError::DegenerateGeometry)` - Non-finite coordinates, or
    ///   coincident neighbours when `samples > 0`
    ///
    /// # Example
    ///
    /// ```
    /// use curve_core::math::interpolators::Interpolator;
    /// use curve_core::types::Point;
    ///
    /// let mut interp = Interpolator::new(vec![Point::new(5.0, 0.0), Point::new(5.0, 9.0)]);
    /// let gaps = interp.linear(2).unwrap();
    /// assert_eq!(gaps[0], vec![Point::new(5.0, 3.0), Point::new(5.0, 6.0)]);
    /// ```
    pub fn linear(&mut self, samples: usize) -> Result<&[Vec<Point<T>>], CurveError> {
        self.generated.clear();

        if self.points.len() < Method::Linear.min_points() {
            debug!(
                points = self.points.len(),
                "Linear interpolation skipped: not enough points"
            );
            return Ok(&self.generated);
        }

        let generated = self
            .points
            .windows(2)
            .enumerate()
            .map(|(segment, pair)| linear_gap(Line::new(pair[0], pair[1]), samples, segment))
            .collect::<Result<Vec<_>, _>>()?;

        debug!(
            points = self.points.len(),
            samples,
            gaps = generated.len(),
            "Linear interpolation complete"
        );

        self.generated = generated;
        Ok(&self.generated)
    }
}

/// Points strictly inside one segment.
fn linear_gap<T: Float>(
    line: Line<T>,
    samples: usize,
    segment: usize,
) -> Result<Vec<Point<T>>, CurveError> {
    let (p1, p2) = (line.p1(), line.p2());
    if !p1.is_finite() || !p2.is_finite() {
        return Err(CurveError::degenerate(segment, Degeneracy::NonFinite));
    }

    let steps = cast::<T>(samples + 1);
    let mut gap = Vec::with_capacity(samples);

    if line.is_vertical() {
        if samples > 0 && p1.y() == p2.y() {
            return Err(CurveError::degenerate(segment, Degeneracy::CoincidentPoints));
        }
        let increment = (p2.y() - p1.y()) / steps;
        for j in 1..=samples {
            let point = Point::new(p1.x(), p1.y() + cast::<T>(j) * increment);
            if !point.is_finite() {
                return Err(CurveError::degenerate(segment, Degeneracy::NonFinite));
            }
            gap.push(point);
        }
        return Ok(gap);
    }

    let to_error = |reason| CurveError::degenerate(segment, reason);
    let slope = line.slope().map_err(to_error)?;
    let intercept = line.y_intercept().map_err(to_error)?;
    let increment = (p2.x() - p1.x()) / steps;

    for j in 1..=samples {
        let x = p1.x() + cast::<T>(j) * increment;
        let point = Point::new(x, intercept + slope * x);
        if !point.is_finite() {
            return Err(to_error(Degeneracy::NonFinite));
        }
        gap.push(point);
    }

    Ok(gap)
}
