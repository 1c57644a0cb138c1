//! Interpolator state and auxiliary operations.

use super::{order_key, Method};
use crate::types::{CurveError, Point};
use num_traits::Float;
use std::fmt::{self, Write};
use tracing::trace;

/// Generated points, one inner vector per gap between neighbouring input points.
pub type GapMatrix<T> = Vec<Vec<Point<T>>>;

/// Curve interpolator over a sequence of input points.
///
/// Owns the input points and the matrix of generated points. Gap `i` of the
/// matrix holds the points strictly between input point `i` and `i + 1`,
/// endpoints excluded. The matrix is derived state: every method call
/// rebuilds it from the input points, and a failed call leaves it empty.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`, `f32`)
///
/// # Example
///
/// ```
/// use curve_core::math::interpolators::Interpolator;
/// use curve_core::types::Point;
///
/// let mut interp = Interpolator::new(vec![Point::new(0.0, 0.0), Point::new(2.0, 4.0)]);
/// let generated = interp.linear(1).unwrap();
/// assert_eq!(generated, &[vec![Point::new(1.0, 2.0)]]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Interpolator<T> {
    /// Input points, in caller order until sorted
    pub(super) points: Vec<Point<T>>,
    /// Input points in the order they had before the first sort
    pub(super) backup: Vec<Point<T>>,
    /// Generated points per gap
    pub(super) generated: GapMatrix<T>,
}

impl<T: Float> Interpolator<T> {
    /// Create an interpolator over `points`.
    pub fn new(points: Vec<Point<T>>) -> Self {
        Self {
            points,
            backup: Vec::new(),
            generated: Vec::new(),
        }
    }

    /// Input points in their current order.
    #[inline]
    pub fn points(&self) -> &[Point<T>] {
        &self.points
    }

    /// Input points as they were before the first sort; empty if never sorted.
    #[inline]
    pub fn backup(&self) -> &[Point<T>] {
        &self.backup
    }

    /// Replace the input points, discarding generated points and the backup.
    pub fn set_points(&mut self, points: Vec<Point<T>>) {
        self.points = points;
        self.backup.clear();
        self.generated.clear();
    }

    /// Generated points per gap.
    #[inline]
    pub fn generated(&self) -> &[Vec<Point<T>>] {
        &self.generated
    }

    /// Discard the generated points; input points are untouched.
    pub fn clear(&mut self) {
        self.generated.clear();
    }

    /// Generated points of all gaps, in gap order.
    pub fn flattened(&self) -> Vec<Point<T>> {
        self.generated.iter().flatten().copied().collect()
    }

    /// Input points with the generated points of each following gap.
    pub fn interleaved(&self) -> Vec<Point<T>> {
        interleave(&self.points, &self.generated)
    }

    /// Run `method` with `samples` points per gap.
    pub fn run(&mut self, method: Method, samples: usize) -> Result<&[Vec<Point<T>>], CurveError> {
        match method {
            Method::Linear => self.linear(samples),
            Method::Spline => self.spline(samples),
        }
    }

    /// Fail with [`CurveError::UnderDetermined`] if `method` would be a no-op
    /// on the current input.
    ///
    /// [`Interpolator::linear`] and [`Interpolator::spline`] treat too few
    /// points as success with nothing generated; this is for callers that
    /// want to report that case.
    pub fn ensure_determined(&self, method: Method) -> Result<(), CurveError> {
        let got = match method {
            Method::Linear => self.points.len(),
            Method::Spline => distinct_x_count(&self.points),
        };
        let need = method.min_points();
        if got < need {
            return Err(CurveError::UnderDetermined { got, need });
        }
        Ok(())
    }

    /// Stable ascending sort of the input points by x.
    ///
    /// NaN x sorts after every number.
    /// The order before the first sort is kept in [`Interpolator::backup`].
    /// Sorting an already sorted sequence changes nothing.
    pub fn sort(&mut self) {
        if self.backup.is_empty() {
            self.backup = self.points.clone();
        }
        self.points
            .sort_by(|a, b| order_key(a.x()).total_cmp(&order_key(b.x())));
    }

    /// Keep only the first point of each run of equal x.
    ///
    /// Sorts first if the points have never been sorted.
    pub fn remove_duplicate_x(&mut self) {
        if self.backup.is_empty() {
            self.sort();
        }
        let before = self.points.len();
        self.points.dedup_by(|current, kept| current.x() == kept.x());
        trace!(
            removed = before - self.points.len(),
            remaining = self.points.len(),
            "Removed duplicate x"
        );
    }
}

impl<T: Float + fmt::Display> Interpolator<T> {
    /// Generated points as `"(x, y)"` text, gap by gap.
    ///
    /// With `newline` set, every point starts on a new line and each gap is
    /// terminated by a line break.
    pub fn render_generated(&self, newline: bool) -> String {
        let mut out = String::new();
        for gap in &self.generated {
            for point in gap {
                out.push_str(&point.render(newline));
            }
            if newline {
                out.push('\n');
            }
        }
        out
    }

    /// Human-readable report of the generated points between each input pair.
    pub fn pretty(&self) -> String {
        let mut out = String::new();
        for (pair, gap) in self.points.windows(2).zip(&self.generated) {
            // Writing to a String cannot fail.
            let _ = writeln!(
                out,
                "Interpolated points between point {} and {}:",
                pair[0], pair[1]
            );
            let row: Vec<String> = gap.iter().map(ToString::to_string).collect();
            let _ = writeln!(out, "{}", row.join(" "));
            out.push('\n');
        }
        out
    }
}

/// Interleave input points with the generated points of the gap after each.
///
/// The final input point is emitted last. Missing gaps are treated as empty.
///
/// # Example
///
/// ```
/// use curve_core::math::interpolators::interleave;
/// use curve_core::types::Point;
///
/// let points = [Point::new(0.0, 0.0), Point::new(2.0, 2.0)];
/// let generated = vec![vec![Point::new(1.0, 1.0)]];
/// let all = interleave(&points, &generated);
/// assert_eq!(all.len(), 3);
/// assert_eq!(all[1], Point::new(1.0, 1.0));
/// ```
pub fn interleave<T: Float>(points: &[Point<T>], generated: &[Vec<Point<T>>]) -> Vec<Point<T>> {
    let capacity = points.len() + generated.iter().map(Vec::len).sum::<usize>();
    let mut out = Vec::with_capacity(capacity);
    for (i, point) in points.iter().enumerate() {
        out.push(*point);
        if i + 1 < points.len() {
            if let Some(gap) = generated.get(i) {
                out.extend_from_slice(gap);
            }
        }
    }
    out
}

fn distinct_x_count<T: Float>(points: &[Point<T>]) -> usize {
    let mut xs: Vec<f64> = points.iter().map(|p| order_key(p.x())).collect();
    xs.sort_by(f64::total_cmp);
    xs.dedup();
    xs.len()
}
