//! Straight line through two points.

use super::{Degeneracy, Point};
use num_traits::Float;

/// Line through `p1` and `p2`.
///
/// Built on demand for each pair of neighbouring input points. Slope and
/// intercept are undefined for vertical lines and are reported as
/// [`Degeneracy::VerticalLine`] instead of dividing by zero.
///
/// # Example
///
/// ```
/// use curve_core::types::{Degeneracy, Line, Point};
///
/// let line = Line::new(Point::new(0.0, 1.0), Point::new(2.0, 5.0));
/// assert_eq!(line.slope(), Ok(2.0));
/// assert_eq!(line.y_intercept(), Ok(1.0));
///
/// let vertical = Line::new(Point::new(1.0, 0.0), Point::new(1.0, 3.0));
/// assert_eq!(vertical.slope(), Err(Degeneracy::VerticalLine));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line<T> {
    p1: Point<T>,
    p2: Point<T>,
}

impl<T: Float> Line<T> {
    /// Line from `p1` to `p2`.
    #[inline]
    pub fn new(p1: Point<T>, p2: Point<T>) -> Self {
        Self { p1, p2 }
    }

    /// First point.
    #[inline]
    pub fn p1(&self) -> Point<T> {
        self.p1
    }

    /// Second point.
    #[inline]
    pub fn p2(&self) -> Point<T> {
        self.p2
    }

    /// Replace the first point.
    #[inline]
    pub fn set_p1(&mut self, p: Point<T>) {
        self.p1 = p;
    }

    /// Replace the second point.
    #[inline]
    pub fn set_p2(&mut self, p: Point<T>) {
        self.p2 = p;
    }

    /// True if both points share an x coordinate.
    #[inline]
    pub fn is_vertical(&self) -> bool {
        self.p1.x() == self.p2.x()
    }

    /// `(y2 - y1) / (x2 - x1)`.
    pub fn slope(&self) -> Result<T, Degeneracy> {
        if self.is_vertical() {
            return Err(Degeneracy::VerticalLine);
        }
        Ok((self.p2.y() - self.p1.y()) / (self.p2.x() - self.p1.x()))
    }

    /// `y1 - slope * x1`.
    pub fn y_intercept(&self) -> Result<T, Degeneracy> {
        Ok(self.p1.y() - self.slope()? * self.p1.x())
    }

    /// Evaluate the line equation at `x`.
    pub fn y_at(&self, x: T) -> Result<T, Degeneracy> {
        let slope = self.slope()?;
        Ok(self.y_intercept()? + slope * x)
    }

    /// Point at parameter `t` along the segment (`t = 0` is `p1`, `t = 1` is `p2`).
    ///
    /// Defined for vertical lines too.
    #[inline]
    pub fn lerp(&self, t: T) -> Point<T> {
        self.p1 + (self.p2 - self.p1) * t
    }
}
