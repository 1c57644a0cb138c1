//! Two-dimensional point value type.

use num_traits::Float;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

/// A 2D coordinate.
///
/// Plain value type: `Copy`, no invariants beyond those of `T`. NaN and
/// infinite coordinates are representable and propagate through arithmetic.
///
/// # Example
///
/// ```
/// use curve_core::types::Point;
///
/// let a = Point::new(1.0, 2.0);
/// let b = Point::new(3.0, 4.0);
/// assert_eq!(a + b, Point::new(4.0, 6.0));
/// assert_eq!((b - a) / 2.0, Point::new(1.0, 1.0));
/// assert_eq!(a.to_string(), "(1, 2)");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point<T> {
    x: T,
    y: T,
}

impl<T: Float> Point<T> {
    /// Construct a point from its coordinates.
    #[inline]
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// The origin.
    #[inline]
    pub fn zero() -> Self {
        Self::new(T::zero(), T::zero())
    }

    /// x coordinate.
    #[inline]
    pub fn x(&self) -> T {
        self.x
    }

    /// y coordinate.
    #[inline]
    pub fn y(&self) -> T {
        self.y
    }

    /// Replace the x coordinate.
    #[inline]
    pub fn set_x(&mut self, x: T) {
        self.x = x;
    }

    /// Replace the y coordinate.
    #[inline]
    pub fn set_y(&mut self, y: T) {
        self.y = y;
    }

    /// True if both coordinates are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl<T: Float + fmt::Display> Point<T> {
    /// Render as `"(x, y)"`, preceded by a line break if `newline` is set.
    pub fn render(&self, newline: bool) -> String {
        if newline {
            format!("\n{}", self)
        } else {
            self.to_string()
        }
    }
}

impl<T: fmt::Display> fmt::Display for Point<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl<T: Float> Add for Point<T> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<T: Float> Sub for Point<T> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl<T: Float> Mul<T> for Point<T> {
    type Output = Self;

    #[inline]
    fn mul(self, s: T) -> Self {
        Self::new(self.x * s, self.y * s)
    }
}

impl<T: Float> Div<T> for Point<T> {
    type Output = Self;

    #[inline]
    fn div(self, s: T) -> Self {
        Self::new(self.x / s, self.y / s)
    }
}

impl<T: Float> From<(T, T)> for Point<T> {
    fn from((x, y): (T, T)) -> Self {
        Self::new(x, y)
    }
}
