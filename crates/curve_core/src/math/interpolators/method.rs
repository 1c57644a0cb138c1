//! Interpolation method selection.

use crate::types::CurveError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Interpolation method.
///
/// Parsed case-insensitively from `"linear"` or `"spline"`.
///
/// # Example
///
/// ```
/// use curve_core::math::interpolators::Method;
///
/// let method: Method = "Linear".parse().unwrap();
/// assert_eq!(method, Method::Linear);
/// assert_eq!(Method::default(), Method::Spline);
/// assert!("bezier".parse::<Method>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    /// Piecewise-linear interpolation between neighbouring points.
    Linear,
    /// Cubic Hermite spline through the x-sorted, x-distinct knots.
    #[default]
    Spline,
}

impl Method {
    /// All supported methods.
    pub const ALL: [Method; 2] = [Method::Linear, Method::Spline];

    /// Lowercase name used on the command line and in configuration.
    pub fn name(self) -> &'static str {
        match self {
            Method::Linear => "linear",
            Method::Spline => "spline",
        }
    }

    /// Minimum number of usable points for the method to generate anything.
    ///
    /// For [`Method::Spline`] the count is of points with distinct x.
    pub fn min_points(self) -> usize {
        match self {
            Method::Linear => 2,
            Method::Spline => 3,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Method {
    type Err = CurveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "linear" => Ok(Method::Linear),
            "spline" => Ok(Method::Spline),
            other => Err(CurveError::Config(format!(
                "Unknown interpolation method: {}. Supported: linear, spline",
                other
            ))),
        }
    }
}
