//! Error types for structured error handling.
//!
//! This module provides:
//! - `CurveError`: Errors from geometry, interpolation and point file operations
//! - `Degeneracy`: The geometric reason behind a `DegenerateGeometry` error
//! - `ErrorKind`: The closed classification every `CurveError` maps onto

use std::path::PathBuf;
use thiserror::Error;

/// Classification of a [`CurveError`].
///
/// # Variants
/// - `Config`: Bad configuration or unreadable/malformed input
/// - `Io`: Filesystem failure while reading or writing point files
/// - `DegenerateGeometry`: Input geometry the requested operation cannot handle
/// - `UnderDetermined`: Too few points for the requested method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Configuration or input-format problem
    Config,
    /// Filesystem failure
    Io,
    /// Degenerate geometry detected during computation
    DegenerateGeometry,
    /// Not enough points to define the curve
    UnderDetermined,
}

/// Geometric reason for a degenerate segment.
///
/// # Examples
/// ```
/// use curve_core::types::Degeneracy;
///
/// assert_eq!(Degeneracy::ZeroWidth.to_string(), "segment has zero width");
/// ```
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Degeneracy {
    /// Both points share an x coordinate, so the slope is undefined.
    #[error("vertical line has no finite slope")]
    VerticalLine,

    /// Both endpoints of the segment are the same point.
    #[error("segment endpoints coincide")]
    CoincidentPoints,

    /// Segment width in x is zero where a function of x is required.
    #[error("segment has zero width")]
    ZeroWidth,

    /// The tangent system has no unique solution.
    #[error("tangent system is singular")]
    SingularSystem,

    /// A coordinate or intermediate result is NaN or infinite.
    #[error("non-finite coordinate")]
    NonFinite,
}

/// Curve engine errors.
///
/// Every failure of the engine surfaces as one of these variants rather than
/// as a NaN in the generated points.
///
/// # Examples
/// ```
/// use curve_core::types::{CurveError, Degeneracy, ErrorKind};
///
/// let err = CurveError::DegenerateGeometry { segment: 2, reason: Degeneracy::ZeroWidth };
/// assert_eq!(format!("{}", err), "Degenerate segment 2: segment has zero width");
/// assert_eq!(err.kind(), ErrorKind::DegenerateGeometry);
/// ```
#[derive(Error, Debug)]
pub enum CurveError {
    /// Invalid configuration value.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A line of a point file could not be parsed.
    #[error("Parse error at {}:{line}: {message}", path.display())]
    Parse {
        /// File being parsed
        path: PathBuf,
        /// One-based line number
        line: usize,
        /// What was wrong with the line
        message: String,
    },

    /// Filesystem failure on the given path.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// Path that was being read or written
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Degenerate geometry detected while interpolating.
    #[error("Degenerate segment {segment}: {reason}")]
    DegenerateGeometry {
        /// Index of the offending gap (or knot, for the tangent system)
        segment: usize,
        /// Why the segment is degenerate
        reason: Degeneracy,
    },

    /// Not enough points for the requested method.
    #[error("Under-determined input: got {got} points, need at least {need}")]
    UnderDetermined {
        /// Number of usable points
        got: usize,
        /// Minimum number of points required
        need: usize,
    },
}

impl CurveError {
    /// Create an I/O error for `path`.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a degenerate-geometry error.
    pub fn degenerate(segment: usize, reason: Degeneracy) -> Self {
        Self::DegenerateGeometry { segment, reason }
    }

    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            CurveError::Config(_) | CurveError::Parse { .. } => ErrorKind::Config,
            CurveError::Io { .. } => ErrorKind::Io,
            CurveError::DegenerateGeometry { .. } => ErrorKind::DegenerateGeometry,
            CurveError::UnderDetermined { .. } => ErrorKind::UnderDetermined,
        }
    }
}
