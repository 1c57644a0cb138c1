//! Knot tangents for the cubic Hermite spline.
//!
//! Interior rows require the second derivative of the Hermite blend to match
//! across each interior knot:
//!
//! ```text
//! K[i-1]/dx1 + 2·K[i]·(1/dx1 + 1/dx2) + K[i+1]/dx2 = 3·(dy1/dx1² + dy2/dx2²)
//! ```
//!
//! The boundary rows pin `K[0]` and `K[m-1]` to the slope of the first and
//! last segment. The system is solved in `f64` with a column-pivoted
//! Householder QR.

use crate::types::{CurveError, Degeneracy, Point};
use nalgebra::{DMatrix, DVector};
use num_traits::Float;

/// Solve for one tangent per knot.
///
/// `knots` must be sorted by x with at least two entries.
pub(super) fn solve_tangents<T: Float>(knots: &[Point<T>]) -> Result<Vec<T>, CurveError> {
    let m = knots.len();
    let (xs, ys) = to_f64(knots)?;

    // Segment widths, checked before anything divides by them
    let dx: Vec<f64> = xs.windows(2).map(|w| w[1] - w[0]).collect();
    let dy: Vec<f64> = ys.windows(2).map(|w| w[1] - w[0]).collect();
    if let Some(segment) = dx.iter().position(|&w| w == 0.0) {
        return Err(CurveError::degenerate(segment, Degeneracy::ZeroWidth));
    }

    let mut a = DMatrix::<f64>::zeros(m, m);
    let mut rhs = DVector::<f64>::zeros(m);

    a[(0, 0)] = 1.0;
    rhs[0] = dy[0] / dx[0];
    a[(m - 1, m - 1)] = 1.0;
    rhs[m - 1] = dy[m - 2] / dx[m - 2];

    for i in 1..m - 1 {
        let (dx1, dx2) = (dx[i - 1], dx[i]);
        let (dy1, dy2) = (dy[i - 1], dy[i]);
        a[(i, i - 1)] = 1.0 / dx1;
        a[(i, i)] = 2.0 * (1.0 / dx1 + 1.0 / dx2);
        a[(i, i + 1)] = 1.0 / dx2;
        rhs[i] = 3.0 * (dy1 / (dx1 * dx1) + dy2 / (dx2 * dx2));
    }

    let k = a
        .col_piv_qr()
        .solve(&rhs)
        .ok_or_else(|| CurveError::degenerate(0, Degeneracy::SingularSystem))?;

    k.iter()
        .enumerate()
        .map(|(i, &v)| {
            if !v.is_finite() {
                return Err(CurveError::degenerate(i, Degeneracy::SingularSystem));
            }
            T::from(v).ok_or_else(|| CurveError::degenerate(i, Degeneracy::NonFinite))
        })
        .collect()
}

fn to_f64<T: Float>(knots: &[Point<T>]) -> Result<(Vec<f64>, Vec<f64>), CurveError> {
    let mut xs = Vec::with_capacity(knots.len());
    let mut ys = Vec::with_capacity(knots.len());
    for (i, p) in knots.iter().enumerate() {
        match (p.x().to_f64(), p.y().to_f64()) {
            (Some(x), Some(y)) if x.is_finite() && y.is_finite() => {
                xs.push(x);
                ys.push(y);
            }
            _ => return Err(CurveError::degenerate(i, Degeneracy::NonFinite)),
        }
    }
    Ok((xs, ys))
}
