//! Tangent solve for C2-continuous cubic interpolation.
//!
//! Requiring matching second derivatives at every interior join of a cubic
//! Hermite spline gives, per control point `i`,
//!
//! ```text
//! d[i-1] + 4 d[i] + d[i+1] = 3 (p[i+1] - p[i-1])
//! ```
//!
//! Open curves close the system with `2 d[0] + d[1] = 3 (p[1] - p[0])` (and
//! its mirror at the far end). Periodic curves wrap the neighbors around the
//! seam instead, which adds the two corner coefficients.

use acv_core::{AcvError, Result, Tolerance};
use acv_math::{linsys, Period, Point2, Vector2};
use nalgebra::DMatrix;

/// Solve for one tangent per control point.
pub fn solve_tangents(
    points: &[Point2],
    period: Period,
    wrap: bool,
    tolerance: Tolerance,
) -> Result<Vec<Vector2>> {
    if points.len() < 2 {
        return Err(AcvError::InvalidControlPoints(format!(
            "tangent solve needs at least 2 control points, got {}",
            points.len()
        )));
    }

    let (matrix, rhs) = build_system(points, period, wrap);
    linsys::solve_without_pivoting(matrix, rhs, tolerance)
}

/// Assemble the coefficient matrix and right-hand side.
///
/// `points.len()` must be at least 2.
pub fn build_system(
    points: &[Point2],
    period: Period,
    wrap: bool,
) -> (DMatrix<f64>, Vec<Vector2>) {
    let n = points.len();
    let last = n - 1;
    let mut matrix = DMatrix::zeros(n, n);
    let mut rhs = Vec::with_capacity(n);

    for i in 1..last {
        matrix[(i, i - 1)] = 1.0;
        matrix[(i, i)] = 4.0;
        matrix[(i, i + 1)] = 1.0;
    }

    if wrap {
        // With two points both neighbors are the same point, so the
        // coefficients accumulate into one cell.
        matrix[(0, 0)] = 4.0;
        matrix[(0, 1)] += 1.0;
        matrix[(0, last)] += 1.0;
        matrix[(last, last - 1)] += 1.0;
        matrix[(last, last)] = 4.0;
        matrix[(last, 0)] += 1.0;

        let before_first = period.shift_backward(points[last]);
        let after_last = period.shift_forward(points[0]);
        let prev = |i: usize| if i == 0 { before_first } else { points[i - 1] };
        let next = |i: usize| if i == last { after_last } else { points[i + 1] };
        rhs.extend((0..n).map(|i| 3.0 * (next(i) - prev(i))));
    } else {
        matrix[(0, 0)] = 2.0;
        matrix[(0, 1)] = 1.0;
        matrix[(last, last - 1)] = 1.0;
        matrix[(last, last)] = 2.0;

        rhs.push(3.0 * (points[1] - points[0]));
        rhs.extend((1..last).map(|i| 3.0 * (points[i + 1] - points[i - 1])));
        rhs.push(3.0 * (points[last] - points[last - 1]));
    }

    (matrix, rhs)
}
