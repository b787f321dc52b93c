//! Dense linear solves with 2D right-hand sides.
//!
//! Both components of each right-hand-side entry share the same coefficient
//! matrix, so one elimination pass solves the `x` and `y` systems together.

use acv_core::{AcvError, Result, Tolerance};
use nalgebra::DMatrix;

use crate::Vector2;

/// Solve `matrix * X = rhs` by Gaussian elimination without row pivoting.
///
/// The matrix is consumed and overwritten during elimination. Suitable for
/// diagonally dominant systems such as the (cyclic) tridiagonal spline
/// continuity equations; for other systems a zero pivot may be hit even when
/// the matrix is non-singular, which is reported as
/// [`AcvError::SingularSystem`].
pub fn solve_without_pivoting(
    mut matrix: DMatrix<f64>,
    mut rhs: Vec<Vector2>,
    tolerance: Tolerance,
) -> Result<Vec<Vector2>> {
    let n = rhs.len();
    debug_assert!(
        matrix.nrows() == n && matrix.ncols() == n,
        "Expected a {n}x{n} matrix, got {}x{}",
        matrix.nrows(),
        matrix.ncols()
    );

    // Forward elimination to upper triangular form
    for i in 0..n {
        let pivot = matrix[(i, i)];
        if tolerance.is_degenerate_pivot(pivot) {
            return Err(AcvError::SingularSystem { row: i });
        }

        for k in (i + 1)..n {
            let factor = matrix[(k, i)] / pivot;
            if factor == 0.0 {
                continue;
            }
            for j in i..n {
                matrix[(k, j)] -= factor * matrix[(i, j)];
            }
            let pivot_rhs = rhs[i];
            rhs[k] -= pivot_rhs * factor;
        }
    }

    // Back substitution
    for i in (0..n).rev() {
        let mut acc = rhs[i];
        for j in (i + 1)..n {
            acc -= rhs[j] * matrix[(i, j)];
        }
        rhs[i] = acc / matrix[(i, i)];
    }

    Ok(rhs)
}
