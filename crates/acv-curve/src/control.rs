//! Precondition checks on control point sequences.

use acv_core::{AcvError, Result};
use acv_math::Point2;

/// Check that `points` has at least `min_len` entries, finite coordinates,
/// and non-decreasing `x`.
pub fn validate_control_points(points: &[Point2], min_len: usize) -> Result<()> {
    if points.len() < min_len {
        return Err(AcvError::InvalidControlPoints(format!(
            "need at least {} control points, got {}",
            min_len,
            points.len()
        )));
    }

    if let Some((i, p)) = points.iter().enumerate().find(|(_, p)| !p.is_finite()) {
        return Err(AcvError::InvalidControlPoints(format!(
            "control point {} is not finite: ({}, {})",
            i, p.x, p.y
        )));
    }

    if let Some(i) = points.windows(2).position(|w| w[1].x < w[0].x) {
        return Err(AcvError::InvalidControlPoints(format!(
            "control point {} has x = {} before preceding x = {}",
            i + 1,
            points[i + 1].x,
            points[i].x
        )));
    }

    Ok(())
}
