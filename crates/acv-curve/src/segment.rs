//! Cubic Bézier segments and conversions from the other curve bases.

use acv_math::{Point2, Vector2};
use serde::{Deserialize, Serialize};

/// One cubic Bézier segment, parameterized over `u ∈ [0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CubicSegment {
    pub v0: Point2,
    pub v1: Point2,
    pub v2: Point2,
    pub v3: Point2,
}

impl CubicSegment {
    pub fn new(v0: Point2, v1: Point2, v2: Point2, v3: Point2) -> Self {
        Self { v0, v1, v2, v3 }
    }

    /// Bézier control points used as-is.
    pub fn from_bezier([v0, v1, v2, v3]: [Point2; 4]) -> Self {
        Self::new(v0, v1, v2, v3)
    }

    /// Convert a window of four uniform cubic B-spline de Boor points.
    pub fn from_bspline([b0, b1, b2, b3]: [Point2; 4]) -> Self {
        Self {
            v0: (b0 + 4.0 * b1 + b2) / 6.0,
            v1: (4.0 * b1 + 2.0 * b2) / 6.0,
            v2: (2.0 * b1 + 4.0 * b2) / 6.0,
            v3: (b1 + 4.0 * b2 + b3) / 6.0,
        }
    }

    /// Convert a Catmull-Rom window; the segment runs from `p1` to `p2`.
    pub fn from_catmull_rom([p0, p1, p2, p3]: [Point2; 4]) -> Self {
        Self {
            v0: p1,
            v1: p1 + (p2 - p0) / 6.0,
            v2: p2 - (p3 - p1) / 6.0,
            v3: p2,
        }
    }

    /// Convert a cubic Hermite segment given its end points and end tangents.
    pub fn from_hermite(c0: Point2, c1: Point2, d0: Vector2, d1: Vector2) -> Self {
        Self {
            v0: c0,
            v1: c0 + d0 / 3.0,
            v2: c1 - d1 / 3.0,
            v3: c1,
        }
    }

    pub fn control_points(&self) -> [Point2; 4] {
        [self.v0, self.v1, self.v2, self.v3]
    }

    /// Evaluate the segment at `u` by repeated linear interpolation (de Casteljau).
    pub fn point_at(&self, u: f64) -> Point2 {
        let a = self.v0.lerp(self.v1, u);
        let b = self.v1.lerp(self.v2, u);
        let c = self.v2.lerp(self.v3, u);

        let ab = a.lerp(b, u);
        let bc = b.lerp(c, u);

        ab.lerp(bc, u)
    }

    /// First derivative with respect to `u`.
    pub fn derivative_at(&self, u: f64) -> Vector2 {
        let d0 = self.v1 - self.v0;
        let d1 = self.v2 - self.v1;
        let d2 = self.v3 - self.v2;
        3.0 * d0.lerp(d1, u).lerp(d1.lerp(d2, u), u)
    }

    /// Second derivative with respect to `u`.
    pub fn second_derivative_at(&self, u: f64) -> Vector2 {
        let a = self.v2 - 2.0 * self.v1 + self.v0;
        let b = self.v3 - 2.0 * self.v2 + self.v1;
        6.0 * a.lerp(b, u)
    }
}
