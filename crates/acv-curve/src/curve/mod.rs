//! Curve families and their evaluation.

mod bezier;
mod bspline;
mod c2;
mod catmull_rom;

use acv_core::{Result, Validate};
use acv_math::{Period, Point2};
use serde::{Deserialize, Serialize};

use crate::control::validate_control_points;
use crate::tessellate::{SampleBoundary, TessellationConfig};

/// The interpolation basis used to turn control points into a curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CurveKind {
    /// Piecewise cubic Bézier; every third control point lies on the curve.
    Bezier,
    /// Uniform cubic B-spline over de Boor points.
    BSpline,
    /// Catmull-Rom spline through every inner control point.
    CatmullRom,
    /// Cubic interpolant through every control point with continuous second derivative.
    C2Interpolating,
}

impl CurveKind {
    pub const ALL: [CurveKind; 4] = [
        CurveKind::Bezier,
        CurveKind::BSpline,
        CurveKind::CatmullRom,
        CurveKind::C2Interpolating,
    ];

    pub fn name(self) -> &'static str {
        match self {
            CurveKind::Bezier => "bezier",
            CurveKind::BSpline => "b-spline",
            CurveKind::CatmullRom => "catmull-rom",
            CurveKind::C2Interpolating => "c2-interpolating",
        }
    }

    /// Fewest control points this family accepts.
    ///
    /// Open B-spline and Catmull-Rom curves accept 3 points but need 4 for a
    /// complete window; with 3 the output holds only the anchor points.
    pub fn min_control_points(self) -> usize {
        match self {
            CurveKind::Bezier => 4,
            CurveKind::BSpline | CurveKind::CatmullRom => 3,
            CurveKind::C2Interpolating => 2,
        }
    }

    /// How samples past the end of the animation are treated.
    pub fn boundary(self) -> SampleBoundary {
        match self {
            CurveKind::C2Interpolating => SampleBoundary::Clip,
            _ => SampleBoundary::Fold,
        }
    }

    /// Evaluate `points` into `out`, replacing its previous contents.
    ///
    /// All preconditions are checked before anything is computed; on error
    /// `out` is left empty.
    pub fn evaluate(
        self,
        points: &[Point2],
        period: Period,
        wrap: bool,
        config: &TessellationConfig,
        out: &mut Vec<Point2>,
    ) -> Result<()> {
        out.clear();
        config.validate()?;
        validate_control_points(points, self.min_control_points())?;

        let result = match self {
            CurveKind::Bezier => bezier::evaluate(points, period, wrap, config, out),
            CurveKind::BSpline => bspline::evaluate(points, period, wrap, config, out),
            CurveKind::CatmullRom => catmull_rom::evaluate(points, period, wrap, config, out),
            CurveKind::C2Interpolating => c2::evaluate(points, period, wrap, config, out),
        };

        if let Err(e) = result {
            out.clear();
            return Err(e);
        }

        log::debug!(
            "{} curve: {} control points, wrap={}, length={} -> {} points",
            self.name(),
            points.len(),
            wrap,
            period.length(),
            out.len()
        );
        Ok(())
    }
}

impl std::fmt::Display for CurveKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
