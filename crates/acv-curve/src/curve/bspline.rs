//! Uniform cubic B-spline curves.

use acv_core::Result;
use acv_math::{Period, Point2};

use crate::curve::CurveKind;
use crate::segment::CubicSegment;
use crate::tessellate::{tessellate_windows, TessellationConfig};
use crate::wrap;

pub(super) fn evaluate(
    points: &[Point2],
    period: Period,
    wrap: bool,
    config: &TessellationConfig,
    out: &mut Vec<Point2>,
) -> Result<()> {
    let prepared = wrap::prepare(CurveKind::BSpline, points, period, wrap);
    out.extend_from_slice(&prepared.anchors);

    tessellate_windows(
        &prepared.control,
        1,
        CubicSegment::from_bspline,
        period,
        CurveKind::BSpline.boundary(),
        config,
        out,
    );

    Ok(())
}
