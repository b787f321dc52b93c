//! C2-continuous cubic interpolation through every control point.

use acv_core::Result;
use acv_math::{Period, Point2};

use crate::curve::CurveKind;
use crate::segment::CubicSegment;
use crate::tangent::solve_tangents;
use crate::tessellate::{tessellate_segment, TessellationConfig};
use crate::wrap;

pub(super) fn evaluate(
    points: &[Point2],
    period: Period,
    wrap: bool,
    config: &TessellationConfig,
    out: &mut Vec<Point2>,
) -> Result<()> {
    let tangents = solve_tangents(points, period, wrap, config.tolerance)?;
    let prepared = wrap::prepare(CurveKind::C2Interpolating, points, period, wrap);
    out.extend_from_slice(&prepared.anchors);

    let boundary = CurveKind::C2Interpolating.boundary();
    let n = points.len();

    if wrap {
        // Seam segment entering the domain from the left
        let lead = CubicSegment::from_hermite(
            period.shift_backward(points[n - 1]),
            points[0],
            tangents[n - 1],
            tangents[0],
        );
        tessellate_segment(&lead, period, boundary, config, out);
    }

    // The shadow point, if any, reuses the first point's tangent
    for (i, pair) in prepared.control.windows(2).enumerate() {
        let segment =
            CubicSegment::from_hermite(pair[0], pair[1], tangents[i % n], tangents[(i + 1) % n]);
        tessellate_segment(&segment, period, boundary, config, out);
    }

    Ok(())
}
