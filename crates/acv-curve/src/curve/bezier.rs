//! Piecewise cubic Bézier curves.

use acv_core::Result;
use acv_math::{Period, Point2};

use crate::curve::CurveKind;
use crate::segment::CubicSegment;
use crate::tessellate::{tessellate_windows, TessellationConfig};
use crate::wrap;

/// Consecutive segments share an end point.
const STRIDE: usize = 3;

pub(super) fn evaluate(
    points: &[Point2],
    period: Period,
    wrap: bool,
    config: &TessellationConfig,
    out: &mut Vec<Point2>,
) -> Result<()> {
    let prepared = wrap::prepare(CurveKind::Bezier, points, period, wrap);
    out.extend_from_slice(&prepared.anchors);

    let consumed = tessellate_windows(
        &prepared.control,
        STRIDE,
        CubicSegment::from_bezier,
        period,
        CurveKind::Bezier.boundary(),
        config,
        out,
    );

    // Points past the last complete segment are drawn as-is
    let tail = &prepared.control[consumed..];
    if wrap {
        out.extend(tail.iter().map(|p| Point2::new(period.fold(p.x), p.y)));
    } else {
        out.extend_from_slice(tail);
    }

    Ok(())
}
