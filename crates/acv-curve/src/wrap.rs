//! Boundary handling: horizontal anchors for open curves and shadow control
//! points for periodic ones.

use acv_math::{Period, Point2};

use crate::curve::CurveKind;

/// Control points ready for windowing, plus the points written to the
/// polyline before any segment.
#[derive(Debug, Clone, PartialEq)]
pub struct Prepared {
    pub anchors: Vec<Point2>,
    pub control: Vec<Point2>,
}

/// `(0, y_first)` and `(L, y_last)`: keeps an open curve flat outside its
/// control points.
pub fn horizontal_anchors(points: &[Point2], period: Period) -> [Point2; 2] {
    let first = points[0];
    let last = points[points.len() - 1];
    [
        Point2::new(0.0, first.y),
        Point2::new(period.length(), last.y),
    ]
}

/// Value of the straight line from `last` to `first + L` where it crosses the
/// seam at `x = 0 ≡ L`.
///
/// Falls back to `first.y` when the seam gap is not positive.
pub fn seam_blend(first: Point2, last: Point2, period: Period) -> f64 {
    let l = period.length();
    let gap = first.x + l - last.x;
    if gap > 0.0 {
        (first.y * (l - last.x) + last.y * first.x) / gap
    } else {
        first.y
    }
}

/// Build the working control sequence for `kind`.
///
/// `points` must already satisfy the family's minimum length.
pub fn prepare(kind: CurveKind, points: &[Point2], period: Period, wrap: bool) -> Prepared {
    match kind {
        CurveKind::Bezier => prepare_bezier(points, period, wrap),
        CurveKind::BSpline | CurveKind::CatmullRom => prepare_windowed(points, period, wrap),
        CurveKind::C2Interpolating => prepare_c2(points, period, wrap),
    }
}

fn prepare_bezier(points: &[Point2], period: Period, wrap: bool) -> Prepared {
    let mut control = points.to_vec();

    if !wrap {
        return Prepared {
            anchors: horizontal_anchors(points, period).to_vec(),
            control,
        };
    }

    if points.len() % 3 == 0 {
        // The seam closes a complete cubic
        control.push(period.shift_forward(points[0]));
        Prepared {
            anchors: Vec::new(),
            control,
        }
    } else {
        log::debug!(
            "Bezier wrap with {} control points leaves no complete seam segment; using linear seam",
            points.len()
        );
        let y = seam_blend(points[0], points[points.len() - 1], period);
        Prepared {
            anchors: vec![Point2::new(0.0, y), Point2::new(period.length(), y)],
            control,
        }
    }
}

fn prepare_windowed(points: &[Point2], period: Period, wrap: bool) -> Prepared {
    let mut control = points.to_vec();

    if wrap {
        control.extend(points.iter().take(3).map(|&p| period.shift_forward(p)));
        Prepared {
            anchors: Vec::new(),
            control,
        }
    } else {
        let [start, end] = horizontal_anchors(points, period);
        Prepared {
            anchors: vec![start, end, points[0], points[points.len() - 1]],
            control,
        }
    }
}

fn prepare_c2(points: &[Point2], period: Period, wrap: bool) -> Prepared {
    let mut control = points.to_vec();

    if wrap {
        control.push(period.shift_forward(points[0]));
        Prepared {
            anchors: Vec::new(),
            control,
        }
    } else {
        Prepared {
            anchors: horizontal_anchors(points, period).to_vec(),
            control,
        }
    }
}
