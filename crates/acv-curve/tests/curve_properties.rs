use acv_core::Tolerance;
use acv_curve::tangent::solve_tangents;
use acv_curve::{CubicSegment, CurveEvaluator, CurveKind, TessellationConfig};
use acv_math::{dvec2, Period, Point2};
use approx::assert_relative_eq;

const LENGTH: f64 = 9.0;

/// Six keys evenly spaced 1.5 apart, including across the seam at x = 9.
fn periodic_keys() -> Vec<Point2> {
    vec![
        dvec2(0.5, 1.0),
        dvec2(2.0, 3.0),
        dvec2(3.5, -1.0),
        dvec2(5.0, 2.0),
        dvec2(6.5, 0.0),
        dvec2(8.0, 1.5),
    ]
}

fn bernstein(p: [Point2; 4], u: f64) -> Point2 {
    let s = 1.0 - u;
    s * s * s * p[0] + 3.0 * s * s * u * p[1] + 3.0 * s * u * u * p[2] + u * u * u * p[3]
}

fn max_step_dy(points: &[Point2]) -> f64 {
    points
        .windows(2)
        .map(|w| (w[1].y - w[0].y).abs())
        .fold(0.0, f64::max)
}

#[test]
fn test_open_curves_start_with_horizontal_anchors() {
    let keys = periodic_keys();
    for kind in CurveKind::ALL {
        let out = CurveEvaluator::new(kind)
            .evaluate_to_vec(&keys, LENGTH, false)
            .unwrap();
        assert_eq!(out[0], dvec2(0.0, 1.0), "{kind}");
        assert_eq!(out[1], dvec2(LENGTH, 1.5), "{kind}");
    }
}

#[test]
fn test_bezier_matches_bernstein() {
    let cps = [dvec2(0.0, 0.0), dvec2(1.0, 3.0), dvec2(2.0, -3.0), dvec2(3.0, 0.0)];
    let out = CurveEvaluator::new(CurveKind::Bezier)
        .evaluate_to_vec(&cps, 10.0, false)
        .unwrap();

    // Two anchors precede the samples
    let at_start = out[2];
    let at_end = out[2 + 99];
    let expected_start = bernstein(cps, 0.0);
    let expected_end = bernstein(cps, 0.99);
    assert_relative_eq!(at_start.x, expected_start.x, epsilon = 1e-12);
    assert_relative_eq!(at_start.y, expected_start.y, epsilon = 1e-12);
    assert_relative_eq!(at_end.x, expected_end.x, epsilon = 1e-9);
    assert_relative_eq!(at_end.y, expected_end.y, epsilon = 1e-9);
}

#[test]
fn test_bspline_collinear_points_give_a_straight_curve() {
    let keys: Vec<Point2> = (0..6).map(|i| dvec2(i as f64, 2.0 - 0.5 * i as f64)).collect();
    let seg = CubicSegment::from_bspline([keys[0], keys[1], keys[2], keys[3]]);
    let [v0, v1, v2, v3] = seg.control_points();
    let cross = |a: Point2, b: Point2, c: Point2| (b - a).perp_dot(c - a);
    assert!(cross(v0, v1, v2).abs() < 1e-12);
    assert!(cross(v0, v1, v3).abs() < 1e-12);

    let out = CurveEvaluator::new(CurveKind::BSpline)
        .evaluate_to_vec(&keys, 10.0, false)
        .unwrap();
    for p in &out[4..] {
        assert!((p.y - (2.0 - 0.5 * p.x)).abs() < 1e-9);
    }
}

#[test]
fn test_catmull_rom_windows_interpolate() {
    let keys = periodic_keys();
    for w in keys.windows(4) {
        let seg = CubicSegment::from_catmull_rom([w[0], w[1], w[2], w[3]]);
        assert_eq!(seg.v0, w[1]);
        assert_eq!(seg.v3, w[2]);
    }
}

#[test]
fn test_c2_collinear_tangents_are_equal() {
    let keys = vec![dvec2(1.0, 1.0), dvec2(3.0, 2.0), dvec2(5.0, 3.0)];
    let period = Period::new(10.0).unwrap();
    let tangents = solve_tangents(&keys, period, false, Tolerance::default()).unwrap();
    for d in &tangents {
        assert_relative_eq!(d.x, 2.0, epsilon = 1e-12);
        assert_relative_eq!(d.y, 1.0, epsilon = 1e-12);
    }
}

#[test]
fn test_periodic_curves_close() {
    let keys = periodic_keys();
    for kind in CurveKind::ALL {
        let out = CurveEvaluator::new(kind)
            .evaluate_to_vec(&keys, LENGTH, true)
            .unwrap();
        let first = out[0];
        let last = out[out.len() - 1];
        let bound = 2.0 * max_step_dy(&out);
        assert!(
            (first.y - last.y).abs() <= bound,
            "{kind}: seam gap {} exceeds {}",
            (first.y - last.y).abs(),
            bound
        );
    }
}

#[test]
fn test_periodic_fold_invariant() {
    let keys = periodic_keys();
    for kind in [CurveKind::Bezier, CurveKind::BSpline, CurveKind::CatmullRom] {
        let out = CurveEvaluator::new(kind)
            .evaluate_to_vec(&keys, LENGTH, true)
            .unwrap();
        assert!(!out.is_empty());
        for p in &out {
            assert!(p.x >= 0.0 && p.x < LENGTH, "{kind}: x = {} outside [0, L)", p.x);
        }
    }
}

#[test]
fn test_periodic_c2_clip_invariant() {
    let keys = periodic_keys();
    let out = CurveEvaluator::new(CurveKind::C2Interpolating)
        .evaluate_to_vec(&keys, LENGTH, true)
        .unwrap();
    let period = Period::new(LENGTH).unwrap();
    assert!(out.iter().all(|p| period.contains(p.x)));

    // The whole domain is covered, seam included
    assert!(out[0].x < 0.05);
    assert!(out[out.len() - 1].x > LENGTH - 0.05);
}

#[test]
fn test_bezier_wrap_without_complete_seam_segment() {
    let keys = vec![dvec2(1.0, 2.0), dvec2(2.0, 0.0), dvec2(4.0, 4.0), dvec2(7.0, 0.0)];
    let out = CurveEvaluator::new(CurveKind::Bezier)
        .evaluate_to_vec(&keys, 10.0, true)
        .unwrap();

    // Linear seam from (7, 0) to (11, 2) crosses x = 10 at y = 1.5
    assert_eq!(out[0], dvec2(0.0, 1.5));
    assert_eq!(out[1], dvec2(10.0, 1.5));
    assert_eq!(out.len(), 2 + 100 + 1);
}

#[test]
fn test_step_controls_density() {
    let keys = periodic_keys();
    let coarse = CurveEvaluator::new(CurveKind::CatmullRom)
        .with_config(TessellationConfig::new(0.1).unwrap())
        .evaluate_to_vec(&keys, LENGTH, true)
        .unwrap();
    let fine = CurveEvaluator::new(CurveKind::CatmullRom)
        .evaluate_to_vec(&keys, LENGTH, true)
        .unwrap();
    assert_eq!(coarse.len(), 6 * 10);
    assert_eq!(fine.len(), 6 * 100);
}

#[test]
fn test_unsorted_keys_rejected_by_every_family() {
    let keys = vec![
        dvec2(0.0, 0.0),
        dvec2(3.0, 1.0),
        dvec2(2.0, 0.0),
        dvec2(5.0, 1.0),
    ];
    for kind in CurveKind::ALL {
        let mut out = Vec::new();
        let result = CurveEvaluator::new(kind).evaluate(&keys, 10.0, false, &mut out);
        assert!(result.is_err(), "{kind}");
        assert!(out.is_empty());
    }
}
