//! Parallel evaluation of independent curves.

use acv_core::Result;
use acv_math::Point2;
use rayon::prelude::*;

use crate::evaluator::CurveEvaluator;

/// One curve to evaluate as part of a batch.
#[derive(Debug, Clone, Copy)]
pub struct CurveRequest<'a> {
    pub evaluator: CurveEvaluator,
    pub points: &'a [Point2],
    pub animation_length: f64,
    pub wrap: bool,
}

/// Evaluate every request in parallel.
///
/// Results are returned in request order; one failing request does not
/// affect the others.
pub fn evaluate_batch(requests: &[CurveRequest<'_>]) -> Vec<Result<Vec<Point2>>> {
    requests
        .par_iter()
        .map(|req| {
            req.evaluator
                .evaluate_to_vec(req.points, req.animation_length, req.wrap)
        })
        .collect()
}
