//! Animation curve evaluation: turns keyframe control points into dense
//! polylines under Bézier, B-spline, Catmull-Rom and C2-interpolating bases.

pub mod batch;
pub mod control;
pub mod curve;
pub mod evaluator;
pub mod segment;
pub mod tangent;
pub mod tessellate;
pub mod wrap;

pub use batch::{evaluate_batch, CurveRequest};
pub use curve::CurveKind;
pub use evaluator::CurveEvaluator;
pub use segment::CubicSegment;
pub use tessellate::{SampleBoundary, TessellationConfig, DEFAULT_STEP};
