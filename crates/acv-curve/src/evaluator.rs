//! Entry point pairing a curve family with its tessellation settings.

use acv_core::Result;
use acv_math::{Period, Point2};
use serde::{Deserialize, Serialize};

use crate::curve::CurveKind;
use crate::tessellate::TessellationConfig;

/// Evaluates control point sequences of one curve family into polylines.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurveEvaluator {
    pub kind: CurveKind,
    #[serde(default)]
    pub config: TessellationConfig,
}

impl CurveEvaluator {
    pub fn new(kind: CurveKind) -> Self {
        Self {
            kind,
            config: TessellationConfig::default(),
        }
    }

    pub fn with_config(mut self, config: TessellationConfig) -> Self {
        self.config = config;
        self
    }

    /// Evaluate `points` over an animation of length `animation_length`,
    /// replacing the contents of `out`.
    pub fn evaluate(
        &self,
        points: &[Point2],
        animation_length: f64,
        wrap: bool,
        out: &mut Vec<Point2>,
    ) -> Result<()> {
        out.clear();
        let period = Period::new(animation_length)?;
        self.kind.evaluate(points, period, wrap, &self.config, out)
    }

    /// Like [`evaluate`](Self::evaluate), returning a freshly allocated polyline.
    pub fn evaluate_to_vec(
        &self,
        points: &[Point2],
        animation_length: f64,
        wrap: bool,
    ) -> Result<Vec<Point2>> {
        let mut out = Vec::new();
        self.evaluate(points, animation_length, wrap, &mut out)?;
        Ok(out)
    }
}

impl From<CurveKind> for CurveEvaluator {
    fn from(kind: CurveKind) -> Self {
        Self::new(kind)
    }
}
