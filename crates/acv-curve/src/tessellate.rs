//! Fixed-step tessellation of cubic segments into polyline samples.

use acv_core::{AcvError, Result, Tolerance, Validate};
use acv_math::{Period, Point2};
use serde::{Deserialize, Serialize};

use crate::segment::CubicSegment;

/// Default parametric step: 100 samples per segment.
pub const DEFAULT_STEP: f64 = 0.01;

/// Numeric settings shared by every curve family.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TessellationConfig {
    /// Parametric step between samples, in `(0, 1]`.
    pub step: f64,
    /// Tolerances for the C2 tangent solve.
    #[serde(default)]
    pub tolerance: Tolerance,
}

impl TessellationConfig {
    pub fn new(step: f64) -> Result<Self> {
        let config = Self {
            step,
            tolerance: Tolerance::default(),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn with_tolerance(mut self, tolerance: Tolerance) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sample parameters `0, step, 2*step, ...` strictly below 1.
    pub fn parameters(&self) -> impl Iterator<Item = f64> {
        let step = self.step;
        (0u32..)
            .map(move |i| f64::from(i) * step)
            .take_while(|&u| u < 1.0)
    }

    pub fn samples_per_segment(&self) -> usize {
        self.parameters().count()
    }
}

impl Default for TessellationConfig {
    fn default() -> Self {
        Self {
            step: DEFAULT_STEP,
            tolerance: Tolerance::default(),
        }
    }
}

impl Validate for TessellationConfig {
    fn validate(&self) -> Result<()> {
        if !(self.step.is_finite() && self.step > 0.0 && self.step <= 1.0) {
            return Err(AcvError::InvalidConfig(format!(
                "tessellation step must lie in (0, 1], got {}",
                self.step
            )));
        }
        if !(self.tolerance.pivot.is_finite() && self.tolerance.pivot >= 0.0) {
            return Err(AcvError::InvalidConfig(format!(
                "pivot tolerance must be finite and non-negative, got {}",
                self.tolerance.pivot
            )));
        }
        Ok(())
    }
}

/// How a sample whose `x` leaves the animation domain is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SampleBoundary {
    /// Subtract one period from `x` when `x >= L`.
    Fold,
    /// Drop the sample unless `0 <= x <= L`.
    Clip,
}

/// Append the samples of one segment to `out`.
///
/// Returns the number of samples written.
pub fn tessellate_segment(
    segment: &CubicSegment,
    period: Period,
    boundary: SampleBoundary,
    config: &TessellationConfig,
    out: &mut Vec<Point2>,
) -> usize {
    let before = out.len();
    for u in config.parameters() {
        let p = segment.point_at(u);
        match boundary {
            SampleBoundary::Fold => out.push(Point2::new(period.fold(p.x), p.y)),
            SampleBoundary::Clip => {
                if period.contains(p.x) {
                    out.push(p);
                }
            }
        }
    }
    out.len() - before
}

/// Convert every 4-point window of `control` (advancing by `stride`) into a
/// segment and tessellate it.
///
/// Returns the number of control points consumed by complete windows, i.e.
/// the index of the first control point not starting a window.
pub fn tessellate_windows(
    control: &[Point2],
    stride: usize,
    convert: fn([Point2; 4]) -> CubicSegment,
    period: Period,
    boundary: SampleBoundary,
    config: &TessellationConfig,
    out: &mut Vec<Point2>,
) -> usize {
    let mut segments = 0;
    for window in control.windows(4).step_by(stride) {
        let segment = convert([window[0], window[1], window[2], window[3]]);
        let written = tessellate_segment(&segment, period, boundary, config, out);
        log::trace!("segment {segments}: {written} samples from {segment:?}");
        segments += 1;
    }
    segments * stride
}
