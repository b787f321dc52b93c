use acv_core::{AcvError, Result};
use serde::{Deserialize, Serialize};

use crate::{Point2, Vector2};

/// The animation length: period of the domain a curve's `x` coordinate lives in.
///
/// Always finite and strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Period(f64);

impl Period {
    pub fn new(length: f64) -> Result<Self> {
        if length.is_finite() && length > 0.0 {
            Ok(Self(length))
        } else {
            Err(AcvError::InvalidPeriod(length))
        }
    }

    pub fn length(self) -> f64 {
        self.0
    }

    /// Fold `x` back by one period if it reached or passed the end of the domain.
    ///
    /// Only a single period is subtracted; inputs past `2L` stay outside `[0, L)`.
    pub fn fold(self, x: f64) -> f64 {
        if x >= self.0 {
            x - self.0
        } else {
            x
        }
    }

    /// Whether `x` lies in the closed domain `[0, L]`.
    pub fn contains(self, x: f64) -> bool {
        (0.0..=self.0).contains(&x)
    }

    /// Translate a point one period forward in `x`.
    pub fn shift_forward(self, p: Point2) -> Point2 {
        p + Vector2::new(self.0, 0.0)
    }

    /// Translate a point one period backward in `x`.
    pub fn shift_backward(self, p: Point2) -> Point2 {
        p - Vector2::new(self.0, 0.0)
    }
}

impl TryFrom<f64> for Period {
    type Error = AcvError;

    fn try_from(length: f64) -> Result<Self> {
        Self::new(length)
    }
}

impl From<Period> for f64 {
    fn from(period: Period) -> f64 {
        period.0
    }
}
