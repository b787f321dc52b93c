/// Numeric tolerances used while evaluating curves.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Tolerance {
    /// Smallest pivot magnitude accepted by the tangent solver
    pub pivot: f64,
}

impl Tolerance {
    pub const DEFAULT_PIVOT: f64 = 1e-12;

    pub fn new(pivot: f64) -> Self {
        Self { pivot }
    }

    /// Check if a pivot is too small to divide by
    pub fn is_degenerate_pivot(self, pivot: f64) -> bool {
        !pivot.is_finite() || pivot.abs() < self.pivot
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PIVOT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degenerate_pivot() {
        let tol = Tolerance::default();
        assert!(tol.is_degenerate_pivot(0.0));
        assert!(tol.is_degenerate_pivot(1e-13));
        assert!(tol.is_degenerate_pivot(f64::NAN));
        assert!(!tol.is_degenerate_pivot(4.0));
        assert!(!tol.is_degenerate_pivot(-0.5));
    }

    #[test]
    fn test_custom_pivot_threshold() {
        let tol = Tolerance::new(5.0);
        assert!(tol.is_degenerate_pivot(4.0));
        assert!(!tol.is_degenerate_pivot(-6.0));
    }
}
