use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AcvError {
    #[error("Invalid control points: {0}")]
    InvalidControlPoints(String),

    #[error("Invalid animation length: {0} (must be finite and positive)")]
    InvalidPeriod(f64),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Singular tangent system: zero pivot at row {row}")]
    SingularSystem { row: usize },
}

pub type Result<T> = std::result::Result<T, AcvError>;
