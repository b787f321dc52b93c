use crate::error::Result;

/// Validate the preconditions of a value before it is used in an evaluation.
pub trait Validate {
    fn validate(&self) -> Result<()>;
}
