//! Error types for algebra operations.

use thiserror::Error;

/// Errors that can occur constructing or operating on algebra elements.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlgebraError {
    /// Component sequence length does not match the algebra dimension.
    #[error("component length mismatch: algebra has dimension {expected}, got {actual} components")]
    InvalidArgument { expected: usize, actual: usize },

    /// Scalar division by the additive identity of the field.
    #[error("scalar division by zero")]
    DivisionByZero,
}
