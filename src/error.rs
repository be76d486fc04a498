use thiserror::Error;

use crate::curve::CurveError;

/// Error types for Savitzky-Golay filter operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SavitzkyGolayError {
    /// Coefficient vector length does not match `left_width + 1 + right_width`
    #[error("Invalid coefficients: expected {expected} values (left + 1 + right), got {actual}")]
    InvalidCoefficients { expected: usize, actual: usize },

    /// The input curve failed to answer a size/get query
    #[error("Operation failed: {0}")]
    OperationFailed(#[from] CurveError),

    /// A filter name that is not of the form `SG:M-nL-nR`
    #[error("Invalid filter name: {0:?}. Expected the form SG:M-nL-nR")]
    InvalidFilterName(String),

    /// A well-formed filter name with no catalog entry
    #[error("No catalog filter named {0}")]
    UnknownFilter(String),
}

/// Result type for Savitzky-Golay operations
pub type Result<T> = std::result::Result<T, SavitzkyGolayError>;
