//! Error types for document validation

use thiserror::Error;

/// Main error type for validation operations
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Digit count does not match the target document kind
    #[error("Invalid length: expected {expected} digits, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// Non-digit characters, or punctuation outside the canonical positions
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// Known placeholder sequence (a single digit repeated)
    #[error("Known invalid sequence: {0}")]
    KnownInvalid(String),

    /// Unrecognized document kind
    #[error("Unknown document kind: {0}")]
    InvalidKind(String),
}

/// Result type alias for validation operations
pub type Result<T> = std::result::Result<T, ValidationError>;
