//! Error types for polynomial construction and transforms.

use std::fmt;

/// Errors that can occur during polynomial operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PolyError {
    /// Invalid input was provided.
    InvalidInput {
        /// Description of why the input is invalid.
        reason: &'static str,
    },

    /// A point sequence handed to the inverse transform has a length that is
    /// not a non-zero power of two.
    InvalidLength {
        /// The offending length.
        len: usize,
    },
}

impl PolyError {
    /// The error raised when a polynomial is built from no coefficients.
    pub const EMPTY_COEFFICIENTS: PolyError = PolyError::InvalidInput {
        reason: "Coefficients array is empty!",
    };
}

impl fmt::Display for PolyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolyError::InvalidInput { reason } => write!(f, "{}", reason),
            PolyError::InvalidLength { len } => {
                write!(f, "transform length {} is not a power of two", len)
            }
        }
    }
}

impl std::error::Error for PolyError {}

/// Result type alias for polynomial operations.
pub type Result<T> = std::result::Result<T, PolyError>;
