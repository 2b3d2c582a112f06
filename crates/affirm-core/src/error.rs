//! Error types for affirm

use thiserror::Error;

/// Main error type for affirm operations.
///
/// A constraint that simply does not match is not an error; `matches`
/// returns `Ok(false)`. Errors signal a defect in the test code itself
/// (misuse), an I/O failure while reading a stream, or, once routed
/// through a failure handler, a failed assertion.
#[derive(Debug, Error)]
pub enum AffirmError {
    /// The constraint was used with arguments it cannot handle.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Reading a stream under comparison failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// An assertion failed; carries the rendered failure message.
    #[error("{0}")]
    AssertionFailed(String),
}

impl AffirmError {
    /// Creates an [`AffirmError::InvalidArgument`].
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        AffirmError::InvalidArgument(message.into())
    }

    /// Returns true if this error is a failed assertion rather than misuse or I/O.
    pub fn is_assertion_failure(&self) -> bool {
        matches!(self, AffirmError::AssertionFailed(_))
    }
}

/// Result type alias for affirm operations
pub type Result<T> = std::result::Result<T, AffirmError>;
