//! Error types for the bytestats feature extractor.
//!
//! The histogram computations themselves are total over any byte slice.
//! Errors only surface from the budgeted, async and serialization entry
//! points, where a computation can be abandoned or a payload rejected.

use thiserror::Error;

/// Main error type for bytestats operations.
#[derive(Debug, Error)]
pub enum BytestatsError {
    /// Computation exceeded its time budget
    #[error("Computation timeout after {seconds}s")]
    Timeout { seconds: u64 },

    /// Computation was abandoned before every window was processed
    #[error("Computation cancelled after {windows_done}/{windows_total} windows")]
    Cancelled {
        windows_done: usize,
        windows_total: usize,
    },

    /// Invalid input data or configuration
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for bytestats operations
pub type Result<T> = std::result::Result<T, BytestatsError>;

/// Convert bytestats errors to PyO3 exceptions
#[cfg(feature = "python-ext")]
impl From<BytestatsError> for pyo3::PyErr {
    fn from(err: BytestatsError) -> pyo3::PyErr {
        use pyo3::exceptions::{PyException, PyTimeoutError, PyValueError};

        match err {
            BytestatsError::Timeout { seconds } => {
                PyTimeoutError::new_err(format!("Operation timed out after {}s", seconds))
            }
            BytestatsError::InvalidInput(msg) => PyValueError::new_err(msg),
            _ => PyException::new_err(err.to_string()),
        }
    }
}
