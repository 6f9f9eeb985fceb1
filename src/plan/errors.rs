//! Configuration and limit-resolution error types
//!
//! Error codes:
//! - ROWSORT_KEY_DIRECTION_MISMATCH (initialization)
//! - ROWSORT_BAD_LIMIT_PARAM (execution, limit resolution)

use thiserror::Error;

/// Result type for operator configuration
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors detected while initializing the operator
///
/// Configuration errors are unrecoverable for the plan instance: the operator
/// is never constructed and no execution can start.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("sort key count {keys} does not match direction count {directions}")]
    KeyDirectionLengthMismatch { keys: usize, directions: usize },
}

impl ConfigError {
    /// Returns the stable machine-readable error code
    pub fn code(&self) -> &'static str {
        match self {
            ConfigError::KeyDirectionLengthMismatch { .. } => "ROWSORT_KEY_DIRECTION_MISMATCH",
        }
    }
}

/// Errors resolving an inlined limit descriptor against runtime parameters
///
/// A compiled plan may bind limit or offset to a parameter slot; a slot
/// that is absent or holds a non-integer value fails the execution rather
/// than being coerced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LimitParamError {
    #[error("limit parameter slot {index} is not bound")]
    Missing { index: usize },

    #[error("limit parameter slot {index} is not an integer")]
    NotAnInteger { index: usize },
}

impl LimitParamError {
    /// Returns the stable machine-readable error code
    pub fn code(&self) -> &'static str {
        "ROWSORT_BAD_LIMIT_PARAM"
    }
}
