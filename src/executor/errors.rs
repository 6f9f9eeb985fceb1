//! Executor error types
//!
//! Error codes:
//! - ROWSORT_INVALID_DIRECTION (sort aborted)
//! - ROWSORT_UPSTREAM_FAILED (propagated from the input source)
//! - ROWSORT_CANCELLED (progress monitor requested abort)
//! - ROWSORT_BAD_LIMIT_PARAM (limit resolution failed)
//!
//! All of these are unrecoverable at this layer: the current execution
//! terminates, the working set is discarded, and no partial output beyond
//! rows already appended is committed. Retry policy, if any, belongs to the
//! surrounding execution manager.

use thiserror::Error;

use crate::plan::LimitParamError;

/// Result type for executor operations
pub type ExecutionResult<T> = Result<T, ExecutionError>;

/// Errors raised while comparing rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SortError {
    /// A key carried an unresolved direction; never sorted as a default
    #[error("attempted to sort using an invalid sort direction")]
    InvalidSortDirection,
}

impl SortError {
    /// Returns the stable machine-readable error code
    pub fn code(&self) -> &'static str {
        match self {
            SortError::InvalidSortDirection => "ROWSORT_INVALID_DIRECTION",
        }
    }
}

/// Errors terminating one execution of the operator
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExecutionError {
    /// The input source failed mid-iteration; message is opaque to this layer
    #[error("upstream iteration failed: {0}")]
    UpstreamIterationFailed(String),

    /// The progress monitor signaled an external abort or deadline
    #[error("execution cancelled by progress monitor")]
    Cancelled,

    /// Sorting aborted
    #[error(transparent)]
    Sort(#[from] SortError),

    /// The inlined limit descriptor could not be resolved
    #[error(transparent)]
    InvalidLimitParameter(#[from] LimitParamError),
}

impl ExecutionError {
    /// Wraps an opaque upstream failure
    pub fn upstream(reason: impl Into<String>) -> Self {
        ExecutionError::UpstreamIterationFailed(reason.into())
    }

    /// Returns the stable machine-readable error code
    pub fn code(&self) -> &'static str {
        match self {
            ExecutionError::UpstreamIterationFailed(_) => "ROWSORT_UPSTREAM_FAILED",
            ExecutionError::Cancelled => "ROWSORT_CANCELLED",
            ExecutionError::Sort(e) => e.code(),
            ExecutionError::InvalidLimitParameter(e) => e.code(),
        }
    }

    /// Returns true if the execution was aborted by external request rather
    /// than by a fault in the plan or its inputs
    pub fn is_abort(&self) -> bool {
        matches!(self, ExecutionError::Cancelled)
    }
}
