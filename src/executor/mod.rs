//! The sort/limit/offset execution stage
//!
//! Consumes an unordered intermediate row set from an upstream operator,
//! orders it, windows it, and emits it downstream.
//!
//! # Execution flow (strict order)
//!
//! 1. Resolve the inlined limit/offset against runtime parameters
//! 2. Materialize the upstream rows into a working set
//! 3. Choose full or bounded ordering and sort in place
//! 4. Skip `offset` rows, append up to `limit` rows to the sink
//! 5. Signal the input source for release
//!
//! # Invariants
//!
//! - Output schema equals input schema; rows pass through untouched
//! - Output is a windowed sub-multiset of the working set
//! - An invalid sort direction aborts before anything is emitted
//! - Cancellation is cooperative: polled per scanned and per emitted row

mod comparer;
mod errors;
mod operator;
mod progress;
mod scalar;
mod sorter;
mod working_set;

pub use comparer::{KeyExpression, RowComparator, SortKeySpec};
pub use errors::{ExecutionError, ExecutionResult, SortError};
pub use operator::{ExecutionSummary, OrderByOperator, OutputSink};
pub use progress::{BudgetMonitor, NoopMonitor, Progress, ProgressMonitor};
pub use scalar::ScalarValue;
pub use sorter::{sort_rows, SortStrategy};
pub use working_set::{InputSource, WorkingSet};
