//! The order-by operator
//!
//! One initialization per compiled plan, any number of executions. Execution
//! flow (strict order):
//!
//! 1. Resolve the inlined limit descriptor against this execution's
//!    parameters
//! 2. Materialize the upstream rows into a working set
//! 3. Choose the sort strategy and order the working set in place
//! 4. Skip `offset` ordered rows, append up to `limit` rows to the sink
//! 5. Signal the input source for release
//!
//! The operator runs entirely on the calling thread; cancellation is
//! cooperative, polled once per scanned and once per emitted row. On any
//! failure the working set is dropped, the sink receives no further appends,
//! and the input source is not released.

use crate::observability::{Event, Logger};
use crate::plan::{ConfigResult, LimitDescriptor, LimitSpec, RuntimeParameters, Schema};

use super::comparer::{RowComparator, SortKeySpec};
use super::errors::{ExecutionError, ExecutionResult};
use super::progress::{Progress, ProgressMonitor};
use super::sorter::{sort_rows, SortStrategy};
use super::working_set::{InputSource, WorkingSet};

/// Append-only acceptor of ordered output rows
///
/// Created and owned by the surrounding pipeline; its schema is identical to
/// the input schema by construction.
pub trait OutputSink {
    /// Row handle, same representation as the input's
    type Row;

    /// Appends one row to the output
    fn append(&mut self, row: Self::Row);
}

/// Counters describing one completed execution
///
/// Observability data only; the authoritative output is the sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecutionSummary {
    /// Rows scanned from the input source
    pub rows_scanned: u64,
    /// Ordered rows skipped by the offset
    pub rows_skipped: u64,
    /// Rows appended to the sink
    pub rows_emitted: u64,
    /// True if the limit truncated the output
    pub limit_applied: bool,
    /// Ordering strategy used
    pub strategy: SortStrategy,
}

/// Sort/limit/offset execution stage
///
/// Holds the per-plan configuration: the multi-key sort specification, the
/// optional inlined limit descriptor, and the fixed row schema. Constructing
/// the operator is the `Uninitialized -> Initialized` transition; the
/// unconfigured state is unrepresentable.
pub struct OrderByOperator<R> {
    keys: SortKeySpec<R>,
    limit: Option<LimitDescriptor>,
    schema: Schema,
}

impl<R> core::fmt::Debug for OrderByOperator<R> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("OrderByOperator")
            .field("keys", &self.keys.len())
            .field("limit", &self.limit)
            .field("schema", &self.schema)
            .finish()
    }
}

impl<R> OrderByOperator<R> {
    /// Initializes the operator for a compiled plan.
    ///
    /// Validates the key/direction length invariant; a malformed
    /// specification never produces an operator.
    pub fn initialize(
        keys: SortKeySpec<R>,
        limit: Option<LimitDescriptor>,
        schema: Schema,
    ) -> ConfigResult<Self> {
        keys.validate()?;

        let key_count = keys.len().to_string();
        let columns = schema.width().to_string();
        Logger::trace(
            Event::Initialized.as_str(),
            &[
                ("keys", key_count.as_str()),
                ("columns", columns.as_str()),
                ("inlined_limit", if limit.is_some() { "true" } else { "false" }),
            ],
        );

        Ok(Self { keys, limit, schema })
    }

    /// Returns the schema shared by input and output
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Returns the number of sort keys
    pub fn key_count(&self) -> usize {
        self.keys.len()
    }

    /// Returns true if an inlined limit node was captured
    pub fn has_inlined_limit(&self) -> bool {
        self.limit.is_some()
    }

    /// Executes the operator once.
    ///
    /// Re-resolves the limit descriptor against `params`, drains `source`
    /// into a working set, orders it, and appends the windowed result to
    /// `sink`. May be called repeatedly after one initialization; the `&mut`
    /// borrows of the collaborators rule out concurrent executions of the
    /// same instance.
    pub fn execute<S, K, M>(
        &self,
        source: &mut S,
        sink: &mut K,
        monitor: &mut M,
        params: &RuntimeParameters,
    ) -> ExecutionResult<ExecutionSummary>
    where
        R: Clone,
        S: InputSource<Row = R>,
        K: OutputSink<Row = R>,
        M: ProgressMonitor,
    {
        let window = match &self.limit {
            Some(descriptor) => descriptor
                .resolve(params)
                .map_err(|e| self.abort(ExecutionError::from(e)))?,
            None => LimitSpec::unbounded(),
        };

        let limit_s = window.limit.map_or("none".to_string(), |l| l.to_string());
        let offset_s = window.offset.to_string();
        Logger::trace(
            Event::ExecuteBegin.as_str(),
            &[("limit", limit_s.as_str()), ("offset", offset_s.as_str())],
        );

        let mut working =
            WorkingSet::materialize(source, monitor).map_err(|e| self.abort(e))?;
        let n = working.len();

        let strategy = SortStrategy::choose(n, &window);
        let comparator = RowComparator::new(&self.keys);
        sort_rows(working.as_mut_slice(), &comparator, strategy)
            .map_err(|e| self.abort(ExecutionError::from(e)))?;

        let rows_s = n.to_string();
        Logger::trace(
            Event::Sorted.as_str(),
            &[("rows", rows_s.as_str()), ("strategy", strategy.as_str())],
        );

        let mut skipped: u64 = 0;
        let mut emitted: u64 = 0;
        for row in working.rows() {
            if skipped < window.offset {
                skipped += 1;
                continue;
            }
            if let Some(limit) = window.limit {
                if emitted >= limit {
                    break;
                }
            }
            sink.append(row.clone());
            emitted += 1;
            if monitor.report_progress(1) == Progress::Cancel {
                return Err(self.abort(ExecutionError::Cancelled));
            }
        }

        source.release();

        let available = (n as u64).saturating_sub(skipped);
        let summary = ExecutionSummary {
            rows_scanned: n as u64,
            rows_skipped: skipped,
            rows_emitted: emitted,
            limit_applied: window.limit.is_some_and(|l| available > l),
            strategy,
        };

        let emitted_s = emitted.to_string();
        let skipped_s = skipped.to_string();
        Logger::trace(
            Event::ExecuteComplete.as_str(),
            &[
                ("emitted", emitted_s.as_str()),
                ("scanned", rows_s.as_str()),
                ("skipped", skipped_s.as_str()),
            ],
        );

        Ok(summary)
    }

    fn abort(&self, err: ExecutionError) -> ExecutionError {
        Logger::error(Event::ExecuteAborted.as_str(), &[("code", err.code())]);
        err
    }
}
