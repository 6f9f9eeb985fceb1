//! Working set materialization
//!
//! The sort stage cannot stream: ordering needs the whole input. The working
//! set drains the upstream source into a randomly-indexable sequence of row
//! handles, reporting one unit of progress per row scanned. It is a pure
//! permutation container: no filtering, no deduplication, no transformation.
//! Memory cost is O(n) regardless of how small the limit is.
//!
//! A working set lives for exactly one execution and is dropped on both the
//! success and the abort path.

use super::errors::{ExecutionError, ExecutionResult};
use super::progress::{Progress, ProgressMonitor};

/// Forward-only row iteration over a fixed schema
///
/// Consumed exactly once per execution. Rows handed out must satisfy the
/// source's own "active" (visible, undeleted) contract; the working set
/// asserts it but does not enforce it.
pub trait InputSource {
    /// Opaque row handle owned by the source while scanning
    type Row;

    /// Produces the next row, `None` when exhausted
    fn next_row(&mut self) -> ExecutionResult<Option<Self::Row>>;

    /// Upstream visibility contract for a produced row
    fn is_active(&self, row: &Self::Row) -> bool;

    /// Signal that the source may be torn down by the surrounding pipeline.
    ///
    /// Called by the operator after a successful execution, once the source
    /// has been fully drained and the output committed.
    fn release(&mut self) {}
}

/// In-memory materialization of all active input rows for one execution
#[derive(Debug)]
pub struct WorkingSet<R> {
    rows: Vec<R>,
}

impl<R> WorkingSet<R> {
    /// Drains the source fully, polling the monitor once per row.
    ///
    /// Cancellation mid-scan discards everything collected so far.
    pub fn materialize<S, M>(source: &mut S, monitor: &mut M) -> ExecutionResult<Self>
    where
        S: InputSource<Row = R>,
        M: ProgressMonitor,
    {
        let mut rows = Vec::new();
        while let Some(row) = source.next_row()? {
            if monitor.report_progress(1) == Progress::Cancel {
                return Err(ExecutionError::Cancelled);
            }
            debug_assert!(
                source.is_active(&row),
                "input source produced an inactive row"
            );
            rows.push(row);
        }
        Ok(Self { rows })
    }

    /// Returns the number of materialized rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if no rows were scanned
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the rows in scan order (or post-sort order once sorted)
    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    /// Mutable access for in-place sorting
    pub fn as_mut_slice(&mut self) -> &mut [R] {
        &mut self.rows
    }
}
