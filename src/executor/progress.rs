//! Cooperative cancellation
//!
//! The operator has no preemption: it polls the monitor once per row scanned
//! and once per row emitted, and unwinds when the monitor requests an abort.
//! Rows skipped by an offset are not reported; their cost was charged during
//! the scan and the sort.

/// Verdict returned by a progress report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    /// Keep executing
    Continue,
    /// Abort the current execution as soon as possible
    Cancel,
}

/// Cooperative progress/cancellation monitor
///
/// Owned by the surrounding pipeline; the operator only reports work units
/// and honors the verdict.
pub trait ProgressMonitor {
    /// Reports `rows` units of work; the verdict applies immediately
    fn report_progress(&mut self, rows: u64) -> Progress;
}

/// Monitor that never cancels
#[derive(Debug, Default)]
pub struct NoopMonitor;

impl ProgressMonitor for NoopMonitor {
    fn report_progress(&mut self, _rows: u64) -> Progress {
        Progress::Continue
    }
}

/// Monitor with a fixed work budget
///
/// Counts down the budget on every report and cancels once it is exhausted.
/// Mirrors deadline-style abort conditions in tests without involving clocks.
#[derive(Debug)]
pub struct BudgetMonitor {
    remaining: u64,
    reported: u64,
}

impl BudgetMonitor {
    /// Creates a monitor that allows `budget` units of work
    pub fn new(budget: u64) -> Self {
        Self {
            remaining: budget,
            reported: 0,
        }
    }

    /// Returns the total units reported so far
    pub fn reported(&self) -> u64 {
        self.reported
    }

    /// Returns the unspent budget
    pub fn remaining(&self) -> u64 {
        self.remaining
    }
}

impl ProgressMonitor for BudgetMonitor {
    fn report_progress(&mut self, rows: u64) -> Progress {
        self.reported += rows;
        if rows >= self.remaining {
            self.remaining = 0;
            return Progress::Cancel;
        }
        self.remaining -= rows;
        Progress::Continue
    }
}
