//! Sort strategy selection and in-place sorting
//!
//! With a bounded limit whose window ends before the end of the working set,
//! only the first `limit + offset` positions of the ordered sequence are ever
//! emitted, so a bounded partial ordering suffices: the prefix of length
//! `boundary = limit + offset` must equal the prefix a full sort would
//! produce, while elements beyond it only need to be not-ordered-before the
//! boundary. The windowed output is identical either way; the bounded path is
//! purely a performance optimization.
//!
//! The boundary is computed with checked arithmetic and never used to index
//! past the working set.

use std::cmp::Ordering;

use crate::plan::LimitSpec;

use super::comparer::RowComparator;
use super::errors::SortError;

/// Ordering strategy chosen for one execution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortStrategy {
    /// Fully order the working set
    Full,
    /// Order only the first `boundary` positions correctly
    Bounded { boundary: usize },
}

impl SortStrategy {
    /// Chooses the strategy for `n` materialized rows under a resolved window.
    ///
    /// The bounded path applies only when the limit is bounded and
    /// `limit + offset` (without overflow) lands strictly inside the set.
    pub fn choose(n: usize, window: &LimitSpec) -> SortStrategy {
        let Some(limit) = window.limit else {
            return SortStrategy::Full;
        };
        let Ok(limit) = usize::try_from(limit) else {
            return SortStrategy::Full;
        };
        let Ok(offset) = usize::try_from(window.offset) else {
            return SortStrategy::Full;
        };
        match limit.checked_add(offset) {
            Some(boundary) if boundary < n => SortStrategy::Bounded { boundary },
            _ => SortStrategy::Full,
        }
    }

    /// Returns the strategy name used in logs and summaries
    pub fn as_str(&self) -> &'static str {
        match self {
            SortStrategy::Full => "full",
            SortStrategy::Bounded { .. } => "bounded",
        }
    }
}

/// Sorts the rows in place under the chosen strategy.
///
/// The comparator is fallible but the stdlib sorts are not, so the first
/// comparison failure is captured in a cell, the comparator degrades to
/// `Equal` for the remainder of the pass, and the error is returned before
/// the caller emits anything. Unstable sorting is deliberate: order among
/// key-equal rows is unspecified.
pub fn sort_rows<R>(
    rows: &mut [R],
    comparator: &RowComparator<'_, R>,
    strategy: SortStrategy,
) -> Result<(), SortError> {
    let mut failure: Option<SortError> = None;
    let mut compare = |a: &R, b: &R| match comparator.compare(a, b) {
        Ok(ord) => ord,
        Err(e) => {
            failure.get_or_insert(e);
            Ordering::Equal
        }
    };

    match strategy {
        SortStrategy::Full => rows.sort_unstable_by(&mut compare),
        SortStrategy::Bounded { boundary } => {
            // boundary < rows.len() by construction; an empty window needs
            // no ordering at all
            if boundary > 0 {
                rows.select_nth_unstable_by(boundary - 1, &mut compare);
                rows[..boundary].sort_unstable_by(&mut compare);
            }
        }
    }

    match failure {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
