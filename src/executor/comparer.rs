//! Multi-key row comparison
//!
//! The comparator evaluates each key expression against both rows in key
//! order. The first non-equal key decides; on `Descending` the comparison is
//! reversed. Rows equal on every key are order-equivalent, and nothing in the
//! operator depends on their relative order. An unresolved direction aborts
//! the comparison with `SortError::InvalidSortDirection`.

use std::cmp::Ordering;

use crate::plan::{ConfigError, ConfigResult, SortDirection};

use super::errors::SortError;
use super::scalar::ScalarValue;

/// Per-row sort-key evaluator
///
/// Implemented by the expression system of the surrounding engine; any
/// `Fn(&R) -> ScalarValue` closure also qualifies, which is how tests and
/// simple column extractors are written.
pub trait KeyExpression<R> {
    /// Evaluates the key for one row
    fn evaluate(&self, row: &R) -> ScalarValue;
}

impl<R, F> KeyExpression<R> for F
where
    F: Fn(&R) -> ScalarValue,
{
    fn evaluate(&self, row: &R) -> ScalarValue {
        self(row)
    }
}

/// Ordered list of (key expression, direction) pairs
///
/// Keys and directions are parallel sequences; a length mismatch is a
/// malformed plan and is rejected at operator initialization.
pub struct SortKeySpec<R> {
    keys: Vec<Box<dyn KeyExpression<R>>>,
    directions: Vec<SortDirection>,
}

impl<R> SortKeySpec<R> {
    /// Creates an empty specification
    pub fn new() -> Self {
        Self {
            keys: Vec::new(),
            directions: Vec::new(),
        }
    }

    /// Appends a key expression with its direction
    pub fn key(mut self, expr: impl KeyExpression<R> + 'static, direction: SortDirection) -> Self {
        self.keys.push(Box::new(expr));
        self.directions.push(direction);
        self
    }

    /// Assembles a specification from already-separate key and direction
    /// lists, as produced by a plan deserializer. Lengths are not checked
    /// here; `validate` runs at initialization.
    pub fn from_parts(
        keys: Vec<Box<dyn KeyExpression<R>>>,
        directions: Vec<SortDirection>,
    ) -> Self {
        Self { keys, directions }
    }

    /// Checks the key/direction length invariant
    pub fn validate(&self) -> ConfigResult<()> {
        if self.keys.len() != self.directions.len() {
            return Err(ConfigError::KeyDirectionLengthMismatch {
                keys: self.keys.len(),
                directions: self.directions.len(),
            });
        }
        Ok(())
    }

    /// Returns the number of sort keys
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns true if no keys are specified
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub(crate) fn keys(&self) -> &[Box<dyn KeyExpression<R>>] {
        &self.keys
    }

    pub(crate) fn directions(&self) -> &[SortDirection] {
        &self.directions
    }
}

impl<R> Default for SortKeySpec<R> {
    fn default() -> Self {
        Self::new()
    }
}

/// Total-preorder comparator over rows, borrowed from the initialized plan
pub struct RowComparator<'a, R> {
    keys: &'a [Box<dyn KeyExpression<R>>],
    directions: &'a [SortDirection],
}

impl<'a, R> RowComparator<'a, R> {
    /// Builds a comparator over a validated specification
    pub fn new(spec: &'a SortKeySpec<R>) -> Self {
        debug_assert_eq!(spec.keys().len(), spec.directions().len());
        Self {
            keys: spec.keys(),
            directions: spec.directions(),
        }
    }

    /// Three-way comparison of two rows under the key specification.
    ///
    /// `Ordering::Less` means `a` is ordered before `b`.
    pub fn compare(&self, a: &R, b: &R) -> Result<Ordering, SortError> {
        for (key, direction) in self.keys.iter().zip(self.directions.iter()) {
            let ord = key.evaluate(a).cmp(&key.evaluate(b));
            match direction {
                SortDirection::Ascending => {
                    if ord != Ordering::Equal {
                        return Ok(ord);
                    }
                }
                SortDirection::Descending => {
                    if ord != Ordering::Equal {
                        return Ok(ord.reverse());
                    }
                }
                SortDirection::Invalid => return Err(SortError::InvalidSortDirection),
            }
        }
        Ok(Ordering::Equal)
    }
}
