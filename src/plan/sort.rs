//! Sort direction and schema descriptors
//!
//! Defines the plan-side configuration the operator is initialized with.

use serde::{Deserialize, Serialize};

/// Sort direction for a single key expression
///
/// `Invalid` is the unresolved placeholder a plan deserializer may carry
/// before directions are bound. Sorting with it is a hard error
/// (`SortError::InvalidSortDirection`); it is never treated as an implicit
/// ascending or descending order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    Ascending,
    Descending,
    Invalid,
}

impl SortDirection {
    /// Returns the string representation used in logs and explain output
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
            SortDirection::Invalid => "invalid",
        }
    }

    /// Returns true if this is a resolved, sortable direction
    pub fn is_valid(&self) -> bool {
        !matches!(self, SortDirection::Invalid)
    }
}

/// Fixed schema of the rows flowing through the operator
///
/// The operator never reshapes rows: the output schema is the input schema,
/// captured once at initialization. Columns are kept for logging and for the
/// surrounding pipeline to size its output sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    columns: Vec<String>,
}

impl Schema {
    /// Creates a schema from column names
    pub fn new(columns: Vec<String>) -> Self {
        Self { columns }
    }

    /// Creates a schema from string slices (test/fixture convenience)
    pub fn of(columns: &[&str]) -> Self {
        Self {
            columns: columns.iter().map(|c| c.to_string()).collect(),
        }
    }

    /// Returns the column names
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Returns the number of columns
    pub fn width(&self) -> usize {
        self.columns.len()
    }
}
