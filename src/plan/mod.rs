//! Operator configuration for rowsort
//!
//! The sort stage is configured once per compiled plan from strongly-typed
//! descriptors: the sort directions, an optional inlined limit/offset
//! descriptor, and the input schema. No plan-node downcasting happens at
//! execution time; everything the operator needs is resolved here or, for
//! runtime-parameterized limits, re-resolved per execution.

mod errors;
mod limit;
mod sort;

pub use errors::{ConfigError, ConfigResult, LimitParamError};
pub use limit::{LimitDescriptor, LimitSpec, LimitValue, RuntimeParameters};
pub use sort::{Schema, SortDirection};
