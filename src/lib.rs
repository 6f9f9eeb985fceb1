//! rowsort - a deterministic sort/limit/offset execution stage
//!
//! A single relational operator embedded in a row-oriented query pipeline:
//! it materializes an unordered upstream row set, orders it by a multi-key
//! sort specification, windows the ordered sequence by a runtime-resolved
//! limit/offset, and appends the result to a downstream sink, polling a
//! cooperative cancellation monitor throughout.

pub mod executor;
pub mod observability;
pub mod plan;
