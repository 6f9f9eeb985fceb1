//! Observability for the sort stage
//!
//! Structured, synchronous logging in place of the trace macros a query
//! engine would otherwise sprinkle through its executors.
//!
//! # Principles
//!
//! 1. Observability is read-only: no side effects on execution
//! 2. No async, no buffering, no background threads
//! 3. Deterministic output: one line per event, fields in stable order
//! 4. A logging failure never fails the query

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};
