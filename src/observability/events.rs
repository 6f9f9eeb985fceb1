//! Lifecycle events emitted by the operator
//!
//! Events are explicit and typed; the event name is the first field of every
//! log line.

use std::fmt;

/// Observable lifecycle points of the sort stage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Operator configured for a compiled plan
    Initialized,
    /// Execution started, window resolved
    ExecuteBegin,
    /// Working set ordered
    Sorted,
    /// Execution finished, output committed
    ExecuteComplete,
    /// Execution unwound before completion
    ExecuteAborted,
}

impl Event {
    /// Returns the event name used in log output
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::Initialized => "ORDER_BY_INITIALIZED",
            Event::ExecuteBegin => "ORDER_BY_EXECUTE_BEGIN",
            Event::Sorted => "ORDER_BY_SORTED",
            Event::ExecuteComplete => "ORDER_BY_EXECUTE_COMPLETE",
            Event::ExecuteAborted => "ORDER_BY_EXECUTE_ABORTED",
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names() {
        assert_eq!(Event::Initialized.as_str(), "ORDER_BY_INITIALIZED");
        assert_eq!(Event::ExecuteAborted.as_str(), "ORDER_BY_EXECUTE_ABORTED");
        assert_eq!(format!("{}", Event::Sorted), "ORDER_BY_SORTED");
    }
}
