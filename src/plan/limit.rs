//! Inlined limit/offset descriptor and its runtime resolution
//!
//! A sort plan may carry an inlined limit node. Its limit and offset are
//! either literal integers or references into the runtime parameter array,
//! so the same compiled plan can be re-executed with different bound values.
//! A negative literal means "unbounded" (the planner's `-1` convention);
//! resolution normalizes that away so the executor only ever sees
//! `Option<u64>` and `u64`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::errors::LimitParamError;

/// Runtime parameter bindings for one execution
///
/// Positional values bound by the surrounding pipeline before each execution
/// of a compiled plan.
#[derive(Debug, Clone, Default)]
pub struct RuntimeParameters {
    values: Vec<Value>,
}

impl RuntimeParameters {
    /// Creates an empty parameter set
    pub fn none() -> Self {
        Self { values: Vec::new() }
    }

    /// Creates parameters from positional values
    pub fn from_values(values: Vec<Value>) -> Self {
        Self { values }
    }

    /// Returns the value bound at a slot, if any
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }

    /// Returns the number of bound slots
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if no parameters are bound
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl From<Vec<Value>> for RuntimeParameters {
    fn from(values: Vec<Value>) -> Self {
        Self::from_values(values)
    }
}

/// A limit or offset value in the compiled plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LimitValue {
    /// Statically-inlined value; negative means unbounded
    Literal(i64),
    /// Reference into the runtime parameter array
    Parameter(usize),
}

impl LimitValue {
    fn resolve(&self, params: &RuntimeParameters) -> Result<i64, LimitParamError> {
        match *self {
            LimitValue::Literal(v) => Ok(v),
            LimitValue::Parameter(index) => {
                let value = params
                    .get(index)
                    .ok_or(LimitParamError::Missing { index })?;
                value
                    .as_i64()
                    .ok_or(LimitParamError::NotAnInteger { index })
            }
        }
    }
}

/// Inlined limit node captured at operator initialization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LimitDescriptor {
    limit: LimitValue,
    offset: LimitValue,
}

impl LimitDescriptor {
    /// Creates a descriptor from limit and offset values
    pub fn new(limit: LimitValue, offset: LimitValue) -> Self {
        Self { limit, offset }
    }

    /// Creates a descriptor from literal values (negative = unbounded)
    pub fn literal(limit: i64, offset: i64) -> Self {
        Self {
            limit: LimitValue::Literal(limit),
            offset: LimitValue::Literal(offset),
        }
    }

    /// Resolves the descriptor against this execution's parameters.
    ///
    /// Called once per execution; the same descriptor may resolve to
    /// different bounds across executions of the same plan.
    pub fn resolve(&self, params: &RuntimeParameters) -> Result<LimitSpec, LimitParamError> {
        let limit = self.limit.resolve(params)?;
        let offset = self.offset.resolve(params)?;
        Ok(LimitSpec {
            limit: u64::try_from(limit).ok(),
            offset: u64::try_from(offset).unwrap_or(0),
        })
    }
}

/// Resolved window bounds for one execution
///
/// `limit: None` means no bound; a negative resolved offset collapses to 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LimitSpec {
    /// Maximum number of rows to emit, if bounded
    pub limit: Option<u64>,
    /// Number of leading ordered rows to skip
    pub offset: u64,
}

impl LimitSpec {
    /// The window applied when no limit node is inlined at all
    pub fn unbounded() -> Self {
        Self {
            limit: None,
            offset: 0,
        }
    }

    /// Returns true if a row-count bound applies
    pub fn is_bounded(&self) -> bool {
        self.limit.is_some()
    }
}
