//! Scalar values produced by key expressions
//!
//! Sort keys evaluate to JSON scalars. Sorting needs a total order across
//! every value a key expression can produce, so `ScalarValue` ranks by type
//! first (null < bool < number < string < array < object) and then compares
//! within the type. Equality is defined through the same comparison, so
//! `1` and `1.0` are order-equivalent.

use std::cmp::Ordering;

use serde_json::Value;

/// A totally-ordered scalar produced by evaluating a key expression
#[derive(Debug, Clone)]
pub struct ScalarValue(Value);

impl ScalarValue {
    /// Wraps a JSON value
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Returns the underlying JSON value
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Unwraps into the underlying JSON value
    pub fn into_value(self) -> Value {
        self.0
    }

    fn type_rank(value: &Value) -> u8 {
        match value {
            Value::Null => 0,
            Value::Bool(_) => 1,
            Value::Number(_) => 2,
            Value::String(_) => 3,
            Value::Array(_) => 4,
            Value::Object(_) => 5,
        }
    }

    fn compare_values(a: &Value, b: &Value) -> Ordering {
        let rank = Self::type_rank(a).cmp(&Self::type_rank(b));
        if rank != Ordering::Equal {
            return rank;
        }

        match (a, b) {
            (Value::Null, Value::Null) => Ordering::Equal,
            (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
            (Value::Number(x), Value::Number(y)) => {
                let x = x.as_f64().unwrap_or(0.0);
                let y = y.as_f64().unwrap_or(0.0);
                x.partial_cmp(&y).unwrap_or(Ordering::Equal)
            }
            (Value::String(x), Value::String(y)) => x.cmp(y),
            (Value::Array(x), Value::Array(y)) => {
                for (ex, ey) in x.iter().zip(y.iter()) {
                    let ord = Self::compare_values(ex, ey);
                    if ord != Ordering::Equal {
                        return ord;
                    }
                }
                x.len().cmp(&y.len())
            }
            // Objects have no meaningful sort order; order-equivalent
            _ => Ordering::Equal,
        }
    }
}

impl PartialEq for ScalarValue {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ScalarValue {}

impl PartialOrd for ScalarValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ScalarValue {
    fn cmp(&self, other: &Self) -> Ordering {
        Self::compare_values(&self.0, &other.0)
    }
}

impl From<Value> for ScalarValue {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

impl From<i64> for ScalarValue {
    fn from(value: i64) -> Self {
        Self(Value::from(value))
    }
}

impl From<&str> for ScalarValue {
    fn from(value: &str) -> Self {
        Self(Value::from(value))
    }
}
