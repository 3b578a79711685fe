//! Cell values and missing-value sentinels.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single table cell.
///
/// Columns declare their kind once in the [`Schema`](super::Schema); the
/// value itself only carries the tag needed to tell numbers, text and
/// absence apart.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// Numeric cell.
    Number(f64),
    /// Text cell (categorical labels, raw tokens).
    Text(String),
    /// Boolean cell, produced by missing-indicator columns.
    Bool(bool),
    /// The canonical missing marker.
    Missing,
}

impl Value {
    /// Shorthand for `Value::Text`.
    pub fn text(s: impl Into<String>) -> Self {
        Value::Text(s.into())
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Value::Missing)
    }

    /// Returns the numeric payload, if any.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(x) => Some(*x),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Short name of the variant, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::Text(_) => "text",
            Value::Bool(_) => "bool",
            Value::Missing => "missing",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(x) => write!(f, "{}", x),
            Value::Text(s) => write!(f, "{}", s),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Missing => write!(f, "<missing>"),
        }
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Number(x)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(Value::Missing)
    }
}

/// The marker a data source uses for "value absent".
///
/// [`Value::Missing`] is always treated as missing; the sentinel names one
/// additional source-specific value that means the same thing (a literal `"?"`,
/// a NaN, a magic number).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum Sentinel {
    /// Only the canonical [`Value::Missing`] marker.
    #[default]
    Missing,
    /// Numeric NaN cells.
    Nan,
    /// A specific text token, e.g. `"?"`.
    Text(String),
    /// A specific number, e.g. `-999.0`.
    Number(f64),
}

impl Sentinel {
    /// True if `value` counts as missing under this sentinel.
    pub fn matches(&self, value: &Value) -> bool {
        if value.is_missing() {
            return true;
        }
        match (self, value) {
            (Sentinel::Nan, Value::Number(x)) => x.is_nan(),
            (Sentinel::Text(token), Value::Text(s)) => token == s,
            (Sentinel::Number(marker), Value::Number(x)) => marker == x,
            _ => false,
        }
    }
}

impl fmt::Display for Sentinel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sentinel::Missing => write!(f, "<missing>"),
            Sentinel::Nan => write!(f, "NaN"),
            Sentinel::Text(s) => write!(f, "{:?}", s),
            Sentinel::Number(x) => write!(f, "{}", x),
        }
    }
}
