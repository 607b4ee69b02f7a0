//! Scalar cell values moved between JSON payloads and tabular stores.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::fmt;

/// A scalar cell value in a tabular store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Empty,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
}

impl CellValue {
    /// Check if the cell stringifies to nothing: `Empty`, or the empty
    /// string. Whitespace counts as content.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::String(s) => s.is_empty(),
            _ => false,
        }
    }

    /// Convert a JSON scalar to a cell.
    ///
    /// Integral JSON numbers become `Int`, other numbers `Float`; arrays and
    /// objects collapse to their JSON text, since a cell holds one scalar.
    #[must_use]
    pub fn from_json(value: &JsonValue) -> CellValue {
        match value {
            JsonValue::Null => CellValue::Empty,
            JsonValue::Bool(b) => CellValue::Bool(*b),
            JsonValue::Number(n) => {
                if let Some(i) = n.as_i64() {
                    CellValue::Int(i)
                } else if let Some(f) = n.as_f64() {
                    CellValue::Float(f)
                } else {
                    CellValue::String(n.to_string())
                }
            }
            JsonValue::String(s) => CellValue::String(s.clone()),
            JsonValue::Array(_) | JsonValue::Object(_) => CellValue::String(value.to_string()),
        }
    }

    /// Convert the cell to a JSON value.
    #[must_use]
    pub fn to_json(&self) -> JsonValue {
        match self {
            CellValue::Empty => JsonValue::Null,
            CellValue::Bool(b) => JsonValue::Bool(*b),
            CellValue::Int(i) => JsonValue::Number((*i).into()),
            CellValue::Float(f) => {
                // from_f64 returns None for NaN and Infinity
                // Fall back to string representation to preserve data
                serde_json::Number::from_f64(*f)
                    .map(JsonValue::Number)
                    .unwrap_or_else(|| JsonValue::String(f.to_string()))
            }
            CellValue::String(s) => JsonValue::String(s.clone()),
        }
    }
}

impl Default for CellValue {
    fn default() -> Self {
        CellValue::Empty
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => write!(f, ""),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Int(i) => write!(f, "{i}"),
            CellValue::Float(fl) => write!(f, "{fl}"),
            CellValue::String(s) => write!(f, "{s}"),
        }
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Bool(b)
    }
}

impl From<i64> for CellValue {
    fn from(i: i64) -> Self {
        CellValue::Int(i)
    }
}

impl From<i32> for CellValue {
    fn from(i: i32) -> Self {
        CellValue::Int(i64::from(i))
    }
}

impl From<f64> for CellValue {
    fn from(f: f64) -> Self {
        CellValue::Float(f)
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::String(s)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::String(s.to_string())
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => v.into(),
            None => CellValue::Empty,
        }
    }
}
