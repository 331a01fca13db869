//! Dynamic element values.
//!
//! The container is dynamically typed: construction dispatch, the default
//! sort and JSON interchange all inspect element values at runtime. The
//! untagged serde derive maps JSON null/bool/number/string/array/object
//! straight onto the variants (integers win over floats).

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A dynamically typed element.
///
/// `Null` doubles as the explicit empty-slot marker: a pre-sized container
/// holds `Null` at every index, and `pop`/`shift` on an empty container
/// return `Null` rather than erroring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Array(Vec<Value>),
    Map(BTreeMap<String, Value>),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Numeric payload, widening integers to f64.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Int(n) => Some(*n as f64),
            Value::Float(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Variant name, for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Int(_) => "integer",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Map(_) => "map",
        }
    }
}

/// The string form used by the default sort order: strings verbatim,
/// numbers in decimal with `NaN`/`Infinity` spelled out, arrays
/// comma-joined.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(n) => {
                if n.is_nan() {
                    f.write_str("NaN")
                } else if n.is_infinite() {
                    f.write_str(if n.is_sign_positive() { "Infinity" } else { "-Infinity" })
                } else {
                    write!(f, "{n}")
                }
            }
            Value::String(s) => f.write_str(s),
            Value::Array(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{item}")?;
                }
                Ok(())
            }
            Value::Map(_) => f.write_str("[object Object]"),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(n as i64)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Value::Null.to_string(), "null");
        assert_eq!(Value::Bool(true).to_string(), "true");
        assert_eq!(Value::Int(-3).to_string(), "-3");
        assert_eq!(Value::Float(3.5).to_string(), "3.5");
        assert_eq!(Value::Float(f64::NAN).to_string(), "NaN");
        assert_eq!(Value::Float(f64::NEG_INFINITY).to_string(), "-Infinity");
        assert_eq!(Value::String("hi".into()).to_string(), "hi");
        let arr = Value::Array(vec![Value::Int(1), Value::String("x".into())]);
        assert_eq!(arr.to_string(), "1,x");
    }

    #[test]
    fn test_accessors() {
        assert!(Value::Null.is_null());
        assert_eq!(Value::Int(7).as_int(), Some(7));
        assert_eq!(Value::Int(7).as_number(), Some(7.0));
        assert_eq!(Value::Float(1.5).as_number(), Some(1.5));
        assert_eq!(Value::from("s").as_str(), Some("s"));
        assert_eq!(Value::Bool(false).as_int(), None);
        assert_eq!(Value::Map(BTreeMap::new()).type_name(), "map");
    }

    #[test]
    fn test_untagged_json() {
        assert_eq!(serde_json::to_string(&Value::Int(3)).unwrap(), "3");
        assert_eq!(serde_json::to_string(&Value::Null).unwrap(), "null");

        let v: Value = serde_json::from_str("3").unwrap();
        assert_eq!(v, Value::Int(3));
        let v: Value = serde_json::from_str("3.5").unwrap();
        assert_eq!(v, Value::Float(3.5));
        let v: Value = serde_json::from_str(r#"[1, "a", null]"#).unwrap();
        assert_eq!(
            v,
            Value::Array(vec![Value::Int(1), Value::from("a"), Value::Null])
        );
        let v: Value = serde_json::from_str(r#"{"0": 1}"#).unwrap();
        let Value::Map(map) = v else {
            panic!("expected map");
        };
        assert_eq!(map.get("0"), Some(&Value::Int(1)));
    }
}
