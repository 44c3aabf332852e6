//! Argument value model.
//!
//! # Responsibilities
//! - Represent any argument a route-generation call may receive
//! - Provide invariant, locale-independent text for scalars
//! - Bridge JSON data into the tagged union
//!
//! # Design Decisions
//! - Explicit tagged union instead of reflection-style type inspection;
//!   every consumer matches exhaustively
//! - Composite fields are a `Vec` of pairs so iteration order is the
//!   declaration order, always
//! - `From` conversions keep descriptor construction terse at call sites

use std::fmt;

use serde::{Deserialize, Serialize};

/// A string-convertible primitive.
///
/// `Display` is the canonical textual representation used in both path and
/// query position: base-10 integers without grouping separators, `true` /
/// `false` booleans, and floats via Rust's shortest round-trip formatting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Scalar {
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Text(String),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Bool(v) => write!(f, "{v}"),
            Scalar::Int(v) => write!(f, "{v}"),
            Scalar::UInt(v) => write!(f, "{v}"),
            Scalar::Float(v) => write!(f, "{v}"),
            Scalar::Text(v) => f.write_str(v),
        }
    }
}

impl From<bool> for Scalar {
    fn from(v: bool) -> Self {
        Scalar::Bool(v)
    }
}

impl From<i32> for Scalar {
    fn from(v: i32) -> Self {
        Scalar::Int(v.into())
    }
}

impl From<i64> for Scalar {
    fn from(v: i64) -> Self {
        Scalar::Int(v)
    }
}

impl From<u32> for Scalar {
    fn from(v: u32) -> Self {
        Scalar::UInt(v.into())
    }
}

impl From<u64> for Scalar {
    fn from(v: u64) -> Self {
        Scalar::UInt(v)
    }
}

impl From<f64> for Scalar {
    fn from(v: f64) -> Self {
        Scalar::Float(v)
    }
}

impl From<&str> for Scalar {
    fn from(v: &str) -> Self {
        Scalar::Text(v.to_string())
    }
}

impl From<String> for Scalar {
    fn from(v: String) -> Self {
        Scalar::Text(v)
    }
}

/// Any argument value a route-generation call may receive.
///
/// Pure data: values never own a route and are copied into the descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// The argument was not supplied. Contributes nothing to the query
    /// string; invalid in path position.
    Absent,
    /// A single string-convertible primitive.
    Scalar(Scalar),
    /// An ordered sequence of values; serializes as a repeated query key.
    Sequence(Vec<Value>),
    /// An ordered mapping from field name to value; serializes by flattening
    /// its fields into top-level query pairs.
    Composite(Vec<(String, Value)>),
}

impl Value {
    /// Build a sequence value from anything convertible.
    pub fn sequence<V>(items: impl IntoIterator<Item = V>) -> Self
    where
        V: Into<Value>,
    {
        Value::Sequence(items.into_iter().map(Into::into).collect())
    }

    /// Build a composite value; field order is the iteration order.
    pub fn composite<K, V>(fields: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        Value::Composite(
            fields
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Returns the scalar inside, if this is a scalar value.
    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Value::Scalar(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Value::Absent)
    }
}

impl From<Scalar> for Value {
    fn from(s: Scalar) -> Self {
        Value::Scalar(s)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Scalar(v.into())
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Scalar(v.into())
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Scalar(v.into())
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::Scalar(v.into())
    }
}

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        Value::Scalar(v.into())
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Scalar(v.into())
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Scalar(v.into())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Scalar(v.into())
    }
}

impl<V: Into<Value>> From<Vec<V>> for Value {
    fn from(items: Vec<V>) -> Self {
        Value::sequence(items)
    }
}

impl<V: Into<Value>> From<Option<V>> for Value {
    fn from(v: Option<V>) -> Self {
        match v {
            Some(inner) => inner.into(),
            None => Value::Absent,
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Value::Absent,
            serde_json::Value::Bool(b) => Value::Scalar(Scalar::Bool(b)),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Scalar(Scalar::Int(i))
                } else if let Some(u) = n.as_u64() {
                    Value::Scalar(Scalar::UInt(u))
                } else {
                    Value::Scalar(Scalar::Float(n.as_f64().unwrap_or(f64::NAN)))
                }
            }
            serde_json::Value::String(s) => Value::Scalar(Scalar::Text(s)),
            serde_json::Value::Array(items) => {
                Value::Sequence(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Value::Composite(
                map.into_iter().map(|(k, v)| (k, Value::from(v))).collect(),
            ),
        }
    }
}
