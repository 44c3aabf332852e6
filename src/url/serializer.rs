//! Query pair serialization for argument values.
//!
//! # Responsibilities
//! - Turn one unconsumed parameter into zero or more encoded query pairs
//! - Keep pair order deterministic for a fixed value
//!
//! # Design Decisions
//! - Absent values contribute nothing
//! - Sequences serialize as a repeated key, one pair per element, in
//!   sequence order (`values=a&values=b`)
//! - Composites flatten at the top level only: each field becomes its own
//!   pair keyed by the field's own name, since the composite stands for a
//!   single logical argument whose public shape is the caller-visible
//!   contract. A `Prefixed` style (`name.field` keys) is available for
//!   deployments that expect that convention.
//! - Nested composites fail fast with UnsupportedValueShape instead of
//!   silently dropping data

use super::encode;
use crate::descriptor::{Scalar, Value};
use crate::error::RouteError;

/// Convention for naming the query keys of a composite argument's fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CompositeStyle {
    /// Each field keyed by its own name (`Name=User&Age=23`). Default.
    #[default]
    Flattened,
    /// Each field keyed as `parameter.field` (`person.Name=User`).
    Prefixed,
}

/// Serialize one parameter into ordered, percent-encoded query pairs.
pub fn serialize(
    name: &str,
    value: &Value,
    style: CompositeStyle,
) -> Result<Vec<(String, String)>, RouteError> {
    let mut pairs = Vec::new();
    match value {
        Value::Absent => {}
        Value::Scalar(scalar) => pairs.push(pair(name, scalar)),
        Value::Sequence(items) => push_sequence(name, name, items, &mut pairs)?,
        Value::Composite(fields) => {
            for (field_name, field_value) in fields {
                let key = match style {
                    CompositeStyle::Flattened => field_name.clone(),
                    CompositeStyle::Prefixed => format!("{name}.{field_name}"),
                };
                match field_value {
                    Value::Absent => {}
                    Value::Scalar(scalar) => pairs.push(pair(&key, scalar)),
                    Value::Sequence(items) => push_sequence(name, &key, items, &mut pairs)?,
                    Value::Composite(_) => {
                        return Err(RouteError::UnsupportedValueShape {
                            parameter: name.to_string(),
                        })
                    }
                }
            }
        }
    }
    Ok(pairs)
}

/// One pair per element under a repeated key; elements must be scalar.
fn push_sequence(
    parameter: &str,
    key: &str,
    items: &[Value],
    pairs: &mut Vec<(String, String)>,
) -> Result<(), RouteError> {
    for item in items {
        match item {
            Value::Absent => {}
            Value::Scalar(scalar) => pairs.push(pair(key, scalar)),
            Value::Sequence(_) | Value::Composite(_) => {
                return Err(RouteError::UnsupportedValueShape {
                    parameter: parameter.to_string(),
                })
            }
        }
    }
    Ok(())
}

fn pair(key: &str, scalar: &Scalar) -> (String, String) {
    (
        encode::query_component(key).into_owned(),
        encode::query_component(&scalar.to_string()).into_owned(),
    )
}
