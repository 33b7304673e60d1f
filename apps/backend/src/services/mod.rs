//! Domain services: request validation and multi-step orchestration over the
//! repositories. Every mutation receives the caller's transaction.

pub mod games;
pub mod members;
pub mod players;

use serde_json::{Map, Value};

use crate::errors::domain::{DomainError, ValidationKind};
use crate::repos::attributes::{integer_text, is_truthy_or_zero};

/// Reject any attribute whose name is not in `allowed`.
pub(crate) fn reject_unknown(
    attributes: &Map<String, Value>,
    allowed: &[&str],
) -> Result<(), DomainError> {
    match attributes.keys().find(|k| !allowed.contains(&k.as_str())) {
        Some(name) => Err(DomainError::validation(
            ValidationKind::UnknownAttribute,
            format!("Unknown attribute: {name}"),
        )),
        None => Ok(()),
    }
}

/// A supplied value, or `None` when it is absent or falsy.
pub(crate) fn supplied<'a>(attributes: &'a Map<String, Value>, name: &str) -> Option<&'a Value> {
    attributes.get(name).filter(|v| is_truthy_or_zero(v))
}

pub(crate) fn required_text(
    attributes: &Map<String, Value>,
    name: &str,
) -> Result<String, DomainError> {
    match supplied(attributes, name) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(DomainError::validation_other(format!("{name} must be a string"))),
        None => Err(DomainError::validation_other(format!("{name} is required"))),
    }
}

pub(crate) fn optional_integer(
    attributes: &Map<String, Value>,
    name: &str,
) -> Result<Option<String>, DomainError> {
    supplied(attributes, name)
        .map(|v| integer_text(name, v))
        .transpose()
}

/// An id given either as a JSON integer or as a numeric string.
pub(crate) fn id_value(name: &str, value: &Value) -> Result<i64, DomainError> {
    let id = match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };
    id.ok_or_else(|| DomainError::validation_other(format!("{name} must be an integer id")))
}
