//! Loosely typed payload fields.
//!
//! Payload fields are kept as raw JSON so that a wrong type becomes a
//! violation instead of a deserialization failure, and so that an explicit
//! `null` can be told apart from an absent field.
//!
//! The module has three layers:
//! - coercion (`coerce_*`): raw JSON to a typed value, `None` when impossible
//! - rules: `validator` custom functions built on coercion
//! - extraction (`text`, `number`, ...): typed values for building records,
//!   reporting [`StoreError::Corrupted`] if a validated value does not coerce

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::borrow::Cow;
use std::ops::RangeInclusive;
use validator::ValidationError;

use crate::error::{StoreError, StoreResult};

pub const REQUIRED_STRING: &str = "required string";
pub const NON_NEGATIVE_NUMBER: &str = "non-negative number";
pub const NON_NEGATIVE_INTEGER: &str = "non-negative integer";

/// Deserialize a present field, keeping an explicit `null` as `Some(Value::Null)`.
///
/// Use together with `#[serde(default)]` so that an absent field stays `None`.
pub fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// Non-empty trimmed text from a JSON string.
pub fn coerce_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        _ => None,
    }
}

/// Finite number from a JSON number or a numeric string.
pub fn coerce_number(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    number.filter(|n| n.is_finite())
}

/// Whole number from a JSON number or a numeric string; `5.0` counts as `5`.
///
/// Values outside the `i64` range do not coerce, so they surface as a
/// violation instead of being rounded on storage.
pub fn coerce_integer(value: &Value) -> Option<i64> {
    if let Value::Number(n) = value {
        if let Some(i) = n.as_i64() {
            return Some(i);
        }
    }
    coerce_number(value)
        .filter(|n| n.fract() == 0.0 && *n >= i64::MIN as f64 && *n <= i64::MAX as f64)
        .map(|n| n as i64)
}

/// Build a rule failure carrying a client-facing message.
pub fn violation(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}

/// Rule: a string that is non-empty after trimming.
pub fn required_text(value: &Value) -> Result<(), ValidationError> {
    coerce_text(value)
        .map(|_| ())
        .ok_or_else(|| violation("text", REQUIRED_STRING))
}

/// Rule: a finite number greater than or equal to zero.
pub fn non_negative_number(value: &Value) -> Result<(), ValidationError> {
    match coerce_number(value) {
        Some(n) if n >= 0.0 => Ok(()),
        _ => Err(violation("range", NON_NEGATIVE_NUMBER)),
    }
}

/// Rule: a whole number greater than or equal to zero.
pub fn non_negative_integer(value: &Value) -> Result<(), ValidationError> {
    match coerce_integer(value) {
        Some(n) if n >= 0 => Ok(()),
        _ => Err(violation("range", NON_NEGATIVE_INTEGER)),
    }
}

/// Rule helper: `null` or a finite number inside `range`.
pub fn nullable_number_in(
    value: &Value,
    range: RangeInclusive<f64>,
    message: &'static str,
) -> Result<(), ValidationError> {
    if value.is_null() {
        return Ok(());
    }
    match coerce_number(value) {
        Some(n) if range.contains(&n) => Ok(()),
        _ => Err(violation("range", message)),
    }
}

/// Rule helper: a whole number inside `range`.
pub fn integer_in(
    value: &Value,
    range: RangeInclusive<i64>,
    message: &'static str,
) -> Result<(), ValidationError> {
    match coerce_integer(value) {
        Some(n) if range.contains(&n) => Ok(()),
        _ => Err(violation("range", message)),
    }
}

/// Rule helper: `null`, an empty string, or any string.
pub fn nullable_text(value: &Value, message: &'static str) -> Result<(), ValidationError> {
    match value {
        Value::Null | Value::String(_) => Ok(()),
        _ => Err(violation("type", message)),
    }
}

pub fn text(field: &str, value: Option<&Value>) -> StoreResult<String> {
    value
        .and_then(coerce_text)
        .ok_or_else(|| StoreError::corrupted(field, "is not text"))
}

pub fn number(field: &str, value: Option<&Value>) -> StoreResult<f64> {
    value
        .and_then(coerce_number)
        .ok_or_else(|| StoreError::corrupted(field, "is not a number"))
}

pub fn integer(field: &str, value: Option<&Value>) -> StoreResult<i64> {
    value
        .and_then(coerce_integer)
        .ok_or_else(|| StoreError::corrupted(field, "is not an integer"))
}

/// Absent or `null` becomes `None`.
pub fn nullable_number(field: &str, value: Option<&Value>) -> StoreResult<Option<f64>> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(v) => number(field, Some(v)).map(Some),
    }
}

/// Absent, `null` or blank becomes `None`; text is trimmed.
pub fn nullable_string(field: &str, value: Option<&Value>) -> StoreResult<Option<String>> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            Ok((!trimmed.is_empty()).then(|| trimmed.to_string()))
        }
        Some(_) => Err(StoreError::corrupted(field, "is not text")),
    }
}
