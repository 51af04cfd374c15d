//! Lenient numeric coercion for raw decision input.
//!
//! Criterion weights and alternative values arrive from form-style clients,
//! so any entry may be a number, a numeric string, an empty string or null.
//! Conversion follows the loose rules browser clients apply to form fields,
//! and anything that does not yield a finite number becomes `0.0`.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Coerces an arbitrary JSON value to a finite `f64`.
///
/// # Rules
/// - Number: its value
/// - String: trimmed and parsed as decimal, or as an integer with a
///   `0x`, `0o` or `0b` prefix; empty or unparseable gives 0
/// - Bool: 1 for `true`, 0 for `false`
/// - Single-element array: its element read as text, so `[5]` and `["5"]`
///   give 5
/// - Null, other arrays, objects: 0
/// - Any non-finite result: 0
pub fn coerce_number(value: &Value) -> f64 {
    let n = match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => parse_text(s),
        Value::Bool(true) => 1.0,
        Value::Array(items) => match items.as_slice() {
            [single] => coerce_element(single),
            _ => 0.0,
        },
        Value::Bool(false) | Value::Null | Value::Object(_) => 0.0,
    };

    if n.is_finite() {
        n
    } else {
        0.0
    }
}

/// Reads an array element through its text form: null and nested empty
/// arrays are blank, booleans are not numeric.
fn coerce_element(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => parse_text(s),
        Value::Array(items) => match items.as_slice() {
            [single] => coerce_element(single),
            _ => 0.0,
        },
        Value::Bool(_) | Value::Null | Value::Object(_) => 0.0,
    }
}

fn parse_text(s: &str) -> f64 {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    let radix = match trimmed.get(..2) {
        Some("0x") | Some("0X") => Some(16),
        Some("0o") | Some("0O") => Some(8),
        Some("0b") | Some("0B") => Some(2),
        _ => None,
    };

    match radix {
        Some(radix) => parse_radix_digits(&trimmed[2..], radix).unwrap_or(0.0),
        None => trimmed.parse::<f64>().unwrap_or(0.0),
    }
}

// Unsigned digits only; a sign or empty digit string is not a number.
fn parse_radix_digits(digits: &str, radix: u32) -> Option<f64> {
    if digits.is_empty() {
        return None;
    }
    digits.chars().try_fold(0.0, |acc, c| {
        c.to_digit(radix)
            .map(|d| acc * f64::from(radix) + f64::from(d))
    })
}

/// Deserializes a single lenient number.
pub fn number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_number(&value))
}

/// Deserializes a sequence of lenient numbers.
///
/// The container itself must be an array; only its entries are lenient.
pub fn numbers<'de, D>(deserializer: D) -> Result<Vec<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let values = Vec::<Value>::deserialize(deserializer)?;
    Ok(values.iter().map(coerce_number).collect())
}
