//! Option validators and cell coercion shared by the matchers.

use serde_json::Value;

use crate::variable_resolver::is_variable_token;

/// Returns true if the input is a finite number or exactly one variable token.
///
/// Numbers are parsed after trimming surrounding whitespace; tokens must span
/// the whole input. The empty string is rejected.
///
/// # Examples
///
/// ```
/// use querybind_application::matchers::number_or_variable_validator;
///
/// assert!(number_or_variable_validator("42"));
/// assert!(number_or_variable_validator("$x"));
/// assert!(!number_or_variable_validator("abc"));
/// ```
#[must_use]
pub fn number_or_variable_validator(input: &str) -> bool {
    parse_number(input).is_some() || is_variable_token(input)
}

/// Parses a finite number, ignoring surrounding whitespace.
#[must_use]
pub fn parse_number(input: &str) -> Option<f64> {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Reads a data cell as a number.
///
/// JSON numbers are used as is and numeric strings are parsed; everything
/// else has no numeric value.
#[must_use]
pub fn cell_number(cell: &Value) -> Option<f64> {
    match cell {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => parse_number(text),
        _ => None,
    }
}

/// Reads a data cell as text. `null` has no text.
#[must_use]
pub fn cell_text(cell: &Value) -> Option<String> {
    match cell {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}
