//! Reusable field validators
//!
//! Each validator receives the field name and its JSON value (`Null` when the
//! field is absent) and returns a short diagnostic on failure. Stages wrap
//! them and replace the diagnostic with the client-facing message.

use serde_json::Value;

/// Validator: field is present and truthy (not null, false, 0 or "")
pub fn required() -> impl Fn(&str, &Value) -> Result<(), String> + Send + Sync + Clone {
    |field: &str, value: &Value| {
        let present = match value {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
            Value::String(s) => !s.is_empty(),
            Value::Array(_) | Value::Object(_) => true,
        };
        if present {
            Ok(())
        } else {
            Err(format!("field '{}' is required", field))
        }
    }
}

/// Validator: field is a non-empty string
pub fn non_empty_string() -> impl Fn(&str, &Value) -> Result<(), String> + Send + Sync + Clone {
    |field: &str, value: &Value| match value.as_str() {
        Some(s) if !s.is_empty() => Ok(()),
        Some(_) => Err(format!("field '{}' must not be empty", field)),
        None => Err(format!("field '{}' must be a string", field)),
    }
}

/// Validator: field is a number strictly greater than zero
pub fn positive_number() -> impl Fn(&str, &Value) -> Result<(), String> + Send + Sync + Clone {
    |field: &str, value: &Value| match value.as_f64() {
        Some(num) if num > 0.0 => Ok(()),
        Some(num) => Err(format!("field '{}' must be positive (value: {})", field, num)),
        None => Err(format!("field '{}' must be a number", field)),
    }
}

/// Validator: field is a whole number strictly greater than zero
///
/// `2` and `2.0` both qualify; `1.5` does not.
pub fn positive_integer() -> impl Fn(&str, &Value) -> Result<(), String> + Send + Sync + Clone {
    |field: &str, value: &Value| match value.as_f64() {
        Some(n) if n.is_finite() && n > 0.0 && n.fract() == 0.0 => Ok(()),
        _ => Err(format!(
            "field '{}' must be an integer greater than 0 (value: {})",
            field, value
        )),
    }
}

/// Validator: field is an array with at least one element
pub fn non_empty_array() -> impl Fn(&str, &Value) -> Result<(), String> + Send + Sync + Clone {
    |field: &str, value: &Value| match value.as_array() {
        Some(items) if !items.is_empty() => Ok(()),
        Some(_) => Err(format!("field '{}' must not be empty", field)),
        None => Err(format!("field '{}' must be an array", field)),
    }
}
