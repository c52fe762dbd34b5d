use std::borrow::Cow;

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use validator::{ValidationError, ValidationErrors};

use crate::shared::types::{FieldError, FieldLocation};

pub const LATITUDE_MESSAGE: &str = "Latitude must be a number between -90 and 90";
pub const LONGITUDE_MESSAGE: &str = "Longitude must be a number between -180 and 180";

// =============================================================================
// LENIENT DESERIALIZERS
// =============================================================================

/// Accepts a string (trimmed) or a number (stringified); anything else becomes "".
pub fn trimmed_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let text = match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => s.trim().to_string(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    };
    Ok(text)
}

/// Accepts a JSON number or a numeric string (query parameters are always strings).
///
/// Missing, null, unparsable or non-finite values become NaN, which the
/// coordinate range checks reject, so every bad field is reported together
/// instead of failing deserialization on the first one.
pub fn lenient_coordinate<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let parsed = match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(parsed.filter(|v| v.is_finite()).unwrap_or(f64::NAN))
}

pub fn missing_coordinate() -> f64 {
    f64::NAN
}

// =============================================================================
// CUSTOM VALIDATORS
// =============================================================================

fn failure(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}

pub fn required_name(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(failure("required", "Name is required"));
    }
    Ok(())
}

pub fn required_address(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(failure("required", "Address is required"));
    }
    Ok(())
}

pub fn validate_latitude(value: impl std::borrow::Borrow<f64>) -> Result<(), ValidationError> {
    if (-90.0..=90.0).contains(value.borrow()) {
        Ok(())
    } else {
        Err(failure("latitude", LATITUDE_MESSAGE))
    }
}

pub fn validate_longitude(value: impl std::borrow::Borrow<f64>) -> Result<(), ValidationError> {
    if (-180.0..=180.0).contains(value.borrow()) {
        Ok(())
    } else {
        Err(failure("longitude", LONGITUDE_MESSAGE))
    }
}

/// Flatten validator output into one entry per violation, ordered by field name
pub fn collect_field_errors(errors: &ValidationErrors, location: FieldLocation) -> Vec<FieldError> {
    let mut collected: Vec<FieldError> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, violations)| {
            let field = field.to_string();
            violations.iter().map(move |violation| FieldError {
                field: field.clone(),
                message: violation
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value ({})", violation.code)),
                location,
            })
        })
        .collect();

    collected.sort_by(|a, b| a.field.cmp(&b.field));
    collected
}
