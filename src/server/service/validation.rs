//! Field checks shared by the write services.
//!
//! Field names are passed in their camelCase API spelling so the resulting message can
//! be returned to the client as is.

use crate::server::error::validation::ValidationError;

/// Trims `value`, failing when nothing is left.
pub fn required_text(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyField(field));
    }

    Ok(trimmed.to_string())
}

pub fn non_negative(field: &'static str, value: i32) -> Result<i32, ValidationError> {
    if value < 0 {
        return Err(ValidationError::Negative(field));
    }

    Ok(value)
}

pub fn positive(field: &'static str, value: i32) -> Result<i32, ValidationError> {
    if value <= 0 {
        return Err(ValidationError::NotPositive(field));
    }

    Ok(value)
}

/// Rejects NaN and infinities before the sign check.
pub fn non_negative_decimal(field: &'static str, value: f64) -> Result<f64, ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NotFinite(field));
    }
    if value < 0.0 {
        return Err(ValidationError::Negative(field));
    }

    Ok(value)
}
