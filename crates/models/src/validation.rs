//! Field validators shared by the entity modules.

use crate::errors::ModelError;

/// Trimmed, non-empty and at most `max` characters.
pub fn required_text(field: &str, value: &str, max: usize) -> Result<String, ModelError> {
    let v = value.trim();
    if v.is_empty() {
        return Err(ModelError::Validation(format!("{field} required")));
    }
    if v.chars().count() > max {
        return Err(ModelError::Validation(format!("{field} too long (max {max})")));
    }
    Ok(v.to_string())
}

pub fn optional_text(field: &str, value: &str, max: usize) -> Result<String, ModelError> {
    let v = value.trim();
    if v.chars().count() > max {
        return Err(ModelError::Validation(format!("{field} too long (max {max})")));
    }
    Ok(v.to_string())
}

pub fn non_negative(field: &str, value: i64) -> Result<i64, ModelError> {
    if value < 0 {
        return Err(ModelError::Validation(format!("{field} must be >= 0")));
    }
    Ok(value)
}

pub fn positive(field: &str, value: i32) -> Result<i32, ModelError> {
    if value <= 0 {
        return Err(ModelError::Validation(format!("{field} must be > 0")));
    }
    Ok(value)
}

pub fn nutrient(field: &str, value: f64) -> Result<f64, ModelError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ModelError::Validation(format!("{field} must be a finite number >= 0")));
    }
    Ok(value)
}
