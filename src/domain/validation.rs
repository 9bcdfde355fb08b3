//! Field-level validation results.
//!
//! Validation rules are declared with `validator` derives on the domain and DTO
//! types; this module flattens the nested [`ValidationErrors`] tree into a plain
//! list that can be logged or returned to clients.

use serde::Serialize;
use validator::{ValidationError, ValidationErrors};

/// A single rule violated by a single field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub code: String,
    pub message: String,
}

/// Flattens `errors` into a list sorted by field name.
pub fn violations_from(errors: &ValidationErrors) -> Vec<FieldViolation> {
    let mut violations: Vec<FieldViolation> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |err| FieldViolation {
                field: field.to_string(),
                code: err.code.to_string(),
                message: err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("failed '{}' validation", err.code)),
            })
        })
        .collect();

    violations.sort_by(|a, b| a.field.cmp(&b.field).then(a.code.cmp(&b.code)));
    violations
}

/// Rejects empty and whitespace-only values.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("not_blank");
        err.message = Some("must not be blank".into());
        return Err(err);
    }
    Ok(())
}

/// Rejects values containing whitespace or control characters anywhere.
///
/// URL parsing strips tabs and newlines and trims surrounding spaces, so such
/// values would pass the `url` rule while being stored raw. Blank values are
/// left to [`not_blank`].
pub fn no_whitespace_or_control(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Ok(());
    }

    if value.chars().any(|c| c.is_whitespace() || c.is_control()) {
        let mut err = ValidationError::new("no_whitespace_or_control");
        err.message = Some("must not contain whitespace or control characters".into());
        return Err(err);
    }
    Ok(())
}
