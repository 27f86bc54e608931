//! Field-level validation error types.
//!
//! Each resource type exposes `validate(&self) -> Result<(), ValidationError>`.
//! A `ValidationError` lists every failing field so clients see all problems
//! in one response rather than one per round trip.

use core::fmt;

use serde::Serialize;

/// A single field constraint violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Path of the failing field (e.g. `price`, `items[2].quantity`).
    pub field: String,
    /// Human-readable description of the violated constraint.
    pub message: String,
}

impl FieldError {
    /// Create a new field error.
    #[must_use]
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// One or more field constraint violations for a request payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(transparent)]
#[error("validation failed: {}", join_fields(errors))]
pub struct ValidationError {
    /// The failing fields, in declaration order.
    pub errors: Vec<FieldError>,
}

impl ValidationError {
    /// Create a validation error from collected field errors.
    ///
    /// Returns `Ok(())` when `errors` is empty, so validators can collect
    /// violations unconditionally and finish with a single call.
    ///
    /// # Errors
    ///
    /// Returns `Self` wrapping `errors` when at least one is present.
    pub fn from_errors(errors: Vec<FieldError>) -> Result<(), Self> {
        if errors.is_empty() {
            Ok(())
        } else {
            Err(Self { errors })
        }
    }
}

/// Join field errors for the `Display` impl.
fn join_fields(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Collect a violation when `value` is negative.
pub(crate) fn check_non_negative(errors: &mut Vec<FieldError>, field: &str, value: f64) {
    if value < 0.0 {
        errors.push(FieldError::new(
            field,
            format!("must be greater than or equal to 0 (got {value})"),
        ));
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_from_errors_empty_is_ok() {
        assert!(ValidationError::from_errors(Vec::new()).is_ok());
    }

    #[test]
    fn test_from_errors_keeps_all_fields() {
        let err = ValidationError::from_errors(vec![
            FieldError::new("price", "must be greater than or equal to 0 (got -1)"),
            FieldError::new("quantity", "must be at least 1"),
        ])
        .unwrap_err();

        assert_eq!(err.errors.len(), 2);
        assert_eq!(err.errors[0].field, "price");
        assert_eq!(err.errors[1].field, "quantity");
    }

    #[test]
    fn test_display_joins_fields() {
        let err = ValidationError::from_errors(vec![
            FieldError::new("a", "bad"),
            FieldError::new("b", "worse"),
        ])
        .unwrap_err();

        assert_eq!(err.to_string(), "validation failed: a: bad; b: worse");
    }

    #[test]
    fn test_check_non_negative() {
        let mut errors = Vec::new();
        check_non_negative(&mut errors, "price", 0.0);
        check_non_negative(&mut errors, "price", 19.99);
        assert!(errors.is_empty());

        check_non_negative(&mut errors, "price", -0.01);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "price");
    }

    #[test]
    fn test_serializes_as_field_list() {
        let err = ValidationError::from_errors(vec![FieldError::new("price", "bad")]).unwrap_err();
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json[0]["field"], "price");
        assert_eq!(json[0]["message"], "bad");
    }
}
