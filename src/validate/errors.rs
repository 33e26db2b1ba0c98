//! Field-level validation errors.
//!
//! Validation never raises: every problem becomes a [`FieldError`] value
//! collected into the Failure outcome, so a caller sees all of a record's
//! problems in one pass. The taxonomy is closed — anything outside it is a
//! schema-definition error and is rejected before validation can run.

use std::fmt;

use serde_json::{json, Value};

/// Validation error taxonomy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldErrorCode {
    /// Required field absent and no default declared
    RequiredFieldMissing,
    /// Value could not be read (or coerced) as the declared kind
    TypeMismatch,
    /// String value failed an email/url shape check
    FormatInvalid,
    /// Coerced value failed a declared constraint (bound/length/pattern/enum)
    ConstraintViolated,
    /// Undeclared key under the forbid policy
    ExtraFieldForbidden,
    /// A whole-record rule rejected an otherwise valid record
    CrossFieldRuleFailed,
}

impl FieldErrorCode {
    /// Returns the stable string code
    pub fn code(&self) -> &'static str {
        match self {
            FieldErrorCode::RequiredFieldMissing => "REQUIRED_FIELD_MISSING",
            FieldErrorCode::TypeMismatch => "TYPE_MISMATCH",
            FieldErrorCode::FormatInvalid => "FORMAT_INVALID",
            FieldErrorCode::ConstraintViolated => "CONSTRAINT_VIOLATED",
            FieldErrorCode::ExtraFieldForbidden => "EXTRA_FIELD_FORBIDDEN",
            FieldErrorCode::CrossFieldRuleFailed => "CROSS_FIELD_RULE_FAILED",
        }
    }
}

impl fmt::Display for FieldErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Path used for whole-record (cross-field) errors
pub const ROOT_PATH: &str = "__root__";

/// One field-level validation failure.
#[derive(Debug, Clone)]
pub struct FieldError {
    /// Dotted field path; nested fields read `address.zip_code`, list
    /// elements `tags[1]`, whole-record errors `__root__`
    pub path: String,
    /// Taxonomy code
    pub code: FieldErrorCode,
    /// Human-readable message
    pub message: String,
    /// The raw value that failed, when one exists
    pub offending: Option<Value>,
}

impl FieldError {
    pub fn new(
        path: impl Into<String>,
        code: FieldErrorCode,
        message: impl Into<String>,
        offending: Option<Value>,
    ) -> Self {
        Self {
            path: path.into(),
            code,
            message: message.into(),
            offending,
        }
    }

    /// Required field absent with no default
    pub fn missing(path: impl Into<String>) -> Self {
        Self::new(
            path,
            FieldErrorCode::RequiredFieldMissing,
            "field required",
            None,
        )
    }

    /// Value cannot be read as the declared kind
    pub fn type_mismatch(path: impl Into<String>, expected: &str, actual: &Value) -> Self {
        Self::new(
            path,
            FieldErrorCode::TypeMismatch,
            format!(
                "type mismatch: expected {}, got {}",
                expected,
                super::coerce::json_type_name(actual)
            ),
            Some(actual.clone()),
        )
    }

    /// Email/url shape check failed
    pub fn format(path: impl Into<String>, message: impl Into<String>, actual: &Value) -> Self {
        Self::new(
            path,
            FieldErrorCode::FormatInvalid,
            message,
            Some(actual.clone()),
        )
    }

    /// Constraint check failed
    pub fn constraint(path: impl Into<String>, message: impl Into<String>, actual: &Value) -> Self {
        Self::new(
            path,
            FieldErrorCode::ConstraintViolated,
            message,
            Some(actual.clone()),
        )
    }

    /// Undeclared key under the forbid policy
    pub fn extra_field(key: &str, value: &Value) -> Self {
        Self::new(
            key,
            FieldErrorCode::ExtraFieldForbidden,
            format!("extra field '{}' is not permitted", key),
            Some(value.clone()),
        )
    }

    /// Whole-record rule failure
    pub fn cross_field(message: impl Into<String>) -> Self {
        Self::new(ROOT_PATH, FieldErrorCode::CrossFieldRuleFailed, message, None)
    }

    /// Returns a copy with the path prefixed, used when flattening nested
    /// failures into the parent error list.
    pub fn prefixed(mut self, prefix: &str) -> Self {
        self.path = format!("{}.{}", prefix, self.path);
        self
    }

    /// JSON form for rendering at the boundary
    pub fn to_json(&self) -> Value {
        json!({
            "path": self.path,
            "code": self.code.code(),
            "message": self.message,
            "offending": self.offending.clone().unwrap_or(Value::Null),
        })
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.code, self.path, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_stable() {
        assert_eq!(
            FieldErrorCode::RequiredFieldMissing.code(),
            "REQUIRED_FIELD_MISSING"
        );
        assert_eq!(FieldErrorCode::TypeMismatch.code(), "TYPE_MISMATCH");
        assert_eq!(FieldErrorCode::FormatInvalid.code(), "FORMAT_INVALID");
        assert_eq!(
            FieldErrorCode::ConstraintViolated.code(),
            "CONSTRAINT_VIOLATED"
        );
        assert_eq!(
            FieldErrorCode::ExtraFieldForbidden.code(),
            "EXTRA_FIELD_FORBIDDEN"
        );
        assert_eq!(
            FieldErrorCode::CrossFieldRuleFailed.code(),
            "CROSS_FIELD_RULE_FAILED"
        );
    }

    #[test]
    fn test_type_mismatch_names_both_sides() {
        let err = FieldError::type_mismatch("age", "int", &json!("abc"));
        assert!(err.message.contains("int"));
        assert!(err.message.contains("string"));
        assert_eq!(err.offending, Some(json!("abc")));
    }

    #[test]
    fn test_prefixed_builds_dotted_path() {
        let err = FieldError::missing("zip_code").prefixed("address");
        assert_eq!(err.path, "address.zip_code");
    }

    #[test]
    fn test_cross_field_uses_root_path() {
        let err = FieldError::cross_field("end date cannot be before start date");
        assert_eq!(err.path, ROOT_PATH);
        assert!(err.offending.is_none());
    }

    #[test]
    fn test_display_includes_code_and_path() {
        let err = FieldError::missing("name");
        let display = err.to_string();
        assert!(display.contains("REQUIRED_FIELD_MISSING"));
        assert!(display.contains("name"));
    }
}
