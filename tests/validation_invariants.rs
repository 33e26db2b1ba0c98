//! Validation Invariant Tests
//!
//! Engine-level guarantees, independent of any particular schema catalog:
//! - Validation is deterministic and purely functional
//! - Required fields without defaults always report as missing
//! - Strict fields never coerce
//! - Extra-field rejection short-circuits all other checks
//! - Errors accumulate across fields in declaration order
//! - Defaults are used verbatim, never re-validated

use serde_json::json;
use veritype::schema::{Constraint, FieldKind, FieldSpec, SchemaSpec};
use veritype::validate::{serialize, validate, FieldErrorCode, FieldValue};

// =============================================================================
// Helper Functions
// =============================================================================

fn span_schema() -> SchemaSpec {
    SchemaSpec::builder("Span")
        .field(FieldSpec::required("label", FieldKind::Str))
        .field(FieldSpec::required("start_date", FieldKind::Date))
        .field(FieldSpec::required("end_date", FieldKind::Date))
        .rule("dates ordered", |record| {
            match (record.as_date("start_date"), record.as_date("end_date")) {
                (Some(start), Some(end)) if end < start => {
                    Err("end date cannot be before start date".into())
                }
                _ => Ok(()),
            }
        })
        .build()
        .unwrap()
}

// =============================================================================
// Determinism Tests
// =============================================================================

/// Same document validates the same way every time.
#[test]
fn test_validation_is_deterministic() {
    let schema = span_schema();
    let doc = json!({
        "label": "conference",
        "start_date": "2026-08-01",
        "end_date": "2026-08-03"
    });

    for _ in 0..100 {
        let outcome = validate(&schema, &doc);
        assert!(outcome.is_success());
    }
}

/// Invalid document fails consistently with identical error lists.
#[test]
fn test_invalid_document_fails_consistently() {
    let schema = span_schema();
    let doc = json!({
        "start_date": "2026-08-01",
        "end_date": "not a date"
    });

    let first: Vec<String> = validate(&schema, &doc)
        .errors()
        .iter()
        .map(|e| e.to_string())
        .collect();

    for _ in 0..100 {
        let again: Vec<String> = validate(&schema, &doc)
            .errors()
            .iter()
            .map(|e| e.to_string())
            .collect();
        assert_eq!(first, again);
    }
}

// =============================================================================
// Required Field Tests
// =============================================================================

/// Every omitted required field reports missing, regardless of the rest.
#[test]
fn test_missing_required_fields_all_reported() {
    let schema = span_schema();
    let outcome = validate(&schema, &json!({ "end_date": "2026-08-03" }));

    let errors = outcome.errors();
    assert_eq!(errors.len(), 2);
    assert!(errors
        .iter()
        .all(|e| e.code == FieldErrorCode::RequiredFieldMissing));
    // declaration order
    assert_eq!(errors[0].path, "label");
    assert_eq!(errors[1].path, "start_date");
}

/// An empty string counts as present for a required string field.
#[test]
fn test_empty_string_is_present_not_absent() {
    let schema = span_schema();
    let outcome = validate(
        &schema,
        &json!({"label": "", "start_date": "2026-08-01", "end_date": "2026-08-02"}),
    );
    assert!(outcome.is_success());
}

// =============================================================================
// Strict Typing Tests
// =============================================================================

/// Strict numeric fields reject numeric-looking strings but accept natives.
#[test]
fn test_strict_int_rejects_numeric_string() {
    let schema = SchemaSpec::builder("Strict")
        .field(FieldSpec::required("id", FieldKind::Int).strict())
        .build()
        .unwrap();

    let outcome = validate(&schema, &json!({"id": "123"}));
    let errors = outcome.errors();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].code, FieldErrorCode::TypeMismatch);

    assert!(validate(&schema, &json!({"id": 123})).is_success());
}

/// The same field without strict coerces the same string.
#[test]
fn test_lenient_int_coerces_numeric_string() {
    let schema = SchemaSpec::builder("Lenient")
        .field(FieldSpec::required("id", FieldKind::Int))
        .build()
        .unwrap();

    let outcome = validate(&schema, &json!({"id": "123"}));
    let validated = outcome.success().expect("should coerce");
    assert_eq!(validated.record.as_i64("id"), Some(123));
}

// =============================================================================
// Extra Field Tests
// =============================================================================

/// Forbid policy reports each undeclared key and runs nothing else.
#[test]
fn test_forbid_reports_every_extra_key_and_nothing_else() {
    let schema = SchemaSpec::builder("Closed")
        .field(FieldSpec::required("expected", FieldKind::Str))
        .forbid_extra_fields()
        .build()
        .unwrap();

    // "expected" is also missing but must not be reported
    let outcome = validate(&schema, &json!({"alpha": 1, "beta": 2}));
    let errors = outcome.errors();
    assert_eq!(errors.len(), 2);
    assert!(errors
        .iter()
        .all(|e| e.code == FieldErrorCode::ExtraFieldForbidden));
}

/// Ignore policy drops undeclared keys silently.
#[test]
fn test_ignore_policy_drops_undeclared_keys() {
    let schema = SchemaSpec::builder("Open")
        .field(FieldSpec::required("expected", FieldKind::Str))
        .build()
        .unwrap();

    let outcome = validate(&schema, &json!({"expected": "yes", "stray": true}));
    let validated = outcome.success().expect("extras ignored");
    assert_eq!(validated.record.len(), 1);
}

// =============================================================================
// Accumulation & Ordering Tests
// =============================================================================

/// One pass reports a missing field, a type mismatch and a constraint
/// violation together, in declaration order.
#[test]
fn test_errors_accumulate_in_declaration_order() {
    let schema = SchemaSpec::builder("Mixed")
        .field(FieldSpec::required("a", FieldKind::Str))
        .field(FieldSpec::required("b", FieldKind::Int))
        .field(FieldSpec::required("c", FieldKind::Int).constraint(Constraint::ge(0.0)))
        .build()
        .unwrap();

    let outcome = validate(&schema, &json!({"b": "oops", "c": -1}));
    let errors = outcome.errors();
    assert_eq!(errors.len(), 3);
    assert_eq!(errors[0].path, "a");
    assert_eq!(errors[0].code, FieldErrorCode::RequiredFieldMissing);
    assert_eq!(errors[1].path, "b");
    assert_eq!(errors[1].code, FieldErrorCode::TypeMismatch);
    assert_eq!(errors[2].path, "c");
    assert_eq!(errors[2].code, FieldErrorCode::ConstraintViolated);
}

/// A constraint-failing field does not suppress its own later constraints.
#[test]
fn test_constraints_never_short_circuit() {
    let schema = SchemaSpec::builder("Narrow")
        .field(
            FieldSpec::required("code", FieldKind::Str)
                .constraint(Constraint::min_length(5))
                .constraint(Constraint::pattern(r"^\d+$").unwrap()),
        )
        .build()
        .unwrap();

    let outcome = validate(&schema, &json!({"code": "ab"}));
    assert_eq!(outcome.errors().len(), 2);
}

// =============================================================================
// Default Handling Tests
// =============================================================================

/// Defaults apply verbatim and are not re-checked against constraints.
#[test]
fn test_default_is_not_revalidated() {
    // default -1 violates ge(0); absence must still validate
    let schema = SchemaSpec::builder("Defaulted")
        .field(
            FieldSpec::optional("count", FieldKind::Int)
                .default_value(FieldValue::Int(-1))
                .constraint(Constraint::ge(0.0)),
        )
        .build()
        .unwrap();

    let outcome = validate(&schema, &json!({}));
    let validated = outcome.success().expect("default applies verbatim");
    assert_eq!(validated.record.as_i64("count"), Some(-1));

    // a supplied value still hits the constraint
    let outcome = validate(&schema, &json!({"count": -1}));
    assert_eq!(
        outcome.errors()[0].code,
        FieldErrorCode::ConstraintViolated
    );
}

/// Explicit null input falls back to the default like an absent key.
#[test]
fn test_null_input_takes_default() {
    let schema = SchemaSpec::builder("Defaulted")
        .field(FieldSpec::optional("count", FieldKind::Int).default_value(FieldValue::Int(7)))
        .build()
        .unwrap();

    let outcome = validate(&schema, &json!({"count": null}));
    let validated = outcome.success().expect("null is absent");
    assert_eq!(validated.record.as_i64("count"), Some(7));
}

// =============================================================================
// Serialization Round-Trip Tests
// =============================================================================

/// Wire-name serialization feeds back through validate unchanged.
#[test]
fn test_wire_round_trip_preserves_normalized_values() {
    let schema = SchemaSpec::builder("Aliased")
        .field(FieldSpec::required("first_name", FieldKind::Str).wire_name("firstName"))
        .field(FieldSpec::required("signup_date", FieldKind::Date).wire_name("signupDate"))
        .field(FieldSpec::optional("score", FieldKind::Float).default_value(FieldValue::Int(0)))
        .build()
        .unwrap();

    let outcome = validate(
        &schema,
        &json!({"firstName": "Ada", "signupDate": "2026-01-15", "score": 9.5}),
    );
    let validated = outcome.success().expect("should validate").clone();

    let wire = serialize(&validated, &schema, true);
    assert_eq!(wire["firstName"], "Ada");

    let again = validate(&schema, &wire);
    let revalidated = again.success().expect("round-trip should validate");
    assert_eq!(revalidated.record, validated.record);
}
