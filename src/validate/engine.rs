//! The validation engine.
//!
//! `validate` is a pure function over an immutable schema and a raw JSON
//! record: no I/O, no shared state, deterministic output. Per-field checks
//! short-circuit within the field but accumulate across fields, so a caller
//! sees every problem in one pass. Two checks deliberately break that rule,
//! as specified: undeclared keys under the forbid policy fail the record
//! before any field runs, and cross-field rules stop at their first failure.

use serde_json::Value;

use crate::schema::{
    ExtraFieldsPolicy, FieldKind, FieldSpec, SchemaError, SchemaRegistry, SchemaResult, SchemaSpec,
};

use super::coerce::coerce_scalar;
use super::errors::FieldError;
use super::format::{is_valid_email, is_valid_url};
use super::outcome::{FieldValue, Record, RecordView, Validated, ValidationOutcome};

/// Validates a raw record against a schema.
///
/// Order of work:
/// 1. the raw value must be an object
/// 2. forbid-policy check over undeclared keys (aborts before field checks)
/// 3. per-field resolution in declaration order, accumulating errors
/// 4. cross-field rules, only on a fully clean record, first failure wins
/// 5. computed fields, only when nothing failed
pub fn validate(schema: &SchemaSpec, raw: &Value) -> ValidationOutcome {
    let obj = match raw.as_object() {
        Some(obj) => obj,
        None => {
            return ValidationOutcome::Failure(vec![FieldError::type_mismatch(
                "$root", "object", raw,
            )])
        }
    };

    if schema.extra_fields_policy == ExtraFieldsPolicy::Forbid {
        let extras: Vec<FieldError> = obj
            .iter()
            .filter(|(key, _)| schema.field_by_wire(key).is_none())
            .map(|(key, value)| FieldError::extra_field(key, value))
            .collect();
        if !extras.is_empty() {
            return ValidationOutcome::Failure(extras);
        }
    }

    let mut errors = Vec::new();
    let mut record = Record::new();

    for field in &schema.fields {
        // raw null is absent: defaults apply, required fields report missing
        match obj.get(&field.wire_name).filter(|v| !v.is_null()) {
            None => {
                if let Some(default) = &field.default {
                    // defaults are used verbatim, never re-validated
                    record.insert(field.name.clone(), default.clone());
                } else if field.required {
                    errors.push(FieldError::missing(&field.name));
                }
            }
            Some(value) => {
                if let Some(normalized) = resolve_field(field, value, &field.name, &mut errors) {
                    record.insert(field.name.clone(), normalized);
                }
            }
        }
    }

    if !errors.is_empty() {
        return ValidationOutcome::Failure(errors);
    }

    for rule in &schema.rules {
        if let Err(message) = rule.check(&record) {
            return ValidationOutcome::Failure(vec![FieldError::cross_field(message)]);
        }
    }

    let mut computed = Record::new();
    for field in &schema.computed {
        let value = field.compute(&RecordView::new(&record, &computed));
        computed.insert(field.name.clone(), value);
    }

    ValidationOutcome::Success(Validated { record, computed })
}

/// Resolves one present field to its normalized value.
///
/// Returns `None` when the value cannot enter the record; every failure is
/// pushed onto `errors`. A value whose coercion succeeded is returned even
/// when constraints failed, so the record stays as assembled as possible.
fn resolve_field(
    field: &FieldSpec,
    raw: &Value,
    path: &str,
    errors: &mut Vec<FieldError>,
) -> Option<FieldValue> {
    match &field.kind {
        FieldKind::Object(nested) => resolve_object(nested, raw, path, errors),
        FieldKind::StringList => resolve_string_list(raw, path, errors),
        _ => resolve_scalar(field, raw, path, errors),
    }
}

fn resolve_object(
    nested: &SchemaSpec,
    raw: &Value,
    path: &str,
    errors: &mut Vec<FieldError>,
) -> Option<FieldValue> {
    if !raw.is_object() {
        errors.push(FieldError::type_mismatch(path, "object", raw));
        return None;
    }
    match validate(nested, raw) {
        ValidationOutcome::Success(validated) => {
            // nested computed values merge into the nested record so
            // serialization walks one structure
            let mut record = validated.record;
            for (name, value) in validated.computed.iter() {
                record.insert(name.clone(), value.clone());
            }
            Some(FieldValue::Record(record))
        }
        ValidationOutcome::Failure(nested_errors) => {
            errors.extend(nested_errors.into_iter().map(|e| e.prefixed(path)));
            None
        }
    }
}

fn resolve_string_list(
    raw: &Value,
    path: &str,
    errors: &mut Vec<FieldError>,
) -> Option<FieldValue> {
    let items = match raw.as_array() {
        Some(items) => items,
        None => {
            errors.push(FieldError::type_mismatch(path, "string list", raw));
            return None;
        }
    };

    let mut normalized = Vec::with_capacity(items.len());
    let mut clean = true;
    for (index, item) in items.iter().enumerate() {
        match item.as_str() {
            Some(s) => normalized.push(s.to_string()),
            None => {
                errors.push(FieldError::type_mismatch(
                    &format!("{}[{}]", path, index),
                    "string",
                    item,
                ));
                clean = false;
            }
        }
    }
    clean.then_some(FieldValue::StringList(normalized))
}

fn resolve_scalar(
    field: &FieldSpec,
    raw: &Value,
    path: &str,
    errors: &mut Vec<FieldError>,
) -> Option<FieldValue> {
    let coerced = match coerce_scalar(&field.kind, raw, field.strict) {
        Some(value) => value,
        None => {
            errors.push(FieldError::type_mismatch(
                path,
                field.kind.type_name(),
                raw,
            ));
            return None;
        }
    };

    match &field.kind {
        FieldKind::Email => {
            if !coerced.as_str().is_some_and(is_valid_email) {
                errors.push(FieldError::format(
                    path,
                    "value is not a valid email address",
                    raw,
                ));
                return None;
            }
        }
        FieldKind::Url => {
            if !coerced.as_str().is_some_and(is_valid_url) {
                errors.push(FieldError::format(path, "value is not a valid url", raw));
                return None;
            }
        }
        FieldKind::Enum(variants) => {
            let member = coerced
                .as_str()
                .is_some_and(|s| variants.iter().any(|v| v == s));
            if !member {
                errors.push(FieldError::constraint(
                    path,
                    format!("value is not one of: {}", variants.join(", ")),
                    raw,
                ));
                return None;
            }
        }
        _ => {}
    }

    // constraints all run, in declaration order, with no short-circuit
    for constraint in &field.constraints {
        if let Err(message) = constraint.check(&coerced) {
            errors.push(FieldError::constraint(path, message, raw));
        }
    }

    Some(coerced)
}

/// Engine bound to a registry, for callers that look schemas up by name.
pub struct Validator<'a> {
    registry: &'a SchemaRegistry,
}

impl<'a> Validator<'a> {
    pub fn new(registry: &'a SchemaRegistry) -> Self {
        Self { registry }
    }

    /// Validates a raw record against the named schema.
    ///
    /// An unknown name is a caller error, distinct from a record failing
    /// validation.
    pub fn validate(&self, schema_name: &str, raw: &Value) -> SchemaResult<ValidationOutcome> {
        let schema = self
            .registry
            .get(schema_name)
            .ok_or_else(|| SchemaError::SchemaNotFound(schema_name.to_string()))?;
        Ok(validate(schema, raw))
    }
}
