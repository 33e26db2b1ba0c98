//! Schema construction.
//!
//! Every malformed-schema condition is rejected here, at definition time —
//! duplicate names, a required field with a default, a constraint on a kind
//! it cannot check, a computed field reading a name that does not exist yet.
//! Validation therefore only ever sees well-formed schemas and its own error
//! taxonomy stays closed.

use std::collections::HashSet;

use super::errors::{SchemaError, SchemaResult};
use super::rules::{ComputedField, CrossFieldRule};
use super::types::{ExtraFieldsPolicy, FieldSpec, SchemaSpec};
use crate::validate::Record;

/// Builder for [`SchemaSpec`]; obtained through [`SchemaSpec::builder`].
pub struct SchemaBuilder {
    name: String,
    fields: Vec<FieldSpec>,
    rules: Vec<CrossFieldRule>,
    computed: Vec<ComputedField>,
    extra_fields_policy: ExtraFieldsPolicy,
}

impl SchemaBuilder {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
            rules: Vec::new(),
            computed: Vec::new(),
            extra_fields_policy: ExtraFieldsPolicy::Ignore,
        }
    }

    /// Appends a field; declaration order is validation and output order
    pub fn field(mut self, field: FieldSpec) -> Self {
        self.fields.push(field);
        self
    }

    /// Appends a cross-field rule; rules run in declaration order
    pub fn rule<F>(mut self, name: impl Into<String>, check: F) -> Self
    where
        F: Fn(&Record) -> Result<(), String> + Send + Sync + 'static,
    {
        self.rules.push(CrossFieldRule::new(name, check));
        self
    }

    /// Appends a computed field; computed fields evaluate in declaration order
    pub fn computed(mut self, computed: ComputedField) -> Self {
        self.computed.push(computed);
        self
    }

    /// Rejects records carrying undeclared keys instead of dropping them
    pub fn forbid_extra_fields(mut self) -> Self {
        self.extra_fields_policy = ExtraFieldsPolicy::Forbid;
        self
    }

    /// Validates the whole definition and produces the immutable schema.
    pub fn build(self) -> SchemaResult<SchemaSpec> {
        if self.name.is_empty() {
            return Err(SchemaError::EmptySchemaName);
        }

        let mut names = HashSet::new();
        let mut wires = HashSet::new();
        for field in &self.fields {
            if field.name.is_empty() {
                return Err(SchemaError::EmptyFieldName {
                    schema: self.name.clone(),
                });
            }
            if !names.insert(field.name.clone()) {
                return Err(SchemaError::DuplicateField {
                    schema: self.name.clone(),
                    field: field.name.clone(),
                });
            }
            if !wires.insert(field.wire_name.clone()) {
                return Err(SchemaError::DuplicateWireName {
                    schema: self.name.clone(),
                    wire: field.wire_name.clone(),
                });
            }

            self.check_field(field)?;
        }

        // Computed fields: unique names disjoint from fields, inputs must
        // reference fields or earlier computed fields. Rejecting forward and
        // self references makes cyclic definitions unrepresentable.
        let mut known: HashSet<&str> = self.fields.iter().map(|f| f.name.as_str()).collect();
        for computed in &self.computed {
            if known.contains(computed.name.as_str()) {
                return Err(SchemaError::ComputedNameCollision {
                    name: computed.name.clone(),
                });
            }
            for input in &computed.inputs {
                if !known.contains(input.as_str()) {
                    return Err(SchemaError::UnknownComputedInput {
                        computed: computed.name.clone(),
                        input: input.clone(),
                    });
                }
            }
            known.insert(computed.name.as_str());
        }

        Ok(SchemaSpec {
            name: self.name,
            fields: self.fields,
            rules: self.rules,
            computed: self.computed,
            extra_fields_policy: self.extra_fields_policy,
        })
    }

    /// Per-field definition checks
    fn check_field(&self, field: &FieldSpec) -> SchemaResult<()> {
        if field.required && field.default.is_some() {
            return Err(SchemaError::RequiredWithDefault {
                field: field.name.clone(),
            });
        }

        if let Some(default) = &field.default {
            if !field.kind.accepts(default) {
                return Err(SchemaError::DefaultKindMismatch {
                    field: field.name.clone(),
                    kind: field.kind.type_name().to_string(),
                });
            }
        }

        if let super::types::FieldKind::Enum(variants) = &field.kind {
            if variants.is_empty() {
                return Err(SchemaError::EmptyEnum {
                    field: field.name.clone(),
                });
            }
        }

        for constraint in &field.constraints {
            if !constraint.kind.applies_to(&field.kind) {
                return Err(SchemaError::ConstraintNotApplicable {
                    field: field.name.clone(),
                    kind: field.kind.type_name().to_string(),
                    constraint: constraint.kind.rule(),
                });
            }
        }

        Ok(())
    }
}
