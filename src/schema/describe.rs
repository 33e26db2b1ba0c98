//! Schema introspection.
//!
//! [`SchemaSpec::describe`] dumps a schema as plain serializable data —
//! enough for a caller to render a form, documentation or a debug view
//! without reaching into engine internals. Nested object fields embed their
//! own description recursively.

use serde::Serialize;
use serde_json::Value;

use super::types::{FieldKind, SchemaSpec};

/// Serializable description of a whole schema
#[derive(Debug, Clone, Serialize)]
pub struct SchemaDescription {
    pub name: String,
    pub extra_fields_policy: &'static str,
    pub fields: Vec<FieldDescription>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub rules: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub computed: Vec<ComputedDescription>,
}

/// Serializable description of one field
#[derive(Debug, Clone, Serialize)]
pub struct FieldDescription {
    pub name: String,
    pub wire_name: String,
    pub kind: &'static str,
    pub required: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub strict: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub constraints: Vec<ConstraintDescription>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nested: Option<Box<SchemaDescription>>,
}

/// Serializable description of one constraint
#[derive(Debug, Clone, Serialize)]
pub struct ConstraintDescription {
    pub rule: String,
    pub message: String,
}

/// Serializable description of one computed field
#[derive(Debug, Clone, Serialize)]
pub struct ComputedDescription {
    pub name: String,
    pub kind: &'static str,
    pub inputs: Vec<String>,
}

impl SchemaSpec {
    /// Produces the structural description of this schema.
    pub fn describe(&self) -> SchemaDescription {
        SchemaDescription {
            name: self.name.clone(),
            extra_fields_policy: self.extra_fields_policy.as_str(),
            fields: self
                .fields
                .iter()
                .map(|field| {
                    let (allowed, nested) = match &field.kind {
                        FieldKind::Enum(variants) => (Some(variants.clone()), None),
                        FieldKind::Object(schema) => {
                            (None, Some(Box::new(schema.describe())))
                        }
                        _ => (None, None),
                    };
                    FieldDescription {
                        name: field.name.clone(),
                        wire_name: field.wire_name.clone(),
                        kind: field.kind.type_name(),
                        required: field.required,
                        strict: field.strict,
                        default: field.default.as_ref().map(|d| d.to_json()),
                        allowed,
                        constraints: field
                            .constraints
                            .iter()
                            .map(|c| ConstraintDescription {
                                rule: c.kind.rule(),
                                message: c.message(),
                            })
                            .collect(),
                        nested,
                    }
                })
                .collect(),
            rules: self.rules.iter().map(|r| r.name.clone()).collect(),
            computed: self
                .computed
                .iter()
                .map(|c| ComputedDescription {
                    name: c.name.clone(),
                    kind: c.kind.type_name(),
                    inputs: c.inputs.clone(),
                })
                .collect(),
        }
    }
}
