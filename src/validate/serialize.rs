//! Alias-aware serialization of validated records.
//!
//! Output keys are either canonical field names or the declared wire
//! aliases; fields emit in schema declaration order and computed values are
//! always included. Computed fields carry no aliases, so their names are the
//! same in both modes.

use serde_json::Value;

use crate::schema::{FieldKind, SchemaSpec};

use super::outcome::{FieldValue, Record, Validated};

/// Serializes a validated record.
///
/// With `use_wire_names` the output round-trips through `validate` for any
/// schema that tolerates its own computed field names on input.
pub fn serialize(validated: &Validated, schema: &SchemaSpec, use_wire_names: bool) -> Value {
    let mut value = record_to_json(&validated.record, schema, use_wire_names);
    if let Value::Object(map) = &mut value {
        for (name, field_value) in validated.computed.iter() {
            map.insert(name.clone(), field_value.to_json());
        }
    }
    value
}

impl Validated {
    /// Convenience wrapper around [`serialize`].
    pub fn to_json(&self, schema: &SchemaSpec, use_wire_names: bool) -> Value {
        serialize(self, schema, use_wire_names)
    }
}

/// Serializes one record using the schema's field order and aliases.
///
/// Nested records recurse with the nested schema so deep aliases hold; a
/// nested schema's computed values were merged into its record during
/// validation and emit here by name.
fn record_to_json(record: &Record, schema: &SchemaSpec, use_wire_names: bool) -> Value {
    let mut map = serde_json::Map::new();

    for field in &schema.fields {
        let value = match record.get(&field.name) {
            Some(value) => value,
            None => continue, // optional field with no default stays absent
        };
        let key = if use_wire_names {
            field.wire_name.clone()
        } else {
            field.name.clone()
        };
        let json = match (&field.kind, value) {
            (FieldKind::Object(nested), FieldValue::Record(nested_record)) => {
                record_to_json(nested_record, nested, use_wire_names)
            }
            _ => value.to_json(),
        };
        map.insert(key, json);
    }

    for computed in &schema.computed {
        if let Some(value) = record.get(&computed.name) {
            map.insert(computed.name.clone(), value.to_json());
        }
    }

    Value::Object(map)
}
