//! Normalized values and validation outcomes.
//!
//! A successful validation produces a [`Record`] of typed [`FieldValue`]s in
//! schema declaration order, plus a second record of computed values. A
//! failed validation produces the accumulated error list. Both travel as
//! plain data; the engine never panics or throws across its boundary.

use chrono::NaiveDate;
use serde_json::Value;

use super::errors::FieldError;

/// A normalized, typed field value.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// UTF-8 string (also carries email, url and enum values)
    Str(String),
    /// 64-bit signed integer
    Int(i64),
    /// 64-bit floating point
    Float(f64),
    /// Boolean
    Bool(bool),
    /// ISO-8601 calendar date
    Date(NaiveDate),
    /// Homogeneous list of strings
    StringList(Vec<String>),
    /// Nested validated record
    Record(Record),
    /// Explicit absence (an optional field defaulted to nothing)
    Null,
}

impl FieldValue {
    /// Returns the value's kind name for error messages
    pub fn kind_name(&self) -> &'static str {
        match self {
            FieldValue::Str(_) => "string",
            FieldValue::Int(_) => "int",
            FieldValue::Float(_) => "float",
            FieldValue::Bool(_) => "bool",
            FieldValue::Date(_) => "date",
            FieldValue::StringList(_) => "string list",
            FieldValue::Record(_) => "object",
            FieldValue::Null => "null",
        }
    }

    /// Numeric view: ints widen to floats
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Int(n) => Some(*n as f64),
            FieldValue::Float(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            FieldValue::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            FieldValue::Date(d) => Some(*d),
            _ => None,
        }
    }

    /// Converts the value to its JSON representation.
    ///
    /// Dates serialize as ISO-8601 strings; a non-finite float (only
    /// reachable through a computed field) degrades to null.
    pub fn to_json(&self) -> Value {
        match self {
            FieldValue::Str(s) => Value::String(s.clone()),
            FieldValue::Int(n) => Value::from(*n),
            FieldValue::Float(n) => serde_json::Number::from_f64(*n)
                .map(Value::Number)
                .unwrap_or(Value::Null),
            FieldValue::Bool(b) => Value::Bool(*b),
            FieldValue::Date(d) => Value::String(d.format("%Y-%m-%d").to_string()),
            FieldValue::StringList(items) => {
                Value::Array(items.iter().map(|s| Value::String(s.clone())).collect())
            }
            FieldValue::Record(record) => {
                let mut map = serde_json::Map::new();
                for (name, value) in record.iter() {
                    map.insert(name.clone(), value.to_json());
                }
                Value::Object(map)
            }
            FieldValue::Null => Value::Null,
        }
    }
}

/// An ordered mapping from canonical field names to normalized values.
///
/// Order follows schema declaration order, so serialization and display are
/// deterministic without consulting the schema twice.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record {
    entries: Vec<(String, FieldValue)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a value, replacing any existing entry with the same name.
    pub fn insert(&mut self, name: impl Into<String>, value: FieldValue) {
        let name = name.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(String, FieldValue)> {
        self.entries.iter()
    }

    // Typed accessors for rule and computed-field functions.

    pub fn as_f64(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(FieldValue::as_f64)
    }

    pub fn as_i64(&self, name: &str) -> Option<i64> {
        self.get(name).and_then(FieldValue::as_i64)
    }

    pub fn as_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(FieldValue::as_str)
    }

    pub fn as_bool(&self, name: &str) -> Option<bool> {
        self.get(name).and_then(FieldValue::as_bool)
    }

    pub fn as_date(&self, name: &str) -> Option<NaiveDate> {
        self.get(name).and_then(FieldValue::as_date)
    }
}

/// Read view handed to computed-field functions: the validated record plus
/// every previously computed value.
pub struct RecordView<'a> {
    record: &'a Record,
    computed: &'a Record,
}

impl<'a> RecordView<'a> {
    pub(crate) fn new(record: &'a Record, computed: &'a Record) -> Self {
        Self { record, computed }
    }

    /// Validated fields win over computed values on a name clash; the
    /// builder rejects such schemas, so in practice the sources are disjoint.
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.record.get(name).or_else(|| self.computed.get(name))
    }

    pub fn as_f64(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(FieldValue::as_f64)
    }

    pub fn as_i64(&self, name: &str) -> Option<i64> {
        self.get(name).and_then(FieldValue::as_i64)
    }

    pub fn as_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(FieldValue::as_str)
    }

    pub fn as_bool(&self, name: &str) -> Option<bool> {
        self.get(name).and_then(FieldValue::as_bool)
    }

    pub fn as_date(&self, name: &str) -> Option<NaiveDate> {
        self.get(name).and_then(FieldValue::as_date)
    }
}

/// A successful validation: the normalized record and the computed values.
#[derive(Debug, Clone, PartialEq)]
pub struct Validated {
    pub record: Record,
    pub computed: Record,
}

/// Outcome of validating one raw record against one schema.
#[derive(Debug, Clone)]
pub enum ValidationOutcome {
    /// Every check passed; carries normalized and computed values
    Success(Validated),
    /// At least one check failed; carries every accumulated error
    Failure(Vec<FieldError>),
}

impl ValidationOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ValidationOutcome::Success(_))
    }

    /// Returns the validated payload, if any
    pub fn success(&self) -> Option<&Validated> {
        match self {
            ValidationOutcome::Success(v) => Some(v),
            ValidationOutcome::Failure(_) => None,
        }
    }

    /// Returns the error list (empty on success)
    pub fn errors(&self) -> &[FieldError] {
        match self {
            ValidationOutcome::Success(_) => &[],
            ValidationOutcome::Failure(errors) => errors,
        }
    }
}
