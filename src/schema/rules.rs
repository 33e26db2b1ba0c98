//! Whole-record rules and computed fields.
//!
//! Both are plain function values keyed by name — there is no trait
//! hierarchy to implement. Cross-field rules run only after every individual
//! field has passed; computed fields run only on fully valid records and may
//! read validated fields plus any computed field declared before them.

use std::fmt;
use std::sync::Arc;

use super::types::FieldKind;
use crate::validate::{FieldValue, Record, RecordView};

/// A check over a fully field-validated record.
///
/// Returning `Err` fails the whole record with the rule's message; rules run
/// in declaration order and the first failure wins.
#[derive(Clone)]
pub struct CrossFieldRule {
    pub name: String,
    check: Arc<dyn Fn(&Record) -> Result<(), String> + Send + Sync>,
}

impl CrossFieldRule {
    pub fn new<F>(name: impl Into<String>, check: F) -> Self
    where
        F: Fn(&Record) -> Result<(), String> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            check: Arc::new(check),
        }
    }

    /// Runs the rule against the assembled record
    pub fn check(&self, record: &Record) -> Result<(), String> {
        (self.check)(record)
    }
}

impl fmt::Debug for CrossFieldRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CrossFieldRule")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// An output-only field derived from already-validated values.
///
/// `inputs` declares which names the function reads; the builder verifies
/// every input refers to a field or an earlier computed field, so evaluation
/// order is always well defined.
#[derive(Clone)]
pub struct ComputedField {
    pub name: String,
    /// Declared output kind, surfaced by introspection
    pub kind: FieldKind,
    pub inputs: Vec<String>,
    compute: Arc<dyn Fn(&RecordView) -> FieldValue + Send + Sync>,
}

impl ComputedField {
    pub fn new<F>(
        name: impl Into<String>,
        kind: FieldKind,
        inputs: &[&str],
        compute: F,
    ) -> Self
    where
        F: Fn(&RecordView) -> FieldValue + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            kind,
            inputs: inputs.iter().map(|s| s.to_string()).collect(),
            compute: Arc::new(compute),
        }
    }

    /// Produces the derived value from the view of validated and previously
    /// computed values
    pub fn compute(&self, view: &RecordView) -> FieldValue {
        (self.compute)(view)
    }
}

impl fmt::Debug for ComputedField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComputedField")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("inputs", &self.inputs)
            .finish_non_exhaustive()
    }
}
