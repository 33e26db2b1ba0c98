//! Schema type definitions.
//!
//! Supported field kinds:
//! - string: UTF-8 string
//! - int: 64-bit signed integer
//! - float: 64-bit floating point
//! - bool: Boolean
//! - date: ISO-8601 calendar date
//! - email / url: strings with a shape check
//! - enum: string restricted to a declared variant set
//! - string list: homogeneous list of strings
//! - object: nested record with its own schema
//!
//! A schema is plain data built once through [`SchemaBuilder`] and immutable
//! afterwards; the engine never mutates it, so one instance can back
//! concurrent validations.

use regex::Regex;

use super::builder::SchemaBuilder;
use super::errors::{SchemaError, SchemaResult};
use super::rules::{ComputedField, CrossFieldRule};
use crate::validate::FieldValue;

/// Supported field kinds
#[derive(Debug, Clone)]
pub enum FieldKind {
    /// UTF-8 string
    Str,
    /// 64-bit signed integer
    Int,
    /// 64-bit floating point
    Float,
    /// Boolean
    Bool,
    /// ISO-8601 calendar date
    Date,
    /// String with an email shape check
    Email,
    /// String with a url shape check
    Url,
    /// String restricted to the declared variants
    Enum(Vec<String>),
    /// Homogeneous list of strings
    StringList,
    /// Nested record validated against its own schema
    Object(Box<SchemaSpec>),
}

impl FieldKind {
    /// Returns the kind name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldKind::Str => "string",
            FieldKind::Int => "int",
            FieldKind::Float => "float",
            FieldKind::Bool => "bool",
            FieldKind::Date => "date",
            FieldKind::Email => "email",
            FieldKind::Url => "url",
            FieldKind::Enum(_) => "enum",
            FieldKind::StringList => "string list",
            FieldKind::Object(_) => "object",
        }
    }

    /// Whether a normalized value already has this kind.
    ///
    /// Used to sanity-check declared defaults at build time; `Null` is
    /// always acceptable as a default (the optional-with-no-value case).
    pub(crate) fn accepts(&self, value: &FieldValue) -> bool {
        if matches!(value, FieldValue::Null) {
            return true;
        }
        match self {
            FieldKind::Str | FieldKind::Email | FieldKind::Url | FieldKind::Enum(_) => {
                matches!(value, FieldValue::Str(_))
            }
            FieldKind::Int => matches!(value, FieldValue::Int(_)),
            // ints widen, so an integer default on a float field is fine
            FieldKind::Float => matches!(value, FieldValue::Float(_) | FieldValue::Int(_)),
            FieldKind::Bool => matches!(value, FieldValue::Bool(_)),
            FieldKind::Date => matches!(value, FieldValue::Date(_)),
            FieldKind::StringList => matches!(value, FieldValue::StringList(_)),
            FieldKind::Object(_) => matches!(value, FieldValue::Record(_)),
        }
    }
}

/// Formats a bound without a trailing `.0` for whole numbers
fn fmt_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

/// The predicate half of a constraint
#[derive(Debug, Clone)]
pub enum ConstraintKind {
    /// Numeric value must be strictly greater
    Gt(f64),
    /// Numeric value must be greater or equal
    Ge(f64),
    /// Numeric value must be strictly less
    Lt(f64),
    /// Numeric value must be less or equal
    Le(f64),
    /// String length (or list size) lower bound
    MinLength(usize),
    /// String length (or list size) upper bound
    MaxLength(usize),
    /// String must match the compiled pattern
    Pattern(Regex),
}

impl ConstraintKind {
    /// Short rule text for introspection output
    pub fn rule(&self) -> String {
        match self {
            ConstraintKind::Gt(n) => format!("> {}", fmt_number(*n)),
            ConstraintKind::Ge(n) => format!(">= {}", fmt_number(*n)),
            ConstraintKind::Lt(n) => format!("< {}", fmt_number(*n)),
            ConstraintKind::Le(n) => format!("<= {}", fmt_number(*n)),
            ConstraintKind::MinLength(n) => format!("min_length {}", n),
            ConstraintKind::MaxLength(n) => format!("max_length {}", n),
            ConstraintKind::Pattern(re) => format!("pattern {}", re.as_str()),
        }
    }

    /// Default failure message
    pub fn default_message(&self) -> String {
        match self {
            ConstraintKind::Gt(n) => format!("must be greater than {}", fmt_number(*n)),
            ConstraintKind::Ge(n) => {
                format!("must be greater than or equal to {}", fmt_number(*n))
            }
            ConstraintKind::Lt(n) => format!("must be less than {}", fmt_number(*n)),
            ConstraintKind::Le(n) => format!("must be less than or equal to {}", fmt_number(*n)),
            ConstraintKind::MinLength(n) => format!("must have at least {} characters", n),
            ConstraintKind::MaxLength(n) => format!("must have at most {} characters", n),
            ConstraintKind::Pattern(re) => format!("must match pattern '{}'", re.as_str()),
        }
    }

    /// Whether this constraint can check values of the given kind
    pub(crate) fn applies_to(&self, kind: &FieldKind) -> bool {
        match self {
            ConstraintKind::Gt(_)
            | ConstraintKind::Ge(_)
            | ConstraintKind::Lt(_)
            | ConstraintKind::Le(_) => matches!(kind, FieldKind::Int | FieldKind::Float),
            ConstraintKind::MinLength(_) | ConstraintKind::MaxLength(_) => matches!(
                kind,
                FieldKind::Str | FieldKind::Email | FieldKind::Url | FieldKind::StringList
            ),
            ConstraintKind::Pattern(_) => {
                matches!(kind, FieldKind::Str | FieldKind::Email | FieldKind::Url)
            }
        }
    }
}

/// A predicate plus its failure message, checked against the coerced value.
#[derive(Debug, Clone)]
pub struct Constraint {
    pub kind: ConstraintKind,
    message: Option<String>,
}

impl Constraint {
    fn from_kind(kind: ConstraintKind) -> Self {
        Self {
            kind,
            message: None,
        }
    }

    pub fn gt(bound: f64) -> Self {
        Self::from_kind(ConstraintKind::Gt(bound))
    }

    pub fn ge(bound: f64) -> Self {
        Self::from_kind(ConstraintKind::Ge(bound))
    }

    pub fn lt(bound: f64) -> Self {
        Self::from_kind(ConstraintKind::Lt(bound))
    }

    pub fn le(bound: f64) -> Self {
        Self::from_kind(ConstraintKind::Le(bound))
    }

    pub fn min_length(len: usize) -> Self {
        Self::from_kind(ConstraintKind::MinLength(len))
    }

    pub fn max_length(len: usize) -> Self {
        Self::from_kind(ConstraintKind::MaxLength(len))
    }

    /// Compiles the pattern now so a bad regex is a definition-time error.
    pub fn pattern(pattern: &str) -> SchemaResult<Self> {
        let compiled = Regex::new(pattern).map_err(|e| SchemaError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self::from_kind(ConstraintKind::Pattern(compiled)))
    }

    /// Replaces the default failure message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// The failure message this constraint reports
    pub fn message(&self) -> String {
        self.message
            .clone()
            .unwrap_or_else(|| self.kind.default_message())
    }

    /// Checks the coerced value; `Err` carries the failure message.
    pub fn check(&self, value: &FieldValue) -> Result<(), String> {
        let ok = match &self.kind {
            ConstraintKind::Gt(bound) => value.as_f64().is_some_and(|n| n > *bound),
            ConstraintKind::Ge(bound) => value.as_f64().is_some_and(|n| n >= *bound),
            ConstraintKind::Lt(bound) => value.as_f64().is_some_and(|n| n < *bound),
            ConstraintKind::Le(bound) => value.as_f64().is_some_and(|n| n <= *bound),
            ConstraintKind::MinLength(len) => measured_length(value).is_some_and(|n| n >= *len),
            ConstraintKind::MaxLength(len) => measured_length(value).is_some_and(|n| n <= *len),
            ConstraintKind::Pattern(re) => {
                value.as_str().is_some_and(|s| re.is_match(s))
            }
        };
        if ok {
            Ok(())
        } else {
            Err(self.message())
        }
    }
}

/// Character count for strings, element count for lists
fn measured_length(value: &FieldValue) -> Option<usize> {
    match value {
        FieldValue::Str(s) => Some(s.chars().count()),
        FieldValue::StringList(items) => Some(items.len()),
        _ => None,
    }
}

/// What to do with raw keys no field declares
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExtraFieldsPolicy {
    /// Drop undeclared keys silently
    #[default]
    Ignore,
    /// Reject the record, naming every undeclared key
    Forbid,
}

impl ExtraFieldsPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExtraFieldsPolicy::Ignore => "ignore",
            ExtraFieldsPolicy::Forbid => "forbid",
        }
    }
}

/// One schema field: canonical name, wire alias, kind, presence rules,
/// strictness and ordered constraints. Built once, immutable afterwards.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub name: String,
    /// External name used for input and aliased output; defaults to `name`
    pub wire_name: String,
    pub kind: FieldKind,
    pub required: bool,
    /// Used verbatim when the field is absent; never re-validated
    pub default: Option<FieldValue>,
    /// Disables coercion: only values already of the native kind pass
    pub strict: bool,
    pub constraints: Vec<Constraint>,
}

impl FieldSpec {
    /// Create a required field
    pub fn required(name: impl Into<String>, kind: FieldKind) -> Self {
        let name = name.into();
        Self {
            wire_name: name.clone(),
            name,
            kind,
            required: true,
            default: None,
            strict: false,
            constraints: Vec::new(),
        }
    }

    /// Create an optional field
    pub fn optional(name: impl Into<String>, kind: FieldKind) -> Self {
        let mut spec = Self::required(name, kind);
        spec.required = false;
        spec
    }

    /// Sets the wire alias used for input and aliased output
    pub fn wire_name(mut self, wire: impl Into<String>) -> Self {
        self.wire_name = wire.into();
        self
    }

    /// Disables coercion for this field
    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }

    /// Declares a default; only valid on optional fields (checked at build)
    pub fn default_value(mut self, value: FieldValue) -> Self {
        self.default = Some(value);
        self
    }

    /// Appends a constraint; constraints run in declaration order
    pub fn constraint(mut self, constraint: Constraint) -> Self {
        self.constraints.push(constraint);
        self
    }
}

/// A named, ordered collection of fields plus whole-record rules, computed
/// fields and the extra-fields policy.
#[derive(Clone)]
pub struct SchemaSpec {
    pub name: String,
    pub fields: Vec<FieldSpec>,
    pub rules: Vec<CrossFieldRule>,
    pub computed: Vec<ComputedField>,
    pub extra_fields_policy: ExtraFieldsPolicy,
}

impl SchemaSpec {
    /// Starts a builder for a schema with the given name
    pub fn builder(name: impl Into<String>) -> SchemaBuilder {
        SchemaBuilder::new(name)
    }

    /// Looks up a field by canonical name
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Looks up a field by wire name
    pub fn field_by_wire(&self, wire: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.wire_name == wire)
    }
}

impl std::fmt::Debug for SchemaSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SchemaSpec")
            .field("name", &self.name)
            .field("fields", &self.fields)
            .field("rules", &self.rules)
            .field("computed", &self.computed)
            .field("extra_fields_policy", &self.extra_fields_policy)
            .finish()
    }
}
