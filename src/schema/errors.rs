//! # Schema Errors
//!
//! Error types for schema definition and registration.
//!
//! Every variant here is a programmer/configuration error: a schema that
//! trips one of these never becomes a `SchemaSpec`, so validation only ever
//! runs against well-formed schemas.

use thiserror::Error;

/// Result type for schema definition and registry operations
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Schema definition and registry errors
#[derive(Debug, Clone, Error)]
pub enum SchemaError {
    // ==================
    // Structural Errors
    // ==================

    /// Schema name must be non-empty
    #[error("schema name cannot be empty")]
    EmptySchemaName,

    /// Field name must be non-empty
    #[error("schema '{schema}' declares a field with an empty name")]
    EmptyFieldName { schema: String },

    /// Two fields share a canonical name
    #[error("schema '{schema}' declares field '{field}' more than once")]
    DuplicateField { schema: String, field: String },

    /// Two fields share a wire name
    #[error("schema '{schema}' declares wire name '{wire}' more than once")]
    DuplicateWireName { schema: String, wire: String },

    // ==================
    // Field Definition Errors
    // ==================

    /// A required field cannot also carry a default
    #[error("field '{field}' is required and cannot carry a default")]
    RequiredWithDefault { field: String },

    /// Default value does not match the declared kind
    #[error("default for field '{field}' is not a {kind} value")]
    DefaultKindMismatch { field: String, kind: String },

    /// Constraint attached to a kind it cannot check
    #[error("constraint '{constraint}' does not apply to {kind} field '{field}'")]
    ConstraintNotApplicable {
        field: String,
        kind: String,
        constraint: String,
    },

    /// Pattern constraint failed to compile
    #[error("invalid pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    /// Enum field with no variants can never validate
    #[error("enum field '{field}' must declare at least one variant")]
    EmptyEnum { field: String },

    // ==================
    // Rule & Computed Field Errors
    // ==================

    /// Computed field references a name that is not a field and not an
    /// earlier computed field (forward and self references are rejected,
    /// which keeps cycles unrepresentable)
    #[error("computed field '{computed}' references unknown input '{input}'")]
    UnknownComputedInput { computed: String, input: String },

    /// Computed field name collides with a field or earlier computed field
    #[error("computed field '{name}' collides with an existing field name")]
    ComputedNameCollision { name: String },

    // ==================
    // Registry Errors
    // ==================

    /// Registered schemas are immutable; a name cannot be reused
    #[error("schema '{0}' is already registered")]
    SchemaImmutable(String),

    /// Lookup of a name nobody registered
    #[error("schema '{0}' not found")]
    SchemaNotFound(String),
}
