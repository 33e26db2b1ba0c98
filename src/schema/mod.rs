//! Schema definition subsystem.
//!
//! Schemas are plain data: an ordered field list with kinds, wire aliases,
//! defaults, strictness and constraints, plus whole-record rules and
//! computed fields held as function values. A schema is built once through
//! [`SchemaBuilder`], checked exhaustively at that moment, and immutable
//! afterwards.
//!
//! # Design Principles
//!
//! - Schemas are declarative values, not type hierarchies
//! - Malformed definitions fail at construction, never at validation
//! - A built schema is immutable and safe to share across threads
//! - Introspection is a plain serializable dump

mod builder;
mod describe;
mod errors;
mod registry;
mod rules;
mod types;

pub use builder::SchemaBuilder;
pub use describe::{
    ComputedDescription, ConstraintDescription, FieldDescription, SchemaDescription,
};
pub use errors::{SchemaError, SchemaResult};
pub use registry::SchemaRegistry;
pub use rules::{ComputedField, CrossFieldRule};
pub use types::{Constraint, ConstraintKind, ExtraFieldsPolicy, FieldKind, FieldSpec, SchemaSpec};
