//! veritype - a strict, introspectable record validation engine
//!
//! Declarative schemas over untyped JSON records: validation with optional
//! coercion, exhaustive field-level error reporting, cross-field rules,
//! computed fields, wire aliases, schema introspection and alias-aware
//! serialization.

pub mod cli;
pub mod schema;
pub mod showcase;
pub mod validate;
