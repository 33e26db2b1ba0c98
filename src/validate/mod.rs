//! Validation subsystem.
//!
//! The engine takes an immutable [`SchemaSpec`](crate::schema::SchemaSpec)
//! and a raw `serde_json::Value` record and produces a
//! [`ValidationOutcome`]: a normalized typed record with computed values, or
//! the full accumulated error list. Serialization of validated records (with
//! or without wire aliases) also lives here.
//!
//! # Design Principles
//!
//! - Purely functional: no I/O, no shared mutable state, deterministic
//! - Exhaustive per record: every field's errors in one pass
//! - Errors are data; nothing is thrown across the public boundary
//! - Coercion rules are centralized, and `strict` turns them off per field

mod coerce;
mod engine;
mod errors;
mod format;
mod outcome;
mod serialize;

pub use engine::{validate, Validator};
pub use errors::{FieldError, FieldErrorCode, ROOT_PATH};
pub use outcome::{FieldValue, Record, RecordView, Validated, ValidationOutcome};
pub use serialize::serialize;
