//! In-memory schema registry.
//!
//! The calling application defines its schemas once at startup and registers
//! them here; a registered name is immutable for the life of the registry.

use std::collections::HashMap;

use super::errors::{SchemaError, SchemaResult};
use super::types::SchemaSpec;

/// Named registry of immutable schemas.
#[derive(Default)]
pub struct SchemaRegistry {
    schemas: HashMap<String, SchemaSpec>,
}

impl SchemaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a schema under its own name.
    ///
    /// Registering a name twice is an immutability violation.
    pub fn register(&mut self, schema: SchemaSpec) -> SchemaResult<()> {
        if self.schemas.contains_key(&schema.name) {
            return Err(SchemaError::SchemaImmutable(schema.name));
        }
        self.schemas.insert(schema.name.clone(), schema);
        Ok(())
    }

    /// Gets a schema by name.
    pub fn get(&self, name: &str) -> Option<&SchemaSpec> {
        self.schemas.get(name)
    }

    /// Checks whether a schema exists.
    pub fn exists(&self, name: &str) -> bool {
        self.schemas.contains_key(name)
    }

    /// Returns registered names, sorted for deterministic listings.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.schemas.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Returns the number of registered schemas.
    pub fn count(&self) -> usize {
        self.schemas.len()
    }
}
