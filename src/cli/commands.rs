//! CLI command implementations.
//!
//! The driver is the stand-in presentation layer: it builds the showcase
//! registry, invokes the engine, and renders descriptions and outcomes as
//! pretty JSON. All rendering lives here; the engine only returns data.

use serde_json::{json, Value};

use crate::schema::SchemaRegistry;
use crate::showcase;
use crate::validate::{serialize, validate, ValidationOutcome};

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    let mut registry = SchemaRegistry::new();
    showcase::register_all(&mut registry)
        .map_err(|e| CliError::catalog_error(e.to_string()))?;

    match cmd {
        Command::List => list(&registry),
        Command::Describe { schema } => describe(&registry, &schema),
        Command::Validate {
            schema,
            record,
            wire,
        } => validate_record(&registry, &schema, &record, wire),
    }
}

/// Print the registered schema names
fn list(registry: &SchemaRegistry) -> CliResult<()> {
    write_json(&json!({ "schemas": registry.names() }))
}

/// Print a schema's structural description
fn describe(registry: &SchemaRegistry, name: &str) -> CliResult<()> {
    let schema = registry
        .get(name)
        .ok_or_else(|| CliError::unknown_schema(name))?;
    write_json(&serde_json::to_value(schema.describe())?)
}

/// Validate a record and print the outcome; invalid records exit non-zero
fn validate_record(
    registry: &SchemaRegistry,
    name: &str,
    record: &str,
    wire: bool,
) -> CliResult<()> {
    let schema = registry
        .get(name)
        .ok_or_else(|| CliError::unknown_schema(name))?;
    let raw: Value = serde_json::from_str(record)
        .map_err(|e| CliError::bad_record(format!("record is not valid JSON: {}", e)))?;

    match validate(schema, &raw) {
        ValidationOutcome::Success(validated) => write_json(&json!({
            "valid": true,
            "record": serialize(&validated, schema, wire),
        })),
        ValidationOutcome::Failure(errors) => {
            write_json(&json!({
                "valid": false,
                "errors": errors.iter().map(|e| e.to_json()).collect::<Vec<_>>(),
            }))?;
            Err(CliError::validation_failed(errors.len()))
        }
    }
}

/// Pretty-print a JSON value to stdout
fn write_json(value: &Value) -> CliResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
