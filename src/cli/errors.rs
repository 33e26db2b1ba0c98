//! CLI-specific error types.
//!
//! These cover the driver boundary only — a record failing validation is
//! reported as structured output first and surfaces here just to set the
//! exit code.

use std::fmt;

/// CLI error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliErrorCode {
    /// The record argument is not valid JSON
    BadRecord,
    /// Named schema is not in the catalog
    UnknownSchema,
    /// The record failed validation
    ValidationFailed,
    /// The built-in catalog failed to build (a definition bug)
    CatalogError,
    /// Output serialization failed
    IoError,
}

impl CliErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::BadRecord => "VT_CLI_BAD_RECORD",
            Self::UnknownSchema => "VT_CLI_UNKNOWN_SCHEMA",
            Self::ValidationFailed => "VT_CLI_VALIDATION_FAILED",
            Self::CatalogError => "VT_CLI_CATALOG_ERROR",
            Self::IoError => "VT_CLI_IO_ERROR",
        }
    }
}

/// CLI error
#[derive(Debug)]
pub struct CliError {
    code: CliErrorCode,
    message: String,
}

impl CliError {
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn bad_record(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::BadRecord, msg)
    }

    pub fn unknown_schema(name: &str) -> Self {
        Self::new(
            CliErrorCode::UnknownSchema,
            format!("schema '{}' not found; run 'veritype list'", name),
        )
    }

    pub fn validation_failed(error_count: usize) -> Self {
        Self::new(
            CliErrorCode::ValidationFailed,
            format!("record failed validation with {} error(s)", error_count),
        )
    }

    pub fn catalog_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::CatalogError, msg)
    }

    /// Get the error code
    pub fn code(&self) -> CliErrorCode {
        self.code
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for CliError {}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::new(CliErrorCode::IoError, format!("JSON error: {}", e))
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;
