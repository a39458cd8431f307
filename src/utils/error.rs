//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.
//!
//! Aggregation itself has no error path; everything here belongs to the
//! boundaries around it.

use thiserror::Error;

/// Errors that can occur while fetching stamps from a supplier
#[derive(Error, Debug)]
pub enum SupplyError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Invalid supplier response: {0}")]
    InvalidResponse(String),

    #[error("Failed to read stamp file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse stamps: {0}")]
    Parse(#[from] ParseError),
}

/// Errors that can occur during stamp parsing
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("JSON deserialization failed: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid stamp document: {0}")]
    InvalidFormat(String),
}

/// Errors that can occur while loading a stamp catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid catalog TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Stamp kind '{0}' is listed more than once")]
    DuplicateKind(String),
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}

/// Invariant violations found in a stamp report
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ReportError {
    #[error("Group '{kind}' reports count {count} but holds {actual} stamps")]
    CountMismatch {
        kind: String,
        count: usize,
        actual: usize,
    },

    #[error("Group '{0}' is empty")]
    EmptyGroup(String),

    #[error("Kind '{0}' appears in more than one group")]
    DuplicateKind(String),

    #[error("Stamp '{id}' is filed under '{group}' but has kind '{kind}'")]
    MisfiledStamp {
        id: String,
        group: String,
        kind: String,
    },

    #[error("Stamp '{0}' appears more than once")]
    DuplicateStamp(String),

    #[error("Report total is {expected} but groups hold {actual} stamps")]
    TotalMismatch { expected: usize, actual: usize },

    #[error("Report lists {expected} distinct reactors but groups hold {actual}")]
    ReactorMismatch { expected: usize, actual: usize },
}
