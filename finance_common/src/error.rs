//! Error types shared across the workspace.
//!
//! The `FinanceError` enum unifies common failure cases for I/O, serialization,
//! and inventory parsing, allowing crates to propagate a single error type.
use std::io;

use thiserror::Error;

/// Unified error type shared by the library and the CLI.
#[derive(Error, Debug)]
pub enum FinanceError {
    /// I/O error originating from the standard library or files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Generic formatting/validation error with a human-readable message.
    #[error("Format error: {0}")]
    Format(String),

    /// Failure while encoding/decoding JSON via serde_json.
    #[error("JSON serialization/deserialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    /// Error while parsing an inventory file into `Listing` values.
    #[error("Parse listings file error: {0}")]
    ParseListingsFile(String),
}
