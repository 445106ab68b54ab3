//! Result type alias shared across the workspace.
//!
//! This module defines a convenient alias that defaults the error type to the
//! common `FinanceError`, so functions can simply return `Result<T>`.
use crate::error::FinanceError;

/// Workspace-wide `Result` alias with `FinanceError` as the default error.
pub type Result<T, E = FinanceError> = std::result::Result<T, E>;
