//!
//! Common finance types and utilities shared by the automart tooling.
//!
//! This crate aggregates:
//! - `error` — unified error type `FinanceError` used across the workspace.
//! - `result` — handy `Result<T, FinanceError>` alias.
//! - `money` — lenient numeric coercion and whole-dollar currency display.
//! - `quote` — the amortizing-loan payment formula and the `Quote` value type.
//! - `listings` — car listing records and parsing helpers for inventory files.
//! - `offers` — offer ranking over an inventory and the offers redirect URL.
#![warn(missing_docs)]
pub mod error;
pub mod result;
pub mod money;
pub mod quote;
pub mod listings;
pub mod offers;

pub use error::FinanceError;
pub use result::Result;
pub use quote::Quote;
