//! Car listing records and inventory-file parsing.
//!
//! Inventory files are JSON Lines: one listing object per line, blank lines
//! skipped. The `ListingParser` trait mirrors how the offers command loads an
//! inventory from disk, but any `BufRead` works so tests can feed byte slices.

use std::io::BufRead;

use serde::{Deserialize, Serialize};

use crate::error::FinanceError;

/// One car in the inventory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Listing {
    /// Listing identifier.
    pub id: u64,
    /// Display title, e.g. `2021 Honda Civic EX`.
    pub title: String,
    /// Asking price in dollars; absent when the seller has not set one.
    #[serde(default)]
    pub price: Option<f64>,
}

impl Listing {
    /// Asking price with a missing price treated as zero.
    pub fn price_or_zero(&self) -> f64 {
        self.price.unwrap_or(0.0)
    }
}

/// Trait providing file parsing for listings.
pub trait ListingParser {
    /// Parses listings from a buffered reader.
    ///
    /// Each non-empty line is parsed as a single JSON `Listing` object.
    /// Returns an error if any line cannot be parsed.
    fn parse_from_file<R: BufRead>(reader: R) -> Result<Vec<Listing>, FinanceError>;
}

impl ListingParser for Listing {
    fn parse_from_file<R: BufRead>(reader: R) -> Result<Vec<Self>, FinanceError> {
        let mut listings = Vec::new();

        for line_result in reader.lines() {
            let line = line_result.map_err(FinanceError::Io)?;
            let trimmed_line = line.trim();
            if trimmed_line.is_empty() {
                continue;
            }

            match serde_json::from_str::<Self>(trimmed_line) {
                Ok(listing) => listings.push(listing),
                Err(e) => return Err(FinanceError::ParseListingsFile(e.to_string())),
            }
        }
        Ok(listings)
    }
}
