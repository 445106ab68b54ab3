//! Command-line arguments for the finance CLI.
//!
//! This module defines the CLI interface using `clap`. Money, rate, and term
//! flags are taken as raw strings on purpose: they are coerced with the same
//! lenient rules as the web calculator's form fields, so `--price '$25,000'`
//! works and garbage degrades to a safe default instead of a parse error.
use clap::{Parser, Subcommand};

use finance_common::offers::SortKey;

use crate::render::OutputFormat;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compute the monthly payment for a single vehicle.
    Quote {
        /// Vehicle asking price, e.g. `25000` or `$25,000`.
        #[clap(long)]
        price: String,

        /// Down payment in dollars (default 3000).
        #[clap(long)]
        down: Option<String>,

        /// Annual percentage rate (default 6).
        #[clap(long)]
        apr: Option<String>,

        /// Term in months, clamped to 12-84 (default 60).
        #[clap(long)]
        term: Option<String>,

        /// Print the quote as JSON instead of a text summary.
        #[clap(long)]
        json: bool,
    },

    /// Rank an inventory file by monthly payment under shared loan terms.
    Offers {
        /// Path to a JSON Lines inventory file (one listing per line).
        #[clap(long)]
        path: String,

        /// Drop listings priced above this cap (unpriced listings too).
        #[clap(long)]
        max_price: Option<String>,

        /// Down payment applied to every listing (default 0).
        #[clap(long)]
        down: Option<String>,

        /// Annual percentage rate (default 0).
        #[clap(long)]
        apr: Option<String>,

        /// Term in months, clamped to 12-84 (default 60).
        #[clap(long)]
        term: Option<String>,

        /// Column to sort by, ascending.
        #[clap(long, value_enum, default_value_t = SortKey::Monthly)]
        sort: SortKey,

        /// Output format.
        #[clap(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Print the offers-page redirect URL for the given inputs.
    Url {
        /// Vehicle asking price.
        #[clap(long)]
        price: String,

        /// Down payment in dollars (default 0).
        #[clap(long)]
        down: Option<String>,

        /// Annual percentage rate (default 0).
        #[clap(long)]
        apr: Option<String>,

        /// Term in months (default 60).
        #[clap(long)]
        term: Option<String>,
    },
}
