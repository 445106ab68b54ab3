//! Finance CLI — the automart finance calculator on the command line. It
//! computes amortized monthly payments for a single vehicle, ranks a whole
//! inventory file by monthly payment under shared loan terms, and prints the
//! offers-page redirect URL the web calculator navigates to.
//!
//! Usage examples:
//! ```bash
//! finance_cli quote --price 25000 --down 5000 --apr 4.5 --term 72
//! finance_cli offers --path ./inventory.jsonl --down 3000 --apr 6
//! finance_cli url --price 25000 --down 5000 --apr 4.5 --term 72
//! ```
//!
//! The inventory file is JSON Lines, one listing object per line. See
//! `finance_common::listings` for details.
#![warn(missing_docs)]
mod args;
mod render;

use crate::args::{Args, Command};
use crate::render::OutputFormat;
use clap::Parser;
use log::info;
use finance_common::listings::{Listing, ListingParser};
use finance_common::money::{money, to_number};
use finance_common::offers::{offers_url, rank_offers};
use finance_common::quote::{FinanceTerms, DEFAULT_APR, DEFAULT_DOWN, DEFAULT_TERM_MONTHS};
use finance_common::FinanceError;
use finance_common::Result;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

fn main() -> Result<(), FinanceError> {
    init_logger();
    let args = Args::parse();

    match args.command {
        Command::Quote {
            price,
            down,
            apr,
            term,
            json,
        } => {
            let quote = FinanceTerms::new(
                coerce_money(down.as_deref(), DEFAULT_DOWN),
                coerce_money(apr.as_deref(), DEFAULT_APR),
                coerce_term(term.as_deref()),
            )
            .quote_for(to_number(&price, 0.0));

            info!(
                "Quoting {} down {} at {}% over {} months",
                money(quote.price),
                money(quote.down),
                quote.apr_pct,
                quote.term_months
            );
            if json {
                println!("{}", render::quote_json(&quote)?);
            } else {
                println!("{}", render::quote_text(&quote));
            }
        }

        Command::Offers {
            path,
            max_price,
            down,
            apr,
            term,
            sort,
            format,
        } => {
            let file_path = normalize_path(&path);
            if !is_file_exist(&file_path) {
                return Err(FinanceError::Format(format!(
                    "Inventory file not found: {}",
                    file_path.display()
                )));
            }

            let file = File::open(&file_path)?;
            let listings = Listing::parse_from_file(BufReader::new(file))?;
            info!(
                "Loaded {} listings from {}",
                listings.len(),
                file_path.display()
            );

            let terms = FinanceTerms::new(
                coerce_money(down.as_deref(), 0.0),
                coerce_money(apr.as_deref(), 0.0),
                coerce_term(term.as_deref()),
            );
            // a cap with no usable number in it means no cap at all
            let cap = max_price.as_deref().and_then(|raw| {
                let n = to_number(raw, f64::NAN);
                n.is_finite().then_some(n)
            });

            let offers = rank_offers(&listings, &terms, cap, sort);
            info!("Ranked {} offers by {}", offers.len(), sort);

            match format {
                OutputFormat::Table => println!("{}", render::offers_table(&offers)),
                OutputFormat::Json => println!("{}", render::offers_json(&offers)?),
            }
        }

        Command::Url {
            price,
            down,
            apr,
            term,
        } => {
            println!(
                "{}",
                offers_url(
                    to_number(&price, 0.0),
                    coerce_money(down.as_deref(), 0.0),
                    coerce_money(apr.as_deref(), 0.0),
                    coerce_term(term.as_deref()),
                )
            );
        }
    }

    Ok(())
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}

/// Coerce an optional money or rate flag: an omitted flag takes `missing`,
/// while provided text with no usable number in it degrades to zero.
fn coerce_money(raw: Option<&str>, missing: f64) -> f64 {
    match raw {
        Some(text) => to_number(text, 0.0),
        None => missing,
    }
}

/// Coerce an optional term flag; both an omitted flag and unusable text fall
/// back to the default 60 months.
fn coerce_term(raw: Option<&str>) -> f64 {
    match raw {
        Some(text) => to_number(text, DEFAULT_TERM_MONTHS as f64),
        None => DEFAULT_TERM_MONTHS as f64,
    }
}

/// Normalize a CLI-provided path string by trimming whitespace and matching
/// quotes.
///
/// This allows passing Windows paths in quotes without breaking parsing.
fn normalize_path(raw: &str) -> PathBuf {
    let trimmed = raw.trim();
    let no_quotes = trimmed
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(trimmed);
    PathBuf::from(no_quotes)
}

/// Returns `true` if the provided path exists and is a regular file.
fn is_file_exist(path: &PathBuf) -> bool {
    path.exists() && path.is_file()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn omitted_money_flag_takes_the_default() {
        assert_eq!(coerce_money(None, DEFAULT_DOWN), 3000.0);
        assert_eq!(coerce_money(None, 0.0), 0.0);
    }

    #[test]
    fn malformed_money_flag_degrades_to_zero_not_the_default() {
        assert_eq!(coerce_money(Some("abc"), DEFAULT_DOWN), 0.0);
        assert_eq!(coerce_money(Some(""), DEFAULT_APR), 0.0);
    }

    #[test]
    fn usable_money_flag_is_coerced_like_a_form_field() {
        assert_eq!(coerce_money(Some("$5,000"), DEFAULT_DOWN), 5000.0);
    }

    #[test]
    fn term_flag_falls_back_to_sixty_either_way() {
        assert_eq!(coerce_term(None), 60.0);
        assert_eq!(coerce_term(Some("abc")), 60.0);
        assert_eq!(coerce_term(Some("72")), 72.0);
    }

    #[test]
    fn quoted_paths_are_normalized() {
        assert_eq!(
            normalize_path("  \"./inventory.jsonl\"  "),
            PathBuf::from("./inventory.jsonl")
        );
        assert_eq!(normalize_path("plain.jsonl"), PathBuf::from("plain.jsonl"));
    }
}
