//! Rendering quotes and ranked offers for the terminal.
//!
//! Two shapes: a human-oriented text form with whole-dollar money, and a JSON
//! form carrying the raw numbers for scripting.
use clap::ValueEnum;
use serde::Serialize;
use strum_macros::{Display, EnumString};

use finance_common::money::money;
use finance_common::offers::Offer;
use finance_common::quote::Quote;
use finance_common::Result;

/// Output shape for the offers listing.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, Default, ValueEnum, Display, EnumString, Eq, PartialEq)]
#[clap(rename_all = "lower")]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// JSON view of a quote with its derived fields spelled out.
#[derive(Debug, Serialize)]
struct QuoteBreakdown<'a> {
    #[serde(flatten)]
    quote: &'a Quote,
    principal: f64,
    monthly: f64,
    monthly_display: String,
}

/// Multi-line text summary of a quote.
pub fn quote_text(quote: &Quote) -> String {
    format!(
        "Price:     {}\nDown:      {}\nPrincipal: {}\nAPR:       {}%\nTerm:      {} months\nMonthly:   {}",
        money(quote.price),
        money(quote.down),
        money(quote.principal()),
        quote.apr_pct,
        quote.term_months,
        money(quote.monthly()),
    )
}

/// JSON form of a quote, including principal and monthly payment.
pub fn quote_json(quote: &Quote) -> Result<String> {
    let breakdown = QuoteBreakdown {
        quote,
        principal: quote.principal(),
        monthly: quote.monthly(),
        monthly_display: money(quote.monthly()),
    };
    Ok(serde_json::to_string_pretty(&breakdown)?)
}

/// Aligned table of ranked offers, one row per listing.
pub fn offers_table(offers: &[Offer]) -> String {
    let title_width = offers
        .iter()
        .map(|o| o.listing.title.len())
        .chain(std::iter::once("TITLE".len()))
        .max()
        .unwrap_or(0);

    let mut out = format!(
        "{:>6}  {:<title_width$}  {:>10}  {:>10}  {:>8}",
        "ID", "TITLE", "PRICE", "PRINCIPAL", "MONTHLY"
    );
    for offer in offers {
        out.push('\n');
        out.push_str(&format!(
            "{:>6}  {:<title_width$}  {:>10}  {:>10}  {:>8}",
            offer.listing.id,
            offer.listing.title,
            money(offer.listing.price_or_zero()),
            money(offer.principal),
            money(offer.monthly),
        ));
    }
    out
}

/// JSON array of ranked offers.
pub fn offers_json(offers: &[Offer]) -> Result<String> {
    Ok(serde_json::to_string_pretty(offers)?)
}
