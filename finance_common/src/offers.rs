//! Offer ranking over an inventory and the offers redirect URL.
//!
//! The marketplace's offers page accepts the calculator inputs as query
//! parameters; `offers_url` reproduces that query string exactly. The ranking
//! half applies one set of loan terms across a whole inventory and sorts the
//! results, lowest monthly payment first, the way the offers page lists them.

use chrono::Utc;
use clap::ValueEnum;
use serde::Serialize;
use strum_macros::{Display, EnumString};

use crate::listings::Listing;
use crate::money::plain_number;
use crate::quote::{monthly_payment, FinanceTerms, DEFAULT_TERM_MONTHS};

/// Path of the offers page the calculator redirects to.
pub const OFFERS_PATH: &str = "/finance/offers/";

/// Build the offers-page redirect URL from the four calculator inputs.
///
/// `price` and `down` are rounded to whole dollars, `term` is rounded to
/// whole months with 60 standing in for a missing value, and `apr` is passed
/// through as given. The parameter order is fixed: price, down, apr, term.
pub fn offers_url(price: f64, down: f64, apr_pct: f64, term: f64) -> String {
    let price = if price.is_finite() { price.round() as i64 } else { 0 };
    let down = if down.is_finite() { down.round() as i64 } else { 0 };
    let term = if term.is_finite() && term != 0.0 {
        term.round() as i64
    } else {
        DEFAULT_TERM_MONTHS as i64
    };
    format!(
        "{}?price={}&down={}&apr={}&term={}",
        OFFERS_PATH,
        price,
        down,
        plain_number(apr_pct),
        term
    )
}

/// Column the ranked offers are ordered by, ascending.
#[allow(missing_docs)]
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    ValueEnum,
    Display,
    EnumString,
    Hash,
    Eq,
    PartialEq,
)]
#[clap(rename_all = "lower")]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum SortKey {
    #[default]
    Monthly,
    Price,
    Principal,
}

/// One listing priced under a shared set of loan terms.
#[derive(Debug, Clone, Serialize)]
pub struct Offer {
    /// The listing being offered.
    pub listing: Listing,
    /// Amount financed after the down payment.
    pub principal: f64,
    /// Fixed monthly payment.
    pub monthly: f64,
    /// UTC timestamp in milliseconds when this offer was computed.
    pub quoted_at: u64,
}

/// Price every listing under `terms` and sort ascending by `sort`.
///
/// When `max_price` is given, listings without a price or above the cap are
/// dropped first. Ties keep their input order.
pub fn rank_offers(
    listings: &[Listing],
    terms: &FinanceTerms,
    max_price: Option<f64>,
    sort: SortKey,
) -> Vec<Offer> {
    let quoted_at = Utc::now().timestamp_millis() as u64;

    let mut offers: Vec<Offer> = listings
        .iter()
        .filter(|listing| match max_price {
            Some(cap) => listing.price.is_some_and(|p| p <= cap),
            None => true,
        })
        .map(|listing| {
            let principal = (listing.price_or_zero() - terms.down).max(0.0);
            let monthly = monthly_payment(principal, terms.apr_pct, terms.term_months);
            Offer {
                listing: listing.clone(),
                principal,
                monthly,
                quoted_at,
            }
        })
        .collect();

    offers.sort_by(|a, b| {
        let key = |o: &Offer| match sort {
            SortKey::Monthly => o.monthly,
            SortKey::Price => o.listing.price_or_zero(),
            SortKey::Principal => o.principal,
        };
        key(a).total_cmp(&key(b))
    });
    offers
}
