//! Amortizing-loan payment math and the `Quote` value type.
//!
//! A `Quote` captures one calculator interaction: asking price, down payment,
//! annual percentage rate, and term length. It is transient: built fresh from
//! raw inputs on every recomputation, never cached or persisted. The payment
//! formula lives here as a free function so the offer-ranking code can reuse it
//! without building a full `Quote` per listing.

use serde::{Deserialize, Serialize};

/// Shortest term the calculator UI offers, in months.
pub const MIN_TERM_MONTHS: u32 = 12;
/// Longest term the calculator UI offers, in months.
pub const MAX_TERM_MONTHS: u32 = 84;

/// Default down payment when the field is left empty.
pub const DEFAULT_DOWN: f64 = 3000.0;
/// Default annual percentage rate when the field is left empty.
pub const DEFAULT_APR: f64 = 6.0;
/// Default term in months when the field is left empty or unparsable.
pub const DEFAULT_TERM_MONTHS: u32 = 60;

/// Fixed monthly payment of an amortizing loan.
///
/// `apr_pct` is an annual rate in percent; it is converted to a monthly
/// decimal rate `r = apr_pct / 1200`. At `r == 0` the formula degenerates, so
/// the zero-interest case is handled as straight division of the principal
/// over the term. `months` is floor-clamped to 1 to keep the result finite.
///
/// Negative or non-finite rates are treated as zero; the result is never
/// negative for a non-negative principal.
pub fn monthly_payment(principal: f64, apr_pct: f64, months: u32) -> f64 {
    let n = months.max(1) as f64;
    let apr = if apr_pct.is_finite() { apr_pct.max(0.0) } else { 0.0 };
    let r = apr / 1200.0;
    if r == 0.0 {
        return principal / n;
    }
    let f = (1.0 + r).powf(n);
    principal * (r * f) / (f - 1.0)
}

/// Shared loan terms applied across an inventory: everything a quote needs
/// except the price.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinanceTerms {
    /// Down payment in dollars.
    pub down: f64,
    /// Annual percentage rate.
    pub apr_pct: f64,
    /// Term length in months, within `[MIN_TERM_MONTHS, MAX_TERM_MONTHS]`.
    pub term_months: u32,
}

impl Default for FinanceTerms {
    fn default() -> Self {
        FinanceTerms {
            down: DEFAULT_DOWN,
            apr_pct: DEFAULT_APR,
            term_months: DEFAULT_TERM_MONTHS,
        }
    }
}

impl FinanceTerms {
    /// Build normalized terms from already-coerced numeric inputs.
    ///
    /// The term is rounded to whole months and clamped to the UI range;
    /// down payment and APR floor at zero.
    pub fn new(down: f64, apr_pct: f64, term: f64) -> Self {
        FinanceTerms {
            down: if down.is_finite() { down.max(0.0) } else { 0.0 },
            apr_pct: if apr_pct.is_finite() { apr_pct.max(0.0) } else { 0.0 },
            term_months: clamp_term(term),
        }
    }

    /// Combine these terms with a price into a full `Quote`.
    pub fn quote_for(&self, price: f64) -> Quote {
        Quote::new(price, self.down, self.apr_pct, self.term_months as f64)
    }
}

/// One finance-calculator interaction: price plus loan terms, with the
/// monthly payment derived on demand.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quote {
    /// Vehicle asking price in dollars.
    pub price: f64,
    /// Down payment in dollars, clamped to `[0, price]`.
    pub down: f64,
    /// Annual percentage rate.
    pub apr_pct: f64,
    /// Term length in months, clamped to `[MIN_TERM_MONTHS, MAX_TERM_MONTHS]`.
    pub term_months: u32,
}

impl Quote {
    /// Build a normalized quote from already-coerced numeric inputs.
    ///
    /// Price and APR floor at zero, the down payment is clamped to
    /// `[0, price]`, and the term is rounded to whole months and clamped to
    /// the UI range. A non-finite term falls back to the default 60 months.
    pub fn new(price: f64, down: f64, apr_pct: f64, term: f64) -> Self {
        let price = if price.is_finite() { price.max(0.0) } else { 0.0 };
        let down = if down.is_finite() { down.clamp(0.0, price) } else { 0.0 };
        Quote {
            price,
            down,
            apr_pct: if apr_pct.is_finite() { apr_pct.max(0.0) } else { 0.0 },
            term_months: clamp_term(term),
        }
    }

    /// Amount financed: price minus down payment, never negative.
    pub fn principal(&self) -> f64 {
        (self.price - self.down).max(0.0)
    }

    /// Fixed monthly payment for this quote.
    pub fn monthly(&self) -> f64 {
        monthly_payment(self.principal(), self.apr_pct, self.term_months)
    }
}

fn clamp_term(term: f64) -> u32 {
    if !term.is_finite() {
        return DEFAULT_TERM_MONTHS;
    }
    let rounded = term.round();
    if rounded <= MIN_TERM_MONTHS as f64 {
        MIN_TERM_MONTHS
    } else if rounded >= MAX_TERM_MONTHS as f64 {
        MAX_TERM_MONTHS
    } else {
        rounded as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::{money, to_number};

    #[test]
    fn zero_apr_is_straight_division() {
        assert_eq!(monthly_payment(20000.0, 0.0, 60), 20000.0 / 60.0);
        assert_eq!(monthly_payment(0.0, 0.0, 12), 0.0);
        assert_eq!(monthly_payment(9999.0, 0.0, 1), 9999.0);
    }

    #[test]
    fn zero_apr_scenario_displays_as_333() {
        let m = monthly_payment(20000.0, 0.0, 60);
        assert!((m - 333.3333).abs() < 0.001);
        assert_eq!(money(m), "$333");
    }

    #[test]
    fn six_percent_scenario_displays_as_387() {
        // r = 0.005, f = 1.005^60 ~= 1.34885, payment ~= 386.66
        let m = monthly_payment(20000.0, 6.0, 60);
        assert!((m - 386.66).abs() < 0.01, "got {m}");
        assert_eq!(money(m), "$387");
    }

    #[test]
    fn payment_is_never_negative() {
        for &(p, apr, n) in &[
            (0.0, 0.0, 1),
            (0.0, 9.9, 84),
            (15000.0, 0.0, 12),
            (15000.0, 22.5, 84),
            (1.0, 100.0, 1),
        ] {
            let m = monthly_payment(p, apr, n);
            assert!(m >= 0.0 && m.is_finite(), "payment {m} for ({p}, {apr}, {n})");
        }
    }

    #[test]
    fn payment_increases_with_apr() {
        let base = monthly_payment(20000.0, 0.0, 60);
        let low = monthly_payment(20000.0, 3.0, 60);
        let high = monthly_payment(20000.0, 6.0, 60);
        assert!(base < low);
        assert!(low < high);
    }

    #[test]
    fn single_month_term_is_finite() {
        let m = monthly_payment(20000.0, 6.0, 1);
        assert!(m.is_finite());
        // one payment covers the principal plus one month of interest
        assert!(m > 20000.0);
    }

    #[test]
    fn zero_month_term_is_clamped_to_one() {
        assert_eq!(monthly_payment(1200.0, 0.0, 0), 1200.0);
    }

    #[test]
    fn negative_and_non_finite_apr_degrade_to_zero_rate() {
        assert_eq!(monthly_payment(6000.0, -3.0, 60), 100.0);
        assert_eq!(monthly_payment(6000.0, f64::NAN, 60), 100.0);
    }

    #[test]
    fn malformed_fields_display_as_zero() {
        let price = to_number("abc", 0.0);
        let down = to_number("", 0.0);
        let quote = Quote::new(price, down, 6.0, 60.0);
        assert_eq!(money(quote.monthly()), "$0");
    }

    #[test]
    fn quote_clamps_down_payment_to_price() {
        let quote = Quote::new(10000.0, 12000.0, 6.0, 60.0);
        assert_eq!(quote.down, 10000.0);
        assert_eq!(quote.principal(), 0.0);
    }

    #[test]
    fn quote_clamps_term_into_ui_range() {
        assert_eq!(Quote::new(10000.0, 0.0, 0.0, 6.0).term_months, 12);
        assert_eq!(Quote::new(10000.0, 0.0, 0.0, 120.0).term_months, 84);
        assert_eq!(Quote::new(10000.0, 0.0, 0.0, 47.6).term_months, 48);
        assert_eq!(Quote::new(10000.0, 0.0, 0.0, f64::NAN).term_months, 60);
    }

    #[test]
    fn quote_floors_negative_price() {
        let quote = Quote::new(-500.0, 100.0, 6.0, 60.0);
        assert_eq!(quote.price, 0.0);
        assert_eq!(quote.monthly(), 0.0);
    }

    #[test]
    fn default_terms_match_detail_view() {
        let terms = FinanceTerms::default();
        assert_eq!(terms.down, 3000.0);
        assert_eq!(terms.apr_pct, 6.0);
        assert_eq!(terms.term_months, 60);
    }

    #[test]
    fn terms_quote_for_carries_price_through() {
        let terms = FinanceTerms::new(5000.0, 4.5, 72.0);
        let quote = terms.quote_for(25000.0);
        assert_eq!(quote.principal(), 20000.0);
        assert_eq!(quote.term_months, 72);
    }
}
