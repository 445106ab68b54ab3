//! Lenient numeric coercion and whole-dollar currency display.
//!
//! User-typed amounts arrive as raw text that may carry commas, dollar signs,
//! spaces, or trailing garbage. Parsing here never fails: anything unusable
//! collapses to a caller-supplied fallback. Display rounds to whole dollars
//! and clamps negative or non-finite values to `$0`.

/// Coerce a raw text field into an `f64`, falling back on unusable input.
///
/// Commas, dollar signs, and spaces are stripped first, then the longest
/// numeric prefix of what remains is parsed. A non-finite result (or no
/// numeric prefix at all) yields `fallback`.
pub fn to_number(raw: &str, fallback: f64) -> f64 {
    let cleaned: String = raw
        .chars()
        .filter(|c| !matches!(c, ',' | '$' | ' '))
        .collect();
    let trimmed = cleaned.trim();

    for end in (1..=trimmed.len()).rev() {
        if !trimmed.is_char_boundary(end) {
            continue;
        }
        if let Ok(n) = trimmed[..end].parse::<f64>() {
            return if n.is_finite() { n } else { fallback };
        }
    }
    fallback
}

/// Format an amount as whole US dollars with thousands separators.
///
/// Negative and non-finite amounts display as `$0`; everything else is
/// rounded to the nearest dollar (halves away from zero).
pub fn money(n: f64) -> String {
    let amount = if n.is_finite() { n.max(0.0) } else { 0.0 };
    format!("${}", group_thousands(amount.round() as u64))
}

/// Render a rate or amount the way a query string expects it: `4.5` stays
/// `4.5`, whole values drop the fraction (`6.0` renders as `6`).
pub fn plain_number(n: f64) -> String {
    let value = if n.is_finite() { n } else { 0.0 };
    format!("{}", value)
}

fn group_thousands(mut value: u64) -> String {
    let mut groups = Vec::new();
    loop {
        let chunk = value % 1000;
        value /= 1000;
        if value == 0 {
            groups.push(chunk.to_string());
            break;
        }
        groups.push(format!("{:03}", chunk));
    }
    groups.reverse();
    groups.join(",")
}
