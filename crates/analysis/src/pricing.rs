//! Price classification and canonical display formatting.

use curator_catalog::Price;

/// Display string for a product with no price at all.
pub const NO_PRICE: &str = "No price";

/// Coarse price classification.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PriceKind {
    Free,
    Paid,
    /// Unknown `amount_type`, or a `fixed` price with a zero amount.
    Other,
}

/// Format a price into its canonical display string.
///
/// - `free` → `"FREE"`
/// - `fixed` → `"$<amount/100> <CURRENCY>"`, two decimals, currency uppercased
/// - anything else → the raw `amount_type` verbatim
/// - absent price → `"No price"`
///
/// Archival state is deliberately ignored here: filtering archived prices is
/// the caller's job, except on the display-only "first price" path.
pub fn format_price(price: Option<&Price>) -> String {
    let Some(price) = price else {
        return NO_PRICE.to_string();
    };
    match price.amount_type.as_str() {
        "free" => "FREE".to_string(),
        "fixed" => format!(
            "${:.2} {}",
            price.price_amount as f64 / 100.0,
            price.price_currency.to_uppercase()
        ),
        other => other.to_string(),
    }
}

/// Classify a price. A zero-amount `fixed` price still *displays* as paid
/// (`"$0.00 USD"`) but is not [`PriceKind::Paid`]: the completeness scorer's
/// paid criterion requires a positive amount.
pub fn price_kind(price: &Price) -> PriceKind {
    match price.amount_type.as_str() {
        "free" => PriceKind::Free,
        "fixed" if price.price_amount > 0 => PriceKind::Paid,
        _ => PriceKind::Other,
    }
}

/// Whether a display string marks a free price offering.
///
/// The recommendation engine tests the classifier's *output* rather than
/// re-deriving the kind from `amount_type`; this is the source decision
/// boundary and is kept verbatim.
pub fn contains_free_marker(display: &str) -> bool {
    display.contains("FREE")
}

/// Whether a display string marks a paid price offering. Matches on the
/// dollar sign only, so a display using another currency symbol does not
/// count as paid.
pub fn contains_paid_marker(display: &str) -> bool {
    display.contains('$')
}
