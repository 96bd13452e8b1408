//! Completeness scoring for a single product.

use chrono::{DateTime, Duration, Utc};
use curator_catalog::{Product, parse_timestamp};
use serde::Serialize;

/// Highest score the rubric can award.
pub const MAX_SCORE: u32 = 70;

/// Result of scoring one product: the total and the rubric reasons that
/// fired, in rubric order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletenessScore {
    pub score: u32,
    pub reasons: Vec<&'static str>,
}

/// Score a product's completeness against the rubric.
///
/// Pure and total: missing or malformed optional fields contribute zero,
/// never an error. `now` is the evaluation time for the 30-day recency
/// window; passing it explicitly keeps the whole pass deterministic.
pub fn score_product(product: &Product, now: DateTime<Utc>) -> CompletenessScore {
    let mut score = 0;
    let mut reasons = Vec::new();

    // Icon/media (20 points).
    if !product.medias.is_empty() {
        score += 20;
        reasons.push("has icon");
    }

    // Description quality (15 detailed, 5 basic, mutually exclusive).
    // "Blender asset:" is a known auto-generated placeholder prefix.
    let desc_len = product.description.chars().count();
    if desc_len > 50 && !product.description.starts_with("Blender asset:") {
        score += 15;
        reasons.push("good description");
    } else if desc_len > 20 {
        score += 5;
        reasons.push("basic description");
    }

    // Paid price (10 points): non-archived, fixed, positive amount.
    if product
        .active_prices()
        .any(|p| p.amount_type == "fixed" && p.price_amount > 0)
    {
        score += 10;
        reasons.push("has paid price");
    }

    // Free price (5 points).
    if product.active_prices().any(|p| p.amount_type == "free") {
        score += 5;
        reasons.push("has free price");
    }

    // Benefits/files (10 points).
    if !product.benefits.is_empty() {
        score += 10;
        reasons.push("has benefits");
    }

    // Recently updated (5 points). Prefer modified_at; unparseable
    // timestamps simply don't fire the criterion.
    let touched_at = product.modified_at.as_deref().or(product.created_at.as_deref());
    if let Some(ts) = touched_at.and_then(parse_timestamp) {
        if now.signed_duration_since(ts) < Duration::days(30) {
            score += 5;
            reasons.push("recently updated");
        }
    }

    // Metadata (5 points).
    if !product.metadata.is_empty() {
        score += 5;
        reasons.push("has metadata");
    }

    CompletenessScore { score, reasons }
}
