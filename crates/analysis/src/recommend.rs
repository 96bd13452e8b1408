//! Per-group consolidation recommendations.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use curator_catalog::{Catalog, Product};
use serde::Serialize;

use crate::group::{ProductGroup, group_products};
use crate::pricing::{contains_free_marker, contains_paid_marker, format_price};

/// A single winner that needs no action.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeepRecommendation {
    pub name: String,
    pub product: Product,
    pub score: u32,
    pub reasons: Vec<&'static str>,
    /// Display form of the product's first price (archival state ignored on
    /// this display-only path).
    pub display_price: String,
}

/// A group mixing free and paid pricing: merge prices into one canonical
/// product, then archive the rest.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConsolidateRecommendation {
    pub name: String,
    pub keep: Product,
    pub keep_score: u32,
    pub keep_reasons: Vec<&'static str>,
    pub archive_candidates: Vec<Product>,
    /// Every distinct non-archived price display string in the group,
    /// lexicographically sorted for deterministic reporting.
    pub all_distinct_prices: Vec<String>,
    /// The kept product's own non-archived price display strings.
    pub keep_current_prices: Vec<String>,
}

/// The full consolidation plan, ready for a downstream renderer.
///
/// Every input product lands in exactly one slot: a keep entry, a
/// consolidate entry's `keep`, one of its `archive_candidates`, or the flat
/// `archive` list.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct ConsolidationReport {
    pub keep: Vec<KeepRecommendation>,
    pub consolidate: Vec<ConsolidateRecommendation>,
    /// Losing variants from same-price-kind groups; flat, not nested under
    /// their winners.
    pub archive: Vec<Product>,
}

/// Run the whole pass: score, group, recommend.
pub fn analyze(catalog: &Catalog, now: DateTime<Utc>) -> ConsolidationReport {
    recommend(&group_products(&catalog.items, now))
}

/// Decide, per group, whether to keep as-is, consolidate, or prune
/// duplicates.
///
/// A group needs consolidation when its members mix free and paid pricing:
/// those are two packagings of the same asset and should be merged into one
/// product carrying both price options. Same-kind groups are pure duplicates
/// where only the best-scored copy survives.
pub fn recommend(groups: &[ProductGroup]) -> ConsolidationReport {
    let mut report = ConsolidationReport::default();

    for group in groups {
        if let [only] = group.members.as_slice() {
            report.keep.push(KeepRecommendation {
                name: group.name.clone(),
                product: only.product.clone(),
                score: only.score,
                reasons: only.reasons.clone(),
                display_price: format_price(only.product.first_price()),
            });
            continue;
        }

        let best = &group.members[0];
        let others = &group.members[1..];

        // All distinct live price displays across the group. The free/paid
        // test runs on the classifier's output strings, not on amount_type;
        // that string boundary is the actual decision rule.
        let all_prices: BTreeSet<String> = group
            .members
            .iter()
            .flat_map(|m| m.product.active_prices())
            .map(|p| format_price(Some(p)))
            .collect();
        let has_free = all_prices.iter().any(|p| contains_free_marker(p));
        let has_paid = all_prices.iter().any(|p| contains_paid_marker(p));

        if has_free && has_paid {
            report.consolidate.push(ConsolidateRecommendation {
                name: group.name.clone(),
                keep: best.product.clone(),
                keep_score: best.score,
                keep_reasons: best.reasons.clone(),
                archive_candidates: others.iter().map(|m| m.product.clone()).collect(),
                all_distinct_prices: all_prices.into_iter().collect(),
                keep_current_prices: best
                    .product
                    .active_prices()
                    .map(|p| format_price(Some(p)))
                    .collect(),
            });
        } else {
            report.keep.push(KeepRecommendation {
                name: group.name.clone(),
                product: best.product.clone(),
                score: best.score,
                reasons: best.reasons.clone(),
                display_price: format_price(best.product.first_price()),
            });
            report
                .archive
                .extend(others.iter().map(|m| m.product.clone()));
        }
    }

    report
}
