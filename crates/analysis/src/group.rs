//! Grouping of catalog products by display name.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use curator_catalog::Product;
use serde::Serialize;

use crate::score::{CompletenessScore, score_product};

/// A product wrapped with its completeness score. Ephemeral, per run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredProduct {
    pub product: Product,
    pub score: u32,
    pub reasons: Vec<&'static str>,
}

/// All products sharing one display name, best-scored first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductGroup {
    pub name: String,
    pub members: Vec<ScoredProduct>,
}

/// Partition the catalog into name groups.
///
/// Group order is first-seen order of names in the input. Within a group,
/// members are sorted by score descending; the sort is stable, so products
/// with equal scores keep their original catalog order.
pub fn group_products(products: &[Product], now: DateTime<Utc>) -> Vec<ProductGroup> {
    let mut groups: Vec<ProductGroup> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for product in products {
        let CompletenessScore { score, reasons } = score_product(product, now);
        let scored = ScoredProduct {
            product: product.clone(),
            score,
            reasons,
        };
        match index.get(product.name.as_str()) {
            Some(&slot) => groups[slot].members.push(scored),
            None => {
                index.insert(product.name.as_str(), groups.len());
                groups.push(ProductGroup {
                    name: product.name.clone(),
                    members: vec![scored],
                });
            }
        }
    }

    for group in &mut groups {
        group.members.sort_by(|a, b| b.score.cmp(&a.score));
    }
    groups
}
