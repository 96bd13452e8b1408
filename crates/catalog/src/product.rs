use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::CatalogResult;

/// One price attached to a product.
///
/// Every field except `amount_type` carries a documented default so that a
/// sparse payload deserializes cleanly instead of forcing callers to branch
/// on "key missing" versus "key present but empty".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Pricing model tag: `"free"`, `"fixed"`, or anything else (unknown
    /// tags are carried verbatim, not rejected).
    #[serde(default)]
    pub amount_type: String,
    /// Amount in minor currency units (cents); meaningful only when
    /// `amount_type` is `"fixed"`.
    #[serde(default)]
    pub price_amount: i64,
    /// ISO currency code, lowercase in the source payload.
    #[serde(default = "default_currency")]
    pub price_currency: String,
    /// Archived prices are excluded from all analysis.
    #[serde(default)]
    pub is_archived: bool,
}

fn default_currency() -> String {
    "usd".to_string()
}

/// A catalog entry. Immutable input; the analysis pass never mutates it.
///
/// `id` and `name` are required — a product without a `name` cannot be
/// grouped, and the deserializer fails fast on it rather than guessing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    /// Display name; the grouping key. Grouping is by exact equality.
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Opaque media references; only presence matters to the scorer.
    #[serde(default)]
    pub medias: Vec<serde_json::Value>,
    #[serde(default)]
    pub prices: Vec<Price>,
    /// Opaque benefit references; only presence matters to the scorer.
    #[serde(default)]
    pub benefits: Vec<serde_json::Value>,
    #[serde(default)]
    pub metadata: BTreeMap<String, String>,
    #[serde(default)]
    pub modified_at: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Product {
    /// Prices that are still live, i.e. not archived.
    pub fn active_prices(&self) -> impl Iterator<Item = &Price> {
        self.prices.iter().filter(|p| !p.is_archived)
    }

    /// First price regardless of archival state (display-only path).
    pub fn first_price(&self) -> Option<&Price> {
        self.prices.first()
    }
}

/// A full catalog snapshot as fetched from the product-management API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub items: Vec<Product>,
}

impl Catalog {
    /// Deserialize a catalog payload. A payload without `items`, or with a
    /// product missing `id`/`name`, is a structural error.
    pub fn from_json_str(payload: &str) -> CatalogResult<Self> {
        Ok(serde_json::from_str(payload)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sparse_price_gets_defaults() {
        let price: Price = serde_json::from_str(r#"{"amount_type": "free"}"#).unwrap();
        assert_eq!(price.amount_type, "free");
        assert_eq!(price.price_amount, 0);
        assert_eq!(price.price_currency, "usd");
        assert!(!price.is_archived);
    }

    #[test]
    fn sparse_product_gets_defaults() {
        let product: Product =
            serde_json::from_str(r#"{"id": "p1", "name": "Chair"}"#).unwrap();
        assert_eq!(product.id, "p1");
        assert_eq!(product.name, "Chair");
        assert!(product.description.is_empty());
        assert!(product.medias.is_empty());
        assert!(product.prices.is_empty());
        assert!(product.benefits.is_empty());
        assert!(product.metadata.is_empty());
        assert!(product.modified_at.is_none());
        assert!(product.created_at.is_none());
    }

    #[test]
    fn product_without_name_is_rejected() {
        let result: Result<Product, _> = serde_json::from_str(r#"{"id": "p1"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn payload_without_items_is_rejected() {
        assert!(Catalog::from_json_str(r#"{"products": []}"#).is_err());
    }

    #[test]
    fn catalog_round_trips_items_in_order() {
        let catalog = Catalog::from_json_str(
            r#"{"items": [
                {"id": "a", "name": "Desk"},
                {"id": "b", "name": "Chair"},
                {"id": "c", "name": "Desk"}
            ]}"#,
        )
        .unwrap();
        let ids: Vec<&str> = catalog.items.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn active_prices_skips_archived() {
        let product: Product = serde_json::from_str(
            r#"{"id": "p1", "name": "Chair", "prices": [
                {"amount_type": "free", "is_archived": true},
                {"amount_type": "fixed", "price_amount": 999}
            ]}"#,
        )
        .unwrap();
        let active: Vec<&Price> = product.active_prices().collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].amount_type, "fixed");
    }
}
