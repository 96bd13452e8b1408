//! `curator-analysis` — duplicate-variant analysis for a product catalog.
//!
//! This crate contains the decision logic for catalog consolidation,
//! implemented purely as deterministic analysis (no IO, no HTTP, no storage):
//! score each product's completeness, group products by display name, classify
//! prices, and recommend per group whether to keep, consolidate, or archive.

pub mod group;
pub mod pricing;
pub mod recommend;
pub mod score;

pub use group::{ProductGroup, ScoredProduct, group_products};
pub use pricing::{
    NO_PRICE, PriceKind, contains_free_marker, contains_paid_marker, format_price, price_kind,
};
pub use recommend::{
    ConsolidateRecommendation, ConsolidationReport, KeepRecommendation, analyze, recommend,
};
pub use score::{CompletenessScore, MAX_SCORE, score_product};
