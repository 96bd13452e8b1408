//! Catalog error model.

use thiserror::Error;

/// Result type used at the catalog boundary.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog-level error.
///
/// Keep this focused on structural failures of the input payload (missing
/// `items`, a product without a `name`). Missing *optional* fields are not
/// errors anywhere in this workspace; they degrade to defaults.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The payload was not a valid catalog (malformed JSON, missing `items`,
    /// or a product missing a required field).
    #[error("invalid catalog payload: {0}")]
    Parse(#[from] serde_json::Error),
}
