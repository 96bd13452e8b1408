//! `curator-catalog` — typed catalog input model.
//!
//! This crate contains the **immutable input snapshot** handed to the analysis
//! pass: deserialization of the catalog payload and nothing else (no IO, no
//! network, no mutation of the source catalog).

pub mod error;
pub mod product;
pub mod timestamp;

pub use error::{CatalogError, CatalogResult};
pub use product::{Catalog, Price, Product};
pub use timestamp::parse_timestamp;
