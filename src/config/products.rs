//! Initial products loaded from config.toml
//!
//! Products listed under `[[products]]` are registered in the catalog when the
//! application starts. They are not written back anywhere; the catalog lives
//! only as long as the process.

use serde::Deserialize;

/// Configuration for a single product to register at startup
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ProductSeed {
    /// Name of the product
    pub name: String,
    /// Free-text category
    #[serde(default)]
    pub category: String,
    /// Unit price
    pub price: f64,
    /// Units in stock
    #[serde(default)]
    pub quantity: i64,
}
