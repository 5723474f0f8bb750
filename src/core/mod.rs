//! Core business logic - the product catalog and its stock rules.
//!
//! Nothing in here performs I/O. Outcomes are returned as values and logged
//! through `tracing`; rendering them is left to the shell.

/// Ordered product collection, lookups, sales and totals
pub mod catalog;
/// Single product, its stock and its sell rule
pub mod product;
/// Plain-text formatting of products and totals
pub mod report;
/// Sale outcomes
pub mod sale;

pub use catalog::{Catalog, Listing};
pub use product::{Product, ProductView};
pub use sale::SaleOutcome;
