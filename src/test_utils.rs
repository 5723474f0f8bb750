//! Shared test utilities for `InventoryBuddy`.
//!
//! This module provides helper functions for building products and catalogs
//! with sensible defaults and a fixed creation date.

use crate::core::{Catalog, Product};
use chrono::NaiveDate;

/// Category used by [`create_test_product`]
pub const TEST_CATEGORY: &str = "Peripherals";

/// Fixed creation date so snapshots and formatted output are stable.
#[allow(clippy::unwrap_used)]
pub fn test_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
}

/// Creates a product with sensible defaults.
///
/// # Defaults
/// * `category`: [`TEST_CATEGORY`]
/// * `created_on`: [`test_date`]
pub fn create_test_product(name: &str, price: f64, quantity: i64) -> Product {
    Product::with_creation_date(name, TEST_CATEGORY, price, quantity, test_date())
}

/// Catalog holding a Mouse (199.99 x 10) and a Keyboard (349.90 x 5).
pub fn sample_catalog() -> Catalog {
    let mut catalog = Catalog::new();
    catalog.add(create_test_product("Mouse", 199.99, 10));
    catalog.add(create_test_product("Keyboard", 349.90, 5));
    catalog
}

/// Float comparison tolerant to rounding in sums of prices.
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}
