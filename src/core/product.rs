//! Product business logic - a single stock-keeping entry.
//!
//! A product keeps its name, category, unit price and creation date for its
//! whole life. Only the quantity on hand changes, and only through [`Product::sell`].

use crate::core::sale::SaleOutcome;
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// A registered product and its current stock.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    name: String,
    category: String,
    unit_price: f64,
    quantity: i64,
    created_on: NaiveDate,
}

/// Read-only snapshot of a product, used for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductView {
    /// Name of the product (e.g., "Mouse")
    pub name: String,
    /// Free-text category (e.g., "Peripherals")
    pub category: String,
    /// Price of one unit
    pub unit_price: f64,
    /// Units in stock
    pub quantity: i64,
    /// Date the product was registered
    pub created_on: NaiveDate,
    /// `unit_price * quantity` at the time of the snapshot
    pub total_value: f64,
}

impl Product {
    /// Registers a product dated today (local time).
    ///
    /// Inputs are taken as given: negative prices or quantities are not rejected.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        unit_price: f64,
        quantity: i64,
    ) -> Self {
        Self::with_creation_date(
            name,
            category,
            unit_price,
            quantity,
            Local::now().date_naive(),
        )
    }

    /// Same as [`Product::new`] but with an explicit creation date.
    #[must_use]
    pub fn with_creation_date(
        name: impl Into<String>,
        category: impl Into<String>,
        unit_price: f64,
        quantity: i64,
        created_on: NaiveDate,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            unit_price,
            quantity,
            created_on,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    #[must_use]
    pub const fn unit_price(&self) -> f64 {
        self.unit_price
    }

    #[must_use]
    pub const fn quantity(&self) -> i64 {
        self.quantity
    }

    #[must_use]
    pub const fn created_on(&self) -> NaiveDate {
        self.created_on
    }

    /// Value of the stock on hand: `unit_price * quantity`.
    #[must_use]
    pub fn total_value(&self) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let quantity = self.quantity as f64;
        self.unit_price * quantity
    }

    /// Case-insensitive name comparison used for lookups.
    ///
    /// Each character is folded to uppercase and then lowercase, so pairs such
    /// as final sigma `ς` and `Σ` compare equal.
    #[must_use]
    pub fn matches_name(&self, name: &str) -> bool {
        fold_case(&self.name).eq(fold_case(name))
    }

    /// Removes `requested` units from stock.
    ///
    /// A request larger than the stock on hand is rejected in full and leaves
    /// the product untouched. Zero or negative requests go through as-is,
    /// unless the resulting stock would not fit in an `i64`; that request is
    /// rejected like an oversell.
    pub fn sell(&mut self, requested: i64) -> SaleOutcome {
        let remaining = if requested > self.quantity {
            None
        } else {
            self.quantity.checked_sub(requested)
        };

        let Some(remaining) = remaining else {
            warn!(
                product = %self.name,
                requested,
                available = self.quantity,
                "Insufficient stock"
            );
            return SaleOutcome::InsufficientStock {
                name: self.name.clone(),
                requested,
                available: self.quantity,
            };
        };

        self.quantity = remaining;
        info!(
            product = %self.name,
            sold = requested,
            remaining = self.quantity,
            "Sale recorded"
        );
        SaleOutcome::Sold {
            name: self.name.clone(),
            quantity: requested,
        }
    }

    /// Snapshot of every field plus the computed total value.
    #[must_use]
    pub fn describe(&self) -> ProductView {
        ProductView {
            name: self.name.clone(),
            category: self.category.clone(),
            unit_price: self.unit_price,
            quantity: self.quantity,
            created_on: self.created_on,
            total_value: self.total_value(),
        }
    }
}

fn fold_case(s: &str) -> impl Iterator<Item = char> + '_ {
    s.chars()
        .flat_map(char::to_uppercase)
        .flat_map(char::to_lowercase)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::test_utils::*;
    use proptest::prelude::*;

    #[test]
    fn test_new_product_is_dated_today() {
        let product = Product::new("Mouse", "Peripherals", 199.99, 10);
        assert_eq!(product.created_on(), Local::now().date_naive());
        assert_eq!(product.name(), "Mouse");
        assert_eq!(product.category(), "Peripherals");
        assert_eq!(product.unit_price(), 199.99);
        assert_eq!(product.quantity(), 10);
    }

    #[test]
    fn test_total_value() {
        let product = create_test_product("Keyboard", 349.90, 5);
        assert!(approx_eq(product.total_value(), 1749.5));
    }

    #[test]
    fn test_sell_within_stock() {
        let mut product = create_test_product("Mouse", 199.99, 10);

        let outcome = product.sell(3);

        assert_eq!(
            outcome,
            SaleOutcome::Sold {
                name: "Mouse".to_string(),
                quantity: 3
            }
        );
        assert_eq!(product.quantity(), 7);
    }

    #[test]
    fn test_sell_entire_stock() {
        let mut product = create_test_product("Mouse", 199.99, 10);
        assert!(product.sell(10).is_success());
        assert_eq!(product.quantity(), 0);
        assert_eq!(product.total_value(), 0.0);
    }

    #[test]
    fn test_sell_more_than_stock_is_rejected() {
        let mut product = create_test_product("Mouse", 199.99, 7);

        let outcome = product.sell(100);

        assert_eq!(
            outcome,
            SaleOutcome::InsufficientStock {
                name: "Mouse".to_string(),
                requested: 100,
                available: 7
            }
        );
        assert_eq!(product.quantity(), 7);
    }

    #[test]
    fn test_sell_zero_and_negative_are_accepted() {
        let mut product = create_test_product("Mouse", 10.0, 5);

        assert!(product.sell(0).is_success());
        assert_eq!(product.quantity(), 5);

        // Negative sales add stock back
        assert!(product.sell(-2).is_success());
        assert_eq!(product.quantity(), 7);
    }

    #[test]
    fn test_sell_rejects_stock_overflow() {
        let mut full = create_test_product("Mouse", 1.0, i64::MAX);
        let outcome = full.sell(-1);
        assert_eq!(
            outcome,
            SaleOutcome::InsufficientStock {
                name: "Mouse".to_string(),
                requested: -1,
                available: i64::MAX
            }
        );
        assert_eq!(full.quantity(), i64::MAX);

        let mut empty = create_test_product("Mouse", 1.0, 0);
        let outcome = empty.sell(i64::MIN);
        assert!(matches!(
            outcome,
            SaleOutcome::InsufficientStock { available: 0, .. }
        ));
        assert_eq!(empty.quantity(), 0);
    }

    #[test]
    fn test_negative_inputs_are_not_validated() {
        let product = create_test_product("Broken", -5.0, -2);
        assert_eq!(product.unit_price(), -5.0);
        assert_eq!(product.quantity(), -2);
        assert_eq!(product.total_value(), 10.0);
    }

    #[test]
    fn test_matches_name_ignores_case() {
        let product = create_test_product("Mouse", 1.0, 1);
        assert!(product.matches_name("mouse"));
        assert!(product.matches_name("MOUSE"));
        assert!(product.matches_name("Mouse"));
        assert!(!product.matches_name("Mouse "));
        assert!(!product.matches_name("Mous"));

        let accented = create_test_product("Cadeira Ergonômica", 1.0, 1);
        assert!(accented.matches_name("CADEIRA ERGONÔMICA"));

        let sigma = create_test_product("ΟΔΟΣ", 1.0, 1);
        assert!(sigma.matches_name("οδος"));
        assert!(sigma.matches_name("οδοσ"));
    }

    #[test]
    fn test_describe_includes_total_value() {
        let product = create_test_product("Headset", 250.0, 4);
        let view = product.describe();

        assert_eq!(view.name, "Headset");
        assert_eq!(view.category, TEST_CATEGORY);
        assert_eq!(view.unit_price, 250.0);
        assert_eq!(view.quantity, 4);
        assert_eq!(view.created_on, test_date());
        assert_eq!(view.total_value, 1000.0);
    }

    proptest! {
        #[test]
        fn total_value_matches_repeated_addition(
            price in 0.0f64..10_000.0,
            quantity in 0i64..200
        ) {
            let product = create_test_product("Item", price, quantity);
            let expected: f64 = (0..quantity).map(|_| price).sum();
            prop_assert!((product.total_value() - expected).abs() <= 1e-6 * expected.max(1.0));
        }

        #[test]
        fn sell_within_stock_only_moves_quantity(
            quantity in 0i64..10_000,
            fraction in 0.0f64..=1.0
        ) {
            #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
            let requested = (quantity as f64 * fraction).floor() as i64;
            let mut product = create_test_product("Item", 12.5, quantity);

            let outcome = product.sell(requested);

            prop_assert!(outcome.is_success());
            prop_assert_eq!(product.quantity(), quantity - requested);
            prop_assert_eq!(product.unit_price(), 12.5);
            prop_assert_eq!(product.name(), "Item");
            prop_assert_eq!(product.category(), TEST_CATEGORY);
        }

        #[test]
        fn oversell_leaves_product_unchanged(
            quantity in 0i64..10_000,
            excess in 1i64..10_000
        ) {
            let mut product = create_test_product("Item", 3.0, quantity);
            let before = product.clone();

            let outcome = product.sell(quantity + excess);

            let is_insufficient = matches!(outcome, SaleOutcome::InsufficientStock { .. });
            prop_assert!(is_insufficient);
            prop_assert_eq!(product, before);
        }
    }
}
