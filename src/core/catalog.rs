//! Catalog business logic - the in-memory collection of registered products.
//!
//! Products are kept in insertion order. Names are not required to be unique;
//! lookups always resolve to the first product whose name matches ignoring case.

use crate::config::ProductSeed;
use crate::core::product::{Product, ProductView};
use crate::core::sale::SaleOutcome;
use chrono::{Local, NaiveDate};
use tracing::{debug, info, warn};

/// Result of listing the catalog.
#[derive(Debug, Clone, PartialEq)]
pub enum Listing {
    /// No products registered yet
    Empty,
    /// Every product, in the order it was added
    Products(Vec<ProductView>),
}

/// Ordered collection of products owned by the shell for the process lifetime.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<Product>,
}

impl Catalog {
    /// Creates an empty catalog.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Appends a product. Always succeeds.
    pub fn add(&mut self, product: Product) -> &Product {
        info!(
            product = %product.name(),
            category = %product.category(),
            position = self.items.len(),
            "Product added"
        );
        self.items.push(product);
        &self.items[self.items.len() - 1]
    }

    /// Registers each configured seed, in order, dated today.
    pub fn extend_from_seeds(&mut self, seeds: &[ProductSeed]) {
        self.extend_from_seeds_on(seeds, Local::now().date_naive());
    }

    /// Registers each configured seed, in order, dated `created_on`.
    pub fn extend_from_seeds_on(&mut self, seeds: &[ProductSeed], created_on: NaiveDate) {
        for seed in seeds {
            self.add(Product::with_creation_date(
                seed.name.clone(),
                seed.category.clone(),
                seed.price,
                seed.quantity,
                created_on,
            ));
        }
        debug!("Seeded catalog with {} product(s)", seeds.len());
    }

    /// Descriptions of every product, or [`Listing::Empty`].
    #[must_use]
    pub fn list(&self) -> Listing {
        if self.items.is_empty() {
            return Listing::Empty;
        }
        Listing::Products(self.items.iter().map(Product::describe).collect())
    }

    /// First product whose name matches, ignoring case.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&Product> {
        self.items.iter().find(|p| p.matches_name(name))
    }

    /// Sells `quantity` units of the first product matching `name`.
    pub fn sell(&mut self, name: &str, quantity: i64) -> SaleOutcome {
        match self.items.iter_mut().find(|p| p.matches_name(name)) {
            Some(product) => product.sell(quantity),
            None => {
                warn!(product = %name, "Product not found");
                SaleOutcome::NotFound {
                    name: name.to_string(),
                }
            }
        }
    }

    /// Sum of every product's total value; `0.0` when empty.
    #[must_use]
    pub fn total_inventory_value(&self) -> f64 {
        self.items.iter().map(Product::total_value).sum()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.items.iter()
    }
}
