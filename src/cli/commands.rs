//! Menu actions - one function per numbered menu entry.
//!
//! Each action reads what it needs from the terminal, calls into the catalog
//! and renders the result. Catalog outcomes are shown to the operator, never
//! returned as errors.

use crate::cli::style::Color;
use crate::cli::terminal::Terminal;
use crate::core::{Catalog, Listing, Product, SaleOutcome, report};
use crate::errors::Result;
use std::io::{BufRead, Write};
use tracing::{info, instrument, warn};

/// Prompts for a new product and adds it to the catalog.
///
/// # Errors
/// Returns an error if the terminal fails or input ends mid-prompt.
#[instrument(skip_all)]
pub fn add_product<R: BufRead, W: Write>(
    catalog: &mut Catalog,
    term: &mut Terminal<R, W>,
) -> Result<()> {
    let name = term.prompt_line("Product name: ")?;
    let category = term.prompt_line("Category: ")?;
    let price: f64 = term.prompt_parsed("Price (e.g. 199.99): ")?;
    let quantity: i64 = term.prompt_parsed("Quantity: ")?;

    if price < 0.0 || quantity < 0 {
        warn!(price, quantity, "Registering product with negative values");
    }

    catalog.add(Product::new(name, category, price, quantity));
    term.say_colored("Product added successfully!", Color::Green)
}

/// Prints every product, or a notice when none are registered.
///
/// # Errors
/// Returns an error if writing to the terminal fails.
pub fn list_products<R: BufRead, W: Write>(
    catalog: &Catalog,
    term: &mut Terminal<R, W>,
) -> Result<()> {
    term.say_colored("Registered products:", Color::Yellow)?;
    match catalog.list() {
        Listing::Empty => term.say_colored("No products registered.", Color::Yellow),
        Listing::Products(views) => {
            let symbol = term.config().currency_symbol.clone();
            for view in &views {
                let mut lines = report::format_product_view(view, &symbol).into_iter();
                if let Some(header) = lines.next() {
                    term.say_colored(&header, Color::Cyan)?;
                }
                for line in lines {
                    term.say(&line)?;
                }
            }
            Ok(())
        }
    }
}

/// Prompts for a product name and quantity and records the sale.
///
/// # Errors
/// Returns an error if the terminal fails or input ends mid-prompt.
#[instrument(skip_all)]
pub fn sell_product<R: BufRead, W: Write>(
    catalog: &mut Catalog,
    term: &mut Terminal<R, W>,
) -> Result<SaleOutcome> {
    let name = term.prompt_line("Product name to sell: ")?;
    let quantity: i64 = term.prompt_parsed("Quantity to sell: ")?;

    let outcome = catalog.sell(&name, quantity);
    let color = if outcome.is_success() {
        Color::Green
    } else {
        Color::Red
    };
    term.say_colored(&outcome.to_string(), color)?;
    Ok(outcome)
}

/// Prints the value of all stock on hand.
///
/// # Errors
/// Returns an error if writing to the terminal fails.
pub fn show_total_value<R: BufRead, W: Write>(
    catalog: &Catalog,
    term: &mut Terminal<R, W>,
) -> Result<()> {
    let total = catalog.total_inventory_value();
    info!(total, products = catalog.len(), "Computed total stock value");
    let line = report::format_total_value(total, &term.config().currency_symbol);
    term.say_colored(&line, Color::Cyan)
}
