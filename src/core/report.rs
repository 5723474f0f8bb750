//! Report formatting for the terminal.
//!
//! These functions turn catalog data into plain text lines. They do no I/O and
//! apply no colors, so the shell decides how and where the lines are shown.

use crate::core::product::ProductView;

/// Separator printed after each product block
pub const SEPARATOR: &str = "-------------------------------";

/// Formats an amount with a currency prefix and two decimals.
///
/// # Returns
/// Formatted string like "R$ 199.99" or "R$ -5.00"
#[must_use]
pub fn format_money(amount: f64, symbol: &str) -> String {
    format!("{symbol} {amount:.2}")
}

/// Lines describing one product, ending with [`SEPARATOR`].
#[must_use]
pub fn format_product_view(view: &ProductView, symbol: &str) -> Vec<String> {
    vec![
        format!("Product: {}", view.name),
        format!("Category: {}", view.category),
        format!("Price: {}", format_money(view.unit_price, symbol)),
        format!("Quantity in stock: {}", view.quantity),
        format!("Created on: {}", view.created_on.format("%Y-%m-%d")),
        format!(
            "Total stock value: {}",
            format_money(view.total_value, symbol)
        ),
        SEPARATOR.to_string(),
    ]
}

/// Summary line for the whole catalog.
#[must_use]
pub fn format_total_value(total: f64, symbol: &str) -> String {
    format!("Total stock value: {}", format_money(total, symbol))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(199.99, "R$"), "R$ 199.99");
        assert_eq!(format_money(3749.4, "$"), "$ 3749.40");
        assert_eq!(format_money(0.0, "R$"), "R$ 0.00");
        assert_eq!(format_money(-5.0, "R$"), "R$ -5.00");
    }

    #[test]
    fn test_format_product_view() {
        let view = create_test_product("Mouse", 199.99, 10).describe();
        let lines = format_product_view(&view, "R$");

        assert_eq!(
            lines,
            vec![
                "Product: Mouse".to_string(),
                format!("Category: {TEST_CATEGORY}"),
                "Price: R$ 199.99".to_string(),
                "Quantity in stock: 10".to_string(),
                "Created on: 2025-01-15".to_string(),
                "Total stock value: R$ 1999.90".to_string(),
                SEPARATOR.to_string(),
            ]
        );
    }

    #[test]
    fn test_format_total_value() {
        assert_eq!(
            format_total_value(3749.4, "R$"),
            "Total stock value: R$ 3749.40"
        );
    }
}
