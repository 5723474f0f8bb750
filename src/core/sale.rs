//! Sale outcomes reported back to the caller.
//!
//! A sale never fails hard. Every request ends in exactly one of these
//! outcomes and the catalog stays valid afterwards.

use serde::Serialize;
use std::fmt;

/// Result of a sell request against a product or the whole catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SaleOutcome {
    /// Stock was decremented by `quantity`.
    Sold {
        /// Name of the product as registered
        name: String,
        /// Units sold
        quantity: i64,
    },
    /// The request exceeded the available stock; nothing changed.
    InsufficientStock {
        /// Name of the product as registered
        name: String,
        /// Units asked for
        requested: i64,
        /// Units on hand when the request was rejected
        available: i64,
    },
    /// No product matched the searched-for name.
    NotFound {
        /// Name exactly as the caller typed it
        name: String,
    },
}

impl SaleOutcome {
    /// Whether stock was actually moved.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Sold { .. })
    }
}

impl fmt::Display for SaleOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sold { name, quantity } => {
                write!(f, "Sale recorded: {quantity} unit(s) of {name}")
            }
            Self::InsufficientStock { name, .. } => write!(f, "Insufficient stock for: {name}"),
            Self::NotFound { name } => write!(f, "Product not found: {name}"),
        }
    }
}
