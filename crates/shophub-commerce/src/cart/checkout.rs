//! Checkout outcomes.

use crate::cart::LineItem;
use crate::money::Money;
use crate::notice::Notice;
use serde::{Deserialize, Serialize};

/// What a completed checkout covered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    /// Final cart total.
    pub total: Money,
    /// Units purchased.
    pub total_items: i64,
    /// Lines as they were at checkout.
    pub lines: Vec<LineItem>,
}

/// Result of [`crate::cart::CartStore::checkout`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CheckoutOutcome {
    /// Nothing to check out; the cart was not touched.
    Empty,
    /// The cart was finalized and cleared.
    Completed(Receipt),
}

impl CheckoutOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, CheckoutOutcome::Completed(_))
    }

    /// Message to show the shopper.
    pub fn notice(&self) -> Notice {
        match self {
            CheckoutOutcome::Empty => Notice::warning("Your cart is empty!"),
            CheckoutOutcome::Completed(receipt) => Notice::success(format!(
                "Thank you for your purchase! Total: {}",
                receipt.total
            )),
        }
    }
}
