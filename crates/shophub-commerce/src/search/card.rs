//! Product card type.

use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A product as displayed on a card in the product grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductCard {
    /// Card title. Used as the cart line name.
    pub name: String,
    /// Current (sale) price.
    pub price: Money,
    /// Image URL.
    pub image_ref: String,
}

impl ProductCard {
    pub fn new(name: impl Into<String>, price: Money, image_ref: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price,
            image_ref: image_ref.into(),
        }
    }

    /// Whether the card title contains `needle`, ignoring case.
    ///
    /// `needle` must already be lowercase.
    pub fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
    }
}
