//! Read-only cart views and the render callback seam.

use crate::cart::LineItem;
use crate::money::{Currency, Money};
use serde::Serialize;

/// Current cart contents plus derived totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CartSnapshot<'a> {
    /// Lines in cart order.
    pub items: &'a [LineItem],
    /// Sum of all quantities.
    pub total_items: i64,
    /// Sum of `unit_price * quantity` over all lines.
    pub total_price: Money,
}

impl<'a> CartSnapshot<'a> {
    /// Build a snapshot over store-owned `items`.
    ///
    /// Only the store calls this: it rolls back any mutation whose totals
    /// would overflow, so the zero fallback is unreachable from outside.
    pub(crate) fn of(items: &'a [LineItem], currency: Currency) -> Self {
        let (total_items, total_price) = Self::checked_totals(items, currency)
            .unwrap_or((0, Money::zero(currency)));
        Self {
            items,
            total_items,
            total_price,
        }
    }

    /// Totals over `items`, or None if either sum overflows.
    pub fn checked_totals(items: &[LineItem], currency: Currency) -> Option<(i64, Money)> {
        let mut total_items: i64 = 0;
        let mut total_price = Money::zero(currency);
        for item in items {
            total_items = total_items.checked_add(item.quantity)?;
            total_price = total_price.try_add(&item.line_total()?)?;
        }
        Some((total_items, total_price))
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Something that reflects the cart into the page.
///
/// The store calls every registered renderer after each successful
/// mutation. Closures taking a snapshot implement this directly.
pub trait CartRenderer {
    fn render(&mut self, snapshot: &CartSnapshot<'_>);
}

impl<F> CartRenderer for F
where
    F: FnMut(&CartSnapshot<'_>),
{
    fn render(&mut self, snapshot: &CartSnapshot<'_>) {
        self(snapshot)
    }
}
