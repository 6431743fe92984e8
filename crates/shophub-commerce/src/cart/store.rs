//! Cart store and line item types.

use crate::cart::{CartRenderer, CartSnapshot, CheckoutOutcome, Receipt};
use crate::error::CommerceError;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info};

/// One product entry in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LineItem {
    /// Product name. Also the key that makes lines unique.
    pub name: String,
    /// Price of a single unit.
    pub unit_price: Money,
    /// Image URL shown next to the line.
    pub image_ref: String,
    /// Number of units, always positive.
    pub quantity: i64,
}

impl LineItem {
    fn new(name: String, unit_price: Money, image_ref: String) -> Self {
        Self {
            name,
            unit_price,
            image_ref,
            quantity: 1,
        }
    }

    /// `unit_price * quantity`, or None on overflow.
    pub fn line_total(&self) -> Option<Money> {
        self.unit_price.try_multiply(self.quantity)
    }
}

/// The shopping cart for one page session.
///
/// Owns the line items and the render callbacks. Every successful
/// mutation is followed by exactly one call to each registered renderer
/// with a fresh [`CartSnapshot`].
pub struct CartStore {
    items: Vec<LineItem>,
    currency: Currency,
    renderers: Vec<Box<dyn CartRenderer>>,
}

impl CartStore {
    /// Create an empty cart priced in `currency`.
    pub fn new(currency: Currency) -> Self {
        Self {
            items: Vec::new(),
            currency,
            renderers: Vec::new(),
        }
    }

    /// Register a renderer to be called after every mutation.
    ///
    /// Renderers run in registration order.
    pub fn subscribe(&mut self, renderer: impl CartRenderer + 'static) {
        self.renderers.push(Box::new(renderer));
    }

    /// Register a closure as a renderer.
    pub fn on_change<F>(&mut self, callback: F)
    where
        F: FnMut(&CartSnapshot<'_>) + 'static,
    {
        self.subscribe(callback);
    }

    /// Cart currency.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Add one unit of a product.
    ///
    /// A line with the same name gets its quantity bumped by one and keeps
    /// its original price and image; otherwise a new line with quantity 1
    /// is appended. Returns the index of the affected line.
    pub fn add_item(
        &mut self,
        name: impl Into<String>,
        unit_price: Money,
        image_ref: impl Into<String>,
    ) -> Result<usize, CommerceError> {
        if unit_price.currency != self.currency {
            return Err(CommerceError::CurrencyMismatch {
                expected: self.currency.code().to_string(),
                got: unit_price.currency.code().to_string(),
            });
        }

        let name = name.into();
        let index = match self.items.iter().position(|i| i.name == name) {
            Some(index) => {
                let previous = self.items[index].quantity;
                let quantity = previous.checked_add(1).ok_or(CommerceError::Overflow)?;
                self.items[index].quantity = quantity;
                if !self.totals_fit() {
                    self.items[index].quantity = previous;
                    return Err(CommerceError::Overflow);
                }
                index
            }
            None => {
                self.items
                    .push(LineItem::new(name, unit_price, image_ref.into()));
                if !self.totals_fit() {
                    self.items.pop();
                    return Err(CommerceError::Overflow);
                }
                self.items.len() - 1
            }
        };

        debug!(
            index,
            name = %self.items[index].name,
            quantity = self.items[index].quantity,
            "cart item added"
        );
        self.refresh();
        Ok(index)
    }

    /// Overwrite the quantity of the line at `index`.
    ///
    /// A quantity of zero or less removes the line.
    pub fn set_quantity(&mut self, index: usize, quantity: i64) -> Result<(), CommerceError> {
        if quantity <= 0 {
            return self.remove_item(index).map(|_| ());
        }

        let line = self
            .items
            .get_mut(index)
            .ok_or(CommerceError::ItemNotInCart(index))?;
        let previous = line.quantity;
        line.quantity = quantity;

        if !self.totals_fit() {
            self.items[index].quantity = previous;
            return Err(CommerceError::Overflow);
        }

        debug!(index, quantity, "cart quantity set");
        self.refresh();
        Ok(())
    }

    /// Add one unit to the line at `index`.
    pub fn increment(&mut self, index: usize) -> Result<(), CommerceError> {
        let quantity = self
            .quantity_at(index)?
            .checked_add(1)
            .ok_or(CommerceError::Overflow)?;
        self.set_quantity(index, quantity)
    }

    /// Take one unit off the line at `index`, removing it at zero.
    pub fn decrement(&mut self, index: usize) -> Result<(), CommerceError> {
        let quantity = self.quantity_at(index)?;
        self.set_quantity(index, quantity - 1)
    }

    /// Remove the line at `index`, keeping the order of the rest.
    pub fn remove_item(&mut self, index: usize) -> Result<LineItem, CommerceError> {
        if index >= self.items.len() {
            return Err(CommerceError::ItemNotInCart(index));
        }
        let removed = self.items.remove(index);
        debug!(index, name = %removed.name, "cart item removed");
        self.refresh();
        Ok(removed)
    }

    /// Finalize the cart.
    ///
    /// An empty cart is left untouched and reported as
    /// [`CheckoutOutcome::Empty`]. Otherwise the receipt carries the final
    /// total and the cart is cleared.
    pub fn checkout(&mut self) -> CheckoutOutcome {
        if self.items.is_empty() {
            info!("checkout attempted on an empty cart");
            return CheckoutOutcome::Empty;
        }

        let (total, total_items) = {
            let snapshot = self.snapshot();
            (snapshot.total_price, snapshot.total_items)
        };
        let receipt = Receipt {
            total,
            total_items,
            lines: std::mem::take(&mut self.items),
        };

        info!(
            total = %receipt.total,
            total_items = receipt.total_items,
            "checkout completed"
        );
        self.refresh();
        CheckoutOutcome::Completed(receipt)
    }

    /// Current contents and totals.
    pub fn snapshot(&self) -> CartSnapshot<'_> {
        CartSnapshot::of(&self.items, self.currency)
    }

    /// Line items in cart order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn quantity_at(&self, index: usize) -> Result<i64, CommerceError> {
        self.items
            .get(index)
            .map(|i| i.quantity)
            .ok_or(CommerceError::ItemNotInCart(index))
    }

    fn totals_fit(&self) -> bool {
        CartSnapshot::checked_totals(&self.items, self.currency).is_some()
    }

    fn refresh(&mut self) {
        let snapshot = CartSnapshot::of(&self.items, self.currency);
        for renderer in self.renderers.iter_mut() {
            renderer.render(&snapshot);
        }
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new(Currency::default())
    }
}

impl fmt::Debug for CartStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartStore")
            .field("items", &self.items)
            .field("currency", &self.currency)
            .field("renderers", &self.renderers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn usd(cents: i64) -> Money {
        Money::new(cents, Currency::USD)
    }

    fn names(cart: &CartStore) -> Vec<&str> {
        cart.items().iter().map(|i| i.name.as_str()).collect()
    }

    #[test]
    fn test_cart_creation() {
        let cart = CartStore::new(Currency::USD);
        assert!(cart.is_empty());
        let snapshot = cart.snapshot();
        assert_eq!(snapshot.total_items, 0);
        assert_eq!(snapshot.total_price, usd(0));
    }

    #[test]
    fn test_add_new_item_appends_with_quantity_one() {
        let mut cart = CartStore::new(Currency::USD);
        let index = cart
            .add_item("Wireless Headphones", usd(9999), "/img/a.jpg")
            .unwrap();

        assert_eq!(index, 0);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.items()[0].quantity, 1);
        assert_eq!(cart.items()[0].image_ref, "/img/a.jpg");
    }

    #[test]
    fn test_add_same_item_increases_quantity() {
        let mut cart = CartStore::new(Currency::USD);
        cart.add_item("Smart Watch", usd(19999), "/img/w.jpg").unwrap();
        cart.add_item("Laptop Stand", usd(4999), "/img/l.jpg").unwrap();
        let index = cart.add_item("Smart Watch", usd(19999), "/img/w.jpg").unwrap();

        assert_eq!(index, 0);
        assert_eq!(cart.len(), 2);
        assert_eq!(cart.items()[0].quantity, 2);
        assert_eq!(cart.snapshot().total_items, 3);
    }

    #[test]
    fn test_add_duplicate_keeps_first_price() {
        let mut cart = CartStore::new(Currency::USD);
        cart.add_item("Mug", usd(1000), "/a.jpg").unwrap();
        cart.add_item("Mug", usd(1500), "/b.jpg").unwrap();

        assert_eq!(cart.items()[0].unit_price, usd(1000));
        assert_eq!(cart.items()[0].image_ref, "/a.jpg");
        assert_eq!(cart.snapshot().total_price, usd(2000));
    }

    #[test]
    fn test_add_rejects_other_currency() {
        let mut cart = CartStore::new(Currency::USD);
        let err = cart
            .add_item("Mug", Money::new(1000, Currency::EUR), "/a.jpg")
            .unwrap_err();
        assert!(matches!(err, CommerceError::CurrencyMismatch { .. }));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity() {
        let mut cart = CartStore::new(Currency::USD);
        cart.add_item("Mug", usd(1000), "/a.jpg").unwrap();
        cart.set_quantity(0, 5).unwrap();

        assert_eq!(cart.items()[0].quantity, 5);
        assert_eq!(cart.snapshot().total_price, usd(5000));
    }

    #[test]
    fn test_set_quantity_zero_or_negative_removes() {
        for quantity in [0, -1] {
            let mut cart = CartStore::new(Currency::USD);
            cart.add_item("A", usd(100), "").unwrap();
            cart.add_item("B", usd(200), "").unwrap();

            cart.set_quantity(0, quantity).unwrap();
            assert_eq!(names(&cart), vec!["B"]);
        }
    }

    #[test]
    fn test_out_of_range_index_is_an_error() {
        let mut cart = CartStore::new(Currency::USD);
        cart.add_item("A", usd(100), "").unwrap();

        assert_eq!(cart.set_quantity(3, 2), Err(CommerceError::ItemNotInCart(3)));
        assert_eq!(cart.set_quantity(3, 0), Err(CommerceError::ItemNotInCart(3)));
        assert_eq!(
            cart.remove_item(1).unwrap_err(),
            CommerceError::ItemNotInCart(1)
        );
        assert_eq!(cart.items()[0].quantity, 1);
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut cart = CartStore::new(Currency::USD);
        for name in ["A", "B", "C", "D"] {
            cart.add_item(name, usd(100), "").unwrap();
        }

        let removed = cart.remove_item(1).unwrap();
        assert_eq!(removed.name, "B");
        assert_eq!(names(&cart), vec!["A", "C", "D"]);
    }

    #[test]
    fn test_increment_and_decrement() {
        let mut cart = CartStore::new(Currency::USD);
        cart.add_item("A", usd(100), "").unwrap();

        cart.increment(0).unwrap();
        assert_eq!(cart.items()[0].quantity, 2);

        cart.decrement(0).unwrap();
        cart.decrement(0).unwrap();
        assert!(cart.is_empty());
        assert_eq!(cart.decrement(0), Err(CommerceError::ItemNotInCart(0)));
    }

    #[test]
    fn test_overflowing_quantity_is_rolled_back() {
        let mut cart = CartStore::new(Currency::USD);
        cart.add_item("A", usd(100), "").unwrap();

        assert_eq!(cart.set_quantity(0, i64::MAX), Err(CommerceError::Overflow));
        assert_eq!(cart.items()[0].quantity, 1);
    }

    #[test]
    fn test_snapshot_stays_exact_after_rejected_overflow() {
        let mut cart = CartStore::new(Currency::USD);
        cart.add_item("A", usd(100), "").unwrap();
        cart.add_item("Huge", usd(i64::MAX - 100), "").unwrap();

        assert_eq!(cart.add_item("B", usd(1), ""), Err(CommerceError::Overflow));
        assert_eq!(cart.add_item("A", usd(100), ""), Err(CommerceError::Overflow));
        assert_eq!(cart.increment(1), Err(CommerceError::Overflow));

        let snapshot = cart.snapshot();
        assert_eq!(names(&cart), vec!["A", "Huge"]);
        assert_eq!(snapshot.total_items, 2);
        assert_eq!(snapshot.total_price, usd(i64::MAX));
    }

    #[test]
    fn test_checkout_reports_total_and_clears() {
        let mut cart = CartStore::new(Currency::USD);
        cart.add_item("Ten", usd(1000), "").unwrap();
        cart.set_quantity(0, 2).unwrap();
        cart.add_item("Five", usd(500), "").unwrap();

        match cart.checkout() {
            CheckoutOutcome::Completed(receipt) => {
                assert_eq!(receipt.total, usd(2500));
                assert_eq!(receipt.total_items, 3);
                assert_eq!(receipt.lines.len(), 2);
            }
            CheckoutOutcome::Empty => panic!("expected a completed checkout"),
        }
        assert!(cart.is_empty());
    }

    #[test]
    fn test_checkout_empty_cart() {
        let mut cart = CartStore::new(Currency::USD);
        assert_eq!(cart.checkout(), CheckoutOutcome::Empty);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_renderers_run_after_each_mutation() {
        let seen: Rc<RefCell<Vec<i64>>> = Rc::default();
        let mut cart = CartStore::new(Currency::USD);
        let sink = Rc::clone(&seen);
        cart.on_change(move |s| sink.borrow_mut().push(s.total_items));

        cart.add_item("A", usd(100), "").unwrap();
        cart.add_item("A", usd(100), "").unwrap();
        cart.set_quantity(0, 5).unwrap();
        let _ = cart.set_quantity(9, 1);
        cart.checkout();
        cart.checkout();

        // Failed set and empty checkout do not refresh.
        assert_eq!(*seen.borrow(), vec![1, 2, 5, 0]);
    }
}
