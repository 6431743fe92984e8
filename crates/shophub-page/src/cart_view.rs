//! Cart badge, cart modal and modal body markup.

use std::cell::RefCell;
use std::rc::Rc;

use shophub_commerce::cart::{CartRenderer, CartSnapshot, LineItem};

/// Buttons inside a cart line.
///
/// Rendered as `data-action` attributes; the page's click handler maps
/// them back to cart operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineAction {
    Decrement,
    Increment,
    Remove,
}

impl LineAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineAction::Decrement => "decrement",
            LineAction::Increment => "increment",
            LineAction::Remove => "remove",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "decrement" => Some(LineAction::Decrement),
            "increment" => Some(LineAction::Increment),
            "remove" => Some(LineAction::Remove),
            _ => None,
        }
    }
}

/// What the page shows for the cart: header badge, modal total and modal
/// body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartView {
    /// Text of the item-count badge.
    pub count_text: String,
    /// Two-decimal total shown in the modal footer.
    pub total_text: String,
    /// Inner HTML of the modal's item list.
    pub items_html: String,
}

impl Default for CartView {
    fn default() -> Self {
        Self {
            count_text: "0".to_string(),
            total_text: "0.00".to_string(),
            items_html: render_cart_items(&[]),
        }
    }
}

impl CartView {
    /// Refresh every field from a snapshot.
    pub fn update(&mut self, snapshot: &CartSnapshot<'_>) {
        self.count_text = snapshot.total_items.to_string();
        self.total_text = snapshot.total_price.display_amount();
        self.items_html = render_cart_items(snapshot.items);
    }
}

/// Cart renderer that writes into a shared [`CartView`].
#[derive(Debug, Clone)]
pub struct CartViewRenderer(pub Rc<RefCell<CartView>>);

impl CartRenderer for CartViewRenderer {
    fn render(&mut self, snapshot: &CartSnapshot<'_>) {
        self.0.borrow_mut().update(snapshot);
    }
}

/// Cart modal visibility.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CartModal {
    open: bool,
}

impl CartModal {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Page scrolling is locked while the modal is open.
    pub fn scroll_locked(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Handle a click inside the modal overlay. Only a click on the
    /// backdrop itself closes it.
    pub fn backdrop_click(&mut self, on_backdrop: bool) {
        if on_backdrop {
            self.close();
        }
    }
}

/// Render the modal's item list.
pub fn render_cart_items(items: &[LineItem]) -> String {
    if items.is_empty() {
        return r#"<p class="cart-empty">Your cart is empty</p>"#.to_string();
    }

    items
        .iter()
        .enumerate()
        .map(|(index, item)| render_cart_item(index, item))
        .collect()
}

fn render_cart_item(index: usize, item: &LineItem) -> String {
    format!(
        r#"<div class="cart-item" data-index="{index}">
    <img src="{image}" alt="{name}">
    <div class="cart-item-info">
        <h4>{name}</h4>
        <p class="cart-item-price">{price}</p>
    </div>
    <div class="cart-item-controls">
        <button data-action="{dec}" data-index="{index}">-</button>
        <span class="cart-item-quantity">{quantity}</span>
        <button data-action="{inc}" data-index="{index}">+</button>
        <button class="cart-item-remove" data-action="{rm}" data-index="{index}">&times;</button>
    </div>
</div>"#,
        index = index,
        image = html_escape(&item.image_ref),
        name = html_escape(&item.name),
        price = html_escape(&item.unit_price.display()),
        quantity = item.quantity,
        dec = LineAction::Decrement.as_str(),
        inc = LineAction::Increment.as_str(),
        rm = LineAction::Remove.as_str(),
    )
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
