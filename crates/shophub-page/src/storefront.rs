//! Storefront page controller.
//!
//! Owns the cart and every page widget for one page session. The host
//! binds DOM events to [`PageEvent`] values and applies the returned
//! [`Effects`]; nothing here reaches for globals.

use std::cell::{Ref, RefCell};
use std::rc::Rc;

use shophub_commerce::cart::{CartSnapshot, CartStore};
use shophub_commerce::newsletter::Newsletter;
use shophub_commerce::search::{search_cards, ProductCard};
use shophub_commerce::{CommerceError, Notice};
use tracing::{debug, warn};

use crate::cart_view::{CartModal, CartView, CartViewRenderer, LineAction};
use crate::config::PageConfig;
use crate::header::{HeaderScroll, HeaderState};
use crate::menu::MobileMenu;
use crate::reveal::RevealTracker;
use crate::scroll::SmoothScroll;

/// A user interaction the page forwards to the controller.
#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    /// "Add to cart" on the product card at this index.
    AddToCart(usize),
    /// Cart icon clicked.
    OpenCart,
    /// Modal close button clicked.
    CloseCart,
    /// Click inside the modal overlay.
    BackdropClick { on_backdrop: bool },
    /// A `+`, `-` or remove button on a cart line.
    Line { action: LineAction, index: usize },
    /// Checkout button clicked.
    Checkout,
    /// Mobile menu toggle clicked.
    ToggleMenu,
    /// A navigation menu link was followed.
    NavLinkClicked,
    /// An in-page link was clicked.
    AnchorClicked { href: String, header_height: u32 },
    /// Search submitted.
    Search(String),
    /// Newsletter form submitted.
    Subscribe(String),
    /// Page scrolled to this offset.
    Scrolled(u32),
    /// "Quick view" on the product card at this index.
    QuickView(usize),
    /// Visible fraction of a product or category card changed.
    CardVisibility { card: usize, ratio: f64 },
}

/// What the host should do after an event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Effects {
    /// Messages to show the shopper.
    pub notices: Vec<Notice>,
    /// Scroll the window to this offset.
    pub scroll_to: Option<u32>,
    /// Product cards to highlight.
    pub highlight: Vec<usize>,
}

impl Effects {
    fn notice(notice: Notice) -> Self {
        Self {
            notices: vec![notice],
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.notices.is_empty() && self.scroll_to.is_none() && self.highlight.is_empty()
    }
}

/// One storefront page session.
pub struct Storefront {
    cards: Vec<ProductCard>,
    cart: CartStore,
    view: Rc<RefCell<CartView>>,
    modal: CartModal,
    menu: MobileMenu,
    header: HeaderScroll,
    scroll: SmoothScroll,
    reveal: RevealTracker,
    newsletter: Newsletter,
}

impl Storefront {
    /// Build a page session over the product cards shown on the page.
    pub fn new(config: &PageConfig, cards: Vec<ProductCard>) -> Result<Self, CommerceError> {
        config.validate()?;

        let view = Rc::new(RefCell::new(CartView::default()));
        let mut cart = CartStore::new(config.cart.currency()?);
        cart.subscribe(CartViewRenderer(Rc::clone(&view)));

        debug!(cards = cards.len(), currency = %cart.currency(), "storefront ready");

        Ok(Self {
            cards,
            cart,
            view,
            modal: CartModal::default(),
            menu: MobileMenu::default(),
            header: HeaderScroll::new(config.header),
            scroll: SmoothScroll::new(config.scroll),
            reveal: RevealTracker::new(config.reveal),
            newsletter: Newsletter::new(),
        })
    }

    /// Register an in-page section for anchor navigation.
    pub fn set_anchor(&mut self, id: impl Into<String>, offset_top: u32) {
        self.scroll.set_anchor(id, offset_top);
    }

    /// Dispatch one interaction.
    pub fn handle(&mut self, event: PageEvent) -> Effects {
        match event {
            PageEvent::AddToCart(card) => self.add_to_cart(card),
            PageEvent::OpenCart => {
                self.modal.open();
                Effects::default()
            }
            PageEvent::CloseCart => {
                self.modal.close();
                Effects::default()
            }
            PageEvent::BackdropClick { on_backdrop } => {
                self.modal.backdrop_click(on_backdrop);
                Effects::default()
            }
            PageEvent::Line { action, index } => self.line_action(action, index),
            PageEvent::Checkout => {
                let outcome = self.cart.checkout();
                if outcome.is_completed() {
                    self.modal.close();
                }
                Effects::notice(outcome.notice())
            }
            PageEvent::ToggleMenu => {
                self.menu.toggle();
                Effects::default()
            }
            PageEvent::NavLinkClicked => {
                self.menu.link_clicked();
                Effects::default()
            }
            PageEvent::AnchorClicked {
                href,
                header_height,
            } => Effects {
                scroll_to: self.scroll.target_for(&href, header_height),
                ..Effects::default()
            },
            PageEvent::Search(query) => {
                let outcome = search_cards(&self.cards, &query);
                Effects {
                    notices: outcome.notice().into_iter().collect(),
                    highlight: outcome.matches().to_vec(),
                    ..Effects::default()
                }
            }
            PageEvent::Subscribe(email) => {
                self.newsletter.set_input(email);
                Effects::notice(self.newsletter.submit())
            }
            PageEvent::Scrolled(y) => {
                self.header.on_scroll(y);
                Effects::default()
            }
            PageEvent::QuickView(card) => match self.cards.get(card) {
                Some(card) => Effects::notice(Notice::info(format!(
                    "Quick view for {} - This would open a product detail modal \
                     in a real application.",
                    card.name
                ))),
                None => {
                    warn!(card, "quick view for unknown card");
                    Effects::default()
                }
            },
            PageEvent::CardVisibility { card, ratio } => {
                self.reveal.observe(card, ratio);
                Effects::default()
            }
        }
    }

    fn add_to_cart(&mut self, card: usize) -> Effects {
        let Some(product) = self.cards.get(card) else {
            warn!(card, "add to cart for unknown card");
            return Effects::default();
        };

        if let Err(e) = self.cart.add_item(
            product.name.clone(),
            product.price,
            product.image_ref.clone(),
        ) {
            warn!(card, error = %e, "add to cart rejected");
        }
        Effects::default()
    }

    fn line_action(&mut self, action: LineAction, index: usize) -> Effects {
        let result = match action {
            LineAction::Increment => self.cart.increment(index),
            LineAction::Decrement => self.cart.decrement(index),
            LineAction::Remove => self.cart.remove_item(index).map(|_| ()),
        };
        if let Err(e) = result {
            warn!(action = action.as_str(), index, error = %e, "cart line action rejected");
        }
        Effects::default()
    }

    pub fn cards(&self) -> &[ProductCard] {
        &self.cards
    }

    pub fn cart(&self) -> CartSnapshot<'_> {
        self.cart.snapshot()
    }

    /// Badge, total and modal body as last rendered.
    pub fn cart_view(&self) -> Ref<'_, CartView> {
        self.view.borrow()
    }

    pub fn modal(&self) -> CartModal {
        self.modal
    }

    pub fn menu(&self) -> MobileMenu {
        self.menu
    }

    pub fn header(&self) -> HeaderState {
        self.header.state()
    }

    pub fn reveal(&self) -> &RevealTracker {
        &self.reveal
    }

    pub fn newsletter(&self) -> &Newsletter {
        &self.newsletter
    }
}
