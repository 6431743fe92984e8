//! Storefront domain logic for ShopHub.
//!
//! - **Cart**: line items, quantities, totals, checkout
//! - **Search**: case-insensitive lookup over the product cards on a page
//! - **Newsletter**: email validation and signup
//! - **Notices**: messages for the shopper, returned as values
//!
//! # Example
//!
//! ```
//! use shophub_commerce::prelude::*;
//!
//! let mut cart = CartStore::new(Currency::USD);
//! cart.on_change(|snapshot| println!("{} items", snapshot.total_items));
//!
//! cart.add_item("Smart Watch", Money::new(1000, Currency::USD), "/img/watch.jpg")?;
//! cart.set_quantity(0, 2)?;
//! cart.add_item("Phone Case", Money::new(500, Currency::USD), "/img/case.jpg")?;
//!
//! let outcome = cart.checkout();
//! assert_eq!(outcome.notice().message, "Thank you for your purchase! Total: $25.00");
//! assert!(cart.is_empty());
//! # Ok::<(), CommerceError>(())
//! ```

pub mod cart;
pub mod error;
pub mod money;
pub mod newsletter;
pub mod notice;
pub mod search;

pub use error::CommerceError;
pub use money::{Currency, Money};
pub use notice::{Notice, NoticeLevel};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::cart::*;
    pub use crate::error::CommerceError;
    pub use crate::money::{Currency, Money};
    pub use crate::newsletter::{EmailAddress, Newsletter};
    pub use crate::notice::{Notice, NoticeLevel};
    pub use crate::search::*;
}
