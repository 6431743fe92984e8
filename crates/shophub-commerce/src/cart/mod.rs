//! Shopping cart module.
//!
//! Contains the cart store, its line items, snapshots handed to
//! renderers, and checkout outcomes.

mod checkout;
mod snapshot;
mod store;

pub use checkout::{CheckoutOutcome, Receipt};
pub use snapshot::{CartRenderer, CartSnapshot};
pub use store::{CartStore, LineItem};
