//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in storefront operations.
///
/// User-facing conditions such as an empty cart at checkout are not
/// errors; they are reported as [`crate::Notice`] values.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CommerceError {
    /// No cart line at the given position.
    #[error("Item not in cart: no line at index {0}")]
    ItemNotInCart(usize),

    /// Price currency differs from the cart currency.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,

    /// Malformed email address.
    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    /// Page or cart configuration rejected.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
