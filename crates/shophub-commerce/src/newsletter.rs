//! Newsletter signup.

use crate::error::CommerceError;
use crate::notice::Notice;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{info, warn};

/// An email address in `local@domain.tld` shape.
///
/// ## Constraints
///
/// - No whitespace anywhere
/// - Exactly one `@`, with a non-empty local part before it
/// - The domain contains a `.` with at least one character on each side
///
/// ```
/// use shophub_commerce::newsletter::EmailAddress;
///
/// assert!(EmailAddress::parse("shopper@example.com").is_ok());
/// assert!(EmailAddress::parse("a@b.co.uk").is_ok());
///
/// assert!(EmailAddress::parse("no-at-symbol").is_err());
/// assert!(EmailAddress::parse("user@localhost").is_err());
/// assert!(EmailAddress::parse("two words@example.com").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Parse an address, rejecting anything outside the shape above.
    pub fn parse(s: &str) -> Result<Self, CommerceError> {
        if s.is_empty() {
            return Err(CommerceError::InvalidEmail("empty".to_string()));
        }
        if s.chars().any(char::is_whitespace) {
            return Err(CommerceError::InvalidEmail(
                "contains whitespace".to_string(),
            ));
        }

        let (local, domain) = s
            .split_once('@')
            .ok_or_else(|| CommerceError::InvalidEmail("missing @".to_string()))?;

        if local.is_empty() {
            return Err(CommerceError::InvalidEmail("empty local part".to_string()));
        }
        if domain.contains('@') {
            return Err(CommerceError::InvalidEmail("more than one @".to_string()));
        }

        // Some dot must have a label before it and something after it.
        let has_dotted_domain = domain
            .char_indices()
            .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len());
        if !has_dotted_domain {
            return Err(CommerceError::InvalidEmail(
                "domain needs a dot-separated suffix".to_string(),
            ));
        }

        Ok(Self(s.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Newsletter signup form state.
#[derive(Debug, Clone, Default)]
pub struct Newsletter {
    input: String,
    subscribers: Vec<EmailAddress>,
}

impl Newsletter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text currently in the email field.
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, value: impl Into<String>) {
        self.input = value.into();
    }

    /// Addresses signed up during this session, in signup order.
    pub fn subscribers(&self) -> &[EmailAddress] {
        &self.subscribers
    }

    /// Submit the current input.
    pub fn submit(&mut self) -> Notice {
        let input = self.input.clone();
        self.subscribe(&input)
    }

    /// Sign up `email`.
    ///
    /// An invalid address leaves the form untouched. A valid one is
    /// recorded once and clears the input field.
    pub fn subscribe(&mut self, email: &str) -> Notice {
        match EmailAddress::parse(email) {
            Ok(address) => {
                info!(email = %address, "newsletter signup");
                if !self.subscribers.contains(&address) {
                    self.subscribers.push(address);
                }
                self.input.clear();
                Notice::success("Thank you for subscribing to our newsletter!")
            }
            Err(e) => {
                warn!(error = %e, "newsletter signup rejected");
                Notice::warning("Please enter a valid email address")
            }
        }
    }
}
