//! Product search over the cards shown on the page.

mod card;
mod query;

pub use card::ProductCard;
pub use query::{search_cards, SearchOutcome};
