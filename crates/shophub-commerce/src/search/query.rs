//! Text search across product cards.

use crate::notice::Notice;
use crate::search::ProductCard;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Result of a product search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchOutcome {
    /// The query was empty or whitespace; nothing to do.
    Blank,
    /// Indices of matching cards, in page order.
    Matches(Vec<usize>),
    /// No card matched the (trimmed) query.
    NoMatch(String),
}

impl SearchOutcome {
    /// Message to show the shopper, if any.
    pub fn notice(&self) -> Option<Notice> {
        match self {
            SearchOutcome::NoMatch(query) => {
                Some(Notice::info(format!("No products found for \"{}\"", query)))
            }
            _ => None,
        }
    }

    /// Matching card indices (empty unless [`SearchOutcome::Matches`]).
    pub fn matches(&self) -> &[usize] {
        match self {
            SearchOutcome::Matches(indices) => indices,
            _ => &[],
        }
    }
}

/// Find cards whose name contains `query`, case-insensitively.
pub fn search_cards(cards: &[ProductCard], query: &str) -> SearchOutcome {
    let query = query.trim();
    if query.is_empty() {
        return SearchOutcome::Blank;
    }

    let needle = query.to_lowercase();
    let matches: Vec<usize> = cards
        .iter()
        .enumerate()
        .filter(|(_, card)| card.matches(&needle))
        .map(|(index, _)| index)
        .collect();

    debug!(query, hits = matches.len(), "product search");

    if matches.is_empty() {
        SearchOutcome::NoMatch(query.to_string())
    } else {
        SearchOutcome::Matches(matches)
    }
}
