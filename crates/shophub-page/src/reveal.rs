//! Fade-in of product and category cards as they scroll into view.

use std::collections::BTreeSet;

use crate::config::RevealConfig;

/// Which cards have been revealed.
///
/// Cards start hidden and fade in the first time enough of them is
/// visible. A revealed card stays revealed.
#[derive(Debug, Clone)]
pub struct RevealTracker {
    threshold: f64,
    revealed: BTreeSet<usize>,
}

impl RevealTracker {
    pub fn new(config: RevealConfig) -> Self {
        Self {
            threshold: config.threshold,
            revealed: BTreeSet::new(),
        }
    }

    /// Report the visible fraction of card `card`. Returns true when this
    /// observation revealed it.
    pub fn observe(&mut self, card: usize, ratio: f64) -> bool {
        if ratio > 0.0 && ratio >= self.threshold {
            self.revealed.insert(card)
        } else {
            false
        }
    }

    pub fn is_revealed(&self, card: usize) -> bool {
        self.revealed.contains(&card)
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed.len()
    }
}

impl Default for RevealTracker {
    fn default() -> Self {
        Self::new(RevealConfig::default())
    }
}
