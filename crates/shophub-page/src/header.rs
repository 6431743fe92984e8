//! Header style while the page scrolls.

use crate::config::HeaderConfig;

/// How the header should be drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeaderState {
    /// Translucent blurred background instead of plain white.
    pub solid: bool,
    /// Slid out of view above the page.
    pub hidden: bool,
}

/// Tracks scroll position to decide the header style.
#[derive(Debug, Clone)]
pub struct HeaderScroll {
    config: HeaderConfig,
    last_y: u32,
    state: HeaderState,
}

impl HeaderScroll {
    pub fn new(config: HeaderConfig) -> Self {
        Self {
            config,
            last_y: 0,
            state: HeaderState::default(),
        }
    }

    pub fn state(&self) -> HeaderState {
        self.state
    }

    /// Record a new scroll offset and return the resulting header state.
    ///
    /// The header hides only while scrolling down past `hide_after_px`;
    /// any upward movement brings it back.
    pub fn on_scroll(&mut self, y: u32) -> HeaderState {
        self.state = HeaderState {
            solid: y > self.config.solid_after_px,
            hidden: y > self.last_y && y > self.config.hide_after_px,
        };
        self.last_y = y;
        self.state
    }
}

impl Default for HeaderScroll {
    fn default() -> Self {
        Self::new(HeaderConfig::default())
    }
}
