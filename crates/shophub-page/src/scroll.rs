//! In-page anchor navigation.

use std::collections::HashMap;

use crate::config::ScrollConfig;

/// Computes where the page should scroll for `#section` links.
#[derive(Debug, Clone, Default)]
pub struct SmoothScroll {
    config: ScrollConfig,
    /// Section id (without `#`) to its distance from the page top.
    anchors: HashMap<String, u32>,
}

impl SmoothScroll {
    pub fn new(config: ScrollConfig) -> Self {
        Self {
            config,
            anchors: HashMap::new(),
        }
    }

    /// Register or move a section.
    pub fn set_anchor(&mut self, id: impl Into<String>, offset_top: u32) {
        self.anchors.insert(id.into(), offset_top);
    }

    /// Scroll position for following `href`, leaving room for the header.
    ///
    /// Returns None for links that are not `#`-prefixed or whose target is
    /// not on the page.
    pub fn target_for(&self, href: &str, header_height: u32) -> Option<u32> {
        let id = href.strip_prefix('#')?;
        let offset_top = *self.anchors.get(id)?;
        Some(
            offset_top
                .saturating_sub(header_height)
                .saturating_sub(self.config.extra_offset_px),
        )
    }
}
