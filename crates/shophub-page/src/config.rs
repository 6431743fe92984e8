//! Page configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use shophub_commerce::{CommerceError, Currency};

use crate::logging::LogFormat;

/// Storefront page configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageConfig {
    /// Cart settings.
    #[serde(default)]
    pub cart: CartConfig,

    /// Header scroll effect.
    #[serde(default)]
    pub header: HeaderConfig,

    /// Anchor navigation.
    #[serde(default)]
    pub scroll: ScrollConfig,

    /// Card fade-in.
    #[serde(default)]
    pub reveal: RevealConfig,

    /// Log output.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl PageConfig {
    /// Load config from a file. `.json` files are read as JSON, anything
    /// else as TOML.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        let config: Self = if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))?
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))?
        };

        config
            .validate()
            .with_context(|| format!("Invalid config: {}", path))?;
        Ok(config)
    }

    /// Check cross-field constraints.
    pub fn validate(&self) -> Result<(), CommerceError> {
        self.cart.currency()?;

        if self.header.hide_after_px < self.header.solid_after_px {
            return Err(CommerceError::InvalidConfig(format!(
                "header.hide_after_px ({}) must not be below header.solid_after_px ({})",
                self.header.hide_after_px, self.header.solid_after_px
            )));
        }

        if !(0.0..=1.0).contains(&self.reveal.threshold) {
            return Err(CommerceError::InvalidConfig(format!(
                "reveal.threshold must be within 0.0..=1.0, got {}",
                self.reveal.threshold
            )));
        }

        Ok(())
    }
}

/// Cart settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartConfig {
    /// ISO currency code for prices and totals.
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_currency() -> String {
    "USD".to_string()
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
        }
    }
}

impl CartConfig {
    pub fn currency(&self) -> Result<Currency, CommerceError> {
        Currency::from_code(&self.currency).ok_or_else(|| {
            CommerceError::InvalidConfig(format!("unknown currency code: {}", self.currency))
        })
    }
}

/// Header scroll thresholds, in pixels scrolled from the top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderConfig {
    /// Past this offset the header switches to its translucent style.
    #[serde(default = "default_solid_after")]
    pub solid_after_px: u32,
    /// Past this offset, scrolling down slides the header away.
    #[serde(default = "default_hide_after")]
    pub hide_after_px: u32,
}

fn default_solid_after() -> u32 {
    100
}

fn default_hide_after() -> u32 {
    200
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            solid_after_px: default_solid_after(),
            hide_after_px: default_hide_after(),
        }
    }
}

/// Anchor navigation settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrollConfig {
    /// Gap left between the header and the scrolled-to section.
    #[serde(default = "default_extra_offset")]
    pub extra_offset_px: u32,
}

fn default_extra_offset() -> u32 {
    20
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            extra_offset_px: default_extra_offset(),
        }
    }
}

/// Card fade-in settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RevealConfig {
    /// Fraction of a card that must be visible before it fades in.
    #[serde(default = "default_threshold")]
    pub threshold: f64,
}

fn default_threshold() -> f64 {
    0.1
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
        }
    }
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub format: LogFormat,
    /// `EnvFilter` directives used when `RUST_LOG` is unset.
    #[serde(default = "default_filter")]
    pub filter: String,
}

fn default_filter() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::default(),
            filter: default_filter(),
        }
    }
}
