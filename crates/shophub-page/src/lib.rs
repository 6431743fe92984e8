//! Presentation layer for the ShopHub storefront page.
//!
//! This crate provides:
//! - `Storefront` - page controller owning the cart and every widget
//! - `PageConfig` - thresholds and settings loaded from TOML or JSON
//! - `CartView` / `CartModal` - badge, totals and modal markup
//! - `MobileMenu`, `HeaderScroll`, `SmoothScroll`, `RevealTracker` - page widgets
//! - `init_logging` - `tracing` subscriber setup

mod cart_view;
mod config;
mod header;
mod logging;
mod menu;
mod reveal;
mod scroll;
mod storefront;

pub use cart_view::*;
pub use config::*;
pub use header::*;
pub use logging::*;
pub use menu::*;
pub use reveal::*;
pub use scroll::*;
pub use storefront::*;

// Re-export the domain crate for hosts that only depend on this one
pub use shophub_commerce;
