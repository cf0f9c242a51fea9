//! Shared UI crate for Sentinel. The scan logic and every view live here; the
//! platform crates only launch it.

use dioxus::prelude::*;

/// Shared theme. Web links it as an asset; desktop embeds the same file inline.
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");

pub mod core;
pub mod i18n;
pub mod scan;
pub mod views;

pub mod components {
    pub mod app_header;
    pub use app_header::AppHeader;
}
