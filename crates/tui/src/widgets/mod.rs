//! Widget components for the wcard TUI.
//!
//! Each widget is a pure function that renders its inputs to a buffer, which
//! keeps rendering easy to test and compose.
//!
//! # Modules
//!
//! - [`card`]: The warranty card modal and its tab content builders
//! - [`style`]: Status-driven accent colors
//! - [`help`]: The key binding overlay
//!
//! # Color Coding
//!
//! Cards are tinted by [`status_style`]; the days-remaining badge turns
//! amber ([`EXPIRING_SOON_COLOR`]) within the last 30 days of coverage.

pub mod card;
pub mod help;
pub mod style;

// Re-export primary rendering functions for convenience
pub use card::{
    CardProps, EXPIRED_ICON, STATUS_ICON, barcode_strip, coverage_lines, days_badge_text,
    optional_product_fields, overview_lines, render_warranty_card, status_badge_text, terms_lines,
};
pub use help::render_help_overlay;
pub use style::{EXPIRED_COLOR, EXPIRING_SOON_COLOR, StatusStyle, status_style, status_style_for};

#[cfg(test)]
mod tests;
