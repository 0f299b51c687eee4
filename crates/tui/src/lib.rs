//! Terminal UI for the wcard application.
//!
//! This crate provides a Ratatui-based modal that presents a single warranty
//! record as a card with tabs, status styling, and action buttons.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`app`]: Host application struct and run loop
//! - [`component`]: The mounted card, routing messages to state or actions
//! - [`state`]: Card-local UI state (active tab, code panel)
//! - [`actions`]: Host-supplied close, download, print, and share handlers
//! - [`clock`]: Injectable time source
//! - [`layout`]: Card geometry and click hit-testing
//! - [`widgets`]: Rendering
//! - [`terminal`]: Terminal setup, teardown, and panic handling
//! - [`event`]: Event handling and key mappings
//!
//! # Example
//!
//! ```no_run
//! use wcard_config::CardContent;
//! use wcard_protocol::dummy::sample_record;
//! use wcard_tui::{App, CardActions, terminal};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     terminal::install_panic_hook();
//!     let mut terminal = terminal::setup_terminal()?;
//!
//!     let actions = CardActions::new().on_print(|| eprintln!("print requested"));
//!     let mut app = App::new(sample_record(), CardContent::default(), actions);
//!     let result = app.run(&mut terminal).await;
//!
//!     terminal::restore_terminal(&mut terminal)?;
//!     result
//! }
//! ```

pub mod actions;
pub mod app;
pub mod clock;
pub mod component;
pub mod event;
pub mod layout;
pub mod state;
pub mod terminal;
pub mod widgets;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-export primary types at crate root for convenience
pub use actions::CardActions;
pub use app::App;
pub use clock::{Clock, FixedClock, SystemClock};
pub use component::WarrantyCard;
pub use layout::{ActionButton, CardLayout};
pub use state::CardState;
pub use widgets::CardProps;
