//! Configuration management for the wcard application.
//!
//! This crate holds the copy that the warranty card falls back to when a
//! record leaves a descriptive field empty, along with the static lists shown
//! on the coverage and terms tabs. Keeping this text here leaves the view
//! free of embedded business copy.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`config`]: Core configuration struct and loading logic
//! - [`content`]: Default card copy and record fallbacks
//! - [`persistence`]: Config file reading and writing
//! - [`error`]: Error types for configuration operations
//!
//! # Configuration Sources (Priority)
//!
//! 1. An explicit path passed to [`Config::load_from`]
//! 2. Local config (`./wcard.json5` or `./wcard.json`)
//! 3. User config (`~/.config/wcard/config.json5` or `~/.config/wcard/config.json`)
//! 4. Built-in defaults
//!
//! # File Format
//!
//! ```json5
//! {
//!   content: {
//!     // Shown when a record carries no seller
//!     default_issuer: "Acme Service Desk",
//!     coverage_categories: ["Screens", "Batteries", "Ports", "Labor"],
//!   },
//! }
//! ```
//!
//! Every field is optional; omitted ones keep their built-in default.
//!
//! # Examples
//!
//! ```no_run
//! use wcard_config::Config;
//!
//! # fn example() -> wcard_config::Result<()> {
//! let config = Config::load()?;
//! println!("Default issuer: {}", config.content.default_issuer);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod content;
pub mod error;
pub mod persistence;

// Re-export primary types at crate root for convenience
pub use config::Config;
pub use content::CardContent;
pub use error::{ConfigError, Result};
