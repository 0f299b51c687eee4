//! Shared protocol types for the wcard application.
//!
//! This crate defines the core types used across all wcard components,
//! including the warranty record, status vocabulary, date handling, and
//! the messages exchanged between the input handler and the card view.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`record`]: The `WarrantyRecord` struct and its derived values
//! - [`status`]: Case-insensitive classification of warranty statuses
//! - [`date`]: Parsing and long-form formatting of date-like strings
//! - [`message`]: TUI event messages and card tabs
//! - [`error`]: Error types for protocol operations
//! - [`dummy`]: A sample record for demos and tests
//!
//! # Examples
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use wcard_protocol::{WarrantyRecord, WarrantyStatus};
//!
//! let record = WarrantyRecord::new(
//!     "WRN-2024-0156",
//!     "active",
//!     "Sarah Johnson",
//!     "+1 (555) 123-4567",
//!     "MacBook Pro",
//!     "2024-01-15",
//!     "2026-01-15",
//!     24,
//! );
//!
//! assert_eq!(record.status_kind(), WarrantyStatus::Active);
//!
//! let now = Utc.with_ymd_and_hms(2025, 12, 16, 0, 0, 0).unwrap();
//! assert_eq!(record.effective_days_remaining(now), Some(30));
//! assert!(record.is_expiring_soon(now));
//! ```

pub mod date;
pub mod dummy;
pub mod error;
pub mod message;
pub mod record;
pub mod status;

// Re-export primary types at crate root for convenience
pub use date::{INVALID_DATE, format_date, format_datetime, parse_date};
pub use error::{DateParseError, Result};
pub use message::{CardTab, Message};
pub use record::{
    EXPIRING_SOON_DAYS, Location, Sale, Seller, WarrantyRecord, days_until, is_expired_days,
    is_expiring_soon_days,
};
pub use status::WarrantyStatus;
