//! Error types for protocol operations.

/// Errors that can occur while interpreting date-like record fields.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateParseError {
    /// The input was empty or only whitespace.
    #[error("date value is empty")]
    Empty,

    /// The input did not match any accepted date or date-time layout.
    #[error("unrecognized date value: {0:?}")]
    Unrecognized(String),
}

/// A specialized Result type for protocol operations.
pub type Result<T> = std::result::Result<T, DateParseError>;
