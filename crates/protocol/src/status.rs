//! Warranty status vocabulary.
//!
//! Record statuses are free-form strings. This module maps them onto the
//! fixed vocabulary the card knows how to style; anything outside that
//! vocabulary is kept as [`WarrantyStatus::Other`].

use serde::{Deserialize, Serialize};

/// The recognized warranty statuses.
///
/// Status is descriptive only: it is never derived from the record dates,
/// so a record can be `Active` while its expiry date lies in the past.
///
/// # Examples
///
/// ```
/// use wcard_protocol::WarrantyStatus;
///
/// assert_eq!(WarrantyStatus::classify("Active"), WarrantyStatus::Active);
/// assert_eq!(WarrantyStatus::classify("pending"), WarrantyStatus::Other);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WarrantyStatus {
    /// Coverage is in force.
    Active,
    /// Coverage has lapsed.
    Expired,
    /// A claim has been made against the warranty.
    Claimed,
    /// The warranty has been cancelled.
    Voided,
    /// Any status outside the known vocabulary.
    #[default]
    Other,
}

impl WarrantyStatus {
    /// All statuses of the known vocabulary, excluding [`WarrantyStatus::Other`].
    pub const KNOWN: [Self; 4] = [Self::Active, Self::Expired, Self::Claimed, Self::Voided];

    /// Classifies a free-form status string, ignoring case and surrounding whitespace.
    #[must_use]
    pub fn classify(status: &str) -> Self {
        let status = status.trim();
        Self::KNOWN
            .into_iter()
            .find(|known| known.as_str().eq_ignore_ascii_case(status))
            .unwrap_or(Self::Other)
    }

    /// Returns the canonical upper-case name, or `"OTHER"`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Expired => "EXPIRED",
            Self::Claimed => "CLAIMED",
            Self::Voided => "VOIDED",
            Self::Other => "OTHER",
        }
    }

    /// Returns `true` if the status is part of the known vocabulary.
    #[must_use]
    pub const fn is_known(self) -> bool {
        !matches!(self, Self::Other)
    }
}

impl std::fmt::Display for WarrantyStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
