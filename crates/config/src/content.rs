//! Default card copy and record fallbacks.
//!
//! [`CardContent`] carries every piece of text the card shows that does not
//! come from the record itself: fallback paragraphs for missing descriptive
//! fields, fallback provenance names, and the static lists on the coverage
//! and terms tabs.

use serde::{Deserialize, Serialize};
use wcard_protocol::WarrantyRecord;

use crate::error::{ConfigError, Result};

/// Copy used by the warranty card.
///
/// All fields default individually, so a config file only needs to name the
/// ones it overrides.
///
/// # Examples
///
/// ```
/// use wcard_config::CardContent;
/// use wcard_protocol::dummy::sample_record;
///
/// let content = CardContent::default();
/// let record = sample_record();
///
/// // The sample record carries no coverage text, so the default applies
/// assert_eq!(content.coverage_for(&record), content.default_coverage);
/// assert_eq!(content.coverage_categories.len(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardContent {
    /// Shown on the coverage tab when the record has no coverage text.
    pub default_coverage: String,
    /// Shown on the coverage tab when the record has no exclusions text.
    pub default_exclusions: String,
    /// Shown on the terms tab when the record has no terms text.
    pub default_terms: String,
    /// Issuer shown in the footer when the record names no seller.
    pub default_issuer: String,
    /// Location shown in the footer when the record names no location.
    pub default_location: String,
    /// Illustrative coverage categories listed on the coverage tab.
    pub coverage_categories: Vec<String>,
    /// Boilerplate clauses listed, numbered, on the terms tab.
    pub terms_clauses: Vec<String>,
}

impl Default for CardContent {
    fn default() -> Self {
        Self {
            default_coverage: "This warranty covers defects in materials and workmanship \
                under normal use for the full warranty period."
                .to_string(),
            default_exclusions: "Accidental damage, misuse, unauthorized repairs, \
                and normal wear and tear are not covered."
                .to_string(),
            default_terms: "This warranty is valid only when presented with the \
                original proof of purchase."
                .to_string(),
            default_issuer: "Authorized Dealer".to_string(),
            default_location: "Main Store".to_string(),
            coverage_categories: vec![
                "Manufacturing defects".to_string(),
                "Hardware failures".to_string(),
                "Replacement parts".to_string(),
                "Repair labor".to_string(),
            ],
            terms_clauses: vec![
                "The warranty is non-transferable and applies to the original purchaser only."
                    .to_string(),
                "Claims must be submitted before the expiry date shown on this card.".to_string(),
                "Repairs or replacements do not extend the original warranty period."
                    .to_string(),
                "Opening or modifying the product voids this warranty.".to_string(),
                "The issuer may repair, replace, or refund the product at its discretion."
                    .to_string(),
            ],
        }
    }
}

impl CardContent {
    /// Returns the record's coverage text, or the default paragraph.
    #[must_use]
    pub fn coverage_for<'a>(&'a self, record: &'a WarrantyRecord) -> &'a str {
        non_blank(record.coverage.as_deref()).unwrap_or(&self.default_coverage)
    }

    /// Returns the record's exclusions text, or the default paragraph.
    #[must_use]
    pub fn exclusions_for<'a>(&'a self, record: &'a WarrantyRecord) -> &'a str {
        non_blank(record.exclusions.as_deref()).unwrap_or(&self.default_exclusions)
    }

    /// Returns the record's terms text, or the default paragraph.
    #[must_use]
    pub fn terms_for<'a>(&'a self, record: &'a WarrantyRecord) -> &'a str {
        non_blank(record.terms.as_deref()).unwrap_or(&self.default_terms)
    }

    /// Returns the record's seller name, or the default issuer.
    #[must_use]
    pub fn issuer_for<'a>(&'a self, record: &'a WarrantyRecord) -> &'a str {
        non_blank(record.issuer_name()).unwrap_or(&self.default_issuer)
    }

    /// Returns the record's location name, or the default location.
    #[must_use]
    pub fn location_for<'a>(&'a self, record: &'a WarrantyRecord) -> &'a str {
        non_blank(record.location_name()).unwrap_or(&self.default_location)
    }

    /// Validates that every fallback is displayable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidContent`] if a default string is blank or
    /// a static list is empty or contains a blank entry.
    pub fn validate(&self) -> Result<()> {
        let strings = [
            ("default_coverage", &self.default_coverage),
            ("default_exclusions", &self.default_exclusions),
            ("default_terms", &self.default_terms),
            ("default_issuer", &self.default_issuer),
            ("default_location", &self.default_location),
        ];
        for (field, value) in strings {
            if value.trim().is_empty() {
                return Err(ConfigError::InvalidContent {
                    field,
                    reason: "must not be blank".to_string(),
                });
            }
        }

        let lists = [
            ("coverage_categories", &self.coverage_categories),
            ("terms_clauses", &self.terms_clauses),
        ];
        for (field, items) in lists {
            if items.is_empty() {
                return Err(ConfigError::InvalidContent {
                    field,
                    reason: "must list at least one entry".to_string(),
                });
            }
            if let Some(position) = items.iter().position(|item| item.trim().is_empty()) {
                return Err(ConfigError::InvalidContent {
                    field,
                    reason: format!("entry {} is blank", position + 1),
                });
            }
        }

        Ok(())
    }
}

/// Treats blank record text the same as missing text.
fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
