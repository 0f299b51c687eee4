//! The warranty record displayed by the card.
//!
//! A [`WarrantyRecord`] is owned by whoever hosts the card and is passed in
//! by reference for every render; nothing in wcard mutates it. Field names
//! serialize in camelCase so records exported by web back-ends load as-is.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::date::parse_date;
use crate::error::Result;
use crate::status::WarrantyStatus;

/// Upper bound (inclusive) of the "expiring soon" window, in days.
pub const EXPIRING_SOON_DAYS: i64 = 30;

const MILLIS_PER_DAY: i64 = 86_400_000;

/// Where the warranty was issued.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// Display name of the issuing location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// The person who sold the covered product.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seller {
    /// Display name of the seller.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// The sale the warranty was attached to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
    /// Who sold the product.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sold_by: Option<Seller>,
}

/// A warranty record as supplied by the host.
///
/// # Examples
///
/// ```
/// use wcard_protocol::WarrantyRecord;
///
/// let json = r#"{
///     "warrantyNumber": "WRN-2024-0156",
///     "status": "ACTIVE",
///     "customerName": "Sarah Johnson",
///     "customerPhone": "+1 (555) 123-4567",
///     "productName": "MacBook Pro",
///     "startDate": "2024-01-15",
///     "expiryDate": "2026-01-15",
///     "warrantyMonths": 24,
///     "daysRemaining": 403
/// }"#;
///
/// let record: WarrantyRecord = serde_json::from_str(json).unwrap();
/// assert_eq!(record.days_remaining, Some(403));
/// assert!(record.customer_email.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WarrantyRecord {
    /// Opaque identifier assigned by the record's source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Human-readable warranty number, displayed verbatim.
    pub warranty_number: String,
    /// Free-form status; see [`WarrantyStatus::classify`].
    pub status: String,

    /// Customer name.
    pub customer_name: String,
    /// Customer phone number.
    pub customer_phone: String,
    /// Customer email address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_email: Option<String>,

    /// Covered product name.
    pub product_name: String,
    /// Internal product code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_code: Option<String>,
    /// Product stock-keeping unit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_sku: Option<String>,
    /// Serial number of the covered unit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,
    /// Kind of warranty, e.g. `MANUFACTURER` or `EXTENDED`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warranty_type: Option<String>,

    /// Start of coverage (date-like string).
    pub start_date: String,
    /// End of coverage (date-like string).
    pub expiry_date: String,
    /// Coverage duration in months.
    pub warranty_months: u32,
    /// Precomputed days remaining; used verbatim when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days_remaining: Option<i64>,

    /// What the warranty covers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coverage: Option<String>,
    /// What the warranty does not cover.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclusions: Option<String>,
    /// Terms and conditions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terms: Option<String>,

    /// Issuing location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    /// Sale the warranty belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sale: Option<Sale>,
}

impl WarrantyRecord {
    /// Creates a record with all required fields and no optional ones.
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub fn new(
        warranty_number: impl Into<String>,
        status: impl Into<String>,
        customer_name: impl Into<String>,
        customer_phone: impl Into<String>,
        product_name: impl Into<String>,
        start_date: impl Into<String>,
        expiry_date: impl Into<String>,
        warranty_months: u32,
    ) -> Self {
        Self {
            id: None,
            warranty_number: warranty_number.into(),
            status: status.into(),
            customer_name: customer_name.into(),
            customer_phone: customer_phone.into(),
            customer_email: None,
            product_name: product_name.into(),
            product_code: None,
            product_sku: None,
            serial_number: None,
            warranty_type: None,
            start_date: start_date.into(),
            expiry_date: expiry_date.into(),
            warranty_months,
            days_remaining: None,
            coverage: None,
            exclusions: None,
            terms: None,
            location: None,
            sale: None,
        }
    }

    /// Sets the opaque identifier.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets the customer email.
    #[must_use]
    pub fn with_customer_email(mut self, email: impl Into<String>) -> Self {
        self.customer_email = Some(email.into());
        self
    }

    /// Sets the product code.
    #[must_use]
    pub fn with_product_code(mut self, code: impl Into<String>) -> Self {
        self.product_code = Some(code.into());
        self
    }

    /// Sets the product SKU.
    #[must_use]
    pub fn with_product_sku(mut self, sku: impl Into<String>) -> Self {
        self.product_sku = Some(sku.into());
        self
    }

    /// Sets the serial number.
    #[must_use]
    pub fn with_serial_number(mut self, serial: impl Into<String>) -> Self {
        self.serial_number = Some(serial.into());
        self
    }

    /// Sets the warranty type.
    #[must_use]
    pub fn with_warranty_type(mut self, kind: impl Into<String>) -> Self {
        self.warranty_type = Some(kind.into());
        self
    }

    /// Sets a precomputed days-remaining value.
    #[must_use]
    pub fn with_days_remaining(mut self, days: i64) -> Self {
        self.days_remaining = Some(days);
        self
    }

    /// Sets the coverage description.
    #[must_use]
    pub fn with_coverage(mut self, coverage: impl Into<String>) -> Self {
        self.coverage = Some(coverage.into());
        self
    }

    /// Sets the exclusions description.
    #[must_use]
    pub fn with_exclusions(mut self, exclusions: impl Into<String>) -> Self {
        self.exclusions = Some(exclusions.into());
        self
    }

    /// Sets the terms description.
    #[must_use]
    pub fn with_terms(mut self, terms: impl Into<String>) -> Self {
        self.terms = Some(terms.into());
        self
    }

    /// Sets the issuing location name.
    #[must_use]
    pub fn with_location(mut self, name: impl Into<String>) -> Self {
        self.location = Some(Location {
            name: Some(name.into()),
        });
        self
    }

    /// Sets the seller name.
    #[must_use]
    pub fn with_seller(mut self, name: impl Into<String>) -> Self {
        self.sale = Some(Sale {
            sold_by: Some(Seller {
                name: Some(name.into()),
            }),
        });
        self
    }

    /// Classifies the free-form status string.
    #[must_use]
    pub fn status_kind(&self) -> WarrantyStatus {
        WarrantyStatus::classify(&self.status)
    }

    /// Parses the expiry date.
    ///
    /// # Errors
    ///
    /// Returns an error if `expiry_date` is not a recognized date-like string.
    pub fn expiry(&self) -> Result<DateTime<Utc>> {
        parse_date(&self.expiry_date)
    }

    /// Returns the days remaining as of `now`.
    ///
    /// A precomputed [`days_remaining`](Self::days_remaining) wins and is never
    /// recomputed. Otherwise the value is derived from the expiry date with
    /// [`days_until`]. Returns `None` only when it must be derived and the
    /// expiry date cannot be parsed.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use wcard_protocol::dummy::sample_record;
    ///
    /// let now = Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap();
    /// let mut record = sample_record();
    /// assert_eq!(record.effective_days_remaining(now), Some(403));
    ///
    /// record.days_remaining = None;
    /// assert!(record.effective_days_remaining(now).unwrap() < 0);
    /// ```
    #[must_use]
    pub fn effective_days_remaining(&self, now: DateTime<Utc>) -> Option<i64> {
        if let Some(days) = self.days_remaining {
            return Some(days);
        }
        self.expiry().ok().map(|expiry| days_until(expiry, now))
    }

    /// Returns `true` if the effective days remaining are negative.
    #[must_use]
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.effective_days_remaining(now)
            .is_some_and(is_expired_days)
    }

    /// Returns `true` if the effective days remaining fall within the expiring-soon window.
    #[must_use]
    pub fn is_expiring_soon(&self, now: DateTime<Utc>) -> bool {
        self.effective_days_remaining(now)
            .is_some_and(is_expiring_soon_days)
    }

    /// Returns the seller name, if the record carries one.
    #[must_use]
    pub fn issuer_name(&self) -> Option<&str> {
        self.sale
            .as_ref()
            .and_then(|sale| sale.sold_by.as_ref())
            .and_then(|seller| seller.name.as_deref())
    }

    /// Returns the issuing location name, if the record carries one.
    #[must_use]
    pub fn location_name(&self) -> Option<&str> {
        self.location
            .as_ref()
            .and_then(|location| location.name.as_deref())
    }
}

/// Whole days from `now` until `expiry`, rounded up.
///
/// Equivalent to `ceil((expiry - now) / 1 day)` at millisecond resolution,
/// so any partial day left counts as a full day and an expiry less than a
/// day in the past yields `0`.
///
/// # Examples
///
/// ```
/// use chrono::{Duration, TimeZone, Utc};
/// use wcard_protocol::days_until;
///
/// let now = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
/// assert_eq!(days_until(now + Duration::hours(1), now), 1);
/// assert_eq!(days_until(now - Duration::hours(1), now), 0);
/// assert_eq!(days_until(now - Duration::hours(25), now), -1);
/// ```
#[must_use]
pub fn days_until(expiry: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let millis = (expiry - now).num_milliseconds();
    -(-millis).div_euclid(MILLIS_PER_DAY)
}

/// Returns `true` if `days` means the warranty has expired.
#[must_use]
pub const fn is_expired_days(days: i64) -> bool {
    days < 0
}

/// Returns `true` if `days` falls in `1..=EXPIRING_SOON_DAYS`.
#[must_use]
pub const fn is_expiring_soon_days(days: i64) -> bool {
    days > 0 && days <= EXPIRING_SOON_DAYS
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use proptest::prelude::*;

    fn record() -> WarrantyRecord {
        WarrantyRecord::new(
            "WRN-1",
            "ACTIVE",
            "Jane Doe",
            "555-0100",
            "Blender",
            "2025-01-01",
            "2026-01-01",
            12,
        )
    }

    fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    #[test]
    fn explicit_days_remaining_is_verbatim() {
        let record = record().with_days_remaining(403);
        assert_eq!(record.effective_days_remaining(at(2025, 6, 1, 0)), Some(403));
        assert_eq!(record.effective_days_remaining(at(2040, 6, 1, 0)), Some(403));
    }

    #[test]
    fn derived_days_remaining_rounds_up() {
        let record = record();
        // 2025-12-31T12:00 is half a day before expiry
        assert_eq!(record.effective_days_remaining(at(2025, 12, 31, 12)), Some(1));
        assert_eq!(record.effective_days_remaining(at(2025, 12, 1, 0)), Some(31));
        assert_eq!(record.effective_days_remaining(at(2026, 1, 1, 0)), Some(0));
        assert_eq!(record.effective_days_remaining(at(2026, 1, 3, 0)), Some(-2));
    }

    #[test]
    fn unparseable_expiry_has_no_days() {
        let mut record = record();
        record.expiry_date = "whenever".to_string();
        let now = at(2025, 6, 1, 0);
        assert_eq!(record.effective_days_remaining(now), None);
        assert!(!record.is_expired(now));
        assert!(!record.is_expiring_soon(now));
    }

    #[test]
    fn unparseable_expiry_with_explicit_days_still_counts() {
        let mut record = record().with_days_remaining(-3);
        record.expiry_date = "whenever".to_string();
        assert!(record.is_expired(at(2025, 6, 1, 0)));
    }

    #[test]
    fn expired_is_independent_of_status() {
        let record = record().with_days_remaining(-1);
        assert_eq!(record.status_kind(), WarrantyStatus::Active);
        assert!(record.is_expired(at(2025, 6, 1, 0)));
    }

    #[test]
    fn expiring_soon_boundaries() {
        assert!(!is_expiring_soon_days(0));
        assert!(is_expiring_soon_days(1));
        assert!(is_expiring_soon_days(30));
        assert!(!is_expiring_soon_days(31));
        assert!(!is_expiring_soon_days(-5));
    }

    #[test]
    fn expired_boundaries() {
        assert!(is_expired_days(-1));
        assert!(!is_expired_days(0));
        assert!(!is_expired_days(1));
    }

    #[test]
    fn provenance_names() {
        let plain = record();
        assert_eq!(plain.issuer_name(), None);
        assert_eq!(plain.location_name(), None);

        let full = record().with_seller("Alex Kim").with_location("Downtown Store");
        assert_eq!(full.issuer_name(), Some("Alex Kim"));
        assert_eq!(full.location_name(), Some("Downtown Store"));

        let mut partial = record();
        partial.sale = Some(Sale { sold_by: None });
        partial.location = Some(Location { name: None });
        assert_eq!(partial.issuer_name(), None);
        assert_eq!(partial.location_name(), None);
    }

    #[test]
    fn deserializes_nested_provenance() {
        let json = r#"{
            "warrantyNumber": "WRN-9",
            "status": "claimed",
            "customerName": "Bo",
            "customerPhone": "1",
            "productName": "Drill",
            "startDate": "2024-01-01",
            "expiryDate": "2025-01-01",
            "warrantyMonths": 12,
            "location": { "name": "Warehouse 3" },
            "sale": { "soldBy": { "name": "Dana" } }
        }"#;
        let record: WarrantyRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.location_name(), Some("Warehouse 3"));
        assert_eq!(record.issuer_name(), Some("Dana"));
        assert_eq!(record.status_kind(), WarrantyStatus::Claimed);
    }

    #[test]
    fn serializes_camel_case_without_empty_options() {
        let json = serde_json::to_string(&record()).unwrap();
        assert!(json.contains("\"warrantyNumber\""));
        assert!(json.contains("\"warrantyMonths\":12"));
        assert!(!json.contains("customerEmail"));
        assert!(!json.contains("daysRemaining"));
    }

    proptest! {
        #[test]
        fn derived_days_match_ceiling(offset_ms in -400_000_000_000i64..400_000_000_000i64) {
            let now = at(2025, 6, 1, 0);
            let expiry = now + Duration::milliseconds(offset_ms);
            let expected = (offset_ms as f64 / MILLIS_PER_DAY as f64).ceil() as i64;
            prop_assert_eq!(days_until(expiry, now), expected);
        }

        #[test]
        fn expired_and_expiring_soon_are_exclusive(days in any::<i64>()) {
            prop_assert!(!(is_expired_days(days) && is_expiring_soon_days(days)));
        }
    }
}
