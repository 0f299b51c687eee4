//! Sample data for demos and tests.

use crate::record::WarrantyRecord;

/// Returns a fully populated sample record.
///
/// The record mirrors a typical manufacturer warranty on a laptop and carries
/// a precomputed `days_remaining`, so its countdown does not depend on the clock.
///
/// # Examples
///
/// ```
/// use wcard_protocol::dummy::sample_record;
///
/// let record = sample_record();
/// assert_eq!(record.warranty_number, "WRN-2024-0156");
/// assert_eq!(record.days_remaining, Some(403));
/// ```
#[must_use]
pub fn sample_record() -> WarrantyRecord {
    WarrantyRecord::new(
        "WRN-2024-0156",
        "ACTIVE",
        "Sarah Johnson",
        "+1 (555) 123-4567",
        "MacBook Pro",
        "2024-01-15",
        "2026-01-15",
        24,
    )
    .with_warranty_type("MANUFACTURER")
    .with_days_remaining(403)
}

/// Returns a sample record with every optional field populated.
#[must_use]
pub fn detailed_sample_record() -> WarrantyRecord {
    sample_record()
        .with_id("c0ffee-0156")
        .with_customer_email("sarah.johnson@example.com")
        .with_product_code("MBP-14-M3")
        .with_product_sku("SKU-88231")
        .with_serial_number("C02XK1ZZMD6T")
        .with_coverage("Covers logic board, display, keyboard and battery defects.")
        .with_exclusions("Liquid damage and cosmetic wear are not covered.")
        .with_terms("Claims require the original proof of purchase.")
        .with_location("Riverside Store")
        .with_seller("Marcus Lee")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_record_has_no_optional_product_fields() {
        let record = sample_record();
        assert!(record.product_code.is_none());
        assert!(record.product_sku.is_none());
        assert!(record.serial_number.is_none());
        assert_eq!(record.warranty_type.as_deref(), Some("MANUFACTURER"));
    }

    #[test]
    fn detailed_sample_record_is_complete() {
        let record = detailed_sample_record();
        assert!(record.id.is_some());
        assert!(record.customer_email.is_some());
        assert!(record.coverage.is_some());
        assert_eq!(record.issuer_name(), Some("Marcus Lee"));
        assert_eq!(record.location_name(), Some("Riverside Store"));
    }

    #[test]
    fn sample_record_json_roundtrip() {
        let record = detailed_sample_record();
        let json = serde_json::to_string(&record).expect("serialize");
        let parsed: WarrantyRecord = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(record, parsed);
    }
}
