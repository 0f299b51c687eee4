//! Rendering tests for the warranty card.
//!
//! Every test renders against a fixed instant so relative values are stable.

use chrono::{DateTime, TimeZone, Utc};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier},
    widgets::{Paragraph, Widget},
};
use wcard_config::CardContent;
use wcard_protocol::{
    CardTab, WarrantyRecord,
    dummy::{detailed_sample_record, sample_record},
};

use super::{CardProps, EXPIRED_COLOR, EXPIRING_SOON_COLOR, render_warranty_card};
use crate::state::CardState;
use crate::test_utils::{buffer_to_string, find_text};

const AREA: Rect = Rect {
    x: 0,
    y: 0,
    width: 100,
    height: 40,
};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 12, 8, 9, 0, 0).unwrap()
}

fn render_at(record: &WarrantyRecord, state: CardState, now: DateTime<Utc>) -> Buffer {
    let content = CardContent::default();
    let props = CardProps {
        record,
        content: &content,
        is_open: true,
        now,
    };
    let mut buf = Buffer::empty(AREA);
    render_warranty_card(&props, &state, AREA, &mut buf);
    buf
}

fn render(record: &WarrantyRecord, state: CardState) -> Buffer {
    render_at(record, state, now())
}

fn fg_at(buf: &Buffer, needle: &str) -> Color {
    let (x, y) = find_text(buf, needle).unwrap_or_else(|| panic!("{needle:?} not rendered"));
    buf.cell((x, y)).unwrap().fg
}

#[test]
fn closed_card_leaves_buffer_untouched() {
    let mut expired = sample_record();
    expired.status = "EXPIRED".to_string();
    expired.expiry_date = "2024-06-01".to_string();
    expired.days_remaining = None;

    let mut invalid = sample_record();
    invalid.start_date = "sometime".to_string();
    invalid.expiry_date = "never".to_string();
    invalid.days_remaining = None;

    let mut terms_with_code = CardState::new();
    terms_with_code.select_tab(CardTab::Terms);
    terms_with_code.toggle_code_panel();

    let content = CardContent::default();
    for record in [sample_record(), detailed_sample_record(), expired, invalid] {
        let props = CardProps {
            record: &record,
            content: &content,
            is_open: false,
            now: now(),
        };

        for state in [CardState::new(), terms_with_code] {
            let mut buf = Buffer::empty(AREA);
            Paragraph::new("host content").render(AREA, &mut buf);
            let before = buf.clone();

            render_warranty_card(&props, &state, AREA, &mut buf);
            assert_eq!(buf, before, "record {}", record.warranty_number);
        }
    }
}

#[test]
fn open_card_dims_the_backdrop() {
    let buf = render(&sample_record(), CardState::new());
    let corner = buf.cell((0, 0)).unwrap();
    assert!(corner.modifier.contains(Modifier::DIM));
}

#[test]
fn sample_record_overview() {
    let buf = render(&sample_record(), CardState::new());
    let content = buffer_to_string(&buf);

    assert!(content.contains("Warranty Card"));
    assert!(content.contains("WRN-2024-0156"));
    assert!(content.contains("Sarah Johnson"));
    assert!(content.contains("+1 (555) 123-4567"));
    assert!(content.contains("MacBook Pro"));
    assert!(content.contains("MANUFACTURER"));
    assert!(content.contains("January 15, 2024"));
    assert!(content.contains("January 15, 2026"));
    assert!(content.contains("24 Months"));
    assert!(content.contains("● ACTIVE"));
    assert!(content.contains("403 days left"));
    assert!(!content.contains("⚠"));
    assert!(!content.contains("Email"));
    assert!(!content.contains("Serial"));

    assert_eq!(fg_at(&buf, "ACTIVE"), Color::Rgb(16, 185, 129));
    assert_ne!(fg_at(&buf, "403 days left"), EXPIRING_SOON_COLOR);
    assert_eq!(fg_at(&buf, "January 15, 2026"), Color::White);
}

#[test]
fn detailed_record_shows_optional_fields() {
    let buf = render(&detailed_sample_record(), CardState::new());
    let content = buffer_to_string(&buf);

    assert!(content.contains("sarah.johnson@example.com"));
    assert!(content.contains("MBP-14-M3"));
    assert!(content.contains("SKU-88231"));
    assert!(content.contains("C02XK1ZZMD6T"));
}

#[test]
fn expired_record_shows_warning_and_no_days_badge() {
    let mut record = sample_record();
    record.status = "EXPIRED".to_string();
    record.expiry_date = "2024-06-01".to_string();
    record.days_remaining = None;

    let buf = render(&record, CardState::new());
    let content = buffer_to_string(&buf);

    assert!(content.contains("⚠ EXPIRED"));
    assert!(!content.contains("days left"));
    assert!(!content.contains("day left"));
    assert_eq!(fg_at(&buf, "June 1, 2024"), EXPIRED_COLOR);
}

#[test]
fn expiring_soon_thresholds() {
    for (days, amber) in [(31, false), (30, true), (1, true), (0, false)] {
        let record = sample_record().with_days_remaining(days);
        let buf = render(&record, CardState::new());
        let badge = if days == 1 {
            "1 day left".to_string()
        } else {
            format!("{days} days left")
        };

        assert_eq!(
            fg_at(&buf, &badge) == EXPIRING_SOON_COLOR,
            amber,
            "days = {days}"
        );
        assert_eq!(
            fg_at(&buf, "January 15, 2026") == EXPIRING_SOON_COLOR,
            amber,
            "expiry colour for days = {days}"
        );
    }
}

#[test]
fn derived_days_follow_the_clock() {
    let mut record = sample_record();
    record.days_remaining = None;

    let buf = render_at(
        &record,
        CardState::new(),
        Utc.with_ymd_and_hms(2025, 12, 16, 0, 0, 0).unwrap(),
    );
    assert_eq!(fg_at(&buf, "30 days left"), EXPIRING_SOON_COLOR);

    let buf = render_at(
        &record,
        CardState::new(),
        Utc.with_ymd_and_hms(2025, 1, 15, 0, 0, 0).unwrap(),
    );
    assert!(buffer_to_string(&buf).contains("365 days left"));
}

#[test]
fn invalid_dates_render_placeholder() {
    let mut record = sample_record();
    record.start_date = "sometime".to_string();
    record.expiry_date = "never".to_string();
    record.days_remaining = None;

    let content = buffer_to_string(&render(&record, CardState::new()));
    assert!(content.contains("Invalid date"));
    assert!(!content.contains("days left"));
    assert!(!content.contains("⚠"));
}

#[test]
fn unknown_status_uses_default_palette() {
    let mut record = sample_record();
    record.status = "PENDING".to_string();

    let buf = render(&record, CardState::new());
    assert_eq!(fg_at(&buf, "PENDING"), Color::Rgb(59, 130, 246));
}

#[test]
fn coverage_tab() {
    let mut state = CardState::new();
    state.select_tab(CardTab::Coverage);
    let content = buffer_to_string(&render(&sample_record(), state));

    assert!(content.contains("What's Covered"));
    assert!(content.contains("defects in materials"));
    assert!(content.contains("✓ Manufacturing defects"));
    assert!(content.contains("✓ Repair labor"));
    assert!(content.contains("Exclusions"));
    assert!(!content.contains("Sarah Johnson"));
}

#[test]
fn coverage_tab_prefers_record_text() {
    let mut state = CardState::new();
    state.select_tab(CardTab::Coverage);
    let content = buffer_to_string(&render(&detailed_sample_record(), state));

    assert!(content.contains("Covers logic board"));
    assert!(content.contains("Liquid damage"));
}

#[test]
fn terms_tab() {
    let mut state = CardState::new();
    state.select_tab(CardTab::Terms);
    let content = buffer_to_string(&render(&sample_record(), state));

    assert!(content.contains("Terms & Conditions"));
    assert!(content.contains("original proof of purchase"));
    assert!(content.contains("1. The warranty is non-transferable"));
    assert!(content.contains("5. The issuer may repair"));
}

#[test]
fn active_tab_is_highlighted() {
    let mut state = CardState::new();
    state.select_tab(CardTab::Terms);
    let buf = render(&sample_record(), state);

    let (x, y) = find_text(&buf, " 3 Terms ").unwrap();
    assert_eq!(buf.cell((x, y)).unwrap().fg, Color::Black);
    let (x, y) = find_text(&buf, " 1 Overview ").unwrap();
    assert_ne!(buf.cell((x, y)).unwrap().fg, Color::Black);
}

#[test]
fn code_panel_only_when_toggled() {
    let content = buffer_to_string(&render(&sample_record(), CardState::new()));
    assert!(!content.contains("Verification Code"));

    let mut state = CardState::new();
    state.toggle_code_panel();
    let content = buffer_to_string(&render(&sample_record(), state));
    assert!(content.contains("Verification Code"));
    assert!(content.contains("·  MacBook Pro"));
}

#[test]
fn code_panel_yields_to_action_bar_in_short_terminal() {
    let area = Rect::new(0, 0, 60, 20);
    let record = sample_record();
    let content = CardContent::default();
    let props = CardProps {
        record: &record,
        content: &content,
        is_open: true,
        now: now(),
    };
    let mut state = CardState::new();
    state.toggle_code_panel();

    let mut buf = Buffer::empty(area);
    render_warranty_card(&props, &state, area, &mut buf);

    let text = buffer_to_string(&buf);
    assert!(!text.contains("Verification Code"));
    assert!(text.contains("[d] Download"));
    assert!(text.contains("Generated on December 8, 2024"));
}

#[test]
fn footer_uses_defaults_and_clock() {
    let content = buffer_to_string(&render(&sample_record(), CardState::new()));
    assert!(content.contains("Issued by Authorized Dealer"));
    assert!(content.contains("Location Main Store"));
    assert!(content.contains("Generated on December 8, 2024"));
}

#[test]
fn footer_prefers_record_issuer_and_location() {
    let content = buffer_to_string(&render(&detailed_sample_record(), CardState::new()));
    assert!(content.contains("Issued by Marcus Lee"));
    assert!(content.contains("Location Riverside Store"));
}

#[test]
fn action_bar_lists_every_button() {
    let content = buffer_to_string(&render(&sample_record(), CardState::new()));
    for label in ["[d] Download", "[p] Print", "[s] Share", "[c] Code", "Close"] {
        assert!(content.contains(label), "missing {label}");
    }
}

#[test]
fn too_small_area_renders_notice() {
    let area = Rect::new(0, 0, 30, 10);
    let record = sample_record();
    let content = CardContent::default();
    let props = CardProps {
        record: &record,
        content: &content,
        is_open: true,
        now: now(),
    };
    let mut buf = Buffer::empty(area);
    render_warranty_card(&props, &CardState::new(), area, &mut buf);

    let text = buffer_to_string(&buf);
    assert!(text.contains("Terminal too small"));
    assert!(!text.contains("WRN-2024-0156"));
}
