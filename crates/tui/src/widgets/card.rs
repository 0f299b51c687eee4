//! Warranty card widget.
//!
//! This module renders the warranty card modal: a bordered card centered over
//! a dimmed backdrop, showing the record's status, dates, tabbed details,
//! provenance, and the action bar.
//!
//! # Layout
//!
//! ```text
//! ╭ Warranty Card ───────────────────────────────────────────────────────╮
//! │ WARRANTY CARD  No. WRN-2024-0156                                     │
//! │ ● ACTIVE   403 days left                                             │
//! │ ╭──────────────────────────────────────────────────────────────────╮ │
//! │ │    Start Date      │     Expiry Date      │       Duration       │ │
//! │ │ January 15, 2024   │  January 15, 2026    │      24 Months       │ │
//! │ ╰──────────────────────────────────────────────────────────────────╯ │
//! │  1 Overview  │  2 Coverage  │  3 Terms                               │
//! │ ──────────────────────────────────────────────────────────────────── │
//! │ Customer                                                             │
//! │   Name     Sarah Johnson                                             │
//! │   ...                                                                │
//! │ Issued by Authorized Dealer  │  Location Main Store                  │
//! │ Generated on October 16, 2026                                        │
//! │ [d] Download  [p] Print  [s] Share  [c] Code  [Esc] Close            │
//! ╰──────────────────────────────────────────────────────────────────────╯
//! ```

use chrono::{DateTime, Utc};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget, Wrap},
};
use wcard_config::CardContent;
use wcard_protocol::{CardTab, WarrantyRecord, format_date, format_datetime};

use super::style::{EXPIRED_COLOR, EXPIRING_SOON_COLOR, StatusStyle, status_style};
use crate::layout::{ActionButton, CardLayout, MIN_HEIGHT, MIN_WIDTH, TAB_DIVIDER, tab_label};
use crate::state::CardState;

/// Icon prefixed to the status badge of an expired warranty.
pub const EXPIRED_ICON: &str = "⚠";

/// Icon prefixed to the status badge otherwise.
pub const STATUS_ICON: &str = "●";

const LABEL_WIDTH: usize = 9;

/// Everything the card needs from its host for a single render.
#[derive(Debug, Clone, Copy)]
pub struct CardProps<'a> {
    /// The record to display.
    pub record: &'a WarrantyRecord,
    /// Fallback copy and static lists.
    pub content: &'a CardContent,
    /// Whether the card is shown at all.
    pub is_open: bool,
    /// The instant that relative values are computed against.
    pub now: DateTime<Utc>,
}

/// Renders the warranty card modal.
///
/// When `props.is_open` is `false` nothing is drawn and `buf` is left exactly
/// as it was. Otherwise the whole `area` is dimmed and the card is drawn on
/// top of it. Areas below the minimum size show a short notice instead.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use wcard_config::CardContent;
/// use wcard_protocol::dummy::sample_record;
/// use wcard_tui::CardState;
/// use wcard_tui::widgets::{CardProps, render_warranty_card};
///
/// let record = sample_record();
/// let content = CardContent::default();
/// let props = CardProps {
///     record: &record,
///     content: &content,
///     is_open: true,
///     now: Utc.with_ymd_and_hms(2024, 12, 8, 0, 0, 0).unwrap(),
/// };
///
/// let area = Rect::new(0, 0, 100, 40);
/// let mut buf = Buffer::empty(area);
/// render_warranty_card(&props, &CardState::new(), area, &mut buf);
/// ```
pub fn render_warranty_card(props: &CardProps<'_>, state: &CardState, area: Rect, buf: &mut Buffer) {
    if !props.is_open {
        return;
    }

    // Dim whatever the host drew underneath
    buf.set_style(area, Style::default().add_modifier(Modifier::DIM));

    let Some(layout) = CardLayout::compute(area, state.show_code_panel) else {
        render_too_small(area, buf);
        return;
    };

    let style = status_style(&props.record.status);

    Clear.render(layout.card, buf);
    Block::default()
        .title(Span::styled(
            " Warranty Card ",
            Style::default()
                .fg(style.gradient.0)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(style.gradient.0))
        .render(layout.card, buf);

    render_header(props, &style, layout.header, buf);
    render_stats(props, &style, layout.stats, buf);
    render_tabs(state.active_tab, &style, layout.tabs, buf);
    render_separator(layout.separator, buf);

    let body = match state.active_tab {
        CardTab::Overview => overview_lines(props.record),
        CardTab::Coverage => coverage_lines(props.record, props.content),
        CardTab::Terms => terms_lines(props.record, props.content),
    };
    Paragraph::new(body)
        .wrap(Wrap { trim: false })
        .render(layout.body, buf);

    if let Some(panel) = layout.code_panel {
        render_code_panel(props.record, &style, panel, buf);
    }

    render_footer(props, layout.footer, buf);
    render_action_bar(&style, &layout, buf);
}

/// Returns the text of the status badge, e.g. `● ACTIVE` or `⚠ ACTIVE`.
#[must_use]
pub fn status_badge_text(record: &WarrantyRecord, now: DateTime<Utc>) -> String {
    let icon = if record.is_expired(now) {
        EXPIRED_ICON
    } else {
        STATUS_ICON
    };
    let label = record.status.trim();
    let label = if label.is_empty() {
        "UNKNOWN".to_string()
    } else {
        label.to_uppercase()
    };
    format!("{icon} {label}")
}

/// Returns the text of the days-remaining badge.
///
/// Returns `None` when the warranty has expired or the days remaining cannot
/// be determined; the badge is then omitted.
#[must_use]
pub fn days_badge_text(record: &WarrantyRecord, now: DateTime<Utc>) -> Option<String> {
    let days = record.effective_days_remaining(now)?;
    if days < 0 {
        return None;
    }
    let unit = if days == 1 { "day" } else { "days" };
    Some(format!("{days} {unit} left"))
}

/// Returns the optional product fields present on `record`, in display order.
///
/// Absent fields are omitted rather than shown blank.
///
/// # Examples
///
/// ```
/// use wcard_protocol::dummy::sample_record;
/// use wcard_tui::widgets::optional_product_fields;
///
/// let record = sample_record().with_product_sku("SKU-1");
/// assert_eq!(
///     optional_product_fields(&record),
///     vec![("SKU", "SKU-1"), ("Type", "MANUFACTURER")]
/// );
/// ```
#[must_use]
pub fn optional_product_fields(record: &WarrantyRecord) -> Vec<(&'static str, &str)> {
    [
        ("Code", record.product_code.as_deref()),
        ("SKU", record.product_sku.as_deref()),
        ("Serial", record.serial_number.as_deref()),
        ("Type", record.warranty_type.as_deref()),
    ]
    .into_iter()
    .filter_map(|(label, value)| present(value).map(|v| (label, v)))
    .collect()
}

/// Treats blank text the same as a missing field.
fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Builds the overview tab: customer details, then product details.
#[must_use]
pub fn overview_lines(record: &WarrantyRecord) -> Vec<Line<'static>> {
    let mut lines = vec![section_heading("Customer")];
    lines.push(field_line("Name", &record.customer_name));
    lines.push(field_line("Phone", &record.customer_phone));
    if let Some(email) = present(record.customer_email.as_deref()) {
        lines.push(field_line("Email", email));
    }

    lines.push(Line::from(""));
    lines.push(section_heading("Product"));
    lines.push(field_line("Product", &record.product_name));
    for (label, value) in optional_product_fields(record) {
        lines.push(field_line(label, value));
    }
    lines
}

/// Builds the coverage tab: coverage text, the category list, and exclusions.
#[must_use]
pub fn coverage_lines(record: &WarrantyRecord, content: &CardContent) -> Vec<Line<'static>> {
    let mut lines = vec![
        section_heading("What's Covered"),
        paragraph_line(content.coverage_for(record)),
        Line::from(""),
        section_heading("Coverage Includes"),
    ];
    lines.extend(content.coverage_categories.iter().map(|category| {
        Line::from(vec![
            Span::styled("  ✓ ", Style::default().fg(Color::Green)),
            Span::styled(category.clone(), Style::default().fg(Color::White)),
        ])
    }));
    lines.push(Line::from(""));
    lines.push(section_heading("Exclusions"));
    lines.push(paragraph_line(content.exclusions_for(record)));
    lines
}

/// Builds the terms tab: terms text followed by the numbered clauses.
#[must_use]
pub fn terms_lines(record: &WarrantyRecord, content: &CardContent) -> Vec<Line<'static>> {
    let mut lines = vec![
        section_heading("Terms & Conditions"),
        paragraph_line(content.terms_for(record)),
        Line::from(""),
    ];
    lines.extend(
        content
            .terms_clauses
            .iter()
            .enumerate()
            .map(|(i, clause)| {
                Line::from(vec![
                    Span::styled(format!("  {}. ", i + 1), Style::default().fg(Color::DarkGray)),
                    Span::styled(clause.clone(), Style::default().fg(Color::White)),
                ])
            }),
    );
    lines
}

/// Builds a bar-code strip that encodes `text` as block glyphs.
///
/// Purely visual: every byte maps to two glyphs so identical numbers always
/// produce identical strips. The strip is cut to `width` columns.
#[must_use]
pub fn barcode_strip(text: &str, width: usize) -> String {
    const GLYPHS: [char; 4] = ['█', '▌', '▐', '┃'];
    text.bytes()
        .flat_map(|b| {
            [
                GLYPHS[usize::from(b & 0b11)],
                GLYPHS[usize::from((b >> 2) & 0b11)],
                ' ',
            ]
        })
        .take(width)
        .collect()
}

fn render_header(props: &CardProps<'_>, style: &StatusStyle, area: Rect, buf: &mut Buffer) {
    let record = props.record;
    let [title_row, badge_row] =
        Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(area);

    Paragraph::new(Line::from(vec![
        Span::styled(
            "WARRANTY CARD",
            Style::default().fg(style.text).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled("No. ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            record.warranty_number.clone(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
    ]))
    .render(title_row, buf);

    let mut badges = vec![Span::styled(
        status_badge_text(record, props.now),
        Style::default()
            .fg(style.gradient.0)
            .add_modifier(Modifier::BOLD),
    )];
    if let Some(days) = days_badge_text(record, props.now) {
        let days_style = if record.is_expiring_soon(props.now) {
            Style::default()
                .fg(EXPIRING_SOON_COLOR)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(style.gradient.1)
        };
        badges.push(Span::raw("   "));
        badges.push(Span::styled(days, days_style));
    }
    Paragraph::new(Line::from(badges)).render(badge_row, buf);
}

fn render_stats(props: &CardProps<'_>, style: &StatusStyle, area: Rect, buf: &mut Buffer) {
    let record = props.record;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(style.border));
    let inner = block.inner(area);
    block.render(area, buf);

    let expiry_color = if record.is_expired(props.now) {
        EXPIRED_COLOR
    } else if record.is_expiring_soon(props.now) {
        EXPIRING_SOON_COLOR
    } else {
        Color::White
    };

    let stats = [
        ("Start Date", format_date(&record.start_date), Color::White),
        ("Expiry Date", format_date(&record.expiry_date), expiry_color),
        (
            "Duration",
            format!("{} Months", record.warranty_months),
            Color::White,
        ),
    ];

    let columns = Layout::horizontal([Constraint::Ratio(1, 3); 3]).split(inner);
    for ((label, value, color), column) in stats.into_iter().zip(columns.iter()) {
        Paragraph::new(vec![
            Line::from(Span::styled(label, Style::default().fg(Color::DarkGray))),
            Line::from(Span::styled(
                value,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )),
        ])
        .alignment(Alignment::Center)
        .render(*column, buf);
    }
}

fn render_tabs(active: CardTab, style: &StatusStyle, area: Rect, buf: &mut Buffer) {
    let mut spans = Vec::new();
    for (i, tab) in CardTab::ALL.into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(TAB_DIVIDER, Style::default().fg(Color::DarkGray)));
        }
        let tab_style = if tab == active {
            Style::default()
                .fg(Color::Black)
                .bg(style.gradient.1)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(tab_label(tab), tab_style));
    }
    Paragraph::new(Line::from(spans)).render(area, buf);
}

fn render_separator(area: Rect, buf: &mut Buffer) {
    let rule = "─".repeat(area.width as usize);
    Paragraph::new(Line::from(Span::styled(
        rule,
        Style::default().fg(Color::DarkGray),
    )))
    .render(area, buf);
}

fn render_code_panel(record: &WarrantyRecord, style: &StatusStyle, area: Rect, buf: &mut Buffer) {
    let block = Block::default()
        .title(Span::styled(
            " Verification Code ",
            Style::default().fg(style.text).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(style.border))
        .style(Style::default().bg(style.background));
    let inner = block.inner(area);
    block.render(area, buf);

    let code = record.id.as_deref().unwrap_or(&record.warranty_number);
    Paragraph::new(vec![
        Line::from(Span::styled(
            barcode_strip(code, inner.width as usize),
            Style::default().fg(Color::Black),
        )),
        Line::from(vec![
            Span::styled(
                record.warranty_number.clone(),
                Style::default().fg(style.text).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  ·  {}", record.product_name),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(""),
    ])
    .alignment(Alignment::Center)
    .render(inner, buf);
}

fn render_footer(props: &CardProps<'_>, area: Rect, buf: &mut Buffer) {
    let label = Style::default().fg(Color::DarkGray);
    let value = Style::default().fg(Color::White);

    Paragraph::new(vec![
        Line::from(vec![
            Span::styled("Issued by ", label),
            Span::styled(props.content.issuer_for(props.record).to_string(), value),
            Span::styled("  │  ", label),
            Span::styled("Location ", label),
            Span::styled(props.content.location_for(props.record).to_string(), value),
        ]),
        Line::from(vec![
            Span::styled("Generated on ", label),
            Span::styled(format_datetime(props.now), value),
        ]),
    ])
    .render(area, buf);
}

fn render_action_bar(style: &StatusStyle, layout: &CardLayout, buf: &mut Buffer) {
    for (rect, button) in &layout.button_hits {
        let key_color = if *button == ActionButton::Close {
            Color::Red
        } else {
            style.gradient.0
        };
        Paragraph::new(Line::from(vec![
            Span::styled(format!("[{}]", button.key()), Style::default().fg(key_color)),
            Span::styled(
                format!(" {}", button.caption()),
                Style::default().fg(Color::White),
            ),
        ]))
        .render(*rect, buf);
    }
}

fn render_too_small(area: Rect, buf: &mut Buffer) {
    let message = format!(
        "Terminal too small ({}×{})\nMinimum: {}×{} (w×h)",
        area.width, area.height, MIN_WIDTH, MIN_HEIGHT
    );

    // Center the message vertically
    let vertical_offset = area.height.saturating_sub(2) / 2;
    let centered = Rect {
        x: area.x,
        y: area.y + vertical_offset,
        width: area.width,
        height: area.height.saturating_sub(vertical_offset),
    };

    Clear.render(centered, buf);
    Paragraph::new(message)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false })
        .render(centered, buf);
}

fn section_heading(title: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        title,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ))
}

fn field_line(label: &str, value: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("  {label:<LABEL_WIDTH$}"),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(value.to_string(), Style::default().fg(Color::White)),
    ])
}

fn paragraph_line(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!("  {text}"),
        Style::default().fg(Color::Gray),
    ))
}
