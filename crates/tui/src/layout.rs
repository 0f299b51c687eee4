//! Card geometry and hit-testing.
//!
//! [`CardLayout`] is the single source of truth for where each part of the
//! card is drawn. Rendering and mouse hit-testing both derive from it, so a
//! click always lands on what the user sees.

use ratatui::layout::{Constraint, Layout, Position, Rect};
use wcard_protocol::{CardTab, Message};

/// Preferred card width, including borders.
pub const CARD_WIDTH: u16 = 84;

/// Preferred card height, including borders.
pub const CARD_HEIGHT: u16 = 34;

/// Minimum terminal width for rendering the card.
pub const MIN_WIDTH: u16 = 40;

/// Minimum terminal height for rendering the card.
pub const MIN_HEIGHT: u16 = 20;

/// Height of the header (title row and badge row).
pub const HEADER_HEIGHT: u16 = 2;

/// Height of the stats bar, including its border.
pub const STATS_HEIGHT: u16 = 4;

/// Height of the verification code panel, including its border.
pub const CODE_PANEL_HEIGHT: u16 = 5;

/// Height of the provenance footer.
pub const FOOTER_HEIGHT: u16 = 2;

/// Minimum height of the tab body.
pub const BODY_MIN_HEIGHT: u16 = 3;

/// Rows every card needs inside its border: header, stats, tab strip,
/// separator, body, footer, and action bar.
const FIXED_ROWS: u16 = HEADER_HEIGHT + STATS_HEIGHT + 1 + 1 + BODY_MIN_HEIGHT + FOOTER_HEIGHT + 1;

/// Divider drawn between tab labels.
pub const TAB_DIVIDER: &str = " │ ";

/// Gap between action buttons.
pub const BUTTON_GAP: u16 = 2;

/// The clickable buttons in the card's action bar, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionButton {
    /// Delegates to the download handler.
    Download,
    /// Delegates to the print handler.
    Print,
    /// Delegates to the share handler.
    Share,
    /// Toggles the verification code panel.
    Code,
    /// Delegates to the dismissal handler.
    Close,
}

impl ActionButton {
    /// All buttons in display order.
    pub const ALL: [Self; 5] = [
        Self::Download,
        Self::Print,
        Self::Share,
        Self::Code,
        Self::Close,
    ];

    /// Returns the key hint shown in brackets.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Download => "d",
            Self::Print => "p",
            Self::Share => "s",
            Self::Code => "c",
            Self::Close => "Esc",
        }
    }

    /// Returns the button caption.
    #[must_use]
    pub const fn caption(self) -> &'static str {
        match self {
            Self::Download => "Download",
            Self::Print => "Print",
            Self::Share => "Share",
            Self::Code => "Code",
            Self::Close => "Close",
        }
    }

    /// Returns the full label, e.g. `[d] Download`.
    #[must_use]
    pub fn label(self) -> String {
        format!("[{}] {}", self.key(), self.caption())
    }

    /// Returns the message the button produces.
    #[must_use]
    pub const fn message(self) -> Message {
        match self {
            Self::Download => Message::Download,
            Self::Print => Message::Print,
            Self::Share => Message::Share,
            Self::Code => Message::ToggleCodePanel,
            Self::Close => Message::Close,
        }
    }
}

/// Returns the label drawn for `tab` in the tab strip, e.g. ` 1 Overview `.
#[must_use]
pub fn tab_label(tab: CardTab) -> String {
    format!(" {} {} ", tab.index() + 1, tab.title())
}

/// Resolved geometry of an open card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardLayout {
    /// The card itself, borders included.
    pub card: Rect,
    /// Title and badge rows.
    pub header: Rect,
    /// Start/expiry/duration bar.
    pub stats: Rect,
    /// Tab strip row.
    pub tabs: Rect,
    /// Rule below the tab strip.
    pub separator: Rect,
    /// Active tab content.
    pub body: Rect,
    /// Verification code panel, when shown.
    pub code_panel: Option<Rect>,
    /// Provenance footer.
    pub footer: Rect,
    /// Action bar row.
    pub actions: Rect,
    /// Clickable area of each tab label.
    pub tab_hits: Vec<(Rect, CardTab)>,
    /// Clickable area of each action button.
    pub button_hits: Vec<(Rect, ActionButton)>,
}

impl CardLayout {
    /// Computes the card geometry inside `area`.
    ///
    /// Returns `None` when `area` is below [`MIN_WIDTH`] × [`MIN_HEIGHT`].
    ///
    /// # Examples
    ///
    /// ```
    /// use ratatui::layout::Rect;
    /// use wcard_tui::layout::CardLayout;
    ///
    /// let layout = CardLayout::compute(Rect::new(0, 0, 100, 40), false).unwrap();
    /// assert_eq!(layout.card, Rect::new(8, 3, 84, 34));
    /// assert!(layout.code_panel.is_none());
    ///
    /// assert!(CardLayout::compute(Rect::new(0, 0, 30, 10), false).is_none());
    /// ```
    #[must_use]
    pub fn compute(area: Rect, show_code_panel: bool) -> Option<Self> {
        if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
            return None;
        }

        let card = centered_rect(CARD_WIDTH, CARD_HEIGHT, area);

        // One cell of border on each side, plus one column of padding
        let inner = Rect {
            x: card.x + 2,
            y: card.y + 1,
            width: card.width.saturating_sub(4),
            height: card.height.saturating_sub(2),
        };

        // The panel is dropped rather than squeezing the footer or action bar
        let code_fits = inner.height >= FIXED_ROWS + CODE_PANEL_HEIGHT;
        let code_height = if show_code_panel && code_fits {
            CODE_PANEL_HEIGHT
        } else {
            0
        };
        let [header, stats, tabs, separator, body, code, footer, actions] = Layout::vertical([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(STATS_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(BODY_MIN_HEIGHT),
            Constraint::Length(code_height),
            Constraint::Length(FOOTER_HEIGHT),
            Constraint::Length(1),
        ])
        .areas(inner);

        let tab_hits = row_segments(
            tabs,
            CardTab::ALL.iter().map(|tab| (tab_label(*tab), *tab)),
            TAB_DIVIDER.chars().count() as u16,
        );
        let button_hits = row_segments(
            actions,
            ActionButton::ALL.iter().map(|b| (b.label(), *b)),
            BUTTON_GAP,
        );

        Some(Self {
            card,
            header,
            stats,
            tabs,
            separator,
            body,
            code_panel: (code_height > 0).then_some(code),
            footer,
            actions,
            tab_hits,
            button_hits,
        })
    }

    /// Maps a click at (`column`, `row`) to the message of the control under it.
    ///
    /// # Examples
    ///
    /// ```
    /// use ratatui::layout::Rect;
    /// use wcard_protocol::{CardTab, Message};
    /// use wcard_tui::layout::CardLayout;
    ///
    /// let layout = CardLayout::compute(Rect::new(0, 0, 100, 40), false).unwrap();
    /// let (terms, _) = layout.tab_hits[2];
    ///
    /// assert_eq!(
    ///     layout.hit_test(terms.x, terms.y),
    ///     Some(Message::SelectTab { tab: CardTab::Terms })
    /// );
    /// assert_eq!(layout.hit_test(0, 0), None);
    /// ```
    #[must_use]
    pub fn hit_test(&self, column: u16, row: u16) -> Option<Message> {
        let position = Position::new(column, row);

        if let Some((_, tab)) = self.tab_hits.iter().find(|(r, _)| r.contains(position)) {
            return Some(Message::SelectTab { tab: *tab });
        }

        self.button_hits
            .iter()
            .find(|(r, _)| r.contains(position))
            .map(|(_, button)| button.message())
    }
}

/// Lays labels out left to right on a single row, separated by `gap` columns.
///
/// Segments that would overflow the row are clipped, and dropped entirely
/// once nothing of them is visible.
fn row_segments<T>(row: Rect, labels: impl Iterator<Item = (String, T)>, gap: u16) -> Vec<(Rect, T)> {
    let mut x = row.x;
    let mut segments = Vec::new();
    for (label, value) in labels {
        let width = label.chars().count() as u16;
        let segment = Rect::new(x, row.y, width, 1).intersection(row);
        if segment.is_empty() {
            break;
        }
        segments.push((segment, value));
        x = x.saturating_add(width).saturating_add(gap);
    }
    segments
}

/// Creates a centered rectangle within a given area.
///
/// If the requested dimensions exceed the available area, the rectangle
/// will be clamped to fit.
#[must_use]
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let popup_width = width.min(area.width);
    let popup_height = height.min(area.height);

    let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_height)) / 2;

    Rect::new(x, y, popup_width, popup_height)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> CardLayout {
        CardLayout::compute(Rect::new(0, 0, 100, 40), false).unwrap()
    }

    #[test]
    fn centered_rect_positions_correctly() {
        let centered = centered_rect(20, 10, Rect::new(0, 0, 80, 24));
        assert_eq!(centered, Rect::new(30, 7, 20, 10));
    }

    #[test]
    fn centered_rect_clamps_to_area() {
        let centered = centered_rect(100, 50, Rect::new(0, 0, 40, 12));
        assert_eq!(centered, Rect::new(0, 0, 40, 12));
    }

    #[test]
    fn too_small_area_has_no_layout() {
        assert!(CardLayout::compute(Rect::new(0, 0, 39, 40), false).is_none());
        assert!(CardLayout::compute(Rect::new(0, 0, 100, 19), false).is_none());
        assert!(CardLayout::compute(Rect::new(0, 0, 40, 20), false).is_some());
    }

    #[test]
    fn sections_stack_in_order() {
        let layout = layout();
        assert_eq!(layout.header.y, layout.card.y + 1);
        assert_eq!(layout.stats.y, layout.header.bottom());
        assert_eq!(layout.tabs.y, layout.stats.bottom());
        assert_eq!(layout.separator.y, layout.tabs.bottom());
        assert_eq!(layout.body.y, layout.separator.bottom());
        assert_eq!(layout.footer.y, layout.body.bottom());
        assert_eq!(layout.actions.y, layout.footer.bottom());
        assert_eq!(layout.actions.bottom(), layout.card.bottom() - 1);
    }

    #[test]
    fn code_panel_takes_space_from_body() {
        let closed = layout();
        let open = CardLayout::compute(Rect::new(0, 0, 100, 40), true).unwrap();

        let panel = open.code_panel.unwrap();
        assert_eq!(panel.height, CODE_PANEL_HEIGHT);
        assert_eq!(open.body.height, closed.body.height - CODE_PANEL_HEIGHT);
        assert_eq!(panel.y, open.body.bottom());
    }

    #[test]
    fn code_panel_dropped_when_it_does_not_fit() {
        let layout = CardLayout::compute(Rect::new(0, 0, 60, 20), true).unwrap();
        assert!(layout.code_panel.is_none());
        assert_eq!(layout.footer.height, FOOTER_HEIGHT);
        assert_eq!(layout.actions.height, 1);
        assert_eq!(layout.actions.bottom(), layout.card.bottom() - 1);
        assert!(!layout.button_hits.is_empty());
        for (rect, button) in &layout.button_hits {
            assert_eq!(layout.hit_test(rect.x, rect.y), Some(button.message()));
        }
    }

    #[test]
    fn code_panel_shown_once_tall_enough() {
        // Border rows plus every fixed row plus the panel
        let height = 2 + FIXED_ROWS + CODE_PANEL_HEIGHT;
        let layout = CardLayout::compute(Rect::new(0, 0, 60, height), true).unwrap();
        let panel = layout.code_panel.unwrap();
        assert_eq!(panel.height, CODE_PANEL_HEIGHT);
        assert_eq!(layout.body.height, BODY_MIN_HEIGHT);
        assert_eq!(layout.actions.bottom(), layout.card.bottom() - 1);

        let shorter = CardLayout::compute(Rect::new(0, 0, 60, height - 1), true).unwrap();
        assert!(shorter.code_panel.is_none());
    }

    #[test]
    fn tab_hits_follow_labels_and_dividers() {
        let layout = layout();
        assert_eq!(layout.tab_hits.len(), 3);

        let (overview, tab) = layout.tab_hits[0];
        assert_eq!(tab, CardTab::Overview);
        assert_eq!(overview.x, layout.tabs.x);
        assert_eq!(overview.width, tab_label(CardTab::Overview).len() as u16);

        let (coverage, _) = layout.tab_hits[1];
        assert_eq!(coverage.x, overview.right() + 3);
    }

    #[test]
    fn hit_test_maps_every_control() {
        let layout = layout();

        for (rect, tab) in &layout.tab_hits {
            assert_eq!(
                layout.hit_test(rect.right() - 1, rect.y),
                Some(Message::SelectTab { tab: *tab })
            );
        }
        for (rect, button) in &layout.button_hits {
            assert_eq!(layout.hit_test(rect.x, rect.y), Some(button.message()));
        }
    }

    #[test]
    fn hit_test_ignores_gaps_and_body() {
        let layout = layout();
        let (overview, _) = layout.tab_hits[0];
        // Divider between the first two tabs
        assert_eq!(layout.hit_test(overview.right() + 1, overview.y), None);
        assert_eq!(layout.hit_test(layout.body.x, layout.body.y), None);
    }

    #[test]
    fn narrow_card_clips_buttons() {
        let layout = CardLayout::compute(Rect::new(0, 0, 40, 20), false).unwrap();
        assert!(layout.button_hits.len() < ActionButton::ALL.len());
        for (rect, _) in &layout.button_hits {
            assert!(rect.right() <= layout.actions.right());
        }
    }
}
