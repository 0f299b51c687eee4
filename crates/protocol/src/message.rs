//! TUI message types for event handling.
//!
//! This module defines the message enum used for communication between
//! the TUI input handler and the warranty card, along with the card's tabs.

use serde::{Deserialize, Serialize};

/// The tabs of the warranty card body.
///
/// # Examples
///
/// ```
/// use wcard_protocol::CardTab;
///
/// assert_eq!(CardTab::default(), CardTab::Overview);
/// assert_eq!(CardTab::Overview.next(), CardTab::Coverage);
/// assert_eq!(CardTab::Overview.prev(), CardTab::Terms);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CardTab {
    /// Customer and product details.
    #[default]
    Overview,
    /// What is and is not covered.
    Coverage,
    /// Terms and conditions.
    Terms,
}

impl CardTab {
    /// All tabs in display order.
    pub const ALL: [Self; 3] = [Self::Overview, Self::Coverage, Self::Terms];

    /// Returns the tab label shown in the tab strip.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Coverage => "Coverage",
            Self::Terms => "Terms",
        }
    }

    /// Returns the zero-based position of the tab.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Overview => 0,
            Self::Coverage => 1,
            Self::Terms => 2,
        }
    }

    /// Returns the tab at `index`, if any.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Returns the next tab, wrapping around.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Overview => Self::Coverage,
            Self::Coverage => Self::Terms,
            Self::Terms => Self::Overview,
        }
    }

    /// Returns the previous tab, wrapping around.
    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::Overview => Self::Terms,
            Self::Coverage => Self::Overview,
            Self::Terms => Self::Coverage,
        }
    }
}

/// Messages that represent user actions in the TUI.
///
/// These messages are produced by the input handler and consumed by
/// the card component and its host.
///
/// # Examples
///
/// ```
/// use wcard_protocol::{CardTab, Message};
///
/// let msg: Message = serde_json::from_str(r#"{"select_tab":{"tab":"terms"}}"#).unwrap();
/// assert_eq!(msg, Message::SelectTab { tab: CardTab::Terms });
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Message {
    /// Activate a specific tab.
    SelectTab {
        /// The tab to activate.
        tab: CardTab,
    },
    /// Activate the next tab.
    NextTab,
    /// Activate the previous tab.
    PrevTab,
    /// Show or hide the verification code panel.
    ToggleCodePanel,
    /// Dismiss the card.
    Close,
    /// Request a download of the card.
    Download,
    /// Request the card to be printed.
    Print,
    /// Request the card to be shared.
    Share,
    /// Toggle help overlay.
    ToggleHelp,
    /// Quit the application.
    Quit,
    /// Mouse click at coordinates (column, row).
    ClickAt {
        /// Column (x coordinate) of the click.
        column: u16,
        /// Row (y coordinate) of the click.
        row: u16,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_cycle_visits_every_tab() {
        let mut tab = CardTab::Overview;
        let mut seen = Vec::new();
        for _ in 0..3 {
            seen.push(tab);
            tab = tab.next();
        }
        assert_eq!(seen, CardTab::ALL);
        assert_eq!(tab, CardTab::Overview);
    }

    #[test]
    fn prev_inverts_next() {
        for tab in CardTab::ALL {
            assert_eq!(tab.next().prev(), tab);
        }
    }

    #[test]
    fn index_roundtrip() {
        for tab in CardTab::ALL {
            assert_eq!(CardTab::from_index(tab.index()), Some(tab));
        }
        assert_eq!(CardTab::from_index(3), None);
    }

    #[test]
    fn message_json_format() {
        let json = serde_json::to_string(&Message::ToggleCodePanel).expect("serialize");
        assert_eq!(json, r#""toggle_code_panel""#);

        let json = serde_json::to_string(&Message::SelectTab {
            tab: CardTab::Coverage,
        })
        .expect("serialize");
        assert_eq!(json, r#"{"select_tab":{"tab":"coverage"}}"#);
    }
}
