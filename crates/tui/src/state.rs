//! Card UI state.
//!
//! The card keeps exactly two pieces of local state: which tab is active and
//! whether the verification code panel is shown. Both live as long as the
//! card instance; a fresh [`CardState`] is created on every remount.

use wcard_protocol::CardTab;

/// The local UI state of a warranty card.
///
/// # Examples
///
/// ```
/// use wcard_protocol::CardTab;
/// use wcard_tui::CardState;
///
/// let mut state = CardState::new();
/// assert_eq!(state.active_tab, CardTab::Overview);
///
/// state.select_tab(CardTab::Terms);
/// state.toggle_code_panel();
/// assert_eq!(state.active_tab, CardTab::Terms);
/// assert!(state.show_code_panel);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CardState {
    /// The tab whose content fills the card body.
    pub active_tab: CardTab,
    /// Whether the verification code panel is visible.
    pub show_code_panel: bool,
}

impl CardState {
    /// Creates the initial state: overview tab, code panel hidden.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Activates `tab`.
    pub fn select_tab(&mut self, tab: CardTab) {
        self.active_tab = tab;
    }

    /// Activates the next tab, wrapping around.
    pub fn next_tab(&mut self) {
        self.active_tab = self.active_tab.next();
    }

    /// Activates the previous tab, wrapping around.
    pub fn prev_tab(&mut self) {
        self.active_tab = self.active_tab.prev();
    }

    /// Shows or hides the verification code panel.
    pub fn toggle_code_panel(&mut self) {
        self.show_code_panel = !self.show_code_panel;
    }
}
