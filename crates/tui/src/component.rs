//! The warranty card component.
//!
//! [`WarrantyCard`] pairs the card's local [`CardState`] with the host's
//! [`CardActions`] and routes messages to one or the other. It never touches
//! the record: the host passes it in through [`CardProps`] on every render.

use ratatui::{buffer::Buffer, layout::Rect};
use tracing::trace;
use wcard_protocol::Message;

use crate::actions::CardActions;
use crate::state::CardState;
use crate::widgets::{CardProps, render_warranty_card};

/// A mounted warranty card.
///
/// # Examples
///
/// ```
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use wcard_protocol::{CardTab, Message};
/// use wcard_tui::{CardActions, WarrantyCard};
///
/// let downloads = Rc::new(Cell::new(0));
/// let counter = Rc::clone(&downloads);
/// let mut card = WarrantyCard::new(
///     CardActions::new().on_download(move || counter.set(counter.get() + 1)),
/// );
///
/// assert!(card.handle(&Message::SelectTab { tab: CardTab::Coverage }));
/// assert!(card.handle(&Message::Download));
/// assert!(!card.handle(&Message::Quit));
///
/// assert_eq!(card.state().active_tab, CardTab::Coverage);
/// assert_eq!(downloads.get(), 1);
/// ```
#[derive(Debug, Default)]
pub struct WarrantyCard {
    state: CardState,
    actions: CardActions,
}

impl WarrantyCard {
    /// Mounts a card with fresh state and the given action handlers.
    #[must_use]
    pub fn new(actions: CardActions) -> Self {
        Self {
            state: CardState::new(),
            actions,
        }
    }

    /// Returns the card's local UI state.
    #[must_use]
    pub fn state(&self) -> &CardState {
        &self.state
    }

    /// Applies a message to the card.
    ///
    /// Tab and code panel messages update local state; close, download,
    /// print, and share messages invoke the matching action handler.
    /// Returns `false` for messages the card does not handle.
    pub fn handle(&mut self, msg: &Message) -> bool {
        trace!(?msg, "card message");
        match msg {
            Message::SelectTab { tab } => self.state.select_tab(*tab),
            Message::NextTab => self.state.next_tab(),
            Message::PrevTab => self.state.prev_tab(),
            Message::ToggleCodePanel => self.state.toggle_code_panel(),
            Message::Close => {
                self.actions.close();
            }
            Message::Download => {
                self.actions.download();
            }
            Message::Print => {
                self.actions.print();
            }
            Message::Share => {
                self.actions.share();
            }
            Message::ToggleHelp | Message::Quit | Message::ClickAt { .. } => return false,
        }
        true
    }

    /// Renders the card for the given props.
    pub fn render(&self, props: &CardProps<'_>, area: Rect, buf: &mut Buffer) {
        render_warranty_card(props, &self.state, area, buf);
    }
}
