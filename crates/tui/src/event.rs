//! Event handling and key mappings.
//!
//! This module provides event polling and conversion from terminal events
//! to application messages.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind};
use wcard_protocol::{CardTab, Message};

/// Default poll timeout for events.
const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Polls for a terminal event with the default timeout.
///
/// Returns `Some(Event)` if an event is available within the timeout,
/// or `None` if the timeout expires without an event.
///
/// # Errors
///
/// Returns an error if polling the terminal fails.
pub fn poll_event() -> std::io::Result<Option<Event>> {
    if event::poll(POLL_TIMEOUT)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Converts an event (keyboard or mouse) to an application message.
///
/// Returns `Some(Message)` if the event maps to an action,
/// or `None` if the event is not handled.
#[must_use]
pub fn event_to_message(event: &Event) -> Option<Message> {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => key_to_message(*key),
        Event::Mouse(mouse) => match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => Some(Message::ClickAt {
                column: mouse.column,
                row: mouse.row,
            }),
            _ => None,
        },
        _ => None,
    }
}

/// Converts a terminal key event to an application message.
///
/// # Key Bindings
///
/// | Key | Action |
/// |-----|--------|
/// | `Ctrl+C` | Quit |
/// | `1` / `2` / `3` | Overview / Coverage / Terms tab |
/// | `Tab` or `Right` | Next tab |
/// | `Shift+Tab` or `Left` | Previous tab |
/// | `c` | Toggle verification code panel |
/// | `d` | Download |
/// | `p` | Print |
/// | `s` | Share |
/// | `Esc` | Close the card |
/// | `?` | Toggle help |
#[must_use]
pub fn key_to_message(key: KeyEvent) -> Option<Message> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Message::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char(digit @ '1'..='3') => {
            let index = digit as usize - '1' as usize;
            CardTab::from_index(index).map(|tab| Message::SelectTab { tab })
        }
        KeyCode::Tab | KeyCode::Right => Some(Message::NextTab),
        KeyCode::BackTab | KeyCode::Left => Some(Message::PrevTab),

        KeyCode::Char('c') => Some(Message::ToggleCodePanel),
        KeyCode::Char('d') => Some(Message::Download),
        KeyCode::Char('p') => Some(Message::Print),
        KeyCode::Char('s') => Some(Message::Share),
        KeyCode::Esc => Some(Message::Close),

        KeyCode::Char('?') => Some(Message::ToggleHelp),

        _ => None,
    }
}
