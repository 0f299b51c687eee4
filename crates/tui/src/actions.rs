//! Outbound card actions.
//!
//! The card owns none of the work behind its buttons. Dismissal, download,
//! print, and share are all delegated to callbacks supplied by the host
//! through a single [`CardActions`] value. A missing callback turns the
//! corresponding button into a no-op.

use std::fmt;

use tracing::debug;

/// A zero-argument notification invoked when a card button is activated.
pub type ActionCallback = Box<dyn FnMut()>;

/// The host-supplied handlers for every outbound card action.
///
/// # Examples
///
/// ```
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use wcard_tui::CardActions;
///
/// let printed = Rc::new(Cell::new(0));
/// let counter = Rc::clone(&printed);
///
/// let mut actions = CardActions::new().on_print(move || counter.set(counter.get() + 1));
///
/// assert!(actions.print());
/// assert!(!actions.download()); // no handler supplied
/// assert_eq!(printed.get(), 1);
/// ```
#[derive(Default)]
pub struct CardActions {
    on_close: Option<ActionCallback>,
    on_download: Option<ActionCallback>,
    on_print: Option<ActionCallback>,
    on_share: Option<ActionCallback>,
}

impl CardActions {
    /// Creates a set of actions with no handlers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the dismissal handler.
    #[must_use]
    pub fn on_close(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_close = Some(Box::new(callback));
        self
    }

    /// Sets the download handler.
    #[must_use]
    pub fn on_download(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_download = Some(Box::new(callback));
        self
    }

    /// Sets the print handler.
    #[must_use]
    pub fn on_print(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_print = Some(Box::new(callback));
        self
    }

    /// Sets the share handler.
    #[must_use]
    pub fn on_share(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_share = Some(Box::new(callback));
        self
    }

    /// Invokes the dismissal handler. Returns `true` if one was supplied.
    pub fn close(&mut self) -> bool {
        dispatch("close", &mut self.on_close)
    }

    /// Invokes the download handler. Returns `true` if one was supplied.
    pub fn download(&mut self) -> bool {
        dispatch("download", &mut self.on_download)
    }

    /// Invokes the print handler. Returns `true` if one was supplied.
    pub fn print(&mut self) -> bool {
        dispatch("print", &mut self.on_print)
    }

    /// Invokes the share handler. Returns `true` if one was supplied.
    pub fn share(&mut self) -> bool {
        dispatch("share", &mut self.on_share)
    }
}

fn dispatch(action: &'static str, callback: &mut Option<ActionCallback>) -> bool {
    match callback {
        Some(callback) => {
            debug!(action, "dispatching card action");
            callback();
            true
        }
        None => {
            debug!(action, "no handler for card action");
            false
        }
    }
}

impl fmt::Debug for CardActions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CardActions")
            .field("on_close", &self.on_close.is_some())
            .field("on_download", &self.on_download.is_some())
            .field("on_print", &self.on_print.is_some())
            .field("on_share", &self.on_share.is_some())
            .finish()
    }
}
