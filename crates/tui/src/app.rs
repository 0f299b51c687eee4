//! Main application struct and run loop.
//!
//! [`App`] hosts a single [`WarrantyCard`]: it owns the record being shown,
//! decides whether the card is open, samples the clock once per frame, and
//! turns terminal events into card messages.

use ratatui::{Frame, layout::Rect};
use tracing::{debug, info};
use wcard_config::CardContent;
use wcard_protocol::{Message, WarrantyRecord};

use crate::{
    actions::CardActions,
    clock::{Clock, SystemClock},
    component::WarrantyCard,
    event::{event_to_message, poll_event},
    layout::CardLayout,
    terminal::AppTerminal,
    widgets::{CardProps, render_help_overlay},
};

/// The main application struct.
///
/// Manages the host-side state around the card and provides the main event
/// loop.
#[derive(Debug)]
pub struct App<C: Clock = SystemClock> {
    record: WarrantyRecord,
    content: CardContent,
    card: WarrantyCard,
    clock: C,
    is_open: bool,
    help_visible: bool,
    should_quit: bool,
    /// Last known terminal area, used for click hit-testing.
    last_area: Rect,
}

impl App<SystemClock> {
    /// Creates an application showing `record`, using the wall clock.
    ///
    /// # Examples
    ///
    /// ```
    /// use wcard_config::CardContent;
    /// use wcard_protocol::dummy::sample_record;
    /// use wcard_tui::{App, CardActions};
    ///
    /// let app = App::new(sample_record(), CardContent::default(), CardActions::new());
    /// assert!(app.is_open());
    /// ```
    #[must_use]
    pub fn new(record: WarrantyRecord, content: CardContent, actions: CardActions) -> Self {
        Self::with_clock(record, content, actions, SystemClock)
    }
}

impl<C: Clock> App<C> {
    /// Creates an application showing `record`, reading "now" from `clock`.
    #[must_use]
    pub fn with_clock(
        record: WarrantyRecord,
        content: CardContent,
        actions: CardActions,
        clock: C,
    ) -> Self {
        Self {
            record,
            content,
            card: WarrantyCard::new(actions),
            clock,
            is_open: true,
            help_visible: false,
            should_quit: false,
            last_area: Rect::default(),
        }
    }

    /// Returns the record being displayed.
    #[must_use]
    pub fn record(&self) -> &WarrantyRecord {
        &self.record
    }

    /// Returns the mounted card.
    #[must_use]
    pub fn card(&self) -> &WarrantyCard {
        &self.card
    }

    /// Returns whether the card is currently shown.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Returns whether the help overlay is visible.
    #[must_use]
    pub fn is_help_visible(&self) -> bool {
        self.help_visible
    }

    /// Returns whether the run loop should exit.
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Updates the application state based on a message.
    ///
    /// While the help overlay is visible, any message other than `Quit`
    /// dismisses it instead of reaching the card.
    pub fn update(&mut self, msg: Message) {
        if self.help_visible {
            match msg {
                Message::Quit => self.should_quit = true,
                _ => self.help_visible = false,
            }
            return;
        }

        match msg {
            Message::Quit => self.should_quit = true,
            Message::ToggleHelp => self.help_visible = true,
            Message::ClickAt { column, row } => {
                let hit = CardLayout::compute(self.last_area, self.card.state().show_code_panel)
                    .and_then(|layout| layout.hit_test(column, row));
                if let Some(msg) = hit {
                    debug!(?msg, column, row, "click resolved");
                    self.update(msg);
                }
            }
            Message::Close => {
                self.card.handle(&msg);
                info!(warranty = %self.record.warranty_number, "card closed");
                self.is_open = false;
                self.should_quit = true;
            }
            _ => {
                self.card.handle(&msg);
            }
        }
    }

    /// Renders one frame.
    pub fn view(&mut self, frame: &mut Frame) {
        let area = frame.area();
        self.last_area = area;

        let props = CardProps {
            record: &self.record,
            content: &self.content,
            is_open: self.is_open,
            now: self.clock.now(),
        };
        self.card.render(&props, area, frame.buffer_mut());

        if self.help_visible {
            render_help_overlay(area, frame.buffer_mut());
        }
    }

    /// Runs the main event loop until the card is closed or the user quits.
    ///
    /// # Errors
    ///
    /// Returns an error if drawing or polling the terminal fails.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use wcard_config::CardContent;
    /// use wcard_protocol::dummy::sample_record;
    /// use wcard_tui::{App, CardActions, terminal};
    ///
    /// #[tokio::main]
    /// async fn main() -> anyhow::Result<()> {
    ///     let mut terminal = terminal::setup_terminal()?;
    ///     let mut app = App::new(sample_record(), CardContent::default(), CardActions::new());
    ///     app.run(&mut terminal).await?;
    ///     terminal::restore_terminal(&mut terminal)?;
    ///     Ok(())
    /// }
    /// ```
    pub async fn run(&mut self, terminal: &mut AppTerminal) -> anyhow::Result<()> {
        loop {
            terminal.draw(|frame| self.view(frame))?;

            if let Some(msg) = poll_event()?.as_ref().and_then(event_to_message) {
                self.update(msg);
            }

            if self.should_quit {
                break;
            }

            tokio::task::yield_now().await;
        }
        Ok(())
    }
}
