//! Status-driven accent colors.
//!
//! Every card is tinted by its warranty status. The palette follows the
//! Tailwind hues the web back-office uses, so a card looks the same in the
//! terminal as it does in the browser.
//!
//! | Status | Gradient |
//! |--------|----------|
//! | `ACTIVE` | emerald → teal |
//! | `EXPIRED` | red → rose |
//! | `CLAIMED` | purple → violet |
//! | `VOIDED` | gray → slate |
//! | anything else | blue → indigo |

use ratatui::style::Color;
use wcard_protocol::WarrantyStatus;

/// Highlight for a warranty that expires within the expiring-soon window (amber-500).
pub const EXPIRING_SOON_COLOR: Color = Color::Rgb(245, 158, 11);

/// Color for dates and badges of an expired warranty (red-500).
pub const EXPIRED_COLOR: Color = Color::Rgb(239, 68, 68);

/// The accent tokens applied to a card for a given status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusStyle {
    /// Primary gradient (start, end): card border, status badge, active tab.
    pub gradient: (Color, Color),
    /// Background tint for filled panels.
    pub background: Color,
    /// Text tint for headings on the card.
    pub text: Color,
    /// Border tint for inner panels.
    pub border: Color,
}

const EMERALD: StatusStyle = StatusStyle {
    gradient: (Color::Rgb(16, 185, 129), Color::Rgb(20, 184, 166)),
    background: Color::Rgb(236, 253, 245),
    text: Color::Rgb(4, 120, 87),
    border: Color::Rgb(167, 243, 208),
};

const RED: StatusStyle = StatusStyle {
    gradient: (Color::Rgb(239, 68, 68), Color::Rgb(244, 63, 94)),
    background: Color::Rgb(254, 242, 242),
    text: Color::Rgb(185, 28, 28),
    border: Color::Rgb(254, 202, 202),
};

const PURPLE: StatusStyle = StatusStyle {
    gradient: (Color::Rgb(168, 85, 247), Color::Rgb(139, 92, 246)),
    background: Color::Rgb(250, 245, 255),
    text: Color::Rgb(126, 34, 206),
    border: Color::Rgb(233, 213, 255),
};

const GRAY: StatusStyle = StatusStyle {
    gradient: (Color::Rgb(107, 114, 128), Color::Rgb(100, 116, 139)),
    background: Color::Rgb(249, 250, 251),
    text: Color::Rgb(55, 65, 81),
    border: Color::Rgb(229, 231, 235),
};

const BLUE: StatusStyle = StatusStyle {
    gradient: (Color::Rgb(59, 130, 246), Color::Rgb(99, 102, 241)),
    background: Color::Rgb(239, 246, 255),
    text: Color::Rgb(29, 78, 216),
    border: Color::Rgb(191, 219, 254),
};

/// Returns the accent tokens for a status string, matched case-insensitively.
///
/// Unknown statuses get the blue "info" treatment.
///
/// # Examples
///
/// ```
/// use wcard_tui::widgets::{status_style, status_style_for};
/// use wcard_protocol::WarrantyStatus;
///
/// assert_eq!(status_style("active"), status_style("ACTIVE"));
/// assert_eq!(status_style("foo"), status_style_for(WarrantyStatus::Other));
/// ```
#[must_use]
pub fn status_style(status: &str) -> StatusStyle {
    status_style_for(WarrantyStatus::classify(status))
}

/// Returns the accent tokens for an already-classified status.
#[must_use]
pub const fn status_style_for(status: WarrantyStatus) -> StatusStyle {
    match status {
        WarrantyStatus::Active => EMERALD,
        WarrantyStatus::Expired => RED,
        WarrantyStatus::Claimed => PURPLE,
        WarrantyStatus::Voided => GRAY,
        WarrantyStatus::Other => BLUE,
    }
}
