//! Centralized theme and styling for the TUI
//!
//! Single source of truth for all colors and styles used by the order form.
//! Components never hardcode colors; they pull them from here.

use ratatui::style::{Color, Modifier, Style};

/// Core color palette for the application
pub struct Colors;

impl Colors {
    /// Primary dark background for panels and dialogs
    pub const BG_PRIMARY: Color = Color::Rgb(20, 20, 30);

    /// Default foreground text color
    pub const FG_PRIMARY: Color = Color::White;

    /// Secondary/muted text color
    pub const FG_SECONDARY: Color = Color::Gray;

    /// Disabled/inactive text color
    pub const FG_MUTED: Color = Color::DarkGray;

    /// Primary accent - borders, titles, highlights
    pub const PRIMARY: Color = Color::Cyan;

    /// Secondary accent - selected items, emphasis
    pub const SECONDARY: Color = Color::Yellow;

    /// Price banner text
    pub const PRICE: Color = Color::Green;

    /// Error/danger feedback
    pub const ERROR: Color = Color::Red;

    /// Active border color
    pub const BORDER_ACTIVE: Color = Color::Cyan;

    /// Inactive/unfocused border color
    pub const BORDER_INACTIVE: Color = Color::DarkGray;

    /// Selected item highlight
    pub const SELECTED_BG: Color = Color::Yellow;

    /// Selected item text (for contrast on yellow bg)
    pub const SELECTED_FG: Color = Color::Black;
}

/// Pre-built styles for common UI elements
pub struct Styles;

impl Styles {
    /// Screen title
    pub fn title() -> Style {
        Style::default()
            .fg(Colors::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// The price readout in the header
    pub fn price() -> Style {
        Style::default()
            .fg(Colors::PRICE)
            .add_modifier(Modifier::BOLD)
    }

    /// A focused form row
    pub fn focused() -> Style {
        Style::default().fg(Colors::SECONDARY)
    }

    /// A disabled form row (gated behind the proxy-type choice)
    pub fn disabled() -> Style {
        Style::default().fg(Colors::FG_MUTED)
    }

    /// Regular form row text
    pub fn field() -> Style {
        Style::default().fg(Colors::FG_PRIMARY)
    }

    /// Highlight for the selected popup entry
    pub fn popup_selected() -> Style {
        Style::default()
            .bg(Colors::SELECTED_BG)
            .fg(Colors::SELECTED_FG)
    }

    /// Status-bar text
    pub fn status() -> Style {
        Style::default().fg(Colors::FG_SECONDARY)
    }

    /// Status-bar text for refusals and errors
    pub fn status_error() -> Style {
        Style::default().fg(Colors::ERROR)
    }
}
