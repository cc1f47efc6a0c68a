//! User interface rendering module
//!
//! This module is organized into submodules:
//! - `header` - title and price banner rendering
//! - `form` - the order form rows
//! - `dialogs` - centered selection popup rendering

mod dialogs;
mod form;
mod header;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::AppState;
use crate::theme::Styles;

/// Render one frame of the application.
pub fn render(f: &mut Frame, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // header
            Constraint::Min(15),    // form
            Constraint::Length(3),  // status bar
        ])
        .split(f.area());

    header::render(f, chunks[0], state);
    form::render(f, chunks[1], state);
    render_status_bar(f, chunks[2], state);

    if let Some(dialog) = &state.dialog {
        dialogs::render(f, dialog);
    }
}

/// Render the status bar: feedback on the left, key hints on the right.
fn render_status_bar(f: &mut Frame, area: ratatui::layout::Rect, state: &AppState) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    let status = Paragraph::new(Line::from(state.status_message.clone()))
        .style(Styles::status())
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(status, halves[0]);

    let hints = Paragraph::new("Up/Down move | Enter select | c clear | q quit")
        .style(Styles::status())
        .alignment(ratatui::layout::Alignment::Right)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(hints, halves[1]);
}
