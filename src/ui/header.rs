//! Title and price banner rendering

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::AppState;
use crate::pricing::format_price;
use crate::theme::Styles;

/// Render the header: application title on the left, the live price on the
/// right, rounded for display.
pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let title = Paragraph::new("Proxy Calculator")
        .style(Styles::title())
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, halves[0]);

    let price = Paragraph::new(format!("Price: {}", format_price(state.session.price())))
        .style(Styles::price())
        .alignment(Alignment::Right)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(price, halves[1]);
}
