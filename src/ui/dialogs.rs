//! Selection popup rendering

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Clear, List, ListItem, ListState},
    Frame,
};

use crate::input::SelectDialog;
use crate::theme::{Colors, Styles};

/// Render an open selection popup centered over the form.
pub fn render(f: &mut Frame, dialog: &SelectDialog) {
    let height = (dialog.items.len() as u16).saturating_add(2).min(12);
    let area = centered_rect(40, height, f.area());

    let items: Vec<ListItem> = dialog
        .items
        .iter()
        .map(|item| ListItem::new(item.label.clone()))
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(dialog.title.clone())
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Colors::BORDER_ACTIVE)),
        )
        .highlight_style(Styles::popup_selected())
        .highlight_symbol(">> ");

    let mut list_state = ListState::default().with_selected(Some(dialog.selected));

    f.render_widget(Clear, area);
    f.render_stateful_widget(list, area, &mut list_state);
}

/// A rect of the given width percentage and fixed height, centered in `r`.
fn centered_rect(percent_x: u16, height: u16, r: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
