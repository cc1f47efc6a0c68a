//! Order form rendering
//!
//! Five stacked rows: the three selectors, the quantity input, and the
//! clear action. Gated rows render dimmed until a proxy type is chosen.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::AppState;
use crate::input::FormField;
use crate::theme::{Colors, Styles};

const ROWS: [FormField; 5] = [
    FormField::ProxyType,
    FormField::Country,
    FormField::RentalPeriod,
    FormField::Quantity,
    FormField::ClearButton,
];

/// Render the order form.
pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(area);

    for (row, chunk) in ROWS.into_iter().zip(chunks.iter()) {
        render_row(f, *chunk, state, row);
    }
}

fn render_row(f: &mut Frame, area: Rect, state: &AppState, row: FormField) {
    let disabled = row.is_gated() && !state.session.selection().first_field_filled;
    let focused = state.focus == row;

    let border_style = if focused {
        Style::default().fg(Colors::BORDER_ACTIVE)
    } else {
        Style::default().fg(Colors::BORDER_INACTIVE)
    };
    let text_style = if disabled {
        Styles::disabled()
    } else if focused {
        Styles::focused()
    } else {
        Styles::field()
    };

    let value = row_value(state, row, disabled);
    let alignment = if row == FormField::ClearButton {
        Alignment::Center
    } else {
        Alignment::Left
    };

    let widget = Paragraph::new(value)
        .style(text_style)
        .alignment(alignment)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(row.label()),
        );
    f.render_widget(widget, area);
}

/// The text shown inside a row.
fn row_value(state: &AppState, row: FormField, disabled: bool) -> String {
    let selection = state.session.selection();
    let catalog = state.session.catalog();

    match row {
        FormField::ProxyType => {
            if selection.proxy_type.is_chosen() {
                catalog.proxy_type(selection.proxy_type).display_name.clone()
            } else {
                "Select a proxy type".to_string()
            }
        }
        FormField::Country => match selection.country {
            Some(c) => catalog
                .country(c)
                .map(|def| def.display_name.clone())
                .unwrap_or_else(|| c.to_string()),
            None if disabled => "-".to_string(),
            None => "Select a country".to_string(),
        },
        FormField::RentalPeriod => match selection.rental_period {
            Some(p) => catalog
                .rental_period(p)
                .map(|def| def.display_name.clone())
                .unwrap_or_else(|| p.to_string()),
            None if disabled => "-".to_string(),
            None => "Select a rental period".to_string(),
        },
        FormField::Quantity => state.quantity_input.clone(),
        FormField::ClearButton => "[ Clear ]".to_string(),
    }
}
