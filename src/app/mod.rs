//! Application module
//!
//! Owns the event loop: poll a key event, feed it to the form or the open
//! popup, redraw. Every selection event runs to completion (including the
//! price refresh) before the next event is read, so the displayed price can
//! never lag a selection.

pub mod state;

pub use state::AppState;

use std::time::Duration;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{debug, info};

use crate::catalog::PricingCatalog;
use crate::error::Result;
use crate::input::{Choice, DialogItem, FormField, InputResult, SelectDialog};
use crate::types::ProxyType;
use crate::ui;

/// Main application
pub struct App {
    state: AppState,
}

impl App {
    /// Create a new application instance over a catalog.
    pub fn new(catalog: PricingCatalog) -> Self {
        info!("Creating new App instance");
        Self {
            state: AppState::new(catalog),
        }
    }

    /// Borrow the UI state.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Run the main application loop.
    pub fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    ) -> Result<()> {
        info!("Starting main application loop");

        loop {
            if crossterm::event::poll(Duration::from_millis(50))? {
                if let Event::Key(key_event) = crossterm::event::read()? {
                    if key_event.kind == KeyEventKind::Press && self.handle_key_event(key_event) {
                        break; // Exit requested
                    }
                }
            }

            terminal.draw(|f| ui::render(f, &self.state))?;
        }

        Ok(())
    }

    /// Handle one key event. Returns true when the user asked to quit.
    pub fn handle_key_event(&mut self, key_event: KeyEvent) -> bool {
        // An open popup captures every key.
        if let Some(dialog) = self.state.dialog.as_mut() {
            match dialog.handle_input(key_event) {
                InputResult::Confirm(choice) => {
                    self.state.dialog = None;
                    self.apply_choice(choice);
                }
                InputResult::Cancel => {
                    self.state.dialog = None;
                }
                InputResult::Continue => {}
            }
            return false;
        }

        match key_event.code {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Char('c') => self.clear_form(),
            KeyCode::Down | KeyCode::Tab => {
                self.state.focus = self.state.focus.next();
            }
            KeyCode::Up | KeyCode::BackTab => {
                self.state.focus = self.state.focus.previous();
            }
            KeyCode::Enter => self.activate_focused(),
            KeyCode::Char(ch) if self.state.focus == FormField::Quantity => {
                if ch.is_ascii_digit() || ch == '.' || ch == '-' {
                    self.state.quantity_input.push(ch);
                    self.apply_quantity_input();
                }
            }
            KeyCode::Backspace if self.state.focus == FormField::Quantity => {
                self.state.quantity_input.pop();
                self.apply_quantity_input();
            }
            _ => {}
        }

        false
    }

    /// Act on the focused form row.
    fn activate_focused(&mut self) {
        match self.state.focus {
            FormField::ProxyType => self.open_type_dialog(),
            FormField::Country => {
                if self.gate_open() {
                    self.open_country_dialog();
                }
            }
            FormField::RentalPeriod => {
                if self.gate_open() {
                    self.open_period_dialog();
                }
            }
            FormField::Quantity => {
                self.state.status_message = "Type digits to edit the quantity".to_string();
            }
            FormField::ClearButton => self.clear_form(),
        }
    }

    /// The dependent selectors stay disabled until a type is chosen.
    fn gate_open(&mut self) -> bool {
        if self.state.session.selection().first_field_filled {
            true
        } else {
            self.state.status_message = "Select a proxy type first".to_string();
            false
        }
    }

    fn open_type_dialog(&mut self) {
        let items: Vec<DialogItem> = self
            .state
            .session
            .catalog()
            .proxy_types()
            .map(|(ty, def)| DialogItem {
                label: def.display_name.clone(),
                choice: Choice::Type(ty),
            })
            .collect();
        self.state.dialog = Some(SelectDialog::new("Proxy type", items));
    }

    fn open_country_dialog(&mut self) {
        let items: Vec<DialogItem> = self
            .state
            .session
            .allowed_countries()
            .into_iter()
            .map(|(c, def)| DialogItem {
                label: def.display_name.clone(),
                choice: Choice::Country(c),
            })
            .collect();
        self.state.dialog = Some(SelectDialog::new("Country", items));
    }

    fn open_period_dialog(&mut self) {
        let items: Vec<DialogItem> = self
            .state
            .session
            .allowed_rental_periods()
            .into_iter()
            .map(|(p, def)| DialogItem {
                label: def.display_name.clone(),
                choice: Choice::Period(p),
            })
            .collect();
        self.state.dialog = Some(SelectDialog::new("Rental period", items));
    }

    /// Route a confirmed popup choice into the session.
    fn apply_choice(&mut self, choice: Choice) {
        match choice {
            Choice::Type(ty) => self.select_proxy_type(ty),
            Choice::Country(c) => {
                debug!(country = %c, "country selected");
                self.state.session.select_country(c);
            }
            Choice::Period(p) => {
                debug!(period = %p, "rental period selected");
                self.state.session.select_rental_period(p);
            }
        }
        self.state.status_message = self.state.session.phase().description().to_string();
    }

    fn select_proxy_type(&mut self, ty: ProxyType) {
        debug!(proxy_type = %ty, "proxy type selected");
        // The raw-value guard observes the widget before the change lands,
        // the same order the change events arrive from a form.
        let raw = ty.to_string();
        self.state.session.observe_raw_type_input(&raw);
        self.state.session.select_proxy_type(ty);
    }

    /// Re-parse the quantity buffer. Buffers that do not parse leave the
    /// stored quantity unchanged.
    fn apply_quantity_input(&mut self) {
        if let Ok(quantity) = self.state.quantity_input.parse::<f64>() {
            self.state.session.set_quantity(quantity);
        }
    }

    fn clear_form(&mut self) {
        debug!("clearing order form");
        self.state.session.clear();
        self.state.quantity_input = "1".to_string();
        self.state.focus = FormField::ProxyType;
        self.state.dialog = None;
        self.state.status_message = "Form cleared".to_string();
    }
}
