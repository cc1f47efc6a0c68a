//! Application state definitions
//!
//! Holds the UI-facing state: the order session, which form row has focus,
//! the open selection popup (if any), and the quantity text buffer.

use crate::catalog::PricingCatalog;
use crate::input::{FormField, SelectDialog};
use crate::session::OrderSession;

/// Main application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// The ordering session backing the form
    pub session: OrderSession,
    /// Form row that currently has focus
    pub focus: FormField,
    /// Open selection popup, if any
    pub dialog: Option<SelectDialog>,
    /// Text buffer behind the quantity row; parsed on every edit
    pub quantity_input: String,
    /// Status message for user feedback
    pub status_message: String,
}

impl AppState {
    /// Create the state for a fresh ordering session.
    pub fn new(catalog: PricingCatalog) -> Self {
        Self {
            session: OrderSession::new(catalog),
            focus: FormField::ProxyType,
            dialog: None,
            quantity_input: "1".to_string(),
            status_message: "Welcome! Choose a proxy type to begin".to_string(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(PricingCatalog::builtin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state_focuses_type_row() {
        let state = AppState::default();
        assert_eq!(state.focus, FormField::ProxyType);
        assert!(state.dialog.is_none());
        assert_eq!(state.quantity_input, "1");
    }

    #[test]
    fn test_default_state_has_welcome_message() {
        let state = AppState::default();
        assert!(state.status_message.contains("Welcome"));
    }

    #[test]
    fn test_default_state_matches_session_defaults() {
        let state = AppState::default();
        assert_eq!(state.session.selection().quantity, 1.0);
        assert_eq!(state.session.price(), 0.0);
    }
}
