//! Input handling module
//!
//! Form focus navigation and the selection popup used for the dropdown-like
//! fields. The popup owns its own key handling and reports back a typed
//! result; the app decides what to do with it.

use crossterm::event::{KeyCode, KeyEvent};

use crate::types::{Country, ProxyType, RentalPeriod};

/// The focusable rows of the order form, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    ProxyType,
    Country,
    RentalPeriod,
    Quantity,
    ClearButton,
}

impl FormField {
    /// Next row down, wrapping to the top.
    pub fn next(self) -> Self {
        match self {
            Self::ProxyType => Self::Country,
            Self::Country => Self::RentalPeriod,
            Self::RentalPeriod => Self::Quantity,
            Self::Quantity => Self::ClearButton,
            Self::ClearButton => Self::ProxyType,
        }
    }

    /// Previous row up, wrapping to the bottom.
    pub fn previous(self) -> Self {
        match self {
            Self::ProxyType => Self::ClearButton,
            Self::Country => Self::ProxyType,
            Self::RentalPeriod => Self::Country,
            Self::Quantity => Self::RentalPeriod,
            Self::ClearButton => Self::Quantity,
        }
    }

    /// Row label shown in the form.
    pub const fn label(self) -> &'static str {
        match self {
            Self::ProxyType => "Proxy type",
            Self::Country => "Country",
            Self::RentalPeriod => "Rental period",
            Self::Quantity => "Quantity",
            Self::ClearButton => "Clear",
        }
    }

    /// True for the two rows gated behind the proxy-type choice.
    pub const fn is_gated(self) -> bool {
        matches!(self, Self::Country | Self::RentalPeriod)
    }
}

/// A concrete option offered by the selection popup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Type(ProxyType),
    Country(Country),
    Period(RentalPeriod),
}

/// One row of the selection popup.
#[derive(Debug, Clone)]
pub struct DialogItem {
    pub label: String,
    pub choice: Choice,
}

/// State of an open selection popup.
#[derive(Debug, Clone)]
pub struct SelectDialog {
    /// Popup title (the field being edited)
    pub title: String,
    /// Options offered, in catalog order
    pub items: Vec<DialogItem>,
    /// Index of the highlighted row
    pub selected: usize,
}

/// Outcome of feeding one key event to a popup.
#[derive(Debug, Clone)]
pub enum InputResult {
    /// User confirmed the highlighted choice
    Confirm(Choice),
    /// User cancelled
    Cancel,
    /// Continue processing input
    Continue,
}

impl SelectDialog {
    /// Create a popup over a non-empty option list.
    pub fn new(title: impl Into<String>, items: Vec<DialogItem>) -> Self {
        Self {
            title: title.into(),
            items,
            selected: 0,
        }
    }

    /// Handle keyboard input for the popup.
    pub fn handle_input(&mut self, key_event: KeyEvent) -> InputResult {
        match key_event.code {
            KeyCode::Up => {
                if self.selected == 0 {
                    self.selected = self.items.len().saturating_sub(1);
                } else {
                    self.selected -= 1;
                }
                InputResult::Continue
            }
            KeyCode::Down => {
                if self.selected + 1 >= self.items.len() {
                    self.selected = 0;
                } else {
                    self.selected += 1;
                }
                InputResult::Continue
            }
            KeyCode::Enter => match self.items.get(self.selected) {
                Some(item) => InputResult::Confirm(item.choice),
                None => InputResult::Cancel,
            },
            KeyCode::Esc => InputResult::Cancel,
            _ => InputResult::Continue,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn dialog() -> SelectDialog {
        SelectDialog::new(
            "Proxy type",
            vec![
                DialogItem {
                    label: "Server IPv4".to_string(),
                    choice: Choice::Type(ProxyType::Ipv4),
                },
                DialogItem {
                    label: "Server IPv6".to_string(),
                    choice: Choice::Type(ProxyType::Ipv6),
                },
                DialogItem {
                    label: "Mobile".to_string(),
                    choice: Choice::Type(ProxyType::Mobile),
                },
            ],
        )
    }

    #[test]
    fn test_focus_order_wraps() {
        let mut field = FormField::ProxyType;
        for _ in 0..5 {
            field = field.next();
        }
        assert_eq!(field, FormField::ProxyType);
        assert_eq!(FormField::ProxyType.previous(), FormField::ClearButton);
    }

    #[test]
    fn test_gated_fields() {
        assert!(FormField::Country.is_gated());
        assert!(FormField::RentalPeriod.is_gated());
        assert!(!FormField::ProxyType.is_gated());
        assert!(!FormField::Quantity.is_gated());
    }

    #[test]
    fn test_dialog_navigation_wraps() {
        let mut d = dialog();
        assert!(matches!(d.handle_input(key(KeyCode::Up)), InputResult::Continue));
        assert_eq!(d.selected, 2);
        d.handle_input(key(KeyCode::Down));
        assert_eq!(d.selected, 0);
    }

    #[test]
    fn test_dialog_confirm_returns_choice() {
        let mut d = dialog();
        d.handle_input(key(KeyCode::Down));
        match d.handle_input(key(KeyCode::Enter)) {
            InputResult::Confirm(Choice::Type(ProxyType::Ipv6)) => {}
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_dialog_escape_cancels() {
        let mut d = dialog();
        assert!(matches!(d.handle_input(key(KeyCode::Esc)), InputResult::Cancel));
    }
}
