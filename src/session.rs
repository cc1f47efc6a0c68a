//! Order session state machine
//!
//! This module provides the authoritative source of truth for one ordering
//! session. It owns the live selection, enforces the field-dependency rules,
//! and recomputes the price after every mutation.
//!
//! # Design Principles
//!
//! - **Single Source of Truth**: the `OrderSession` owns the current
//!   `Selection`
//! - **Dependent Resets**: changing the proxy type always discards the
//!   country and rental period, so a stale, now-illegal pair can never
//!   survive a type change
//! - **No Global State**: a session is a plain value, constructed fresh per
//!   ordering session
//! - **No Failures**: every transition tolerates missing components, which
//!   simply price to zero
//!
//! # Phase Flow
//!
//! ```text
//! Empty ──select_proxy_type──▶ TypeChosen ──country + period──▶ Configured
//!   ▲                                                              │
//!   └──────────────────────── clear ◀─────────────────────────────┘
//! ```

use crate::catalog::{CountryDef, PricingCatalog, RentalPeriodDef};
use crate::pricing::calculate_price;
use crate::types::{Country, ProxyType, RentalPeriod};

/// The live state of one order form.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    /// Chosen proxy type; the sentinel until the user picks one
    pub proxy_type: ProxyType,
    /// Chosen country, cleared on every type change
    pub country: Option<Country>,
    /// Chosen rental period, cleared on every type change
    pub rental_period: Option<RentalPeriod>,
    /// Number of proxies ordered; stored as entered, no clamping
    pub quantity: f64,
    /// Gate for the dependent selectors: set once a real type is chosen
    pub first_field_filled: bool,
    /// Last computed price
    pub price: f64,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            proxy_type: ProxyType::Default,
            country: None,
            rental_period: None,
            quantity: 1.0,
            first_field_filled: false,
            price: 0.0,
        }
    }
}

/// Conceptual phase of a session, derived from the selection fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionPhase {
    /// Nothing chosen yet; dependent selectors are disabled
    Empty,
    /// A real proxy type is chosen; dependents may be set
    TypeChosen,
    /// Type, country, and period all set; eligible for non-zero pricing
    Configured,
}

impl SelectionPhase {
    /// Human-readable description of the phase
    pub const fn description(self) -> &'static str {
        match self {
            Self::Empty => "Choose a proxy type to begin",
            Self::TypeChosen => "Choose a country and rental period",
            Self::Configured => "Order configured",
        }
    }
}

/// One ordering session: the pricing catalog plus the live selection.
///
/// # Example
///
/// ```
/// use proxytui::catalog::PricingCatalog;
/// use proxytui::session::OrderSession;
/// use proxytui::types::{Country, ProxyType, RentalPeriod};
///
/// let mut session = OrderSession::new(PricingCatalog::builtin());
/// session.select_proxy_type(ProxyType::Ipv4);
/// session.select_country(Country::Australia);
/// session.select_rental_period(RentalPeriod::OneDay);
/// assert_eq!(session.price(), 298.0);
/// ```
#[derive(Debug, Clone)]
pub struct OrderSession {
    catalog: PricingCatalog,
    selection: Selection,
}

impl OrderSession {
    /// Create a session with an empty selection.
    pub fn new(catalog: PricingCatalog) -> Self {
        Self {
            catalog,
            selection: Selection::default(),
        }
    }

    /// The catalog this session prices against.
    pub fn catalog(&self) -> &PricingCatalog {
        &self.catalog
    }

    /// The current selection.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// The current price.
    pub fn price(&self) -> f64 {
        self.selection.price
    }

    /// Derive the conceptual phase from the selection fields.
    pub fn phase(&self) -> SelectionPhase {
        if self.is_configured() {
            SelectionPhase::Configured
        } else if self.selection.first_field_filled {
            SelectionPhase::TypeChosen
        } else {
            SelectionPhase::Empty
        }
    }

    /// Countries the current proxy type allows, in catalog order.
    pub fn allowed_countries(&self) -> Vec<(Country, &CountryDef)> {
        self.catalog.allowed_countries(self.selection.proxy_type)
    }

    /// Rental periods the current proxy type allows, in catalog order.
    pub fn allowed_rental_periods(&self) -> Vec<(RentalPeriod, &RentalPeriodDef)> {
        self.catalog
            .allowed_rental_periods(self.selection.proxy_type)
    }

    /// Choose a proxy type.
    ///
    /// Always discards the dependent country/period choices and zeroes the
    /// price; the quantity survives.
    pub fn select_proxy_type(&mut self, ty: ProxyType) {
        self.selection.proxy_type = ty;
        self.selection.first_field_filled = true;
        self.selection.country = None;
        self.selection.rental_period = None;
        self.selection.price = 0.0;
        self.refresh_price();
    }

    /// Companion guard fired alongside type-change events with the raw
    /// widget value.
    ///
    /// While a real type is stored, an intermediate event drops the
    /// first-field gate (the change handler re-raises it). While the
    /// sentinel is stored and the widget itself reads blank, the dependent
    /// fields are force-cleared so the disabled selectors cannot carry
    /// stale values.
    pub fn observe_raw_type_input(&mut self, raw_value: &str) {
        if self.selection.proxy_type.is_chosen() {
            self.selection.first_field_filled = false;
        } else if raw_value.is_empty() {
            self.selection.country = None;
            self.selection.rental_period = None;
            self.selection.price = 0.0;
        }
    }

    /// Choose a country and reprice.
    ///
    /// Callers keep the selector disabled while no type is chosen; the
    /// session does not re-check membership because dependents are reset on
    /// every type change.
    pub fn select_country(&mut self, country: Country) {
        self.selection.country = Some(country);
        self.selection.price = self.current_price();
        self.refresh_price();
    }

    /// Choose a rental period and reprice.
    pub fn select_rental_period(&mut self, period: RentalPeriod) {
        self.selection.rental_period = Some(period);
        self.selection.price = self.current_price();
        self.refresh_price();
    }

    /// Store a quantity as entered and reprice. No parsing or clamping.
    pub fn set_quantity(&mut self, quantity: f64) {
        self.selection.quantity = quantity;
        self.selection.price = self.current_price();
        self.refresh_price();
    }

    /// Reset every field to its initial default. Idempotent.
    pub fn clear(&mut self) {
        self.selection = Selection::default();
    }

    fn is_configured(&self) -> bool {
        self.selection.proxy_type.is_chosen()
            && self.selection.country.is_some()
            && self.selection.rental_period.is_some()
    }

    fn current_price(&self) -> f64 {
        calculate_price(
            &self.catalog,
            self.selection.proxy_type,
            self.selection.country,
            self.selection.rental_period,
            self.selection.quantity,
        )
    }

    /// Recompute the price when the selection is fully configured.
    ///
    /// Invoked at the end of every mutating transition, in the same logical
    /// step as the mutation. This is the only path that refreshes the price
    /// after a pure quantity change.
    fn refresh_price(&mut self) {
        if self.is_configured() {
            self.selection.price = self.current_price();
        }
    }
}
