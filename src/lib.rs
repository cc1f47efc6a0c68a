//! proxytui Library
//!
//! Core pricing logic and TUI for proxy rental orders. The catalog, the
//! price calculator, and the order-session state machine carry all the
//! behavior; the app/ui modules only render it.

pub mod app;
pub mod catalog;
pub mod catalog_file;
pub mod cli;
pub mod error;
pub mod input;
pub mod pricing;
pub mod session;
pub mod theme;
pub mod types;
pub mod ui;

// Re-export main types for convenience
pub use catalog::{CountryDef, PricingCatalog, ProxyTypeDef, RentalPeriodDef};
pub use catalog_file::CatalogFile;
pub use error::{ProxyTuiError, Result};
pub use pricing::{calculate_price, format_price};
pub use session::{OrderSession, Selection, SelectionPhase};
pub use types::{Country, ProxyType, RentalPeriod};
