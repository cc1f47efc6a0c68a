//! proxytui - Main entry point
//!
//! A terminal-based price calculator for proxy rental orders. With no
//! subcommand the interactive form starts; `quote`, `catalog`, and
//! `validate` run headless.

use std::io::stdout;
use std::path::Path;

use anyhow::{Context, Result};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{debug, error, info};

use proxytui::app::App;
use proxytui::catalog::PricingCatalog;
use proxytui::catalog_file::CatalogFile;
use proxytui::cli::{Cli, Commands};
use proxytui::error::ProxyTuiError;
use proxytui::pricing::{calculate_price, format_price};
use proxytui::types::{Country, ProxyType, RentalPeriod};

/// Initialize tracing with appropriate settings
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(
            // RUST_LOG overrides the default level
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Main application entry point
fn main() -> Result<()> {
    init_tracing();
    info!("proxytui starting up");

    let cli = Cli::parse_args();
    debug!("CLI arguments parsed");

    let catalog = load_catalog(cli.catalog.as_deref())?;

    match cli.command {
        Some(Commands::Quote {
            proxy_type,
            country,
            period,
            count,
            json,
        }) => run_quote(&catalog, &proxy_type, country.as_deref(), period.as_deref(), count, json),
        Some(Commands::Catalog { json, export }) => run_catalog(&catalog, json, export.as_deref()),
        Some(Commands::Validate { file }) => {
            info!("Validating catalog file: {:?}", file);
            match CatalogFile::load_from_file(&file).and_then(|c| {
                c.validate()?;
                Ok(())
            }) {
                Ok(()) => {
                    info!("Catalog validation successful");
                    println!("✓ Catalog file is valid: {:?}", file);
                    Ok(())
                }
                Err(e) => {
                    error!("Catalog validation failed: {:#}", e);
                    eprintln!("✗ Catalog validation failed: {:#}", e);
                    std::process::exit(1);
                }
            }
        }
        None => {
            info!("No command specified, launching TUI");
            run_tui(catalog)
        }
    }
}

/// Load the active pricing tables: the built-in ones, or a validated
/// catalog file.
fn load_catalog(path: Option<&Path>) -> Result<PricingCatalog> {
    match path {
        Some(path) => {
            info!("Loading catalog from {:?}", path);
            let file = CatalogFile::load_from_file(path)?;
            file.validate()
                .with_context(|| format!("Invalid catalog file {:?}", path))?;
            Ok(file.into_catalog())
        }
        None => Ok(PricingCatalog::builtin()),
    }
}

/// Compute and print one price without the TUI.
fn run_quote(
    catalog: &PricingCatalog,
    proxy_type: &str,
    country: Option<&str>,
    period: Option<&str>,
    count: f64,
    json: bool,
) -> Result<()> {
    let proxy_type: ProxyType = proxy_type
        .parse()
        .map_err(|_| ProxyTuiError::validation(format!("unknown proxy type: {proxy_type}")))?;
    let country: Option<Country> = country
        .map(|raw| {
            raw.parse()
                .map_err(|_| ProxyTuiError::validation(format!("unknown country: {raw}")))
        })
        .transpose()?;
    let period: Option<RentalPeriod> = period
        .map(|raw| {
            raw.parse()
                .map_err(|_| ProxyTuiError::validation(format!("unknown rental period: {raw}")))
        })
        .transpose()?;

    // The interactive form only ever offers legal combinations; the
    // headless path enforces the same catalog rules up front.
    let def = catalog.proxy_type(proxy_type);
    if let Some(c) = country {
        if !def.countries.contains(&c) {
            return Err(ProxyTuiError::validation(format!(
                "country {c} is not available for proxy type {proxy_type}"
            ))
            .into());
        }
    }
    if let Some(p) = period {
        if !def.rental_periods.contains(&p) {
            return Err(ProxyTuiError::validation(format!(
                "rental period {p} is not available for proxy type {proxy_type}"
            ))
            .into());
        }
    }

    let price = calculate_price(catalog, proxy_type, country, period, count);
    debug!(price, "quote computed");

    if json {
        let quote = serde_json::json!({
            "proxy_type": proxy_type,
            "country": country,
            "period": period,
            "count": count,
            "price": price,
            "display": format_price(price),
        });
        println!("{}", serde_json::to_string_pretty(&quote)?);
    } else {
        println!("{}", format_price(price));
    }
    Ok(())
}

/// Print the active pricing tables, or export them as a catalog file.
fn run_catalog(catalog: &PricingCatalog, json: bool, export: Option<&Path>) -> Result<()> {
    if let Some(path) = export {
        CatalogFile::from_catalog(catalog).save_to_file(path)?;
        println!("✓ Catalog written to {:?}", path);
        return Ok(());
    }

    if json {
        let file = CatalogFile::from_catalog(catalog);
        println!("{}", serde_json::to_string_pretty(&file)?);
        return Ok(());
    }

    println!("Proxy types:");
    for (id, def) in catalog.proxy_types() {
        let countries: Vec<String> = def.countries.iter().map(|c| c.to_string()).collect();
        let periods: Vec<String> = def.rental_periods.iter().map(|p| p.to_string()).collect();
        println!(
            "  {:<8} {:<14} base {:>8.2}   countries: {}   periods: {}",
            id.to_string(),
            def.display_name,
            def.base_price,
            countries.join(", "),
            periods.join(", "),
        );
    }
    println!("Countries:");
    for (id, def) in catalog.countries() {
        println!(
            "  {:<10} {:<16} surcharge {:>8.2}",
            id.to_string(),
            def.display_name,
            def.surcharge
        );
    }
    println!("Rental periods:");
    for (id, def) in catalog.rental_periods() {
        println!(
            "  {:<8} {:<8} {:>4} day(s)",
            id.to_string(),
            def.display_name,
            def.multiplier
        );
    }
    Ok(())
}

/// Run the interactive order form.
fn run_tui(catalog: PricingCatalog) -> Result<()> {
    debug!("Initializing terminal for TUI mode");

    enable_raw_mode().map_err(|e| ProxyTuiError::terminal(format!("Failed to enable raw mode: {e}")))?;
    crossterm::execute!(stdout(), crossterm::terminal::EnterAlternateScreen)
        .map_err(|e| ProxyTuiError::terminal(format!("Failed to enter alternate screen: {e}")))?;

    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend)
        .map_err(|e| ProxyTuiError::terminal(format!("Failed to create terminal: {e}")))?;

    let mut app = App::new(catalog);
    let result = app.run(&mut terminal);

    // Cleanup terminal (always attempt cleanup, even if the app failed)
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(stdout(), crossterm::terminal::LeaveAlternateScreen);

    result.context("TUI session failed")
}
