//! Catalog file handling for saving and loading pricing tables.
//!
//! A catalog file is a JSON document that replaces the built-in tables for
//! one run. Ids are the type-safe enums, so a file can re-price or restrict
//! the known options but cannot invent new id spaces. Declaration order in
//! the document is preserved into the runtime catalog.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::catalog::{CountryDef, PricingCatalog, ProxyTypeDef, RentalPeriodDef};
use crate::types::{Country, ProxyType, RentalPeriod};

/// One proxy-type row of a catalog file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProxyTypeEntry {
    pub id: ProxyType,
    pub display_name: String,
    pub base_price: f64,
    pub countries: Vec<Country>,
    pub rental_periods: Vec<RentalPeriod>,
}

/// One country row of a catalog file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountryEntry {
    pub id: Country,
    pub display_name: String,
    pub surcharge: f64,
}

/// One rental-period row of a catalog file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RentalPeriodEntry {
    pub id: RentalPeriod,
    pub display_name: String,
    pub multiplier: u32,
}

/// Pricing tables that can be saved/loaded as JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogFile {
    pub proxy_types: Vec<ProxyTypeEntry>,
    pub countries: Vec<CountryEntry>,
    pub rental_periods: Vec<RentalPeriodEntry>,
}

impl CatalogFile {
    /// Save the tables to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json =
            serde_json::to_string_pretty(self).context("Failed to serialize catalog to JSON")?;

        fs::write(&path, json)
            .with_context(|| format!("Failed to write catalog to {:?}", path.as_ref()))?;

        Ok(())
    }

    /// Load tables from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read catalog from {:?}", path.as_ref()))?;

        let catalog: Self = serde_json::from_str(&content).context("Failed to parse catalog JSON")?;

        Ok(catalog)
    }

    /// Validate the tables
    ///
    /// A valid file can never make the tolerant core lookups observable as
    /// pricing surprises: no duplicate ids, no reserved sentinel row, no
    /// negative money, no zero-day period, and every allowed-set reference
    /// resolves within the same document.
    pub fn validate(&self) -> Result<()> {
        if self.proxy_types.is_empty() {
            anyhow::bail!("Catalog must define at least one proxy type");
        }

        let mut country_ids = HashSet::new();
        for entry in &self.countries {
            if !country_ids.insert(entry.id) {
                anyhow::bail!("Duplicate country id: {}", entry.id);
            }
            if entry.display_name.trim().is_empty() {
                anyhow::bail!("Country {} must have a display name", entry.id);
            }
            if entry.surcharge < 0.0 || !entry.surcharge.is_finite() {
                anyhow::bail!("Country {} surcharge must be a non-negative number", entry.id);
            }
        }

        let mut period_ids = HashSet::new();
        for entry in &self.rental_periods {
            if !period_ids.insert(entry.id) {
                anyhow::bail!("Duplicate rental period id: {}", entry.id);
            }
            if entry.display_name.trim().is_empty() {
                anyhow::bail!("Rental period {} must have a display name", entry.id);
            }
            if entry.multiplier == 0 {
                anyhow::bail!("Rental period {} must cover at least one day", entry.id);
            }
        }

        let mut type_ids = HashSet::new();
        for entry in &self.proxy_types {
            if entry.id == ProxyType::Default {
                anyhow::bail!("The \"default\" proxy type id is reserved");
            }
            if !type_ids.insert(entry.id) {
                anyhow::bail!("Duplicate proxy type id: {}", entry.id);
            }
            if entry.display_name.trim().is_empty() {
                anyhow::bail!("Proxy type {} must have a display name", entry.id);
            }
            if entry.base_price < 0.0 || !entry.base_price.is_finite() {
                anyhow::bail!("Proxy type {} base price must be a non-negative number", entry.id);
            }
            if entry.countries.is_empty() {
                anyhow::bail!("Proxy type {} must allow at least one country", entry.id);
            }
            if entry.rental_periods.is_empty() {
                anyhow::bail!("Proxy type {} must allow at least one rental period", entry.id);
            }
            for country in &entry.countries {
                if !country_ids.contains(country) {
                    anyhow::bail!(
                        "Proxy type {} references undefined country {}",
                        entry.id,
                        country
                    );
                }
            }
            for period in &entry.rental_periods {
                if !period_ids.contains(period) {
                    anyhow::bail!(
                        "Proxy type {} references undefined rental period {}",
                        entry.id,
                        period
                    );
                }
            }
        }

        Ok(())
    }

    /// Convert into the runtime catalog, preserving declaration order
    pub fn into_catalog(self) -> PricingCatalog {
        let proxy_types = self
            .proxy_types
            .into_iter()
            .map(|e| {
                (
                    e.id,
                    ProxyTypeDef {
                        display_name: e.display_name,
                        base_price: e.base_price,
                        countries: e.countries,
                        rental_periods: e.rental_periods,
                    },
                )
            })
            .collect();
        let countries = self
            .countries
            .into_iter()
            .map(|e| {
                (
                    e.id,
                    CountryDef {
                        display_name: e.display_name,
                        surcharge: e.surcharge,
                    },
                )
            })
            .collect();
        let rental_periods = self
            .rental_periods
            .into_iter()
            .map(|e| {
                (
                    e.id,
                    RentalPeriodDef {
                        display_name: e.display_name,
                        multiplier: e.multiplier,
                    },
                )
            })
            .collect();
        PricingCatalog::new(proxy_types, countries, rental_periods)
    }

    /// Snapshot a runtime catalog as file entries (used by `catalog export`)
    pub fn from_catalog(catalog: &PricingCatalog) -> Self {
        Self {
            proxy_types: catalog
                .proxy_types()
                .map(|(id, def)| ProxyTypeEntry {
                    id,
                    display_name: def.display_name.clone(),
                    base_price: def.base_price,
                    countries: def.countries.clone(),
                    rental_periods: def.rental_periods.clone(),
                })
                .collect(),
            countries: catalog
                .countries()
                .map(|(id, def)| CountryEntry {
                    id,
                    display_name: def.display_name.clone(),
                    surcharge: def.surcharge,
                })
                .collect(),
            rental_periods: catalog
                .rental_periods()
                .map(|(id, def)| RentalPeriodEntry {
                    id,
                    display_name: def.display_name.clone(),
                    multiplier: def.multiplier,
                })
                .collect(),
        }
    }
}
