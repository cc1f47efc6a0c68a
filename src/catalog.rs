//! Pricing catalog
//!
//! Read-only source of truth for proxy types, countries, and rental periods.
//! A catalog is built once at startup — either the built-in tables or a
//! validated catalog file — and never mutated afterwards. All lookups are
//! purely functional.

use crate::types::{Country, ProxyType, RentalPeriod};

/// Attributes of one proxy type
#[derive(Debug, Clone, PartialEq)]
pub struct ProxyTypeDef {
    /// Display name of the type
    pub display_name: String,
    /// Base price per proxy, before the country surcharge
    pub base_price: f64,
    /// Countries this type can be rented in, in declaration order
    pub countries: Vec<Country>,
    /// Rental periods available for this type, in declaration order
    pub rental_periods: Vec<RentalPeriod>,
}

impl ProxyTypeDef {
    /// The definition backing the sentinel "no type chosen yet" id:
    /// zero price, no allowed options.
    fn sentinel() -> Self {
        Self {
            display_name: "default".to_string(),
            base_price: 0.0,
            countries: Vec::new(),
            rental_periods: Vec::new(),
        }
    }
}

/// Attributes of one country
#[derive(Debug, Clone, PartialEq)]
pub struct CountryDef {
    /// Display name of the country
    pub display_name: String,
    /// Per-country price addition
    pub surcharge: f64,
}

/// Attributes of one rental period
#[derive(Debug, Clone, PartialEq)]
pub struct RentalPeriodDef {
    /// Display name of the period
    pub display_name: String,
    /// Number of rental days this tier represents
    pub multiplier: u32,
}

/// Immutable lookup tables for the order form.
///
/// Entries keep their declaration order so option lists render the way the
/// catalog was written.
#[derive(Debug, Clone)]
pub struct PricingCatalog {
    proxy_types: Vec<(ProxyType, ProxyTypeDef)>,
    countries: Vec<(Country, CountryDef)>,
    rental_periods: Vec<(RentalPeriod, RentalPeriodDef)>,
    sentinel: ProxyTypeDef,
}

impl Default for PricingCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl PricingCatalog {
    /// Build a catalog from explicit tables.
    ///
    /// Used by the catalog-file loader; `builtin()` is the everyday
    /// constructor.
    pub fn new(
        proxy_types: Vec<(ProxyType, ProxyTypeDef)>,
        countries: Vec<(Country, CountryDef)>,
        rental_periods: Vec<(RentalPeriod, RentalPeriodDef)>,
    ) -> Self {
        Self {
            proxy_types,
            countries,
            rental_periods,
            sentinel: ProxyTypeDef::sentinel(),
        }
    }

    /// The built-in pricing tables.
    pub fn builtin() -> Self {
        let proxy_types = vec![
            (
                ProxyType::Ipv4,
                ProxyTypeDef {
                    display_name: "Server IPv4".to_string(),
                    base_price: 60.0,
                    countries: vec![Country::Australia, Country::Austria],
                    rental_periods: vec![
                        RentalPeriod::OneDay,
                        RentalPeriod::SevenDays,
                        RentalPeriod::OneMonth,
                    ],
                },
            ),
            (
                ProxyType::Ipv6,
                ProxyTypeDef {
                    display_name: "Server IPv6".to_string(),
                    base_price: 0.51,
                    countries: vec![Country::Austria, Country::Uk],
                    rental_periods: vec![
                        RentalPeriod::ThreeDays,
                        RentalPeriod::OneMonth,
                        RentalPeriod::OneYear,
                    ],
                },
            ),
            (
                ProxyType::Mobile,
                ProxyTypeDef {
                    display_name: "Mobile".to_string(),
                    base_price: 160.0,
                    countries: vec![Country::Italy, Country::India],
                    rental_periods: vec![
                        RentalPeriod::OneDay,
                        RentalPeriod::SevenDays,
                        RentalPeriod::OneMonth,
                    ],
                },
            ),
        ];

        let countries = vec![
            (
                Country::Australia,
                CountryDef {
                    display_name: "Australia".to_string(),
                    surcharge: 236.0,
                },
            ),
            (
                Country::Austria,
                CountryDef {
                    display_name: "Austria".to_string(),
                    surcharge: 236.0,
                },
            ),
            (
                Country::Uk,
                CountryDef {
                    display_name: "United Kingdom".to_string(),
                    surcharge: 5.4,
                },
            ),
            (
                Country::Italy,
                CountryDef {
                    display_name: "Italy".to_string(),
                    surcharge: 287.0,
                },
            ),
            (
                Country::India,
                CountryDef {
                    display_name: "India".to_string(),
                    surcharge: 98.4,
                },
            ),
        ];

        let rental_periods = vec![
            (
                RentalPeriod::OneDay,
                RentalPeriodDef {
                    display_name: "1 day".to_string(),
                    multiplier: 1,
                },
            ),
            (
                RentalPeriod::ThreeDays,
                RentalPeriodDef {
                    display_name: "3 days".to_string(),
                    multiplier: 3,
                },
            ),
            (
                RentalPeriod::SevenDays,
                RentalPeriodDef {
                    display_name: "7 days".to_string(),
                    multiplier: 7,
                },
            ),
            (
                RentalPeriod::OneMonth,
                RentalPeriodDef {
                    display_name: "1 month".to_string(),
                    multiplier: 30,
                },
            ),
            (
                RentalPeriod::OneYear,
                RentalPeriodDef {
                    display_name: "1 year".to_string(),
                    multiplier: 365,
                },
            ),
        ];

        Self::new(proxy_types, countries, rental_periods)
    }

    /// Look up a proxy type. Never fails: ids without an entry (the
    /// sentinel, or ids a catalog file chose not to define) resolve to the
    /// sentinel definition.
    pub fn proxy_type(&self, ty: ProxyType) -> &ProxyTypeDef {
        self.proxy_types
            .iter()
            .find(|(id, _)| *id == ty)
            .map(|(_, def)| def)
            .unwrap_or(&self.sentinel)
    }

    /// Look up a country. Absent entries are `None`, not an error.
    pub fn country(&self, country: Country) -> Option<&CountryDef> {
        self.countries
            .iter()
            .find(|(id, _)| *id == country)
            .map(|(_, def)| def)
    }

    /// Look up a rental period. Absent entries are `None`, not an error.
    pub fn rental_period(&self, period: RentalPeriod) -> Option<&RentalPeriodDef> {
        self.rental_periods
            .iter()
            .find(|(id, _)| *id == period)
            .map(|(_, def)| def)
    }

    /// Countries a proxy type can be ordered in, as display-ready records
    /// in the order the catalog declares them.
    pub fn allowed_countries(&self, ty: ProxyType) -> Vec<(Country, &CountryDef)> {
        self.proxy_type(ty)
            .countries
            .iter()
            .filter_map(|&c| self.country(c).map(|def| (c, def)))
            .collect()
    }

    /// Rental periods available for a proxy type, in declaration order.
    pub fn allowed_rental_periods(&self, ty: ProxyType) -> Vec<(RentalPeriod, &RentalPeriodDef)> {
        self.proxy_type(ty)
            .rental_periods
            .iter()
            .filter_map(|&p| self.rental_period(p).map(|def| (p, def)))
            .collect()
    }

    /// All proxy-type entries, in declaration order.
    pub fn proxy_types(&self) -> impl Iterator<Item = (ProxyType, &ProxyTypeDef)> {
        self.proxy_types.iter().map(|(id, def)| (*id, def))
    }

    /// All country entries, in declaration order.
    pub fn countries(&self) -> impl Iterator<Item = (Country, &CountryDef)> {
        self.countries.iter().map(|(id, def)| (*id, def))
    }

    /// All rental-period entries, in declaration order.
    pub fn rental_periods(&self) -> impl Iterator<Item = (RentalPeriod, &RentalPeriodDef)> {
        self.rental_periods.iter().map(|(id, def)| (*id, def))
    }
}
