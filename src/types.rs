//! Type-safe identifiers for the pricing catalog
//!
//! This module replaces stringly-typed option ids with proper Rust enums
//! that provide compile-time validation and exhaustive matching. Each id
//! space used by the order form is a closed enumeration.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Proxy service category
///
/// `Default` is the sentinel for "no type chosen yet": it carries a zero
/// base price and empty allowed sets in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
pub enum ProxyType {
    #[default]
    #[strum(serialize = "default")]
    #[serde(rename = "default")]
    Default,
    #[strum(serialize = "ipv4")]
    #[serde(rename = "ipv4")]
    Ipv4,
    #[strum(serialize = "ipv6")]
    #[serde(rename = "ipv6")]
    Ipv6,
    #[strum(serialize = "mobile")]
    #[serde(rename = "mobile")]
    Mobile,
}

impl ProxyType {
    /// True for every variant except the sentinel
    pub fn is_chosen(&self) -> bool {
        !matches!(self, Self::Default)
    }
}

/// Country a proxy is rented in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Country {
    Australia,
    Austria,
    Uk,
    Italy,
    India,
}

/// Rental duration tier
///
/// Each tier maps to a day-count multiplier in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
pub enum RentalPeriod {
    #[strum(serialize = "1-day")]
    #[serde(rename = "1-day")]
    OneDay,
    #[strum(serialize = "3-days")]
    #[serde(rename = "3-days")]
    ThreeDays,
    #[strum(serialize = "7-days")]
    #[serde(rename = "7-days")]
    SevenDays,
    #[strum(serialize = "1-month")]
    #[serde(rename = "1-month")]
    OneMonth,
    #[strum(serialize = "1-year")]
    #[serde(rename = "1-year")]
    OneYear,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_proxy_type_serialization() {
        assert_eq!(ProxyType::Ipv4.to_string(), "ipv4");
        assert_eq!(ProxyType::Mobile.to_string(), "mobile");
        assert_eq!(ProxyType::Default.to_string(), "default");
    }

    #[test]
    fn test_proxy_type_parsing() {
        assert_eq!(ProxyType::from_str("ipv4").unwrap(), ProxyType::Ipv4);
        assert_eq!(ProxyType::from_str("ipv6").unwrap(), ProxyType::Ipv6);
        assert_eq!(ProxyType::from_str("default").unwrap(), ProxyType::Default);
        assert!(ProxyType::from_str("socks5").is_err());
    }

    #[test]
    fn test_proxy_type_sentinel() {
        assert!(!ProxyType::Default.is_chosen());
        assert!(ProxyType::Ipv4.is_chosen());
        assert_eq!(ProxyType::default(), ProxyType::Default);
    }

    #[test]
    fn test_country_iteration() {
        let countries: Vec<String> = Country::iter().map(|c| c.to_string()).collect();
        assert!(countries.contains(&"australia".to_string()));
        assert!(countries.contains(&"uk".to_string()));
        assert!(countries.contains(&"india".to_string()));
    }

    #[test]
    fn test_rental_period_parsing() {
        assert_eq!(RentalPeriod::from_str("1-day").unwrap(), RentalPeriod::OneDay);
        assert_eq!(RentalPeriod::from_str("1-year").unwrap(), RentalPeriod::OneYear);
        assert!(RentalPeriod::from_str("2-weeks").is_err());
    }

    #[test]
    fn test_serde_roundtrip() {
        let original = RentalPeriod::SevenDays;
        let json = serde_json::to_string(&original).unwrap();
        assert_eq!(json, "\"7-days\"");
        let parsed: RentalPeriod = serde_json::from_str(&json).unwrap();
        assert_eq!(original, parsed);
    }

    #[test]
    fn test_serde_matches_display() {
        for country in Country::iter() {
            let json = serde_json::to_string(&country).unwrap();
            assert_eq!(json.trim_matches('"'), country.to_string());
        }
    }
}
