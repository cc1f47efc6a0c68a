//! Price computation
//!
//! A single pure function mapping a selection snapshot to a price. The
//! rental period is mandatory: without one the price is always zero. The
//! day multiplier is ADDED to both the base price and the country
//! surcharge before the quantity scaling; that is the contractual pricing
//! rule, not a per-day scaling model.

use crate::catalog::PricingCatalog;
use crate::types::{Country, ProxyType, RentalPeriod};

/// Compute the price for a (possibly partial) selection.
///
/// Missing or absent components contribute zero rather than failing, so a
/// half-filled form always prices to something sensible. `quantity` is
/// taken as-is; callers own any clamping.
pub fn calculate_price(
    catalog: &PricingCatalog,
    proxy_type: ProxyType,
    country: Option<Country>,
    rental_period: Option<RentalPeriod>,
    quantity: f64,
) -> f64 {
    let period = match rental_period.and_then(|p| catalog.rental_period(p)) {
        Some(def) if def.multiplier > 0 => def,
        _ => return 0.0,
    };
    let days = f64::from(period.multiplier);

    let base = catalog.proxy_type(proxy_type).base_price + days;
    let country_part = country
        .and_then(|c| catalog.country(c))
        .map_or(0.0, |def| def.surcharge + days);

    (base + country_part) * quantity
}

/// Display form of a price: rounded to whole rubles with the currency
/// suffix. Formatting only; the stored price keeps full precision.
pub fn format_price(price: f64) -> String {
    format!("{:.0} ₽", price)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> PricingCatalog {
        PricingCatalog::builtin()
    }

    #[test]
    fn test_no_period_means_zero() {
        let c = catalog();
        assert_eq!(calculate_price(&c, ProxyType::Default, None, None, 1.0), 0.0);
        assert_eq!(
            calculate_price(&c, ProxyType::Ipv4, Some(Country::Australia), None, 5.0),
            0.0
        );
    }

    #[test]
    fn test_ipv4_australia_one_day() {
        // ((60 + 1) + (236 + 1)) * 1 = 298
        let price = calculate_price(
            &catalog(),
            ProxyType::Ipv4,
            Some(Country::Australia),
            Some(RentalPeriod::OneDay),
            1.0,
        );
        assert_eq!(price, 298.0);
    }

    #[test]
    fn test_ipv6_uk_one_year_pair() {
        // ((0.51 + 365) + (5.4 + 365)) * 2 = 1471.82
        let price = calculate_price(
            &catalog(),
            ProxyType::Ipv6,
            Some(Country::Uk),
            Some(RentalPeriod::OneYear),
            2.0,
        );
        assert!((price - 1471.82).abs() < 1e-9);
    }

    #[test]
    fn test_missing_country_contributes_zero() {
        // (160 + 7) * 3 = 501
        let price = calculate_price(
            &catalog(),
            ProxyType::Mobile,
            None,
            Some(RentalPeriod::SevenDays),
            3.0,
        );
        assert_eq!(price, 501.0);
    }

    #[test]
    fn test_sentinel_type_contributes_only_days() {
        // The sentinel definition is present with base price 0, so the day
        // multiplier still lands in the base component: (0 + 1) + (236 + 1).
        let price = calculate_price(
            &catalog(),
            ProxyType::Default,
            Some(Country::Australia),
            Some(RentalPeriod::OneDay),
            1.0,
        );
        assert_eq!(price, 238.0);
    }

    #[test]
    fn test_quantity_is_linear() {
        let c = catalog();
        let unit = calculate_price(
            &c,
            ProxyType::Ipv4,
            Some(Country::Austria),
            Some(RentalPeriod::OneMonth),
            1.0,
        );
        for n in [0.0, 1.0, 2.0, 7.0, 100.0] {
            let scaled = calculate_price(
                &c,
                ProxyType::Ipv4,
                Some(Country::Austria),
                Some(RentalPeriod::OneMonth),
                n,
            );
            assert_eq!(scaled, unit * n);
        }
    }

    #[test]
    fn test_format_price_rounds_for_display() {
        assert_eq!(format_price(298.0), "298 ₽");
        assert_eq!(format_price(1471.82), "1472 ₽");
        assert_eq!(format_price(0.0), "0 ₽");
    }

    #[test]
    fn test_quantity_passes_through_unvalidated() {
        let c = catalog();
        let negative = calculate_price(
            &c,
            ProxyType::Ipv4,
            Some(Country::Australia),
            Some(RentalPeriod::OneDay),
            -2.0,
        );
        assert_eq!(negative, -596.0);

        let nan = calculate_price(
            &c,
            ProxyType::Ipv4,
            Some(Country::Australia),
            Some(RentalPeriod::OneDay),
            f64::NAN,
        );
        assert!(nan.is_nan());
    }
}
