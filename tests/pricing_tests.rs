//! Tests for the price calculator against the built-in catalog
//!
//! The pricing rule adds the day multiplier to both the base price and the
//! country surcharge before scaling by quantity; these tests pin that rule
//! exactly.

use proxytui::catalog::PricingCatalog;
use proxytui::pricing::calculate_price;
use proxytui::types::{Country, ProxyType, RentalPeriod};

fn catalog() -> PricingCatalog {
    PricingCatalog::builtin()
}

// =============================================================================
// Mandatory Rental Period
// =============================================================================

#[test]
fn test_empty_selection_is_free() {
    assert_eq!(
        calculate_price(&catalog(), ProxyType::Default, None, None, 1.0),
        0.0
    );
}

#[test]
fn test_no_period_is_free_for_any_type_and_country() {
    let c = catalog();
    assert_eq!(
        calculate_price(&c, ProxyType::Ipv4, Some(Country::Australia), None, 1.0),
        0.0
    );
    assert_eq!(
        calculate_price(&c, ProxyType::Mobile, Some(Country::India), None, 100.0),
        0.0
    );
}

// =============================================================================
// Exact Price Table
// =============================================================================

#[test]
fn test_ipv4_australia_one_day_single() {
    let price = calculate_price(
        &catalog(),
        ProxyType::Ipv4,
        Some(Country::Australia),
        Some(RentalPeriod::OneDay),
        1.0,
    );
    // (60 + 1) + (236 + 1)
    assert_eq!(price, 298.0);
}

#[test]
fn test_ipv6_uk_one_year_pair() {
    let price = calculate_price(
        &catalog(),
        ProxyType::Ipv6,
        Some(Country::Uk),
        Some(RentalPeriod::OneYear),
        2.0,
    );
    // ((0.51 + 365) + (5.4 + 365)) * 2
    assert!((price - 1471.82).abs() < 1e-9);
}

#[test]
fn test_mobile_italy_one_month() {
    let price = calculate_price(
        &catalog(),
        ProxyType::Mobile,
        Some(Country::Italy),
        Some(RentalPeriod::OneMonth),
        1.0,
    );
    // (160 + 30) + (287 + 30)
    assert_eq!(price, 507.0);
}

#[test]
fn test_multiplier_is_added_not_scaled() {
    // A scaling model would give (60 + 236) * 30 = 8880 for a month of ipv4
    // in austria; the additive rule gives (60 + 30) + (236 + 30) = 356.
    let price = calculate_price(
        &catalog(),
        ProxyType::Ipv4,
        Some(Country::Austria),
        Some(RentalPeriod::OneMonth),
        1.0,
    );
    assert_eq!(price, 356.0);
}

// =============================================================================
// Partial Selections and Pass-Through Quantity
// =============================================================================

#[test]
fn test_missing_country_still_prices_base() {
    let price = calculate_price(
        &catalog(),
        ProxyType::Ipv4,
        None,
        Some(RentalPeriod::SevenDays),
        1.0,
    );
    assert_eq!(price, 67.0);
}

#[test]
fn test_quantity_scales_linearly() {
    let c = catalog();
    let unit = calculate_price(
        &c,
        ProxyType::Mobile,
        Some(Country::India),
        Some(RentalPeriod::OneDay),
        1.0,
    );
    let five = calculate_price(
        &c,
        ProxyType::Mobile,
        Some(Country::India),
        Some(RentalPeriod::OneDay),
        5.0,
    );
    assert_eq!(five, unit * 5.0);
}

#[test]
fn test_zero_quantity_is_free() {
    let price = calculate_price(
        &catalog(),
        ProxyType::Ipv4,
        Some(Country::Australia),
        Some(RentalPeriod::OneDay),
        0.0,
    );
    assert_eq!(price, 0.0);
}

#[test]
fn test_fractional_and_negative_quantities_pass_through() {
    let c = catalog();
    let half = calculate_price(
        &c,
        ProxyType::Ipv4,
        Some(Country::Australia),
        Some(RentalPeriod::OneDay),
        0.5,
    );
    assert_eq!(half, 149.0);

    let negative = calculate_price(
        &c,
        ProxyType::Ipv4,
        Some(Country::Australia),
        Some(RentalPeriod::OneDay),
        -1.0,
    );
    assert_eq!(negative, -298.0);
}
