// Rust guideline compliant 2026-10-12

//! Property-based tests for emergency pricing.

use glowbook_core::pricing::{emergency_markup, quote, total_price};
use glowbook_core::{MarkupRate, PriceQuote};
use proptest::prelude::*;

fn arb_rate() -> impl Strategy<Value = MarkupRate> {
    (0u32..=10_000).prop_map(|bps| MarkupRate::from_basis_points(bps).unwrap())
}

proptest! {
    /// Total is always base plus markup, and the markup is the half-up rounded product.
    #[test]
    fn prop_total_is_base_plus_markup(base in 0u64..1_000_000, rate in arb_rate()) {
        let q = PriceQuote::emergency(base, rate);
        prop_assert_eq!(q.total_price, q.base_price + q.emergency_markup);
        prop_assert_eq!(q.total_price, total_price(base, rate));

        let exact = base * u64::from(rate.basis_points());
        let expected = (exact + 5_000) / 10_000;
        prop_assert_eq!(q.emergency_markup, expected);
    }

    /// The markup never exceeds the base price and grows with it.
    #[test]
    fn prop_markup_monotonic(base in 0u64..1_000_000, extra in 0u64..1_000, rate in arb_rate()) {
        let small = emergency_markup(base, rate);
        let large = emergency_markup(base + extra, rate);
        prop_assert!(small <= base);
        prop_assert!(small <= large);
    }

    /// Regular quotes never carry a markup.
    #[test]
    fn prop_regular_has_no_markup(base in any::<u64>(), rate in arb_rate()) {
        let q = quote(base, false, rate);
        prop_assert_eq!(q.emergency_markup, 0);
        prop_assert_eq!(q.total_price, base);
        prop_assert!(!q.is_emergency);
    }
}

#[test]
fn test_default_rate_examples() {
    let rate = MarkupRate::DEFAULT;
    assert_eq!(quote(80, true, rate).total_price, 100);
    assert_eq!(quote(100, true, rate).emergency_markup, 25);
    assert_eq!(quote(0, true, rate).total_price, 0);
}

#[test]
fn test_zero_rate_emergency() {
    let q = quote(80, true, MarkupRate::ZERO);
    assert!(q.is_emergency);
    assert_eq!(q.total_price, 80);
}
