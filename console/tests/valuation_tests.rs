//! Weighted-average restock valuation tests
//!
//! Properties covered:
//! - The blended price always lies between the two input prices
//! - A zero-stock position takes the incoming price exactly
//! - The empty position is a typed error, never NaN

use proptest::prelude::*;
use rust_decimal::Decimal;
use std::str::FromStr;

use shared::valuation::{weighted_average_unit_price, RestockPreview, ValuationError};

// Helper to create Decimal from string
fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    /// Reference scenario: 100 @ 1000 plus 50 @ 1300 blends to exactly 1100
    #[test]
    fn test_reference_blend() {
        let avg = weighted_average_unit_price(100, dec("1000"), 50, dec("1300")).unwrap();
        assert_eq!(avg, dec("1100"));
    }

    #[test]
    fn test_zero_stock_takes_incoming_price() {
        let avg = weighted_average_unit_price(0, dec("999"), 10, dec("1250.75")).unwrap();
        assert_eq!(avg, dec("1250.75"));
    }

    #[test]
    fn test_zero_incoming_keeps_current_price() {
        let avg = weighted_average_unit_price(80, dec("700"), 0, dec("9999")).unwrap();
        assert_eq!(avg, dec("700"));
    }

    #[test]
    fn test_empty_position_is_an_error() {
        assert_eq!(
            weighted_average_unit_price(0, dec("100"), 0, dec("100")),
            Err(ValuationError::EmptyPosition)
        );
    }

    #[test]
    fn test_preview_is_not_authoritative_shape() {
        // The preview exposes only the blended price and resulting stock;
        // adopting server state means replacing it wholesale.
        let preview = RestockPreview::compute(10, dec("100"), 10, dec("200")).unwrap();
        assert_eq!(preview.blended_unit_price, dec("150"));
        assert_eq!(preview.resulting_stock, 20);
    }
}

// ============================================================================
// Property Tests
// ============================================================================

fn price_strategy() -> impl Strategy<Value = Decimal> {
    // Prices up to TZS 1,000,000.00 with 2 decimal places
    (0i64..100_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

mod property_tests {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        /// The blended price never leaves the [min, max] band of its inputs
        #[test]
        fn prop_blend_is_bounded(
            stock in 0i64..10_000,
            current in price_strategy(),
            quantity in 1i64..10_000,
            incoming in price_strategy()
        ) {
            let avg = weighted_average_unit_price(stock, current, quantity, incoming).unwrap();
            let low = current.min(incoming);
            let high = current.max(incoming);

            prop_assert!(avg >= low, "avg {} below {}", avg, low);
            prop_assert!(avg <= high, "avg {} above {}", avg, high);
        }

        /// With no existing stock the blend equals the incoming price
        #[test]
        fn prop_zero_stock_is_identity(
            current in price_strategy(),
            quantity in 1i64..10_000,
            incoming in price_strategy()
        ) {
            let avg = weighted_average_unit_price(0, current, quantity, incoming).unwrap();
            prop_assert_eq!(avg, incoming);
        }

        /// Blending is weight-symmetric: swapping the two legs gives the
        /// same result
        #[test]
        fn prop_blend_is_symmetric(
            stock in 1i64..10_000,
            current in price_strategy(),
            quantity in 1i64..10_000,
            incoming in price_strategy()
        ) {
            let a = weighted_average_unit_price(stock, current, quantity, incoming).unwrap();
            let b = weighted_average_unit_price(quantity, incoming, stock, current).unwrap();
            prop_assert_eq!(a, b);
        }
    }
}
