//! Batch ledger classification and reconciliation tests
//!
//! Properties covered:
//! - Classification is total and respects its priority order: an expired
//!   batch with remaining stock never reports Low Stock or Active
//! - Total remaining value counts only batches with remaining stock

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;
use std::str::FromStr;

use shared::ledger::{build_ledger, classify_batch, current_fifo_price, BatchStatus};
use shared::models::Batch;

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn date(s: &str) -> NaiveDate {
    NaiveDate::from_str(s).unwrap()
}

const TODAY: &str = "2024-06-15";

fn batch(
    number: &str,
    original: Decimal,
    remaining: Decimal,
    price: Decimal,
    received: &str,
    expiry: Option<&str>,
) -> Batch {
    Batch {
        batch_number: number.to_string(),
        original_quantity: original,
        remaining_quantity: remaining,
        unit_price: price,
        date_received: date(received),
        expiry_date: expiry.map(date),
        supplier: None,
        po_number: None,
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_expired_outranks_everything() {
        // Remaining stock is low AND the batch is expired: Expired wins
        let b = batch("B1", dec("100"), dec("5"), dec("500"), "2024-01-01", Some("2024-02-01"));
        assert_eq!(classify_batch(&b, date(TODAY)), BatchStatus::Expired);

        // Fully consumed AND expired: still Expired
        let b = batch("B2", dec("100"), dec("0"), dec("500"), "2024-01-01", Some("2024-02-01"));
        assert_eq!(classify_batch(&b, date(TODAY)), BatchStatus::Expired);
    }

    #[test]
    fn test_low_stock_boundary_is_strict() {
        // Exactly 20% is Active, just below is Low Stock
        let at = batch("B1", dec("100"), dec("20"), dec("500"), "2024-01-01", None);
        assert_eq!(classify_batch(&at, date(TODAY)), BatchStatus::Active);

        let below = batch("B2", dec("100"), dec("19.99"), dec("500"), "2024-01-01", None);
        assert_eq!(classify_batch(&below, date(TODAY)), BatchStatus::LowStock);
    }

    #[test]
    fn test_ledger_reconciliation() {
        let batches = vec![
            batch("OLD", dec("100"), dec("0"), dec("900"), "2024-01-01", None),
            batch("MID", dec("100"), dec("50"), dec("1000"), "2024-02-01", None),
            batch("NEW", dec("100"), dec("100"), dec("1200"), "2024-03-01", None),
        ];
        let ledger = build_ledger(dec("1100"), batches, date(TODAY));

        // FIFO price comes from the oldest batch that still has stock
        assert_eq!(ledger.current_fifo_price, Some(dec("1000")));
        assert_eq!(ledger.price_difference, Some(dec("100")));
        assert!(ledger.is_favorable());

        // Consumed batch listed but excluded from the value sum
        assert_eq!(ledger.lines.len(), 3);
        assert_eq!(ledger.total_remaining_value, dec("170000"));
    }

    #[test]
    fn test_unfavorable_difference() {
        let batches = vec![batch("B1", dec("10"), dec("10"), dec("1500"), "2024-01-01", None)];
        let ledger = build_ledger(dec("1100"), batches, date(TODAY));
        assert_eq!(ledger.price_difference, Some(dec("-400")));
        assert!(!ledger.is_favorable());
    }
}

// ============================================================================
// Property Tests
// ============================================================================

fn quantity_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..100_000).prop_map(Decimal::from)
}

mod property_tests {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        /// Classification is total and never reports an expired batch as
        /// Low Stock or Active
        #[test]
        fn prop_expired_priority(
            original in 1i64..100_000,
            remaining_pct in 0u8..=100,
            expired in any::<bool>()
        ) {
            let original = Decimal::from(original);
            let remaining = original * Decimal::from(remaining_pct) / Decimal::from(100);
            let expiry = if expired { Some("2024-01-01") } else { Some("2030-01-01") };
            let b = batch("B", original, remaining, dec("100"), "2023-12-01", expiry);

            let status = classify_batch(&b, date(TODAY));
            if expired {
                prop_assert_eq!(status, BatchStatus::Expired);
            } else {
                prop_assert_ne!(status, BatchStatus::Expired);
            }
        }

        /// Total remaining value equals the sum over batches with stock, and
        /// the FIFO price belongs to one of those batches
        #[test]
        fn prop_ledger_totals(
            quantities in prop::collection::vec(quantity_strategy(), 1..10)
        ) {
            let batches: Vec<Batch> = quantities
                .iter()
                .enumerate()
                .map(|(i, q)| {
                    batch(
                        &format!("B{}", i),
                        *q,
                        *q,
                        Decimal::from(100 + i as i64),
                        "2024-01-01",
                        None,
                    )
                })
                .collect();

            let expected: Decimal = batches
                .iter()
                .filter(|b| b.remaining_quantity > Decimal::ZERO)
                .map(|b| b.remaining_value())
                .sum();

            let fifo = current_fifo_price(&batches);
            let ledger = build_ledger(dec("100"), batches, date(TODAY));

            prop_assert_eq!(ledger.total_remaining_value, expected);
            prop_assert_eq!(ledger.current_fifo_price, fifo);
            // Every line got classified
            prop_assert_eq!(ledger.lines.len(), quantities.len());
        }
    }
}
