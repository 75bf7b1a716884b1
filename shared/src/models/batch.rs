//! Batch (lot) model for batch-tracked items

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A received batch of stock.
///
/// Immutable once received except for `remaining_quantity`, which only
/// decreases as stock is consumed (consumption happens server-side).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Batch {
    pub batch_number: String,
    pub original_quantity: Decimal,
    pub remaining_quantity: Decimal,
    pub unit_price: Decimal,
    pub date_received: NaiveDate,
    pub expiry_date: Option<NaiveDate>,
    pub supplier: Option<String>,
    pub po_number: Option<String>,
}

impl Batch {
    /// Value of the stock still on hand in this batch.
    pub fn remaining_value(&self) -> Decimal {
        self.remaining_quantity * self.unit_price
    }

    pub fn is_expired(&self, today: NaiveDate) -> bool {
        self.expiry_date.map(|d| d < today).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::from_str(s).unwrap()
    }

    fn batch(expiry: Option<&str>) -> Batch {
        Batch {
            batch_number: "B-2024-001".to_string(),
            original_quantity: Decimal::from(100),
            remaining_quantity: Decimal::from(40),
            unit_price: Decimal::from(1_500),
            date_received: date("2024-01-10"),
            expiry_date: expiry.map(date),
            supplier: Some("Kilimanjaro Traders".to_string()),
            po_number: None,
        }
    }

    #[test]
    fn remaining_value() {
        assert_eq!(batch(None).remaining_value(), Decimal::from(60_000));
    }

    #[test]
    fn expiry_check() {
        let b = batch(Some("2024-06-01"));
        assert!(b.is_expired(date("2024-06-02")));
        assert!(!b.is_expired(date("2024-06-01")));
        assert!(!batch(None).is_expired(date("2030-01-01")));
    }
}
