//! Inventory item model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A stock-keeping unit as reported by the backend.
///
/// `unit_price` is the current weighted-average (or FIFO) price maintained
/// server-side; the client never recomputes it authoritatively.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: i64,
    pub item_code: String,
    pub name: String,
    pub stock: i64,
    pub unit_price: Decimal,
    #[serde(default)]
    pub min_stock: i64,
    #[serde(default)]
    pub max_stock: i64,
    pub category: Option<String>,
    pub unit: Option<String>,
    pub location: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub last_updated: Option<DateTime<Utc>>,
}

/// Stock position relative to the configured min/max bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockLevel {
    OutOfStock,
    Low,
    Over,
    Normal,
}

impl StockLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            StockLevel::OutOfStock => "Out of Stock",
            StockLevel::Low => "Low",
            StockLevel::Over => "Over",
            StockLevel::Normal => "Normal",
        }
    }
}

impl InventoryItem {
    /// Classify the on-hand stock against the min/max bounds.
    ///
    /// A `max_stock` of zero means no upper bound was configured.
    pub fn stock_level(&self) -> StockLevel {
        if self.stock <= 0 {
            StockLevel::OutOfStock
        } else if self.stock < self.min_stock {
            StockLevel::Low
        } else if self.max_stock > 0 && self.stock > self.max_stock {
            StockLevel::Over
        } else {
            StockLevel::Normal
        }
    }

    /// Current on-hand value at the item's unit price.
    pub fn stock_value(&self) -> Decimal {
        Decimal::from(self.stock) * self.unit_price
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn item(stock: i64, min: i64, max: i64) -> InventoryItem {
        InventoryItem {
            id: 1,
            item_code: "CEM-001".to_string(),
            name: "Cement 50kg".to_string(),
            stock,
            unit_price: Decimal::from(18_000),
            min_stock: min,
            max_stock: max,
            category: None,
            unit: None,
            location: None,
            created_at: None,
            last_updated: None,
        }
    }

    #[test]
    fn stock_level_classification() {
        assert_eq!(item(0, 10, 100).stock_level(), StockLevel::OutOfStock);
        assert_eq!(item(5, 10, 100).stock_level(), StockLevel::Low);
        assert_eq!(item(150, 10, 100).stock_level(), StockLevel::Over);
        assert_eq!(item(50, 10, 100).stock_level(), StockLevel::Normal);
        // No upper bound configured
        assert_eq!(item(150, 10, 0).stock_level(), StockLevel::Normal);
    }

    #[test]
    fn stock_value_is_quantity_times_price() {
        assert_eq!(item(3, 0, 0).stock_value(), Decimal::from(54_000));
    }
}
