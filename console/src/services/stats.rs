//! Department statistics over the item list
//!
//! The backend exposes no dedicated statistics endpoint; totals are grouped
//! client-side by category. Items, categories, and suppliers populate
//! disjoint parts of the view, so the three fetches run concurrently and
//! may resolve in any order.

use rust_decimal::Decimal;
use serde::Serialize;
use shared::models::{InventoryItem, StockLevel};
use std::collections::BTreeMap;

use crate::api::ApiClient;
use crate::error::AppResult;

#[derive(Debug, Clone, Serialize)]
pub struct CategoryStats {
    pub category: String,
    pub item_count: usize,
    pub total_stock: i64,
    pub total_value: Decimal,
    pub low_stock: usize,
    pub out_of_stock: usize,
}

#[derive(Debug, Serialize)]
pub struct DepartmentStatsView {
    pub categories: Vec<CategoryStats>,
    pub item_count: usize,
    pub total_value: Decimal,
    pub category_count: usize,
    pub supplier_count: usize,
}

#[derive(Clone)]
pub struct StatsService {
    api: ApiClient,
}

impl StatsService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn department_stats(&self) -> AppResult<DepartmentStatsView> {
        let (items, categories, suppliers) = tokio::join!(
            self.api.list_items(),
            self.api.list_categories(),
            self.api.list_suppliers()
        );
        let items = items?;
        let categories = categories?;
        let suppliers = suppliers?;

        let grouped = summarize_by_category(&items);
        let total_value = grouped.iter().map(|c| c.total_value).sum();

        Ok(DepartmentStatsView {
            item_count: items.len(),
            total_value,
            categories: grouped,
            category_count: categories.len(),
            supplier_count: suppliers.len(),
        })
    }
}

/// Group items by category name, sorted alphabetically. Items without a
/// category land under "Uncategorized".
pub fn summarize_by_category(items: &[InventoryItem]) -> Vec<CategoryStats> {
    let mut groups: BTreeMap<String, CategoryStats> = BTreeMap::new();

    for item in items {
        let name = item
            .category
            .clone()
            .filter(|c| !c.trim().is_empty())
            .unwrap_or_else(|| "Uncategorized".to_string());

        let entry = groups.entry(name.clone()).or_insert_with(|| CategoryStats {
            category: name,
            item_count: 0,
            total_stock: 0,
            total_value: Decimal::ZERO,
            low_stock: 0,
            out_of_stock: 0,
        });

        entry.item_count += 1;
        entry.total_stock += item.stock;
        entry.total_value += item.stock_value();
        match item.stock_level() {
            StockLevel::Low => entry.low_stock += 1,
            StockLevel::OutOfStock => entry.out_of_stock += 1,
            _ => {}
        }
    }

    groups.into_values().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(category: Option<&str>, stock: i64, price: i64, min: i64) -> InventoryItem {
        InventoryItem {
            id: 0,
            item_code: "X-01".to_string(),
            name: "x".to_string(),
            stock,
            unit_price: Decimal::from(price),
            min_stock: min,
            max_stock: 0,
            category: category.map(str::to_string),
            unit: None,
            location: None,
            created_at: None,
            last_updated: None,
        }
    }

    #[test]
    fn groups_and_totals_by_category() {
        let items = vec![
            item(Some("Cement"), 10, 100, 5),
            item(Some("Cement"), 0, 100, 5),
            item(Some("Paint"), 2, 50, 5),
            item(None, 7, 10, 1),
        ];
        let stats = summarize_by_category(&items);

        assert_eq!(stats.len(), 3);
        let cement = &stats[0];
        assert_eq!(cement.category, "Cement");
        assert_eq!(cement.item_count, 2);
        assert_eq!(cement.total_value, Decimal::from(1000));
        assert_eq!(cement.out_of_stock, 1);

        let paint = &stats[1];
        assert_eq!(paint.low_stock, 1);

        assert_eq!(stats[2].category, "Uncategorized");
    }
}
