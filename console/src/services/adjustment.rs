//! Manual stock correction

use shared::models::InventoryItem;
use shared::validation;

use crate::api::{AdjustStockRequest, ApiClient};
use crate::error::{AppError, AppResult};

#[derive(Clone)]
pub struct AdjustmentService {
    api: ApiClient,
}

impl AdjustmentService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Set a new absolute stock quantity. Returns the updated item.
    pub async fn adjust(
        &self,
        item_id: i64,
        new_stock: i64,
        reason: &str,
    ) -> AppResult<InventoryItem> {
        validation::validate_adjusted_stock(new_stock)?;
        if reason.trim().is_empty() {
            return Err(AppError::validation("Adjustment reason is required"));
        }

        let request = AdjustStockRequest {
            item_id,
            new_stock,
            reason: reason.trim().to_string(),
        };
        let item = self.api.adjust_stock(&request).await?;
        tracing::info!(item = %item.name, stock = item.stock, "stock adjusted");
        Ok(item)
    }
}
