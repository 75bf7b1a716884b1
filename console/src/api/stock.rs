//! Stock intake and adjustment endpoints
//!
//! Every response echoes the server's persisted state, which replaces any
//! client-side preview.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::models::{Batch, InventoryItem};

use super::ApiClient;
use crate::error::AppResult;

/// Body of `POST /inventory/add-stock/`
#[derive(Debug, Serialize)]
pub struct AddStockRequest {
    pub item_id: i64,
    pub quantity: i64,
    pub unit_price: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Body of `POST /inventory/create-or-restock/`
#[derive(Debug, Serialize)]
pub struct CreateOrRestockRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_code: Option<String>,
    pub quantity: i64,
    pub unit_price: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_stock: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_stock: Option<i64>,
}

/// One batch within a `receive-with-batches` submission
#[derive(Debug, Serialize)]
pub struct BatchIntake {
    pub batch_number: String,
    pub quantity: Decimal,
    pub unit_price: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub po_number: Option<String>,
}

/// Body of `POST /inventory/receive-with-batches/`
#[derive(Debug, Serialize)]
pub struct ReceiveWithBatchesRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    pub batches: Vec<BatchIntake>,
}

/// Response of `POST /inventory/receive-with-batches/`
#[derive(Debug, Deserialize)]
pub struct ReceiveWithBatchesResponse {
    pub item: InventoryItem,
    #[serde(default)]
    pub batches: Vec<Batch>,
}

/// Body of `POST /inventory/stock/adjust/`
#[derive(Debug, Serialize)]
pub struct AdjustStockRequest {
    pub item_id: i64,
    /// New absolute quantity on hand
    pub new_stock: i64,
    pub reason: String,
}

impl ApiClient {
    /// Restock an existing item. Returns the updated item.
    pub async fn add_stock(&self, request: &AddStockRequest) -> AppResult<InventoryItem> {
        self.post("/inventory/add-stock/", request).await
    }

    /// Create the item if unknown, restock it otherwise.
    pub async fn create_or_restock(
        &self,
        request: &CreateOrRestockRequest,
    ) -> AppResult<InventoryItem> {
        self.post("/inventory/create-or-restock/", request).await
    }

    /// Receive stock as tracked batches.
    pub async fn receive_with_batches(
        &self,
        request: &ReceiveWithBatchesRequest,
    ) -> AppResult<ReceiveWithBatchesResponse> {
        self.post("/inventory/receive-with-batches/", request).await
    }

    /// Manual stock correction. Returns the updated item.
    pub async fn adjust_stock(&self, request: &AdjustStockRequest) -> AppResult<InventoryItem> {
        self.post("/inventory/stock/adjust/", request).await
    }
}
