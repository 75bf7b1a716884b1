//! Item listing and existence pre-checks

use serde::Deserialize;
use shared::models::{Batch, InventoryItem};

use super::{ApiClient, ListEnvelope};
use crate::error::AppResult;

/// Response of `GET /inventory/check-item/`
#[derive(Debug, Deserialize)]
pub struct CheckItemResponse {
    pub exists: bool,
    pub item: Option<InventoryItem>,
}

/// Response of `GET /inventory/check-item-batches/`
#[derive(Debug, Deserialize)]
pub struct CheckItemBatchesResponse {
    pub exists: bool,
    pub item: Option<InventoryItem>,
    #[serde(default)]
    pub batches: Vec<Batch>,
}

impl ApiClient {
    /// Fetch the full item list.
    pub async fn list_items(&self) -> AppResult<Vec<InventoryItem>> {
        let envelope: ListEnvelope<InventoryItem> = self.get("/inventory/items/").await?;
        Ok(envelope.into_vec())
    }

    /// Existence pre-check keyed by item name.
    pub async fn check_item(&self, name: &str) -> AppResult<CheckItemResponse> {
        self.get_with_query("/inventory/check-item/", &[("name", name)])
            .await
    }

    /// Existence pre-check that also returns the item's batches.
    pub async fn check_item_batches(&self, name: &str) -> AppResult<CheckItemBatchesResponse> {
        self.get_with_query("/inventory/check-item-batches/", &[("name", name)])
            .await
    }
}
