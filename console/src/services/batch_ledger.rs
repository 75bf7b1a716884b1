//! Batch ledger view for one item

use chrono::Utc;
use shared::ledger::{build_ledger, BatchLedger};
use shared::models::InventoryItem;

use crate::api::ApiClient;
use crate::error::{AppError, AppResult};

/// The reconciled batch view for one item
#[derive(Debug)]
pub struct ItemLedgerView {
    pub item: InventoryItem,
    pub ledger: BatchLedger,
}

#[derive(Clone)]
pub struct LedgerService {
    api: ApiClient,
}

impl LedgerService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Fetch the item and its batches and reconcile them.
    ///
    /// The two fetches populate disjoint parts of the view, so they run
    /// concurrently and may resolve in either order.
    pub async fn item_ledger(&self, item_id: i64) -> AppResult<ItemLedgerView> {
        let (items, batches) =
            tokio::join!(self.api.list_items(), self.api.item_batches(item_id));
        let items = items?;
        let batches = batches?;

        let item = items
            .into_iter()
            .find(|i| i.id == item_id)
            .ok_or_else(|| AppError::NotFound(format!("item {}", item_id)))?;

        let ledger = build_ledger(item.unit_price, batches, Utc::now().date_naive());
        Ok(ItemLedgerView { item, ledger })
    }
}
