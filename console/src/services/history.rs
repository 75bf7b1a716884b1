//! Item history view: raw transactions reconciled into uniform rows

use shared::history::reconcile_history;
use shared::models::{HistoryEntry, InventoryItem};

use crate::api::ApiClient;
use crate::error::{AppError, AppResult};

#[derive(Debug)]
pub struct ItemHistoryView {
    pub item: InventoryItem,
    /// Resolved rows newest-first, then incomplete records
    pub entries: Vec<HistoryEntry>,
}

impl ItemHistoryView {
    pub fn incomplete_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_incomplete()).count()
    }
}

#[derive(Clone)]
pub struct HistoryService {
    api: ApiClient,
}

impl HistoryService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn item_history(&self, item_id: i64) -> AppResult<ItemHistoryView> {
        let (items, records) = tokio::join!(
            self.api.list_items(),
            self.api.item_transactions(item_id)
        );
        let items = items?;
        let records = records?;

        let item = items
            .into_iter()
            .find(|i| i.id == item_id)
            .ok_or_else(|| AppError::NotFound(format!("item {}", item_id)))?;

        let entries = reconcile_history(&records, item.created_at);
        if let Some(dropped) = entries.iter().position(|e| e.is_incomplete()) {
            tracing::warn!(
                item = %item.name,
                incomplete = entries.len() - dropped,
                "history contains unresolvable records"
            );
        }

        Ok(ItemHistoryView { item, entries })
    }
}
