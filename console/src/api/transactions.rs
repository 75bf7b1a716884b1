//! Raw transaction records for an item
//!
//! Records are kept as raw JSON here; field names vary by originating
//! route and `shared::history` resolves them into uniform rows.

use serde_json::Value;

use super::{ApiClient, ListEnvelope};
use crate::error::AppResult;

impl ApiClient {
    pub async fn item_transactions(&self, item_id: i64) -> AppResult<Vec<Value>> {
        let envelope: ListEnvelope<Value> = self
            .get(&format!("/inventory/item-transactions/{}/", item_id))
            .await?;
        Ok(envelope.into_vec())
    }
}
