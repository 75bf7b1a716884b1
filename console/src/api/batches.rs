//! Batch listing for an item

use shared::models::Batch;

use super::{ApiClient, ListEnvelope};
use crate::error::AppResult;

impl ApiClient {
    pub async fn item_batches(&self, item_id: i64) -> AppResult<Vec<Batch>> {
        let envelope: ListEnvelope<Batch> = self
            .get(&format!("/inventory/items/{}/batches/", item_id))
            .await?;
        Ok(envelope.into_vec())
    }
}
