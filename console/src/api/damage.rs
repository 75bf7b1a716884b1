//! Damage report endpoints

use chrono::NaiveDate;
use serde::Serialize;
use shared::models::DamageReport;

use super::{ApiClient, ListEnvelope};
use crate::error::AppResult;

/// Body of `POST /inventory/damage-reports/{item_id}/`
#[derive(Debug, Serialize)]
pub struct DamageEntryRequest {
    pub date: NaiveDate,
    pub good_quantity: i64,
    pub damage_quantity: i64,
}

impl ApiClient {
    pub async fn damage_reports(&self, item_id: i64) -> AppResult<Vec<DamageReport>> {
        let envelope: ListEnvelope<DamageReport> = self
            .get(&format!("/inventory/damage-reports/{}/", item_id))
            .await?;
        Ok(envelope.into_vec())
    }

    pub async fn record_damage(
        &self,
        item_id: i64,
        request: &DamageEntryRequest,
    ) -> AppResult<DamageReport> {
        self.post(&format!("/inventory/damage-reports/{}/", item_id), request)
            .await
    }
}
