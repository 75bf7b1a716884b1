//! Reference data: categories and suppliers

use shared::models::{Category, Supplier};

use super::{ApiClient, ListEnvelope};
use crate::error::AppResult;

impl ApiClient {
    pub async fn list_categories(&self) -> AppResult<Vec<Category>> {
        let envelope: ListEnvelope<Category> = self.get("/inventory/categories/").await?;
        Ok(envelope.into_vec())
    }

    pub async fn list_suppliers(&self) -> AppResult<Vec<Supplier>> {
        let envelope: ListEnvelope<Supplier> = self.get("/suppliers/suppliers/").await?;
        Ok(envelope.into_vec())
    }
}
