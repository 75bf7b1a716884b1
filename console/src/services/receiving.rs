//! Stock receiving: pre-check, preview, submit
//!
//! The flow mirrors the receiving form: validate input, check whether the
//! item exists, preview the blended price for a restock, then submit and
//! adopt whatever the server persisted.

use rust_decimal::Decimal;
use shared::models::InventoryItem;
use shared::valuation::RestockPreview;
use shared::validation;
use uuid::Uuid;

use crate::api::{
    AddStockRequest, ApiClient, BatchIntake, CreateOrRestockRequest, ReceiveWithBatchesRequest,
    ReceiveWithBatchesResponse,
};
use crate::error::{AppError, AppResult};

/// Receiving form state for a plain (non-batch) intake
#[derive(Debug, Clone)]
pub struct ReceiveForm {
    pub name: String,
    pub item_code: Option<String>,
    pub quantity: i64,
    pub unit_price: Decimal,
    pub category: Option<String>,
    pub unit: Option<String>,
    pub location: Option<String>,
    pub supplier: Option<String>,
    pub min_stock: Option<i64>,
    pub max_stock: Option<i64>,
}

/// What submitting the form would do, shown before submission.
///
/// The restock preview is informational only; the persisted price comes
/// back in the server's response to `submit`.
#[derive(Debug)]
pub enum ReceivePlan {
    Restock {
        item: InventoryItem,
        preview: RestockPreview,
    },
    NewItem {
        name: String,
    },
}

/// One batch entered on the batch-tracking receiving form
#[derive(Debug, Clone)]
pub struct BatchIntakeForm {
    /// Generated when empty
    pub batch_number: Option<String>,
    pub quantity: Decimal,
    pub unit_price: Decimal,
    pub expiry_date: Option<chrono::NaiveDate>,
    pub supplier: Option<String>,
    pub po_number: Option<String>,
}

/// What a batch intake submission would land on
#[derive(Debug)]
pub enum BatchReceivePlan {
    Existing {
        item: InventoryItem,
        batch_count: usize,
    },
    NewItem {
        name: String,
    },
}

#[derive(Debug, Clone)]
pub struct BatchReceiveForm {
    pub name: String,
    pub item_code: Option<String>,
    pub category: Option<String>,
    pub unit: Option<String>,
    pub batches: Vec<BatchIntakeForm>,
}

#[derive(Clone)]
pub struct ReceivingService {
    api: ApiClient,
}

impl ReceivingService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    fn validate(form: &ReceiveForm) -> AppResult<()> {
        validation::validate_item_name(&form.name)?;
        validation::validate_receive_quantity(form.quantity)?;
        validation::validate_unit_price(form.unit_price)?;
        if let Some(code) = &form.item_code {
            validation::validate_item_code(code)?;
        }
        Ok(())
    }

    /// Pre-check the item and build the preview without mutating anything.
    pub async fn plan(&self, form: &ReceiveForm) -> AppResult<ReceivePlan> {
        Self::validate(form)?;

        let check = self.api.check_item(&form.name).await?;
        match (check.exists, check.item) {
            (true, Some(item)) => {
                let preview = RestockPreview::compute(
                    item.stock,
                    item.unit_price,
                    form.quantity,
                    form.unit_price,
                )?;
                Ok(ReceivePlan::Restock { item, preview })
            }
            _ => Ok(ReceivePlan::NewItem {
                name: form.name.clone(),
            }),
        }
    }

    /// Restock an item that already exists. The returned item is the
    /// server's persisted state, including the authoritative blended price.
    pub async fn restock(&self, item_id: i64, form: &ReceiveForm) -> AppResult<InventoryItem> {
        Self::validate(form)?;

        let request = AddStockRequest {
            item_id,
            quantity: form.quantity,
            unit_price: form.unit_price,
            reason: form.supplier.as_ref().map(|s| format!("received from {}", s)),
        };

        let item = self.api.add_stock(&request).await?;
        tracing::info!(
            item = %item.name,
            stock = item.stock,
            unit_price = %item.unit_price,
            "stock received"
        );
        Ok(item)
    }

    /// Submit an intake for an item that may not exist yet. The returned
    /// item is the server's persisted state.
    pub async fn submit(&self, form: &ReceiveForm) -> AppResult<InventoryItem> {
        Self::validate(form)?;

        let request = CreateOrRestockRequest {
            name: form.name.clone(),
            item_code: form.item_code.clone(),
            quantity: form.quantity,
            unit_price: form.unit_price,
            category: form.category.clone(),
            unit: form.unit.clone(),
            location: form.location.clone(),
            supplier: form.supplier.clone(),
            min_stock: form.min_stock,
            max_stock: form.max_stock,
        };

        let item = self.api.create_or_restock(&request).await?;
        tracing::info!(
            item = %item.name,
            stock = item.stock,
            unit_price = %item.unit_price,
            "stock received"
        );
        Ok(item)
    }

    /// Pre-check a batch intake: does the item exist, and how many batches
    /// does it already carry?
    pub async fn plan_batches(&self, form: &BatchReceiveForm) -> AppResult<BatchReceivePlan> {
        validation::validate_item_name(&form.name)?;

        let check = self.api.check_item_batches(&form.name).await?;
        match (check.exists, check.item) {
            (true, Some(item)) => Ok(BatchReceivePlan::Existing {
                item,
                batch_count: check.batches.len(),
            }),
            _ => Ok(BatchReceivePlan::NewItem {
                name: form.name.clone(),
            }),
        }
    }

    /// Submit a batch-tracked intake, generating batch numbers where absent.
    pub async fn receive_batches(
        &self,
        form: &BatchReceiveForm,
    ) -> AppResult<ReceiveWithBatchesResponse> {
        validation::validate_item_name(&form.name)?;
        if form.batches.is_empty() {
            return Err(AppError::validation("At least one batch is required"));
        }

        let mut batches = Vec::with_capacity(form.batches.len());
        for entry in &form.batches {
            if entry.quantity <= Decimal::ZERO {
                return Err(AppError::validation("Batch quantity must be positive"));
            }
            validation::validate_unit_price(entry.unit_price)?;

            batches.push(BatchIntake {
                batch_number: entry
                    .batch_number
                    .clone()
                    .filter(|n| !n.trim().is_empty())
                    .unwrap_or_else(generate_batch_number),
                quantity: entry.quantity,
                unit_price: entry.unit_price,
                expiry_date: entry.expiry_date,
                supplier: entry.supplier.clone(),
                po_number: entry.po_number.clone(),
            });
        }

        let request = ReceiveWithBatchesRequest {
            name: form.name.clone(),
            item_code: form.item_code.clone(),
            category: form.category.clone(),
            unit: form.unit.clone(),
            batches,
        };

        let response = self.api.receive_with_batches(&request).await?;
        tracing::info!(
            item = %response.item.name,
            batches = response.batches.len(),
            "batch intake received"
        );
        Ok(response)
    }
}

fn generate_batch_number() -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!(
        "B-{}-{}",
        chrono::Utc::now().format("%Y%m%d"),
        &suffix[..8]
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_batch_numbers_are_unique() {
        let a = generate_batch_number();
        let b = generate_batch_number();
        assert_ne!(a, b);
        assert!(a.starts_with("B-"));
    }
}
