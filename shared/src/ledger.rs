//! Batch ledger reconciliation
//!
//! Classifies batches and reconciles the FIFO costing view against the
//! item's weighted-average price for display.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::Batch;

/// Batch state, classified in strict priority order.
///
/// Expired wins over everything: an expired batch with remaining stock is
/// still reported Expired, never LowStock or Active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BatchStatus {
    Expired,
    UsedUp,
    LowStock,
    Active,
}

impl BatchStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BatchStatus::Expired => "Expired",
            BatchStatus::UsedUp => "Used Up",
            BatchStatus::LowStock => "Low Stock",
            BatchStatus::Active => "Active",
        }
    }
}

/// Fraction of the original quantity below which a batch counts as low.
fn low_stock_threshold(original: Decimal) -> Decimal {
    // 20% of the original receipt
    original * Decimal::new(2, 1)
}

/// Classify a batch. Total over all inputs.
pub fn classify_batch(batch: &Batch, today: NaiveDate) -> BatchStatus {
    if batch.is_expired(today) {
        BatchStatus::Expired
    } else if batch.remaining_quantity <= Decimal::ZERO {
        BatchStatus::UsedUp
    } else if batch.remaining_quantity < low_stock_threshold(batch.original_quantity) {
        BatchStatus::LowStock
    } else {
        BatchStatus::Active
    }
}

/// One ledger line: a batch plus its derived display state
#[derive(Debug, Clone, Serialize)]
pub struct BatchLine {
    pub batch: Batch,
    pub status: BatchStatus,
    pub remaining_value: Decimal,
}

/// The reconciled ledger for one item
#[derive(Debug, Clone, Serialize)]
pub struct BatchLedger {
    /// Weighted-average price the item carries
    pub average_price: Decimal,
    /// Unit price of the oldest batch that still has stock, if any
    pub current_fifo_price: Option<Decimal>,
    /// `average_price - current_fifo_price`; non-negative is favorable
    pub price_difference: Option<Decimal>,
    pub total_remaining_quantity: Decimal,
    /// Sum of remaining value over batches that still have stock. Fully
    /// consumed batches stay in `lines` but contribute nothing here.
    pub total_remaining_value: Decimal,
    pub lines: Vec<BatchLine>,
}

impl BatchLedger {
    pub fn is_favorable(&self) -> bool {
        self.price_difference
            .map(|d| d >= Decimal::ZERO)
            .unwrap_or(false)
    }
}

/// Unit price of the batch FIFO would consume next: oldest receipt date
/// among batches with remaining stock.
pub fn current_fifo_price(batches: &[Batch]) -> Option<Decimal> {
    batches
        .iter()
        .filter(|b| b.remaining_quantity > Decimal::ZERO)
        .min_by_key(|b| b.date_received)
        .map(|b| b.unit_price)
}

/// Build the display ledger for an item's batches.
pub fn build_ledger(average_price: Decimal, batches: Vec<Batch>, today: NaiveDate) -> BatchLedger {
    let fifo_price = current_fifo_price(&batches);

    let mut total_remaining_quantity = Decimal::ZERO;
    let mut total_remaining_value = Decimal::ZERO;

    let lines: Vec<BatchLine> = batches
        .into_iter()
        .map(|batch| {
            let status = classify_batch(&batch, today);
            let remaining_value = batch.remaining_value();
            if batch.remaining_quantity > Decimal::ZERO {
                total_remaining_quantity += batch.remaining_quantity;
                total_remaining_value += remaining_value;
            }
            BatchLine {
                batch,
                status,
                remaining_value,
            }
        })
        .collect();

    BatchLedger {
        average_price,
        current_fifo_price: fifo_price,
        price_difference: fifo_price.map(|p| average_price - p),
        total_remaining_quantity,
        total_remaining_value,
        lines,
    }
}
