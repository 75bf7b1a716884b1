//! Reconciled stock-history rows
//!
//! The backend's transaction endpoints emit records with field names that
//! vary by originating route. `crate::history` resolves them into these
//! uniform rows; anything it cannot resolve is surfaced as `Incomplete`
//! rather than hidden.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

/// A fully resolved stock movement, ready for display
#[derive(Debug, Clone, Serialize)]
pub struct HistoryRow {
    pub date: DateTime<Utc>,
    pub stock_before: Decimal,
    pub stock_after: Decimal,
    pub price_before: Option<Decimal>,
    pub price_after: Option<Decimal>,
    pub reason: String,
    /// Start of the period this row covers: the date of the next older
    /// record, or the item's creation date. Approximate by construction —
    /// the backend does not track "before" state separately.
    pub period_start: Option<DateTime<Utc>>,
}

/// Outcome of resolving one raw transaction record
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum HistoryEntry {
    Resolved(HistoryRow),
    /// The record lacked a usable stock pair or date. Kept visible so the
    /// operator knows the ledger has gaps.
    Incomplete {
        missing: Vec<&'static str>,
        raw: serde_json::Value,
    },
}

impl HistoryEntry {
    pub fn as_resolved(&self) -> Option<&HistoryRow> {
        match self {
            HistoryEntry::Resolved(row) => Some(row),
            HistoryEntry::Incomplete { .. } => None,
        }
    }

    pub fn is_incomplete(&self) -> bool {
        matches!(self, HistoryEntry::Incomplete { .. })
    }
}
