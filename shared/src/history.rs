//! Stock-history reconciliation
//!
//! Transaction records arrive with field names that differ by originating
//! backend route. Each logical value is resolved through an ordered list of
//! candidate fields; the first present, non-null one wins. A record that
//! yields no stock pair or no date becomes `HistoryEntry::Incomplete` and
//! stays visible instead of being dropped.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use serde_json::{Map, Value};
use std::str::FromStr;

use crate::models::{HistoryEntry, HistoryRow};

const STOCK_BEFORE_KEYS: &[&str] = &["stock_before", "old_stock", "quantity_before"];
const STOCK_AFTER_KEYS: &[&str] = &["stock_after", "new_stock", "quantity_after"];
const ADJUSTMENT_KEYS: &[&str] = &["adjustment", "quantity_change", "change", "delta"];
const PRICE_BEFORE_KEYS: &[&str] = &["price_before", "old_price", "unit_price_before"];
const PRICE_AFTER_KEYS: &[&str] = &["price_after", "new_price", "unit_price_after", "unit_price"];
const DATE_KEYS: &[&str] = &["date", "created_at", "timestamp", "transaction_date"];
const REASON_KEYS: &[&str] = &["reason", "notes", "note", "description", "transaction_type"];

fn decimal_value(value: &Value) -> Option<Decimal> {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Some(Decimal::from(i))
            } else {
                n.as_f64().and_then(Decimal::from_f64_retain)
            }
        }
        Value::String(s) => Decimal::from_str(s.trim()).ok(),
        _ => None,
    }
}

fn date_value(value: &Value) -> Option<DateTime<Utc>> {
    let s = value.as_str()?.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
        return Some(dt.and_utc());
    }
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(d.and_hms_opt(0, 0, 0)?.and_utc());
    }
    None
}

fn first_decimal(record: &Map<String, Value>, keys: &[&str]) -> Option<Decimal> {
    keys.iter()
        .filter_map(|k| record.get(*k))
        .find_map(decimal_value)
}

fn first_date(record: &Map<String, Value>, keys: &[&str]) -> Option<DateTime<Utc>> {
    keys.iter()
        .filter_map(|k| record.get(*k))
        .find_map(date_value)
}

fn first_string(record: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|k| record.get(*k))
        .find_map(|v| v.as_str())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Resolve one raw record. A usable record needs a stock before/after pair
/// (derivable via an adjustment delta) and a date.
pub fn resolve_record(record: &Value) -> HistoryEntry {
    let Some(fields) = record.as_object() else {
        return HistoryEntry::Incomplete {
            missing: vec!["record"],
            raw: record.clone(),
        };
    };

    let adjustment = first_decimal(fields, ADJUSTMENT_KEYS);
    let mut stock_before = first_decimal(fields, STOCK_BEFORE_KEYS);
    let mut stock_after = first_decimal(fields, STOCK_AFTER_KEYS);

    // Derive the missing side of the pair from the adjustment delta
    match (stock_before, stock_after, adjustment) {
        (None, Some(after), Some(delta)) => stock_before = Some(after - delta),
        (Some(before), None, Some(delta)) => stock_after = Some(before + delta),
        _ => {}
    }

    let date = first_date(fields, DATE_KEYS);

    let mut missing = Vec::new();
    if stock_before.is_none() {
        missing.push("stock_before");
    }
    if stock_after.is_none() {
        missing.push("stock_after");
    }
    if date.is_none() {
        missing.push("date");
    }

    match (stock_before, stock_after, date) {
        (Some(before), Some(after), Some(date)) => HistoryEntry::Resolved(HistoryRow {
            date,
            stock_before: before,
            stock_after: after,
            price_before: first_decimal(fields, PRICE_BEFORE_KEYS),
            price_after: first_decimal(fields, PRICE_AFTER_KEYS),
            reason: first_string(fields, REASON_KEYS).unwrap_or_else(|| "unspecified".to_string()),
            period_start: None,
        }),
        _ => HistoryEntry::Incomplete {
            missing,
            raw: record.clone(),
        },
    }
}

/// Reconcile a whole transaction listing.
///
/// Resolved rows come back newest-first with `period_start` taken from the
/// next older row's date, falling back to the item's creation date.
/// Incomplete records follow the resolved ones, in input order.
pub fn reconcile_history(
    records: &[Value],
    item_created_at: Option<DateTime<Utc>>,
) -> Vec<HistoryEntry> {
    let mut rows = Vec::new();
    let mut incomplete = Vec::new();

    for record in records {
        match resolve_record(record) {
            HistoryEntry::Resolved(row) => rows.push(row),
            entry @ HistoryEntry::Incomplete { .. } => incomplete.push(entry),
        }
    }

    rows.sort_by(|a, b| b.date.cmp(&a.date));
    for i in 0..rows.len() {
        rows[i].period_start = rows
            .get(i + 1)
            .map(|older| older.date)
            .or(item_created_at);
    }

    rows.into_iter()
        .map(HistoryEntry::Resolved)
        .chain(incomplete)
        .collect()
}
