//! Item history view
//!
//! Resolved rows print as a table; records the resolver could not use are
//! listed afterwards instead of being hidden.

use shared::currency::format_tzs;
use shared::models::HistoryEntry;

use crate::error::AppResult;
use crate::services::HistoryService;

pub async fn run(service: &HistoryService, item_id: i64) -> AppResult<()> {
    let view = service.item_history(item_id).await?;

    println!("History for '{}'", view.item.name);
    println!(
        "{:<22} {:>10} {:>10} {:>18} {:>18} {:<20}",
        "DATE", "BEFORE", "AFTER", "PRICE BEFORE", "PRICE AFTER", "REASON"
    );
    for entry in &view.entries {
        if let HistoryEntry::Resolved(row) = entry {
            println!(
                "{:<22} {:>10} {:>10} {:>18} {:>18} {:<20}",
                row.date.format("%Y-%m-%d %H:%M"),
                row.stock_before,
                row.stock_after,
                row.price_before.map(format_tzs).unwrap_or_else(|| "-".into()),
                row.price_after.map(format_tzs).unwrap_or_else(|| "-".into()),
                row.reason
            );
        }
    }

    let incomplete = view.incomplete_count();
    if incomplete > 0 {
        println!("\n{} record(s) could not be resolved:", incomplete);
        for entry in &view.entries {
            if let HistoryEntry::Incomplete { missing, raw } = entry {
                println!("  missing {}: {}", missing.join(", "), raw);
            }
        }
    }
    Ok(())
}
