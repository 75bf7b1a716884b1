//! Batch ledger view

use shared::currency::format_tzs;

use crate::error::AppResult;
use crate::services::LedgerService;

pub async fn run(service: &LedgerService, item_id: i64) -> AppResult<()> {
    let view = service.item_ledger(item_id).await?;

    println!("Batches for '{}' ({})", view.item.name, view.item.item_code);
    println!(
        "{:<22} {:>12} {:>12} {:>18} {:>18} {:<10}",
        "BATCH", "ORIGINAL", "REMAINING", "UNIT PRICE", "REMAINING VALUE", "STATUS"
    );
    for line in &view.ledger.lines {
        println!(
            "{:<22} {:>12} {:>12} {:>18} {:>18} {:<10}",
            line.batch.batch_number,
            line.batch.original_quantity,
            line.batch.remaining_quantity,
            format_tzs(line.batch.unit_price),
            format_tzs(line.remaining_value),
            line.status.as_str()
        );
    }

    println!(
        "\nTotal remaining: {} units, {}",
        view.ledger.total_remaining_quantity,
        format_tzs(view.ledger.total_remaining_value)
    );
    println!("Average price:   {}", format_tzs(view.ledger.average_price));
    match view.ledger.current_fifo_price {
        Some(fifo) => {
            println!("FIFO price:      {}", format_tzs(fifo));
            if let Some(diff) = view.ledger.price_difference {
                let marker = if view.ledger.is_favorable() {
                    "favorable"
                } else {
                    "unfavorable"
                };
                println!("Difference:      {} ({})", format_tzs(diff), marker);
            }
        }
        None => println!("FIFO price:      n/a (no batch with remaining stock)"),
    }
    Ok(())
}
