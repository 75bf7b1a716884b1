//! Manual stock correction

use shared::currency::format_tzs;

use crate::error::AppResult;
use crate::services::AdjustmentService;

pub async fn run(
    service: &AdjustmentService,
    item_id: i64,
    new_stock: i64,
    reason: &str,
) -> AppResult<()> {
    let item = service.adjust(item_id, new_stock, reason).await?;
    println!(
        "Adjusted '{}': stock {} at {}",
        item.name,
        item.stock,
        format_tzs(item.unit_price)
    );
    Ok(())
}
