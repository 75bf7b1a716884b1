//! Item list view

use shared::currency::format_tzs;

use crate::api::ApiClient;
use crate::error::AppResult;

pub async fn run(api: &ApiClient) -> AppResult<()> {
    let items = api.list_items().await?;

    println!(
        "{:<6} {:<12} {:<28} {:>8} {:>18} {:<12}",
        "ID", "CODE", "NAME", "STOCK", "UNIT PRICE", "LEVEL"
    );
    for item in &items {
        println!(
            "{:<6} {:<12} {:<28} {:>8} {:>18} {:<12}",
            item.id,
            item.item_code,
            item.name,
            item.stock,
            format_tzs(item.unit_price),
            item.stock_level().as_str()
        );
    }
    println!("\n{} items", items.len());
    Ok(())
}
