//! Department statistics view

use shared::currency::format_tzs;

use crate::error::AppResult;
use crate::services::StatsService;

pub async fn run(service: &StatsService) -> AppResult<()> {
    let view = service.department_stats().await?;

    println!(
        "{:<24} {:>6} {:>10} {:>20} {:>6} {:>6}",
        "CATEGORY", "ITEMS", "STOCK", "VALUE", "LOW", "OUT"
    );
    for category in &view.categories {
        println!(
            "{:<24} {:>6} {:>10} {:>20} {:>6} {:>6}",
            category.category,
            category.item_count,
            category.total_stock,
            format_tzs(category.total_value),
            category.low_stock,
            category.out_of_stock
        );
    }

    println!(
        "\n{} items across {} categories, {} suppliers",
        view.item_count, view.category_count, view.supplier_count
    );
    println!("Total stock value: {}", format_tzs(view.total_value));
    Ok(())
}
