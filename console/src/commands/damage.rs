//! Damage report view, recording, and CSV export

use chrono::NaiveDate;
use std::path::Path;

use crate::error::AppResult;
use crate::services::{export_csv, DamageService};

pub async fn report(
    service: &DamageService,
    item_id: i64,
    year: i32,
    month: Option<u32>,
    export: Option<&Path>,
) -> AppResult<()> {
    let view = service.report(item_id, year, month).await?;

    match view.filter.month {
        Some(m) => println!("Damage reports for item {} ({}-{:02})", item_id, year, m),
        None => println!("Damage reports for item {} ({})", item_id, year),
    }

    println!("{:<12} {:>10} {:>10}", "DATE", "GOOD", "DAMAGED");
    for report in &view.reports {
        println!(
            "{:<12} {:>10} {:>10}",
            report.date, report.good_quantity, report.damage_quantity
        );
    }
    println!(
        "{:<12} {:>10} {:>10}",
        "TOTAL", view.totals.total_good, view.totals.total_damage
    );

    if let Some(monthly) = &view.monthly {
        println!("\nBy month:");
        for (month, totals) in monthly {
            if totals.total_handled() > 0 {
                println!(
                    "  {:>2}: good {:>8}, damaged {:>8}",
                    month, totals.total_good, totals.total_damage
                );
            }
        }
    }

    if let Some(path) = export {
        export_csv(&view, path)?;
        println!("\nExported to {}", path.display());
    }
    Ok(())
}

pub async fn record(
    service: &DamageService,
    item_id: i64,
    date: NaiveDate,
    good: i64,
    damage: i64,
) -> AppResult<()> {
    let report = service.record(item_id, date, good, damage).await?;
    println!(
        "Recorded for {}: good {}, damaged {}",
        report.date, report.good_quantity, report.damage_quantity
    );
    Ok(())
}
