//! Stock receiving command
//!
//! Plain intakes preview the blended price first; batch intakes are
//! described with repeated `--batch QTY:PRICE[:EXPIRY]` specs.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use shared::currency::format_tzs;
use std::str::FromStr;

use crate::error::{AppError, AppResult};
use crate::services::{
    BatchIntakeForm, BatchReceiveForm, BatchReceivePlan, ReceiveForm, ReceivePlan,
    ReceivingService,
};

pub async fn run(service: &ReceivingService, form: ReceiveForm, submit: bool) -> AppResult<()> {
    let plan = service.plan(&form).await?;
    match &plan {
        ReceivePlan::Restock { item, preview } => {
            println!(
                "Existing item '{}': stock {} at {}",
                item.name,
                item.stock,
                format_tzs(item.unit_price)
            );
            println!(
                "Preview: +{} at {} blends to {} (resulting stock {})",
                form.quantity,
                format_tzs(form.unit_price),
                format_tzs(preview.blended_unit_price),
                preview.resulting_stock
            );
            println!("Preview only; the server's persisted values are authoritative.");
        }
        ReceivePlan::NewItem { name } => {
            println!("'{}' does not exist yet; submission will create it.", name);
        }
    }

    if submit {
        // Existing items go through add-stock; unknown ones are created
        let item = match &plan {
            ReceivePlan::Restock { item, .. } => service.restock(item.id, &form).await?,
            ReceivePlan::NewItem { .. } => service.submit(&form).await?,
        };
        println!(
            "Received. Persisted stock {} at {}",
            item.stock,
            format_tzs(item.unit_price)
        );
    } else {
        println!("Dry run. Pass --submit to post this intake.");
    }
    Ok(())
}

pub async fn run_batches(
    service: &ReceivingService,
    form: BatchReceiveForm,
    submit: bool,
) -> AppResult<()> {
    match service.plan_batches(&form).await? {
        BatchReceivePlan::Existing { item, batch_count } => println!(
            "Existing item '{}' with {} batch(es); receiving {} more",
            item.name,
            batch_count,
            form.batches.len()
        ),
        BatchReceivePlan::NewItem { name } => println!(
            "'{}' does not exist yet; receiving {} batch(es) will create it",
            name,
            form.batches.len()
        ),
    }
    if !submit {
        println!("Dry run. Pass --submit to post this intake.");
        return Ok(());
    }

    let response = service.receive_batches(&form).await?;
    println!(
        "Received. '{}' now holds {} at {}",
        response.item.name,
        response.item.stock,
        format_tzs(response.item.unit_price)
    );
    for batch in &response.batches {
        println!(
            "  {} {} at {}",
            batch.batch_number,
            batch.original_quantity,
            format_tzs(batch.unit_price)
        );
    }
    Ok(())
}

/// Parse a `QTY:PRICE[:EXPIRY]` batch spec.
pub fn parse_batch_spec(spec: &str) -> AppResult<BatchIntakeForm> {
    let mut parts = spec.splitn(3, ':');
    let quantity = parts
        .next()
        .and_then(|p| Decimal::from_str(p.trim()).ok())
        .ok_or_else(|| AppError::validation(format!("bad batch quantity in {:?}", spec)))?;
    let unit_price = parts
        .next()
        .and_then(|p| Decimal::from_str(p.trim()).ok())
        .ok_or_else(|| AppError::validation(format!("bad batch price in {:?}", spec)))?;
    let expiry_date = match parts.next() {
        Some(p) => Some(
            NaiveDate::from_str(p.trim())
                .map_err(|_| AppError::validation(format!("bad expiry date in {:?}", spec)))?,
        ),
        None => None,
    };

    Ok(BatchIntakeForm {
        batch_number: None,
        quantity,
        unit_price,
        expiry_date,
        supplier: None,
        po_number: None,
    })
}
