//! Input validation for stock operations
//!
//! Plain functions returning a static message on failure; the console crate
//! wraps these into its error type before anything is sent to the backend.

use rust_decimal::Decimal;

/// Received quantities must be at least 1
pub fn validate_receive_quantity(quantity: i64) -> Result<(), &'static str> {
    if quantity < 1 {
        return Err("Quantity must be at least 1");
    }
    Ok(())
}

pub fn validate_unit_price(price: Decimal) -> Result<(), &'static str> {
    if price < Decimal::ZERO {
        return Err("Unit price cannot be negative");
    }
    Ok(())
}

pub fn validate_item_name(name: &str) -> Result<(), &'static str> {
    if name.trim().is_empty() {
        return Err("Item name cannot be empty");
    }
    Ok(())
}

/// Item codes: 2-32 characters, uppercase alphanumeric with dashes
pub fn validate_item_code(code: &str) -> Result<(), &'static str> {
    if code.len() < 2 {
        return Err("Item code must be at least 2 characters");
    }
    if code.len() > 32 {
        return Err("Item code must be at most 32 characters");
    }
    if !code
        .chars()
        .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '-')
    {
        return Err("Item code must be uppercase alphanumeric (dashes allowed)");
    }
    Ok(())
}

pub fn validate_batch_quantities(
    original: Decimal,
    remaining: Decimal,
) -> Result<(), &'static str> {
    if original < Decimal::ZERO || remaining < Decimal::ZERO {
        return Err("Batch quantities cannot be negative");
    }
    if remaining > original {
        return Err("Remaining quantity cannot exceed original quantity");
    }
    Ok(())
}

pub fn validate_adjusted_stock(new_stock: i64) -> Result<(), &'static str> {
    if new_stock < 0 {
        return Err("Adjusted stock cannot be negative");
    }
    Ok(())
}

pub fn validate_report_month(month: u32) -> Result<(), &'static str> {
    if !(1..=12).contains(&month) {
        return Err("Month must be between 1 and 12");
    }
    Ok(())
}

pub fn validate_report_year(year: i32) -> Result<(), &'static str> {
    if !(2000..=2100).contains(&year) {
        return Err("Year out of supported range");
    }
    Ok(())
}

pub fn validate_damage_counts(good: i64, damage: i64) -> Result<(), &'static str> {
    if good < 0 || damage < 0 {
        return Err("Counts cannot be negative");
    }
    if good == 0 && damage == 0 {
        return Err("At least one count must be non-zero");
    }
    Ok(())
}
