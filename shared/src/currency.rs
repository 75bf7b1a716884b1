//! Tanzanian Shilling display formatting
//!
//! Formatting only — there is no currency conversion anywhere in the system.

use rust_decimal::Decimal;
use std::str::FromStr;
use thiserror::Error;

pub const CURRENCY_CODE: &str = "TZS";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CurrencyError {
    #[error("cannot parse amount from {0:?}")]
    Unparseable(String),
}

/// Format an amount as `TZS 1,234,567.89` (2 decimal places, thousands
/// separators). Negative amounts carry a leading minus.
pub fn format_tzs(amount: Decimal) -> String {
    let rounded = amount.round_dp(2);
    let negative = rounded.is_sign_negative();
    let magnitude = rounded.abs();

    let text = format!("{:.2}", magnitude);
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!(
        "{}{} {}.{}",
        if negative { "-" } else { "" },
        CURRENCY_CODE,
        grouped,
        frac_part
    )
}

/// Parse an amount produced by [`format_tzs`], tolerating a bare number,
/// a missing currency code, and stray whitespace.
pub fn parse_tzs(text: &str) -> Result<Decimal, CurrencyError> {
    let cleaned: String = text
        .replace(CURRENCY_CODE, "")
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .collect();

    if cleaned.is_empty() {
        return Err(CurrencyError::Unparseable(text.to_string()));
    }

    Decimal::from_str(&cleaned).map_err(|_| CurrencyError::Unparseable(text.to_string()))
}
