//! Weighted-average restock valuation
//!
//! Computes the blended unit price previewed when merging a new receipt into
//! existing on-hand stock. The preview is never authoritative: the backend
//! recomputes on submission and its echo replaces whatever was shown here.

use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValuationError {
    /// Both current stock and incoming quantity are zero, so there is no
    /// position to value.
    #[error("cannot value an empty position (current stock and incoming quantity are both zero)")]
    EmptyPosition,

    #[error("quantity cannot be negative: {0}")]
    NegativeQuantity(i64),

    #[error("unit price cannot be negative: {0}")]
    NegativePrice(Decimal),
}

/// Blend the current position with an incoming receipt.
///
/// `(stock * price + qty * new_price) / (stock + qty)`, with the
/// zero-denominator case rejected up front instead of producing NaN.
pub fn weighted_average_unit_price(
    current_stock: i64,
    current_unit_price: Decimal,
    incoming_quantity: i64,
    incoming_unit_price: Decimal,
) -> Result<Decimal, ValuationError> {
    if current_stock < 0 {
        return Err(ValuationError::NegativeQuantity(current_stock));
    }
    if incoming_quantity < 0 {
        return Err(ValuationError::NegativeQuantity(incoming_quantity));
    }
    if current_unit_price < Decimal::ZERO {
        return Err(ValuationError::NegativePrice(current_unit_price));
    }
    if incoming_unit_price < Decimal::ZERO {
        return Err(ValuationError::NegativePrice(incoming_unit_price));
    }

    let total_quantity = current_stock + incoming_quantity;
    if total_quantity == 0 {
        return Err(ValuationError::EmptyPosition);
    }

    let current_value = Decimal::from(current_stock) * current_unit_price;
    let incoming_value = Decimal::from(incoming_quantity) * incoming_unit_price;

    Ok((current_value + incoming_value) / Decimal::from(total_quantity))
}

/// Client-side preview of a restock, shown before submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RestockPreview {
    pub blended_unit_price: Decimal,
    pub resulting_stock: i64,
}

impl RestockPreview {
    pub fn compute(
        current_stock: i64,
        current_unit_price: Decimal,
        incoming_quantity: i64,
        incoming_unit_price: Decimal,
    ) -> Result<Self, ValuationError> {
        let blended = weighted_average_unit_price(
            current_stock,
            current_unit_price,
            incoming_quantity,
            incoming_unit_price,
        )?;
        Ok(Self {
            blended_unit_price: blended,
            resulting_stock: current_stock + incoming_quantity,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn documented_scenario() {
        // 100 @ 1000 restocked with 50 @ 1300 blends to exactly 1100
        let avg = weighted_average_unit_price(100, dec("1000"), 50, dec("1300")).unwrap();
        assert_eq!(avg, dec("1100"));
    }

    #[test]
    fn fresh_item_takes_incoming_price() {
        let avg = weighted_average_unit_price(0, dec("0"), 25, dec("850.50")).unwrap();
        assert_eq!(avg, dec("850.50"));
    }

    #[test]
    fn empty_position_is_rejected() {
        let err = weighted_average_unit_price(0, dec("100"), 0, dec("200")).unwrap_err();
        assert_eq!(err, ValuationError::EmptyPosition);
    }

    #[test]
    fn negative_inputs_are_rejected() {
        assert_eq!(
            weighted_average_unit_price(-1, dec("100"), 5, dec("200")),
            Err(ValuationError::NegativeQuantity(-1))
        );
        assert_eq!(
            weighted_average_unit_price(1, dec("-100"), 5, dec("200")),
            Err(ValuationError::NegativePrice(dec("-100")))
        );
    }

    #[test]
    fn preview_tracks_resulting_stock() {
        let preview = RestockPreview::compute(100, dec("1000"), 50, dec("1300")).unwrap();
        assert_eq!(preview.resulting_stock, 150);
        assert_eq!(preview.blended_unit_price, dec("1100"));
    }
}
