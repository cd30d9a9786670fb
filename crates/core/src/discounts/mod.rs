//! Discount calculations
//!
//! Pure functions turning a [`Discount`] and a cart value into the amount
//! deducted and the discounted cart value. Every result lies in
//! `0..=cart_value`.

use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};
use thiserror::Error;

use crate::offers::Discount;

/// Errors specific to discount calculations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiscountError {
    /// Percentage calculation could not be represented.
    #[error("percentage calculation overflowed")]
    PercentConversion,
}

/// The number of currency units `discount` removes from `cart_value`.
///
/// Flat amounts are capped at the cart value; percentages are rounded with
/// [`percent_of`] and capped the same way.
///
/// # Errors
///
/// Returns [`DiscountError::PercentConversion`] if a percentage cannot be computed.
pub fn discount_amount(discount: &Discount, cart_value: u64) -> Result<u64, DiscountError> {
    let amount = match *discount {
        Discount::FlatAmount { amount } => amount,
        Discount::FlatPercent { percentage } => percent_of(percentage, cart_value)?,
    };

    Ok(amount.min(cart_value))
}

/// The cart value after applying `discount`.
///
/// # Errors
///
/// Returns [`DiscountError::PercentConversion`] if a percentage cannot be computed.
pub fn discounted_value(discount: &Discount, cart_value: u64) -> Result<u64, DiscountError> {
    let amount = discount_amount(discount, cart_value)?;

    Ok(cart_value.saturating_sub(amount))
}

/// `percentage` percent of `value`, rounded to a whole unit.
///
/// Midpoints round away from zero, i.e. half-up for the non-negative values used
/// here: 50% of 1 is 1, 33% of 199 (65.67) is 66.
///
/// # Errors
///
/// Returns [`DiscountError::PercentConversion`] if the product cannot be
/// represented.
pub fn percent_of(percentage: u8, value: u64) -> Result<u64, DiscountError> {
    Decimal::from(value)
        .checked_mul(Decimal::from(percentage))
        .and_then(|scaled| scaled.checked_div(Decimal::ONE_HUNDRED))
        .ok_or(DiscountError::PercentConversion)?
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u64()
        .ok_or(DiscountError::PercentConversion)
}
