//! Cart offers service errors.

use platter::discounts::DiscountError;
use thiserror::Error;

use crate::domain::{offers::OffersServiceError, segments::SegmentLookupError};

#[derive(Debug, Error)]
pub enum CartOffersServiceError {
    #[error("cart value must not be negative, got {0}")]
    InvalidRequest(i64),

    #[error("segment lookup failed")]
    SegmentLookup(#[from] SegmentLookupError),

    #[error("offer lookup failed")]
    Offers(#[from] OffersServiceError),

    #[error("discount calculation failed")]
    Discount(#[from] DiscountError),
}
