//! Engine prelude.
//!
//! Everything needed to validate offers and evaluate them against a cart.

pub use crate::{
    discounts::{DiscountError, discount_amount, discounted_value, percent_of},
    offers::{Discount, InvalidOfferError, Offer, OfferType, RestaurantId, UserId},
    segments::{Segment, SegmentSet},
    selection::{Candidate, Selection, select_best},
};
