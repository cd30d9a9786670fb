//! Cart Offer Models

use clap::ValueEnum;
use platter::segments::Segment;

use crate::domain::offers::records::OfferUuid;

/// What to do when the segment service cannot answer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum SegmentFailurePolicy {
    /// Fail the request.
    #[default]
    Propagate,

    /// Log a warning and price the cart as if the user had no segment.
    #[value(name = "no-segment")]
    TreatAsNoSegment,
}

/// Outcome of pricing a cart against a restaurant's offers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedOffer {
    pub original_cart_value: u64,

    /// Cart value after the winning discount.
    pub cart_value: u64,

    pub discount: u64,

    /// Winning offer, if any applied.
    pub offer: Option<OfferUuid>,

    /// Segment the user resolved to.
    pub segment: Option<Segment>,
}

impl AppliedOffer {
    /// A cart no offer applied to.
    #[must_use]
    pub fn unchanged(cart_value: u64, segment: Option<Segment>) -> Self {
        Self {
            original_cart_value: cart_value,
            cart_value,
            discount: 0,
            offer: None,
            segment,
        }
    }
}
