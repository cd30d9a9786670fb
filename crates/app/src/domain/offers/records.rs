//! Offer Records

use jiff::Timestamp;
use platter::{
    offers::{Discount, Offer},
    selection::Candidate,
};

use crate::uuids::TypedUuid;

/// Offer UUID
pub type OfferUuid = TypedUuid<OfferRecord>;

/// Offer Record
#[derive(Debug, Clone, PartialEq)]
pub struct OfferRecord {
    pub uuid: OfferUuid,

    /// Validated offer.
    pub offer: Offer,

    /// Registration order within the store. Strictly increasing per restaurant.
    pub sequence: u64,

    pub created_at: Timestamp,
}

impl Candidate for OfferRecord {
    fn discount(&self) -> &Discount {
        &self.offer.discount
    }
}
