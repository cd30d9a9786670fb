//! Offer Data

use platter::offers::{InvalidOfferError, Offer, RestaurantId};
use smallvec::SmallVec;

use crate::domain::offers::records::OfferUuid;

/// New Offer Data
///
/// Registration input as received; [`NewOffer::validate`] turns it into an
/// [`Offer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOffer {
    pub uuid: OfferUuid,
    pub restaurant: RestaurantId,
    pub offer_type: String,
    pub offer_value: i64,
    pub segments: SmallVec<[String; 4]>,
}

impl NewOffer {
    /// Validate the offer type and value.
    ///
    /// # Errors
    ///
    /// Returns an [`InvalidOfferError`] for unknown types or out-of-range values.
    pub fn validate(&self) -> Result<Offer, InvalidOfferError> {
        Offer::parse(
            self.restaurant,
            &self.offer_type,
            self.offer_value,
            self.segments.iter().map(String::as_str),
        )
    }
}
