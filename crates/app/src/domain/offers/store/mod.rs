//! Offer Stores
//!
//! Offers accumulate per restaurant: a registration appends and never replaces.
//! Both stores return offers in registration order, which selection relies on
//! to break ties in favour of the earliest offer.

use async_trait::async_trait;
use mockall::automock;
use platter::{offers::RestaurantId, segments::Segment};

use crate::domain::offers::{OffersServiceError, data::NewOffer, records::OfferRecord};

mod memory;
mod postgres;

pub use memory::InMemoryOfferStore;
pub use postgres::PgOfferStore;

#[automock]
#[async_trait]
pub trait OfferStore: Send + Sync {
    /// Validate and append an offer to its restaurant's collection.
    async fn add(&self, offer: NewOffer) -> Result<OfferRecord, OffersServiceError>;

    /// Offers for `restaurant` targeting `segment`, in registration order.
    ///
    /// An absent segment has no candidates.
    async fn candidates_for(
        &self,
        restaurant: RestaurantId,
        segment: Option<Segment>,
    ) -> Result<Vec<OfferRecord>, OffersServiceError>;

    /// Every offer for `restaurant`, in registration order.
    async fn offers_for(
        &self,
        restaurant: RestaurantId,
    ) -> Result<Vec<OfferRecord>, OffersServiceError>;
}
