//! Offers service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use platter::offers::RestaurantId;
use tracing::info;

use crate::domain::offers::{
    OffersServiceError, data::NewOffer, records::OfferRecord, store::OfferStore,
};

#[derive(Clone)]
pub struct StoreOffersService {
    store: Arc<dyn OfferStore>,
}

impl StoreOffersService {
    #[must_use]
    pub fn new(store: Arc<dyn OfferStore>) -> Self {
        Self { store }
    }
}

impl std::fmt::Debug for StoreOffersService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreOffersService").finish_non_exhaustive()
    }
}

#[async_trait]
impl OffersService for StoreOffersService {
    #[tracing::instrument(
        name = "offers.service.register_offer",
        skip(self, offer),
        fields(
            restaurant_id = %offer.restaurant,
            offer_uuid = %offer.uuid,
            offer_type = %offer.offer_type,
        ),
        err
    )]
    async fn register_offer(&self, offer: NewOffer) -> Result<OfferRecord, OffersServiceError> {
        let record = self.store.add(offer).await?;

        info!(
            discount = ?record.offer.discount,
            segment_count = record.offer.segments.len(),
            "offer registered"
        );

        Ok(record)
    }

    #[tracing::instrument(
        name = "offers.service.list_offers",
        skip(self),
        fields(restaurant_id = %restaurant, offer_count = tracing::field::Empty),
        err
    )]
    async fn list_offers(
        &self,
        restaurant: RestaurantId,
    ) -> Result<Vec<OfferRecord>, OffersServiceError> {
        let offers = self.store.offers_for(restaurant).await?;

        tracing::Span::current().record("offer_count", offers.len());

        if offers.is_empty() {
            return Err(OffersServiceError::NotFound);
        }

        Ok(offers)
    }
}

#[automock]
#[async_trait]
pub trait OffersService: Send + Sync {
    /// Validate and register an offer. Earlier offers stay live.
    async fn register_offer(&self, offer: NewOffer) -> Result<OfferRecord, OffersServiceError>;

    /// Every offer registered for a restaurant, oldest first.
    ///
    /// A restaurant with no offers is [`OffersServiceError::NotFound`].
    async fn list_offers(
        &self,
        restaurant: RestaurantId,
    ) -> Result<Vec<OfferRecord>, OffersServiceError>;
}
