//! PostgreSQL offer store.

use async_trait::async_trait;
use platter::{offers::RestaurantId, segments::Segment};

use crate::{
    database::Db,
    domain::offers::{
        OffersServiceError, data::NewOffer, records::OfferRecord,
        repository::PgOffersRepository, store::OfferStore,
    },
};

/// Store backed by the `offers` table.
///
/// Registrations hold the restaurant's advisory lock until commit, so row ids
/// follow commit order within a restaurant. Reads are single statements.
#[derive(Debug, Clone)]
pub struct PgOfferStore {
    db: Db,
    repository: PgOffersRepository,
}

impl PgOfferStore {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgOffersRepository::new(),
        }
    }
}

#[async_trait]
impl OfferStore for PgOfferStore {
    async fn add(&self, offer: NewOffer) -> Result<OfferRecord, OffersServiceError> {
        let validated = offer.validate()?;

        let mut tx = self.db.begin_restaurant_transaction(offer.restaurant).await?;

        let record = self
            .repository
            .create_offer(&mut tx, offer.uuid, &validated)
            .await?;

        tx.commit().await?;

        Ok(record)
    }

    async fn candidates_for(
        &self,
        restaurant: RestaurantId,
        segment: Option<Segment>,
    ) -> Result<Vec<OfferRecord>, OffersServiceError> {
        let Some(segment) = segment else {
            return Ok(Vec::new());
        };

        let mut tx = self.db.pool().begin().await?;

        let offers = self
            .repository
            .candidate_offers(&mut tx, restaurant, &segment)
            .await?;

        tx.commit().await?;

        Ok(offers)
    }

    async fn offers_for(
        &self,
        restaurant: RestaurantId,
    ) -> Result<Vec<OfferRecord>, OffersServiceError> {
        let mut tx = self.db.pool().begin().await?;

        let offers = self.repository.list_offers(&mut tx, restaurant).await?;

        tx.commit().await?;

        Ok(offers)
    }
}
