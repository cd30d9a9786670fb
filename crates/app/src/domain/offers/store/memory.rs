//! In-memory offer store.

use std::sync::Arc;

use async_trait::async_trait;
use jiff::Timestamp;
use platter::{offers::RestaurantId, segments::Segment};
use rustc_hash::{FxHashMap, FxHashSet};
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::offers::{
    OffersServiceError,
    data::NewOffer,
    records::{OfferRecord, OfferUuid},
    store::OfferStore,
};

#[derive(Debug, Default)]
struct State {
    restaurants: FxHashMap<RestaurantId, Arc<[OfferRecord]>>,
    uuids: FxHashSet<OfferUuid>,
    next_sequence: u64,
}

/// Process-local store.
///
/// Each restaurant's offers live in an immutable snapshot that a registration
/// replaces wholesale under the write lock. Readers clone the snapshot and
/// release the lock before filtering, so they observe a registration either
/// completely or not at all.
#[derive(Debug, Default)]
pub struct InMemoryOfferStore {
    state: RwLock<State>,
}

impl InMemoryOfferStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    async fn snapshot(&self, restaurant: RestaurantId) -> Option<Arc<[OfferRecord]>> {
        self.state.read().await.restaurants.get(&restaurant).cloned()
    }
}

#[async_trait]
impl OfferStore for InMemoryOfferStore {
    #[tracing::instrument(
        name = "offers.memory.add",
        skip(self, offer),
        fields(restaurant_id = %offer.restaurant, offer_uuid = %offer.uuid),
        err
    )]
    async fn add(&self, offer: NewOffer) -> Result<OfferRecord, OffersServiceError> {
        let validated = offer.validate()?;

        let mut state = self.state.write().await;

        if state.uuids.contains(&offer.uuid) {
            return Err(OffersServiceError::AlreadyExists);
        }

        state.next_sequence += 1;

        let record = OfferRecord {
            uuid: offer.uuid,
            offer: validated,
            sequence: state.next_sequence,
            created_at: Timestamp::now(),
        };

        let snapshot: Arc<[OfferRecord]> = match state.restaurants.get(&offer.restaurant) {
            Some(existing) => existing
                .iter()
                .cloned()
                .chain(std::iter::once(record.clone()))
                .collect(),
            None => Arc::from([record.clone()]),
        };

        let offer_count = snapshot.len();

        state.restaurants.insert(offer.restaurant, snapshot);
        state.uuids.insert(offer.uuid);

        debug!(offer_count, "registered offer");

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

        let Some(snapshot) = self.snapshot(restaurant).await else {
            return Ok(Vec::new());
        };

        Ok(snapshot
            .iter()
            .filter(|record| record.offer.applies_to(Some(&segment)))
            .cloned()
            .collect())
    }

    async fn offers_for(
        &self,
        restaurant: RestaurantId,
    ) -> Result<Vec<OfferRecord>, OffersServiceError> {
        Ok(self
            .snapshot(restaurant)
            .await
            .map(|snapshot| snapshot.to_vec())
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use platter::offers::{Discount, InvalidOfferError};
    use smallvec::SmallVec;
    use testresult::TestResult;

    use super::*;

    fn new_offer(restaurant: i64, offer_type: &str, value: i64, segments: &[&str]) -> NewOffer {
        NewOffer {
            uuid: OfferUuid::new(),
            restaurant: RestaurantId::new(restaurant),
            offer_type: offer_type.to_string(),
            offer_value: value,
            segments: segments
                .iter()
                .map(|s| (*s).to_string())
                .collect::<SmallVec<_>>(),
        }
    }

    #[tokio::test]
    async fn add_returns_record_with_requested_uuid() -> TestResult {
        let store = InMemoryOfferStore::new();
        let offer = new_offer(101, "FLATX", 10, &["p1"]);
        let uuid = offer.uuid;

        let record = store.add(offer).await?;

        assert_eq!(record.uuid, uuid);
        assert_eq!(record.offer.discount, Discount::FlatAmount { amount: 10 });

        Ok(())
    }

    #[tokio::test]
    async fn add_rejects_invalid_offers_without_storing() -> TestResult {
        let store = InMemoryOfferStore::new();

        let result = store
            .add(new_offer(107, "INVALID_TYPE", 10, &["pX"]))
            .await;

        assert!(
            matches!(
                result,
                Err(OffersServiceError::InvalidOffer(
                    InvalidOfferError::UnknownOfferType(_)
                ))
            ),
            "expected UnknownOfferType, got {result:?}"
        );
        assert!(store.offers_for(RestaurantId::new(107)).await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn add_rejects_duplicate_uuids() -> TestResult {
        let store = InMemoryOfferStore::new();
        let offer = new_offer(101, "FLATX", 10, &["p1"]);

        store.add(offer.clone()).await?;

        let result = store.add(offer).await;

        assert!(
            matches!(result, Err(OffersServiceError::AlreadyExists)),
            "expected AlreadyExists, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn later_registrations_accumulate_in_order() -> TestResult {
        let store = InMemoryOfferStore::new();

        let first = store.add(new_offer(110, "FLATX", 20, &["p1"])).await?;
        let second = store.add(new_offer(110, "FLATX", 5, &["p1"])).await?;

        let offers = store.offers_for(RestaurantId::new(110)).await?;

        assert_eq!(offers, vec![first.clone(), second.clone()]);
        assert!(first.sequence < second.sequence, "sequence must increase");

        Ok(())
    }

    #[tokio::test]
    async fn candidates_filter_by_segment() -> TestResult {
        let store = InMemoryOfferStore::new();

        let p1 = store.add(new_offer(101, "FLATX", 10, &["p1", "p3"])).await?;
        store.add(new_offer(101, "FLAT%", 10, &["p2"])).await?;
        store.add(new_offer(202, "FLATX", 10, &["p1"])).await?;

        let candidates = store
            .candidates_for(RestaurantId::new(101), Some(Segment::from("p1")))
            .await?;

        assert_eq!(candidates, vec![p1]);

        Ok(())
    }

    #[tokio::test]
    async fn absent_segment_has_no_candidates() -> TestResult {
        let store = InMemoryOfferStore::new();

        store.add(new_offer(103, "FLATX", 10, &["p1"])).await?;

        let candidates = store
            .candidates_for(RestaurantId::new(103), None)
            .await?;

        assert!(candidates.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn unknown_restaurant_has_no_offers() -> TestResult {
        let store = InMemoryOfferStore::new();

        assert!(store.offers_for(RestaurantId::new(999)).await?.is_empty());
        assert!(
            store
                .candidates_for(RestaurantId::new(999), Some(Segment::from("p1")))
                .await?
                .is_empty()
        );

        Ok(())
    }

    #[tokio::test]
    async fn snapshots_taken_before_a_registration_are_unchanged() -> TestResult {
        let store = InMemoryOfferStore::new();

        store.add(new_offer(101, "FLATX", 10, &["p1"])).await?;

        let before = store.snapshot(RestaurantId::new(101)).await;

        store.add(new_offer(101, "FLATX", 20, &["p1"])).await?;

        assert_eq!(before.map(|s| s.len()), Some(1));
        assert_eq!(store.offers_for(RestaurantId::new(101)).await?.len(), 2);

        Ok(())
    }

    #[tokio::test]
    async fn concurrent_registrations_are_all_kept() -> TestResult {
        let store = Arc::new(InMemoryOfferStore::new());

        let handles: Vec<_> = (0..16)
            .map(|value| {
                let store = Arc::clone(&store);

                tokio::spawn(async move {
                    store
                        .add(new_offer(101, "FLATX", value, &["p1"]))
                        .await
                })
            })
            .collect();

        for handle in handles {
            handle.await??;
        }

        let offers = store.offers_for(RestaurantId::new(101)).await?;

        assert_eq!(offers.len(), 16);
        assert!(
            offers.windows(2).all(|pair| match pair {
                [a, b] => a.sequence < b.sequence,
                _ => true,
            }),
            "offers must be in registration order"
        );

        Ok(())
    }
}
