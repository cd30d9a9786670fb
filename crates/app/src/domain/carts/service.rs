//! Cart offers service.

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    sync::Arc,
};

use async_trait::async_trait;
use mockall::automock;
use platter::{
    offers::{RestaurantId, UserId},
    selection::select_best,
};
use tracing::{Span, debug, field::Empty, warn};

use crate::domain::{
    carts::{
        CartOffersServiceError,
        models::{AppliedOffer, SegmentFailurePolicy},
    },
    offers::OfferStore,
    segments::SegmentResolver,
};

/// Prices carts against the offers in an [`OfferStore`].
#[derive(Clone)]
pub struct StoreCartOffersService {
    resolver: Arc<dyn SegmentResolver>,
    store: Arc<dyn OfferStore>,
    policy: SegmentFailurePolicy,
}

impl StoreCartOffersService {
    #[must_use]
    pub fn new(
        resolver: Arc<dyn SegmentResolver>,
        store: Arc<dyn OfferStore>,
        policy: SegmentFailurePolicy,
    ) -> Self {
        Self {
            resolver,
            store,
            policy,
        }
    }
}

impl Debug for StoreCartOffersService {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("StoreCartOffersService")
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl CartOffersService for StoreCartOffersService {
    #[tracing::instrument(
        name = "carts.service.apply_offer",
        skip(self),
        fields(
            segment = Empty,
            candidate_count = Empty,
            discount = Empty,
        ),
        err
    )]
    async fn apply_offer(
        &self,
        user: UserId,
        restaurant: RestaurantId,
        cart_value: i64,
    ) -> Result<AppliedOffer, CartOffersServiceError> {
        let cart_value = u64::try_from(cart_value)
            .map_err(|_e| CartOffersServiceError::InvalidRequest(cart_value))?;

        let segment = match self.resolver.resolve(user).await {
            Ok(segment) => segment,
            Err(error) if self.policy == SegmentFailurePolicy::TreatAsNoSegment => {
                warn!(%error, "segment lookup failed, continuing without a segment");

                None
            }
            Err(error) => return Err(error.into()),
        };

        if let Some(segment) = &segment {
            Span::current().record("segment", segment.as_str());
        }

        let candidates = self
            .store
            .candidates_for(restaurant, segment.clone())
            .await?;

        Span::current().record("candidate_count", candidates.len());

        let Some(selection) = select_best(&candidates, cart_value)? else {
            debug!("no applicable offers");

            return Ok(AppliedOffer::unchanged(cart_value, segment));
        };

        Span::current().record("discount", selection.discount);

        Ok(AppliedOffer {
            original_cart_value: cart_value,
            cart_value: selection.cart_value,
            discount: selection.discount,
            offer: Some(selection.offer.uuid),
            segment,
        })
    }
}

#[automock]
#[async_trait]
pub trait CartOffersService: Send + Sync {
    /// Apply the best offer for the user's segment to a cart. Never writes.
    async fn apply_offer(
        &self,
        user: UserId,
        restaurant: RestaurantId,
        cart_value: i64,
    ) -> Result<AppliedOffer, CartOffersServiceError>;
}
