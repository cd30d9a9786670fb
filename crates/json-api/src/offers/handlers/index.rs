//! Offer Index Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use platter::offers::RestaurantId;
use platter_app::domain::offers::records::OfferRecord;

use crate::{extensions::*, offers::errors::into_status_error, state::State};

/// Offer Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OfferResponse {
    pub uuid: Uuid,

    pub restaurant_id: i64,

    /// `FLATX` or `FLAT%`
    pub offer_type: String,

    pub offer_value: u64,

    /// Targeted segments in lexical order
    pub customer_segment: Vec<String>,

    /// Registration time
    pub created_at: String,
}

impl From<OfferRecord> for OfferResponse {
    fn from(record: OfferRecord) -> Self {
        OfferResponse {
            uuid: record.uuid.into_uuid(),
            restaurant_id: record.offer.restaurant.get(),
            offer_type: record.offer.discount.offer_type().wire_name().to_string(),
            offer_value: record.offer.discount.value(),
            customer_segment: record.offer.segments.sorted_labels(),
            created_at: record.created_at.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OffersResponse {
    /// Offers in registration order
    pub offers: Vec<OfferResponse>,
}

/// Offer Index Handler
///
/// Returns every offer registered for a restaurant, oldest first.
#[endpoint(
    tags("offers"),
    summary = "List Restaurant Offers",
    responses(
        (status_code = StatusCode::OK, description = "Offers found"),
        (status_code = StatusCode::NOT_FOUND, description = "No offers registered"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    restaurant_id: PathParam<i64>,
    depot: &mut Depot,
) -> Result<Json<OffersResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let offers = state
        .app
        .offers
        .list_offers(RestaurantId::new(restaurant_id.into_inner()))
        .await
        .map_err(into_status_error)?;

    Ok(Json(OffersResponse {
        offers: offers.into_iter().map(Into::into).collect(),
    }))
}
