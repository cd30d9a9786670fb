//! Create Offer Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use uuid::Uuid;

use platter::offers::RestaurantId;
use platter_app::domain::offers::{data::NewOffer, records::OfferUuid};

use crate::{extensions::*, offers::errors::into_status_error, state::State};

/// Create Offer Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateOfferRequest {
    /// Owning restaurant
    pub restaurant_id: i64,

    /// `FLATX` (flat amount) or `FLAT%` (flat percentage)
    pub offer_type: String,

    /// Currency units, or a percentage between 0 and 100
    pub offer_value: i64,

    /// Customer segments the offer targets
    pub customer_segment: Vec<String>,
}

impl From<CreateOfferRequest> for NewOffer {
    fn from(request: CreateOfferRequest) -> Self {
        NewOffer {
            uuid: OfferUuid::new(),
            restaurant: RestaurantId::new(request.restaurant_id),
            offer_type: request.offer_type,
            offer_value: request.offer_value,
            segments: SmallVec::from_vec(request.customer_segment),
        }
    }
}

/// Offer Created Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OfferCreatedResponse {
    pub response_msg: String,

    /// Registered offer UUID
    pub uuid: Uuid,
}

/// Create Offer Handler
///
/// Registers an offer. Offers already registered for the restaurant stay live.
#[endpoint(
    tags("offers"),
    summary = "Register Offer",
    responses(
        (status_code = StatusCode::OK, description = "Offer registered"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid offer"),
        (status_code = StatusCode::CONFLICT, description = "Offer already exists"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateOfferRequest>,
    depot: &mut Depot,
) -> Result<Json<OfferCreatedResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let record = state
        .app
        .offers
        .register_offer(json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(OfferCreatedResponse {
        response_msg: "success".to_string(),
        uuid: record.uuid.into_uuid(),
    }))
}
