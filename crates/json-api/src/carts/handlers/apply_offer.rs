//! Apply Offer Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use platter::offers::{RestaurantId, UserId};

use crate::{carts::errors::into_status_error, extensions::*, state::State};

/// Apply Offer Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ApplyOfferRequest {
    /// Cart value in whole currency units
    pub cart_value: i64,

    pub user_id: i64,

    pub restaurant_id: i64,
}

/// Apply Offer Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ApplyOfferResponse {
    /// Cart value after the best applicable offer
    pub cart_value: u64,
}

/// Apply Offer Handler
///
/// Prices a cart with the single best offer for the user's segment.
#[endpoint(
    tags("carts"),
    summary = "Apply Best Offer",
    responses(
        (status_code = StatusCode::OK, description = "Cart priced"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid cart"),
        (status_code = StatusCode::BAD_GATEWAY, description = "Segment service unavailable"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<ApplyOfferRequest>,
    depot: &mut Depot,
) -> Result<Json<ApplyOfferResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request = json.into_inner();

    let applied = state
        .app
        .carts
        .apply_offer(
            UserId::new(request.user_id),
            RestaurantId::new(request.restaurant_id),
            request.cart_value,
        )
        .await
        .map_err(into_status_error)?;

    Ok(Json(ApplyOfferResponse {
        cart_value: applied.cart_value,
    }))
}
