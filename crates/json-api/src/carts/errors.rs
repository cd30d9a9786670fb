//! Cart Errors

use salvo::http::StatusError;
use tracing::{error, warn};

use platter_app::domain::carts::CartOffersServiceError;

pub(crate) fn into_status_error(error: CartOffersServiceError) -> StatusError {
    match error {
        CartOffersServiceError::InvalidRequest(cart_value) => StatusError::bad_request()
            .brief("Invalid cart")
            .detail(format!("cart value must not be negative, got {cart_value}")),
        CartOffersServiceError::SegmentLookup(source) => {
            warn!("segment lookup failed: {source}");

            StatusError::bad_gateway().brief("Segment service unavailable")
        }
        CartOffersServiceError::Offers(source) => {
            error!("failed to load offers: {source}");

            StatusError::internal_server_error()
        }
        CartOffersServiceError::Discount(source) => {
            error!("failed to compute discount: {source}");

            StatusError::internal_server_error()
        }
    }
}
