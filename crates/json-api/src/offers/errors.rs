//! Offer Errors

use salvo::http::StatusError;
use tracing::error;

use platter_app::domain::offers::OffersServiceError;

pub(crate) fn into_status_error(error: OffersServiceError) -> StatusError {
    match error {
        OffersServiceError::InvalidOffer(reason) => StatusError::bad_request()
            .brief("Invalid offer")
            .detail(reason.to_string()),
        OffersServiceError::InvalidData => StatusError::bad_request().brief("Invalid offer"),
        OffersServiceError::AlreadyExists => StatusError::conflict().brief("Offer already exists"),
        OffersServiceError::NotFound => {
            StatusError::not_found().brief("No offers registered for restaurant")
        }
        OffersServiceError::Sql(source) => {
            error!("offer storage failed: {source}");

            StatusError::internal_server_error()
        }
    }
}
